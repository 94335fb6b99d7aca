//! Signer configuration
//!
//! The signer takes its dependencies explicitly: a private signing key and the
//! address of the NFT contract authorizations are bound to. Both are required;
//! a missing value is a fatal [`AuthzError::Config`] before any signing is
//! attempted.

use crate::{AuthzError, Result};
use std::env;

/// Environment variable holding the authority's hex private key
pub const ENV_PRIVATE_KEY: &str = "MINT_AUTHZ_PRIVATE_KEY";

/// Environment variable holding the target NFT contract address
pub const ENV_CONTRACT_ADDRESS: &str = "MINT_AUTHZ_CONTRACT";

/// Configuration for the mint authorization signer
#[derive(Clone)]
pub struct SignerConfig {
    /// Hex-encoded secp256k1 private key of the signing authority
    pub private_key: String,
    /// Address of the NFT contract the authorization is bound to
    pub contract_address: String,
}

impl std::fmt::Debug for SignerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignerConfig")
            .field("private_key", &"<redacted>")
            .field("contract_address", &self.contract_address)
            .finish()
    }
}

impl SignerConfig {
    /// Create a new signer configuration
    pub fn new(private_key: impl Into<String>, contract_address: impl Into<String>) -> Self {
        Self {
            private_key: private_key.into(),
            contract_address: contract_address.into(),
        }
    }

    /// Load the configuration from the process environment
    ///
    /// Reads [`ENV_PRIVATE_KEY`] and [`ENV_CONTRACT_ADDRESS`]; either being
    /// absent or empty is a fatal configuration error.
    pub fn from_env() -> Result<Self> {
        let private_key = env::var(ENV_PRIVATE_KEY)
            .map_err(|_| AuthzError::config(format!("{} is not set", ENV_PRIVATE_KEY)))?;
        let contract_address = env::var(ENV_CONTRACT_ADDRESS)
            .map_err(|_| AuthzError::config(format!("{} is not set", ENV_CONTRACT_ADDRESS)))?;

        let config = Self {
            private_key,
            contract_address,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate that all required values are present
    pub fn validate(&self) -> Result<()> {
        if self.private_key.trim().is_empty() {
            return Err(AuthzError::config("signing key must not be empty"));
        }
        if self.contract_address.trim().is_empty() {
            return Err(AuthzError::config("contract address must not be empty"));
        }
        Ok(())
    }
}
