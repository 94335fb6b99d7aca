//! Mint authorization orchestration
//!
//! [`MintSigner`] is the public entry point: constructed once from a
//! [`SignerConfig`], it issues [`MintAuthorization`] records on demand. The
//! whole pipeline is CPU-bound and synchronous (nonce, hash, sign); concurrent
//! calls are independent and need no locking.
//!
//! # Examples
//!
//! ```
//! use mint_authz::{MintSigner, SignerConfig};
//!
//! # fn example() -> mint_authz::Result<()> {
//! let config = SignerConfig::new(
//!     "0x0000000000000000000000000000000000000000000000000000000000000001",
//!     "0x2222222222222222222222222222222222222222",
//! );
//! let signer = MintSigner::new(config)?;
//!
//! let authorization =
//!     signer.authorize("0x1111111111111111111111111111111111111111", "ipfs://abc")?;
//! println!("{}", authorization.to_json()?);
//! # Ok(())
//! # }
//! ```

use crate::config::SignerConfig;
use crate::crypto::{hash, signature};
use crate::nonce::{NonceSource, RandomNonceSource};
use crate::types::{AuthorizationRequest, MintAuthorization};
use crate::{AuthzError, Result};
use ethereum_types::Address;
use secp256k1::SecretKey;
use std::str::FromStr;

/// Off-chain authority issuing single-use mint authorizations
pub struct MintSigner {
    /// Authority signing key, never logged or serialized
    secret_key: SecretKey,
    /// Address the on-chain verifier recovers from issued signatures
    signer_address: Address,
    /// NFT contract every authorization is bound to
    contract_address: Address,
    /// Randomness source for per-authorization nonces
    nonce_source: Box<dyn NonceSource>,
}

impl std::fmt::Debug for MintSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MintSigner")
            .field("signer_address", &self.signer_address)
            .field("contract_address", &self.contract_address)
            .finish()
    }
}

impl MintSigner {
    /// Create a signer from configuration
    ///
    /// The key and contract address are parsed up front so that bad
    /// configuration fails here rather than on the first authorization.
    pub fn new(config: SignerConfig) -> Result<Self> {
        Self::with_nonce_source(config, Box::new(RandomNonceSource))
    }

    /// Create a signer with an injected nonce source
    pub fn with_nonce_source(
        config: SignerConfig,
        nonce_source: Box<dyn NonceSource>,
    ) -> Result<Self> {
        config.validate()?;

        let secret_key = signature::parse_private_key(&config.private_key)?;
        let contract_address = Address::from_str(config.contract_address.trim())
            .map_err(|_| AuthzError::invalid_address("Invalid contract address"))?;
        let signer_address = signature::address_from_private_key(&secret_key);

        Ok(Self {
            secret_key,
            signer_address,
            contract_address,
            nonce_source,
        })
    }

    /// Address the on-chain verifier must trust as the minting authority
    pub fn signer_address(&self) -> Address {
        self.signer_address
    }

    /// Contract the issued authorizations are bound to
    pub fn contract_address(&self) -> Address {
        self.contract_address
    }

    /// Issue a mint authorization for (recipient, token URI)
    ///
    /// A malformed recipient is rejected before any hashing or signing.
    /// Stateless apart from drawing a fresh nonce; tracking nonce uniqueness
    /// (database record or on-chain consumption check) is the caller's
    /// responsibility.
    pub fn authorize(&self, recipient: &str, token_uri: &str) -> Result<MintAuthorization> {
        let recipient_address = Address::from_str(recipient.trim()).map_err(|_| {
            AuthzError::invalid_address(format!("Invalid recipient address: {}", recipient))
        })?;

        let nonce = hex::encode(self.nonce_source.generate_nonce());
        let digest = hash::mint_message_hash(
            recipient_address,
            token_uri,
            &nonce,
            self.contract_address,
        );
        let sig = signature::sign_message_hash(digest, &self.secret_key)?;

        tracing::debug!(
            "Issued mint authorization for {:?} (nonce {})",
            recipient_address,
            nonce
        );

        Ok(MintAuthorization {
            uri: token_uri.to_string(),
            nonce,
            hash: format!("0x{}", hex::encode(digest.as_bytes())),
            signature: sig,
        })
    }

    /// Issue an authorization for a caller-supplied request record
    pub fn authorize_request(&self, request: &AuthorizationRequest) -> Result<MintAuthorization> {
        self.authorize(&request.recipient, &request.token_uri)
    }
}
