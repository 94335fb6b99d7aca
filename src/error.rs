//! Error types for mint authorization signing

use thiserror::Error;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, AuthzError>;

/// Errors produced while issuing or verifying a mint authorization
#[derive(Debug, Error)]
pub enum AuthzError {
    /// A required configuration value is missing or unusable
    #[error("Configuration error: {0}")]
    Config(String),

    /// A supplied value is not a valid Ethereum address
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Signature bytes are malformed or public-key recovery failed
    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    /// The signing primitive rejected its key material
    #[error("Signing failed: {0}")]
    Signing(String),

    /// JSON serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Hex decoding failure while parsing an address or hash
    #[error("Hex decoding error: {0}")]
    Hex(#[from] rustc_hex::FromHexError),
}

impl AuthzError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an invalid address error
    pub fn invalid_address(message: impl Into<String>) -> Self {
        Self::InvalidAddress(message.into())
    }

    /// Create an invalid signature error
    pub fn invalid_signature(message: impl Into<String>) -> Self {
        Self::InvalidSignature(message.into())
    }

    /// Create a signing error
    pub fn signing(message: impl Into<String>) -> Self {
        Self::Signing(message.into())
    }
}
