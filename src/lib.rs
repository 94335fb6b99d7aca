//! # Mint Authorization Signer
//!
//! Off-chain signing authority for NFT marketplace mints: given a recipient
//! address and a token URI, produce a **single-use, replay-resistant**
//! authorization that the on-chain claim contract verifies by recomputing the
//! packed hash and recovering the authority address from the signature.
//!
//! ## Features
//!
//! - 🔒 **Replay resistance**: every authorization carries a fresh 128-bit random nonce
//! - ⛓️ **On-chain compatible**: `soliditySha3`-style packed Keccak-256 hashing and
//!   `eth_sign`-style recoverable secp256k1 signatures
//! - 🧩 **Explicit dependencies**: key, contract address and randomness source are
//!   injected at construction, making the signer testable with deterministic fakes
//! - 🧪 **Deterministic signing**: RFC 6979 nonces make signatures reproducible for
//!   fixed inputs
//!
//! ## Quick Start
//!
//! ```
//! use mint_authz::{MintSigner, SignerConfig};
//!
//! fn main() -> mint_authz::Result<()> {
//!     let config = SignerConfig::new(
//!         "0x0000000000000000000000000000000000000000000000000000000000000001",
//!         "0x2222222222222222222222222222222222222222",
//!     );
//!     let signer = MintSigner::new(config)?;
//!
//!     let authorization =
//!         signer.authorize("0x1111111111111111111111111111111111111111", "ipfs://abc")?;
//!
//!     // {"uri":"ipfs://abc","nonce":"…","hash":"0x…","signature":"0x…"}
//!     println!("{}", authorization.to_json()?);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`config`**: explicit signer configuration (key, contract address)
//! - **`nonce`**: injectable nonce source backed by a CSPRNG
//! - **`crypto`**: packed Keccak-256 hashing and recoverable ECDSA signing
//! - **`signer`**: the [`MintSigner`] orchestrator
//! - **`types`**: request and authorization records
//! - **`error`**: error taxonomy
//!
//! The component is stateless and CPU-bound; concurrent `authorize` calls are
//! independent and safe without locking. Nonce uniqueness tracking and secure
//! key storage are the embedding service's responsibility.

pub mod config;
pub mod crypto;
pub mod error;
pub mod nonce;
pub mod signer;
pub mod types;

// Re-exports for convenience
pub use config::SignerConfig;
pub use error::{AuthzError, Result};
pub use nonce::{NonceSource, RandomNonceSource};
pub use signer::MintSigner;
pub use types::{AuthorizationRequest, MintAuthorization};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{mint_message_hash, recover_signer};
    use ethereum_types::{Address, H256};
    use std::str::FromStr;

    #[test]
    fn test_version_constant() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_end_to_end_authorization_verifies() {
        // The full pipeline as the claim contract would check it: re-derive
        // the packed hash from the returned fields, then recover the signer.
        let config = SignerConfig::new(
            "0x0000000000000000000000000000000000000000000000000000000000000002",
            "0x209693Bc6afc0C5328bA36FaF03C514EF312287C",
        );
        let signer = MintSigner::new(config).unwrap();

        let recipient = "0x857b06519E91e3A54538791bDbb0E22373e36b66";
        let authorization = signer.authorize(recipient, "ipfs://token/42").unwrap();

        let rederived = mint_message_hash(
            Address::from_str(recipient).unwrap(),
            &authorization.uri,
            &authorization.nonce,
            signer.contract_address(),
        );
        assert_eq!(
            authorization.hash,
            format!("0x{}", hex::encode(rederived.as_bytes()))
        );

        let digest = H256::from_str(&authorization.hash).unwrap();
        assert_eq!(
            recover_signer(digest, &authorization.signature).unwrap(),
            signer.signer_address()
        );
    }

    #[test]
    fn test_authorization_record_round_trips_as_json() {
        let config = SignerConfig::new(
            "0x0000000000000000000000000000000000000000000000000000000000000001",
            "0x2222222222222222222222222222222222222222",
        );
        let signer = MintSigner::new(config).unwrap();

        let authorization = signer
            .authorize("0x1111111111111111111111111111111111111111", "ipfs://abc")
            .unwrap();
        let parsed = MintAuthorization::from_json(&authorization.to_json().unwrap()).unwrap();

        assert_eq!(parsed, authorization);
    }
}
