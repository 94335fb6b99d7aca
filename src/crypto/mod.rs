//! Cryptographic primitives for mint authorization
//!
//! This module provides the two primitives the signer is built on: the packed
//! Keccak-256 message hash shared with the on-chain verifier, and recoverable
//! secp256k1 ECDSA signing.
//!
//! # Architecture
//!
//! The crypto module is organized as follows:
//! - [`hash`] - `soliditySha3`-style packed Keccak-256 hashing
//! - [`signature`] - Recoverable ECDSA signing, signer recovery and address
//!   derivation
//!
//! # Examples
//!
//! ## Hashing a mint message
//!
//! ```
//! use mint_authz::crypto::hash::mint_message_hash;
//! use ethereum_types::Address;
//! use std::str::FromStr;
//!
//! # fn example() -> mint_authz::Result<()> {
//! let digest = mint_message_hash(
//!     Address::from_str("0x1111111111111111111111111111111111111111")?,
//!     "ipfs://abc",
//!     "deadbeefdeadbeefdeadbeefdeadbeef",
//!     Address::from_str("0x2222222222222222222222222222222222222222")?,
//! );
//! println!("Digest: {:?}", digest);
//! # Ok(())
//! # }
//! ```
//!
//! ## Signing and recovering
//!
//! ```
//! use mint_authz::crypto::signature::{
//!     parse_private_key, recover_signer, sign_message_hash,
//! };
//! use ethereum_types::H256;
//!
//! # fn example() -> mint_authz::Result<()> {
//! let key = parse_private_key(
//!     "0x0000000000000000000000000000000000000000000000000000000000000001",
//! )?;
//! let digest = H256::repeat_byte(0xab);
//!
//! let signature = sign_message_hash(digest, &key)?;
//! let signer = recover_signer(digest, &signature)?;
//! println!("Recovered signer: {:?}", signer);
//! # Ok(())
//! # }
//! ```

pub mod hash;
pub mod signature;


// Re-export commonly used items
pub use hash::{keccak256, mint_message_hash};
pub use signature::{
    address_from_private_key, parse_private_key, recover_signer, sign_message_hash,
    verify_signature,
};
