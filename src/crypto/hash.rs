//! Packed message hashing
//!
//! Implements the `soliditySha3`-style tightly packed Keccak-256 hash the
//! on-chain claim contract recomputes before signature recovery. The packing
//! is a wire-format contract shared with that contract: (recipient address,
//! token URI, nonce, contract address), each field in its raw minimal-width
//! encoding, in exactly that order. It must not be changed on one side only.

use ethereum_types::{Address, H256};

/// Keccak-256 hash function
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    use sha3::{Digest, Keccak256};
    Keccak256::digest(data).into()
}

/// Compute the packed mint-message hash for (recipient, uri, nonce, contract)
///
/// Equivalent to Solidity's
/// `keccak256(abi.encodePacked(recipient, uri, nonce, contract))`: the
/// addresses contribute their raw 20 bytes, the strings their raw UTF-8 bytes,
/// with no padding or length prefixes. Pure function; identical inputs always
/// yield the identical digest.
pub fn mint_message_hash(recipient: Address, uri: &str, nonce: &str, contract: Address) -> H256 {
    let mut data = Vec::new();
    data.extend_from_slice(recipient.as_bytes());
    data.extend_from_slice(uri.as_bytes());
    data.extend_from_slice(nonce.as_bytes());
    data.extend_from_slice(contract.as_bytes());

    H256::from_slice(&keccak256(&data))
}
