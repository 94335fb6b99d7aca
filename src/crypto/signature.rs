//! Recoverable ECDSA signing and signer recovery

use super::hash::keccak256;
use crate::{AuthzError, Result};
use ethereum_types::{Address, H256};
use k256::ecdsa::{RecoveryId, Signature as K256Signature, VerifyingKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use secp256k1::{Message, Secp256k1, SecretKey};

/// Prefix applied to a digest before signing, per the `eth_sign` convention
const PERSONAL_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Wrap a 32-byte digest with the Ethereum personal-message prefix and rehash
///
/// Both signing and recovery apply this wrapper, matching what the on-chain
/// verifier expects from `eth_sign`-style signatures.
pub fn personal_message_hash(digest: H256) -> H256 {
    let mut data = Vec::new();
    data.extend_from_slice(PERSONAL_MESSAGE_PREFIX);
    data.extend_from_slice(digest.as_bytes());

    H256::from_slice(&keccak256(&data))
}

/// Parse a hex private key (with or without 0x prefix) into a secret key
pub fn parse_private_key(private_key: &str) -> Result<SecretKey> {
    let key_bytes = hex::decode(private_key.trim_start_matches("0x"))
        .map_err(|_| AuthzError::signing("Invalid hex private key"))?;

    SecretKey::from_slice(&key_bytes).map_err(|_| AuthzError::signing("Invalid private key"))
}

/// Sign a mint-message digest with the authority's private key
///
/// The digest is wrapped with the personal-message prefix before signing.
/// Returns the 65-byte `r || s || v` signature hex encoded with a 0x prefix,
/// where `v` is 27 or 28. Signing is deterministic (RFC 6979), so identical
/// (digest, key) pairs always produce the identical signature.
pub fn sign_message_hash(digest: H256, secret_key: &SecretKey) -> Result<String> {
    let prefixed = personal_message_hash(digest);

    let secp = Secp256k1::new();
    let message = Message::from_digest_slice(prefixed.as_bytes())
        .map_err(|_| AuthzError::signing("Invalid message digest"))?;

    let signature = secp.sign_ecdsa_recoverable(&message, secret_key);
    let (recovery_id, serialized) = signature.serialize_compact();

    let mut sig_bytes = [0u8; 65];
    sig_bytes[0..64].copy_from_slice(&serialized);
    sig_bytes[64] = 27 + recovery_id.to_i32() as u8;

    Ok(format!("0x{}", hex::encode(sig_bytes)))
}

/// Recover the signer address from a digest and a recoverable signature
///
/// Mirrors the on-chain `ecrecover` path: the same personal-message prefix is
/// applied before recovery. Accepts `v` as either 0/1 or 27/28.
pub fn recover_signer(digest: H256, signature: &str) -> Result<Address> {
    let sig_bytes = hex::decode(signature.trim_start_matches("0x"))
        .map_err(|_| AuthzError::invalid_signature("Invalid hex signature"))?;

    if sig_bytes.len() != 65 {
        return Err(AuthzError::invalid_signature("Signature must be 65 bytes"));
    }

    let v = sig_bytes[64];
    let v = if v >= 27 { v - 27 } else { v };
    let recovery_id = RecoveryId::try_from(v)
        .map_err(|_| AuthzError::invalid_signature("Invalid recovery ID"))?;

    let k256_sig = K256Signature::try_from(&sig_bytes[0..64])
        .map_err(|_| AuthzError::invalid_signature("Invalid signature format"))?;

    let prefixed = personal_message_hash(digest);
    let verifying_key =
        VerifyingKey::recover_from_prehash(prefixed.as_bytes(), &k256_sig, recovery_id)
            .map_err(|_| AuthzError::invalid_signature("Failed to recover public key"))?;

    ethereum_address_from_pubkey(&verifying_key)
}

/// Check a signature against the expected signer address
pub fn verify_signature(digest: H256, signature: &str, expected: Address) -> Result<bool> {
    Ok(recover_signer(digest, signature)? == expected)
}

/// Derive the Ethereum address controlled by a secret key
pub fn address_from_private_key(secret_key: &SecretKey) -> Address {
    let secp = Secp256k1::new();
    let public_key = secret_key.public_key(&secp);
    let uncompressed = public_key.serialize_uncompressed();

    address_from_uncompressed(&uncompressed[1..])
}

/// Convert a recovered public key to an Ethereum address
fn ethereum_address_from_pubkey(pubkey: &VerifyingKey) -> Result<Address> {
    let point = pubkey.to_encoded_point(false);
    let point_bytes = point.as_bytes();
    if point_bytes.len() != 65 {
        return Err(AuthzError::invalid_signature("Invalid public key length"));
    }

    Ok(address_from_uncompressed(&point_bytes[1..]))
}

/// Keccak-hash the 64-byte uncompressed point and take the last 20 bytes
fn address_from_uncompressed(pubkey: &[u8]) -> Address {
    let pubkey_hash = keccak256(pubkey);

    let mut address_bytes = [0u8; 20];
    address_bytes.copy_from_slice(&pubkey_hash[12..]);

    Address::from(address_bytes)
}
