//! Nonce generation
//!
//! Every authorization carries a fresh 128-bit random nonce so that a signed
//! claim can only be consumed once. The component itself is stateless: tracking
//! nonce uniqueness (database record or on-chain consumption check) is the
//! caller's responsibility.

use rand::RngCore;

/// Byte length of a mint nonce (hex encodes to 32 characters)
pub const NONCE_LEN: usize = 16;

/// Source of per-authorization nonces
///
/// The default [`RandomNonceSource`] draws from the OS-seeded thread RNG.
/// Tests inject a fixed source to make authorizations reproducible.
pub trait NonceSource: Send + Sync {
    /// Produce 16 fresh random bytes
    fn generate_nonce(&self) -> [u8; NONCE_LEN];
}

/// Cryptographically secure nonce source backed by [`rand::thread_rng`]
///
/// Entropy-source failure panics rather than degrading to weak randomness.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomNonceSource;

impl NonceSource for RandomNonceSource {
    fn generate_nonce(&self) -> [u8; NONCE_LEN] {
        let mut bytes = [0u8; NONCE_LEN];
        rand::thread_rng().fill_bytes(&mut bytes);
        bytes
    }
}
