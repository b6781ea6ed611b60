//! Base58Check checksum: first four bytes of double-SHA256.
use sha2::{Digest, Sha256};

/// Length of the checksum appended by `check_encode`.
pub const CHECKSUM_LEN: usize = 4;

/// Computes the checksum of `data`.
#[must_use]
#[inline]
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash1 = Sha256::digest(data);
    let hash2 = Sha256::digest(hash1);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&hash2[..CHECKSUM_LEN]);
    out
}
