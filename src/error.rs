//! Error types for the codec.

use thiserror::Error;

/// Errors returned by alphabet lookup, encoding and decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The numeric alphabet selector does not name a known table.
    #[error("invalid alphabet selector: {0}")]
    InvalidAlphabet(u8),

    /// The alphabet name could not be parsed.
    #[error("unknown alphabet name: {0:?}")]
    UnknownAlphabet(String),

    /// A character of the input is not part of the alphabet.
    #[error("invalid base58 character {character:?} at byte {index}")]
    InvalidFormat { character: char, index: usize },

    /// Double-SHA256 of the payload does not match the trailing checksum.
    #[error("invalid checksum: expected {expected:02x?}, got {actual:02x?}")]
    InvalidChecksum { expected: [u8; 4], actual: [u8; 4] },

    /// Decoded output is too short to carry a checksum.
    #[error("decoded length {len} is shorter than the 4-byte checksum")]
    InvalidLength { len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
