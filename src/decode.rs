//! Base58 decoding module.
//! Any of the three alphabets; optional double-SHA256 checksum validation.
//! Symbols are mapped through the alphabet's precomputed reverse table and
//! folded into u64 limbs by Horner's rule (acc = acc * 58 + digit), which
//! gives the same value as summing digit * 58^position from the right.
//! Each leading zero-symbol restores one leading zero byte.

use crate::alphabet::{Alphabet, BASE};
use crate::checksum::{checksum, CHECKSUM_LEN};
use crate::error::{Error, Result};
use crate::limbs::Limbs;

/// Decodes a Base58 string (no checksum).
///
/// # Errors
/// - `InvalidFormat`: a character not in `alphabet`, reported with its byte
///   offset. The first offending character wins.
pub fn decode(input: &str, alphabet: &Alphabet) -> Result<Vec<u8>> {
    let zero = alphabet.zero_symbol();
    let zeros = input.chars().take_while(|&ch| ch == zero).count();
    // Each symbol carries log2(58) < 6 bits.
    let mut num = Limbs::with_bits(input.len() * 6);
    for (index, character) in input.char_indices() {
        let Some(digit) = alphabet.digit(character) else {
            log::debug!(
                "invalid {} base58 character {character:?} at byte {index}",
                alphabet.id()
            );
            return Err(Error::InvalidFormat { character, index });
        };
        num.mul_add_small(BASE as u64, u64::from(digit));
    }
    let digits = num.to_be_bytes();
    let mut output = Vec::with_capacity(zeros + digits.len());
    output.resize(zeros, 0u8);
    output.extend_from_slice(&digits);
    log::trace!(
        "decoded {} {} symbols to {} bytes",
        input.len(),
        alphabet.id(),
        output.len()
    );
    Ok(output)
}

/// Decodes a Base58Check string and strips the trailing checksum.
///
/// # Errors
/// - `InvalidFormat`: as for [`decode`]; takes precedence over checksum errors.
/// - `InvalidLength`: fewer than 4 decoded bytes, so there is no checksum.
/// - `InvalidChecksum`: double-SHA256 of the payload does not match.
pub fn check_decode(input: &str, alphabet: &Alphabet) -> Result<Vec<u8>> {
    let mut output = decode(input, alphabet)?;
    verify_checksum(&output)?;
    output.truncate(output.len() - CHECKSUM_LEN);
    Ok(output)
}

fn verify_checksum(decoded: &[u8]) -> Result<()> {
    let Some(split) = decoded.len().checked_sub(CHECKSUM_LEN) else {
        log::debug!("decoded {} bytes, too short for a checksum", decoded.len());
        return Err(Error::InvalidLength { len: decoded.len() });
    };
    let (payload, tail) = decoded.split_at(split);
    let expected = checksum(payload);
    let mut actual = [0u8; CHECKSUM_LEN];
    actual.copy_from_slice(tail);
    if expected != actual {
        log::debug!("checksum mismatch: expected {expected:02x?}, got {actual:02x?}");
        return Err(Error::InvalidChecksum { expected, actual });
    }
    Ok(())
}
