//! Base58 encoding.
//! Leading zero bytes map to the alphabet's zero-symbol, one for one.
//! Bytes are packed into u64 limbs and repeatedly divided by 58.
use crate::alphabet::{Alphabet, BASE};
use crate::checksum::{checksum, CHECKSUM_LEN};
use crate::limbs::Limbs;

/// Upper bound on the encoded length of `len` bytes (log(256)/log(58) ~ 1.38).
#[must_use]
#[inline]
pub fn max_encoded_len(len: usize) -> usize {
    len * 138 / 100 + 1
}

/// Encodes `input` with `alphabet`.
#[must_use]
pub fn encode(input: &[u8], alphabet: &Alphabet) -> String {
    let zeros = input.iter().take_while(|&&b| b == 0).count();
    let mut num = Limbs::from_be_bytes(&input[zeros..]);
    let mut output = Vec::with_capacity(max_encoded_len(input.len()));
    while !num.is_zero() {
        #[allow(clippy::cast_possible_truncation)]
        let digit = num.divmod_small(BASE as u64) as u8;
        output.push(alphabet.symbol_byte(digit));
    }
    output.extend(std::iter::repeat(alphabet.symbol_byte(0)).take(zeros));
    output.reverse();
    log::trace!(
        "encoded {} bytes to {} {} symbols",
        input.len(),
        output.len(),
        alphabet.id()
    );
    // Alphabet symbols are ASCII.
    output.into_iter().map(char::from).collect()
}

/// Encodes `input` followed by its 4-byte double-SHA256 checksum.
#[must_use]
pub fn check_encode(input: &[u8], alphabet: &Alphabet) -> String {
    let mut payload = Vec::with_capacity(input.len() + CHECKSUM_LEN);
    payload.extend_from_slice(input);
    payload.extend_from_slice(&checksum(input));
    encode(&payload, alphabet)
}
