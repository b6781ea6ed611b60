//! Base58 and Base58Check codec over the Bitcoin, Ripple and Flickr alphabets.
//!
//! ```
//! use b58alpha::{AlphabetId, Codec};
//!
//! let codec = Codec::new(AlphabetId::Bitcoin);
//! assert_eq!(codec.encode(&[0x61]).unwrap(), "2g");
//! assert_eq!(codec.check_decode("C2dGTwc").unwrap(), vec![0x61]);
//! ```

mod alphabet;
mod checksum;
mod decode;
mod encode;
mod error;
mod limbs;

pub use alphabet::{lookup, Alphabet, AlphabetId, BASE, BITCOIN, FLICKR, RIPPLE};
pub use checksum::{checksum, CHECKSUM_LEN};
pub use decode::{check_decode, decode};
pub use encode::{check_encode, encode, max_encoded_len};
pub use error::{Error, Result};

/// A codec bound to one alphabet selector.
///
/// Holds nothing but the selector, so it is `Copy` and can be shared freely
/// between threads. The selector is resolved on every call; an unknown one
/// surfaces as [`Error::InvalidAlphabet`] from all four operations.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codec {
    selector: u8,
}

impl Codec {
    #[must_use]
    pub const fn new(id: AlphabetId) -> Self {
        Self {
            selector: id as u8,
        }
    }

    /// Binds to a raw selector (0 = bitcoin, 1 = ripple, 2 = flickr) without
    /// validating it.
    #[must_use]
    pub const fn from_index(selector: u8) -> Self {
        Self { selector }
    }

    #[must_use]
    pub fn selector(&self) -> u8 {
        self.selector
    }

    /// # Errors
    /// - `InvalidAlphabet` if the selector is unknown.
    pub fn alphabet(&self) -> Result<&'static Alphabet> {
        lookup(self.selector)
    }

    /// # Errors
    /// - `InvalidAlphabet` if the selector is unknown.
    pub fn encode(&self, input: &[u8]) -> Result<String> {
        Ok(encode(input, self.alphabet()?))
    }

    /// # Errors
    /// - `InvalidAlphabet` if the selector is unknown.
    pub fn check_encode(&self, input: &[u8]) -> Result<String> {
        Ok(check_encode(input, self.alphabet()?))
    }

    /// # Errors
    /// - `InvalidAlphabet` if the selector is unknown.
    /// - `InvalidFormat` on a character outside the alphabet.
    pub fn decode(&self, input: &str) -> Result<Vec<u8>> {
        decode(input, self.alphabet()?)
    }

    /// # Errors
    /// - `InvalidAlphabet` if the selector is unknown.
    /// - `InvalidFormat` on a character outside the alphabet.
    /// - `InvalidLength` if fewer than 4 bytes decode.
    /// - `InvalidChecksum` if the trailing checksum does not match.
    pub fn check_decode(&self, input: &str) -> Result<Vec<u8>> {
        check_decode(input, self.alphabet()?)
    }
}

impl From<AlphabetId> for Codec {
    fn from(id: AlphabetId) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn codec_default_is_bitcoin() {
        let codec = Codec::default();
        assert_eq!(codec.alphabet().unwrap().id(), AlphabetId::Bitcoin);
        assert_eq!(codec.encode(&hex!("61")), Ok("2g".to_owned()));
        assert_eq!(codec.check_encode(&hex!("61")), Ok("C2dGTwc".to_owned()));
    }

    #[test]
    fn codec_per_alphabet() {
        let data = hex!("10c8511e");
        let cases = [
            (AlphabetId::Bitcoin, "Rt5zm", "3op3iuGMmhs"),
            (AlphabetId::Ripple, "Rtnzm", "soFs5uGMm61"),
            (AlphabetId::Flickr, "qT5ZL", "3NP3HUgmLGS"),
        ];
        for (id, enc, check_enc) in cases {
            let codec = Codec::from(id);
            assert_eq!(codec, Codec::from_index(id.index()));
            assert_eq!(codec.encode(&data).unwrap(), enc);
            assert_eq!(codec.check_encode(&data).unwrap(), check_enc);
            assert_eq!(codec.decode(enc).unwrap(), data.to_vec());
            assert_eq!(codec.check_decode(check_enc).unwrap(), data.to_vec());
        }
    }

    #[test]
    fn codec_invalid_alphabet() {
        let codec = Codec::from_index(3);
        assert_eq!(codec.selector(), 3);
        assert_eq!(codec.encode(b"test"), Err(Error::InvalidAlphabet(3)));
        assert_eq!(codec.check_encode(b"test"), Err(Error::InvalidAlphabet(3)));
        assert_eq!(codec.decode("test"), Err(Error::InvalidAlphabet(3)));
        assert_eq!(codec.check_decode("test"), Err(Error::InvalidAlphabet(3)));
    }

    #[test]
    fn codec_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<Codec>();

        let codec = Codec::new(AlphabetId::Ripple);
        let handles: Vec<_> = (0u8..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let data = vec![i; 16];
                    let enc = codec.check_encode(&data).unwrap();
                    assert_eq!(codec.check_decode(&enc).unwrap(), data);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
