//! Alphabet registry: the three fixed 58-symbol tables and their selectors.
//! Reverse (symbol -> digit) tables are built at compile time.
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Number of symbols in every alphabet.
pub const BASE: usize = 58;

const INVALID: u8 = 0xff;

/// Selector for one of the built-in alphabets.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AlphabetId {
    #[default]
    Bitcoin = 0,
    Ripple = 1,
    Flickr = 2,
}

/// An ordered 58-symbol table. Position 0 is the zero-symbol.
#[derive(Debug)]
pub struct Alphabet {
    id: AlphabetId,
    symbols: &'static [u8; BASE],
    digits: [u8; 128],
}

pub static BITCOIN: Alphabet = Alphabet::new(
    AlphabetId::Bitcoin,
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz",
);

pub static RIPPLE: Alphabet = Alphabet::new(
    AlphabetId::Ripple,
    b"rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz",
);

pub static FLICKR: Alphabet = Alphabet::new(
    AlphabetId::Flickr,
    b"123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ",
);

/// Resolves a numeric selector to its table.
///
/// # Errors
/// - `InvalidAlphabet(selector)` if `selector` is not 0, 1 or 2.
#[inline]
pub fn lookup(selector: u8) -> Result<&'static Alphabet> {
    AlphabetId::try_from(selector).map(AlphabetId::alphabet)
}

impl Alphabet {
    // Panics at compile time on a non-ASCII or repeated symbol.
    #[allow(clippy::cast_possible_truncation)]
    const fn new(id: AlphabetId, symbols: &'static [u8; BASE]) -> Self {
        let mut digits = [INVALID; 128];
        let mut i = 0;
        while i < BASE {
            let ch = symbols[i] as usize;
            assert!(ch < 128, "alphabet symbols must be ASCII");
            assert!(digits[ch] == INVALID, "alphabet symbols must be distinct");
            digits[ch] = i as u8;
            i += 1;
        }
        Self {
            id,
            symbols,
            digits,
        }
    }

    #[must_use]
    pub fn id(&self) -> AlphabetId {
        self.id
    }

    /// The table as a string, in digit order.
    #[must_use]
    pub fn symbols(&self) -> &'static str {
        // The constructor only admits ASCII.
        std::str::from_utf8(self.symbols).unwrap_or_default()
    }

    /// Symbol standing for digit 0 and for each leading zero byte.
    #[must_use]
    pub fn zero_symbol(&self) -> char {
        char::from(self.symbols[0])
    }

    /// Symbol for `digit`, or `None` if `digit >= 58`.
    #[must_use]
    #[inline]
    pub fn symbol(&self, digit: u8) -> Option<char> {
        self.symbols.get(usize::from(digit)).map(|&b| char::from(b))
    }

    /// Digit value of `ch`, or `None` if `ch` is not in this alphabet.
    #[must_use]
    #[inline]
    pub fn digit(&self, ch: char) -> Option<u8> {
        let idx = usize::try_from(u32::from(ch)).ok()?;
        match self.digits.get(idx) {
            Some(&d) if d != INVALID => Some(d),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn symbol_byte(&self, digit: u8) -> u8 {
        self.symbols[usize::from(digit)]
    }
}

impl AlphabetId {
    pub const ALL: [AlphabetId; 3] = [AlphabetId::Bitcoin, AlphabetId::Ripple, AlphabetId::Flickr];

    #[must_use]
    pub fn alphabet(self) -> &'static Alphabet {
        match self {
            AlphabetId::Bitcoin => &BITCOIN,
            AlphabetId::Ripple => &RIPPLE,
            AlphabetId::Flickr => &FLICKR,
        }
    }

    #[must_use]
    pub fn index(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            AlphabetId::Bitcoin => "bitcoin",
            AlphabetId::Ripple => "ripple",
            AlphabetId::Flickr => "flickr",
        }
    }
}

impl TryFrom<u8> for AlphabetId {
    type Error = Error;

    fn try_from(selector: u8) -> Result<Self> {
        match selector {
            0 => Ok(AlphabetId::Bitcoin),
            1 => Ok(AlphabetId::Ripple),
            2 => Ok(AlphabetId::Flickr),
            other => Err(Error::InvalidAlphabet(other)),
        }
    }
}

impl FromStr for AlphabetId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "bitcoin" | "btc" => Ok(AlphabetId::Bitcoin),
            "ripple" | "xrp" => Ok(AlphabetId::Ripple),
            "flickr" => Ok(AlphabetId::Flickr),
            _ => Err(Error::UnknownAlphabet(s.to_owned())),
        }
    }
}

impl fmt::Display for AlphabetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_complete() {
        for id in AlphabetId::ALL {
            let alphabet = id.alphabet();
            assert_eq!(alphabet.id(), id);
            assert_eq!(alphabet.symbols().len(), BASE);
            for (digit, ch) in alphabet.symbols().chars().enumerate() {
                assert_eq!(alphabet.digit(ch), Some(digit as u8));
                assert_eq!(alphabet.symbol(digit as u8), Some(ch));
            }
            assert_eq!(alphabet.symbol(58), None);
        }
    }

    #[test]
    fn zero_symbols() {
        assert_eq!(BITCOIN.zero_symbol(), '1');
        assert_eq!(RIPPLE.zero_symbol(), 'r');
        assert_eq!(FLICKR.zero_symbol(), '1');
    }

    #[test]
    fn excluded_symbols() {
        for ch in ['0', 'O', 'I', 'l', '+', '/', 'é', '\u{1F600}'] {
            assert_eq!(BITCOIN.digit(ch), None, "{ch:?}");
        }
        assert_eq!(RIPPLE.digit('0'), None);
        assert_eq!(FLICKR.digit('l'), None);
    }

    #[test]
    fn lookup_selectors() {
        assert_eq!(lookup(0).unwrap().id(), AlphabetId::Bitcoin);
        assert_eq!(lookup(1).unwrap().id(), AlphabetId::Ripple);
        assert_eq!(lookup(2).unwrap().id(), AlphabetId::Flickr);
        assert_eq!(lookup(3).unwrap_err(), Error::InvalidAlphabet(3));
        assert_eq!(lookup(255).unwrap_err(), Error::InvalidAlphabet(255));
    }

    #[test]
    fn parse_names() {
        assert_eq!("bitcoin".parse::<AlphabetId>(), Ok(AlphabetId::Bitcoin));
        assert_eq!("BTC".parse::<AlphabetId>(), Ok(AlphabetId::Bitcoin));
        assert_eq!("Ripple".parse::<AlphabetId>(), Ok(AlphabetId::Ripple));
        assert_eq!("xrp".parse::<AlphabetId>(), Ok(AlphabetId::Ripple));
        assert_eq!("flickr".parse::<AlphabetId>(), Ok(AlphabetId::Flickr));
        assert_eq!(
            "base64".parse::<AlphabetId>(),
            Err(Error::UnknownAlphabet("base64".into()))
        );
        for id in AlphabetId::ALL {
            assert_eq!(id.to_string().parse::<AlphabetId>(), Ok(id));
            assert_eq!(AlphabetId::try_from(id.index()), Ok(id));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_names() {
        let json = serde_json::to_string(&AlphabetId::Ripple).unwrap();
        assert_eq!(json, "\"ripple\"");
        let id: AlphabetId = serde_json::from_str("\"flickr\"").unwrap();
        assert_eq!(id, AlphabetId::Flickr);
    }
}
