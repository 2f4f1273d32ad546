//! Positional encoding of integers as short codes over a fixed alphabet.

use std::borrow::Cow;
use std::fmt;

use crate::error::{MurmurCodeError, Result};

const BASE62_SYMBOLS: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const BASE36_SYMBOLS: &str = "0123456789abcdefghijklmnopqrstuvwxyz";
const BASE58_SYMBOLS: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Digits, then lowercase, then uppercase.
pub const BASE62: Alphabet = Alphabet::from_static(BASE62_SYMBOLS);

/// Lowercase base36.
pub const BASE36: Alphabet = Alphabet::from_static(BASE36_SYMBOLS);

/// Bitcoin-style base58 (no `0`, `O`, `I`, `l`).
pub const BASE58: Alphabet = Alphabet::from_static(BASE58_SYMBOLS);

/// An ordered set of unique ASCII symbols; its length is the radix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    symbols: Cow<'static, str>,
}

impl Alphabet {
    /// Build an alphabet from a string of unique ASCII graphic characters.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAlphabet` for fewer than 2 symbols, a non-graphic or
    /// non-ASCII symbol, or a repeated symbol.
    pub fn new(symbols: &str) -> Result<Self> {
        let invalid = |reason: String| MurmurCodeError::InvalidAlphabet { reason };

        if symbols.len() < 2 {
            return Err(invalid(format!(
                "need at least 2 symbols, got {}",
                symbols.chars().count()
            )));
        }
        let mut seen = [false; 128];
        for c in symbols.chars() {
            if !c.is_ascii_graphic() {
                return Err(invalid(format!("symbol {c:?} is not printable ASCII")));
            }
            let slot = &mut seen[c as usize];
            if *slot {
                return Err(invalid(format!("duplicate symbol {c:?}")));
            }
            *slot = true;
        }

        Ok(Self {
            symbols: Cow::Owned(symbols.to_string()),
        })
    }

    // Only for the predefined constants, which are checked by tests.
    const fn from_static(symbols: &'static str) -> Self {
        Self {
            symbols: Cow::Borrowed(symbols),
        }
    }

    /// Number of symbols.
    #[must_use]
    pub fn radix(&self) -> u64 {
        self.symbols.len() as u64
    }

    /// The symbol for digit value 0.
    #[must_use]
    pub fn zero(&self) -> char {
        char::from(self.symbols.as_bytes()[0])
    }

    /// The symbols as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.symbols
    }

    // `digit` is always a remainder modulo the radix.
    fn symbol(&self, digit: u64) -> u8 {
        self.symbols.as_bytes()[usize::try_from(digit).unwrap_or_default()]
    }

    fn digit(&self, symbol: u8) -> Option<u64> {
        self.symbols
            .bytes()
            .position(|s| s == symbol)
            .map(|i| i as u64)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        BASE62
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encode `value` in the alphabet's radix, most significant symbol first.
///
/// Zero encodes as the alphabet's first symbol, so the result is never
/// empty.
///
/// # Examples
///
/// ```
/// use murmurcode::encode::{encode, BASE36, BASE62};
///
/// assert_eq!(encode(0, &BASE62), "0");
/// assert_eq!(encode(61, &BASE62), "Z");
/// assert_eq!(encode(36, &BASE36), "10");
/// ```
#[must_use]
pub fn encode(value: u64, alphabet: &Alphabet) -> String {
    let radix = alphabet.radix();
    let mut digits = Vec::new();
    let mut v = value;
    loop {
        digits.push(alphabet.symbol(v % radix));
        v /= radix;
        if v == 0 {
            break;
        }
    }
    digits.reverse();
    digits.into_iter().map(char::from).collect()
}

/// Encode a signed value; negative values are rejected, not normalized.
///
/// # Errors
///
/// Returns `NegativeValue` if `value < 0`.
pub fn encode_signed(value: i64, alphabet: &Alphabet) -> Result<String> {
    u64::try_from(value)
        .map(|v| encode(v, alphabet))
        .map_err(|_| MurmurCodeError::NegativeValue { value })
}

/// Encode `value`, left-padding with the zero symbol to at least `width`.
#[must_use]
pub fn encode_padded(value: u64, alphabet: &Alphabet, width: usize) -> String {
    let encoded = encode(value, alphabet);
    if encoded.len() >= width {
        return encoded;
    }
    let mut padded: String = std::iter::repeat_n(alphabet.zero(), width - encoded.len()).collect();
    padded.push_str(&encoded);
    padded
}

/// Encode `value` into exactly `width` symbols.
///
/// The value is reduced modulo `radix^width` so every symbol position
/// carries hash entropy, then zero-padded. When `radix^width` exceeds
/// `u64` the value is kept whole. A width of 0 is treated as 1.
#[must_use]
pub fn encode_fixed(value: u64, alphabet: &Alphabet, width: usize) -> String {
    let width = width.max(1);
    let reduced = u32::try_from(width)
        .ok()
        .and_then(|exp| alphabet.radix().checked_pow(exp))
        .map_or(value, |space| value % space);
    encode_padded(reduced, alphabet, width)
}

/// Decode a short code produced by [`encode`], [`encode_padded`] or
/// [`encode_fixed`].
///
/// # Errors
///
/// Returns `InvalidCode` for an empty code or a symbol outside the
/// alphabet, and `Overflow` if the value does not fit in a `u64`.
pub fn decode(code: &str, alphabet: &Alphabet) -> Result<u64> {
    if code.is_empty() {
        return Err(MurmurCodeError::InvalidCode {
            code: code.to_string(),
        });
    }

    let radix = alphabet.radix();
    code.bytes().try_fold(0u64, |acc, symbol| {
        let digit = alphabet
            .digit(symbol)
            .ok_or_else(|| MurmurCodeError::InvalidCode {
                code: code.to_string(),
            })?;
        acc.checked_mul(radix)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| MurmurCodeError::Overflow {
                code: code.to_string(),
            })
    })
}

/// Returns true if every symbol of `code` is in the alphabet and the code
/// decodes without overflow.
#[must_use]
pub fn is_valid_code(code: &str, alphabet: &Alphabet) -> bool {
    decode(code, alphabet).is_ok()
}

/// Length of the longest code the alphabet produces for a `u64`.
#[must_use]
pub fn max_code_len(alphabet: &Alphabet) -> usize {
    encode(u64::MAX, alphabet).len()
}
