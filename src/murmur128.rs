//! MurmurHash3 x64_128.
//!
//! The two 64-bit words match `MurmurHash3_x64_128` from smhasher. When
//! serialized, each word is written big-endian with `h1` first, which is
//! the byte layout short-code consumers of this hash expect.

use std::fmt;

use crate::error::{MurmurCodeError, Result};
use crate::mix::{fmix64, rotl64_by};

const C1: u64 = 0x87c3_7b91_1142_53d5;
const C2: u64 = 0x4cf5_ad43_2745_937f;

/// A 128-bit MurmurHash3 value as its two 64-bit words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Hash128 {
    pub h1: u64,
    pub h2: u64,
}

impl Hash128 {
    /// Creates a hash value from its two words.
    #[must_use]
    pub const fn new(h1: u64, h2: u64) -> Self {
        Self { h1, h2 }
    }

    /// Serializes as 16 bytes: `h1` then `h2`, each big-endian.
    #[must_use]
    pub fn to_bytes(self) -> [u8; 16] {
        let mut out = [0u8; 16];
        out[..8].copy_from_slice(&self.h1.to_be_bytes());
        out[8..].copy_from_slice(&self.h2.to_be_bytes());
        out
    }

    /// Inverse of [`Hash128::to_bytes`].
    #[must_use]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        let (hi, lo) = bytes.split_at(8);
        let mut h1 = [0u8; 8];
        let mut h2 = [0u8; 8];
        h1.copy_from_slice(hi);
        h2.copy_from_slice(lo);
        Self {
            h1: u64::from_be_bytes(h1),
            h2: u64::from_be_bytes(h2),
        }
    }

    /// The whole value as one integer, `h1` in the high half.
    #[must_use]
    pub const fn as_u128(self) -> u128 {
        ((self.h1 as u128) << 64) | self.h2 as u128
    }

    /// 64-bit projection used for short codes.
    #[must_use]
    pub const fn low64(self) -> u64 {
        self.h1
    }
}

impl From<Hash128> for [u8; 16] {
    fn from(hash: Hash128) -> Self {
        hash.to_bytes()
    }
}

impl From<Hash128> for u128 {
    fn from(hash: Hash128) -> Self {
        hash.as_u128()
    }
}

impl fmt::Display for Hash128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}{:016x}", self.h1, self.h2)
    }
}

#[inline]
const fn mix_k1(k1: u64) -> u64 {
    rotl64_by::<31>(k1.wrapping_mul(C1)).wrapping_mul(C2)
}

#[inline]
const fn mix_k2(k2: u64) -> u64 {
    rotl64_by::<33>(k2.wrapping_mul(C2)).wrapping_mul(C1)
}

/// Little-endian word from up to 8 bytes; missing high bytes are zero.
#[inline]
fn le_word(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .rev()
        .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte))
}

/// Hash `input` with seed 0.
///
/// # Examples
///
/// ```
/// use murmurcode::murmur128::hash128;
///
/// let hash = hash128(b"hello");
/// assert_eq!(hash.h1, 0xcbd8_a7b3_41bd_9b02);
/// assert_eq!(hash.h2, 0x5b1e_906a_48ae_1d19);
/// ```
#[must_use]
pub fn hash128(input: impl AsRef<[u8]>) -> Hash128 {
    hash128_with_seed(input, 0)
}

/// Hash `input` with an explicit seed, widened into both accumulators.
#[must_use]
pub fn hash128_with_seed(input: impl AsRef<[u8]>, seed: u32) -> Hash128 {
    let data = input.as_ref();
    let mut h1 = u64::from(seed);
    let mut h2 = u64::from(seed);

    let blocks = data.chunks_exact(16);
    let tail = blocks.remainder();
    for block in blocks {
        let (lo, hi) = block.split_at(8);
        let k1 = le_word(lo);
        let k2 = le_word(hi);

        h1 ^= mix_k1(k1);
        h1 = rotl64_by::<27>(h1);
        h1 = h1.wrapping_add(h2);
        h1 = h1.wrapping_mul(5).wrapping_add(0x52dc_e729);

        h2 ^= mix_k2(k2);
        h2 = rotl64_by::<31>(h2);
        h2 = h2.wrapping_add(h1);
        h2 = h2.wrapping_mul(5).wrapping_add(0x3849_5ab5);
    }

    // Bytes 8.. start k2; k2 is mixed only when byte 8 is present, k1 when
    // byte 0 is.
    if tail.len() > 8 {
        h2 ^= mix_k2(le_word(&tail[8..]));
    }
    if !tail.is_empty() {
        h1 ^= mix_k1(le_word(&tail[..tail.len().min(8)]));
    }

    let len = data.len() as u64;
    h1 ^= len;
    h2 ^= len;

    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    h1 = fmix64(h1);
    h2 = fmix64(h2);

    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    Hash128 { h1, h2 }
}

/// Hash `buffer[offset..offset + count]` with seed 0.
///
/// # Errors
///
/// Returns `RangeOutOfBounds` if the range overflows or extends past the
/// end of `buffer`.
pub fn hash128_range(buffer: &[u8], offset: usize, count: usize) -> Result<Hash128> {
    let slice = offset
        .checked_add(count)
        .and_then(|end| buffer.get(offset..end))
        .ok_or(MurmurCodeError::RangeOutOfBounds {
            offset,
            count,
            len: buffer.len(),
        })?;
    Ok(hash128(slice))
}

/// Hash `input` with seed 0 and return the 16-byte big-endian serialization.
#[must_use]
pub fn hash128_bytes(input: impl AsRef<[u8]>) -> [u8; 16] {
    hash128(input).to_bytes()
}
