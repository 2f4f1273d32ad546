//! MurmurHash3 x86_32.
//!
//! Bit-exact with `MurmurHash3_x86_32` from smhasher. Blocks are always
//! decoded little-endian, so the output does not depend on the host.

use crate::mix::{fmix32, rotl32_by};

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;

#[inline]
const fn mix_k1(mut k1: u32) -> u32 {
    k1 = k1.wrapping_mul(C1);
    k1 = rotl32_by::<15>(k1);
    k1.wrapping_mul(C2)
}

/// Hash `input` with the 32-bit MurmurHash3 variant.
///
/// # Examples
///
/// ```
/// use murmurcode::murmur32::hash32;
///
/// assert_eq!(hash32(b"", 0), 0);
/// assert_eq!(hash32("test", 0), 0xba6b_d213);
/// ```
#[must_use]
pub fn hash32(input: impl AsRef<[u8]>, seed: u32) -> u32 {
    let data = input.as_ref();
    let mut h1 = seed;

    let blocks = data.chunks_exact(4);
    let tail = blocks.remainder();
    for block in blocks {
        let k1 = u32::from_le_bytes([block[0], block[1], block[2], block[3]]);
        h1 ^= mix_k1(k1);
        h1 = rotl32_by::<13>(h1);
        h1 = h1.wrapping_mul(5).wrapping_add(0xe654_6b64);
    }

    if !tail.is_empty() {
        let k1 = tail
            .iter()
            .rev()
            .fold(0u32, |acc, &byte| (acc << 8) | u32::from(byte));
        h1 ^= mix_k1(k1);
    }

    // The reference takes the length as a 32-bit int.
    #[allow(clippy::cast_possible_truncation)]
    let len = data.len() as u32;
    fmix32(h1 ^ len)
}

/// Hash the UTF-8 bytes of `s`.
#[must_use]
pub fn hash32_str(s: &str, seed: u32) -> u32 {
    hash32(s.as_bytes(), seed)
}

/// Hash a bool as a single byte: 1 for true, 0 for false.
#[must_use]
pub fn hash32_bool(value: bool, seed: u32) -> u32 {
    hash32([u8::from(value)], seed)
}
