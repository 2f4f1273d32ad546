//! Integer mixing primitives shared by the 32-bit and 128-bit engines.
//!
//! Every multiply and add here wraps; overflow is part of the mix.

use crate::error::{MurmurCodeError, Result};

/// Rotate a 32-bit word left by `bits`.
///
/// # Errors
///
/// Returns `RotateOutOfRange` if `bits >= 32`.
pub const fn rotl32(value: u32, bits: u32) -> Result<u32> {
    if bits >= u32::BITS {
        return Err(MurmurCodeError::RotateOutOfRange {
            bits,
            width: u32::BITS,
        });
    }
    Ok(value.rotate_left(bits))
}

/// Rotate a 64-bit word left by `bits`.
///
/// # Errors
///
/// Returns `RotateOutOfRange` if `bits >= 64`.
pub const fn rotl64(value: u64, bits: u32) -> Result<u64> {
    if bits >= u64::BITS {
        return Err(MurmurCodeError::RotateOutOfRange {
            bits,
            width: u64::BITS,
        });
    }
    Ok(value.rotate_left(bits))
}

/// Rotate a 32-bit word left by a fixed amount, checked at compile time.
///
/// The engines rotate by constants only; [`rotl32`] is the form for
/// caller-supplied amounts.
#[inline]
#[must_use]
pub(crate) const fn rotl32_by<const BITS: u32>(value: u32) -> u32 {
    const { assert!(BITS < u32::BITS, "rotate amount out of range") };
    value.rotate_left(BITS)
}

/// Rotate a 64-bit word left by a fixed amount, checked at compile time.
#[inline]
#[must_use]
pub(crate) const fn rotl64_by<const BITS: u32>(value: u64) -> u64 {
    const { assert!(BITS < u64::BITS, "rotate amount out of range") };
    value.rotate_left(BITS)
}

/// 32-bit finalization mix: forces every input bit to avalanche.
#[inline]
#[must_use]
pub const fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

/// 64-bit finalization mix.
#[inline]
#[must_use]
pub const fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51_afd7_ed55_8ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    k ^= k >> 33;
    k
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotl32_basic() {
        assert_eq!(rotl32(1, 1), Ok(2));
        assert_eq!(rotl32(0x8000_0000, 1), Ok(1));
        assert_eq!(rotl32(0x1234_5678, 8), Ok(0x3456_7812));
    }

    #[test]
    fn test_fixed_rotates_match_checked() {
        let word32 = 0x9e37_79b9;
        assert_eq!(Ok(rotl32_by::<13>(word32)), rotl32(word32, 13));
        assert_eq!(Ok(rotl32_by::<15>(word32)), rotl32(word32, 15));
        let word64 = 0x9e37_79b9_7f4a_7c15;
        for (fixed, bits) in [
            (rotl64_by::<27>(word64), 27),
            (rotl64_by::<31>(word64), 31),
            (rotl64_by::<33>(word64), 33),
        ] {
            assert_eq!(Ok(fixed), rotl64(word64, bits), "bits {bits}");
        }
    }

    #[test]
    fn test_rotl32_zero_is_identity() {
        assert_eq!(rotl32(0xdead_beef, 0), Ok(0xdead_beef));
    }

    #[test]
    fn test_rotl32_max_legal() {
        assert_eq!(rotl32(1, 31), Ok(0x8000_0000));
    }

    #[test]
    fn test_rotl32_rejects_word_width() {
        assert_eq!(
            rotl32(1, 32),
            Err(MurmurCodeError::RotateOutOfRange { bits: 32, width: 32 })
        );
        assert!(rotl32(1, 100).is_err());
    }

    #[test]
    fn test_rotl64_basic() {
        assert_eq!(rotl64(1, 63), Ok(0x8000_0000_0000_0000));
        assert_eq!(rotl64(0x8000_0000_0000_0001, 1), Ok(3));
    }

    #[test]
    fn test_rotl64_rejects_word_width() {
        assert_eq!(
            rotl64(1, 64),
            Err(MurmurCodeError::RotateOutOfRange { bits: 64, width: 64 })
        );
    }

    #[test]
    fn test_fmix32_zero_fixed_point() {
        // xor-shift and multiply both map 0 to 0
        assert_eq!(fmix32(0), 0);
    }

    #[test]
    fn test_fmix32_known_value() {
        // Empty input with seed 1 is fmix32(1) in the x86_32 reference.
        assert_eq!(fmix32(1), 0x514e_28b7);
    }

    #[test]
    fn test_fmix64_zero_fixed_point() {
        assert_eq!(fmix64(0), 0);
    }

    #[test]
    fn test_fmix64_avalanche() {
        let a = fmix64(0x0000_0000_0000_0001);
        let b = fmix64(0x0000_0000_0000_0002);
        // A single flipped input bit should flip roughly half the output bits.
        let flipped = (a ^ b).count_ones();
        assert!((16..=48).contains(&flipped), "flipped {flipped} bits");
    }

    #[test]
    fn test_fmix32_avalanche() {
        let flipped = (fmix32(0x10) ^ fmix32(0x11)).count_ones();
        assert!((6..=26).contains(&flipped), "flipped {flipped} bits");
    }
}
