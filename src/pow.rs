// src/pow.rs

use primitive_types::U256;

/// Exponent byte of the difficulty-1 compact target.
pub const DIFF1_EXPONENT: u32 = 0x1d;

/// Significand of the difficulty-1 compact target.
pub const DIFF1_SIGNIFICAND: u32 = 0x00ffff;

/// The difficulty-1 target in full: significand `0x00ffff` scaled up by
/// `0x1d - 3` bytes.
pub const DIFF1_TARGET: U256 = U256([0, 0, 0, 0x0000_0000_ffff_0000]);

/// Converts a header's compact target bits into the difficulty of the
/// encoded target relative to [`DIFF1_TARGET`].
///
/// The exponent difference is taken in bytes and applied with `ldexp`
/// rather than a generic `powf` round trip, so extreme exponents
/// saturate cleanly instead of losing precision on the way.
///
/// Degenerate encodings are not rejected: a zero significand divides to
/// `+inf` and an exponent outside the range of an `f64` saturates to
/// `0.0` or `+inf`, both per IEEE-754.
pub fn difficulty_from_bits(bits: u32) -> f64 {
    // Signed, so encodings above 0x1d scale downward.
    let exponent_diff = 8 * (DIFF1_EXPONENT as i32 - ((bits >> 24) & 0xff) as i32);
    let significand = (bits & 0x00ff_ffff) as f64;
    libm::ldexp(DIFF1_SIGNIFICAND as f64 / significand, exponent_diff)
}

/// Expands compact target bits into the full 256-bit threshold.
pub fn target_from_bits(bits: u32) -> U256 {
    let size = bits >> 24;
    let word = bits & 0x00ff_ffff;

    // The compact mantissa is signed but a target may not be negative
    if word & 0x0080_0000 != 0 {
        return U256::zero();
    }

    if size <= 3 {
        U256::from(word >> (8 * (3 - size as usize)))
    } else {
        U256::from(word) << (8 * (size as usize - 3))
    }
}

/// Integer network difficulty of a full target, `2^256 / (target + 1)`.
pub fn difficulty_from_target(target: U256) -> u64 {
    if target.is_zero() {
        return u64::MAX;
    }
    let mut adjusted = target;
    adjusted += U256::one();
    let full = U256::MAX / adjusted;
    full.low_u64()
}
