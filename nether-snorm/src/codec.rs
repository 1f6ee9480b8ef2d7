//! Encode/decode between normalized floats and signed fixed-point codes
//!
//! Both schemes use the same step count `s = 2^(bits-1) - 1`:
//!
//! ```text
//! encode: code  = round(clamp(value, -1, 1) * s)     (half away from zero)
//! decode: value = code / s                            (float division)
//! ```
//!
//! | Scheme | Guarantees |
//! |--------|------------|
//! | without zero | `+1.0` and `-1.0` map to `+s` and `-s`, never to 0 |
//! | with zero | as above, plus `0.0` maps to code 0 and code 0 decodes to exactly `0.0` |
//!
//! The two's-complement minimum `-2^(bits-1)` is never produced by encode,
//! and decodes to `-1.0` if it is ever seen.

use crate::error::Result;
use crate::float::NormFloat;
use crate::width::BitWidth;

// ============================================================================
// Width-checked core
// ============================================================================

/// Quantize `value` to a code of the given width.
///
/// Values outside `[-1.0, 1.0]` are clamped first, and NaN encodes to 0.
#[inline]
pub fn quantize<F: NormFloat>(value: F, width: BitWidth) -> i32 {
    let steps = width.max_code();
    let value = clamp_unit(value, width);

    // A single-precision product can land one past `steps` for 32-bit codes
    let code = value
        .scale_round(steps)
        .clamp(i64::from(-steps), i64::from(steps));
    code as i32
}

/// Reconstruct the normalized value of a code of the given width.
///
/// Codes outside `-s..=s` saturate to `-1.0` / `1.0`.
#[inline]
pub fn dequantize<F: NormFloat>(code: i32, width: BitWidth) -> F {
    if !width.contains(code) {
        tracing::trace!(code, bits = width.get(), "saturating out-of-range code");
        return if code < 0 { F::NEG_ONE } else { F::ONE };
    }
    F::unscale(code, width.max_code())
}

#[inline]
fn clamp_unit<F: NormFloat>(value: F, width: BitWidth) -> F {
    if value.is_nan() {
        tracing::trace!(bits = width.get(), "encoding NaN as zero");
        F::ZERO
    } else if value < F::NEG_ONE {
        tracing::trace!(value = value.to_f64(), bits = width.get(), "clamping value to -1.0");
        F::NEG_ONE
    } else if value > F::ONE {
        tracing::trace!(value = value.to_f64(), bits = width.get(), "clamping value to 1.0");
        F::ONE
    } else {
        value
    }
}

// ============================================================================
// Without zero
// ============================================================================

/// Encode `value` as a `bits`-wide code with symmetric nonzero extremes.
///
/// # Errors
///
/// [`SnormError::InvalidBitWidth`](crate::SnormError::InvalidBitWidth) if
/// `bits` is outside `2..=32`.
pub fn encode_without_zero<F: NormFloat>(value: F, bits: u32) -> Result<i32> {
    Ok(quantize(value, BitWidth::new(bits)?))
}

/// Decode a `bits`-wide code produced by [`encode_without_zero`].
///
/// # Errors
///
/// [`SnormError::InvalidBitWidth`](crate::SnormError::InvalidBitWidth) if
/// `bits` is outside `2..=32`.
pub fn decode_without_zero<F: NormFloat>(code: i32, bits: u32) -> Result<F> {
    Ok(dequantize(code, BitWidth::new(bits)?))
}

// ============================================================================
// With zero
// ============================================================================

/// Encode `value` as a `bits`-wide code where `0.0` maps exactly to 0.
///
/// Negative and positive halves both use `nmax = 2^(bits-1) - 1` steps.
///
/// # Errors
///
/// [`SnormError::InvalidBitWidth`](crate::SnormError::InvalidBitWidth) if
/// `bits` is outside `2..=32`.
pub fn encode_with_zero<F: NormFloat>(value: F, bits: u32) -> Result<i32> {
    Ok(quantize(value, BitWidth::new(bits)?))
}

/// Decode a `bits`-wide code produced by [`encode_with_zero`].
///
/// # Errors
///
/// [`SnormError::InvalidBitWidth`](crate::SnormError::InvalidBitWidth) if
/// `bits` is outside `2..=32`.
pub fn decode_with_zero<F: NormFloat>(code: i32, bits: u32) -> Result<F> {
    Ok(dequantize(code, BitWidth::new(bits)?))
}
