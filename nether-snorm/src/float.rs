//! Floating-point precisions accepted by the codec

use core::fmt::Debug;

mod private {
    pub trait Sealed {}
}

/// A floating-point type that can be quantized to a signed normalized code.
///
/// Implemented for `f32` and `f64` only. Each precision does its multiply,
/// rounding and division natively, so `f32` callers get single-precision
/// results and `f64` callers get double-precision results.
pub trait NormFloat: Copy + PartialOrd + Debug + private::Sealed {
    /// `-1.0`
    const NEG_ONE: Self;
    /// `0.0`
    const ZERO: Self;
    /// `1.0`
    const ONE: Self;
    /// Machine epsilon for this precision
    const EPSILON: Self;

    /// Whether the value is NaN
    fn is_nan(self) -> bool;

    /// `self * steps`, rounded half away from zero.
    ///
    /// Widened to `i64` so a product that lands one past `i32::MAX` (possible
    /// for 32-bit codes in single precision) is still observable.
    fn scale_round(self, steps: i32) -> i64;

    /// `code / steps` as a true floating-point division
    fn unscale(code: i32, steps: i32) -> Self;

    /// Lossless widening, for diagnostics
    fn to_f64(self) -> f64;
}

macro_rules! impl_norm_float {
    ($($t:ty),* $(,)?) => {$(
        impl private::Sealed for $t {}

        impl NormFloat for $t {
            const NEG_ONE: Self = -1.0;
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const EPSILON: Self = <$t>::EPSILON;

            #[inline]
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }

            #[inline]
            fn scale_round(self, steps: i32) -> i64 {
                (self * steps as $t).round() as i64
            }

            #[inline]
            fn unscale(code: i32, steps: i32) -> Self {
                code as $t / steps as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

impl_norm_float!(f32, f64);
