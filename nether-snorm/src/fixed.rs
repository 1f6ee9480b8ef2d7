//! Fixed-width entry points
//!
//! [`FixedWidth`] validates its width at compile time, so these never fail.
//! The named `encode_*_N` / `decode_*_N` functions for every width from 2 to
//! 32 are generated from a single table below.

use crate::codec::{dequantize, quantize};
use crate::float::NormFloat;
use crate::width::BitWidth;

/// Codec for a width known at compile time.
///
/// ```
/// use nether_snorm::FixedWidth;
///
/// assert_eq!(FixedWidth::<8>::encode(1.0f32), 127);
/// assert_eq!(FixedWidth::<8>::decode::<f32>(-127), -1.0);
/// ```
///
/// Using an unsupported width fails to compile:
///
/// ```compile_fail
/// use nether_snorm::FixedWidth;
///
/// let _ = FixedWidth::<33>::encode(0.5f32);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedWidth<const BITS: u32>;

impl<const BITS: u32> FixedWidth<BITS> {
    /// Validated width; evaluating this for an unsupported `BITS` is a compile error
    pub const WIDTH: BitWidth = match BitWidth::new(BITS) {
        Ok(width) => width,
        Err(_) => panic!("fixed-point width must be in 2..=32"),
    };

    /// Positive extreme code
    pub const MAX_CODE: i32 = Self::WIDTH.max_code();

    /// Negative extreme code
    pub const MIN_CODE: i32 = Self::WIDTH.min_code();

    /// Encode a normalized value (either scheme)
    #[inline]
    pub fn encode<F: NormFloat>(value: F) -> i32 {
        quantize(value, Self::WIDTH)
    }

    /// Decode a code (either scheme)
    #[inline]
    pub fn decode<F: NormFloat>(code: i32) -> F {
        dequantize(code, Self::WIDTH)
    }
}

macro_rules! fixed_width_fns {
    ($($bits:literal => $enc_wo:ident, $dec_wo:ident, $enc_w:ident, $dec_w:ident;)*) => {$(
        #[doc = concat!("[`encode_without_zero`](crate::encode_without_zero) with a fixed width of ", stringify!($bits), " bits")]
        #[inline]
        pub fn $enc_wo<F: NormFloat>(value: F) -> i32 {
            FixedWidth::<$bits>::encode(value)
        }

        #[doc = concat!("[`decode_without_zero`](crate::decode_without_zero) with a fixed width of ", stringify!($bits), " bits")]
        #[inline]
        pub fn $dec_wo<F: NormFloat>(code: i32) -> F {
            FixedWidth::<$bits>::decode(code)
        }

        #[doc = concat!("[`encode_with_zero`](crate::encode_with_zero) with a fixed width of ", stringify!($bits), " bits")]
        #[inline]
        pub fn $enc_w<F: NormFloat>(value: F) -> i32 {
            FixedWidth::<$bits>::encode(value)
        }

        #[doc = concat!("[`decode_with_zero`](crate::decode_with_zero) with a fixed width of ", stringify!($bits), " bits")]
        #[inline]
        pub fn $dec_w<F: NormFloat>(code: i32) -> F {
            FixedWidth::<$bits>::decode(code)
        }
    )*};
}

// Each row is `bits => <op>_<bits>` for the four operations, in the order
// encode_without_zero, decode_without_zero, encode_with_zero, decode_with_zero.
// `macro_rules!` cannot paste identifiers, so the names are spelled out.
fixed_width_fns! {
    2 => encode_without_zero_2, decode_without_zero_2, encode_with_zero_2, decode_with_zero_2;
    3 => encode_without_zero_3, decode_without_zero_3, encode_with_zero_3, decode_with_zero_3;
    4 => encode_without_zero_4, decode_without_zero_4, encode_with_zero_4, decode_with_zero_4;
    5 => encode_without_zero_5, decode_without_zero_5, encode_with_zero_5, decode_with_zero_5;
    6 => encode_without_zero_6, decode_without_zero_6, encode_with_zero_6, decode_with_zero_6;
    7 => encode_without_zero_7, decode_without_zero_7, encode_with_zero_7, decode_with_zero_7;
    8 => encode_without_zero_8, decode_without_zero_8, encode_with_zero_8, decode_with_zero_8;
    9 => encode_without_zero_9, decode_without_zero_9, encode_with_zero_9, decode_with_zero_9;
    10 => encode_without_zero_10, decode_without_zero_10, encode_with_zero_10, decode_with_zero_10;
    11 => encode_without_zero_11, decode_without_zero_11, encode_with_zero_11, decode_with_zero_11;
    12 => encode_without_zero_12, decode_without_zero_12, encode_with_zero_12, decode_with_zero_12;
    13 => encode_without_zero_13, decode_without_zero_13, encode_with_zero_13, decode_with_zero_13;
    14 => encode_without_zero_14, decode_without_zero_14, encode_with_zero_14, decode_with_zero_14;
    15 => encode_without_zero_15, decode_without_zero_15, encode_with_zero_15, decode_with_zero_15;
    16 => encode_without_zero_16, decode_without_zero_16, encode_with_zero_16, decode_with_zero_16;
    17 => encode_without_zero_17, decode_without_zero_17, encode_with_zero_17, decode_with_zero_17;
    18 => encode_without_zero_18, decode_without_zero_18, encode_with_zero_18, decode_with_zero_18;
    19 => encode_without_zero_19, decode_without_zero_19, encode_with_zero_19, decode_with_zero_19;
    20 => encode_without_zero_20, decode_without_zero_20, encode_with_zero_20, decode_with_zero_20;
    21 => encode_without_zero_21, decode_without_zero_21, encode_with_zero_21, decode_with_zero_21;
    22 => encode_without_zero_22, decode_without_zero_22, encode_with_zero_22, decode_with_zero_22;
    23 => encode_without_zero_23, decode_without_zero_23, encode_with_zero_23, decode_with_zero_23;
    24 => encode_without_zero_24, decode_without_zero_24, encode_with_zero_24, decode_with_zero_24;
    25 => encode_without_zero_25, decode_without_zero_25, encode_with_zero_25, decode_with_zero_25;
    26 => encode_without_zero_26, decode_without_zero_26, encode_with_zero_26, decode_with_zero_26;
    27 => encode_without_zero_27, decode_without_zero_27, encode_with_zero_27, decode_with_zero_27;
    28 => encode_without_zero_28, decode_without_zero_28, encode_with_zero_28, decode_with_zero_28;
    29 => encode_without_zero_29, decode_without_zero_29, encode_with_zero_29, decode_with_zero_29;
    30 => encode_without_zero_30, decode_without_zero_30, encode_with_zero_30, decode_with_zero_30;
    31 => encode_without_zero_31, decode_without_zero_31, encode_with_zero_31, decode_with_zero_31;
    32 => encode_without_zero_32, decode_without_zero_32, encode_with_zero_32, decode_with_zero_32;
}
