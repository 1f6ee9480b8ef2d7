//! Nether-Snorm: signed normalized fixed-point codec for Nethercore
//!
//! Converts floats in `[-1.0, 1.0]` to signed integer codes that occupy
//! 2 to 32 bits of an integer word, and back. This is the compact storage
//! used for normals, colors and texture coordinates in asset formats.
//!
//! **This is a pure codec** - it works on already-extracted scalars. Bit
//! packing, byte order and buffers are handled by the caller.
//!
//! # Encoding
//!
//! For a width of `bits`, both schemes use `s = 2^(bits-1) - 1` steps on each
//! side of zero:
//!
//! | Width | Codes | Notes |
//! |-------|-------|-------|
//! | 2 | -1..=1 | smallest supported width |
//! | 8 | -127..=127 | -128 is never produced |
//! | 16 | -32767..=32767 | snorm16 |
//! | 32 | -2147483647..=2147483647 | full `i32`, minus `i32::MIN` |
//!
//! - Encode rounds half away from zero after multiplying by `s`.
//! - Inputs outside `[-1.0, 1.0]` are clamped; NaN encodes to 0.
//! - Decode is a floating-point division by `s`; codes outside `-s..=s`
//!   saturate to `-1.0` / `1.0`.
//! - `f32` and `f64` inputs are both supported, each computed in its own
//!   precision.
//!
//! # Usage
//!
//! ```
//! use nether_snorm::{decode_with_zero, encode_with_zero, fixed, SnormError};
//!
//! // Runtime width
//! assert_eq!(encode_with_zero(1.0f32, 8), Ok(127));
//! assert_eq!(decode_with_zero::<f32>(-127, 8), Ok(-1.0));
//! assert_eq!(encode_with_zero(0.5f32, 33), Err(SnormError::InvalidBitWidth(33)));
//!
//! // Compile-time width
//! assert_eq!(fixed::encode_without_zero_2(-1.0f64), -1);
//! assert_eq!(fixed::decode_without_zero_16::<f64>(32767), 1.0);
//! ```

mod codec;
mod error;
mod float;
mod format;
mod width;

pub mod fixed;

pub use codec::{
    decode_with_zero, decode_without_zero, dequantize, encode_with_zero, encode_without_zero,
    quantize,
};
pub use error::{Result, SnormError};
pub use fixed::FixedWidth;
pub use float::NormFloat;
pub use format::{Scheme, SnormFormat};
pub use width::{BitWidth, MAX_BITS, MIN_BITS};
