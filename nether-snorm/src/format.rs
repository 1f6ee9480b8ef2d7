//! Serializable descriptor for a quantized channel
//!
//! Asset manifests describe how a normalized channel is stored, e.g.
//!
//! ```toml
//! [normal]
//! bits = 10
//! scheme = "with_zero"
//! ```
//!
//! An invalid width is rejected when the manifest is deserialized, so the
//! encode/decode methods on [`SnormFormat`] cannot fail.

use serde::{Deserialize, Serialize};

use crate::codec::{dequantize, quantize};
use crate::error::Result;
use crate::float::NormFloat;
use crate::width::BitWidth;

/// Quantization scheme.
///
/// Both schemes share one formula (and 0.0 always encodes to 0); the variant
/// names the guarantee a consumer of the codes depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    /// Consumer relies on `+1.0` / `-1.0` mapping to nonzero extremes of equal magnitude
    WithoutZero,
    /// Consumer also relies on `0.0` mapping to code 0 and back exactly
    #[default]
    WithZero,
}

/// Bit width plus scheme for one quantized channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SnormFormat {
    /// Code width, validated to `2..=32` on construction and deserialization
    pub bits: BitWidth,
    /// Metadata only: encode and decode compute the same codes for either scheme
    #[serde(default)]
    pub scheme: Scheme,
}

impl SnormFormat {
    /// Build a format from a raw bit count
    pub fn new(bits: u32, scheme: Scheme) -> Result<Self> {
        Ok(Self {
            bits: BitWidth::new(bits)?,
            scheme,
        })
    }

    /// Encode a normalized value to a code of this format.
    ///
    /// Both schemes share the step count `2^(bits-1) - 1`, so the scheme only
    /// records which guarantees the consumer relies on.
    #[inline]
    pub fn encode<F: NormFloat>(&self, value: F) -> i32 {
        quantize(value, self.bits)
    }

    /// Decode a code of this format to a normalized value
    #[inline]
    pub fn decode<F: NormFloat>(&self, code: i32) -> F {
        dequantize(code, self.bits)
    }

    /// Largest code this format produces
    #[inline]
    pub fn max_code(&self) -> i32 {
        self.bits.max_code()
    }

    /// Smallest code this format produces
    #[inline]
    pub fn min_code(&self) -> i32 {
        self.bits.min_code()
    }
}
