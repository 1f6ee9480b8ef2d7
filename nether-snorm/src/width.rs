//! Bit width of a signed normalized code

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SnormError};

/// Smallest supported code width (sign bit + one magnitude bit)
pub const MIN_BITS: u32 = 2;
/// Largest supported code width (a full `i32`)
pub const MAX_BITS: u32 = 32;

/// Number of bits a signed normalized code occupies, guaranteed to be in
/// `MIN_BITS..=MAX_BITS`.
///
/// One bit is reserved for the sign, leaving `bits - 1` magnitude bits. The
/// positive extreme is `2^(bits-1) - 1` and the negative extreme is its
/// negation; the two's-complement minimum `-2^(bits-1)` is never used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct BitWidth(u32);

impl BitWidth {
    /// 2-bit codes: {-1, 0, 1}
    pub const MIN: Self = Self(MIN_BITS);
    /// 32-bit codes: the full symmetric `i32` range
    pub const MAX: Self = Self(MAX_BITS);

    /// Validate a bit width
    #[inline]
    pub const fn new(bits: u32) -> Result<Self> {
        if bits < MIN_BITS || bits > MAX_BITS {
            return Err(SnormError::InvalidBitWidth(bits));
        }
        Ok(Self(bits))
    }

    /// Raw number of bits
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Positive extreme code, `2^(bits-1) - 1`.
    ///
    /// This is also the divisor shared by both schemes, and is always >= 1.
    #[inline]
    pub const fn max_code(self) -> i32 {
        ((1i64 << (self.0 - 1)) - 1) as i32
    }

    /// Negative extreme code, `-(2^(bits-1) - 1)`
    #[inline]
    pub const fn min_code(self) -> i32 {
        -self.max_code()
    }

    /// Whether `code` lies in `min_code()..=max_code()`
    #[inline]
    pub const fn contains(self, code: i32) -> bool {
        code >= self.min_code() && code <= self.max_code()
    }

    /// Every supported width, narrowest first
    pub fn all() -> impl Iterator<Item = Self> {
        (MIN_BITS..=MAX_BITS).map(Self)
    }
}

impl Default for BitWidth {
    /// 16 bits, the snorm16 layout used by GPU vertex formats
    fn default() -> Self {
        Self(16)
    }
}

impl TryFrom<u32> for BitWidth {
    type Error = SnormError;

    fn try_from(bits: u32) -> Result<Self> {
        Self::new(bits)
    }
}

impl From<BitWidth> for u32 {
    fn from(width: BitWidth) -> Self {
        width.0
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.0)
    }
}
