//! Error types for normalized fixed-point conversion

/// Errors that can occur when encoding or decoding normalized values
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SnormError {
    /// Requested bit width is outside the supported range
    #[error("Invalid bit width: {0} (expected 2..=32)")]
    InvalidBitWidth(u32),
}

/// Result alias used by all fallible codec operations
pub type Result<T> = std::result::Result<T, SnormError>;
