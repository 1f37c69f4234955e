//! Error types

use thiserror::Error;

/// Result type alias for extraction
pub type Result<T> = std::result::Result<T, Error>;

/// Errors when extracting colors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Requested color count was zero or negative
    #[error("color count must be greater than 0, got {0}")]
    InvalidColorCount(i32),
}

/// Errors when strictly parsing a hex color string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Digit count after stripping `#` was neither 6 nor 8
    #[error("invalid hex color length {0} (expected 6 or 8 digits)")]
    InvalidLength(usize),
    /// A channel was not a valid hexadecimal byte
    #[error("invalid hex digits {0:?}")]
    InvalidHex(String),
}
