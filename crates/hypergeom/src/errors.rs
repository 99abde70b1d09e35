//! Error types.

use thiserror::Error;

/// Error produced when parsing a vector from its text form.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseVectorError {
    /// Input is not a parenthesized, comma-separated list with the right
    /// number of numeric components.
    #[error("invalid syntax \"{0}\"")]
    InvalidSyntax(String),
}

/// Error produced when viewing a buffer as a vector of the wrong length.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[error("buffer has {actual} components but the vector has {expected}")]
pub struct BufferLengthError {
    /// Number of components in the vector.
    pub expected: usize,
    /// Length of the buffer.
    pub actual: usize,
}
