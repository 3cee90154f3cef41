//! Error types for the linear-algebra kernel

use thiserror::Error;

/// Result type alias using the kernel's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can abort a kernel operation.
///
/// Every failure is terminal for the operation that raised it; the kernel
/// keeps no state between calls, so the next call starts clean.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Raw text could not be read as an exact rational
    #[error("Cannot read '{input}' as a number: {reason}")]
    Parse {
        /// The offending text
        input: String,
        /// What was wrong with it
        reason: String,
    },

    /// Operand shapes are incompatible
    #[error("Dimensions not compatible: {0}")]
    Dimension(String),

    /// The requested method needs a different number of vectors
    #[error("Invalid shape: {0}")]
    Shape(String),

    /// A matrix that has to be inverted is singular
    #[error("Singular matrix: {0}")]
    Singular(String),
}

impl Error {
    pub(crate) fn parse(input: &str, reason: &str) -> Self {
        Error::Parse {
            input: input.to_owned(),
            reason: reason.to_owned(),
        }
    }
}
