//! Error types for reading polynomials.

use std::num::ParseIntError;

use thiserror::Error;

/// A line of the term-list format could not be decoded.
///
/// Line numbers are 1-based.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line has no tokens at all.
    #[error("line {line}: missing coefficient")]
    MissingCoefficient {
        /// Offending line.
        line: usize,
    },

    /// The line has a coefficient but no degree.
    #[error("line {line}: missing degree")]
    MissingDegree {
        /// Offending line.
        line: usize,
    },

    /// The coefficient token is not a number.
    #[error("line {line}: invalid coefficient `{token}`")]
    InvalidCoefficient {
        /// Offending line.
        line: usize,
        /// The token as read.
        token: String,
    },

    /// The degree token is not a non-negative integer.
    #[error("line {line}: invalid degree `{token}`")]
    InvalidDegree {
        /// Offending line.
        line: usize,
        /// The token as read.
        token: String,
        /// Underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },
}

impl ParseError {
    /// Returns the line the error occurred on.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::MissingCoefficient { line }
            | Self::MissingDegree { line }
            | Self::InvalidCoefficient { line, .. }
            | Self::InvalidDegree { line, .. } => *line,
        }
    }
}

/// Errors from reading a polynomial out of a byte stream.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The underlying reader failed.
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    /// A line could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
