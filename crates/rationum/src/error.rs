//! Error type raised by parsing, construction, division, and rescaling.

use std::fmt;

/// Failure modes of the numeric core.
///
/// Every fallible operation returns this synchronously to its immediate
/// caller; the library performs no logging, retries, or partial recovery of
/// its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    /// The input string is not a valid decimal or fraction literal.
    InvalidLiteral(String),
    /// A divisor or denominator whose value is exactly zero.
    DivisionByZero,
    /// [`RoundingMode::Unnecessary`](crate::RoundingMode::Unnecessary) was
    /// requested but the value is not exactly representable at the target
    /// scale.
    RoundingRequired,
    /// An exactness invariant inside fraction promotion was violated.
    ///
    /// Seeing this means a defect in the library, not bad input.
    Internal(&'static str),
}

impl NumberError {
    /// Creates an `InvalidLiteral` carrying the offending input.
    pub(crate) fn invalid_literal(input: &str) -> Self {
        Self::InvalidLiteral(input.to_owned())
    }
}

impl fmt::Display for NumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLiteral(input) => write!(f, "invalid numeric literal '{input}'"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::RoundingRequired => write!(f, "value is not exactly representable at the requested scale"),
            Self::Internal(detail) => write!(f, "internal invariant violated: {detail}"),
        }
    }
}

impl std::error::Error for NumberError {}
