//! Error types for the comparison crate.

use std::fmt;

/// Which argument of a comparison an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Expected,
    Actual,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Expected => f.write_str("expected"),
            Side::Actual => f.write_str("actual"),
        }
    }
}

/// Errors that can occur when starting a comparison.
///
/// Mismatches between the two trees are never errors; they are reported
/// through the [`Comparison`](crate::Comparison) record instead.
#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    /// A top-level argument was not a JSON object.
    #[error("{side} value is not an object, got {kind}")]
    NotAnObject { side: Side, kind: &'static str },
}

/// Convenience alias for comparison results.
pub type CompareResult<T> = Result<T, CompareError>;
