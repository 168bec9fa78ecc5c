//! Discrepancy records and the comparison report.
//!
//! A [`Comparison`] holds every [`Discrepancy`] found during one comparison
//! call, in discovery order. Each discrepancy carries a [`Reason`] code, the
//! path of the offending field, and — where meaningful — the expected and
//! actual values.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::path::KeyPath;

/// The result of comparing two JSON trees.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Every discrepancy found, in discovery order.
    pub discrepancies: Vec<Discrepancy>,
}

impl Comparison {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` only if no discrepancy was found at any depth.
    pub fn is_match(&self) -> bool {
        self.discrepancies.is_empty()
    }

    /// Returns `true` if there are no discrepancies.
    pub fn is_empty(&self) -> bool {
        self.discrepancies.is_empty()
    }

    /// Number of discrepancies.
    pub fn len(&self) -> usize {
        self.discrepancies.len()
    }

    /// Number of keys present in `expected` but absent from `actual`.
    pub fn missing_keys(&self) -> usize {
        self.count(Reason::MissingKey)
    }

    /// Number of keys present in `actual` but absent from `expected`.
    pub fn unexpected_keys(&self) -> usize {
        self.count(Reason::UnexpectedKey)
    }

    /// Number of type mismatches.
    pub fn type_mismatches(&self) -> usize {
        self.count(Reason::TypeMismatch)
    }

    /// Number of scalar value mismatches.
    pub fn value_mismatches(&self) -> usize {
        self.count(Reason::ValueMismatch)
    }

    fn count(&self, reason: Reason) -> usize {
        self.discrepancies
            .iter()
            .filter(|d| d.reason() == reason)
            .count()
    }
}

/// A single reported difference between expected and actual values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Discrepancy {
    /// A key of `expected` is absent from `actual`.
    MissingKey { path: KeyPath },
    /// A key of `actual` is absent from `expected`.
    UnexpectedKey { path: KeyPath },
    /// The two sides declare a different number of keys (strict mode).
    /// Carries both key lists so the report is readable without the inputs.
    KeyCountMismatch {
        path: KeyPath,
        expected_keys: Vec<String>,
        actual_keys: Vec<String>,
    },
    /// The two values have different JSON types.
    TypeMismatch {
        path: KeyPath,
        expected: Value,
        actual: Value,
    },
    /// Two scalars of the same type are unequal.
    ValueMismatch {
        path: KeyPath,
        expected: Value,
        actual: Value,
    },
    /// A nested object or array comparison found discrepancies. Emitted at
    /// the parent level in addition to the deeper records.
    NestedMismatch { path: KeyPath },
}

impl Discrepancy {
    /// The reason code for this discrepancy.
    pub fn reason(&self) -> Reason {
        match self {
            Discrepancy::MissingKey { .. } => Reason::MissingKey,
            Discrepancy::UnexpectedKey { .. } => Reason::UnexpectedKey,
            Discrepancy::KeyCountMismatch { .. } => Reason::KeyCountMismatch,
            Discrepancy::TypeMismatch { .. } => Reason::TypeMismatch,
            Discrepancy::ValueMismatch { .. } => Reason::ValueMismatch,
            Discrepancy::NestedMismatch { .. } => Reason::NestedMismatch,
        }
    }

    /// The path of the offending field.
    pub fn path(&self) -> &KeyPath {
        match self {
            Discrepancy::MissingKey { path }
            | Discrepancy::UnexpectedKey { path }
            | Discrepancy::KeyCountMismatch { path, .. }
            | Discrepancy::TypeMismatch { path, .. }
            | Discrepancy::ValueMismatch { path, .. }
            | Discrepancy::NestedMismatch { path } => path,
        }
    }

    /// The offending key (last path segment), or `None` at the root.
    pub fn key(&self) -> Option<&str> {
        self.path().key()
    }
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discrepancy::TypeMismatch {
                path,
                expected,
                actual,
            }
            | Discrepancy::ValueMismatch {
                path,
                expected,
                actual,
            } => write!(
                f,
                "{path}: {} (expected {expected}, actual {actual})",
                self.reason()
            ),
            Discrepancy::KeyCountMismatch {
                path,
                expected_keys,
                actual_keys,
            } => write!(
                f,
                "{path}: {} (expected {expected_keys:?}, actual {actual_keys:?})",
                self.reason()
            ),
            Discrepancy::MissingKey { path }
            | Discrepancy::UnexpectedKey { path }
            | Discrepancy::NestedMismatch { path } => {
                write!(f, "{path}: {}", self.reason())
            }
        }
    }
}

/// Reason codes, one per [`Discrepancy`] variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reason {
    MissingKey,
    UnexpectedKey,
    KeyCountMismatch,
    TypeMismatch,
    ValueMismatch,
    NestedMismatch,
}

impl Reason {
    /// Human-readable reason text, as written to the log.
    pub fn as_str(self) -> &'static str {
        match self {
            Reason::MissingKey => "missing key",
            Reason::UnexpectedKey => "unexpected key",
            Reason::KeyCountMismatch => "number of keys does not match",
            Reason::TypeMismatch => "types do not match",
            Reason::ValueMismatch => "values do not match",
            Reason::NestedMismatch => "objects do not match",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
