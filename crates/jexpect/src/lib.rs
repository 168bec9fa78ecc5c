//! Deep JSON comparison for test harnesses.
//!
//! Compares an "expected" JSON tree against an "actual" one, recording
//! every structural or value difference as a structured [`Discrepancy`]
//! and mirroring each record to the `tracing` error stream. Mismatches
//! are never errors; the only failure is passing a non-object at the top
//! level.
//!
//! # Key Types
//!
//! - [`Comparison`] / [`Discrepancy`] / [`Reason`] — the comparison report
//! - [`CompareConfig`] / [`CompareMode`] — strict vs aggregate key-set policy
//! - [`KeyPath`] — location of a mismatch within the compared trees
//!
//! # Example
//!
//! ```
//! use jexpect::{compare, CompareConfig};
//! use serde_json::json;
//!
//! let expected = json!({"x": 1, "y": "s"});
//! let actual = json!({"x": 1, "y": "s"});
//!
//! let report = compare(&expected, &actual, &CompareConfig::default()).unwrap();
//! assert!(report.is_match());
//! ```

pub mod compare;
pub mod config;
pub mod discrepancy;
pub mod error;
pub mod path;

pub use compare::{compare, compare_objects, matches};
pub use config::{CompareConfig, CompareMode};
pub use discrepancy::{Comparison, Discrepancy, Reason};
pub use error::{CompareError, CompareResult, Side};
pub use path::KeyPath;
