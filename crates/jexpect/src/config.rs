use serde::{Deserialize, Serialize};

/// Key-set mismatch policy.
///
/// The two modes differ only in how missing and unexpected keys are
/// detected and reported; the per-key type/value checks are identical.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareMode {
    /// Fail the whole comparison as soon as the two sides declare a
    /// different number of keys, reporting both key lists, then report
    /// each missing key as it is encountered. Unexpected keys are implied
    /// by the count and not reported individually.
    #[default]
    Strict,
    /// Collect the full missing and unexpected key sets up front and
    /// report them individually, then compare the keys present on both
    /// sides. Each recursive descent is bracketed by a log span so
    /// subscribers can group nested output.
    Aggregate,
}

/// Configuration for a comparison.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareConfig {
    /// How key-set mismatches are detected and reported.
    pub mode: CompareMode,
}

impl CompareConfig {
    /// Strict-mode configuration (the default).
    pub fn strict() -> Self {
        Self {
            mode: CompareMode::Strict,
        }
    }

    /// Aggregate-mode configuration.
    pub fn aggregate() -> Self {
        Self {
            mode: CompareMode::Aggregate,
        }
    }
}
