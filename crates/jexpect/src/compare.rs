//! The recursive comparison walk.
//!
//! Compares an expected JSON tree against an actual one, recording every
//! difference as a [`Discrepancy`] and mirroring each record to the
//! `tracing` error stream. The walk is fully synchronous and keeps all
//! state in the call-local [`Comparison`] accumulator.

use std::mem;

use serde_json::{Map, Value};

use crate::config::{CompareConfig, CompareMode};
use crate::discrepancy::{Comparison, Discrepancy};
use crate::error::{CompareError, CompareResult, Side};
use crate::path::KeyPath;

/// Compare two top-level JSON values.
///
/// Both arguments must be objects; anything else is rejected with
/// [`CompareError::NotAnObject`]. The returned report lists every
/// discrepancy found at any depth; [`Comparison::is_match`] is `true`
/// only if there were none.
pub fn compare(
    expected: &Value,
    actual: &Value,
    config: &CompareConfig,
) -> CompareResult<Comparison> {
    let expected = expected.as_object().ok_or(CompareError::NotAnObject {
        side: Side::Expected,
        kind: kind(expected),
    })?;
    let actual = actual.as_object().ok_or(CompareError::NotAnObject {
        side: Side::Actual,
        kind: kind(actual),
    })?;
    Ok(compare_objects(expected, actual, config))
}

/// Compare two JSON objects. Infallible: every difference becomes a
/// [`Discrepancy`] in the returned report.
pub fn compare_objects(
    expected: &Map<String, Value>,
    actual: &Map<String, Value>,
    config: &CompareConfig,
) -> Comparison {
    let mut report = Comparison::new();
    compare_entries(
        &Entries::Object(expected),
        &Entries::Object(actual),
        &KeyPath::root(),
        config,
        &mut report,
    );
    report
}

/// Boolean-only convenience entry using the default configuration.
///
/// Non-object input yields `false` rather than an error.
pub fn matches(expected: &Value, actual: &Value) -> bool {
    compare(expected, actual, &CompareConfig::default())
        .map(|report| report.is_match())
        .unwrap_or(false)
}

/// A uniform key-indexed view over an object or an array.
///
/// Arrays are enumerated as mappings from decimal index strings to their
/// elements, so both shapes go through the same key-set policy and length
/// differences surface as key-set mismatches.
enum Entries<'a> {
    Object(&'a Map<String, Value>),
    Array(&'a [Value]),
}

impl<'a> Entries<'a> {
    fn keys(&self) -> Vec<String> {
        match self {
            Entries::Object(map) => map.keys().cloned().collect(),
            Entries::Array(items) => (0..items.len()).map(|i| i.to_string()).collect(),
        }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        match self {
            Entries::Object(map) => map.get(key),
            Entries::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        }
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (String, &'a Value)> + 'a> {
        match self {
            Entries::Object(map) => Box::new(map.iter().map(|(k, v)| (k.clone(), v))),
            Entries::Array(items) => {
                Box::new(items.iter().enumerate().map(|(i, v)| (i.to_string(), v)))
            }
        }
    }
}

fn compare_entries(
    expected: &Entries<'_>,
    actual: &Entries<'_>,
    path: &KeyPath,
    config: &CompareConfig,
    report: &mut Comparison,
) {
    let e_keys = expected.keys();
    let a_keys = actual.keys();

    match config.mode {
        CompareMode::Strict => {
            if e_keys.len() != a_keys.len() {
                record(
                    report,
                    Discrepancy::KeyCountMismatch {
                        path: path.clone(),
                        expected_keys: e_keys.clone(),
                        actual_keys: a_keys.clone(),
                    },
                );
            }
        }
        CompareMode::Aggregate => {
            for key in e_keys.iter().filter(|k| !a_keys.contains(*k)) {
                record(
                    report,
                    Discrepancy::MissingKey {
                        path: path.child(key),
                    },
                );
            }
            for key in a_keys.iter().filter(|k| !e_keys.contains(*k)) {
                record(
                    report,
                    Discrepancy::UnexpectedKey {
                        path: path.child(key),
                    },
                );
            }
        }
    }

    // Recursion follows expected's iteration order.
    for (key, e_val) in expected.iter() {
        let child = path.child(&key);
        match actual.get(&key) {
            Some(a_val) => compare_value(e_val, a_val, &child, config, report),
            None => {
                // Aggregate mode already reported the full missing set.
                if config.mode == CompareMode::Strict {
                    record(report, Discrepancy::MissingKey { path: child });
                }
            }
        }
    }
}

fn compare_value(
    expected: &Value,
    actual: &Value,
    path: &KeyPath,
    config: &CompareConfig,
    report: &mut Comparison,
) {
    // Tag check first; a mismatched tag suppresses any deeper comparison.
    if mem::discriminant(expected) != mem::discriminant(actual) {
        record(
            report,
            Discrepancy::TypeMismatch {
                path: path.clone(),
                expected: expected.clone(),
                actual: actual.clone(),
            },
        );
        return;
    }

    let (e_entries, a_entries) = match (expected, actual) {
        (Value::Object(e), Value::Object(a)) => (Entries::Object(e), Entries::Object(a)),
        (Value::Array(e), Value::Array(a)) => (Entries::Array(e), Entries::Array(a)),
        _ => {
            // Equal tags, scalar values (including null vs null): strict
            // equality, no coercion.
            if expected != actual {
                record(
                    report,
                    Discrepancy::ValueMismatch {
                        path: path.clone(),
                        expected: expected.clone(),
                        actual: actual.clone(),
                    },
                );
            }
            return;
        }
    };

    // Aggregate mode groups nested output under a span, keyed by the field
    // being descended into.
    let _group = (config.mode == CompareMode::Aggregate).then(|| {
        tracing::error_span!(
            "compare",
            key = %path.key().unwrap_or("/"),
            expected = %expected,
            actual = %actual,
        )
        .entered()
    });

    let before = report.len();
    compare_entries(&e_entries, &a_entries, path, config, report);
    if report.len() > before {
        record(report, Discrepancy::NestedMismatch { path: path.clone() });
    }
}

/// Record one discrepancy: emit the structured log record, then append it
/// to the report.
fn record(report: &mut Comparison, discrepancy: Discrepancy) {
    match &discrepancy {
        Discrepancy::TypeMismatch {
            path,
            expected,
            actual,
        }
        | Discrepancy::ValueMismatch {
            path,
            expected,
            actual,
        } => {
            tracing::error!(
                reason = %discrepancy.reason(),
                path = %path,
                expected = %expected,
                actual = %actual,
                "comparison discrepancy"
            );
        }
        Discrepancy::KeyCountMismatch {
            path,
            expected_keys,
            actual_keys,
        } => {
            tracing::error!(
                reason = %discrepancy.reason(),
                path = %path,
                expected = ?expected_keys,
                actual = ?actual_keys,
                "comparison discrepancy"
            );
        }
        Discrepancy::MissingKey { path }
        | Discrepancy::UnexpectedKey { path }
        | Discrepancy::NestedMismatch { path } => {
            tracing::error!(
                reason = %discrepancy.reason(),
                path = %path,
                "comparison discrepancy"
            );
        }
    }
    report.discrepancies.push(discrepancy);
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
