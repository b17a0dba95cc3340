//! Self-healing validation for persisted layout data.
//!
//! Stored layouts can be outdated or corrupt in well-known ways: an older
//! release saved them double-encoded as JSON strings, a stale format leaked
//! enum names instead of integer ids, or the widget catalog simply grew since
//! the data was written. None of these are surfaced as errors; the repair
//! pass classifies the stored value and falls back to the built-in default
//! whenever it cannot be trusted. See [`check_layout`] for the exact rules.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::grid::LayoutSet;

/// Outcome of schema-checking a stored layout value.
#[derive(Debug)]
pub enum Validity<W> {
    /// The stored value decoded into a usable layout set.
    Valid(LayoutSet<W>),
    /// The stored value is unusable; the caller should fall back to a default.
    Invalid(InvalidReason),
}

/// Why a stored layout value was rejected.
///
/// Only used for diagnostics: every reason leads to the same silent fallback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidReason {
    /// No value was stored for this layout.
    #[error("no stored value")]
    Null,
    /// The value is a JSON string: an un-deserialized blob left behind by
    /// the legacy per-key storage format.
    #[error("stored value is an unparsed JSON string")]
    NotDeserialized,
    /// The value is present but not an array.
    #[error("stored value is not an array")]
    NotAnArray,
    /// The array holds no entries.
    #[error("stored layout is empty")]
    Empty,
    /// The first entry's id is a string, a stale serialization format where
    /// enumerant names leaked through as text.
    #[error("widget ids are stored as names, not integers")]
    StringId,
    /// The stored array is shorter than the current default, meaning the
    /// widget catalog grew since the data was saved.
    #[error("stored layout has {found} entries, expected at least {expected}")]
    TooShort {
        /// Entries found in storage.
        found: usize,
        /// Entries in the current default layout.
        expected: usize,
    },
    /// The array shape looked right but typed decoding failed (unknown
    /// widget id, negative coordinate, missing field, ...).
    #[error("stored layout does not decode: {0}")]
    Malformed(String),
}

/// Classifies a stored layout value against the current schema.
///
/// Checks run in order: null, string (double-encoded legacy blob), non-array,
/// empty, string-typed first id, under-length versus `expected_len`, and
/// finally a full typed decode. The first failing check wins.
pub fn check_layout<W>(value: &Value, expected_len: usize) -> Validity<W>
where
    W: DeserializeOwned,
{
    let entries = match value {
        Value::Null => return Validity::Invalid(InvalidReason::Null),
        Value::String(_) => return Validity::Invalid(InvalidReason::NotDeserialized),
        Value::Array(entries) => entries,
        _ => return Validity::Invalid(InvalidReason::NotAnArray),
    };
    if entries.is_empty() {
        return Validity::Invalid(InvalidReason::Empty);
    }
    if entries[0].get("i").is_some_and(Value::is_string) {
        return Validity::Invalid(InvalidReason::StringId);
    }
    if entries.len() < expected_len {
        return Validity::Invalid(InvalidReason::TooShort {
            found: entries.len(),
            expected: expected_len,
        });
    }
    match serde_json::from_value(value.clone()) {
        Ok(layout) => Validity::Valid(layout),
        Err(err) => Validity::Invalid(InvalidReason::Malformed(err.to_string())),
    }
}

/// Repairs a stored layout value, substituting `default` when it is unusable.
///
/// This is a repair policy, not error handling: it never fails, and the only
/// trace of a rejected value is a debug log entry naming `context`.
pub fn repair_layout<W>(value: &Value, default: LayoutSet<W>, context: &str) -> LayoutSet<W>
where
    W: DeserializeOwned,
{
    match check_layout(value, default.len()) {
        Validity::Valid(layout) => layout,
        Validity::Invalid(reason) => {
            tracing::debug!("restoring default {context} layout: {reason}");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::catalog::{self, DashboardWidget};
    use serde_json::json;

    fn check(value: &Value) -> Validity<DashboardWidget> {
        check_layout(value, catalog::default_dashboard_layout().len())
    }

    fn reason(value: &Value) -> InvalidReason {
        match check(value) {
            Validity::Invalid(reason) => reason,
            Validity::Valid(_) => panic!("expected invalid value: {value}"),
        }
    }

    #[test]
    fn default_layout_checks_as_valid() {
        let value = serde_json::to_value(catalog::default_dashboard_layout())
            .expect("default serializes");
        match check(&value) {
            Validity::Valid(layout) => {
                assert_eq!(layout, catalog::default_dashboard_layout());
            }
            Validity::Invalid(reason) => panic!("default rejected: {reason}"),
        }
    }

    #[test]
    fn null_is_rejected() {
        assert_eq!(reason(&Value::Null), InvalidReason::Null);
    }

    #[test]
    fn string_blob_is_rejected_as_not_deserialized() {
        assert_eq!(
            reason(&json!("[{\"i\":0,\"x\":0}]")),
            InvalidReason::NotDeserialized
        );
    }

    #[test]
    fn object_is_rejected_as_not_an_array() {
        assert_eq!(reason(&json!({"i": 0})), InvalidReason::NotAnArray);
    }

    #[test]
    fn empty_array_is_rejected() {
        assert_eq!(reason(&json!([])), InvalidReason::Empty);
    }

    #[test]
    fn string_id_in_first_entry_is_rejected() {
        let value = json!([{"i": "dailyChart", "x": 0, "y": 0, "w": 4, "h": 6}]);
        assert_eq!(reason(&value), InvalidReason::StringId);
    }

    #[test]
    fn under_length_array_is_rejected() {
        let mut layout = serde_json::to_value(catalog::default_dashboard_layout())
            .expect("default serializes");
        layout.as_array_mut().expect("is array").pop();
        assert_eq!(
            reason(&layout),
            InvalidReason::TooShort {
                found: 6,
                expected: 7
            }
        );
    }

    #[test]
    fn unknown_widget_id_is_rejected_as_malformed() {
        let mut entries = serde_json::to_value(catalog::default_dashboard_layout())
            .expect("default serializes");
        entries.as_array_mut().expect("is array")[3]["i"] = json!(42);
        assert!(matches!(reason(&entries), InvalidReason::Malformed(_)));
    }

    #[test]
    fn over_length_array_with_valid_ids_is_kept() {
        let mut layout = serde_json::to_value(catalog::default_dashboard_layout())
            .expect("default serializes");
        let duplicate = layout.as_array().expect("is array")[0].clone();
        layout.as_array_mut().expect("is array").push(duplicate);
        match check(&layout) {
            Validity::Valid(layout) => assert_eq!(layout.len(), 8),
            Validity::Invalid(reason) => panic!("over-length rejected: {reason}"),
        }
    }

    #[test]
    fn repair_substitutes_default_for_invalid_values() {
        let repaired = repair_layout(
            &json!("not-an-array"),
            catalog::default_dashboard_layout(),
            "dashboard",
        );
        assert_eq!(repaired, catalog::default_dashboard_layout());
    }

    #[test]
    fn repair_keeps_valid_stored_layouts() {
        let mut stored = catalog::default_dashboard_layout();
        for cell in stored.iter_mut() {
            cell.y += 1;
        }
        let value = serde_json::to_value(&stored).expect("layout serializes");
        let repaired = repair_layout(&value, catalog::default_dashboard_layout(), "dashboard");
        assert_eq!(repaired, stored);
    }
}
