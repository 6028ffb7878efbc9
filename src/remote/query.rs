//! Query representation for the remote store
//!
//! A small composable predicate AST plus an ordering directive. A networked
//! store implementation would translate these into its filter syntax; the
//! in-memory implementation evaluates them directly against JSON records.

use serde_json::Value;

// == Predicate ==
/// Filter condition over a record's scalar fields.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Matches every record
    All,
    /// Field equals the given string (numbers compare via their JSON string form)
    Eq(String, String),
    /// Field contains the given substring, case-insensitively
    Contains(String, String),
    /// Field equals any of the given strings
    In(String, Vec<String>),
    /// All sub-predicates match
    And(Vec<Predicate>),
    /// At least one sub-predicate matches
    Or(Vec<Predicate>),
}

impl Predicate {
    /// Shorthand for an equality condition.
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Predicate::Eq(field.into(), value.into())
    }

    /// Shorthand for a case-insensitive substring condition.
    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Predicate::Contains(field.into(), value.into())
    }

    /// Evaluates the predicate against a JSON record.
    ///
    /// Missing fields and non-scalar fields never match; `And([])` matches
    /// everything and `Or([])` matches nothing, following the usual identity
    /// elements.
    pub fn matches(&self, record: &Value) -> bool {
        match self {
            Predicate::All => true,
            Predicate::Eq(field, expected) => {
                field_as_string(record, field).is_some_and(|actual| actual == *expected)
            }
            Predicate::Contains(field, needle) => field_as_string(record, field)
                .is_some_and(|actual| actual.to_lowercase().contains(&needle.to_lowercase())),
            Predicate::In(field, values) => {
                field_as_string(record, field).is_some_and(|actual| values.contains(&actual))
            }
            Predicate::And(preds) => preds.iter().all(|p| p.matches(record)),
            Predicate::Or(preds) => preds.iter().any(|p| p.matches(record)),
        }
    }
}

/// Reads a scalar field as a string, `None` for missing or non-scalar fields.
fn field_as_string(record: &Value, field: &str) -> Option<String> {
    match record.get(field)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

// == Order ==
/// Ordering directive for `find_many`.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Field to sort on (string comparison)
    pub field: String,
    /// Ascending when true
    pub ascending: bool,
}

impl Order {
    /// Ascending order on the given field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: true,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> Value {
        json!({
            "id": "l1",
            "name": "Corner Bakery",
            "locality": "Brighton",
            "status": "active",
            "display_order": 3
        })
    }

    #[test]
    fn test_all_matches_everything() {
        assert!(Predicate::All.matches(&record()));
    }

    #[test]
    fn test_eq_on_string_field() {
        assert!(Predicate::eq("status", "active").matches(&record()));
        assert!(!Predicate::eq("status", "pending").matches(&record()));
    }

    #[test]
    fn test_eq_on_numeric_field() {
        assert!(Predicate::eq("display_order", "3").matches(&record()));
    }

    #[test]
    fn test_eq_missing_field_never_matches() {
        assert!(!Predicate::eq("nonexistent", "x").matches(&record()));
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        assert!(Predicate::contains("name", "bakery").matches(&record()));
        assert!(Predicate::contains("locality", "BRIGHT").matches(&record()));
        assert!(!Predicate::contains("name", "butcher").matches(&record()));
    }

    #[test]
    fn test_in_matches_membership() {
        let p = Predicate::In("id".to_string(), vec!["l1".to_string(), "l2".to_string()]);
        assert!(p.matches(&record()));

        let p = Predicate::In("id".to_string(), vec!["l9".to_string()]);
        assert!(!p.matches(&record()));
    }

    #[test]
    fn test_and_or_composition() {
        let p = Predicate::And(vec![
            Predicate::eq("status", "active"),
            Predicate::Or(vec![
                Predicate::contains("name", "bakery"),
                Predicate::contains("name", "butcher"),
            ]),
        ]);
        assert!(p.matches(&record()));
    }

    #[test]
    fn test_empty_and_or_identities() {
        assert!(Predicate::And(vec![]).matches(&record()));
        assert!(!Predicate::Or(vec![]).matches(&record()));
    }

    #[test]
    fn test_empty_in_matches_nothing() {
        let p = Predicate::In("id".to_string(), vec![]);
        assert!(!p.matches(&record()));
    }
}
