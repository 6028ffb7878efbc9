//! Cache key composition
//!
//! The four key namespaces use disjoint prefixes so an invalidation sweep can
//! target one namespace without touching the others. Filter canonicalization
//! serializes present fields in fixed alphabetical field order, so two
//! semantically equal filters always produce the same key.

use crate::models::{ListingFilter, SearchFilter};

// == Key Namespaces ==
/// Prefix for cached aggregate records, one per listing id.
pub const ENTITY_PREFIX: &str = "entity:";
/// Prefix for cached list-query results.
pub const LIST_PREFIX: &str = "list:";
/// Prefix for cached search results.
pub const SEARCH_PREFIX: &str = "search:";
/// Prefix for cached per-category results.
pub const CATEGORY_PREFIX: &str = "category:";

/// Cache key for a listing's aggregate record.
pub fn entity_key(id: &str) -> String {
    format!("{ENTITY_PREFIX}{id}")
}

/// Cache key for a list query with the given filters.
pub fn list_key(filter: &ListingFilter) -> String {
    format!("{LIST_PREFIX}{}", canonical_list_filter(filter))
}

/// Cache key for a free-text search with the given filters.
pub fn search_key(query: &str, filter: &SearchFilter) -> String {
    format!(
        "{SEARCH_PREFIX}{}|{}",
        escape(query),
        canonical_search_filter(filter)
    )
}

/// Cache key for a category lookup.
pub fn category_key(name: &str) -> String {
    format!("{CATEGORY_PREFIX}{name}")
}

/// Escapes the key separator characters inside a value.
///
/// Keeps canonicalization injective: a value containing `&`, `=` or `|` must
/// not parse as extra fields of the canonical string. `%` is escaped first so
/// escaped and literal forms can never collide.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '%' => out.push_str("%25"),
            '&' => out.push_str("%26"),
            '=' => out.push_str("%3D"),
            '|' => out.push_str("%7C"),
            _ => out.push(ch),
        }
    }
    out
}

/// Joins `field=value` pairs for the fields that are present. Callers pass
/// the pairs already in alphabetical field order.
fn join_fields(fields: &[(&str, Option<String>)]) -> String {
    let present: Vec<String> = fields
        .iter()
        .filter_map(|(name, value)| value.as_ref().map(|v| format!("{name}={}", escape(v))))
        .collect();
    present.join("&")
}

fn canonical_list_filter(filter: &ListingFilter) -> String {
    join_fields(&[
        ("limit", filter.limit.map(|v| v.to_string())),
        ("locality", filter.locality.clone()),
        ("offset", filter.offset.map(|v| v.to_string())),
        ("service", filter.service.clone()),
        ("status", filter.status.map(|s| s.as_str().to_string())),
    ])
}

fn canonical_search_filter(filter: &SearchFilter) -> String {
    join_fields(&[
        ("limit", filter.limit.map(|v| v.to_string())),
        ("locality", filter.locality.clone()),
        ("service", filter.service.clone()),
    ])
}
