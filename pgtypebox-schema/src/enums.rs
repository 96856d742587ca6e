//! Enum registry.
//!
//! Introspection reports enums as `(enum_name, value)` rows. Join-based
//! queries repeat rows, so the registry collapses duplicate values while
//! keeping the order in which values were first seen.

use crate::casing::CasingPolicy;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One raw enum row as reported by introspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEnumRow {
    /// Enum type name.
    pub enum_name: String,
    /// Enum label.
    pub value: String,
}

impl RawEnumRow {
    /// Creates a new raw row.
    #[must_use]
    pub fn new(enum_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            enum_name: enum_name.into(),
            value: value.into(),
        }
    }

    /// Expands an aggregated label literal such as `{USER,ADMIN}` into rows.
    ///
    /// Labels containing separators are double-quoted by the database, with
    /// `\"` and `\\` escapes inside quotes.
    #[must_use]
    pub fn from_aggregate(enum_name: &str, literal: &str) -> Vec<Self> {
        parse_label_literal(literal)
            .into_iter()
            .map(|value| Self::new(enum_name, value))
            .collect()
    }
}

/// An enum definition with unique, ordered values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescriptor {
    /// Enum type name as reported.
    pub enum_name: String,
    /// Unique values in first-seen order.
    pub values: Vec<String>,
}

impl EnumDescriptor {
    /// Returns the emitted name of this enum under a casing policy.
    #[must_use]
    pub fn emitted_name(&self, casing: CasingPolicy) -> String {
        casing.apply(&self.enum_name)
    }
}

/// Registry of enum definitions for one generation run.
#[derive(Debug, Clone, Default)]
pub struct EnumRegistry {
    enums: Vec<EnumDescriptor>,
    index: HashMap<String, usize>,
}

impl EnumRegistry {
    /// Builds a registry from raw rows.
    ///
    /// Enums keep the order of their first row; values are deduplicated.
    #[must_use]
    pub fn register<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = RawEnumRow>,
    {
        let mut registry = Self::default();
        let mut seen: Vec<HashSet<String>> = Vec::new();

        for row in rows {
            let idx = match registry.index.get(&row.enum_name) {
                Some(&idx) => idx,
                None => {
                    let idx = registry.enums.len();
                    registry.enums.push(EnumDescriptor {
                        enum_name: row.enum_name.clone(),
                        values: Vec::new(),
                    });
                    registry.index.insert(row.enum_name.clone(), idx);
                    seen.push(HashSet::new());
                    idx
                }
            };

            if seen[idx].insert(row.value.clone()) {
                registry.enums[idx].values.push(row.value);
            }
        }

        tracing::debug!("Registered {} enums", registry.enums.len());
        registry
    }

    /// Looks up an enum by its reported name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&EnumDescriptor> {
        self.index.get(name).map(|&idx| &self.enums[idx])
    }

    /// Iterates enums in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &EnumDescriptor> {
        self.enums.iter()
    }

    /// Number of registered enums.
    #[must_use]
    pub fn len(&self) -> usize {
        self.enums.len()
    }

    /// Returns true if no enum is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enums.is_empty()
    }
}

fn parse_label_literal(literal: &str) -> Vec<String> {
    let trimmed = literal.trim();
    let body = trimmed
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .unwrap_or(trimmed);

    if body.is_empty() {
        return Vec::new();
    }

    let mut labels = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => in_quotes = !in_quotes,
            '\\' if in_quotes => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            ',' if !in_quotes => labels.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    labels.push(current);

    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_dedupes_values() {
        let registry = EnumRegistry::register(vec![
            RawEnumRow::new("Role", "USER"),
            RawEnumRow::new("Role", "ADMIN"),
            RawEnumRow::new("Role", "USER"),
        ]);

        assert_eq!(registry.len(), 1);
        let role = registry.lookup("Role").expect("Role missing");
        assert_eq!(role.values, vec!["USER", "ADMIN"]);
    }

    #[test]
    fn test_register_keeps_first_seen_enum_order() {
        let registry = EnumRegistry::register(vec![
            RawEnumRow::new("status", "on"),
            RawEnumRow::new("Role", "USER"),
            RawEnumRow::new("status", "off"),
        ]);

        let names: Vec<_> = registry.iter().map(|e| e.enum_name.as_str()).collect();
        assert_eq!(names, vec!["status", "Role"]);
        assert_eq!(
            registry.lookup("status").map(|e| e.values.clone()),
            Some(vec!["on".to_string(), "off".to_string()])
        );
    }

    #[test]
    fn test_lookup_missing() {
        let registry = EnumRegistry::register(Vec::new());
        assert!(registry.is_empty());
        assert!(registry.lookup("Role").is_none());
    }

    #[test]
    fn test_emitted_name() {
        let registry = EnumRegistry::register(vec![RawEnumRow::new("order_status", "open")]);
        let status = registry.lookup("order_status").expect("enum missing");
        assert_eq!(status.emitted_name(CasingPolicy::Verbatim), "order_status");
        assert_eq!(status.emitted_name(CasingPolicy::Pascal), "OrderStatus");
    }

    #[test]
    fn test_from_aggregate() {
        let rows = RawEnumRow::from_aggregate("Role", "{USER,ADMIN}");
        assert_eq!(
            rows,
            vec![RawEnumRow::new("Role", "USER"), RawEnumRow::new("Role", "ADMIN")]
        );
    }

    #[test]
    fn test_from_aggregate_quoted_labels() {
        let rows = RawEnumRow::from_aggregate("state", r#"{"in progress","a,b",done}"#);
        let values: Vec<_> = rows.into_iter().map(|r| r.value).collect();
        assert_eq!(values, vec!["in progress", "a,b", "done"]);
    }

    #[test]
    fn test_from_aggregate_empty() {
        assert!(RawEnumRow::from_aggregate("empty", "{}").is_empty());
    }
}
