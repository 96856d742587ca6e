//! Generation configuration.

use crate::casing::CasingPolicy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Schema introspected when no schema allowlist is configured.
pub const DEFAULT_SCHEMA: &str = "public";

/// Table prefix skipped by default (migration bookkeeping tables).
pub const DEFAULT_EXCLUDED_PREFIX: &str = "knex_";

/// Configuration for one generation run.
///
/// Immutable once a run starts. Build it with the setter methods or
/// deserialize it from a JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Casing applied to table, field, alias and enum names.
    pub casing: CasingPolicy,
    /// Only these tables are generated when set.
    pub table_allowlist: Option<BTreeSet<String>>,
    /// These tables are never generated.
    pub table_denylist: Option<BTreeSet<String>>,
    /// Schemas to introspect; defaults to `public`.
    pub schema_allowlist: Option<BTreeSet<String>>,
    /// Minimum length constraint for non-nullable text columns.
    pub required_string_min_length: Option<u32>,
    /// Tables whose names start with any of these prefixes are skipped.
    pub excluded_table_prefixes: Vec<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            casing: CasingPolicy::Verbatim,
            table_allowlist: None,
            table_denylist: None,
            schema_allowlist: None,
            required_string_min_length: None,
            excluded_table_prefixes: vec![DEFAULT_EXCLUDED_PREFIX.to_string()],
        }
    }
}

impl GenerationConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the casing policy.
    #[must_use]
    pub fn casing(mut self, casing: CasingPolicy) -> Self {
        self.casing = casing;
        self
    }

    /// Restricts generation to the given tables.
    #[must_use]
    pub fn allow_tables<I, S>(mut self, tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.table_allowlist = Some(tables.into_iter().map(Into::into).collect());
        self
    }

    /// Excludes the given tables from generation.
    #[must_use]
    pub fn deny_tables<I, S>(mut self, tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.table_denylist = Some(tables.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the schemas to introspect.
    #[must_use]
    pub fn schemas<I, S>(mut self, schemas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.schema_allowlist = Some(schemas.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the minimum length for required text columns.
    #[must_use]
    pub fn required_string_min_length(mut self, min_length: u32) -> Self {
        self.required_string_min_length = Some(min_length);
        self
    }

    /// Replaces the excluded table prefixes.
    #[must_use]
    pub fn excluded_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_table_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the schemas a run introspects.
    #[must_use]
    pub fn selected_schemas(&self) -> BTreeSet<String> {
        self.schema_allowlist
            .clone()
            .unwrap_or_else(|| BTreeSet::from([DEFAULT_SCHEMA.to_string()]))
    }

    /// Returns the excluded prefix matching `table`, if any.
    #[must_use]
    pub fn excluded_prefix(&self, table: &str) -> Option<&str> {
        self.excluded_table_prefixes
            .iter()
            .find(|prefix| !prefix.is_empty() && table.starts_with(prefix.as_str()))
            .map(String::as_str)
    }

    /// Returns true if the table passes prefix, allowlist and denylist filters.
    #[must_use]
    pub fn includes_table(&self, table: &str) -> bool {
        if self.excluded_prefix(table).is_some() {
            return false;
        }
        let allowed = self
            .table_allowlist
            .as_ref()
            .is_none_or(|allow| allow.contains(table));
        let denied = self
            .table_denylist
            .as_ref()
            .is_some_and(|deny| deny.contains(table));
        allowed && !denied
    }

    /// Filters and sorts table names for a run.
    ///
    /// The result is sorted lexicographically and free of duplicates so
    /// output order does not depend on introspection order.
    #[must_use]
    pub fn select_tables(&self, tables: Vec<String>) -> Vec<String> {
        let selected: BTreeSet<String> = tables
            .into_iter()
            .filter(|table| self.includes_table(table))
            .collect();
        selected.into_iter().collect()
    }
}
