//! Column descriptors and duplicate-column removal.
//!
//! Introspection joins across schemas can report the same column more than
//! once. [`dedupe_columns`] keeps the first report and drops the rest.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Data type reported for user-defined (enum) columns.
pub const USER_DEFINED: &str = "USER-DEFINED";

/// Raw metadata for one column as reported by introspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Owning table name.
    pub table_name: String,
    /// Column name.
    pub column_name: String,
    /// Raw type string, e.g. `character varying` or `int(11) unsigned`.
    pub raw_type: String,
    /// Whether the column accepts NULL.
    #[serde(default)]
    pub is_nullable: bool,
    /// Whether the column is an unsigned numeric.
    #[serde(default)]
    pub is_unsigned: bool,
    /// Referenced enum type name for user-defined columns.
    #[serde(default)]
    pub enum_ref: Option<String>,
}

impl ColumnDescriptor {
    /// Creates a non-nullable, signed descriptor without enum reference.
    #[must_use]
    pub fn new(
        table_name: impl Into<String>,
        column_name: impl Into<String>,
        raw_type: impl Into<String>,
    ) -> Self {
        Self {
            table_name: table_name.into(),
            column_name: column_name.into(),
            raw_type: raw_type.into(),
            is_nullable: false,
            is_unsigned: false,
            enum_ref: None,
        }
    }

    /// Creates a descriptor from an `information_schema.columns` style row.
    ///
    /// `is_nullable` is the literal `YES`/`NO` column. The unsigned flag is
    /// read from a trailing ` unsigned` qualifier on `data_type`, and the
    /// enum reference is taken from `udt_name` for `USER-DEFINED` columns.
    #[must_use]
    pub fn from_information_schema(
        table_name: impl Into<String>,
        column_name: impl Into<String>,
        data_type: &str,
        is_nullable: &str,
        udt_name: Option<&str>,
    ) -> Self {
        let enum_ref = if data_type.eq_ignore_ascii_case(USER_DEFINED) {
            udt_name.map(str::to_string)
        } else {
            None
        };

        Self {
            table_name: table_name.into(),
            column_name: column_name.into(),
            raw_type: data_type.to_string(),
            is_nullable: is_nullable.eq_ignore_ascii_case("YES"),
            is_unsigned: data_type.to_ascii_lowercase().ends_with(" unsigned"),
            enum_ref,
        }
    }

    /// Sets nullability.
    #[must_use]
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.is_nullable = nullable;
        self
    }

    /// Sets the unsigned flag.
    #[must_use]
    pub fn unsigned(mut self, unsigned: bool) -> Self {
        self.is_unsigned = unsigned;
        self
    }

    /// Sets the referenced enum name.
    #[must_use]
    pub fn enum_ref(mut self, name: impl Into<String>) -> Self {
        self.enum_ref = Some(name.into());
        self
    }

    /// Returns `table.column`, used in diagnostics.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.table_name, self.column_name)
    }
}

/// Removes repeated columns, keeping the first occurrence of each name.
///
/// Output order is the input order of first occurrences. Later duplicates
/// are dropped silently even when their metadata differs.
#[must_use]
pub fn dedupe_columns(columns: Vec<ColumnDescriptor>) -> Vec<ColumnDescriptor> {
    let mut seen = HashSet::with_capacity(columns.len());
    let mut kept = Vec::with_capacity(columns.len());

    for column in columns {
        if seen.contains(column.column_name.as_str()) {
            tracing::debug!("Dropping duplicate column {}", column.qualified_name());
            continue;
        }
        seen.insert(column.column_name.clone());
        kept.push(column);
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedupe_keeps_first_occurrence() {
        let columns = vec![
            ColumnDescriptor::new("t", "id", "int"),
            ColumnDescriptor::new("t", "id", "int").nullable(true),
        ];

        let deduped = dedupe_columns(columns);
        assert_eq!(deduped.len(), 1);
        assert!(!deduped[0].is_nullable);
    }

    #[test]
    fn test_dedupe_preserves_order() {
        let columns = vec![
            ColumnDescriptor::new("t", "b", "text"),
            ColumnDescriptor::new("t", "a", "text"),
            ColumnDescriptor::new("t", "b", "integer"),
            ColumnDescriptor::new("t", "c", "text"),
            ColumnDescriptor::new("t", "a", "uuid"),
        ];

        let names: Vec<_> = dedupe_columns(columns)
            .into_iter()
            .map(|c| c.column_name)
            .collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_dedupe_empty() {
        assert!(dedupe_columns(Vec::new()).is_empty());
    }

    #[test]
    fn test_from_information_schema_user_defined() {
        let column = ColumnDescriptor::from_information_schema(
            "users",
            "role",
            "USER-DEFINED",
            "NO",
            Some("Role"),
        );
        assert_eq!(column.enum_ref.as_deref(), Some("Role"));
        assert!(!column.is_nullable);
        assert!(!column.is_unsigned);
    }

    #[test]
    fn test_from_information_schema_unsigned_nullable() {
        let column = ColumnDescriptor::from_information_schema(
            "posts",
            "views",
            "int unsigned",
            "YES",
            Some("int4"),
        );
        assert!(column.is_nullable);
        assert!(column.is_unsigned);
        assert_eq!(column.enum_ref, None);
    }

    #[test]
    fn test_qualified_name() {
        let column = ColumnDescriptor::new("users", "email", "text");
        assert_eq!(column.qualified_name(), "users.email");
    }
}
