//! Introspection source boundary.
//!
//! A [`SchemaSource`] answers the three introspection questions a run asks.
//! Live database access is left to implementors; [`SchemaSnapshot`] serves
//! answers from a captured JSON dump.

use crate::column::ColumnDescriptor;
use crate::enums::RawEnumRow;
use crate::error::SourceError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Supplier of raw schema metadata.
pub trait SchemaSource {
    /// Lists base tables in the given schemas, in source order.
    ///
    /// # Errors
    /// Returns `SourceError` if the source cannot be queried.
    fn list_tables(&self, schemas: &BTreeSet<String>) -> Result<Vec<String>, SourceError>;

    /// Lists columns of a table, in ordinal order.
    ///
    /// # Errors
    /// Returns `SourceError` if the table is unknown or the source fails.
    fn list_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>, SourceError>;

    /// Lists raw enum rows in the given schemas. Rows may repeat.
    ///
    /// # Errors
    /// Returns `SourceError` if the source cannot be queried.
    fn list_enums(&self, schemas: &BTreeSet<String>) -> Result<Vec<RawEnumRow>, SourceError>;
}

/// Captured introspection result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaSnapshot {
    /// Tables in introspection order.
    #[serde(default)]
    pub tables: Vec<SnapshotTable>,
    /// Enum types in introspection order.
    #[serde(default)]
    pub enums: Vec<SnapshotEnum>,
}

/// One table of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotTable {
    /// Owning schema.
    #[serde(default = "default_schema")]
    pub schema: String,
    /// Table name.
    pub name: String,
    /// Columns in ordinal order.
    #[serde(default)]
    pub columns: Vec<SnapshotColumn>,
}

/// One `information_schema.columns` row of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotColumn {
    /// Column name.
    pub name: String,
    /// Reported data type.
    pub data_type: String,
    /// `YES` or `NO`.
    #[serde(default = "default_not_nullable")]
    pub is_nullable: String,
    /// Underlying type name, used for user-defined columns.
    #[serde(default)]
    pub udt_name: Option<String>,
}

/// One enum type of a snapshot.
///
/// Labels may be given as a list, as an aggregated `{A,B}` literal, or both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEnum {
    /// Owning schema.
    #[serde(default = "default_schema")]
    pub schema: String,
    /// Enum type name.
    pub name: String,
    /// Labels in declaration order.
    #[serde(default)]
    pub values: Vec<String>,
    /// Aggregated label literal.
    #[serde(default)]
    pub labels: Option<String>,
}

fn default_schema() -> String {
    crate::config::DEFAULT_SCHEMA.to_string()
}

fn default_not_nullable() -> String {
    "NO".to_string()
}

impl SchemaSnapshot {
    /// Parses a snapshot from a JSON string.
    ///
    /// # Errors
    /// Returns `SourceError::Json` if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a snapshot from a JSON file.
    ///
    /// # Errors
    /// Returns `SourceError` if reading or parsing fails.
    pub fn from_file(path: &Path) -> Result<Self, SourceError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

impl SchemaSource for SchemaSnapshot {
    fn list_tables(&self, schemas: &BTreeSet<String>) -> Result<Vec<String>, SourceError> {
        Ok(self
            .tables
            .iter()
            .filter(|t| schemas.contains(&t.schema))
            .map(|t| t.name.clone())
            .collect())
    }

    // Columns are matched by table name only, so a table present in several
    // schemas yields repeated columns for the deduplicator to collapse.
    fn list_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>, SourceError> {
        let mut found = false;
        let mut columns = Vec::new();

        for snapshot_table in self.tables.iter().filter(|t| t.name == table) {
            found = true;
            columns.extend(snapshot_table.columns.iter().map(|c| {
                ColumnDescriptor::from_information_schema(
                    table,
                    &c.name,
                    &c.data_type,
                    &c.is_nullable,
                    c.udt_name.as_deref(),
                )
            }));
        }

        if !found {
            return Err(SourceError::table_not_found(table));
        }
        Ok(columns)
    }

    fn list_enums(&self, schemas: &BTreeSet<String>) -> Result<Vec<RawEnumRow>, SourceError> {
        let mut rows = Vec::new();

        for snapshot_enum in self.enums.iter().filter(|e| schemas.contains(&e.schema)) {
            rows.extend(
                snapshot_enum
                    .values
                    .iter()
                    .map(|v| RawEnumRow::new(&snapshot_enum.name, v)),
            );
            if let Some(literal) = &snapshot_enum.labels {
                rows.extend(RawEnumRow::from_aggregate(&snapshot_enum.name, literal));
            }
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SNAPSHOT: &str = r#"{
        "tables": [
            { "name": "users", "columns": [
                { "name": "id", "data_type": "integer" },
                { "name": "role", "data_type": "USER-DEFINED", "udt_name": "Role" },
                { "name": "name", "data_type": "text", "is_nullable": "YES" }
            ]},
            { "schema": "audit", "name": "users", "columns": [
                { "name": "id", "data_type": "bigint" }
            ]},
            { "schema": "audit", "name": "events", "columns": [] }
        ],
        "enums": [
            { "name": "Role", "values": ["USER", "ADMIN"] },
            { "name": "Status", "labels": "{ON,OFF}" },
            { "schema": "audit", "name": "Level", "values": ["LOW"] }
        ]
    }"#;

    fn public() -> BTreeSet<String> {
        BTreeSet::from(["public".to_string()])
    }

    #[test]
    fn test_list_tables_filters_schema() {
        let snapshot = SchemaSnapshot::from_json(SNAPSHOT).expect("Failed to parse");
        assert_eq!(snapshot.list_tables(&public()).expect("list"), vec!["users"]);

        let audit = BTreeSet::from(["audit".to_string()]);
        assert_eq!(
            snapshot.list_tables(&audit).expect("list"),
            vec!["users", "events"]
        );
    }

    #[test]
    fn test_list_columns_converts_rows() {
        let snapshot = SchemaSnapshot::from_json(SNAPSHOT).expect("Failed to parse");
        let columns = snapshot.list_columns("users").expect("columns");

        // public.users and audit.users both contribute rows
        assert_eq!(columns.len(), 4);
        assert_eq!(columns[1].enum_ref.as_deref(), Some("Role"));
        assert!(columns[2].is_nullable);
        assert_eq!(columns[3].raw_type, "bigint");
    }

    #[test]
    fn test_list_columns_unknown_table() {
        let snapshot = SchemaSnapshot::from_json(SNAPSHOT).expect("Failed to parse");
        let err = snapshot.list_columns("missing").unwrap_err();
        assert!(matches!(err, SourceError::TableNotFound { .. }));
    }

    #[test]
    fn test_list_enums_expands_literals() {
        let snapshot = SchemaSnapshot::from_json(SNAPSHOT).expect("Failed to parse");
        let rows = snapshot.list_enums(&public()).expect("enums");
        assert_eq!(
            rows,
            vec![
                RawEnumRow::new("Role", "USER"),
                RawEnumRow::new("Role", "ADMIN"),
                RawEnumRow::new("Status", "ON"),
                RawEnumRow::new("Status", "OFF"),
            ]
        );
    }

    #[test]
    fn test_from_json_invalid() {
        let result = SchemaSnapshot::from_json("{ not json");
        assert!(matches!(result, Err(SourceError::Json(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        file.write_all(SNAPSHOT.as_bytes()).expect("write");

        let snapshot = SchemaSnapshot::from_file(file.path()).expect("Failed to read");
        assert_eq!(snapshot.tables.len(), 3);
        assert_eq!(snapshot.enums.len(), 3);
    }
}
