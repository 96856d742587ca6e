//! Error types for schema sources and configuration validation.

use thiserror::Error;

/// Error type for introspection sources.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Snapshot could not be deserialized.
    #[error("invalid snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Table is not known to the source.
    #[error("table '{table}' not found in source")]
    TableNotFound {
        /// Table name.
        table: String,
    },
}

/// Error type for contradictory or invalid generation configuration.
///
/// Configuration errors halt a run before any column is resolved.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An allowlisted table does not exist in the selected schemas.
    #[error("allowlisted table '{table}' does not exist")]
    MissingAllowlistedTable {
        /// Table name.
        table: String,
    },

    /// An allowlisted table is skipped by an excluded prefix.
    #[error("allowlisted table '{table}' is excluded by prefix '{prefix}'")]
    ExcludedAllowlistedTable {
        /// Table name.
        table: String,
        /// Matching excluded prefix.
        prefix: String,
    },

    /// A table appears in both the allowlist and the denylist.
    #[error("table '{table}' is both allowlisted and denylisted")]
    ConflictingTableFilter {
        /// Table name.
        table: String,
    },

    /// Minimum string length must be positive.
    #[error("required string minimum length must be positive")]
    ZeroMinLength,

    /// Schema allowlist selects nothing.
    #[error("schema allowlist is empty")]
    EmptySchemaAllowlist,

    /// Unrecognized casing policy name.
    #[error("unknown casing policy '{value}'")]
    UnknownCasing {
        /// Offending value.
        value: String,
    },
}

impl SourceError {
    /// Creates a table-not-found error.
    pub fn table_not_found(table: impl Into<String>) -> Self {
        Self::TableNotFound {
            table: table.into(),
        }
    }
}

impl ConfigError {
    /// Creates a missing allowlisted table error.
    pub fn missing_table(table: impl Into<String>) -> Self {
        Self::MissingAllowlistedTable {
            table: table.into(),
        }
    }

    /// Creates a conflicting filter error.
    pub fn conflicting(table: impl Into<String>) -> Self {
        Self::ConflictingTableFilter {
            table: table.into(),
        }
    }
}
