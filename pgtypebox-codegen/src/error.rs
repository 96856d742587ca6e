//! Error types for code generation.

use pgtypebox_schema::ColumnDescriptor;
use thiserror::Error;

/// Failure to resolve one column.
///
/// Resolution errors are collected across a run rather than returned on
/// the first failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// Raw type token has no mapping.
    #[error("unknown type '{token}' for column '{table}.{column}'")]
    UnknownType {
        /// Normalized type token.
        token: String,
        /// Table name.
        table: String,
        /// Column name.
        column: String,
    },

    /// Column references an enum that is not registered.
    #[error("unknown enum '{enum_name}' referenced by column '{table}.{column}'")]
    UnknownEnum {
        /// Referenced enum name.
        enum_name: String,
        /// Table name.
        table: String,
        /// Column name.
        column: String,
    },

    /// Column cases to the same field name as an earlier column.
    #[error("column '{table}.{column}' emits field '{field}' already taken by column '{first}'")]
    FieldCollision {
        /// Emitted field name.
        field: String,
        /// Column that kept the field name.
        first: String,
        /// Table name.
        table: String,
        /// Column name.
        column: String,
    },
}

impl TypeError {
    /// Creates an unknown type error for a column.
    pub fn unknown_type(token: impl Into<String>, column: &ColumnDescriptor) -> Self {
        Self::UnknownType {
            token: token.into(),
            table: column.table_name.clone(),
            column: column.column_name.clone(),
        }
    }

    /// Creates an unknown enum error for a column.
    pub fn unknown_enum(enum_name: impl Into<String>, column: &ColumnDescriptor) -> Self {
        Self::UnknownEnum {
            enum_name: enum_name.into(),
            table: column.table_name.clone(),
            column: column.column_name.clone(),
        }
    }

    /// Creates a field collision error for a column.
    pub fn field_collision(
        field: impl Into<String>,
        first: impl Into<String>,
        column: &ColumnDescriptor,
    ) -> Self {
        Self::FieldCollision {
            field: field.into(),
            first: first.into(),
            table: column.table_name.clone(),
            column: column.column_name.clone(),
        }
    }

    /// Returns the `(table, column)` the error refers to.
    #[must_use]
    pub fn location(&self) -> (&str, &str) {
        match self {
            Self::UnknownType { table, column, .. }
            | Self::UnknownEnum { table, column, .. }
            | Self::FieldCollision { table, column, .. } => (table.as_str(), column.as_str()),
        }
    }
}

/// Error type for code generation runs.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Contradictory configuration; the run halted before resolution.
    #[error("configuration error: {0}")]
    Config(#[from] pgtypebox_schema::ConfigError),

    /// Introspection source failure.
    #[error("source error: {0}")]
    Source(#[from] pgtypebox_schema::SourceError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// One or more columns failed type resolution.
    #[error("type resolution failed for {} column(s)", .errors.len())]
    Resolution {
        /// Every resolution error of the run, in input order.
        errors: Vec<TypeError>,
    },
}
