//! Generation run driver.
//!
//! A run registers enums, deduplicates and resolves every column of every
//! table in input order, and assembles the output. Resolution failures are
//! collected into the [`GenerationReport`] instead of stopping the run.

use crate::assembler::CodeAssembler;
use crate::error::{CodegenError, TypeError};
use crate::resolver::TypeResolver;
use pgtypebox_schema::ir::{EnumDeclaration, TableDeclaration};
use pgtypebox_schema::validation::{validate_settings, validate_table_filters};
use pgtypebox_schema::{
    ColumnDescriptor, EnumRegistry, GenerationConfig, RawEnumRow, SchemaSource, dedupe_columns,
};
use std::path::Path;

/// Columns of one table, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableInput {
    /// Table name.
    pub name: String,
    /// Columns as reported, possibly with duplicates.
    pub columns: Vec<ColumnDescriptor>,
}

impl TableInput {
    /// Creates a table input.
    #[must_use]
    pub fn new(name: impl Into<String>, columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }
}

/// Result of one run: the assembled output plus every resolution error.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Assembled text. Incomplete when `errors` is not empty.
    pub output: String,
    /// Resolution errors in input order.
    pub errors: Vec<TypeError>,
    /// Enum declarations in emission order.
    pub enums: Vec<EnumDeclaration>,
    /// Table declarations in emission order.
    pub tables: Vec<TableDeclaration>,
}

impl GenerationReport {
    /// Returns true if every column resolved.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Converts the report into the output text.
    ///
    /// # Errors
    /// Returns `CodegenError::Resolution` with every error if the run failed.
    pub fn into_result(self) -> Result<String, CodegenError> {
        if self.errors.is_empty() {
            Ok(self.output)
        } else {
            Err(CodegenError::Resolution {
                errors: self.errors,
            })
        }
    }

    /// Gets a table declaration by its reported name.
    #[must_use]
    pub fn table(&self, raw_name: &str) -> Option<&TableDeclaration> {
        self.tables.iter().find(|t| t.raw_name == raw_name)
    }
}

/// Drives generation runs for one configuration.
pub struct Generator<'a> {
    config: &'a GenerationConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(config: &'a GenerationConfig) -> Self {
        Self { config }
    }

    /// Generates output from fully materialized descriptors.
    ///
    /// Tables are emitted in the order given.
    #[must_use]
    pub fn generate<E, T>(&self, enum_rows: E, tables: T) -> GenerationReport
    where
        E: IntoIterator<Item = RawEnumRow>,
        T: IntoIterator<Item = TableInput>,
    {
        let casing = self.config.casing;
        let registry = EnumRegistry::register(enum_rows);
        let resolver = TypeResolver::new(&registry, self.config);

        let mut errors = Vec::new();
        let mut declarations = Vec::new();

        for table in tables {
            tracing::info!("Processing {}...", table.name);
            let mut declaration = TableDeclaration::new(table.name.as_str(), casing);

            for column in dedupe_columns(table.columns) {
                // Distinct raw names may case to the same field; the first keeps it.
                let field = casing.apply(&column.column_name);
                if let Some(first) = declaration.field(&field) {
                    let e = TypeError::field_collision(
                        field.as_str(),
                        first.raw_name.as_str(),
                        &column,
                    );
                    tracing::warn!("{}", e);
                    errors.push(e);
                    continue;
                }

                match resolver.resolve(&column) {
                    Ok(ty) => {
                        tracing::debug!("{}: {:?}", column.qualified_name(), ty);
                        declaration.push_field(&column.column_name, ty, casing);
                    }
                    Err(e) => {
                        tracing::warn!("{}", e);
                        errors.push(e);
                    }
                }
            }

            declarations.push(declaration);
        }

        let enums: Vec<EnumDeclaration> = registry
            .iter()
            .map(|descriptor| EnumDeclaration::from_descriptor(descriptor, casing))
            .collect();

        let output = CodeAssembler::new(casing).assemble(&enums, &declarations);

        if !errors.is_empty() {
            tracing::warn!("Generation finished with {} error(s)", errors.len());
        }

        GenerationReport {
            output,
            errors,
            enums,
            tables: declarations,
        }
    }

    /// Runs generation against an introspection source.
    ///
    /// Configuration is validated before any column is loaded. Selected
    /// tables are sorted by name.
    ///
    /// # Errors
    /// Returns `CodegenError::Config` for contradictory configuration and
    /// `CodegenError::Source` if the source fails. Resolution errors are
    /// reported in the returned `GenerationReport`.
    pub fn run<S>(&self, source: &S) -> Result<GenerationReport, CodegenError>
    where
        S: SchemaSource + ?Sized,
    {
        validate_settings(self.config)?;

        let schemas = self.config.selected_schemas();
        let available = source.list_tables(&schemas)?;
        validate_table_filters(self.config, &available)?;

        let selected = self.config.select_tables(available);
        tracing::info!("Generating {} table(s)", selected.len());

        let mut tables = Vec::with_capacity(selected.len());
        for name in selected {
            let columns = source.list_columns(&name)?;
            tables.push(TableInput::new(name, columns));
        }
        let enum_rows = source.list_enums(&schemas)?;

        Ok(self.generate(enum_rows, tables))
    }
}

/// Writes the output of a successful run to `path`.
///
/// # Errors
/// Returns `CodegenError::Resolution` without touching `path` if the run
/// failed, or `CodegenError::Io` if writing fails.
pub fn write_output(report: &GenerationReport, path: &Path) -> Result<(), CodegenError> {
    if !report.is_success() {
        return Err(CodegenError::Resolution {
            errors: report.errors.clone(),
        });
    }
    std::fs::write(path, &report.output)?;
    tracing::info!("Wrote {}", path.display());
    Ok(())
}
