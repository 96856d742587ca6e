//! # pgtypebox
//!
//! Generate TypeBox declarations from relational database schemas.
//!
//! pgtypebox turns introspected table, column and enum metadata into
//! deterministic `@sinclair/typebox` declarations that can be checked in and
//! diffed.
//!
//! ## Features
//!
//! - **Declarative type mapping** - Raw column types resolve through one token table
//! - **Stable output** - Enums first, tables in sorted order, byte-identical reruns
//! - **Casing policies** - Verbatim, camelCase or PascalCase identifiers
//! - **Full diagnostics** - Every unmapped column of a run is reported at once
//!
//! ## Quick Start
//!
//! ```ignore
//! use pgtypebox::prelude::*;
//!
//! let config = GenerationConfig::new().casing(CasingPolicy::Pascal);
//! let snapshot = SchemaSnapshot::from_file("schema.json".as_ref())?;
//! let report = Generator::new(&config).run(&snapshot)?;
//! write_output(&report, "schema.ts".as_ref())?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Descriptors, enum registry, casing, configuration, sources
//! - [`codegen`] - Type resolution, rendering and run driver

pub mod prelude;

/// Schema descriptors, configuration and sources.
pub mod schema {
    pub use pgtypebox_schema::*;
}

/// TypeBox code generation.
pub mod codegen {
    pub use pgtypebox_codegen::*;
}

// Re-export commonly used items at the crate root
pub use pgtypebox_codegen::{
    CodegenError, GenerationReport, Generator, TypeError, generate_from_file, generate_from_json,
    write_output,
};
pub use pgtypebox_schema::{CasingPolicy, GenerationConfig, SchemaSnapshot, SchemaSource};
