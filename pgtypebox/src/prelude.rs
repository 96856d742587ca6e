//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use pgtypebox::prelude::*;
//! ```

// Schema types
pub use pgtypebox_schema::ir::{
    EnumDeclaration, FieldDeclaration, SemanticType, TableDeclaration,
};
pub use pgtypebox_schema::{
    CasingPolicy, ColumnDescriptor, ConfigError, EnumRegistry, GenerationConfig, RawEnumRow,
    SchemaSnapshot, SchemaSource, SourceError,
};

// Codegen types
pub use pgtypebox_codegen::{
    CodeAssembler, CodegenError, GenerationReport, Generator, TableInput, TypeError,
    TypeResolver, generate_from_file, generate_from_json, write_output,
};
