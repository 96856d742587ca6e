//! # pgtypebox Schema
//!
//! Relational schema descriptors and the intermediate representation used
//! for TypeBox generation.
//!
//! This crate provides:
//! - Column and enum descriptors as reported by introspection
//! - Duplicate column removal and the enum registry
//! - Identifier casing policies
//! - Generation configuration and its validation
//! - The [`SchemaSource`] boundary and a JSON snapshot source
//! - Semantic types and declarations for code generation

pub mod casing;
pub mod column;
pub mod config;
pub mod enums;
pub mod error;
pub mod ir;
pub mod source;
pub mod validation;

pub use casing::CasingPolicy;
pub use column::{ColumnDescriptor, dedupe_columns};
pub use config::GenerationConfig;
pub use enums::{EnumDescriptor, EnumRegistry, RawEnumRow};
pub use error::{ConfigError, SourceError};
pub use ir::{
    EnumDeclaration, FieldDeclaration, NumberConstraints, SemanticType, StringConstraints,
    StringFormat, TableDeclaration,
};
pub use source::{SchemaSnapshot, SchemaSource};
pub use validation::validate_config;
