//! # pgtypebox Codegen
//!
//! TypeBox code generation from relational schema descriptors.
//!
//! This crate provides:
//! - Column type resolution through a declarative token table
//! - TypeBox enum, object and alias rendering
//! - Deterministic output assembly
//! - A run driver that collects every resolution error

pub mod assembler;
pub mod error;
pub mod generator;
pub mod resolver;
pub mod typebox;

pub use assembler::CodeAssembler;
pub use error::{CodegenError, TypeError};
pub use generator::{GenerationReport, Generator, TableInput, write_output};
pub use resolver::{TypeCategory, TypeResolver};

use pgtypebox_schema::{GenerationConfig, SchemaSnapshot};

/// Generates TypeBox declarations from a JSON schema snapshot.
///
/// # Arguments
/// * `json` - Snapshot content
/// * `config` - Generation configuration
///
/// # Returns
/// The run report, which may carry resolution errors.
///
/// # Errors
/// Returns `CodegenError` if the snapshot is malformed or the configuration
/// contradicts it.
pub fn generate_from_json(
    json: &str,
    config: &GenerationConfig,
) -> Result<GenerationReport, CodegenError> {
    let snapshot = SchemaSnapshot::from_json(json)?;
    Generator::new(config).run(&snapshot)
}

/// Generates TypeBox declarations from a JSON schema snapshot file.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing or validation fails.
pub fn generate_from_file(
    path: &std::path::Path,
    config: &GenerationConfig,
) -> Result<GenerationReport, CodegenError> {
    let json = std::fs::read_to_string(path)?;
    generate_from_json(&json, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pgtypebox_schema::CasingPolicy;
    use std::io::Write;

    const SNAPSHOT: &str = r#"{
        "tables": [
            { "name": "User", "columns": [
                { "name": "id", "data_type": "integer" },
                { "name": "created_at", "data_type": "timestamp without time zone" },
                { "name": "role", "data_type": "USER-DEFINED", "udt_name": "Role" },
                { "name": "email", "data_type": "text" },
                { "name": "name", "data_type": "text", "is_nullable": "YES" }
            ]},
            { "name": "Post", "columns": [
                { "name": "id", "data_type": "integer" },
                { "name": "published", "data_type": "boolean" },
                { "name": "author_id", "data_type": "integer", "is_nullable": "YES" },
                { "name": "title", "data_type": "character varying" }
            ]}
        ],
        "enums": [
            { "name": "Role", "values": ["USER", "ADMIN", "USER"] }
        ]
    }"#;

    #[test]
    fn test_generate_from_json() {
        let config = GenerationConfig::new()
            .casing(CasingPolicy::Pascal)
            .required_string_min_length(1);
        let output = generate_from_json(SNAPSHOT, &config)
            .expect("run failed")
            .into_result()
            .expect("resolution failed");

        let expected = "import { Type } from '@sinclair/typebox'
import type { Static } from '@sinclair/typebox'

export enum Role {
    USER,
    ADMIN,
}

export const Post = Type.Object({
    Id: Type.Number(),
    Published: Type.Boolean(),
    AuthorId: Type.Optional(Type.Number()),
    Title: Type.String({ minLength: 1 }),
})

export type PostType = Static<typeof Post>

export const User = Type.Object({
    Id: Type.Number(),
    CreatedAt: Type.Date(),
    Role: Type.Enum(Role),
    Email: Type.String({ minLength: 1 }),
    Name: Type.Optional(Type.String()),
})

export type UserType = Static<typeof User>
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_generate_from_json_invalid() {
        let result = generate_from_json("not json", &GenerationConfig::default());
        assert!(matches!(result, Err(CodegenError::Source(_))));
    }

    #[test]
    fn test_generate_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        file.write_all(SNAPSHOT.as_bytes()).expect("write");

        let report =
            generate_from_file(file.path(), &GenerationConfig::default()).expect("run failed");
        assert!(report.is_success());
        assert_eq!(report.tables.len(), 2);
    }

    #[test]
    fn test_generate_from_missing_file() {
        let result = generate_from_file(
            std::path::Path::new("/nonexistent/snapshot.json"),
            &GenerationConfig::default(),
        );
        assert!(matches!(result, Err(CodegenError::Io(_))));
    }
}
