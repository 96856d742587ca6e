//! Example generating TypeBox declarations from a schema snapshot.
//!
//! Run with: `cargo run --example generate -- snapshot.json [out.ts] [casing]`
//!
//! Without arguments a built-in snapshot is used and the output is printed.

use pgtypebox::prelude::*;
use std::path::Path;

const DEMO_SNAPSHOT: &str = r#"{
    "tables": [
        { "name": "user_accounts", "columns": [
            { "name": "id", "data_type": "integer" },
            { "name": "created_at", "data_type": "timestamp with time zone" },
            { "name": "role", "data_type": "USER-DEFINED", "udt_name": "role" },
            { "name": "email", "data_type": "character varying" },
            { "name": "last_ip", "data_type": "inet", "is_nullable": "YES" },
            { "name": "settings", "data_type": "jsonb", "is_nullable": "YES" }
        ]},
        { "name": "knex_migrations", "columns": [
            { "name": "id", "data_type": "integer" }
        ]}
    ],
    "enums": [
        { "name": "role", "labels": "{USER,ADMIN}" }
    ]
}"#;

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let casing = match args.get(2) {
        Some(value) => value.parse::<CasingPolicy>()?,
        None => CasingPolicy::Pascal,
    };
    let config = GenerationConfig::new()
        .casing(casing)
        .required_string_min_length(1);

    let report = match args.first() {
        Some(path) => generate_from_file(Path::new(path), &config)?,
        None => generate_from_json(DEMO_SNAPSHOT, &config)?,
    };

    for error in &report.errors {
        let (table, column) = error.location();
        eprintln!("error at {}.{}: {}", table, column, error);
    }

    match args.get(1) {
        Some(out) => write_output(&report, Path::new(out))?,
        None => print!("{}", report.output),
    }

    if !report.is_success() {
        anyhow::bail!("{} column(s) could not be resolved", report.errors.len());
    }
    Ok(())
}
