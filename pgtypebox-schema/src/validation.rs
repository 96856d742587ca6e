//! Configuration validation.
//!
//! This module rejects contradictory configurations before a run resolves
//! any column.

use crate::config::GenerationConfig;
use crate::error::ConfigError;

/// Validates a configuration against the tables a source reports.
///
/// # Arguments
/// * `config` - The configuration to validate
/// * `available_tables` - Tables found in the selected schemas
///
/// # Errors
/// Returns `ConfigError` describing the first contradiction found.
pub fn validate_config(
    config: &GenerationConfig,
    available_tables: &[String],
) -> Result<(), ConfigError> {
    validate_settings(config)?;
    validate_table_filters(config, available_tables)?;
    Ok(())
}

/// Validates settings that do not depend on the source.
///
/// # Errors
/// Returns `ConfigError` if a setting is out of range or filters conflict.
pub fn validate_settings(config: &GenerationConfig) -> Result<(), ConfigError> {
    if config.required_string_min_length == Some(0) {
        return Err(ConfigError::ZeroMinLength);
    }

    if config
        .schema_allowlist
        .as_ref()
        .is_some_and(|schemas| schemas.is_empty())
    {
        return Err(ConfigError::EmptySchemaAllowlist);
    }

    if let (Some(allow), Some(deny)) = (&config.table_allowlist, &config.table_denylist) {
        if let Some(table) = allow.intersection(deny).next() {
            return Err(ConfigError::conflicting(table.as_str()));
        }
    }

    Ok(())
}

/// Checks every allowlisted table exists in the source and survives prefix exclusion.
///
/// # Errors
/// Returns `ConfigError::ExcludedAllowlistedTable` if an allowlisted table
/// matches an excluded prefix, or `ConfigError::MissingAllowlistedTable` for
/// the first table not found.
pub fn validate_table_filters(
    config: &GenerationConfig,
    available_tables: &[String],
) -> Result<(), ConfigError> {
    let Some(allow) = &config.table_allowlist else {
        return Ok(());
    };

    for table in allow {
        if let Some(prefix) = config.excluded_prefix(table) {
            return Err(ConfigError::ExcludedAllowlistedTable {
                table: table.clone(),
                prefix: prefix.to_string(),
            });
        }
        if !available_tables.iter().any(|t| t == table) {
            return Err(ConfigError::missing_table(table.as_str()));
        }
    }

    Ok(())
}
