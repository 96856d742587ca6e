//! Column type resolution.
//!
//! A raw type string is reduced to a lowercase token (everything before the
//! first `(` or whitespace) and looked up in [`TOKEN_TABLE`]. Tokens missing
//! from the table resolve to [`TypeError::UnknownType`].

use crate::error::TypeError;
use pgtypebox_schema::ir::{NumberConstraints, SemanticType, StringConstraints, StringFormat};
use pgtypebox_schema::{ColumnDescriptor, EnumRegistry, GenerationConfig};

/// Category a raw type token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCategory {
    /// Character data, decimals and UUIDs.
    Text,
    /// Dates, times and timestamps.
    Temporal,
    /// Integers and floats.
    Numeric,
    /// Booleans.
    Boolean,
    /// JSON documents.
    Json,
    /// Array marker.
    Array,
    /// Network addresses with a format tag.
    Network(StringFormat),
    /// Object identifier references.
    Reference,
    /// User-defined enum marker.
    UserDefined,
}

/// Raw type token to category mapping.
pub const TOKEN_TABLE: &[(&str, TypeCategory)] = &[
    ("char", TypeCategory::Text),
    ("character", TypeCategory::Text),
    ("varchar", TypeCategory::Text),
    ("text", TypeCategory::Text),
    ("decimal", TypeCategory::Text),
    ("numeric", TypeCategory::Text),
    ("uuid", TypeCategory::Text),
    ("bpchar", TypeCategory::Text),
    ("citext", TypeCategory::Text),
    ("date", TypeCategory::Temporal),
    ("time", TypeCategory::Temporal),
    ("year", TypeCategory::Temporal),
    ("datetime", TypeCategory::Temporal),
    ("timestamp", TypeCategory::Temporal),
    ("timestamptz", TypeCategory::Temporal),
    ("tinyint", TypeCategory::Numeric),
    ("smallint", TypeCategory::Numeric),
    ("mediumint", TypeCategory::Numeric),
    ("int", TypeCategory::Numeric),
    ("integer", TypeCategory::Numeric),
    ("bigint", TypeCategory::Numeric),
    ("float", TypeCategory::Numeric),
    ("double", TypeCategory::Numeric),
    ("real", TypeCategory::Numeric),
    ("serial", TypeCategory::Numeric),
    ("bigserial", TypeCategory::Numeric),
    ("smallserial", TypeCategory::Numeric),
    ("boolean", TypeCategory::Boolean),
    ("bool", TypeCategory::Boolean),
    ("json", TypeCategory::Json),
    ("jsonb", TypeCategory::Json),
    ("array", TypeCategory::Array),
    ("inet", TypeCategory::Network(StringFormat::Ipv4)),
    ("macaddr", TypeCategory::Network(StringFormat::Mac)),
    ("regclass", TypeCategory::Reference),
    ("regproc", TypeCategory::Reference),
    ("regtype", TypeCategory::Reference),
    ("user-defined", TypeCategory::UserDefined),
    ("enum", TypeCategory::UserDefined),
];

impl TypeCategory {
    /// Looks up the category of a normalized token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        TOKEN_TABLE
            .iter()
            .find(|(name, _)| *name == token)
            .map(|&(_, category)| category)
    }
}

/// Reduces a raw type string to its lowercase lookup token.
///
/// `character varying(255)` becomes `character`, `int(11) unsigned`
/// becomes `int`.
#[must_use]
pub fn normalize_token(raw_type: &str) -> String {
    raw_type
        .trim()
        .split(|c: char| c == '(' || c.is_whitespace())
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// Resolves column descriptors to semantic types.
#[derive(Debug, Clone, Copy)]
pub struct TypeResolver<'a> {
    enums: &'a EnumRegistry,
    required_string_min_length: Option<u32>,
}

impl<'a> TypeResolver<'a> {
    /// Creates a resolver over a registry and configuration.
    #[must_use]
    pub fn new(enums: &'a EnumRegistry, config: &GenerationConfig) -> Self {
        Self {
            enums,
            required_string_min_length: config.required_string_min_length,
        }
    }

    /// Resolves one column.
    ///
    /// Nullable columns are wrapped in `Optional`. The unsigned flag only
    /// affects numeric tokens.
    ///
    /// # Errors
    /// Returns `TypeError::UnknownType` for unmapped tokens and
    /// `TypeError::UnknownEnum` for enum columns whose enum is not registered.
    pub fn resolve(&self, column: &ColumnDescriptor) -> Result<SemanticType, TypeError> {
        let token = normalize_token(&column.raw_type);
        let category = TypeCategory::from_token(&token)
            .ok_or_else(|| TypeError::unknown_type(token.as_str(), column))?;

        let ty = match category {
            TypeCategory::Text => SemanticType::String(StringConstraints {
                min_length: if column.is_nullable {
                    None
                } else {
                    self.required_string_min_length
                },
                format: None,
            }),
            TypeCategory::Temporal => SemanticType::Date,
            TypeCategory::Numeric => SemanticType::Number(NumberConstraints {
                minimum: column.is_unsigned.then_some(0),
            }),
            TypeCategory::Boolean => SemanticType::Boolean,
            TypeCategory::Json => SemanticType::Any,
            TypeCategory::Array => SemanticType::array(SemanticType::Any),
            TypeCategory::Network(format) => SemanticType::String(StringConstraints {
                min_length: None,
                format: Some(format),
            }),
            TypeCategory::Reference => SemanticType::string(),
            TypeCategory::UserDefined => self.resolve_enum(column)?,
        };

        Ok(if column.is_nullable {
            ty.optional()
        } else {
            ty
        })
    }

    fn resolve_enum(&self, column: &ColumnDescriptor) -> Result<SemanticType, TypeError> {
        // Without a reference the raw type is the best name to report.
        let name = column.enum_ref.as_deref().unwrap_or(&column.raw_type);
        match self.enums.lookup(name) {
            Some(descriptor) => Ok(SemanticType::EnumRef(descriptor.enum_name.clone())),
            None => Err(TypeError::unknown_enum(name, column)),
        }
    }
}
