//! Semantic type rendering.

use super::{quote, to_identifier};
use pgtypebox_schema::CasingPolicy;
use pgtypebox_schema::ir::{NumberConstraints, SemanticType, StringConstraints};

/// Renders semantic types as TypeBox builder expressions.
#[derive(Debug, Clone, Copy)]
pub struct TypeRenderer {
    casing: CasingPolicy,
}

impl TypeRenderer {
    /// Creates a renderer; enum references are cased with `casing`.
    #[must_use]
    pub const fn new(casing: CasingPolicy) -> Self {
        Self { casing }
    }

    /// Renders a type expression such as `Type.Optional(Type.String())`.
    #[must_use]
    pub fn render(&self, ty: &SemanticType) -> String {
        match ty {
            SemanticType::String(constraints) => {
                format!("Type.String({})", string_options(constraints))
            }
            SemanticType::Number(constraints) => {
                format!("Type.Number({})", number_options(constraints))
            }
            SemanticType::Boolean => "Type.Boolean()".to_string(),
            SemanticType::Date => "Type.Date()".to_string(),
            SemanticType::EnumRef(name) => {
                format!("Type.Enum({})", to_identifier(&self.casing.apply(name)))
            }
            SemanticType::Any => "Type.Any()".to_string(),
            SemanticType::Array(element) => format!("Type.Array({})", self.render(element)),
            SemanticType::Optional(inner) => format!("Type.Optional({})", self.render(inner)),
        }
    }
}

fn string_options(constraints: &StringConstraints) -> String {
    if constraints.is_empty() {
        return String::new();
    }

    let mut options = Vec::with_capacity(2);
    if let Some(min_length) = constraints.min_length {
        options.push(format!("minLength: {min_length}"));
    }
    if let Some(format) = constraints.format {
        options.push(format!("format: {}", quote(format.as_str())));
    }
    format!("{{ {} }}", options.join(", "))
}

fn number_options(constraints: &NumberConstraints) -> String {
    match constraints.minimum {
        Some(minimum) => format!("{{ minimum: {minimum} }}"),
        None => String::new(),
    }
}
