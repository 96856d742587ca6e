//! Enum declaration generation.

use super::{INDENT, is_numeric_name, property_key, quote, to_identifier};
use pgtypebox_schema::ir::EnumDeclaration;

/// Generator for TypeScript enum declarations.
pub struct EnumGenerator<'a> {
    enums: &'a [EnumDeclaration],
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(enums: &'a [EnumDeclaration]) -> Self {
        Self { enums }
    }

    /// Generates one block per enum, in declaration order.
    #[must_use]
    pub fn generate(&self) -> Vec<String> {
        self.enums.iter().map(generate_enum).collect()
    }
}

/// Generates one enum block.
fn generate_enum(declaration: &EnumDeclaration) -> String {
    let mut output = String::new();
    let name = to_identifier(&declaration.emitted_name);

    if declaration.values.is_empty() {
        output.push_str(&format!("export enum {} {{}}\n", name));
        return output;
    }

    // A numeric label cannot be a member name, so it is renamed and every
    // member carries its label as a string initializer.
    let initialized = declaration.values.iter().any(|v| is_numeric_name(v));

    output.push_str(&format!("export enum {} {{\n", name));
    for value in &declaration.values {
        if initialized {
            output.push_str(&format!(
                "{}{} = {},\n",
                INDENT,
                member_key(value),
                quote(value)
            ));
        } else {
            output.push_str(&format!("{}{},\n", INDENT, property_key(value)));
        }
    }
    output.push_str("}\n");

    output
}

/// Emits the member name of a label.
fn member_key(value: &str) -> String {
    if is_numeric_name(value) {
        to_identifier(&format!("_{value}"))
    } else {
        property_key(value)
    }
}
