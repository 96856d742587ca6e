//! TypeBox code generation modules.

pub mod enums;
pub mod objects;
pub mod types;

pub use enums::EnumGenerator;
pub use objects::ObjectGenerator;
pub use types::TypeRenderer;

/// Indentation used inside generated blocks.
pub const INDENT: &str = "    ";

/// Names that cannot be declared as a module-level const, enum or type.
///
/// Includes the `Type` and `Static` imports of the generated header.
pub const RESERVED_NAMES: &[&str] = &[
    "Static", "Type", "any", "arguments", "await", "bigint", "boolean", "break", "case", "catch",
    "class", "const", "continue", "debugger", "default", "delete", "do", "else", "enum", "eval",
    "export", "extends", "false", "finally", "for", "function", "if", "implements", "import",
    "in", "instanceof", "interface", "let", "never", "new", "null", "number", "object",
    "package", "private", "protected", "public", "return", "static", "string", "super",
    "switch", "symbol", "this", "throw", "true", "try", "typeof", "undefined", "unknown", "var",
    "void", "while", "with", "yield",
];

/// Returns true if `name` can be emitted as a bare TypeScript identifier.
///
/// Reserved words still pass; they are valid property keys.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Returns true if `name` parses as a number, which enum members may not be.
#[must_use]
pub fn is_numeric_name(name: &str) -> bool {
    name.trim().parse::<f64>().is_ok()
}

/// Rewrites `name` into a declarable identifier.
///
/// Invalid characters become `_`; a leading digit gets a `_` prefix and a
/// reserved name gets a `_` suffix.
#[must_use]
pub fn to_identifier(name: &str) -> String {
    if is_identifier(name) {
        if RESERVED_NAMES.contains(&name) {
            return format!("{name}_");
        }
        return name.to_string();
    }

    let mut result: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '$' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if !result.starts_with(|c: char| c.is_alphabetic() || c == '_' || c == '$') {
        result.insert(0, '_');
    }
    result
}

/// Quotes a string as a single-quoted TypeScript literal.
#[must_use]
pub fn quote(value: &str) -> String {
    let mut result = String::with_capacity(value.len() + 2);
    result.push('\'');
    for c in value.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '\'' => result.push_str("\\'"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            _ => result.push(c),
        }
    }
    result.push('\'');
    result
}

/// Emits a property or member key, quoting it when needed.
#[must_use]
pub fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        quote(name)
    }
}
