//! Intermediate representation for code generation.
//!
//! Columns resolve to [`SemanticType`]s, which are independent of any
//! target syntax. Tables and enums are collected into declarations that
//! already carry their emitted names, so rendering is a pure walk over
//! this module's types.

use crate::casing::CasingPolicy;
use crate::enums::EnumDescriptor;

/// Suffix appended to a table's emitted name to form its type alias.
pub const TYPE_ALIAS_SUFFIX: &str = "Type";

/// Well-known string formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringFormat {
    /// IPv4 address.
    Ipv4,
    /// MAC address.
    Mac,
}

impl StringFormat {
    /// Returns the format tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ipv4 => "ipv4",
            Self::Mac => "mac",
        }
    }
}

/// Constraints on a string type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StringConstraints {
    /// Minimum length.
    pub min_length: Option<u32>,
    /// Format tag.
    pub format: Option<StringFormat>,
}

impl StringConstraints {
    /// Returns true if no constraint is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.min_length.is_none() && self.format.is_none()
    }
}

/// Constraints on a number type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NumberConstraints {
    /// Inclusive lower bound.
    pub minimum: Option<i64>,
}

impl NumberConstraints {
    /// Returns true if no constraint is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.minimum.is_none()
    }
}

/// Semantic type of a column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SemanticType {
    /// Text.
    String(StringConstraints),
    /// Integer or floating point number.
    Number(NumberConstraints),
    /// Boolean.
    Boolean,
    /// Date or time.
    Date,
    /// Reference to an enum by its reported name.
    EnumRef(String),
    /// Unconstrained value.
    Any,
    /// Array of elements.
    Array(Box<SemanticType>),
    /// Nullable wrapper. Never wraps another `Optional`.
    Optional(Box<SemanticType>),
}

impl SemanticType {
    /// Unconstrained string.
    #[must_use]
    pub const fn string() -> Self {
        Self::String(StringConstraints {
            min_length: None,
            format: None,
        })
    }

    /// Unconstrained number.
    #[must_use]
    pub const fn number() -> Self {
        Self::Number(NumberConstraints { minimum: None })
    }

    /// Array of the given element type.
    #[must_use]
    pub fn array(element: SemanticType) -> Self {
        Self::Array(Box::new(element))
    }

    /// Wraps the type in `Optional`, collapsing nested wrappers.
    #[must_use]
    pub fn optional(self) -> Self {
        if self.is_optional() {
            self
        } else {
            Self::Optional(Box::new(self))
        }
    }

    /// Returns true if the type is `Optional`.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    /// Returns the type without its `Optional` wrapper.
    #[must_use]
    pub fn required(&self) -> &SemanticType {
        match self {
            Self::Optional(inner) => inner.as_ref(),
            other => other,
        }
    }
}

/// One field of a table declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    /// Column name as reported.
    pub raw_name: String,
    /// Field name after casing.
    pub emitted_name: String,
    /// Resolved type.
    pub ty: SemanticType,
}

/// Declaration of one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDeclaration {
    /// Table name as reported.
    pub raw_name: String,
    /// Declared value name after casing.
    pub emitted_name: String,
    /// Type alias name.
    pub alias_name: String,
    /// Fields in column order.
    pub fields: Vec<FieldDeclaration>,
}

impl TableDeclaration {
    /// Creates an empty declaration, casing the table and alias names.
    #[must_use]
    pub fn new(raw_name: impl Into<String>, casing: CasingPolicy) -> Self {
        let raw_name = raw_name.into();
        let emitted_name = casing.apply(&raw_name);
        let alias_name = alias_name(&emitted_name, casing);
        Self {
            raw_name,
            emitted_name,
            alias_name,
            fields: Vec::new(),
        }
    }

    /// Appends a field, casing its name.
    pub fn push_field(&mut self, raw_name: &str, ty: SemanticType, casing: CasingPolicy) {
        self.fields.push(FieldDeclaration {
            raw_name: raw_name.to_string(),
            emitted_name: casing.apply(raw_name),
            ty,
        });
    }

    /// Gets a field by emitted name.
    #[must_use]
    pub fn field(&self, emitted_name: &str) -> Option<&FieldDeclaration> {
        self.fields.iter().find(|f| f.emitted_name == emitted_name)
    }
}

/// Declaration of one enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDeclaration {
    /// Enum name as reported.
    pub raw_name: String,
    /// Enum name after casing.
    pub emitted_name: String,
    /// Members in first-seen order.
    pub values: Vec<String>,
}

impl EnumDeclaration {
    /// Creates a declaration from a registered enum.
    #[must_use]
    pub fn from_descriptor(descriptor: &EnumDescriptor, casing: CasingPolicy) -> Self {
        Self {
            raw_name: descriptor.enum_name.clone(),
            emitted_name: descriptor.emitted_name(casing),
            values: descriptor.values.clone(),
        }
    }
}

/// Derives the type alias name of a table from its emitted name.
#[must_use]
pub fn alias_name(emitted_table_name: &str, casing: CasingPolicy) -> String {
    casing.apply(&format!("{emitted_table_name}{TYPE_ALIAS_SUFFIX}"))
}
