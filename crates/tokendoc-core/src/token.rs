//! The token data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A raw token value as it appears in the stored payload.
///
/// Color and string tokens arrive as text; spacing and sizing tokens are
/// often plain JSON numbers. The engine never interprets the value beyond
/// alias detection, so both forms are kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Text(s) => f.write_str(s),
            RawValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

/// A single design-token record.
///
/// Identity is `name`; uniqueness is not enforced, and duplicate names are
/// rendered independently. The engine never mutates a token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Dotted token name (e.g. `color.background.page`).
    pub name: String,
    /// Raw value: a literal, or an alias reference to another token.
    pub value: RawValue,
    /// Token category (`color`, `spacing`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Optional human description. Absent and empty are equivalent: both
    /// hide the description slot on the rendered card.
    #[serde(default)]
    pub description: String,
}

impl Token {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<RawValue>,
        kind: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind: kind.into(),
            description: description.into(),
        }
    }
}

/// A partition rule for one document section.
///
/// A token belongs to the section iff its name starts with `token_prefix`.
/// Descriptors are caller-supplied and ordered; their order fixes the
/// left-to-right placement of sections. Prefixes may overlap, in which case
/// a token is rendered once per matching descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDescriptor {
    /// Display name of the section (also the section container's name).
    pub name: String,
    /// Name prefix selecting this section's tokens.
    #[serde(rename = "tokenPrefix")]
    pub token_prefix: String,
}

impl SectionDescriptor {
    pub fn new(name: impl Into<String>, token_prefix: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            token_prefix: token_prefix.into(),
        }
    }

    /// Whether the given token belongs to this section.
    pub fn matches(&self, token: &Token) -> bool {
        token.name.starts_with(&self.token_prefix)
    }
}
