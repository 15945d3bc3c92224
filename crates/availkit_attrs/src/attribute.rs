//! Host-neutral description of one attribute occurrence on a symbol.

use serde::{Deserialize, Serialize};

/// A constant argument value as reported by the host's attribute API.
///
/// Enum-typed arguments arrive as their underlying integer value.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AttributeValue {
    /// A `null` constant.
    Null,
    /// A boolean constant.
    Bool(bool),
    /// A byte constant, including byte-backed enums.
    Byte(u8),
    /// A signed integer constant.
    Int(i64),
    /// An unsigned 64-bit constant, as used by the legacy encoding.
    #[serde(rename = "ulong")]
    ULong(u64),
    /// A string constant.
    Str(String),
}

impl AttributeValue {
    /// Reads the value as a byte if it is an integer in `0..=255`.
    pub fn as_u8(&self) -> Option<u8> {
        match *self {
            AttributeValue::Byte(b) => Some(b),
            AttributeValue::Int(i) => u8::try_from(i).ok(),
            AttributeValue::ULong(u) => u8::try_from(u).ok(),
            _ => None,
        }
    }

    /// Reads the value as an unsigned 64-bit integer.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            AttributeValue::Byte(b) => Some(u64::from(b)),
            AttributeValue::Int(i) => u64::try_from(i).ok(),
            AttributeValue::ULong(u) => Some(u),
            _ => None,
        }
    }

    /// Reads the value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            AttributeValue::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// Reads the value as a string; `None` for `null` and non-strings.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Renders the value the way the host would print it.
    pub fn to_display_string(&self) -> Option<String> {
        match self {
            AttributeValue::Null => None,
            AttributeValue::Bool(b) => Some(b.to_string()),
            AttributeValue::Byte(b) => Some(b.to_string()),
            AttributeValue::Int(i) => Some(i.to_string()),
            AttributeValue::ULong(u) => Some(u.to_string()),
            AttributeValue::Str(s) => Some(s.clone()),
        }
    }
}

/// A `Name = value` argument following the constructor arguments.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct NamedArgument {
    /// The property or field name.
    pub name: String,
    /// The assigned value.
    pub value: AttributeValue,
}

/// One attribute applied to a symbol.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct AttributeData {
    /// The containing namespace of the attribute class, e.g. `ObjCRuntime`.
    pub namespace: String,
    /// The attribute class name, e.g. `IntroducedAttribute`.
    pub type_name: String,
    /// Positional constructor arguments, in order.
    #[serde(default)]
    pub constructor_args: Vec<AttributeValue>,
    /// Named arguments, in source order.
    #[serde(default)]
    pub named_args: Vec<NamedArgument>,
}

impl AttributeData {
    /// Creates an attribute with no arguments.
    pub fn new(namespace: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            type_name: type_name.into(),
            constructor_args: Vec::new(),
            named_args: Vec::new(),
        }
    }

    /// Sets the constructor arguments.
    pub fn with_args(mut self, args: impl IntoIterator<Item = AttributeValue>) -> Self {
        self.constructor_args = args.into_iter().collect();
        self
    }

    /// Appends a named argument.
    pub fn with_named(mut self, name: impl Into<String>, value: AttributeValue) -> Self {
        self.named_args.push(NamedArgument {
            name: name.into(),
            value,
        });
        self
    }
}
