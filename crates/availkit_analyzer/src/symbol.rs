//! The host's view of a referenced API symbol.

use availkit_attrs::AttributeData;
use serde::{Deserialize, Serialize};

use crate::accessor::AccessorRole;

/// What kind of member a symbol is.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    /// A class, struct, interface or enum.
    Type,
    /// A method or constructor.
    Method,
    /// A property or indexer.
    Property,
    /// A field or constant.
    Field,
    /// An event.
    Event,
}

/// A symbol with its attributes, accessors and declaring type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    /// The simple name used in diagnostic text.
    pub name: String,
    /// The member kind.
    pub kind: SymbolKind,
    /// Attributes applied to the symbol, in declaration order.
    #[serde(default)]
    pub attributes: Vec<AttributeData>,
    /// The `get` accessor of a property.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub getter: Option<Box<Symbol>>,
    /// The `set` accessor of a property.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setter: Option<Box<Symbol>>,
    /// The type that declares this symbol.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub containing_type: Option<Box<Symbol>>,
}

impl Symbol {
    /// Creates a symbol with no attributes.
    pub fn new(name: impl Into<String>, kind: SymbolKind) -> Self {
        Self {
            name: name.into(),
            kind,
            attributes: Vec::new(),
            getter: None,
            setter: None,
            containing_type: None,
        }
    }

    /// Adds attributes.
    pub fn with_attributes(mut self, attrs: impl IntoIterator<Item = AttributeData>) -> Self {
        self.attributes.extend(attrs);
        self
    }

    /// Sets the `get` accessor.
    pub fn with_getter(mut self, getter: Symbol) -> Self {
        self.getter = Some(Box::new(getter));
        self
    }

    /// Sets the `set` accessor.
    pub fn with_setter(mut self, setter: Symbol) -> Self {
        self.setter = Some(Box::new(setter));
        self
    }

    /// Sets the declaring type.
    pub fn with_containing_type(mut self, ty: Symbol) -> Self {
        self.containing_type = Some(Box::new(ty));
        self
    }

    /// The accessor playing `role`, if this property has one.
    pub fn accessor(&self, role: AccessorRole) -> Option<&Symbol> {
        match role {
            AccessorRole::Getter => self.getter.as_deref(),
            AccessorRole::Setter => self.setter.as_deref(),
        }
    }
}
