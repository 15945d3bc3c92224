//! A single use of a symbol reported by the host.

use availkit_diagnostics::Location;
use serde::{Deserialize, Serialize};

use crate::accessor::AccessKind;
use crate::symbol::Symbol;

/// The operation through which a symbol is used.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// `obj.Event += handler`.
    EventReference,
    /// `obj.Field`.
    FieldReference,
    /// `obj.Method ()`.
    Invocation,
    /// A method group, e.g. `Action a = obj.Method`.
    MethodReference,
    /// `obj.Property`.
    PropertyReference,
    /// `new T ()`.
    ObjectCreation,
    /// Any other operation. Never analyzed.
    #[serde(other)]
    Other,
}

impl OperationKind {
    /// Operations that are checked for availability.
    pub const OF_INTEREST: [OperationKind; 6] = [
        OperationKind::EventReference,
        OperationKind::FieldReference,
        OperationKind::Invocation,
        OperationKind::MethodReference,
        OperationKind::PropertyReference,
        OperationKind::ObjectCreation,
    ];

    /// Returns `true` if uses through this operation are analyzed.
    pub fn is_of_interest(self) -> bool {
        self != OperationKind::Other
    }
}

/// One use of a symbol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseSite {
    /// The referenced symbol.
    pub symbol: Symbol,
    /// The operation the symbol is referenced through.
    pub operation: OperationKind,
    /// How a property is accessed. Ignored for other symbols.
    #[serde(default)]
    pub access: AccessKind,
    /// Where the use occurs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl UseSite {
    /// Creates a read of `symbol` through `operation`, with no location.
    pub fn new(symbol: Symbol, operation: OperationKind) -> Self {
        Self {
            symbol,
            operation,
            access: AccessKind::Read,
            location: None,
        }
    }

    /// Sets the access kind.
    pub fn with_access(mut self, access: AccessKind) -> Self {
        self.access = access;
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }
}
