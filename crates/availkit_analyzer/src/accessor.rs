//! Which property accessors a syntactic use of a property goes through.

use serde::{Deserialize, Serialize};

/// How the host's syntax layer saw a property being used.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessKind {
    /// Any read: an rvalue, an argument, an element access.
    #[default]
    Read,
    /// The target of a plain assignment.
    AssignmentTarget,
    /// The operand of `++` or `--`, prefix or postfix.
    IncrementOrDecrement,
    /// The target of a compound assignment such as `+=`.
    CompoundAssignment,
}

/// A property accessor method.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessorRole {
    /// The `get` accessor.
    Getter,
    /// The `set` accessor.
    Setter,
}

impl AccessKind {
    /// The accessors this use goes through, in merge order.
    pub fn accessors(self) -> &'static [AccessorRole] {
        match self {
            AccessKind::Read => &[AccessorRole::Getter],
            AccessKind::AssignmentTarget => &[AccessorRole::Setter],
            AccessKind::IncrementOrDecrement | AccessKind::CompoundAssignment => {
                &[AccessorRole::Getter, AccessorRole::Setter]
            }
        }
    }
}
