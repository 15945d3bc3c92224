//! The accumulated availability facts for one symbol.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::platform::PlatformName;
use crate::set::{ConflictPolicy, PlatformSet};
use crate::version::PlatformVersion;

/// The four kinds of availability fact an attribute can state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum AvailabilityKind {
    /// First version on which the API exists.
    Introduced,
    /// Version from which the API is discouraged.
    Deprecated,
    /// Version from which the API may be removed.
    Obsoleted,
    /// The API is not usable at all.
    Unavailable,
}

impl AvailabilityKind {
    /// All kinds, in the positional order of the aggregate attribute.
    pub const ALL: [AvailabilityKind; 4] = [
        AvailabilityKind::Introduced,
        AvailabilityKind::Deprecated,
        AvailabilityKind::Obsoleted,
        AvailabilityKind::Unavailable,
    ];

    /// The attribute property name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            AvailabilityKind::Introduced => "Introduced",
            AvailabilityKind::Deprecated => "Deprecated",
            AvailabilityKind::Obsoleted => "Obsoleted",
            AvailabilityKind::Unavailable => "Unavailable",
        }
    }

    /// Looks a kind up by its attribute property name.
    pub fn from_name(name: &str) -> Option<AvailabilityKind> {
        AvailabilityKind::ALL.into_iter().find(|k| k.name() == name)
    }
}

/// Availability facts merged from every relevant attribute on a symbol.
///
/// Built fresh for each symbol use and discarded once the advisory decision
/// has been made.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct AvailabilityRecord {
    /// Versions on which the API was introduced.
    pub introduced: PlatformSet,
    /// Versions on which the API was deprecated.
    pub deprecated: PlatformSet,
    /// Versions on which the API was obsoleted.
    pub obsoleted: PlatformSet,
    /// Platforms on which the API is unavailable.
    pub unavailable: PlatformSet,
    /// Free-form explanation attached by the binding author.
    pub message: Option<String>,
}

impl AvailabilityRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if any set is specified or a message is present.
    pub fn is_specified(&self) -> bool {
        AvailabilityKind::ALL
            .into_iter()
            .any(|k| self.set(k).is_specified())
            || self.message.is_some()
    }

    /// The set holding facts of the given kind.
    pub fn set(&self, kind: AvailabilityKind) -> &PlatformSet {
        match kind {
            AvailabilityKind::Introduced => &self.introduced,
            AvailabilityKind::Deprecated => &self.deprecated,
            AvailabilityKind::Obsoleted => &self.obsoleted,
            AvailabilityKind::Unavailable => &self.unavailable,
        }
    }

    fn set_mut(&mut self, kind: AvailabilityKind) -> &mut PlatformSet {
        match kind {
            AvailabilityKind::Introduced => &mut self.introduced,
            AvailabilityKind::Deprecated => &mut self.deprecated,
            AvailabilityKind::Obsoleted => &mut self.obsoleted,
            AvailabilityKind::Unavailable => &mut self.unavailable,
        }
    }

    /// Folds `set` into the field for `kind`.
    pub fn merge_set(&mut self, kind: AvailabilityKind, set: &PlatformSet, policy: ConflictPolicy) {
        let field = self.set_mut(kind);
        *field = field.merge(set, policy);
    }

    /// The slot of the given kind for `platform`.
    pub fn slot(&self, kind: AvailabilityKind, platform: PlatformName) -> Option<&PlatformVersion> {
        self.set(kind).get(platform)
    }

    /// Returns `true` if a fact of `kind` is recorded for `platform`.
    pub fn is_specified_for(&self, kind: AvailabilityKind, platform: PlatformName) -> bool {
        self.set(kind).is_specified_for(platform)
    }

    /// Appends `message`, joining with `"; "` when one is already present.
    pub fn append_message(&mut self, message: &str) {
        self.message = Some(match self.message.take() {
            Some(existing) => format!("{existing}; {message}"),
            None => message.to_string(),
        });
    }
}

/// Renders the attribute-style summary, e.g.
/// `[Availability (Introduced = Platform.iOS_8_0, Message = "use Bar")]`.
impl fmt::Display for AvailabilityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = AvailabilityKind::ALL
            .into_iter()
            .filter(|k| self.set(*k).is_specified())
            .map(|k| format!("{} = {}", k.name(), self.set(k)))
            .collect();

        if let Some(message) = self.message.as_deref().filter(|m| !m.is_empty()) {
            parts.push(format!("Message = \"{}\"", message.replace('"', "\\\"")));
        }

        if parts.is_empty() {
            f.write_str("[Availability]")
        } else {
            write!(f, "[Availability ({})]", parts.join(", "))
        }
    }
}
