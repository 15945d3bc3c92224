//! One availability slot per concrete platform, with union and legacy decoding.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;

use crate::platform::PlatformName;
use crate::version::PlatformVersion;

/// How two specified slots for the same platform are combined.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictPolicy {
    /// Bitwise OR of the packed slots. Conflicting non-zero fields blend.
    #[default]
    BitwiseOr,
    /// The newer version wins; architecture bits are OR'd.
    PreferNewest,
}

/// A fully populated mapping from every concrete platform to its slot.
///
/// The default value has every slot unspecified and is the identity for
/// [`PlatformSet::union`], so an absent set and a default set behave alike.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct PlatformSet {
    ios: PlatformVersion,
    macos: PlatformVersion,
    watchos: PlatformVersion,
    tvos: PlatformVersion,
}

impl Default for PlatformSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformSet {
    /// Creates a set with every slot unspecified.
    pub fn new() -> Self {
        Self {
            ios: PlatformVersion::unspecified(PlatformName::Ios),
            macos: PlatformVersion::unspecified(PlatformName::MacOS),
            watchos: PlatformVersion::unspecified(PlatformName::WatchOS),
            tvos: PlatformVersion::unspecified(PlatformName::TvOS),
        }
    }

    /// Creates a set holding only `version` in its platform's slot.
    ///
    /// A version for [`PlatformName::None`] has no slot and yields an empty set.
    pub fn single(version: PlatformVersion) -> Self {
        let mut set = Self::new();
        if let Some(slot) = set.get_mut(version.name()) {
            *slot = version;
        }
        set
    }

    /// Decodes the legacy 64-bit encoding that predates per-platform attributes.
    ///
    /// The value has the layout `AAJJNNSS AAJJNNSS`: the low word carries iOS,
    /// the high word carries macOS. watchOS and tvOS stay unspecified.
    pub fn decode_legacy(encoding: u64) -> Self {
        let mut set = Self::new();
        set.ios = PlatformVersion::from_packed(PlatformName::Ios, encoding as u32);
        set.macos = PlatformVersion::from_packed(PlatformName::MacOS, (encoding >> 32) as u32);
        set
    }

    /// Returns the slot for `name`, or `None` for [`PlatformName::None`].
    pub fn get(&self, name: PlatformName) -> Option<&PlatformVersion> {
        match name {
            PlatformName::Ios => Some(&self.ios),
            PlatformName::MacOS => Some(&self.macos),
            PlatformName::WatchOS => Some(&self.watchos),
            PlatformName::TvOS => Some(&self.tvos),
            PlatformName::None => None,
        }
    }

    fn get_mut(&mut self, name: PlatformName) -> Option<&mut PlatformVersion> {
        match name {
            PlatformName::Ios => Some(&mut self.ios),
            PlatformName::MacOS => Some(&mut self.macos),
            PlatformName::WatchOS => Some(&mut self.watchos),
            PlatformName::TvOS => Some(&mut self.tvos),
            PlatformName::None => None,
        }
    }

    /// Iterates the slots in the order iOS, macOS, watchOS, tvOS.
    pub fn iter(&self) -> impl Iterator<Item = &PlatformVersion> {
        [&self.ios, &self.macos, &self.watchos, &self.tvos].into_iter()
    }

    /// Returns `true` if any slot is specified.
    pub fn is_specified(&self) -> bool {
        self.iter().any(PlatformVersion::is_specified)
    }

    /// Returns `true` if the slot for `name` is specified.
    pub fn is_specified_for(&self, name: PlatformName) -> bool {
        self.get(name).is_some_and(PlatformVersion::is_specified)
    }

    /// The [`full_name`](PlatformVersion::full_name) of the slot for `name`,
    /// or an empty string when there is no such slot.
    pub fn full_name_for(&self, name: PlatformName) -> String {
        self.get(name)
            .map(PlatformVersion::full_name)
            .unwrap_or_default()
    }

    /// Per-platform bitwise OR of the packed slots.
    ///
    /// Commutative, associative and idempotent, with the unspecified set as
    /// identity.
    pub fn union(&self, other: &PlatformSet) -> PlatformSet {
        self.merge(other, ConflictPolicy::BitwiseOr)
    }

    /// Combines two sets slot by slot under the given conflict policy.
    pub fn merge(&self, other: &PlatformSet, policy: ConflictPolicy) -> PlatformSet {
        let combine = |a: &PlatformVersion, b: &PlatformVersion| match policy {
            ConflictPolicy::BitwiseOr => a.union(b),
            ConflictPolicy::PreferNewest => a.prefer_newest(b),
        };
        PlatformSet {
            ios: combine(&self.ios, &other.ios),
            macos: combine(&self.macos, &other.macos),
            watchos: combine(&self.watchos, &other.watchos),
            tvos: combine(&self.tvos, &other.tvos),
        }
    }
}

impl From<u64> for PlatformSet {
    fn from(encoding: u64) -> Self {
        PlatformSet::decode_legacy(encoding)
    }
}

impl BitOr for PlatformSet {
    type Output = PlatformSet;

    fn bitor(self, rhs: PlatformSet) -> PlatformSet {
        self.union(&rhs)
    }
}

impl BitOr for &PlatformSet {
    type Output = PlatformSet;

    fn bitor(self, rhs: &PlatformSet) -> PlatformSet {
        self.union(rhs)
    }
}

impl fmt::Display for PlatformSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(ToString::to_string)
            .filter(|s| !s.is_empty())
            .collect();
        f.write_str(&parts.join(" | "))
    }
}
