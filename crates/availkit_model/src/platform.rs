//! Apple platform identifiers and CPU architecture masks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

use crate::error::ModelError;

/// A closed set of Apple platforms an API can be annotated for.
///
/// The discriminants match the byte values used by the platform binding
/// attributes. `None` means "not applicable" and never carries a version.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PlatformName {
    /// No platform; analysis does not apply.
    None = 0,
    /// macOS (formerly Mac OS X).
    MacOS = 1,
    /// iOS.
    Ios = 2,
    /// watchOS.
    WatchOS = 3,
    /// tvOS.
    TvOS = 4,
}

impl PlatformName {
    /// Every concrete platform, in slot order.
    pub const ALL: [PlatformName; 4] = [
        PlatformName::Ios,
        PlatformName::MacOS,
        PlatformName::WatchOS,
        PlatformName::TvOS,
    ];

    /// Returns the user-facing platform name used in advisory messages.
    pub fn display_name(self) -> &'static str {
        match self {
            PlatformName::None => "None",
            PlatformName::MacOS => "macOS",
            PlatformName::Ios => "iOS",
            PlatformName::WatchOS => "watchOS",
            PlatformName::TvOS => "tvOS",
        }
    }

    /// Returns `true` unless this is [`PlatformName::None`].
    pub fn is_concrete(self) -> bool {
        self != PlatformName::None
    }

    /// Maps a platform binding assembly name to its platform.
    pub fn from_assembly_name(name: &str) -> Option<PlatformName> {
        match name {
            "Xamarin.iOS" => Some(PlatformName::Ios),
            "Xamarin.WatchOS" => Some(PlatformName::WatchOS),
            "Xamarin.TVOS" => Some(PlatformName::TvOS),
            "Xamarin.Mac" => Some(PlatformName::MacOS),
            _ => None,
        }
    }

    /// Derives the target platform from the assemblies a compilation references.
    ///
    /// The first binding assembly found wins; without one the result is
    /// [`PlatformName::None`].
    pub fn from_referenced_assemblies<I, S>(names: I) -> PlatformName
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .find_map(|n| PlatformName::from_assembly_name(n.as_ref()))
            .unwrap_or(PlatformName::None)
    }
}

impl TryFrom<u8> for PlatformName {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PlatformName::None),
            1 => Ok(PlatformName::MacOS),
            2 => Ok(PlatformName::Ios),
            3 => Ok(PlatformName::WatchOS),
            4 => Ok(PlatformName::TvOS),
            other => Err(ModelError::UnknownPlatform(other)),
        }
    }
}

impl FromStr for PlatformName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(PlatformName::None),
            "macos" | "macosx" | "mac" => Ok(PlatformName::MacOS),
            "ios" => Ok(PlatformName::Ios),
            "watchos" => Ok(PlatformName::WatchOS),
            "tvos" => Ok(PlatformName::TvOS),
            _ => Err(ModelError::UnknownPlatformName(s.to_string())),
        }
    }
}

impl fmt::Display for PlatformName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A bit mask over the CPU architectures an availability fact applies to.
///
/// [`Architecture::ALL`] means architecture-independent and is distinct from
/// [`Architecture::NONE`], which means the architecture was never set.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Architecture(u8);

impl Architecture {
    /// No architecture bits set.
    pub const NONE: Architecture = Architecture(0x00);
    /// 32-bit only.
    pub const ARCH32: Architecture = Architecture(0x01);
    /// 64-bit only.
    pub const ARCH64: Architecture = Architecture(0x02);
    /// Every architecture.
    pub const ALL: Architecture = Architecture(0xff);

    /// Wraps a raw architecture byte.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Returns the raw architecture byte.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` if every bit of `other` is set in `self`.
    pub fn contains(self, other: Architecture) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if no bits are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Architecture {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Architecture::NONE => f.write_str("None"),
            Architecture::ALL => f.write_str("All"),
            Architecture::ARCH32 => f.write_str("Arch32"),
            Architecture::ARCH64 => f.write_str("Arch64"),
            Architecture(bits) if bits == 0x03 => f.write_str("Arch32 | Arch64"),
            Architecture(bits) => write!(f, "Arch({bits:#04x})"),
        }
    }
}

impl fmt::Debug for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Architecture({self})")
    }
}
