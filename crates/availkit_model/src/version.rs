//! A single platform's availability slot: architecture plus a version triple.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::platform::{Architecture, PlatformName};

/// Major version byte meaning "applies to every version".
pub const ANY_VERSION: u8 = 0xff;

/// An architecture mask and `major.minor.subminor` version for one platform.
///
/// Each field occupies its own byte, so the slot packs losslessly into a
/// `u32` laid out as `AA JJ NN SS` (architecture, major, minor, subminor).
/// A slot whose packed form is zero is unspecified. Ordering between slots
/// only looks at the version triple; see [`PlatformVersion::compare`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct PlatformVersion {
    name: PlatformName,
    arch: Architecture,
    major: u8,
    minor: u8,
    subminor: u8,
}

impl PlatformVersion {
    /// Creates a slot with every field given explicitly.
    pub fn new(
        name: PlatformName,
        arch: Architecture,
        major: u8,
        minor: u8,
        subminor: u8,
    ) -> Self {
        Self {
            name,
            arch,
            major,
            minor,
            subminor,
        }
    }

    /// Creates an architecture-independent `major.minor` version.
    pub fn version(name: PlatformName, major: u8, minor: u8) -> Self {
        Self::new(name, Architecture::ALL, major, minor, 0)
    }

    /// Creates an unspecified slot for `name`.
    pub fn unspecified(name: PlatformName) -> Self {
        Self::new(name, Architecture::NONE, 0, 0, 0)
    }

    /// Unpacks an `AA JJ NN SS` word into a slot for `name`.
    pub fn from_packed(name: PlatformName, packed: u32) -> Self {
        let [arch, major, minor, subminor] = packed.to_be_bytes();
        Self::new(name, Architecture::from_bits(arch), major, minor, subminor)
    }

    /// Packs this slot into an `AA JJ NN SS` word.
    pub fn to_packed(&self) -> u32 {
        u32::from_be_bytes([self.arch.bits(), self.major, self.minor, self.subminor])
    }

    /// The platform this slot belongs to.
    pub fn name(&self) -> PlatformName {
        self.name
    }

    /// The architecture mask, reading an unset mask as [`Architecture::ALL`].
    pub fn architecture(&self) -> Architecture {
        if self.arch.is_empty() {
            Architecture::ALL
        } else {
            self.arch
        }
    }

    /// The architecture byte exactly as stored.
    pub fn raw_architecture(&self) -> Architecture {
        self.arch
    }

    /// The major version.
    pub fn major(&self) -> u8 {
        self.major
    }

    /// The minor version.
    pub fn minor(&self) -> u8 {
        self.minor
    }

    /// The subminor version.
    pub fn subminor(&self) -> u8 {
        self.subminor
    }

    /// Returns `true` if any field carries information.
    pub fn is_specified(&self) -> bool {
        self.to_packed() != 0
    }

    /// Compares version triples; architecture is ignored.
    ///
    /// Any slot compares greater than an absent one.
    pub fn compare(&self, other: Option<&PlatformVersion>) -> Ordering {
        match other {
            Some(other) => self.cmp_version(other),
            None => Ordering::Greater,
        }
    }

    /// Lexicographic comparison over `(major, minor, subminor)`.
    pub fn cmp_version(&self, other: &PlatformVersion) -> Ordering {
        (self.major, self.minor, self.subminor).cmp(&(other.major, other.minor, other.subminor))
    }

    /// Field-wise bitwise OR of the packed forms.
    ///
    /// Disjoint fields combine cleanly. When both sides set the same field to
    /// different non-zero values the result blends their bits; use
    /// [`PlatformVersion::prefer_newest`] when that matters.
    pub fn union(&self, other: &PlatformVersion) -> PlatformVersion {
        PlatformVersion::from_packed(self.name, self.to_packed() | other.to_packed())
    }

    /// Keeps the newer of two specified versions and ORs their architectures.
    pub fn prefer_newest(&self, other: &PlatformVersion) -> PlatformVersion {
        match (self.is_specified(), other.is_specified()) {
            (_, false) => *self,
            (false, true) => PlatformVersion { name: self.name, ..*other },
            (true, true) => {
                let newest = if other.cmp_version(self) == Ordering::Greater {
                    other
                } else {
                    self
                };
                PlatformVersion {
                    name: self.name,
                    arch: self.arch | other.arch,
                    ..*newest
                }
            }
        }
    }

    /// Human-readable label used inside advisory messages.
    ///
    /// `iOS 8.0` when a concrete major version is present, `iOS 64-bit` or
    /// `iOS 32-bit` when only one architecture applies, otherwise the bare
    /// platform name.
    pub fn full_name(&self) -> String {
        let name = self.name.display_name();

        if self.major > 0 && self.major != ANY_VERSION {
            return format!("{name} {}.{}", self.major, self.minor);
        }

        match self.architecture() {
            Architecture::ARCH32 => format!("{name} 32-bit"),
            Architecture::ARCH64 => format!("{name} 64-bit"),
            _ => name.to_string(),
        }
    }
}

/// Renders the binding-constant spelling, e.g. `Platform.iOS_8_0 | Platform.iOS_Arch64`.
impl fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_specified() {
            return Ok(());
        }

        let name = self.name.display_name();
        let mut parts = Vec::new();

        if self.major > 0 {
            let mut version = format!("Platform.{name}_{}_{}", self.major, self.minor);
            if self.subminor > 0 {
                version.push_str(&format!("_{}", self.subminor));
            }
            parts.push(version);
        }

        let arch = self.architecture();
        if arch != Architecture::ALL {
            for (bit, label) in [(Architecture::ARCH32, "Arch32"), (Architecture::ARCH64, "Arch64")] {
                if arch.contains(bit) {
                    parts.push(format!("Platform.{name}_{label}"));
                }
            }
        }

        f.write_str(&parts.join(" | "))
    }
}
