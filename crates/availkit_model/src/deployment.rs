//! Minimum deployment versions read from an app manifest.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::platform::PlatformName;
use crate::version::PlatformVersion;

/// The minimum OS version an app declares support for, as `major.minor[.patch]`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct DeploymentVersion {
    /// Major version.
    pub major: u8,
    /// Minor version.
    pub minor: u8,
    /// Patch version; `0` when the manifest omits it.
    pub patch: u8,
}

impl DeploymentVersion {
    /// Creates a deployment version.
    pub fn new(major: u8, minor: u8, patch: u8) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// The comparison target for `platform`: an architecture-independent
    /// slot carrying only major and minor.
    pub fn target_for(&self, platform: PlatformName) -> PlatformVersion {
        PlatformVersion::version(platform, self.major, self.minor)
    }
}

impl fmt::Display for DeploymentVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if self.patch > 0 {
            write!(f, ".{}", self.patch)?;
        }
        Ok(())
    }
}

impl FromStr for DeploymentVersion {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || ModelError::InvalidVersion(s.to_string());

        let components = s
            .split('.')
            .map(|part| {
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(err());
                }
                part.parse::<u8>().map_err(|_| err())
            })
            .collect::<Result<Vec<u8>, ModelError>>()?;

        match components.as_slice() {
            [major, minor] => Ok(Self::new(*major, *minor, 0)),
            [major, minor, patch] => Ok(Self::new(*major, *minor, *patch)),
            _ => Err(err()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Architecture;

    #[test]
    fn parse_major_minor() {
        let v: DeploymentVersion = "9.0".parse().unwrap();
        assert_eq!(v, DeploymentVersion::new(9, 0, 0));
    }

    #[test]
    fn parse_with_patch() {
        let v: DeploymentVersion = " 10.13.2 ".parse().unwrap();
        assert_eq!(v, DeploymentVersion::new(10, 13, 2));
        assert_eq!(v.to_string(), "10.13.2");
    }

    #[test]
    fn reject_malformed() {
        for bad in ["", "9", "9.", "nine.0", "1.2.3.4", "300.0", "-1.0", "9.0b"] {
            assert!(
                bad.parse::<DeploymentVersion>().is_err(),
                "'{bad}' should not parse"
            );
        }
    }

    #[test]
    fn target_drops_patch() {
        let target = DeploymentVersion::new(11, 2, 5).target_for(PlatformName::Ios);
        assert_eq!((target.major(), target.minor(), target.subminor()), (11, 2, 0));
        assert_eq!(target.architecture(), Architecture::ALL);
    }
}
