//! Configuration types deserialized from `availkit.toml`.
//!
//! Every section and field is optional. An empty file, or no file at all,
//! means: platform from the referenced assemblies, minimum version from the
//! manifest, bitwise-OR merging and every rule at its default severity.

use availkit_model::ConflictPolicy;
use serde::{Deserialize, Serialize};

/// Top-level `availkit.toml` contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AvailkitConfig {
    /// How the compilation is analyzed.
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// Per-rule severity overrides.
    #[serde(default)]
    pub rules: RulesConfig,
}

/// The `[analysis]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Overrides the platform derived from referenced assemblies
    /// (`ios`, `macos`, `watchos`, `tvos` or `none`).
    #[serde(default)]
    pub platform: Option<String>,
    /// Overrides the manifest's minimum OS version, as `major.minor[.patch]`.
    #[serde(default)]
    pub minimum_os_version: Option<String>,
    /// How conflicting availability slots are combined.
    #[serde(default)]
    pub conflict_policy: ConflictPolicy,
}

/// The `[rules]` section. Entries are codes (`XIA1003`) or rule names
/// (`deprecated`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    /// Rules that are not reported.
    #[serde(default)]
    pub allow: Vec<String>,
    /// Rules reported at error severity.
    #[serde(default)]
    pub deny: Vec<String>,
}
