//! Resolution: merging configuration overrides with host-supplied inputs.

use crate::error::ConfigError;
use crate::types::AvailkitConfig;
use availkit_diagnostics::{DiagnosticCode, RuleDescriptor};
use availkit_model::{ConflictPolicy, DeploymentVersion, PlatformName};
use std::collections::HashSet;

/// Everything the analyzer needs to know about one compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAnalysis {
    /// The target platform. [`PlatformName::None`] disables availability checks.
    pub platform: PlatformName,
    /// The deployment target, if one is known and parseable.
    pub minimum_version: Option<DeploymentVersion>,
    /// How conflicting availability slots are combined.
    pub policy: ConflictPolicy,
    /// Codes that are not reported.
    pub allow: HashSet<DiagnosticCode>,
    /// Codes reported at error severity.
    pub deny: HashSet<DiagnosticCode>,
}

impl Default for ResolvedAnalysis {
    fn default() -> Self {
        Self {
            platform: PlatformName::None,
            minimum_version: None,
            policy: ConflictPolicy::default(),
            allow: HashSet::new(),
            deny: HashSet::new(),
        }
    }
}

/// Combines `config` with what the host read from the compilation.
///
/// The platform comes from `analysis.platform` when set, otherwise from the
/// first platform binding among `referenced_assemblies`. The minimum version
/// comes from `analysis.minimum_os_version` when set, otherwise from
/// `manifest_version`; a manifest value that does not parse is dropped with
/// a warning, which disables only the introduced-later check.
pub fn resolve_analysis<I, S>(
    config: &AvailkitConfig,
    referenced_assemblies: I,
    manifest_version: Option<&str>,
) -> Result<ResolvedAnalysis, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let platform = match &config.analysis.platform {
        Some(name) => name
            .parse::<PlatformName>()
            .map_err(|_| ConfigError::UnknownPlatform(name.clone()))?,
        None => PlatformName::from_referenced_assemblies(referenced_assemblies),
    };

    let minimum_version = match &config.analysis.minimum_os_version {
        Some(version) => Some(version.parse::<DeploymentVersion>().map_err(|_| {
            ConfigError::ValidationError(format!(
                "analysis.minimum_os_version '{version}' is not a major.minor[.patch] version"
            ))
        })?),
        None => manifest_version.and_then(|raw| match raw.parse::<DeploymentVersion>() {
            Ok(version) => Some(version),
            Err(err) => {
                tracing::warn!(%err, "ignoring unparseable minimum OS version from manifest");
                None
            }
        }),
    };

    Ok(ResolvedAnalysis {
        platform,
        minimum_version,
        policy: config.analysis.conflict_policy,
        allow: rule_codes(&config.rules.allow)?,
        deny: rule_codes(&config.rules.deny)?,
    })
}

fn rule_codes(idents: &[String]) -> Result<HashSet<DiagnosticCode>, ConfigError> {
    idents
        .iter()
        .map(|ident| {
            RuleDescriptor::lookup(ident)
                .map(|rule| rule.code)
                .ok_or_else(|| ConfigError::UnknownRule(ident.clone()))
        })
        .collect()
}
