//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::AvailkitConfig;
use availkit_diagnostics::RuleDescriptor;
use availkit_model::{DeploymentVersion, PlatformName};
use std::collections::HashSet;
use std::path::Path;

/// The configuration file looked up in a project directory.
pub const CONFIG_FILE_NAME: &str = "availkit.toml";

/// Loads and validates `availkit.toml` from a project directory.
///
/// A missing file is not an error; it yields the default configuration.
pub fn load_config(project_dir: &Path) -> Result<AvailkitConfig, ConfigError> {
    let config_path = project_dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "no configuration file, using defaults");
        return Ok(AvailkitConfig::default());
    }
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates an `availkit.toml` configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<AvailkitConfig, ConfigError> {
    let config: AvailkitConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Checks platform and version syntax and that every rule entry is known
/// and listed at most once across `allow` and `deny`.
fn validate_config(config: &AvailkitConfig) -> Result<(), ConfigError> {
    if let Some(platform) = &config.analysis.platform {
        platform
            .parse::<PlatformName>()
            .map_err(|_| ConfigError::UnknownPlatform(platform.clone()))?;
    }

    if let Some(version) = &config.analysis.minimum_os_version {
        version.parse::<DeploymentVersion>().map_err(|_| {
            ConfigError::ValidationError(format!(
                "analysis.minimum_os_version '{version}' is not a major.minor[.patch] version"
            ))
        })?;
    }

    let mut allowed = HashSet::new();
    for ident in &config.rules.allow {
        let rule = RuleDescriptor::lookup(ident)
            .ok_or_else(|| ConfigError::UnknownRule(ident.clone()))?;
        allowed.insert(rule.code);
    }
    for ident in &config.rules.deny {
        let rule = RuleDescriptor::lookup(ident)
            .ok_or_else(|| ConfigError::UnknownRule(ident.clone()))?;
        if allowed.contains(&rule.code) {
            return Err(ConfigError::ValidationError(format!(
                "rule {} is both allowed and denied",
                rule.code
            )));
        }
    }

    Ok(())
}
