//! Error types for configuration loading and validation.

/// Errors that can occur when loading or validating an `availkit.toml` configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the configuration file.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// `analysis.platform` does not name a platform.
    #[error("unknown platform '{0}'")]
    UnknownPlatform(String),

    /// A rule identifier matches neither a code nor a rule name.
    #[error("unknown rule '{0}'")]
    UnknownRule(String),

    /// A configuration value failed validation.
    #[error("validation error: {0}")]
    ValidationError(String),
}
