//! Error types for the availability value model.

/// Errors produced while constructing availability values from raw input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A platform byte that does not name a concrete platform.
    #[error("unknown platform identifier {0}")]
    UnknownPlatform(u8),

    /// A platform name string that does not match any platform.
    #[error("unknown platform name '{0}'")]
    UnknownPlatformName(String),

    /// A version string not shaped like `major.minor[.patch]`.
    #[error("invalid version '{0}'")]
    InvalidVersion(String),
}
