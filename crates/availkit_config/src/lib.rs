//! Parsing, validation and resolution of `availkit.toml` analysis settings.
//!
//! This crate reads the optional configuration file into a strongly-typed
//! [`AvailkitConfig`] and combines it with what the host knows about the
//! compilation (referenced assemblies, the manifest's minimum OS version)
//! into a [`ResolvedAnalysis`].

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use resolve::{resolve_analysis, ResolvedAnalysis};
pub use types::*;
