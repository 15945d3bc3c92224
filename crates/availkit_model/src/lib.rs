//! Value types describing on which Apple platform versions an API exists.
//!
//! This crate provides the platform identifiers and architecture masks, the
//! per-platform [`PlatformVersion`] slot, the four-slot [`PlatformSet`] with
//! its union and legacy decoding, the accumulated [`AvailabilityRecord`] for
//! one symbol, and the [`DeploymentVersion`] read from an app manifest.

#![warn(missing_docs)]

pub mod deployment;
pub mod error;
pub mod platform;
pub mod record;
pub mod set;
pub mod version;

pub use deployment::DeploymentVersion;
pub use error::ModelError;
pub use platform::{Architecture, PlatformName};
pub use record::{AvailabilityKind, AvailabilityRecord};
pub use set::{ConflictPolicy, PlatformSet};
pub use version::PlatformVersion;
