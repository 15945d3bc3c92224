//! Recognition and merging of platform binding attributes.
//!
//! Hosts describe each attribute occurrence as an [`AttributeData`] value.
//! [`AttributeKind::classify`] maps it onto the closed set of shapes this
//! crate understands, and [`AttributeMerger`] folds the recognized ones into
//! an [`AvailabilityRecord`](availkit_model::AvailabilityRecord).

#![warn(missing_docs)]

pub mod attribute;
pub mod error;
pub mod kind;
pub mod merge;

pub use attribute::{AttributeData, AttributeValue, NamedArgument};
pub use error::MergeError;
pub use kind::{AttributeKind, ADVICE_NAMESPACE, INTEROP_NAMESPACE};
pub use merge::AttributeMerger;
