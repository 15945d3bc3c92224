//! Deciding which availability advisory, if any, a use site deserves.
//!
//! The host describes each use of an API as a [`UseSite`]: the referenced
//! [`Symbol`] with its attributes, the kind of operation and, for property
//! references, how the property is accessed. The [`AvailabilityAnalyzer`]
//! collects the symbol's [`AvailabilityRecord`](availkit_model::AvailabilityRecord),
//! runs the [`advisory`] decision functions against the resolved platform and
//! deployment target, and emits diagnostics into a
//! [`DiagnosticSink`](availkit_diagnostics::DiagnosticSink).

#![warn(missing_docs)]

pub mod accessor;
pub mod advisory;
mod analyzer;
mod collect;
pub mod error;
pub mod symbol;
pub mod use_site;

pub use accessor::{AccessKind, AccessorRole};
pub use advisory::{advise, deprecation_message, introduction_message, Advisory};
pub use analyzer::AvailabilityAnalyzer;
pub use collect::{CollectedAvailability, RecordCollector};
pub use error::AnalysisError;
pub use symbol::{Symbol, SymbolKind};
pub use use_site::{OperationKind, UseSite};
