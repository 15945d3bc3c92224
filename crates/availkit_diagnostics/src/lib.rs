//! Diagnostic creation, accumulation and rendering.
//!
//! This crate provides structured [`Diagnostic`] values tagged with a
//! [`DiagnosticCode`] and [`Severity`], the descriptors of the availability
//! rules, the thread-safe [`DiagnosticSink`] that collects diagnostics while
//! use sites are analyzed in parallel, and [`DiagnosticRenderer`]
//! implementations for terminal and JSON output.

#![warn(missing_docs)]

pub mod code;
pub mod descriptor;
pub mod diagnostic;
pub mod location;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use code::{Category, DiagnosticCode, ParseCodeError};
pub use descriptor::{AdvisoryKind, RuleDescriptor};
pub use diagnostic::Diagnostic;
pub use location::Location;
pub use renderer::{DiagnosticRenderer, JsonRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::DiagnosticSink;
