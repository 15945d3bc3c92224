//! Conformance test helpers for the availkit pipeline.
//!
//! Provides attribute builders for the shapes the platform bindings use and
//! a pipeline function that runs configuration resolution, record
//! collection and advisory analysis over a batch of use sites, returning
//! structured results for assertion in integration tests.

#![warn(missing_docs)]

use availkit_analyzer::{AvailabilityAnalyzer, UseSite};
use availkit_attrs::{AttributeData, AttributeValue, ADVICE_NAMESPACE, INTEROP_NAMESPACE};
use availkit_config::{load_config_from_str, resolve_analysis, ConfigError};
use availkit_diagnostics::{Diagnostic, DiagnosticSink, Severity};
use availkit_model::{Architecture, AvailabilityKind, PlatformName};

/// Result of running configuration, collection and analysis end to end.
pub struct PipelineResult {
    /// All diagnostics emitted, in use-site order.
    pub diagnostics: Vec<Diagnostic>,
    /// Whether any errors were emitted.
    pub has_errors: bool,
    /// Number of error-severity diagnostics.
    pub error_count: usize,
    /// Number of info-severity diagnostics.
    pub info_count: usize,
}

impl PipelineResult {
    /// The diagnostic codes in emission order, e.g. `["XIA1002"]`.
    pub fn codes(&self) -> Vec<String> {
        self.diagnostics.iter().map(|d| d.code.to_string()).collect()
    }

    /// The diagnostic messages in emission order.
    pub fn messages(&self) -> Vec<&str> {
        self.diagnostics.iter().map(|d| d.message.as_str()).collect()
    }
}

/// Host-side inputs for one compilation.
#[derive(Debug, Clone, Default)]
pub struct Compilation<'a> {
    /// `availkit.toml` contents; empty for defaults.
    pub config: &'a str,
    /// Names of referenced assemblies.
    pub assemblies: &'a [&'a str],
    /// The manifest's minimum OS version string.
    pub manifest_version: Option<&'a str>,
}

impl<'a> Compilation<'a> {
    /// An iOS compilation with the given manifest version and no configuration.
    pub fn ios(manifest_version: &'a str) -> Self {
        Self {
            config: "",
            assemblies: &["mscorlib", "Xamarin.iOS"],
            manifest_version: Some(manifest_version),
        }
    }
}

/// Runs the full pipeline over `sites`.
pub fn run_pipeline(
    compilation: &Compilation<'_>,
    sites: &[UseSite],
) -> Result<PipelineResult, ConfigError> {
    let config = load_config_from_str(compilation.config)?;
    let analysis = resolve_analysis(
        &config,
        compilation.assemblies.iter().copied(),
        compilation.manifest_version,
    )?;

    let sink = DiagnosticSink::new();
    AvailabilityAnalyzer::new(analysis).analyze_all(sites, &sink);

    let has_errors = sink.has_errors();
    let error_count = sink.error_count();
    let diagnostics = sink.take_all();
    let info_count = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Info)
        .count();

    Ok(PipelineResult {
        diagnostics,
        has_errors,
        error_count,
        info_count,
    })
}

/// Decodes a JSON array of use sites, as a host would hand them over.
pub fn sites_from_json(json: &str) -> Result<Vec<UseSite>, serde_json::Error> {
    serde_json::from_str(json)
}

/// `[iOS (major, minor)]`.
pub fn ios(major: u8, minor: u8) -> AttributeData {
    AttributeData::new(INTEROP_NAMESPACE, "iOSAttribute")
        .with_args([AttributeValue::Byte(major), AttributeValue::Byte(minor)])
}

/// `[Mac (major, minor, onlyOn64)]`.
pub fn mac(major: u8, minor: u8, only_on_64: bool) -> AttributeData {
    AttributeData::new(INTEROP_NAMESPACE, "MacAttribute").with_args([
        AttributeValue::Byte(major),
        AttributeValue::Byte(minor),
        AttributeValue::Bool(only_on_64),
    ])
}

/// The five-argument single-platform form:
/// `[<Kind> (platform, major, minor, architecture, message)]`.
pub fn single(
    kind: AvailabilityKind,
    platform: PlatformName,
    major: u8,
    minor: u8,
    arch: Architecture,
    message: Option<&str>,
) -> AttributeData {
    AttributeData::new(INTEROP_NAMESPACE, format!("{}Attribute", kind.name())).with_args([
        AttributeValue::Byte(platform as u8),
        AttributeValue::Int(i64::from(major)),
        AttributeValue::Int(i64::from(minor)),
        AttributeValue::Byte(arch.bits()),
        message.map_or(AttributeValue::Null, |m| AttributeValue::Str(m.to_string())),
    ])
}

/// `[Availability (introduced, deprecated, obsoleted, unavailable)]` with
/// legacy-encoded positional values.
pub fn aggregate(positional: &[u64]) -> AttributeData {
    AttributeData::new(INTEROP_NAMESPACE, "AvailabilityAttribute")
        .with_args(positional.iter().map(|v| AttributeValue::ULong(*v)))
}

/// `[Advice (text)]`.
pub fn advice(text: &str) -> AttributeData {
    AttributeData::new(ADVICE_NAMESPACE, "AdviceAttribute")
        .with_args([AttributeValue::Str(text.to_string())])
}
