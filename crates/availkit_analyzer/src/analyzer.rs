//! The per-use-site analyzer and its parallel batch driver.
//!
//! The `AvailabilityAnalyzer` is built from a [`ResolvedAnalysis`]. Rules in
//! its allow set are never reported; rules in its deny set are reported at
//! error severity. Everything else uses the rule's default severity.

use rayon::prelude::*;

use availkit_config::ResolvedAnalysis;
use availkit_diagnostics::{AdvisoryKind, Diagnostic, DiagnosticSink, Severity};

use crate::advisory::{advise, Advisory};
use crate::collect::RecordCollector;
use crate::use_site::UseSite;

/// Analyzes use sites against one compilation's platform and deployment target.
#[derive(Debug, Clone)]
pub struct AvailabilityAnalyzer {
    analysis: ResolvedAnalysis,
    collector: RecordCollector,
}

impl AvailabilityAnalyzer {
    /// Creates an analyzer for the given resolved settings.
    pub fn new(analysis: ResolvedAnalysis) -> Self {
        let collector = RecordCollector::new(analysis.policy);
        Self {
            analysis,
            collector,
        }
    }

    /// The settings this analyzer runs with.
    pub fn analysis(&self) -> &ResolvedAnalysis {
        &self.analysis
    }

    /// Analyzes one use site and emits its diagnostics into `sink`.
    #[tracing::instrument(skip_all, fields(symbol = %site.symbol.name, operation = ?site.operation))]
    pub fn analyze(&self, site: &UseSite, sink: &DiagnosticSink) {
        for diag in self.diagnostics_for(site) {
            sink.emit(diag);
        }
    }

    /// Analyzes independent use sites in parallel.
    ///
    /// Diagnostics reach `sink` grouped per use site, in the order of `sites`.
    #[tracing::instrument(skip_all, fields(site_count = sites.len(), platform = %self.analysis.platform))]
    pub fn analyze_all(&self, sites: &[UseSite], sink: &DiagnosticSink) {
        let per_site: Vec<Vec<Diagnostic>> = sites
            .par_iter()
            .map(|site| self.diagnostics_for(site))
            .collect();

        for diag in per_site.into_iter().flatten() {
            sink.emit(diag);
        }
    }

    /// Computes the diagnostics for one use site without emitting them.
    ///
    /// Advice is reported first, once per advice attribute found. At most
    /// one availability advisory follows. A symbol whose attributes cannot
    /// be merged is skipped with a warning.
    pub fn diagnostics_for(&self, site: &UseSite) -> Vec<Diagnostic> {
        if !site.operation.is_of_interest() {
            return Vec::new();
        }

        let collected = match self.collector.collect(site) {
            Ok(collected) => collected,
            Err(err) => {
                tracing::warn!(%err, "skipping use site");
                return Vec::new();
            }
        };

        let mut out: Vec<Diagnostic> = collected
            .advice
            .into_iter()
            .filter_map(|text| self.report(site, &Advisory::new(AdvisoryKind::Advice, text), false))
            .collect();

        let advisory = advise(
            collected.record.as_ref(),
            self.analysis.minimum_version,
            self.analysis.platform,
        );
        if let Some(diag) = advisory.and_then(|a| self.report(site, &a, true)) {
            out.push(diag);
        }
        out
    }

    /// Builds the diagnostic for `advisory` unless its rule is allowed.
    fn report(&self, site: &UseSite, advisory: &Advisory, name_symbol: bool) -> Option<Diagnostic> {
        let code = advisory.kind.code();
        if self.analysis.allow.contains(&code) {
            return None;
        }

        let message = if name_symbol {
            advisory.render_for(&site.symbol.name)
        } else {
            advisory.message.clone()
        };
        let mut diag = Diagnostic::advisory(advisory.kind, message);
        if self.analysis.deny.contains(&code) {
            diag.severity = Severity::Error;
        }
        if let Some(location) = &site.location {
            diag = diag.with_location(location.clone());
        }
        Some(diag)
    }
}
