//! Error types for use-site analysis.

use availkit_attrs::MergeError;

/// Errors that abandon the analysis of one use site.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// An attribute on the symbol could not be merged.
    #[error("cannot collect availability of '{symbol}': {source}")]
    Merge {
        /// The symbol whose attributes were being merged.
        symbol: String,
        /// The underlying merge failure.
        #[source]
        source: MergeError,
    },
}
