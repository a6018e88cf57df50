// Error taxonomy for the analysis core.
//
// The numeric modules (matrix building, JLH scoring, keyword expansion) return
// these typed errors so callers can tell a too-small corpus apart from a bad
// seed phrase. The CLI wraps them in anyhow like everything else.

use thiserror::Error;

/// Failures raised by vocabulary fitting, scoring and keyword expansion.
///
/// None of these are recovered internally: the caller adjusts thresholds or
/// the corpus and retries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// No term survived the document-frequency bounds.
    #[error("no terms remain after vocabulary pruning; lower min_df or raise max_df")]
    EmptyVocabulary,

    /// No document contains every seed term.
    #[error("no document contains all of the seed terms")]
    EmptyForeground,

    /// A seed term was pruned from (or never entered) the fitted vocabulary.
    #[error("seed term '{0}' is not in the fitted vocabulary")]
    UnknownTerm(String),

    /// A vocabulary column has zero share of the background counts.
    #[error("background share of column {column} is zero")]
    DivisionByZero { column: usize },

    /// A matrix has no counts at all, so relative fractions are undefined.
    #[error("matrix has a grand total of zero")]
    ZeroTotal,

    /// Foreground and background were built over different vocabularies.
    #[error("column count mismatch: foreground has {foreground}, background has {background}")]
    ShapeMismatch { foreground: usize, background: usize },

    /// The seed phrase contained no terms.
    #[error("seed phrase is empty")]
    NoSeedTerms,

    /// A configuration value is outside its allowed range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
