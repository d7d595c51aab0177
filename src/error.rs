use thiserror::Error;

/// Errors that can occur while constructing an aligner.
///
/// Degenerate *inputs* (empty text, malformed focus markers, a zero
/// threshold) never produce errors; only an invalid configuration does.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlignError {
    #[error("invalid config: node_budget must be >= 1 (got {budget})")]
    InvalidNodeBudget { budget: usize },

    #[error("invalid config: emphasis markers must be non-empty strings")]
    EmptyEmphasisMarker,
}
