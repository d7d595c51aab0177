//! Value types produced by the alignment pipeline.
//!
//! Everything here is transient and value-like: produced per request, no
//! identity beyond structural equality, serde-serializable so the render
//! model can cross a process boundary to whatever draws it.

use serde::{Deserialize, Serialize};

/// A single occurrence of an identical substring shared by both texts.
///
/// Indices are char positions into the normalized text of each side. Blocks
/// discovered in different recursive branches may overlap in index range on
/// either side; the span builder resolves overlap with a per-position max,
/// so overlap is expected here, not a defect.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchBlock {
    /// Start position in the left text.
    pub left: usize,
    /// Start position in the right text.
    pub right: usize,
    /// Length of the shared run, in chars.
    pub len: usize,
}

/// Whether the shared-substring search ran to completion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    #[default]
    Complete,
    /// The node budget ran out mid-search; the block list holds everything
    /// found up to that point. Distinct from "no matches found".
    Truncated,
}

/// Result of a shared-substring search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Blocks sorted by `(len, left)` ascending.
    pub blocks: Vec<MatchBlock>,
    pub status: SearchStatus,
}

/// A maximal run of consecutive chars sharing one highlight weight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplaySpan {
    /// Markup-escaped text of the run.
    pub fragment: String,
    /// Length of the longest match block covering the run; 0 for unmatched
    /// text.
    pub weight: usize,
}

/// Display spans for one side plus the weight bounds observed while
/// building them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpanSet {
    pub spans: Vec<DisplaySpan>,
    pub min_weight: usize,
    pub max_weight: usize,
}

/// An ordered focus-region marker pair.
///
/// Absence of a usable pair (missing or legacy-format markers) is modeled as
/// `Option<FocusInterval>::None` by the resolver, which serializes to JSON
/// `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FocusInterval {
    pub min: String,
    pub max: String,
}

/// Fully assembled highlight model for one text pair.
///
/// Consumed by a rendering layer outside this crate's scope; every fragment
/// inside the span lists is already escaped for markup embedding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderModel {
    pub left_spans: Vec<DisplaySpan>,
    pub right_spans: Vec<DisplaySpan>,
    /// Smallest weight observed on either side.
    pub min_weight: usize,
    /// Largest weight observed on either side.
    pub max_weight: usize,
    pub focus_left: Option<FocusInterval>,
    pub focus_right: Option<FocusInterval>,
    /// UI-facing starting threshold: `max_weight` capped by the config.
    pub suggested_threshold: usize,
    /// Completion status of the underlying substring search.
    pub status: SearchStatus,
}
