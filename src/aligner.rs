//! Alignment orchestration.
//!
//! [`Aligner`] wires the pipeline together: normalize each side, run the
//! shared-substring search once, build spans per side, resolve focus markers
//! per side, and assemble the render model. It holds only configuration, so
//! one instance serves any number of concurrent requests.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AlignConfig;
use crate::error::AlignError;
use crate::finder::find_matches;
use crate::focus::resolve_focus;
use crate::normalize::normalize_context;
use crate::spans::build_spans;
use crate::types::RenderModel;

/// One paraphrase pair to align, with optional focus markers per side.
///
/// The marker fields are optional because records predating the marker
/// format simply lack them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlignRequest {
    pub left_text: String,
    pub right_text: String,
    #[serde(default)]
    pub left_focus: Option<String>,
    #[serde(default)]
    pub left_anchor: Option<String>,
    #[serde(default)]
    pub right_focus: Option<String>,
    #[serde(default)]
    pub right_anchor: Option<String>,
}

/// Stateless alignment engine.
#[derive(Debug, Clone)]
pub struct Aligner {
    cfg: AlignConfig,
}

impl Aligner {
    /// Construct an aligner, validating the config.
    pub fn new(cfg: AlignConfig) -> Result<Self, AlignError> {
        if cfg.node_budget == 0 {
            return Err(AlignError::InvalidNodeBudget {
                budget: cfg.node_budget,
            });
        }
        if cfg.emphasis_markers.iter().any(|m| m.is_empty()) {
            return Err(AlignError::EmptyEmphasisMarker);
        }
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &AlignConfig {
        &self.cfg
    }

    /// Align one pair and assemble the render model.
    ///
    /// Never fails: degenerate inputs produce empty spans and absent focus
    /// intervals, and budget exhaustion surfaces as a `Truncated` status on
    /// the model.
    pub fn align(&self, request: &AlignRequest) -> RenderModel {
        let left = normalize_context(&request.left_text, &self.cfg.emphasis_markers);
        let right = normalize_context(&request.right_text, &self.cfg.emphasis_markers);

        let left_chars: Vec<char> = left.chars().collect();
        let right_chars: Vec<char> = right.chars().collect();
        let outcome = find_matches(
            &left_chars,
            &right_chars,
            self.cfg.min_len,
            self.cfg.node_budget,
        );

        let left_projections: Vec<(usize, usize)> =
            outcome.blocks.iter().map(|b| (b.left, b.len)).collect();
        let right_projections: Vec<(usize, usize)> =
            outcome.blocks.iter().map(|b| (b.right, b.len)).collect();
        let left_spans = build_spans(&left, &left_projections);
        let right_spans = build_spans(&right, &right_projections);

        let min_weight = left_spans.min_weight.min(right_spans.min_weight);
        let max_weight = left_spans.max_weight.max(right_spans.max_weight);

        let focus_left = resolve_focus(
            request.left_focus.as_deref(),
            request.left_anchor.as_deref(),
        );
        let focus_right = resolve_focus(
            request.right_focus.as_deref(),
            request.right_anchor.as_deref(),
        );

        debug!(
            blocks = outcome.blocks.len(),
            status = ?outcome.status,
            max_weight,
            "alignment complete"
        );

        RenderModel {
            left_spans: left_spans.spans,
            right_spans: right_spans.spans,
            min_weight,
            max_weight,
            focus_left,
            focus_right,
            suggested_threshold: max_weight.min(self.cfg.suggested_cap),
            status: outcome.status,
        }
    }
}
