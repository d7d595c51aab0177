//! Configuration for the alignment pipeline.
//!
//! [`AlignConfig`] is the single knob surface for the engine. It is cheap to
//! clone and serde-friendly so higher-level application configs can embed it
//! directly.

use serde::{Deserialize, Serialize};

/// Configuration for an [`Aligner`](crate::Aligner).
///
/// All fields carry serde defaults, so a partial JSON object deserializes
/// into a usable config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlignConfig {
    /// Minimum shared-substring length (in chars) treated as significant.
    ///
    /// Zero is clamped to 1 at use sites rather than rejected; the threshold
    /// can never be disabled outright, which also guarantees the search
    /// terminates.
    #[serde(default = "AlignConfig::default_min_len")]
    pub min_len: usize,

    /// Maximum number of search windows the finder may visit per request.
    ///
    /// Adversarial repetitive input can push the divide-and-conquer search
    /// toward exponential work; the budget bounds it. When exhausted the
    /// search stops and reports [`SearchStatus::Truncated`](crate::SearchStatus)
    /// with the blocks found so far. Must be >= 1.
    #[serde(default = "AlignConfig::default_node_budget")]
    pub node_budget: usize,

    /// Cap applied to the suggested highlight threshold in the render model.
    #[serde(default = "AlignConfig::default_suggested_cap")]
    pub suggested_cap: usize,

    /// Inline markup tokens replaced by a single space during normalization.
    ///
    /// Markers must be non-empty strings.
    #[serde(default = "AlignConfig::default_emphasis_markers")]
    pub emphasis_markers: Vec<String>,
}

impl AlignConfig {
    pub(crate) fn default_min_len() -> usize {
        15
    }

    pub(crate) fn default_node_budget() -> usize {
        250_000
    }

    pub(crate) fn default_suggested_cap() -> usize {
        30
    }

    pub(crate) fn default_emphasis_markers() -> Vec<String> {
        vec!["<i>".to_string(), "</i>".to_string()]
    }
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            min_len: Self::default_min_len(),
            node_budget: Self::default_node_budget(),
            suggested_cap: Self::default_suggested_cap(),
            emphasis_markers: Self::default_emphasis_markers(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let cfg = AlignConfig::default();
        assert_eq!(cfg.min_len, 15);
        assert_eq!(cfg.node_budget, 250_000);
        assert_eq!(cfg.suggested_cap, 30);
        assert_eq!(cfg.emphasis_markers, vec!["<i>", "</i>"]);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: AlignConfig = serde_json::from_str(r#"{"min_len": 4}"#).expect("deserialize");
        assert_eq!(cfg.min_len, 4);
        assert_eq!(cfg.node_budget, AlignConfig::default_node_budget());
        assert_eq!(cfg.emphasis_markers, AlignConfig::default_emphasis_markers());
    }
}
