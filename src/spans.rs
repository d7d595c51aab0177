//! Highlight span construction.
//!
//! Projects match blocks onto one side as a per-char weight array, then
//! collapses the array into contiguous display runs. The per-position max
//! makes the result independent of projection order, which matters because
//! the block list is sorted by length, not index, and blocks may overlap.

use crate::types::{DisplaySpan, SpanSet};

/// Build display spans for one side of an aligned pair.
///
/// `projections` are `(start, len)` char intervals taken from one side of
/// each match block; intervals reaching past the end of `text` are clamped.
/// An empty projection list short-circuits to an empty span set with `(0, 0)`
/// weight bounds. Fragments are escaped at emission, after grouping, so
/// escaping never perturbs char offsets.
pub fn build_spans(text: &str, projections: &[(usize, usize)]) -> SpanSet {
    if projections.is_empty() {
        return SpanSet {
            spans: Vec::new(),
            min_weight: 0,
            max_weight: 0,
        };
    }

    let chars: Vec<char> = text.chars().collect();
    let mut weights = vec![0usize; chars.len()];
    for &(start, len) in projections {
        let start = start.min(weights.len());
        let end = start.saturating_add(len).min(weights.len());
        for weight in &mut weights[start..end] {
            *weight = (*weight).max(len);
        }
    }

    let mut spans = Vec::new();
    let mut run_start = 0;
    for i in 1..=chars.len() {
        if i == chars.len() || weights[i] != weights[run_start] {
            let fragment: String = chars[run_start..i].iter().collect();
            spans.push(DisplaySpan {
                fragment: escape_fragment(&fragment),
                weight: weights[run_start],
            });
            run_start = i;
        }
    }

    SpanSet {
        spans,
        min_weight: weights.iter().copied().min().unwrap_or(0),
        max_weight: weights.iter().copied().max().unwrap_or(0),
    }
}

/// Escape a text fragment for embedding in markup.
///
/// Covers `&`, `<`, `>` and both quote styles so fragments can sit inside
/// either attribute quoting convention.
pub fn escape_fragment(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    for ch in fragment.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}
