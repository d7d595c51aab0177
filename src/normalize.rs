//! Context text normalization.
//!
//! Mirrors the whitespace conventions of the annotation data: newline runs
//! collapse to a single newline, inline emphasis markers become a single
//! space, and space runs collapse to one space. The passes run in exactly
//! that order, so a marker replacement can introduce spaces that the final
//! pass collapses, but never new newlines. Applied identically and
//! independently to each side before matching.

/// Normalize one side's context text.
///
/// Deterministic and pure; the output is the coordinate space every match
/// index and span refers to.
pub fn normalize_context(text: &str, emphasis_markers: &[String]) -> String {
    let mut out = collapse_runs(text, '\n');
    for marker in emphasis_markers {
        out = out.replace(marker.as_str(), " ");
    }
    collapse_runs(&out, ' ')
}

/// Collapse runs of `target` into a single occurrence, leaving every other
/// char untouched.
fn collapse_runs(text: &str, target: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for ch in text.chars() {
        if ch == target {
            if !in_run {
                out.push(ch);
            }
            in_run = true;
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}
