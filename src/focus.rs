//! Focus-region marker resolution.
//!
//! Annotation records carry paired `tag-spanId-lineId` markers denoting the
//! boundaries of a highlighted sub-range. Resolution orders the pair into
//! `(min, max)` by the numeric ids; it never interprets text offsets, so it
//! is independent of any coordinate space.

use crate::types::FocusInterval;

/// Numeric portion of a focus marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct MarkerKey {
    span: u64,
    line: u64,
}

/// Parse a `tag-spanId-lineId` marker. The tag is free-form (and may be
/// empty), the other two fields must be numeric, and there must be exactly
/// three fields.
fn parse_marker(token: &str) -> Option<MarkerKey> {
    let mut fields = token.split('-');
    let _tag = fields.next()?;
    let span = fields.next()?.parse().ok()?;
    let line = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(MarkerKey { span, line })
}

/// Order a focus/anchor marker pair into `(min, max)`.
///
/// Returns `None` when either marker is missing or fails the three-field
/// parse. Records predating the marker format carry arbitrary text here, so
/// `None` is the normal "no focus region available" signal, not an error.
///
/// A full tie keeps argument order: the anchor becomes `min`, the focus
/// `max`.
pub fn resolve_focus(focus: Option<&str>, anchor: Option<&str>) -> Option<FocusInterval> {
    let focus = focus?;
    let anchor = anchor?;
    let focus_key = parse_marker(focus)?;
    let anchor_key = parse_marker(anchor)?;

    let (min, max) = if focus_key < anchor_key {
        (focus, anchor)
    } else {
        (anchor, focus)
    };
    Some(FocusInterval {
        min: min.to_string(),
        max: max.to_string(),
    })
}
