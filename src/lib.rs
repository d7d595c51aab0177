//! paralign: paraphrase-pair alignment engine.
//!
//! Given two related passages, this crate finds every maximal shared
//! substring above a length threshold and renders a highlight model locating
//! them, plus orders paired focus-region markers carried alongside the
//! annotation data.
//!
//! ## What we do
//!
//! - Context normalization (newline/space collapsing, emphasis-marker
//!   stripping)
//! - Exhaustive shared-substring search, bounded by a work budget
//! - Per-side highlight spans with pre-escaped text fragments
//! - Focus/anchor marker pair resolution
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no shared mutable state. Same texts and config
//! give the same render model on any machine, and independent requests need
//! no coordination.
//!
//! ## Invariants worth knowing
//!
//! - Match indices are char positions into the *normalized* text
//! - Concatenating unescaped span fragments reproduces the normalized text
//! - Budget exhaustion is a `Truncated` status carrying partial results,
//!   never an error
//!
//! Batch loading, annotation persistence, routing, and rendering belong to
//! the surrounding application; this crate only turns two strings and two
//! optional marker pairs into a [`RenderModel`].

mod aligner;
mod config;
mod error;
mod finder;
mod focus;
mod normalize;
mod spans;
mod types;

pub use crate::aligner::{AlignRequest, Aligner};
pub use crate::config::AlignConfig;
pub use crate::error::AlignError;
pub use crate::finder::find_matches;
pub use crate::focus::resolve_focus;
pub use crate::normalize::normalize_context;
pub use crate::spans::build_spans;
pub use crate::types::{
    DisplaySpan, FocusInterval, MatchBlock, MatchOutcome, RenderModel, SearchStatus, SpanSet,
};
