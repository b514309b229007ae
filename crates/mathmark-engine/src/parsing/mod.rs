//! # Segmentation
//!
//! Cursor-based, single-pass segmentation of mixed style and equation markup.
//!
//! ## Architecture
//!
//! The segmenter walks the input once with a [`cursor::Cursor`]. At every
//! position it probes a fixed, ordered table of delimiter rules
//! ([`rules::RULES`]); the first rule whose open marker sits at the cursor
//! decides what happens next:
//! - active open with an active close further on: emit a delimited span
//! - escaped or unmatched open: the whole marker becomes plain text
//!
//! Anything else is accumulated as pending text and flushed as a single
//! [`SpanKind::Text`] span when the next delimited span is emitted, or at
//! the end of input.
//!
//! ## Modules
//!
//! - **`types`**: `Span` and `SpanKind`
//! - **`kinds`**: delimiter constants owned by each style/equation family
//! - **`rules`**: the priority-ordered delimiter table
//! - **`cursor`**: byte cursor with backslash-parity escape checks
//! - **`parser`**: `segment()` main entry point
//! - **`invariants`**: `reconstruct()` and output invariant checks
//!
//! ## Prefix Precedence
//!
//! `$$` is probed before `$` and `\begin{equation*}` before
//! `\begin{equation}`, so `$$x$$` is one display equation and never two
//! empty inline ones.

pub mod cursor;
pub mod invariants;
pub mod kinds;
pub mod parser;
pub mod rules;
pub mod types;

#[cfg(test)]
mod tests;

pub use invariants::reconstruct;
pub use parser::segment;
pub use types::{Span, SpanKind};
