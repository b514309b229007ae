//! # Typesetting Seam
//!
//! The segmenter never typesets. Equation spans are handed to an external
//! [`Typesetter`] through a [`Renderer`] that the caller constructs and
//! owns; there is no process-wide instance.
//!
//! ## Modules
//!
//! - **`color`**: `TextColor` and the `\definecolor` preamble prepended to equations
//! - **`renderer`**: `Renderer` and `RenderedSpan`
//!
//! ## Failure Policy
//!
//! A typesetter error never fails rendering as a whole: the span is kept
//! with no artifact and the error is logged.

pub mod color;
pub mod renderer;

pub use color::{ColorParseError, TextColor};
pub use renderer::{RenderedSpan, Renderer};

/// What a typesetter is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypesetRequest<'a> {
    /// TeX source, including any color preamble.
    pub tex: &'a str,
    /// True for display-mode equations (everything except `$..$`).
    pub display: bool,
}

/// A typeset equation, opaque to this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// e.g. `image/svg+xml`
    pub media_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum TypesetError {
    #[error("Typesetter unavailable: {0}")]
    Unavailable(String),
    #[error("Typesetter rejected equation: {0}")]
    Rejected(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Converts equation TeX into a displayable artifact.
pub trait Typesetter {
    fn typeset(&self, request: &TypesetRequest<'_>) -> Result<Artifact, TypesetError>;
}

impl<T: Typesetter + ?Sized> Typesetter for &T {
    fn typeset(&self, request: &TypesetRequest<'_>) -> Result<Artifact, TypesetError> {
        (**self).typeset(request)
    }
}

impl<T: Typesetter + ?Sized> Typesetter for Box<T> {
    fn typeset(&self, request: &TypesetRequest<'_>) -> Result<Artifact, TypesetError> {
        (**self).typeset(request)
    }
}
