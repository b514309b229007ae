use crate::parsing::Span;

use super::{Artifact, TextColor, TypesetRequest, Typesetter};

/// A span paired with its typeset artifact, if any.
///
/// `artifact` is `None` for non-equation spans and for equations the
/// typesetter failed on; callers show those as source text.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSpan {
    pub span: Span,
    pub artifact: Option<Artifact>,
}

/// Drives a [`Typesetter`] over a span sequence.
///
/// Constructed explicitly and passed by reference; holds no global state.
pub struct Renderer<T> {
    typesetter: T,
    color: Option<TextColor>,
}

impl<T: Typesetter> Renderer<T> {
    pub fn new(typesetter: T) -> Self {
        Self {
            typesetter,
            color: None,
        }
    }

    /// Colors every equation with `color`.
    #[must_use]
    pub fn with_color(mut self, color: TextColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn typesetter(&self) -> &T {
        &self.typesetter
    }

    /// Typesets every equation span, in order.
    ///
    /// The output has one entry per input span. Text and style spans pass
    /// through untouched.
    pub fn render(&self, spans: &[Span]) -> Vec<RenderedSpan> {
        spans
            .iter()
            .map(|span| RenderedSpan {
                span: span.clone(),
                artifact: self.render_equation(span),
            })
            .collect()
    }

    fn render_equation(&self, span: &Span) -> Option<Artifact> {
        if !span.kind.is_equation() {
            return None;
        }

        let tex = match &self.color {
            Some(color) => format!("{}{}", color.preamble(), span.text),
            None => span.text.clone(),
        };
        let request = TypesetRequest {
            tex: &tex,
            display: span.kind.is_display(),
        };

        match self.typesetter.typeset(&request) {
            Ok(artifact) => Some(artifact),
            Err(e) => {
                log::warn!("Failed to typeset {span}: {e}");
                None
            }
        }
    }
}
