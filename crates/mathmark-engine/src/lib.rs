pub mod parsing;
pub mod typeset;

// Re-export key types for easier usage
pub use parsing::{Span, SpanKind, reconstruct, segment};
pub use typeset::{
    Artifact, ColorParseError, RenderedSpan, Renderer, TextColor, TypesetError, TypesetRequest,
    Typesetter,
};
