use mathmark_engine::{RenderedSpan, Span, SpanKind};
use serde::Serialize;

/// One line per span: `kind<TAB>"escaped text"`.
pub fn format_text(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|span| format!("{}\t{:?}\n", span.kind, span.text))
        .collect()
}

pub fn format_json(spans: &[Span]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(spans)
}

#[derive(Serialize)]
struct RenderedJson<'a> {
    kind: SpanKind,
    text: &'a str,
    media_type: Option<&'a str>,
    /// Artifact bytes as UTF-8 (lossy); SVG and other text formats survive intact.
    content: Option<String>,
}

/// Render output: every span, with `media_type`/`content` set for equations
/// the typesetter handled and `null` otherwise.
pub fn format_rendered(rendered: &[RenderedSpan]) -> serde_json::Result<String> {
    let entries: Vec<RenderedJson<'_>> = rendered
        .iter()
        .map(|r| RenderedJson {
            kind: r.span.kind,
            text: &r.span.text,
            media_type: r.artifact.as_ref().map(|a| a.media_type.as_str()),
            content: r
                .artifact
                .as_ref()
                .map(|a| String::from_utf8_lossy(&a.bytes).into_owned()),
        })
        .collect();
    serde_json::to_string_pretty(&entries)
}
