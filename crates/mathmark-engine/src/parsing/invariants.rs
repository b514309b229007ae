use super::types::{Span, SpanKind};

/// Rebuilds the source text from a span sequence by re-inserting each
/// span's markers around its text.
///
/// For any input, `reconstruct(&segment(input)) == input`.
pub fn reconstruct(spans: &[Span]) -> String {
    let mut out = String::new();
    for span in spans {
        let (open, close) = span.kind.delimiters();
        out.push_str(open);
        out.push_str(&span.text);
        out.push_str(close);
    }
    out
}

/// Validates segmenter output invariants.
///
/// Asserts that:
/// - Re-inserting markers reproduces `input` exactly
/// - No span has empty text
/// - No two `Text` spans are adjacent
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(input: &str, spans: &[Span]) {
    let rebuilt = reconstruct(spans);
    assert!(
        rebuilt == input,
        "segmentation is lossy:\n  input:   {input:?}\n  rebuilt: {rebuilt:?}"
    );

    for (i, span) in spans.iter().enumerate() {
        assert!(!span.text.is_empty(), "span {i} is empty: {span}");
    }

    for pair in spans.windows(2) {
        assert!(
            !(pair[0].kind == SpanKind::Text && pair[1].kind == SpanKind::Text),
            "adjacent text spans: {} then {}",
            pair[0],
            pair[1]
        );
    }
}
