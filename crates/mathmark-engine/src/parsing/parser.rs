use super::{
    cursor::Cursor,
    rules::{DelimiterRule, RULES},
    types::Span,
};

/// Segments markup into a sequence of [`Span`]s.
///
/// # Arguments
/// - `input`: mixed text, style markers (`#bold{..}`, `#italic{..}`,
///   `#underline{..}`) and equations (`$..$`, `$$..$$`, `\[..\]`,
///   `\begin{equation}..`, `\begin{equation*}..`)
///
/// # Precedence
/// At each position the first rule in [`RULES`] whose open marker is present
/// owns that position. If the marker is escaped, has no active partner, or
/// would enclose nothing, the whole marker is kept as text and scanning
/// resumes right after it. Shorter markers are never probed inside it, so
/// the second `$` of an unmatched `$$` cannot open an inline equation.
///
/// # Returns
/// Spans covering the entire input, in source order. Text between delimited
/// spans is emitted as one `SpanKind::Text` span. Empty input gives an empty
/// vector. There is no failure case: malformed markup degrades to text.
pub fn segment(input: &str) -> Vec<Span> {
    let mut cur = Cursor::new(input);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush pending text as a Text span
    fn flush_text(out: &mut Vec<Span>, s: &str, start: usize, end: usize) {
        if end > start {
            out.push(Span::text(&s[start..end]));
        }
    }

    while !cur.eof() {
        let Some(rule) = rule_at(&cur) else {
            cur.bump_char();
            continue;
        };

        let start = cur.pos();
        if let Some(span) = try_parse_delimited(&mut cur, rule) {
            flush_text(&mut out, input, text_start, start);
            text_start = cur.pos();
            out.push(span);
        } else {
            cur.bump_n(rule.open.len());
        }
    }

    flush_text(&mut out, input, text_start, input.len());
    log::debug!("segmented {} bytes into {} spans", input.len(), out.len());
    out
}

/// Returns the highest-priority rule whose open marker starts at the cursor.
fn rule_at(cur: &Cursor<'_>) -> Option<&'static DelimiterRule> {
    RULES.iter().find(|rule| cur.starts_with(rule.open))
}

/// Attempts to parse a delimited span for `rule` at the current position.
///
/// Returns `None` if the open marker is escaped, if no active close marker
/// follows, or if the content between them is empty. The cursor only moves
/// on success, to just past the close marker.
fn try_parse_delimited(cur: &mut Cursor<'_>, rule: &DelimiterRule) -> Option<Span> {
    if !cur.is_active() {
        return None;
    }

    let inner_start = cur.pos() + rule.open.len();
    let inner_end = cur.find_active(rule.close, inner_start)?;
    if inner_end == inner_start {
        return None;
    }

    let span = Span::new(&cur.s[inner_start..inner_end], rule.kind);
    cur.bump_n(inner_end + rule.close.len() - cur.pos());
    Some(span)
}
