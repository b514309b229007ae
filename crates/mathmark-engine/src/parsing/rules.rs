use super::{
    kinds::{Equation, Style},
    types::SpanKind,
};

/// One row of the delimiter table: an open/close marker pair and the kind
/// of span it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterRule {
    pub open: &'static str,
    pub close: &'static str,
    pub kind: SpanKind,
}

/// Delimiter rules in probe order.
///
/// Markers sharing a prefix must list the longer one first: `$$` before
/// `$`, `\begin{equation*}` before `\begin{equation}`.
pub const RULES: [DelimiterRule; 8] = [
    DelimiterRule {
        open: Style::BOLD_OPEN,
        close: Style::CLOSE,
        kind: SpanKind::BoldText,
    },
    DelimiterRule {
        open: Style::ITALIC_OPEN,
        close: Style::CLOSE,
        kind: SpanKind::ItalicText,
    },
    DelimiterRule {
        open: Style::UNDERLINE_OPEN,
        close: Style::CLOSE,
        kind: SpanKind::UnderlineText,
    },
    DelimiterRule {
        open: Equation::DISPLAY,
        close: Equation::DISPLAY,
        kind: SpanKind::DisplayEquation,
    },
    DelimiterRule {
        open: Equation::INLINE,
        close: Equation::INLINE,
        kind: SpanKind::InlineEquation,
    },
    DelimiterRule {
        open: Equation::BLOCK_OPEN,
        close: Equation::BLOCK_CLOSE,
        kind: SpanKind::BlockEquation,
    },
    DelimiterRule {
        open: Equation::NAMED_UNNUMBERED_OPEN,
        close: Equation::NAMED_UNNUMBERED_CLOSE,
        kind: SpanKind::NamedUnnumberedEquation,
    },
    DelimiterRule {
        open: Equation::NAMED_OPEN,
        close: Equation::NAMED_CLOSE,
        kind: SpanKind::NamedEquation,
    },
];
