use std::fmt;

use serde::{Deserialize, Serialize};

use super::rules;

/// The classification of a [`Span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    /// Plain text outside any active delimiter pair.
    Text,
    /// `#bold{...}`
    BoldText,
    /// `#italic{...}`
    ItalicText,
    /// `#underline{...}`
    UnderlineText,
    /// `$...$`
    InlineEquation,
    /// `$$...$$`
    DisplayEquation,
    /// `\[...\]`
    BlockEquation,
    /// `\begin{equation}...\end{equation}`
    NamedEquation,
    /// `\begin{equation*}...\end{equation*}`
    NamedUnnumberedEquation,
}

impl SpanKind {
    /// Returns true for the five equation kinds.
    #[must_use]
    pub fn is_equation(self) -> bool {
        matches!(
            self,
            Self::InlineEquation
                | Self::DisplayEquation
                | Self::BlockEquation
                | Self::NamedEquation
                | Self::NamedUnnumberedEquation
        )
    }

    /// Returns true for equations typeset on their own line (every equation
    /// kind except [`SpanKind::InlineEquation`]).
    #[must_use]
    pub fn is_display(self) -> bool {
        self.is_equation() && self != Self::InlineEquation
    }

    /// Returns true for bold, italic and underline text.
    #[must_use]
    pub fn is_style(self) -> bool {
        matches!(self, Self::BoldText | Self::ItalicText | Self::UnderlineText)
    }

    /// The `(open, close)` markers that surround this kind in the source.
    ///
    /// `Text` has no markers and returns a pair of empty strings.
    #[must_use]
    pub fn delimiters(self) -> (&'static str, &'static str) {
        rules::RULES
            .iter()
            .find(|rule| rule.kind == self)
            .map_or(("", ""), |rule| (rule.open, rule.close))
    }

    /// Snake-case name, matching the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::BoldText => "bold_text",
            Self::ItalicText => "italic_text",
            Self::UnderlineText => "underline_text",
            Self::InlineEquation => "inline_equation",
            Self::DisplayEquation => "display_equation",
            Self::BlockEquation => "block_equation",
            Self::NamedEquation => "named_equation",
            Self::NamedUnnumberedEquation => "named_unnumbered_equation",
        }
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified, contiguous region of segmented input.
///
/// `text` is the exact content found between the delimiters (or the exact
/// plain text for [`SpanKind::Text`]); nothing is trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub kind: SpanKind,
}

impl Span {
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Shorthand for a [`SpanKind::Text`] span.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Text)
    }

    /// Rebuilds the source this span was captured from, markers included.
    #[must_use]
    pub fn to_source(&self) -> String {
        let (open, close) = self.kind.delimiters();
        let mut out = String::with_capacity(open.len() + self.text.len() + close.len());
        out.push_str(open);
        out.push_str(&self.text);
        out.push_str(close);
        out
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}
