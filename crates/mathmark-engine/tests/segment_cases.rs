use mathmark_engine::{Span, SpanKind, reconstruct, segment};
use pretty_assertions::assert_eq;
use rstest::rstest;

use SpanKind::*;

fn spans(expected: &[(&str, SpanKind)]) -> Vec<Span> {
    expected
        .iter()
        .map(|(text, kind)| Span::new(*text, *kind))
        .collect()
}

#[test]
fn empty_input_has_no_spans() {
    assert!(segment("").is_empty());
}

#[rstest]
#[case::text_only("Hello, World!", &[("Hello, World!", Text)])]
#[case::bold_only("#bold{Hello, World!}", &[("Hello, World!", BoldText)])]
#[case::italic_only("#italic{Hello, World!}", &[("Hello, World!", ItalicText)])]
#[case::underline_only("#underline{Hello, World!}", &[("Hello, World!", UnderlineText)])]
#[case::text_and_bold(
    "Before #bold{Hello, World!} After",
    &[("Before ", Text), ("Hello, World!", BoldText), (" After", Text)]
)]
#[case::text_and_italic(
    "Before #italic{Hello, World!} After",
    &[("Before ", Text), ("Hello, World!", ItalicText), (" After", Text)]
)]
#[case::text_and_underline(
    "Before #underline{Hello, World!} After",
    &[("Before ", Text), ("Hello, World!", UnderlineText), (" After", Text)]
)]
#[case::all_styles(
    "Bold #bold{Hello, World!} Italic #italic{Hello, World!} Underline #underline{Hello, World!}",
    &[
        ("Bold ", Text),
        ("Hello, World!", BoldText),
        (" Italic ", Text),
        ("Hello, World!", ItalicText),
        (" Underline ", Text),
        ("Hello, World!", UnderlineText),
    ]
)]
fn styles(#[case] input: &str, #[case] expected: &[(&str, SpanKind)]) {
    assert_eq!(segment(input), spans(expected));
}

#[rstest]
#[case::dollar_only("$\\TeX$", &[("\\TeX", InlineEquation)])]
#[case::dollar_normal(
    "Hello, $\\TeX$!",
    &[("Hello, ", Text), ("\\TeX", InlineEquation), ("!", Text)]
)]
#[case::double_dollar_only("$$\\TeX$$", &[("\\TeX", DisplayEquation)])]
#[case::double_dollar_normal(
    "Hello, $$\\TeX$$!",
    &[("Hello, ", Text), ("\\TeX", DisplayEquation), ("!", Text)]
)]
#[case::brackets_only("\\[\\TeX\\]", &[("\\TeX", BlockEquation)])]
#[case::brackets_normal(
    "Hello, \\[\\TeX\\]!",
    &[("Hello, ", Text), ("\\TeX", BlockEquation), ("!", Text)]
)]
#[case::begin_end_only("\\begin{equation}\\TeX\\end{equation}", &[("\\TeX", NamedEquation)])]
#[case::begin_end_normal(
    "Hello, \\begin{equation}\\TeX\\end{equation}!",
    &[("Hello, ", Text), ("\\TeX", NamedEquation), ("!", Text)]
)]
#[case::begin_end_star_only(
    "\\begin{equation*}\\TeX\\end{equation*}",
    &[("\\TeX", NamedUnnumberedEquation)]
)]
#[case::begin_end_star_normal(
    "Hello, \\begin{equation*}\\TeX\\end{equation*}!",
    &[("Hello, ", Text), ("\\TeX", NamedUnnumberedEquation), ("!", Text)]
)]
fn equations(#[case] input: &str, #[case] expected: &[(&str, SpanKind)]) {
    assert_eq!(segment(input), spans(expected));
}

#[rstest]
#[case::dollar_left("Hello, \\$\\TeX$!")]
#[case::dollar_right("Hello, $\\TeX\\$!")]
#[case::double_dollar_left("Hello, \\$$\\TeX$$!")]
#[case::double_dollar_right("Hello, $$\\TeX\\$$!")]
#[case::brackets_left("Hello, \\\\[\\TeX\\]!")]
#[case::brackets_right("Hello, \\[\\TeX\\\\]!")]
#[case::begin_end_left("Hello, \\\\begin{equation}\\TeX\\end{equation}!")]
#[case::begin_end_right("Hello, \\begin{equation}\\TeX\\\\end{equation}!")]
#[case::begin_end_star_left("Hello, \\\\begin{equation*}\\TeX\\end{equation*}!")]
#[case::begin_end_star_right("Hello, \\begin{equation*}\\TeX\\\\end{equation*}!")]
fn escaped_marker_makes_whole_input_text(#[case] input: &str) {
    assert_eq!(segment(input), vec![Span::text(input)]);
}

#[rstest]
#[case::leading_line_break("\n\\TeX")]
#[case::trailing_line_break("\\TeX\n")]
#[case::whitespace(" \n\\TeX\n ")]
fn padding_is_preserved(#[case] equation: &str) {
    let cases = [
        ("$$", "$$", DisplayEquation),
        ("\\[", "\\]", BlockEquation),
        ("\\begin{equation}", "\\end{equation}", NamedEquation),
        ("\\begin{equation*}", "\\end{equation*}", NamedUnnumberedEquation),
    ];
    for (open, close, kind) in cases {
        let input = format!("Hello, {open}{equation}{close}!");
        assert_eq!(
            segment(&input),
            spans(&[("Hello, ", Text), (equation, kind), ("!", Text)]),
            "{input:?}"
        );
    }
}

#[test]
fn display_content_is_verbatim() {
    assert_eq!(
        segment("$$\nf(x)=5x+2$$"),
        vec![Span::new("\nf(x)=5x+2", DisplayEquation)]
    );
}

#[test]
fn multiple_begin_end_blocks() {
    let input = "\\begin{equation}\n  E = mc^2\n\\end{equation}\n\n\\begin{equation}\n  E = mc^2\n\\end{equation}";
    assert_eq!(
        segment(input),
        spans(&[
            ("\n  E = mc^2\n", NamedEquation),
            ("\n\n", Text),
            ("\n  E = mc^2\n", NamedEquation),
        ])
    );
}

#[test]
fn starred_environment_leaves_no_stray_star() {
    let result = segment("a \\begin{equation*}x\\end{equation*} b");
    assert_eq!(
        result,
        spans(&[("a ", Text), ("x", NamedUnnumberedEquation), (" b", Text)])
    );
    assert!(result.iter().all(|s| !s.text.contains('*')));
}

#[test]
fn styles_and_equations_interleave() {
    let input = "$a$#bold{b}\\[c\\]#underline{d}$$e$$#italic{f}";
    let result = segment(input);
    assert_eq!(
        result,
        spans(&[
            ("a", InlineEquation),
            ("b", BoldText),
            ("c", BlockEquation),
            ("d", UnderlineText),
            ("e", DisplayEquation),
            ("f", ItalicText),
        ])
    );
    assert_eq!(reconstruct(&result), input);
}
