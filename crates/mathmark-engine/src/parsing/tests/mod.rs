//! Fixture tests for the segmenter.
//!
//! Uses snapshot testing with Debug output for readability.
//! Fixtures (.tex) and snapshots (.snap) are co-located in `fixtures/`.

use crate::parsing::{Span, SpanKind, invariants, reconstruct, segment};

// Fixture-based snapshot tests

#[test]
fn fixture_styles() {
    assert_fixture("styles");
}

#[test]
fn fixture_environments() {
    assert_fixture("environments");
}

#[test]
fn fixture_escapes() {
    assert_fixture("escapes");
}

#[test]
fn fixture_unmatched() {
    assert_fixture("unmatched");
}

#[test]
fn fixture_mixed() {
    assert_fixture("mixed");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let source = std::fs::read_to_string(format!("{fixtures_dir}/{name}.tex")).unwrap();

    let spans = segment(&source);
    invariants::check(&source, &spans);

    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_debug_snapshot!(name, spans);
    });
}

// Invariant tests

#[test]
fn every_fixture_round_trips() {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    for entry in std::fs::read_dir(&fixtures_dir).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().is_some_and(|ext| ext == "tex") {
            let source = std::fs::read_to_string(&path).unwrap();
            assert_eq!(reconstruct(&segment(&source)), source, "{}", path.display());
        }
    }
}

#[test]
fn environments_are_display_equations() {
    let source = "\\begin{equation}a\\end{equation}\\begin{equation*}b\\end{equation*}";
    let spans = segment(source);
    assert_eq!(spans.len(), 2);
    assert!(spans.iter().all(|s| s.kind.is_display()));
}

#[test]
fn only_inline_dollar_is_not_display() {
    let spans = segment("$a$ $$b$$ \\[c\\]");
    let display: Vec<bool> = spans
        .iter()
        .filter(|s| s.kind.is_equation())
        .map(|s| s.kind.is_display())
        .collect();
    assert_eq!(display, vec![false, true, true]);
}

#[test]
fn starred_close_does_not_end_plain_environment() {
    // `\end{equation*}` does not contain `\end{equation}`, so the plain
    // environment runs on to its own close.
    let source = "\\begin{equation}a\\end{equation*}b\\end{equation}";
    assert_eq!(
        segment(source),
        vec![Span::new("a\\end{equation*}b", SpanKind::NamedEquation)]
    );
}
