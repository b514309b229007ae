/// Inline text style markers.
///
/// Style content is captured up to the nearest active `}`; braces are not
/// balanced, so `#bold{a{b}c}` captures `a{b`.
pub struct Style;

impl Style {
    pub const BOLD_OPEN: &'static str = "#bold{";
    pub const ITALIC_OPEN: &'static str = "#italic{";
    pub const UNDERLINE_OPEN: &'static str = "#underline{";
    pub const CLOSE: &'static str = "}";
}
