/// Equation markers, grouped by the syntax they come from.
pub struct Equation;

impl Equation {
    /// TeX display math, `$$...$$`.
    pub const DISPLAY: &'static str = "$$";
    /// TeX inline math, `$...$`.
    pub const INLINE: &'static str = "$";
    /// LaTeX display math, `\[...\]`.
    pub const BLOCK_OPEN: &'static str = "\\[";
    pub const BLOCK_CLOSE: &'static str = "\\]";
    /// `equation*` environment (no equation number).
    pub const NAMED_UNNUMBERED_OPEN: &'static str = "\\begin{equation*}";
    pub const NAMED_UNNUMBERED_CLOSE: &'static str = "\\end{equation*}";
    /// `equation` environment.
    pub const NAMED_OPEN: &'static str = "\\begin{equation}";
    pub const NAMED_CLOSE: &'static str = "\\end{equation}";
}
