//! # Delimiter Kinds
//!
//! Types that own the markers of each span family, following the same
//! "knowledge ownership" rule as the rest of the parser: the parser and the
//! rule table refer to these constants and never hardcode `$` or `#bold{`.
//!
//! ## Types
//!
//! - **`Style`**: `#bold{`, `#italic{`, `#underline{`, all closed by `}`
//! - **`Equation`**: `$$`, `$`, `\[ \]`, `\begin{equation*}`, `\begin{equation}`
//!
//! Every marker is ASCII, which the cursor relies on when slicing.

pub mod equation;
pub mod style;

pub use equation::Equation;
pub use style::Style;

/// Escape character that neutralizes a following marker when unpaired.
pub const ESCAPE: u8 = b'\\';
