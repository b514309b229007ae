use super::kinds::ESCAPE;

/// A cursor for forward segmentation with escape-aware marker lookups.
///
/// Positions are byte offsets into `s`. Markers are ASCII, so a marker match
/// can only start and end on char boundaries.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being segmented.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Checks if the remaining input starts with the given marker.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.s.as_bytes()[self.i..].starts_with(pat.as_bytes())
    }

    /// Advances past one whole character, returning it.
    pub fn bump_char(&mut self) -> Option<char> {
        let c = self.s[self.i..].chars().next()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Returns true if a marker starting at the current position is active.
    pub fn is_active(&self) -> bool {
        is_active_at(self.s, self.i)
    }

    /// Finds the nearest active occurrence of `pat` at or after `from`.
    pub fn find_active(&self, pat: &str, from: usize) -> Option<usize> {
        let mut at = from;
        while let Some(rel) = self.s.get(at..)?.find(pat) {
            let p = at + rel;
            if is_active_at(self.s, p) {
                return Some(p);
            }
            at = p + 1;
        }
        None
    }
}

/// A marker at `p` is active when the run of backslashes directly before it
/// has even length: each pair escapes itself, a leftover one escapes the marker.
pub fn is_active_at(s: &str, p: usize) -> bool {
    let run = s.as_bytes()[..p]
        .iter()
        .rev()
        .take_while(|&&b| b == ESCAPE)
        .count();
    run % 2 == 0
}
