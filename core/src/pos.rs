use core::fmt;

/// A 1-based line/column position in source text, as reported by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub line: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// Character offset of this position within `source`.
    ///
    /// Columns count characters, not bytes. The column one past the end of a
    /// line is valid (it addresses the line terminator or end of input).
    /// Returns `None` for positions outside the source.
    pub fn char_offset(&self, source: &str) -> Option<usize> {
        if self.line == 0 || self.col == 0 {
            return None;
        }

        let mut offset = 0;
        for (idx, line) in source.split('\n').enumerate() {
            let width = line.chars().count();
            if idx + 1 == self.line {
                return (self.col <= width + 1).then_some(offset + self.col - 1);
            }
            offset += width + 1;
        }
        None
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.line, self.col)
    }
}
