//! Line/column lookup for byte offsets.
//!
//! The CST only knows byte offsets; source maps and syntax errors are
//! reported as line/column pairs, so every parsed file carries a
//! [`LineIndex`] built once from its text.

use text_size::TextSize;

/// A zero-indexed line/column pair. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// Maps byte offsets to line/column positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset at which each line starts. Always begins with 0.
    line_starts: Vec<TextSize>,
    text: String,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        for (offset, ch) in text.char_indices() {
            if ch == '\n' {
                line_starts.push(TextSize::new((offset + 1) as u32));
            }
        }
        Self {
            line_starts,
            text: text.to_string(),
        }
    }

    /// Convert a byte offset into a zero-indexed line/column.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let start = u32::from(self.line_starts[line]) as usize;
        let end = (u32::from(offset) as usize).min(self.text.len());
        let col = self
            .text
            .get(start..end)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(0);
        LineCol {
            line: line as u32,
            col: col as u32,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
