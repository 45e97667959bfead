//! Line values: immutable per-line facts fed to the block parser.
//!
//! Every physical line is snapshotted once, with its blank flag and indent
//! width (in columns, tab stop = 4) precomputed. The two prefix operations
//! produce new values; a `Line` is never mutated in place.

/// One physical line of input, without its trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    text: String,
    indent: usize,
    blank: bool,
}

impl Line {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        debug_assert!(!text.contains('\n'));
        let (indent, _) = leading_indent(&text);
        let blank = text.trim().is_empty();
        Self {
            text,
            indent,
            blank,
        }
    }

    /// Raw content of the line.
    pub fn content(&self) -> &str {
        &self.text
    }

    /// Whether the line contains only whitespace (or nothing).
    pub fn is_blank(&self) -> bool {
        self.blank
    }

    /// Width of the leading whitespace in columns (tabs = 4).
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Split off the first `columns` of leading whitespace.
    ///
    /// Stops early at the first non-whitespace character, so stripping more
    /// columns than the line is indented just removes the indentation. A tab
    /// that straddles the cut leaves its remainder behind as spaces.
    pub fn strip_columns(&self, columns: usize) -> Line {
        let mut col = 0usize;
        let mut idx = 0usize;
        let mut pad = 0usize;
        for (i, b) in self.text.bytes().enumerate() {
            if col >= columns {
                break;
            }
            match b {
                b' ' => col += 1,
                b'\t' => {
                    let next = col + 4 - (col % 4);
                    if next > columns {
                        pad = next - columns;
                    }
                    col = next;
                }
                _ => break,
            }
            idx = i + 1;
        }
        Line::new(format!("{}{}", " ".repeat(pad), &self.text[idx..]))
    }

    /// Replace the first `columns` columns with spaces, whatever they hold.
    ///
    /// Column positions of everything after the prefix are preserved. Used to
    /// blank out a list marker so indentation-sensitive detectors nested in
    /// the item measure from column zero.
    pub fn blank_columns(&self, columns: usize) -> Line {
        let mut col = 0usize;
        let mut idx = 0usize;
        for (i, c) in self.text.char_indices() {
            if col >= columns {
                break;
            }
            col += match c {
                '\t' => 4 - (col % 4),
                _ => 1,
            };
            idx = i + c.len_utf8();
        }
        Line::new(format!("{}{}", " ".repeat(col), &self.text[idx..]))
    }
}

/// Expand tabs to columns (tab stop = 4) and return (cols, byte_offset) of
/// the leading whitespace.
pub(crate) fn leading_indent(line: &str) -> (usize, usize) {
    let mut cols = 0usize;
    let mut bytes = 0usize;
    for b in line.bytes() {
        match b {
            b' ' => {
                cols += 1;
                bytes += 1;
            }
            b'\t' => {
                cols += 4 - (cols % 4);
                bytes += 1;
            }
            _ => break,
        }
    }
    (cols, bytes)
}

/// Column width of a whitespace run starting at the given column.
pub(crate) fn whitespace_columns(text: &str, start_col: usize) -> (usize, usize) {
    let mut col = start_col;
    let mut bytes = 0usize;
    for b in text.bytes() {
        match b {
            b' ' => col += 1,
            b'\t' => col += 4 - (col % 4),
            _ => break,
        }
        bytes += 1;
    }
    (col - start_col, bytes)
}

/// Split normalized input (LF line endings) into `Line` values.
pub fn lines(input: &str) -> Vec<Line> {
    input.lines().map(Line::new).collect()
}
