//! Front matter parsing.
//!
//! An optional `---`-delimited verbatim header at the very start of the
//! document. The content between the fences is kept as-is for an external
//! consumer; this parser never interprets it.

use crate::block::Block;
use crate::line::Line;

/// A front matter fence: 0-3 columns of indent, `---`, trailing whitespace
/// only. The same test opens and closes the region.
pub(crate) fn is_fence(line: &Line) -> bool {
    line.indent() <= 3 && line.content().trim() == "---"
}

/// An open front matter region. Lines are absorbed verbatim until the fence
/// repeats; left unterminated, the region runs to end of input.
pub(crate) struct FrontMatterRun {
    lines: Vec<String>,
}

impl FrontMatterRun {
    pub(crate) fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Absorb a line, or complete the region on its closing fence.
    pub(crate) fn feed(&mut self, line: &Line) -> Option<Block> {
        if is_fence(line) {
            log::debug!("Front matter closed after {} lines", self.lines.len());
            return Some(Block::FrontMatter {
                lines: std::mem::take(&mut self.lines),
            });
        }
        self.lines.push(line.content().to_string());
        None
    }

    pub(crate) fn finish(self) -> Block {
        log::debug!("Front matter ran to end of input");
        Block::FrontMatter { lines: self.lines }
    }
}
