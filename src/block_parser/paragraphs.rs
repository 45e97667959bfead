//! Default paragraph handling.
//!
//! The paragraph is the universal fallback: it claims any non-blank line no
//! other detector wants, so dispatch is total. Which block types may end an
//! in-progress paragraph is decided here, against the interruption-capable
//! detector order.

use crate::block::Block;
use crate::block_parser::state::{Feed, OpenBlock, Start};
use crate::block_parser::{Context, dispatch_interrupting};
use crate::line::Line;

/// A line completes its paragraph on the spot when it ends in a backslash,
/// two or more trailing spaces, or an explicit break tag.
pub(crate) fn has_hard_break(content: &str) -> bool {
    if content.ends_with("  ") {
        return true;
    }
    let trimmed = content.trim_end();
    if trimmed.ends_with('\\') {
        return true;
    }
    let lower = trimmed.to_lowercase();
    lower.ends_with("<br>") || lower.ends_with("<br/>") || lower.ends_with("<br />")
}

/// Open a paragraph on any non-blank line. Never declines; tried last.
pub(crate) fn start(line: &Line) -> Start {
    let text = line.content().trim().to_string();
    if has_hard_break(line.content()) {
        log::debug!("Paragraph completed by hard break on its opening line");
        return Start::Complete(Block::Paragraph { lines: vec![text] });
    }
    Start::Continuing(Box::new(ParagraphRun { lines: vec![text] }))
}

/// An open paragraph.
pub(crate) struct ParagraphRun {
    lines: Vec<String>,
}

impl ParagraphRun {
    fn build(&mut self) -> Block {
        Block::Paragraph {
            lines: std::mem::take(&mut self.lines),
        }
    }
}

impl OpenBlock for ParagraphRun {
    fn feed(&mut self, line: &Line, ctx: &Context) -> Feed {
        if line.is_blank() {
            return Feed::Closed {
                block: self.build(),
                restart: None,
            };
        }

        // A higher-priority block ends the paragraph at the previous line;
        // the match becomes the new block. Indented code is not consulted:
        // an indented line here is an ordinary continuation.
        if let Some(started) = dispatch_interrupting(line, ctx) {
            log::debug!("Paragraph interrupted at {:?}", line.content());
            return Feed::Closed {
                block: self.build(),
                restart: Some(started),
            };
        }

        self.lines.push(line.content().trim().to_string());

        if has_hard_break(line.content()) {
            log::debug!("Paragraph completed by hard break");
            // The next line goes through full dispatch, so an indented line
            // after a hard break may legally open a code block.
            return Feed::Completed(self.build());
        }

        Feed::Consumed
    }

    fn is_paragraph(&self) -> bool {
        true
    }

    fn finish(mut self: Box<Self>) -> Block {
        self.build()
    }
}
