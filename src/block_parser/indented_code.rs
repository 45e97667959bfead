//! Indented code block parsing.
//!
//! A run of lines indented four or more columns is verbatim text. The four
//! columns are not part of the text and are stripped from the stored content.
//!
//! Note: blank lines in the verbatim text need not be indented.

use crate::block::Block;
use crate::block_parser::Context;
use crate::block_parser::state::{Feed, OpenBlock, Start};
use crate::line::Line;

/// Check if a line is indented enough to be part of an indented code block.
pub(crate) fn is_indented_code_line(line: &Line) -> bool {
    !line.is_blank() && line.indent() >= 4
}

/// Indented code detector. Listed only in the full dispatch order: an
/// indented line following an open paragraph is a lazy continuation of the
/// paragraph, never a new code block.
pub(crate) fn try_start(line: &Line, _ctx: &Context) -> Option<Start> {
    if !is_indented_code_line(line) {
        return None;
    }
    log::debug!("Opened indented code block");
    Some(Start::Continuing(Box::new(IndentedCodeRun {
        lines: vec![line.strip_columns(4).content().to_string()],
    })))
}

/// An open indented code block. Blank lines are absorbed; the first
/// insufficiently indented non-blank line is not consumed, so the block
/// ends on the previous line.
pub(crate) struct IndentedCodeRun {
    lines: Vec<String>,
}

impl IndentedCodeRun {
    fn build(&mut self) -> Block {
        let mut lines = std::mem::take(&mut self.lines);
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        Block::CodeBlock {
            fence: None,
            info: None,
            lines,
        }
    }
}

impl OpenBlock for IndentedCodeRun {
    fn feed(&mut self, line: &Line, _ctx: &Context) -> Feed {
        if line.is_blank() || line.indent() >= 4 {
            self.lines.push(line.strip_columns(4).content().to_string());
            return Feed::Consumed;
        }
        Feed::Closed {
            block: self.build(),
            restart: None,
        }
    }

    fn finish(mut self: Box<Self>) -> Block {
        self.build()
    }
}
