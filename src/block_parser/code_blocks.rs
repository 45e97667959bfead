//! Fenced code block parsing.

use crate::block::Block;
use crate::block_parser::Context;
use crate::block_parser::state::{Feed, OpenBlock, Start};
use crate::line::Line;

/// Count the run of `fence_char` at the start of already-dedented content.
pub(crate) fn get_fence_count(trimmed: &str, fence_char: char) -> Option<usize> {
    let count = trimmed.chars().take_while(|&c| c == fence_char).count();
    if count > 0 { Some(count) } else { None }
}

/// Fenced code detector: 0-3 columns of indent, then a run of at least
/// three backticks or tildes.
pub(crate) fn try_start(line: &Line, _ctx: &Context) -> Option<Start> {
    if line.indent() > 3 {
        return None;
    }
    let trimmed = line.content().trim_start();

    let (fence_char, fence_count) = if let Some(count) = get_fence_count(trimmed, '`') {
        ('`', count)
    } else if let Some(count) = get_fence_count(trimmed, '~') {
        ('~', count)
    } else {
        return None;
    };

    if fence_count < 3 {
        return None;
    }

    let rest = &trimmed[fence_count..];

    // A backtick info string may not contain further backticks; it would be
    // ambiguous with a code span.
    if fence_char == '`' && rest.contains('`') {
        return None;
    }

    let info = rest.trim();
    let info = if info.is_empty() {
        None
    } else {
        Some(info.to_string())
    };

    log::debug!(
        "Opened {} fence of length {}, info {:?}",
        fence_char,
        fence_count,
        info
    );

    Some(Start::Continuing(Box::new(FencedCodeRun {
        fence_char,
        fence_count,
        info,
        lines: Vec::new(),
    })))
}

/// An open fenced code block; absorbs every line verbatim until a valid
/// closing fence, or end of input.
pub(crate) struct FencedCodeRun {
    fence_char: char,
    fence_count: usize,
    info: Option<String>,
    lines: Vec<String>,
}

impl FencedCodeRun {
    fn is_closing_fence(&self, line: &Line) -> bool {
        if line.indent() > 3 {
            return false;
        }
        let trimmed = line.content().trim_start();
        match get_fence_count(trimmed, self.fence_char) {
            Some(count) if count >= self.fence_count => trimmed[count..].trim().is_empty(),
            _ => false,
        }
    }

    fn build(&mut self) -> Block {
        Block::CodeBlock {
            fence: Some(self.fence_char),
            info: self.info.take(),
            lines: std::mem::take(&mut self.lines),
        }
    }
}

impl OpenBlock for FencedCodeRun {
    fn feed(&mut self, line: &Line, _ctx: &Context) -> Feed {
        if self.is_closing_fence(line) {
            log::debug!("Closed {} fence", self.fence_char);
            return Feed::Completed(self.build());
        }
        self.lines.push(line.content().to_string());
        Feed::Consumed
    }

    fn finish(mut self: Box<Self>) -> Block {
        log::debug!("Fence ran to end of input");
        self.build()
    }
}
