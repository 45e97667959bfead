//! The incremental block parser.
//!
//! Lines are fed one at a time, in order; completed blocks come back as soon
//! as their last line has been seen. Detection runs through two explicitly
//! ordered lists: the full order decides what a fresh line opens, and the
//! interruption-capable prefix of it decides what may end an in-progress
//! paragraph. Indented code is only in the full order, so an indented line
//! inside an open paragraph continues the paragraph instead of opening a
//! code block.

use crate::block::Block;
use crate::config::Config;
use crate::line::Line;

mod blockquotes;
mod code_blocks;
mod containers;
mod headings;
mod html_blocks;
mod indented_code;
mod lists;
mod metadata;
mod paragraphs;
pub mod state;

use containers::Flow;
use metadata::FrontMatterRun;
use state::Start;

/// A pluggable block detector.
///
/// Consulted between list items and fenced code in both dispatch orders, so
/// its blocks may interrupt a paragraph. The engine treats the trigger
/// condition and the produced block as opaque.
pub trait Detector {
    fn try_start(&self, line: &Line, ctx: &Context) -> Option<Start>;
}

/// Read-only context threaded through every detector and continuation call.
pub struct Context {
    pub config: Config,
    extension: Option<Box<dyn Detector>>,
}

impl Context {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            extension: None,
        }
    }

    /// Fill the pluggable detector slot.
    pub fn with_extension(config: Config, extension: Box<dyn Detector>) -> Self {
        Self {
            config,
            extension: Some(extension),
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

type StartFn = fn(&Line, &Context) -> Option<Start>;

fn extension_slot(line: &Line, ctx: &Context) -> Option<Start> {
    ctx.extension.as_ref()?.try_start(line, ctx)
}

/// Detectors that may end an in-progress paragraph, in priority order.
const INTERRUPTING: &[StartFn] = &[
    blockquotes::try_start,
    headings::try_start,
    lists::try_start,
    extension_slot,
    code_blocks::try_start,
    html_blocks::try_start,
];

/// Everything a fresh line may open, in priority order. Same as the
/// interruption-capable order plus indented code.
const FULL: &[StartFn] = &[
    blockquotes::try_start,
    headings::try_start,
    lists::try_start,
    extension_slot,
    code_blocks::try_start,
    html_blocks::try_start,
    indented_code::try_start,
];

/// Dispatch a fresh line. Total: blank lines become blank blocks and the
/// paragraph claims whatever no detector wants.
pub(crate) fn dispatch_full(line: &Line, ctx: &Context) -> Start {
    if line.is_blank() {
        return Start::Complete(Block::Blank);
    }
    for detector in FULL {
        if let Some(started) = detector(line, ctx) {
            return started;
        }
    }
    paragraphs::start(line)
}

/// Dispatch the line following an open paragraph against the
/// interruption-capable order only.
pub(crate) fn dispatch_interrupting(line: &Line, ctx: &Context) -> Option<Start> {
    for detector in INTERRUPTING {
        if let Some(started) = detector(line, ctx) {
            return Some(started);
        }
    }
    None
}

enum DocumentState {
    /// Before the first line.
    Start,
    /// Inside the front matter header.
    FrontMatter(FrontMatterRun),
    /// Top-level content.
    Content(Flow),
}

/// The incremental document parser.
///
/// Feed each line in order; [`BlockParser::feed`] returns the top-level
/// blocks completed by that line. When input ends, [`BlockParser::finish`]
/// closes whatever is still open as complete-at-end-of-input. The caller
/// decides when input ends, never the engine.
pub struct BlockParser<'a> {
    ctx: &'a Context,
    state: DocumentState,
    line_no: usize,
}

impl<'a> BlockParser<'a> {
    pub fn new(ctx: &'a Context) -> Self {
        Self {
            ctx,
            state: DocumentState::Start,
            line_no: 0,
        }
    }

    /// Feed the next line; returns the blocks it completed, in order.
    pub fn feed(&mut self, line: Line) -> Vec<Block> {
        self.line_no += 1;
        log::debug!("Parsing line {}: {:?}", self.line_no, line.content());

        match &mut self.state {
            DocumentState::Start => {
                if metadata::is_fence(&line) {
                    log::debug!("Front matter opened");
                    self.state = DocumentState::FrontMatter(FrontMatterRun::new());
                    return Vec::new();
                }
                let mut flow = Flow::new();
                flow.feed(&line, self.ctx);
                let done = flow.take_done();
                self.state = DocumentState::Content(flow);
                done
            }
            DocumentState::FrontMatter(run) => match run.feed(&line) {
                Some(block) => {
                    self.state = DocumentState::Content(Flow::new());
                    vec![block]
                }
                None => Vec::new(),
            },
            DocumentState::Content(flow) => {
                flow.feed(&line, self.ctx);
                flow.take_done()
            }
        }
    }

    /// End of input: finalize and return whatever blocks are still open.
    pub fn finish(self) -> Vec<Block> {
        match self.state {
            DocumentState::Start => Vec::new(),
            DocumentState::FrontMatter(run) => vec![run.finish()],
            DocumentState::Content(flow) => flow.finish(),
        }
    }
}
