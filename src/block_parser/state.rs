//! The per-line state-machine contract every block honors.
//!
//! A detector is a plain function offered a candidate first line; it either
//! declines (`None`) or answers with a [`Start`]. An open block is then fed
//! every following line through [`OpenBlock::feed`] until it reports that it
//! completed or closed. Once a block has closed, no further line is ever
//! delivered to it.

use crate::block::Block;
use crate::block_parser::Context;
use crate::line::Line;

/// Outcome of offering a candidate first line to a detector.
pub enum Start {
    /// The line opened a block that stays open for subsequent lines.
    Continuing(Box<dyn OpenBlock>),
    /// The line formed (or closed) a complete block by itself.
    Complete(Block),
}

/// Outcome of feeding a subsequent line to an open block.
pub enum Feed {
    /// The line was absorbed; the block remains open.
    Consumed,
    /// The line was absorbed and completed the block on this very line.
    Completed(Block),
    /// The block ended strictly before this line, which was not absorbed.
    ///
    /// `restart` carries the precomputed outcome of this same line when the
    /// close was triggered by a match (a paragraph interruption); when absent
    /// the caller must dispatch the line from scratch.
    Closed {
        block: Block,
        restart: Option<Start>,
    },
}

/// A block currently being assembled, line by line.
pub trait OpenBlock {
    /// Feed the next line.
    fn feed(&mut self, line: &Line, ctx: &Context) -> Feed;

    /// Whether the innermost open block is a default paragraph.
    ///
    /// Container logic consults this to decide lazy continuation, so it must
    /// be accurate on every open block; containers delegate to their open
    /// child.
    fn is_paragraph(&self) -> bool {
        false
    }

    /// Finalize at end of input, keeping whatever was absorbed.
    fn finish(self: Box<Self>) -> Block;
}
