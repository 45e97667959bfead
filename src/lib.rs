//! Incremental, line-at-a-time block-level parsing for Markdown documents.
//!
//! The engine consumes one [`Line`] at a time and emits completed [`Block`]
//! values as soon as their last line has been seen, with no lookahead and no
//! backtracking, so it can sit on any line source: a buffered file, a
//! network stream, an editor buffer.
//!
//! ```text
//! > quoted paragraph
//! still quoted, lazily
//!
//! - a list item
//!   with a child paragraph
//! ```
//!
//! Covered: ATX headings, fenced and indented code, raw HTML blocks,
//! paragraphs with hard-break completion, block quotes and list items with
//! CommonMark nesting, lazy continuation and paragraph-interruption
//! precedence, and an optional `---`-delimited front-matter header. Inline
//! markup inside the collected lines is untouched; that belongs to a later
//! pass.

pub mod block;
pub mod block_parser;
pub mod config;
pub mod line;

pub use block::{Block, HtmlBlockKind, ListMarker, OrderedDelim};
pub use block_parser::state::{Feed, OpenBlock, Start};
pub use block_parser::{BlockParser, Context, Detector};
pub use config::Config;
pub use line::Line;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parses a whole document into its block sequence.
///
/// Normalizes line endings, feeds every line through an incremental
/// [`BlockParser`], and finalizes at end of input. For streaming input, use
/// [`BlockParser`] directly.
///
/// # Arguments
///
/// * `input` - The document content to parse
/// * `ctx` - Parsing context (configuration and optional extension detector)
pub fn parse(input: &str, ctx: &Context) -> Vec<Block> {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let normalized_input = input.replace("\r\n", "\n");

    let mut parser = BlockParser::new(ctx);
    let mut blocks = Vec::new();
    for line in line::lines(&normalized_input) {
        blocks.extend(parser.feed(line));
    }
    blocks.extend(parser.finish());
    blocks
}
