//! Completed block values produced by the parser.

use serde::{Deserialize, Serialize};

/// A finished top-level or nested block.
///
/// Container blocks hold the blocks parsed from their stripped content;
/// leaf blocks hold their raw consumed lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    /// `---`-delimited verbatim header before any content. The delimiter
    /// lines are consumed by the block but excluded from `lines`.
    FrontMatter { lines: Vec<String> },
    /// A single blank line between blocks.
    Blank,
    /// ATX heading, level 1-6, content trimmed and trailing hashes stripped.
    Heading { level: u8, text: String },
    /// Fenced or indented code. `fence` retains the fence character
    /// (`None` for indented code); `info` the trimmed info string.
    CodeBlock {
        fence: Option<char>,
        info: Option<String>,
        lines: Vec<String>,
    },
    /// Raw HTML, all consumed lines verbatim including the opening and (when
    /// present) closing lines.
    HtmlBlock {
        kind: HtmlBlockKind,
        lines: Vec<String>,
    },
    /// Default paragraph, one entry per consumed line, whitespace-trimmed.
    Paragraph { lines: Vec<String> },
    /// `>`-marked container.
    BlockQuote { children: Vec<Block> },
    /// Bullet or ordered list item.
    ListItem {
        marker: ListMarker,
        children: Vec<Block>,
    },
}

/// The marker that opened a list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListMarker {
    /// `-`, `+`, or `*`.
    Bullet(char),
    /// 1-9 digit ordinal with its delimiter.
    Ordered { number: u32, delim: OrderedDelim },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderedDelim {
    /// `1.`
    Period,
    /// `1)`
    Paren,
}

/// The six HTML block sub-types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HtmlBlockKind {
    /// `<script>`, `<pre>`, or `<style>`; ends at the matching closing tag.
    Verbatim,
    /// `<!-- ... -->`
    Comment,
    /// `<? ... ?>`
    ProcessingInstruction,
    /// `<!DOCTYPE ...>` and friends.
    Declaration,
    /// `<![CDATA[ ... ]]>`
    CData,
    /// A configured block-level tag name; ends at a blank line.
    Tag,
}

impl Block {
    /// Child blocks of a container, if this is one.
    pub fn children(&self) -> Option<&[Block]> {
        match self {
            Block::BlockQuote { children } | Block::ListItem { children, .. } => Some(children),
            _ => None,
        }
    }
}
