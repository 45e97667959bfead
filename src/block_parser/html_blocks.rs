//! HTML block parsing.

use crate::block::{Block, HtmlBlockKind};
use crate::block_parser::Context;
use crate::block_parser::state::{Feed, OpenBlock, Start};
use crate::line::Line;

/// Information about a detected HTML block opening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HtmlBlockType {
    /// `<script>`, `<pre>`, `<style>`; raw content to the closing tag.
    Verbatim { tag_name: String },
    /// HTML comment: `<!-- ... -->`
    Comment,
    /// Processing instruction: `<? ... ?>`
    ProcessingInstruction,
    /// Declaration: `<!...>`
    Declaration,
    /// CDATA section: `<![CDATA[ ... ]]>`
    CData,
    /// Configured block-level tag; runs to the next blank line.
    BlockTag,
}

impl HtmlBlockType {
    fn kind(&self) -> HtmlBlockKind {
        match self {
            HtmlBlockType::Verbatim { .. } => HtmlBlockKind::Verbatim,
            HtmlBlockType::Comment => HtmlBlockKind::Comment,
            HtmlBlockType::ProcessingInstruction => HtmlBlockKind::ProcessingInstruction,
            HtmlBlockType::Declaration => HtmlBlockKind::Declaration,
            HtmlBlockType::CData => HtmlBlockKind::CData,
            HtmlBlockType::BlockTag => HtmlBlockKind::Tag,
        }
    }
}

/// Try to detect an HTML block opening from content.
pub(crate) fn try_parse_html_block_start(content: &str, ctx: &Context) -> Option<HtmlBlockType> {
    let trimmed = content.trim_start();

    // Must start with <
    if !trimmed.starts_with('<') {
        return None;
    }

    // HTML comment
    if trimmed.starts_with("<!--") {
        return Some(HtmlBlockType::Comment);
    }

    // Processing instruction
    if trimmed.starts_with("<?") {
        return Some(HtmlBlockType::ProcessingInstruction);
    }

    // CDATA section
    if trimmed.starts_with("<![CDATA[") {
        return Some(HtmlBlockType::CData);
    }

    // Declaration (DOCTYPE, etc.)
    if trimmed.starts_with("<!") && trimmed.len() > 2 {
        let after_bang = &trimmed[2..];
        if after_bang.chars().next()?.is_ascii_uppercase() {
            return Some(HtmlBlockType::Declaration);
        }
    }

    // Try to parse as an opening tag
    if let Some(tag_name) = extract_opening_tag_name(trimmed) {
        let tag_lower = tag_name.to_lowercase();

        if ctx.config.is_verbatim_tag(&tag_lower) {
            return Some(HtmlBlockType::Verbatim {
                tag_name: tag_lower,
            });
        }

        if ctx.config.is_block_tag(&tag_lower) {
            return Some(HtmlBlockType::BlockTag);
        }
    }

    None
}

/// Extract the tag name from an opening tag.
fn extract_opening_tag_name(text: &str) -> Option<String> {
    if !text.starts_with('<') {
        return None;
    }

    let after_bracket = &text[1..];

    // Skip closing tags
    if after_bracket.starts_with('/') {
        return None;
    }

    // Tag name ends at whitespace, >, or /
    let tag_end = after_bracket
        .find(|c: char| c.is_whitespace() || c == '>' || c == '/')
        .unwrap_or(after_bracket.len());

    if tag_end == 0 {
        return None;
    }

    let tag_name = &after_bracket[..tag_end];

    if !tag_name.chars().next()?.is_ascii_alphabetic() {
        return None;
    }

    if !tag_name.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    Some(tag_name.to_string())
}

/// Check if a line contains the closing marker for the given HTML block type.
/// The tag-name kind has no closing marker; it ends at a blank line instead.
fn is_closing_marker(content: &str, block_type: &HtmlBlockType) -> bool {
    match block_type {
        HtmlBlockType::Verbatim { tag_name } => {
            let closing_tag = format!("</{}>", tag_name);
            content.to_lowercase().contains(&closing_tag)
        }
        HtmlBlockType::Comment => content.contains("-->"),
        HtmlBlockType::ProcessingInstruction => content.contains("?>"),
        HtmlBlockType::Declaration => content.contains('>'),
        HtmlBlockType::CData => content.contains("]]>"),
        HtmlBlockType::BlockTag => false,
    }
}

/// HTML block detector.
pub(crate) fn try_start(line: &Line, ctx: &Context) -> Option<Start> {
    if line.indent() > 3 {
        return None;
    }
    let block_type = try_parse_html_block_start(line.content(), ctx)?;

    log::debug!("Opened HTML block: {:?}", block_type);

    // The opening line may already contain the closing marker
    if is_closing_marker(line.content(), &block_type) {
        return Some(Start::Complete(Block::HtmlBlock {
            kind: block_type.kind(),
            lines: vec![line.content().to_string()],
        }));
    }

    Some(Start::Continuing(Box::new(HtmlBlockRun {
        block_type,
        lines: vec![line.content().to_string()],
    })))
}

/// An open HTML block: verbatim lines until the type-specific end.
pub(crate) struct HtmlBlockRun {
    block_type: HtmlBlockType,
    lines: Vec<String>,
}

impl HtmlBlockRun {
    fn build(&mut self) -> Block {
        Block::HtmlBlock {
            kind: self.block_type.kind(),
            lines: std::mem::take(&mut self.lines),
        }
    }
}

impl OpenBlock for HtmlBlockRun {
    fn feed(&mut self, line: &Line, _ctx: &Context) -> Feed {
        // The tag-name kind ends at a blank line, which stays unconsumed
        if matches!(self.block_type, HtmlBlockType::BlockTag) && line.is_blank() {
            return Feed::Closed {
                block: self.build(),
                restart: None,
            };
        }

        self.lines.push(line.content().to_string());

        if is_closing_marker(line.content(), &self.block_type) {
            log::debug!("HTML block closed: {:?}", self.block_type);
            return Feed::Completed(self.build());
        }

        Feed::Consumed
    }

    fn finish(mut self: Box<Self>) -> Block {
        log::debug!("HTML block ran to end of input");
        self.build()
    }
}
