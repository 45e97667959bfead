use crate::block::Block;
use crate::block_parser::Context;

pub fn parse_doc(input: &str) -> Vec<Block> {
    crate::parse(input, &Context::default())
}

pub fn parse_lines(lines: &[&str]) -> Vec<Block> {
    parse_doc(&lines.join("\n"))
}

pub fn kind(block: &Block) -> &'static str {
    match block {
        Block::FrontMatter { .. } => "front-matter",
        Block::Blank => "blank",
        Block::Heading { .. } => "heading",
        Block::CodeBlock { .. } => "code",
        Block::HtmlBlock { .. } => "html",
        Block::Paragraph { .. } => "paragraph",
        Block::BlockQuote { .. } => "quote",
        Block::ListItem { .. } => "item",
    }
}

pub fn assert_block_kinds(input: &str, expected: &[&str]) {
    let blocks = parse_doc(input);
    let actual: Vec<_> = blocks.iter().map(kind).collect();
    similar_asserts::assert_eq!(
        actual,
        expected,
        "Block kinds did not match for input:\n{}",
        input
    );
}

pub fn paragraph_lines(block: &Block) -> &[String] {
    match block {
        Block::Paragraph { lines } => lines,
        _ => panic!("expected a paragraph, got {:?}", block),
    }
}

pub fn children(block: &Block) -> &[Block] {
    block
        .children()
        .unwrap_or_else(|| panic!("expected a container, got {:?}", block))
}

/// Stable text rendering of a block tree for snapshot tests.
pub fn render(blocks: &[Block]) -> String {
    let mut out = String::new();
    render_into(&mut out, blocks, 0);
    out.trim_end().to_string()
}

fn render_into(out: &mut String, blocks: &[Block], depth: usize) {
    let pad = "  ".repeat(depth);
    for block in blocks {
        match block {
            Block::FrontMatter { lines } => {
                out.push_str(&format!("{pad}front-matter {lines:?}\n"));
            }
            Block::Blank => out.push_str(&format!("{pad}blank\n")),
            Block::Heading { level, text } => {
                out.push_str(&format!("{pad}heading {level} {text:?}\n"));
            }
            Block::CodeBlock { fence, info, lines } => {
                out.push_str(&format!("{pad}code {fence:?} {info:?} {lines:?}\n"));
            }
            Block::HtmlBlock { kind, lines } => {
                out.push_str(&format!("{pad}html {kind:?} {} lines\n", lines.len()));
            }
            Block::Paragraph { lines } => {
                out.push_str(&format!("{pad}paragraph {lines:?}\n"));
            }
            Block::BlockQuote { children } => {
                out.push_str(&format!("{pad}quote\n"));
                render_into(out, children, depth + 1);
            }
            Block::ListItem { marker, children } => {
                out.push_str(&format!("{pad}item {marker:?}\n"));
                render_into(out, children, depth + 1);
            }
        }
    }
}
