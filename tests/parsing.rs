use plumage::{Block, BlockParser, Config, Context, Detector, Line, Start, parse};
use proptest::prelude::*;

#[test]
fn streaming_blocks_arrive_as_they_complete() {
    let ctx = Context::default();
    let mut parser = BlockParser::new(&ctx);

    // A heading completes on its own line
    let done = parser.feed(Line::new("# Title"));
    assert_eq!(done.len(), 1);
    assert!(matches!(done[0], Block::Heading { .. }));

    // A paragraph stays open across its lines
    assert!(parser.feed(Line::new("one")).is_empty());
    assert!(parser.feed(Line::new("two")).is_empty());

    // The blank line closes the paragraph and is itself a block
    let done = parser.feed(Line::new(""));
    assert_eq!(done.len(), 2);
    assert!(matches!(done[0], Block::Paragraph { .. }));
    assert!(matches!(done[1], Block::Blank));

    assert!(parser.finish().is_empty());
}

#[test]
fn finish_closes_open_blocks() {
    let ctx = Context::default();
    let mut parser = BlockParser::new(&ctx);
    assert!(parser.feed(Line::new("```rust")).is_empty());
    assert!(parser.feed(Line::new("let x = 1;")).is_empty());
    let done = parser.finish();
    assert_eq!(done.len(), 1);
    match &done[0] {
        Block::CodeBlock { info, lines, .. } => {
            assert_eq!(info.as_deref(), Some("rust"));
            assert_eq!(lines, &["let x = 1;"]);
        }
        other => panic!("expected a code block, got {:?}", other),
    }
}

#[test]
fn crlf_input_is_normalized() {
    let ctx = Context::default();
    let blocks = parse("one\r\ntwo\r\n", &ctx);
    assert_eq!(blocks.len(), 1);
    match &blocks[0] {
        Block::Paragraph { lines } => assert_eq!(lines, &["one", "two"]),
        other => panic!("expected a paragraph, got {:?}", other),
    }
}

#[test]
fn composite_document() {
    let input = "\
---
title: Demo
---
# Intro

> quoted
lazy

- item
  continued

```sh
ls
```
";
    let ctx = Context::default();
    let kinds: Vec<&str> = parse(input, &ctx)
        .iter()
        .map(|b| match b {
            Block::FrontMatter { .. } => "front-matter",
            Block::Blank => "blank",
            Block::Heading { .. } => "heading",
            Block::CodeBlock { .. } => "code",
            Block::HtmlBlock { .. } => "html",
            Block::Paragraph { .. } => "paragraph",
            Block::BlockQuote { .. } => "quote",
            Block::ListItem { .. } => "item",
        })
        .collect();
    similar_asserts::assert_eq!(
        kinds,
        vec![
            "front-matter",
            "heading",
            "blank",
            "quote",
            "blank",
            "item",
            "code",
        ]
    );
}

/// A toy directive block for the pluggable detector slot: any line starting
/// with `:::` becomes its own block.
struct Directives;

impl Detector for Directives {
    fn try_start(&self, line: &Line, _ctx: &Context) -> Option<Start> {
        let rest = line.content().trim_start().strip_prefix(":::")?;
        Some(Start::Complete(Block::CodeBlock {
            fence: None,
            info: Some("directive".to_string()),
            lines: vec![rest.trim().to_string()],
        }))
    }
}

#[test]
fn extension_detector_claims_its_lines() {
    let ctx = Context::with_extension(Config::default(), Box::new(Directives));
    let blocks = parse("::: note\ntext\n", &ctx);
    assert_eq!(blocks.len(), 2);
    match &blocks[0] {
        Block::CodeBlock { info, lines, .. } => {
            assert_eq!(info.as_deref(), Some("directive"));
            assert_eq!(lines, &["note"]);
        }
        other => panic!("expected the directive block, got {:?}", other),
    }
}

#[test]
fn extension_detector_interrupts_paragraphs() {
    let ctx = Context::with_extension(Config::default(), Box::new(Directives));
    let blocks = parse("text\n::: note\n", &ctx);
    assert_eq!(blocks.len(), 2);
    assert!(matches!(blocks[0], Block::Paragraph { .. }));
}

#[test]
fn without_extension_directive_lines_are_paragraphs() {
    let ctx = Context::default();
    let blocks = parse("::: note\n", &ctx);
    assert!(matches!(blocks[0], Block::Paragraph { .. }));
}

#[test]
fn config_tag_table_is_respected() {
    let ctx = Context::default();
    assert!(matches!(
        parse("<section>\n", &ctx)[0],
        Block::HtmlBlock { .. }
    ));

    let config = Config::from_toml("html_block_tags = [\"div\"]").unwrap();
    let ctx = Context::new(config);
    assert!(matches!(parse("<section>\n", &ctx)[0], Block::Paragraph { .. }));
    assert!(matches!(parse("<div>\n", &ctx)[0], Block::HtmlBlock { .. }));
}

#[test]
fn blocks_serialize_round_trip() {
    let ctx = Context::default();
    let blocks = parse("# Hi\n\n> quote\n\n- item\n", &ctx);
    let json = serde_json::to_string(&blocks).unwrap();
    let back: Vec<Block> = serde_json::from_str(&json).unwrap();
    assert_eq!(blocks, back);
}

proptest! {
    // The engine is total: every input parses, and since every block
    // consumes at least one line, the block count never exceeds the
    // line count.
    #[test]
    fn parse_is_total(input in "\\PC*") {
        let ctx = Context::default();
        let blocks = parse(&input, &ctx);
        prop_assert!(blocks.len() <= input.lines().count());
    }

    #[test]
    fn parse_handles_multiline_soup(
        lines in proptest::collection::vec("[ >#`~\\-+*0-9a-z<!\\[\\]]{0,12}", 0..24)
    ) {
        let input = lines.join("\n");
        let ctx = Context::default();
        let blocks = parse(&input, &ctx);
        prop_assert!(blocks.len() <= lines.len());
    }
}
