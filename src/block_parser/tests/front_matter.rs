use crate::block::Block;
use crate::block_parser::tests::helpers::{assert_block_kinds, parse_doc, parse_lines};

fn front_matter_lines(block: &Block) -> &[String] {
    match block {
        Block::FrontMatter { lines } => lines,
        _ => panic!("expected front matter, got {:?}", block),
    }
}

#[test]
fn header_before_content() {
    let blocks = parse_lines(&["---", "title: Test", "---", "# Hi"]);
    assert_block_kinds("---\ntitle: Test\n---\n# Hi\n", &["front-matter", "heading"]);
    assert_eq!(front_matter_lines(&blocks[0]), ["title: Test"]);
}

#[test]
fn delimiters_may_carry_whitespace() {
    let blocks = parse_lines(&["  ---  ", "a: 1", "---"]);
    assert_eq!(front_matter_lines(&blocks[0]), ["a: 1"]);
}

#[test]
fn empty_header() {
    let blocks = parse_lines(&["---", "---", "text"]);
    assert_block_kinds("---\n---\ntext\n", &["front-matter", "paragraph"]);
    assert!(front_matter_lines(&blocks[0]).is_empty());
}

#[test]
fn unterminated_header_absorbs_document() {
    let blocks = parse_lines(&["---", "title: x", "", "# not a heading"]);
    assert_eq!(blocks.len(), 1);
    assert_eq!(
        front_matter_lines(&blocks[0]),
        ["title: x", "", "# not a heading"]
    );
}

#[test]
fn only_recognized_on_first_line() {
    assert_block_kinds("\n---\ntitle: x\n", &["blank", "paragraph"]);
}

#[test]
fn four_dashes_do_not_open_header() {
    let blocks = parse_doc("----\ntext\n");
    assert!(matches!(blocks[0], Block::Paragraph { .. }));
}
