//! ATX heading parsing utilities.

use crate::block::Block;
use crate::block_parser::Context;
use crate::block_parser::state::Start;
use crate::line::Line;

/// Try to parse an ATX heading from content, returns heading level (1-6) if found.
pub(crate) fn try_parse_atx_heading(content: &str) -> Option<usize> {
    let trimmed = content.trim_start();

    // Must start with 1-6 # characters
    let hash_count = trimmed.chars().take_while(|&c| c == '#').count();
    if hash_count == 0 || hash_count > 6 {
        return None;
    }

    // After hashes, must be end of line, space, or tab
    let after_hashes = &trimmed[hash_count..];
    if !after_hashes.is_empty() && !after_hashes.starts_with(' ') && !after_hashes.starts_with('\t')
    {
        return None;
    }

    // Check leading indent (max 3 columns)
    let leading = content.len() - trimmed.len();
    if leading > 3 {
        return None;
    }

    Some(hash_count)
}

/// Heading detector: single line, completes immediately.
pub(crate) fn try_start(line: &Line, _ctx: &Context) -> Option<Start> {
    if line.indent() > 3 {
        return None;
    }
    let level = try_parse_atx_heading(line.content())?;

    let trimmed = line.content().trim_start();
    let after_marker = &trimmed[level..];
    // Strip trailing hashes the way the closing sequence rule allows
    let text = after_marker
        .trim()
        .trim_end_matches('#')
        .trim_end()
        .to_string();

    log::debug!("Parsed level {} heading: {:?}", level, text);

    Some(Start::Complete(Block::Heading {
        level: level as u8,
        text,
    }))
}
