//! List item parsing.

use crate::block::{ListMarker, OrderedDelim};
use crate::block_parser::Context;
use crate::block_parser::containers::{ContainerKind, ContainerRun, Membership};
use crate::block_parser::state::Start;
use crate::line::{Line, whitespace_columns};

/// A recognized list marker and the geometry of its opening line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MarkerInfo {
    pub(crate) marker: ListMarker,
    /// Columns up to and including the marker (leading spaces + marker).
    pub(crate) prefix_cols: usize,
    /// Columns of whitespace between the marker and the content.
    pub(crate) spaces_after: usize,
}

impl MarkerInfo {
    /// Indent required of continuation lines. A run of more than 4 spaces
    /// after the marker collapses to one, so the content is indented code.
    pub(crate) fn continuation_indent(&self) -> usize {
        if self.spaces_after > 4 {
            self.prefix_cols + 1
        } else {
            self.prefix_cols + self.spaces_after
        }
    }
}

/// Try to parse a list marker: a bullet (`-`, `+`, `*`) or a 1-9 digit
/// ordinal with `.` or `)`, after 0-3 leading spaces and followed by at
/// least one space.
pub(crate) fn try_parse_list_marker(line: &Line) -> Option<MarkerInfo> {
    if line.indent() > 3 {
        return None;
    }
    let trimmed = line.content().trim_start();

    let (marker, marker_len) = if let Some(ch) = trimmed.chars().next()
        && matches!(ch, '-' | '+' | '*')
    {
        (ListMarker::Bullet(ch), 1)
    } else {
        let digit_count = trimmed.chars().take_while(|c| c.is_ascii_digit()).count();
        if digit_count == 0 || digit_count > 9 {
            return None;
        }
        let delim = match trimmed[digit_count..].chars().next() {
            Some('.') => OrderedDelim::Period,
            Some(')') => OrderedDelim::Paren,
            _ => return None,
        };
        let number: u32 = trimmed[..digit_count].parse().ok()?;
        (ListMarker::Ordered { number, delim }, digit_count + 1)
    };

    let after_marker = &trimmed[marker_len..];
    let (spaces_after, _) = whitespace_columns(after_marker, line.indent() + marker_len);
    if spaces_after == 0 {
        return None;
    }

    Some(MarkerInfo {
        marker,
        prefix_cols: line.indent() + marker_len,
        spaces_after,
    })
}

/// List item detector.
pub(crate) fn try_start(line: &Line, ctx: &Context) -> Option<Start> {
    let info = try_parse_list_marker(line)?;
    let indent = info.continuation_indent();

    // Blank out the marker so nested indentation-sensitive blocks measure
    // from column zero, then strip the item's own indent.
    let first = line.blank_columns(info.prefix_cols).strip_columns(indent);

    log::debug!(
        "Opened list item {:?}, continuation indent {}",
        info.marker,
        indent
    );

    Some(Start::Continuing(Box::new(ContainerRun::open(
        Membership::Indent { columns: indent },
        ContainerKind::Item {
            marker: info.marker,
        },
        &first,
        ctx,
    ))))
}
