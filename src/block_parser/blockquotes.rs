//! Block quote parsing.

use crate::block_parser::Context;
use crate::block_parser::containers::{ContainerKind, ContainerRun, Membership};
use crate::block_parser::state::Start;
use crate::line::Line;

/// Strip a block quote marker: up to 3 leading spaces, `>`, and one optional
/// following space. Returns the remainder, or None when the line carries no
/// marker.
pub(crate) fn strip_marker(line: &Line) -> Option<Line> {
    if line.indent() > 3 {
        return None;
    }
    let rest = line.content().trim_start().strip_prefix('>')?;
    let rest = rest.strip_prefix(' ').unwrap_or(rest);
    Some(Line::new(rest))
}

/// Block quote detector. The marker test doubles as the membership test for
/// every later line.
pub(crate) fn try_start(line: &Line, ctx: &Context) -> Option<Start> {
    let first = strip_marker(line)?;
    log::debug!("Opened block quote");
    Some(Start::Continuing(Box::new(ContainerRun::open(
        Membership::QuoteMarker,
        ContainerKind::Quote,
        &first,
        ctx,
    ))))
}
