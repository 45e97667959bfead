//! Nesting machinery shared by block quotes and list items.
//!
//! Each nesting level runs one [`Flow`]: it dispatches fresh lines, forwards
//! later lines to the open inner block, and collects completed children. A
//! [`ContainerRun`] wraps a `Flow` behind a membership test, stripping its
//! own prefix from member lines and delegating unmarked lines to an open
//! inner paragraph (lazy continuation). The document's top level is the same
//! `Flow` with no prefix at all.

use crate::block::{Block, ListMarker};
use crate::block_parser::state::{Feed, OpenBlock, Start};
use crate::block_parser::{Context, blockquotes, dispatch_full};
use crate::line::Line;

/// Decides whether a line still belongs to a container, returning it with
/// the container's own prefix removed.
pub(crate) enum Membership {
    /// 0-3 spaces, `>`, one optional following space, stripped entirely.
    QuoteMarker,
    /// Member when blank or indented at least `columns`; exactly `columns`
    /// columns are stripped.
    Indent { columns: usize },
}

impl Membership {
    pub(crate) fn admit(&self, line: &Line) -> Option<Line> {
        match self {
            Membership::QuoteMarker => blockquotes::strip_marker(line),
            Membership::Indent { columns } => {
                if line.is_blank() || line.indent() >= *columns {
                    Some(line.strip_columns(*columns))
                } else {
                    None
                }
            }
        }
    }
}

/// What a paragraph fed a lazy (unmarked) line reported back.
enum Lazy {
    Consumed,
    Closed { restart: Option<Start> },
}

enum Inner {
    Open(Box<dyn OpenBlock>),
    Between,
}

/// One nesting level's run of blocks.
pub(crate) struct Flow {
    inner: Inner,
    done: Vec<Block>,
}

impl Flow {
    pub(crate) fn new() -> Self {
        Self {
            inner: Inner::Between,
            done: Vec::new(),
        }
    }

    fn apply(&mut self, started: Start) {
        match started {
            Start::Continuing(open) => self.inner = Inner::Open(open),
            Start::Complete(block) => {
                self.done.push(block);
                self.inner = Inner::Between;
            }
        }
    }

    /// Feed a line that belongs to this level. Always consumes it: full
    /// dispatch is total, so every line finds a home.
    pub(crate) fn feed(&mut self, line: &Line, ctx: &Context) {
        match &mut self.inner {
            Inner::Open(open) => match open.feed(line, ctx) {
                Feed::Consumed => {}
                Feed::Completed(block) => {
                    self.done.push(block);
                    self.inner = Inner::Between;
                }
                Feed::Closed { block, restart } => {
                    self.done.push(block);
                    let started = restart.unwrap_or_else(|| dispatch_full(line, ctx));
                    self.apply(started);
                }
            },
            Inner::Between => {
                let started = dispatch_full(line, ctx);
                self.apply(started);
            }
        }
    }

    /// Whether the innermost open block is a paragraph.
    pub(crate) fn open_paragraph(&self) -> bool {
        match &self.inner {
            Inner::Open(open) => open.is_paragraph(),
            Inner::Between => false,
        }
    }

    /// Forward an unmarked line to the open paragraph, unmodified.
    fn feed_lazy(&mut self, line: &Line, ctx: &Context) -> Lazy {
        match &mut self.inner {
            Inner::Open(open) => match open.feed(line, ctx) {
                Feed::Consumed => Lazy::Consumed,
                Feed::Completed(block) => {
                    self.done.push(block);
                    self.inner = Inner::Between;
                    Lazy::Consumed
                }
                Feed::Closed { block, restart } => {
                    self.done.push(block);
                    self.inner = Inner::Between;
                    Lazy::Closed { restart }
                }
            },
            Inner::Between => Lazy::Closed { restart: None },
        }
    }

    /// Finalize the open inner block, if any.
    fn close_inner(&mut self) {
        if let Inner::Open(open) = std::mem::replace(&mut self.inner, Inner::Between) {
            self.done.push(open.finish());
        }
    }

    /// Completed blocks collected so far, in order.
    pub(crate) fn take_done(&mut self) -> Vec<Block> {
        std::mem::take(&mut self.done)
    }

    /// Finalize everything at end of input.
    pub(crate) fn finish(mut self) -> Vec<Block> {
        self.close_inner();
        self.done
    }
}

/// The concrete container a [`ContainerRun`] builds.
pub(crate) enum ContainerKind {
    Quote,
    Item { marker: ListMarker },
}

/// A block quote or list item being assembled.
pub(crate) struct ContainerRun {
    membership: Membership,
    kind: ContainerKind,
    flow: Flow,
}

impl ContainerRun {
    /// Open a container: the first line arrives with the container's own
    /// prefix already rewritten and stripped, and is dispatched at the
    /// nested level.
    pub(crate) fn open(
        membership: Membership,
        kind: ContainerKind,
        first: &Line,
        ctx: &Context,
    ) -> Self {
        let mut flow = Flow::new();
        flow.feed(first, ctx);
        Self {
            membership,
            kind,
            flow,
        }
    }

    fn close(&mut self) -> Block {
        self.flow.close_inner();
        let children = self.flow.take_done();
        match &self.kind {
            ContainerKind::Quote => Block::BlockQuote { children },
            ContainerKind::Item { marker } => Block::ListItem {
                marker: marker.clone(),
                children,
            },
        }
    }
}

impl OpenBlock for ContainerRun {
    fn feed(&mut self, line: &Line, ctx: &Context) -> Feed {
        if let Some(inner_line) = self.membership.admit(line) {
            self.flow.feed(&inner_line, ctx);
            return Feed::Consumed;
        }

        // An unmarked line can still continue a paragraph open inside the
        // container, as long as nothing else would start there.
        if self.flow.open_paragraph() {
            return match self.flow.feed_lazy(line, ctx) {
                Lazy::Consumed => Feed::Consumed,
                Lazy::Closed { restart } => {
                    log::debug!("Container closed with its paragraph");
                    Feed::Closed {
                        block: self.close(),
                        restart,
                    }
                }
            };
        }

        log::debug!("Container ended before {:?}", line.content());
        Feed::Closed {
            block: self.close(),
            restart: None,
        }
    }

    fn is_paragraph(&self) -> bool {
        // Lazy continuation reaches through nesting to the innermost
        // open paragraph.
        self.flow.open_paragraph()
    }

    fn finish(mut self: Box<Self>) -> Block {
        self.close()
    }
}
