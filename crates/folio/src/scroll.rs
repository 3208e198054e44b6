// File: src/scroll.rs
// Purpose: Anchor ("jump to section") navigation

use std::cell::RefCell;
use std::collections::HashSet;

use tracing::debug;

use crate::assemble::AssembledPage;

/// Performs the actual scroll. The browser implementation smooth-scrolls to
/// the element with the given id.
pub trait AnchorScroller {
    /// Returns `false` when no element with that id is rendered
    fn scroll_into_view(&self, anchor: &str) -> bool;
}

/// Scrolls to an in-page anchor
///
/// A missing target (stale anchor, wrong page) is a silent no-op: nothing is
/// raised and no navigation happens. Returns whether a scroll took place.
pub fn scroll_to_anchor(scroller: &dyn AnchorScroller, anchor: &str) -> bool {
    if anchor.is_empty() {
        return false;
    }

    let scrolled = scroller.scroll_into_view(anchor);
    if !scrolled {
        debug!(anchor, "scroll target not rendered, ignoring");
    }
    scrolled
}

/// [`AnchorScroller`] over a known set of anchors that records every scroll
#[derive(Debug, Default)]
pub struct RecordingScroller {
    anchors: HashSet<String>,
    scrolled: RefCell<Vec<String>>,
}

impl RecordingScroller {
    pub fn new<I, S>(anchors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RecordingScroller {
            anchors: anchors.into_iter().map(Into::into).collect(),
            scrolled: RefCell::new(Vec::new()),
        }
    }

    /// Knows exactly the anchors the page renders
    pub fn for_page(page: &AssembledPage<'_>) -> Self {
        Self::new(page.tree.anchors())
    }

    pub fn scrolled(&self) -> Vec<String> {
        self.scrolled.borrow().clone()
    }
}

impl AnchorScroller for RecordingScroller {
    fn scroll_into_view(&self, anchor: &str) -> bool {
        if !self.anchors.contains(anchor) {
            return false;
        }
        self.scrolled.borrow_mut().push(anchor.to_string());
        true
    }
}
