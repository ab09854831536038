use std::cell::Cell;
use std::rc::Rc;

use super::{ElementHandle, SidebarHandle, ViewportProbe};

/// Node handle used by the mock document: a plain id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockNode(pub u32);

/// A fake element: its own node id, the ids of its descendants, and a
/// shared open flag so tests can observe the marker after the element has
/// been moved into the controller.
pub struct MockElement {
    node: MockNode,
    descendants: Vec<MockNode>,
    open: Rc<Cell<bool>>,
}

impl MockElement {
    #[must_use]
    pub fn new(node_id: u32, descendant_ids: &[u32]) -> Self {
        Self {
            node: MockNode(node_id),
            descendants: descendant_ids.iter().copied().map(MockNode).collect(),
            open: Rc::new(Cell::new(false)),
        }
    }

    /// Shared view of the open marker for assertions.
    #[must_use]
    pub fn open_flag(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.open)
    }
}

impl ElementHandle for MockElement {
    type Node = MockNode;

    fn contains(&self, node: &MockNode) -> bool {
        self.node == *node || self.descendants.contains(node)
    }
}

impl SidebarHandle for MockElement {
    fn toggle_open(&self) -> bool {
        let next = !self.open.get();
        self.open.set(next);
        next
    }

    fn close(&self) {
        self.open.set(false);
    }
}

/// Fixed-width viewport.
#[derive(Debug, Clone, Copy)]
pub struct MockViewport(pub u32);

impl ViewportProbe for MockViewport {
    fn width(&self) -> u32 {
        self.0
    }
}
