#![forbid(unsafe_code)]

//! Focus confinement for an open dialog.
//!
//! The trap only intervenes at the edges: Tab on the last tabbable element
//! wraps to the first, Shift+Tab on the first wraps to the last. Every other
//! Tab press is left to the host's default order, which already stays inside
//! the dialog between those edges.
//!
//! # Failure Modes
//!
//! | Scenario | Behavior |
//! |----------|----------|
//! | No tabbable descendants | Initial focus goes to the container; Tab is not intercepted |
//! | Container cannot take focus either | Nothing is focused; Tab is not intercepted |
//! | Focus outside the dialog | Not an edge, Tab is not intercepted |

use dui_dom::{Document, NodeId};

/// Tab-wrapping rules for one container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTrap {
    container: NodeId,
}

impl FocusTrap {
    #[must_use]
    pub const fn new(container: NodeId) -> Self {
        Self { container }
    }

    #[must_use]
    pub const fn container(&self) -> NodeId {
        self.container
    }

    /// Tabbable descendants in document order.
    #[must_use]
    pub fn tabbables(&self, doc: &Document) -> Vec<NodeId> {
        doc.tabbable_descendants(self.container)
    }

    /// Focus the first tabbable descendant, or the container when there is
    /// none. Returns the node that received focus.
    pub fn focus_initial(&self, doc: &mut Document) -> Option<NodeId> {
        if let Some(first) = self.tabbables(doc).first().copied()
            && doc.focus(first)
        {
            return Some(first);
        }
        doc.focus(self.container).then_some(self.container)
    }

    /// Where a Tab press should wrap to, if it is at an edge.
    #[must_use]
    pub fn wrap_target(
        &self,
        doc: &Document,
        active: Option<NodeId>,
        backward: bool,
    ) -> Option<NodeId> {
        let active = active?;
        let tabbables = self.tabbables(doc);
        let (first, last) = (*tabbables.first()?, *tabbables.last()?);
        match (backward, active) {
            (true, a) if a == first => Some(last),
            (false, a) if a == last => Some(first),
            _ => None,
        }
    }

    /// Whether focus currently sits inside the container.
    #[must_use]
    pub fn holds_focus(&self, doc: &Document) -> bool {
        doc.active_element()
            .is_some_and(|active| doc.contains(self.container, active))
    }
}
