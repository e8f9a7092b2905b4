#![forbid(unsafe_code)]

//! Presentational widgets for DUI.
//!
//! Every widget follows the same shape: take a configuration, build a
//! detached subtree in a [`Document`], register listeners on the nodes it
//! owns, and react to events the host routes back through
//! [`Component::handle_event`].

pub mod content;
pub mod modal;

pub use content::{Content, NodeSpec};
pub use modal::{
    HookContext, Modal, ModalConfig, ModalId, ModalNodes, ModalOptions, ModalSize, Transition,
};

use bitflags::bitflags;
use dui_dom::{Document, DomError, DomEvent, NodeId};

bitflags! {
    /// What a component did with an event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct EventOutcome: u8 {
        /// The component reacted to the event.
        const HANDLED          = 0b001;
        /// The host should skip the browser default action.
        const PREVENT_DEFAULT  = 0b010;
        /// The host should not deliver the event to outer handlers.
        const STOP_PROPAGATION = 0b100;
    }
}

impl EventOutcome {
    #[inline]
    #[must_use]
    pub fn is_handled(self) -> bool {
        self.contains(Self::HANDLED)
    }
}

/// A widget that renders into a [`Document`].
pub trait Component {
    /// Build the widget's subtree and return its detached root.
    fn render(&mut self, doc: &mut Document) -> Result<NodeId, DomError>;

    /// React to an event routed by the host.
    fn handle_event(&mut self, doc: &mut Document, event: &DomEvent) -> EventOutcome {
        let _ = (doc, event);
        EventOutcome::empty()
    }
}
