//! Listener registration and dispatch paths.
//!
//! A listener is an opaque [`ListenerId`] attached to a node for one
//! [`EventKind`]. The document never runs code on behalf of a listener;
//! [`Document::dispatch`](crate::Document::dispatch) computes which
//! listeners an event reaches, in bubbling order (target first, then each
//! ancestor), and the owning component reacts to its own ids.
//!
//! # Invariants
//!
//! - Listener ids are process-unique.
//! - A path lists each `(node, listener)` pair at most once, in the order a
//!   bubbling DOM event would visit them.

use std::sync::atomic::{AtomicU64, Ordering};

use dui_core::event::{Event, EventKind};
use smallvec::SmallVec;

use crate::node::NodeId;

/// Global counter for unique listener ids.
static LISTENER_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Opaque handle for a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Allocate a new unique listener id.
    #[must_use]
    pub fn new() -> Self {
        Self(LISTENER_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl Default for ListenerId {
    fn default() -> Self {
        Self::new()
    }
}

/// An input event aimed at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomEvent {
    pub target: NodeId,
    pub event: Event,
}

impl DomEvent {
    #[must_use]
    pub const fn new(target: NodeId, event: Event) -> Self {
        Self { target, event }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> EventKind {
        self.event.kind()
    }
}

/// Listener hits for one dispatch, in bubbling order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchPath {
    hits: SmallVec<[(NodeId, ListenerId); 4]>,
}

impl DispatchPath {
    pub(crate) fn push(&mut self, node: NodeId, listener: ListenerId) {
        self.hits.push((node, listener));
    }

    /// Whether the event reaches `listener`.
    #[must_use]
    pub fn reaches(&self, listener: ListenerId) -> bool {
        self.hits.iter().any(|(_, l)| *l == listener)
    }

    /// Node the listener is attached to, if reached.
    #[must_use]
    pub fn node_of(&self, listener: ListenerId) -> Option<NodeId> {
        self.hits
            .iter()
            .find(|(_, l)| *l == listener)
            .map(|(node, _)| *node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, ListenerId)> + '_ {
        self.hits.iter().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hits.len()
    }
}

/// Per-node listener table entry.
pub(crate) type NodeListeners = SmallVec<[(EventKind, ListenerId); 2]>;
