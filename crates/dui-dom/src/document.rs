#![forbid(unsafe_code)]

//! The host document.
//!
//! A [`Document`] owns every node it creates. Its tree starts as
//! `<html><body></body></html>`; components build detached subtrees and the
//! caller inserts them under [`Document::body`] (or anywhere else).
//!
//! # Invariants
//!
//! 1. **Acyclic**: `append_child` rejects inserting a node under itself or
//!    one of its descendants.
//! 2. **Single parent**: inserting a node that already has a parent moves it.
//! 3. **Focus is connected**: the active element is always connected.
//!    Detaching a subtree that contains the active element returns focus to
//!    the body (`active_element() == None`).
//! 4. **Stable ids**: node ids are slot-map keys and are never reused
//!    within a document.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unknown id | Null key or id from a larger document | `DomError::UnknownNode` |
//! | Text node as parent | `append_child(text, _)` | `DomError::NotAnElement` |
//! | Cycle | Ancestor inserted under descendant | `DomError::HierarchyRequest` |
//! | Focus refused | Detached, disabled, or not focusable | `focus` returns `false` |

use ahash::AHashMap;
use dui_core::event::EventKind;
use slotmap::SlotMap;

use crate::error::DomError;
use crate::focus;
use crate::listener::{DispatchPath, DomEvent, ListenerId, NodeListeners};
use crate::node::{ElementData, Node, NodeData, NodeId};
use crate::scroll::{BodyOverflow, LOCKED_OVERFLOW, ScrollLock};

/// Headless document.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: SlotMap<NodeId, Node>,
    root: NodeId,
    body: NodeId,
    active: Option<NodeId>,
    listeners: AHashMap<NodeId, NodeListeners>,
    scroll_lock: ScrollLock,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document containing `<html><body></body></html>`.
    #[must_use]
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::new(NodeData::Element(ElementData::new("html"))));
        let mut body_node = Node::new(NodeData::Element(ElementData::new("body")));
        body_node.parent = Some(root);
        let body = nodes.insert(body_node);
        nodes[root].children.push(body);
        Self {
            nodes,
            root,
            body,
            active: None,
            listeners: AHashMap::new(),
            scroll_lock: ScrollLock::default(),
        }
    }

    fn alloc(&mut self, data: NodeData) -> NodeId {
        self.nodes.insert(Node::new(data))
    }

    fn node(&self, id: NodeId) -> Result<&Node, DomError> {
        self.nodes.get(id).ok_or(DomError::UnknownNode(id))
    }

    fn element_mut(&mut self, id: NodeId) -> Result<&mut ElementData, DomError> {
        self.nodes
            .get_mut(id)
            .ok_or(DomError::UnknownNode(id))?
            .element_mut()
            .ok_or(DomError::NotAnElement(id))
    }

    // --- Tree ---

    /// The `<html>` element.
    #[inline]
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// The `<body>` element.
    #[inline]
    #[must_use]
    pub const fn body(&self) -> NodeId {
        self.body
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.alloc(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.alloc(NodeData::Text(text.into()))
    }

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if self.node(parent)?.element().is_none() {
            return Err(DomError::NotAnElement(parent));
        }
        self.node(child)?;
        if self.contains(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }
        self.detach_link(child);
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
        self.drop_stale_focus();
        Ok(())
    }

    /// Detach `node` from its parent. Detaching a parentless node is a no-op.
    pub fn remove(&mut self, node: NodeId) -> Result<(), DomError> {
        self.node(node)?;
        if self.nodes[node].parent.is_none() {
            return Ok(());
        }
        self.detach_link(node);
        self.drop_stale_focus();

        #[cfg(feature = "tracing")]
        tracing::trace!(node = %node, "node detached");

        Ok(())
    }

    fn drop_stale_focus(&mut self) {
        if let Some(active) = self.active
            && !self.is_connected(active)
        {
            self.active = None;
        }
    }

    fn detach_link(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node].parent.take() {
            self.nodes[parent].children.retain(|c| *c != node);
        }
    }

    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).ok()?.parent
    }

    /// Children in order; empty for unknown ids and text nodes.
    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.node(node)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Whether `node` is `ancestor` or one of its descendants.
    #[must_use]
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    /// Whether `node` is reachable from the document root.
    #[must_use]
    pub fn is_connected(&self, node: NodeId) -> bool {
        self.contains(self.root, node)
    }

    /// Pre-order walk of `root`'s subtree, `root` included.
    #[must_use]
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if self.node(id).is_err() {
                continue;
            }
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    // --- Node data ---

    #[must_use]
    pub fn data(&self, node: NodeId) -> Option<&NodeData> {
        self.node(node).ok().map(|n| &n.data)
    }

    #[must_use]
    pub fn element(&self, node: NodeId) -> Option<&ElementData> {
        self.node(node).ok()?.element()
    }

    #[must_use]
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(ElementData::tag)
    }

    /// Concatenated text of the subtree.
    #[must_use]
    pub fn text_content(&self, node: NodeId) -> String {
        self.descendants(node)
            .into_iter()
            .filter_map(|id| match self.data(id) {
                Some(NodeData::Text(text)) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)?.attribute(name)
    }

    #[must_use]
    pub fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    pub fn set_attribute(
        &mut self,
        node: NodeId,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), DomError> {
        self.element_mut(node)?.set_attribute(name, value);
        Ok(())
    }

    pub fn remove_attribute(&mut self, node: NodeId, name: &str) -> Result<(), DomError> {
        self.element_mut(node)?.remove_attribute(name);
        Ok(())
    }

    #[must_use]
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).is_some_and(|el| el.has_class(class))
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) -> Result<(), DomError> {
        self.element_mut(node)?.add_class(class);
        Ok(())
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) -> Result<(), DomError> {
        self.element_mut(node)?.remove_class(class);
        Ok(())
    }

    #[must_use]
    pub fn style_property(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)?.style_property(name)
    }

    /// Set (`Some`) or clear (`None`) an inline style property.
    pub fn set_style_property(
        &mut self,
        node: NodeId,
        name: &str,
        value: Option<&str>,
    ) -> Result<(), DomError> {
        self.element_mut(node)?.set_style_property(name, value);
        Ok(())
    }

    // --- Focus ---

    /// Focused element; `None` means the body has focus.
    #[inline]
    #[must_use]
    pub const fn active_element(&self) -> Option<NodeId> {
        self.active
    }

    /// Whether `node` is connected and accepts programmatic focus.
    #[must_use]
    pub fn can_focus(&self, node: NodeId) -> bool {
        self.is_connected(node) && self.element(node).is_some_and(focus::can_receive_focus)
    }

    /// Move focus to `node`. Returns `false` (focus unchanged) if the node
    /// cannot take focus.
    pub fn focus(&mut self, node: NodeId) -> bool {
        if !self.can_focus(node) {
            return false;
        }
        self.active = Some(node);
        true
    }

    /// Return focus to the body.
    pub fn blur(&mut self) {
        self.active = None;
    }

    /// Tabbable descendants of `root` (excluding `root`) in document order.
    #[must_use]
    pub fn tabbable_descendants(&self, root: NodeId) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .skip(1)
            .filter(|id| self.element(*id).is_some_and(focus::is_tabbable))
            .collect()
    }

    // --- Listeners ---

    /// Attach `listener` to `node` for events of `kind`. Attaching the same
    /// pair twice is a no-op.
    pub fn add_listener(
        &mut self,
        node: NodeId,
        kind: EventKind,
        listener: ListenerId,
    ) -> Result<(), DomError> {
        self.node(node)?;
        let entry = self.listeners.entry(node).or_default();
        if !entry.contains(&(kind, listener)) {
            entry.push((kind, listener));
        }
        Ok(())
    }

    /// Detach every registration of `listener`.
    pub fn remove_listener(&mut self, listener: ListenerId) {
        self.listeners.retain(|_, entries| {
            entries.retain(|(_, l)| *l != listener);
            !entries.is_empty()
        });
    }

    /// Listeners the event reaches while bubbling from its target to the
    /// root of the target's tree (connected or not).
    #[must_use]
    pub fn dispatch(&self, event: &DomEvent) -> DispatchPath {
        let kind = event.kind();
        let mut path = DispatchPath::default();
        let mut cursor = self.node(event.target).ok().map(|_| event.target);
        while let Some(current) = cursor {
            if let Some(entries) = self.listeners.get(&current) {
                for (entry_kind, listener) in entries {
                    if *entry_kind == kind {
                        path.push(current, *listener);
                    }
                }
            }
            cursor = self.parent(current);
        }
        path
    }

    // --- Scroll lock ---

    /// Acquire the body scroll lock.
    pub fn lock_scroll(&mut self) {
        let current = self.style_property(self.body, "overflow").map(str::to_owned);
        let action = self.scroll_lock.acquire(current.as_deref());
        self.apply_overflow(action);
    }

    /// Release one hold on the body scroll lock.
    pub fn unlock_scroll(&mut self) {
        let action = self.scroll_lock.release();
        self.apply_overflow(action);
    }

    #[must_use]
    pub const fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }

    fn apply_overflow(&mut self, action: BodyOverflow) {
        let body = self.body;
        let result = match action {
            BodyOverflow::Unchanged => return,
            BodyOverflow::Lock => self.set_style_property(body, "overflow", Some(LOCKED_OVERFLOW)),
            BodyOverflow::Restore(saved) => {
                self.set_style_property(body, "overflow", saved.as_deref())
            }
        };
        debug_assert!(result.is_ok(), "body is always an element");

        #[cfg(feature = "tracing")]
        tracing::debug!(depth = self.scroll_lock.depth(), "scroll lock changed");
    }
}
