#![forbid(unsafe_code)]

//! The modal dialog controller.
//!
//! [`Modal`] builds a backdrop plus dialog surface once, then flips it
//! between two states any number of times:
//!
//! ```text
//!            open()                     close()
//!   Closed ─────────▶ Open    Open ─────────▶ Closed
//!     ▲  open() is a no-op while Open, close() while Closed
//! ```
//!
//! `destroy()` is out of band: it detaches the subtree and releases the
//! scroll lock without touching the state or firing hooks.
//!
//! # Invariants
//!
//! - `is_open()` changes only inside `open()`/`close()` and no intermediate
//!   state is observable from hooks.
//! - `on_open` fires exactly once per Closed → Open transition, `on_close`
//!   once per Open → Closed.
//! - The prior focus is captured once per `open()` and consumed by the
//!   matching `close()`.
//! - The instance holds at most one scroll-lock acquisition, taken on open
//!   and given back on close or destroy.
//!
//! # Preconditions
//!
//! Call [`Modal::render`] before `open()`/`close()`. Without rendered nodes
//! the state machine, scroll lock and hooks still run, but no markup or
//! focus changes.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};

use dui_core::event::{Event, EventKind, KeyCode, KeyEvent};
use dui_dom::registry::{self, ElementDefinition};
use dui_dom::{Document, DomError, DomEvent, ListenerId, NodeId};

use super::classes;
use super::config::{HookContext, ModalConfig, Transition};
use super::focus_trap::FocusTrap;
use crate::{Component, EventOutcome};

/// Global counter for unique modal ids.
static MODAL_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Result of defining the container element, computed once per process.
static MODAL_ELEMENT: OnceLock<Result<ElementDefinition, DomError>> = OnceLock::new();

fn define_modal_element() -> Result<ElementDefinition, DomError> {
    MODAL_ELEMENT
        .get_or_init(|| registry::define(ElementDefinition::new(classes::MODAL_TAG, "Modal")))
        .clone()
}

/// Unique identifier of a modal instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModalId(u64);

impl ModalId {
    fn new() -> Self {
        Self(MODAL_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric id, unique within the process.
    #[inline]
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Handles to the nodes a render produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalNodes {
    /// `<dui-modal class="modal-container">` wrapper returned by `render`.
    pub container: NodeId,
    /// Present when the backdrop is shown.
    pub backdrop: Option<NodeId>,
    /// The `role="dialog"` surface.
    pub dialog: NodeId,
    /// Present when there is a title or a close control.
    pub header: Option<NodeId>,
    pub title: Option<NodeId>,
    /// Present for closable modals.
    pub close_button: Option<NodeId>,
    pub body: Option<NodeId>,
    pub footer: Option<NodeId>,
}

#[derive(Debug, Clone, Copy)]
struct ModalListeners {
    keydown: ListenerId,
    backdrop_click: ListenerId,
    close_click: ListenerId,
}

/// Focus owner at the moment `open()` ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PriorFocus {
    Body,
    Element(NodeId),
}

/// Modal dialog overlay controller.
///
/// # Example
///
/// ```
/// use dui_dom::Document;
/// use dui_widgets::modal::{Modal, ModalConfig, ModalSize};
///
/// let mut doc = Document::new();
/// let mut modal = Modal::new(
///     ModalConfig::new()
///         .title("Confirm")
///         .body("Are you sure?")
///         .size(ModalSize::Small),
/// );
/// let root = modal.render(&mut doc).unwrap();
/// doc.append_child(doc.body(), root).unwrap();
///
/// modal.open(&mut doc);
/// assert!(modal.is_open());
/// modal.close(&mut doc);
/// assert!(!modal.is_open());
/// ```
#[derive(Debug)]
pub struct Modal {
    id: ModalId,
    config: ModalConfig,
    open: bool,
    nodes: Option<ModalNodes>,
    listeners: ModalListeners,
    prior_focus: Option<PriorFocus>,
    holds_scroll_lock: bool,
}

impl Modal {
    /// Create a closed, unrendered modal.
    #[must_use]
    pub fn new(config: ModalConfig) -> Self {
        Self {
            id: ModalId::new(),
            config,
            open: false,
            nodes: None,
            listeners: ModalListeners {
                keydown: ListenerId::new(),
                backdrop_click: ListenerId::new(),
                close_click: ListenerId::new(),
            },
            prior_focus: None,
            holds_scroll_lock: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> ModalId {
        self.id
    }

    /// Whether the dialog is currently shown.
    #[inline]
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// The configuration this modal was built from.
    #[must_use]
    pub const fn config(&self) -> &ModalConfig {
        &self.config
    }

    /// Nodes from the most recent render.
    #[must_use]
    pub const fn nodes(&self) -> Option<&ModalNodes> {
        self.nodes.as_ref()
    }

    /// Build the backdrop and dialog as a detached `<dui-modal>` subtree.
    ///
    /// Call once per instance. A second call builds an independent subtree
    /// and the instance tracks the newer one; listeners on both route here.
    pub fn render(&mut self, doc: &mut Document) -> Result<NodeId, DomError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Modal",
            id = self.id.id(),
            size = self.config.size.as_str()
        )
        .entered();

        define_modal_element()?;
        let nodes = self.build(doc)?;
        self.nodes = Some(nodes);
        Ok(nodes.container)
    }

    fn build(&self, doc: &mut Document) -> Result<ModalNodes, DomError> {
        let config = &self.config;
        let container = doc.create_element(classes::MODAL_TAG);
        doc.add_class(container, classes::CONTAINER)?;
        doc.set_attribute(container, "data-modal-id", self.id.id().to_string())?;

        let backdrop = if config.show_backdrop {
            let backdrop = doc.create_element("div");
            doc.add_class(backdrop, classes::BACKDROP)?;
            doc.set_attribute(backdrop, "aria-hidden", "true")?;
            if config.closable {
                doc.add_listener(backdrop, EventKind::Click, self.listeners.backdrop_click)?;
            }
            doc.append_child(container, backdrop)?;
            Some(backdrop)
        } else {
            None
        };

        let dialog = doc.create_element("div");
        doc.set_attribute(dialog, "role", "dialog")?;
        doc.set_attribute(dialog, "aria-modal", "true")?;
        doc.set_attribute(dialog, "aria-hidden", "true")?;
        doc.set_attribute(dialog, "tabindex", "-1")?;
        let title_id = (!config.title.is_empty())
            .then(|| format!("modal-{}-title", self.id.id()));
        if let Some(title_id) = &title_id {
            doc.set_attribute(dialog, "aria-labelledby", title_id.as_str())?;
        }
        for (name, value) in &config.attributes {
            doc.set_attribute(dialog, name, value.as_str())?;
        }
        doc.add_class(dialog, classes::DIALOG)?;
        doc.add_class(dialog, config.size.class())?;
        for class in &config.class_names {
            doc.add_class(dialog, class)?;
        }
        doc.add_listener(dialog, EventKind::KeyDown, self.listeners.keydown)?;
        doc.append_child(container, dialog)?;

        let (mut header, mut title, mut close_button) = (None, None, None);
        if title_id.is_some() || config.closable {
            let block = doc.create_element("div");
            doc.add_class(block, classes::HEADER)?;
            if let Some(title_id) = &title_id {
                let heading = doc.create_element("h2");
                doc.add_class(heading, classes::TITLE)?;
                doc.set_attribute(heading, "id", title_id.as_str())?;
                let text = doc.create_text(config.title.as_str());
                doc.append_child(heading, text)?;
                doc.append_child(block, heading)?;
                title = Some(heading);
            }
            if config.closable {
                let button = doc.create_element("button");
                doc.set_attribute(button, "type", "button")?;
                doc.add_class(button, classes::CLOSE)?;
                doc.set_attribute(button, "aria-label", classes::CLOSE_LABEL)?;
                let glyph = doc.create_text(classes::CLOSE_GLYPH);
                doc.append_child(button, glyph)?;
                doc.add_listener(button, EventKind::Click, self.listeners.close_click)?;
                doc.append_child(block, button)?;
                close_button = Some(button);
            }
            doc.append_child(dialog, block)?;
            header = Some(block);
        }

        let body = self.slot(doc, dialog, classes::BODY, &config.body)?;
        let footer = self.slot(doc, dialog, classes::FOOTER, &config.footer)?;

        Ok(ModalNodes {
            container,
            backdrop,
            dialog,
            header,
            title,
            close_button,
            body,
            footer,
        })
    }

    fn slot(
        &self,
        doc: &mut Document,
        dialog: NodeId,
        class: &str,
        content: &crate::content::Content,
    ) -> Result<Option<NodeId>, DomError> {
        if content.is_empty() {
            return Ok(None);
        }
        let block = doc.create_element("div");
        doc.add_class(block, class)?;
        content.mount(doc, block)?;
        doc.append_child(dialog, block)?;
        Ok(Some(block))
    }

    /// Show the dialog. No-op while open.
    pub fn open(&mut self, doc: &mut Document) {
        self.run(doc, Transition::Open);
    }

    /// Hide the dialog. No-op while closed.
    pub fn close(&mut self, doc: &mut Document) {
        self.run(doc, Transition::Close);
    }

    /// Close if open, open otherwise.
    pub fn toggle(&mut self, doc: &mut Document) {
        if self.open {
            self.close(doc);
        } else {
            self.open(doc);
        }
    }

    /// Detach the subtree and release this instance's scroll lock.
    ///
    /// Leaves `is_open()` untouched and fires no hook; call `close()` first
    /// when a close notification is wanted.
    pub fn destroy(&mut self, doc: &mut Document) {
        #[cfg(feature = "tracing")]
        tracing::debug!(id = self.id.id(), open = self.open, "modal destroyed");

        if let Some(nodes) = self.nodes {
            note(doc.remove(nodes.container));
        }
        self.release_scroll(doc);
    }

    /// Apply `first`, then any transitions hooks request, re-reading state
    /// before each one.
    fn run(&mut self, doc: &mut Document, first: Transition) {
        let mut next = Some(first);
        while let Some(transition) = next.take() {
            next = match transition {
                Transition::Open => self.open_once(doc),
                Transition::Close => self.close_once(doc),
            };
        }
    }

    fn open_once(&mut self, doc: &mut Document) -> Option<Transition> {
        if self.open {
            return None;
        }

        #[cfg(feature = "tracing")]
        let _span =
            tracing::debug_span!("widget_lifecycle", widget = "Modal", id = self.id.id()).entered();

        self.prior_focus = Some(match doc.active_element() {
            Some(node) => PriorFocus::Element(node),
            None => PriorFocus::Body,
        });
        self.open = true;

        if let Some(nodes) = self.nodes {
            note(doc.set_attribute(nodes.dialog, "aria-hidden", "false"));
            note(doc.add_class(nodes.dialog, classes::DIALOG_OPEN));
            if let Some(backdrop) = nodes.backdrop {
                note(doc.add_class(backdrop, classes::BACKDROP_OPEN));
            }
            let _focused = FocusTrap::new(nodes.dialog).focus_initial(doc);

            #[cfg(feature = "tracing")]
            tracing::trace!(focused = ?_focused, "initial focus");
        }

        if !self.holds_scroll_lock {
            doc.lock_scroll();
            self.holds_scroll_lock = true;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("modal opened");

        let hook = self.config.on_open.as_mut()?;
        let mut ctx = HookContext::new(doc);
        hook(&mut ctx);
        ctx.into_request()
    }

    fn close_once(&mut self, doc: &mut Document) -> Option<Transition> {
        if !self.open {
            return None;
        }

        #[cfg(feature = "tracing")]
        let _span =
            tracing::debug_span!("widget_lifecycle", widget = "Modal", id = self.id.id()).entered();

        self.open = false;

        if let Some(nodes) = self.nodes {
            note(doc.set_attribute(nodes.dialog, "aria-hidden", "true"));
            note(doc.remove_class(nodes.dialog, classes::DIALOG_OPEN));
            if let Some(backdrop) = nodes.backdrop {
                note(doc.remove_class(backdrop, classes::BACKDROP_OPEN));
            }
        }

        self.release_scroll(doc);
        self.restore_focus(doc);

        #[cfg(feature = "tracing")]
        tracing::debug!("modal closed");

        let hook = self.config.on_close.as_mut()?;
        let mut ctx = HookContext::new(doc);
        hook(&mut ctx);
        ctx.into_request()
    }

    fn release_scroll(&mut self, doc: &mut Document) {
        if self.holds_scroll_lock {
            doc.unlock_scroll();
            self.holds_scroll_lock = false;
        }
    }

    fn restore_focus(&mut self, doc: &mut Document) {
        match self.prior_focus.take() {
            Some(PriorFocus::Element(node)) => {
                if !doc.focus(node) {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(node = %node, "prior focus gone, not restoring");
                }
            }
            Some(PriorFocus::Body) => {
                let inside = self
                    .nodes
                    .is_some_and(|nodes| FocusTrap::new(nodes.container).holds_focus(doc));
                if inside {
                    doc.blur();
                }
            }
            None => {}
        }
    }

    /// React to an event the host routed to `event.target`.
    ///
    /// Only events reaching listeners this modal registered are considered:
    /// key-downs inside the dialog (Enter or Space on the close control
    /// activates it), clicks on the close control, and clicks on the
    /// backdrop (closable modals only).
    pub fn handle_event(&mut self, doc: &mut Document, event: &DomEvent) -> EventOutcome {
        let path = doc.dispatch(event);
        match event.event {
            Event::Key(key) if path.reaches(self.listeners.keydown) => {
                self.handle_key(doc, key, event.target)
            }
            Event::Mouse(_) if event.kind() == EventKind::Click => {
                let close_clicked = path.reaches(self.listeners.close_click);
                let backdrop_clicked =
                    self.config.closable && path.reaches(self.listeners.backdrop_click);
                if close_clicked || backdrop_clicked {
                    self.close(doc);
                    EventOutcome::HANDLED
                } else {
                    EventOutcome::empty()
                }
            }
            _ => EventOutcome::empty(),
        }
    }

    fn handle_key(&mut self, doc: &mut Document, key: KeyEvent, target: NodeId) -> EventOutcome {
        if !self.open {
            return EventOutcome::empty();
        }
        match key.code {
            KeyCode::Escape if self.config.closable => {
                self.close(doc);
                EventOutcome::all()
            }
            // Enter and Space activate a focused close control.
            KeyCode::Enter | KeyCode::Char(' ') if self.targets_close_button(doc, target) => {
                self.close(doc);
                EventOutcome::HANDLED | EventOutcome::PREVENT_DEFAULT
            }
            KeyCode::Tab | KeyCode::BackTab => {
                let Some(nodes) = self.nodes else {
                    return EventOutcome::empty();
                };
                let trap = FocusTrap::new(nodes.dialog);
                match trap.wrap_target(doc, doc.active_element(), key.shift()) {
                    Some(target) => {
                        doc.focus(target);
                        EventOutcome::HANDLED | EventOutcome::PREVENT_DEFAULT
                    }
                    None => EventOutcome::empty(),
                }
            }
            _ => EventOutcome::empty(),
        }
    }

    fn targets_close_button(&self, doc: &Document, target: NodeId) -> bool {
        self.nodes
            .and_then(|nodes| nodes.close_button)
            .is_some_and(|button| doc.contains(button, target))
    }
}

impl Component for Modal {
    fn render(&mut self, doc: &mut Document) -> Result<NodeId, DomError> {
        Modal::render(self, doc)
    }

    fn handle_event(&mut self, doc: &mut Document, event: &DomEvent) -> EventOutcome {
        Modal::handle_event(self, doc, event)
    }
}

/// Document operations on nodes this modal created cannot fail; log if one
/// ever does.
fn note(result: Result<(), DomError>) {
    if let Err(_err) = result {
        #[cfg(feature = "tracing")]
        tracing::warn!(error = %_err, "modal dom update failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::ModalSize;
    use dui_core::event::{Modifiers, MouseEvent};
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, impl FnMut(&mut HookContext<'_>) + 'static) {
        let count = Rc::new(Cell::new(0));
        let handle = Rc::clone(&count);
        (count, move |_: &mut HookContext<'_>| {
            handle.set(handle.get() + 1);
        })
    }

    fn mounted(config: ModalConfig) -> (Document, Modal) {
        let mut doc = Document::new();
        let mut modal = Modal::new(config);
        let root = modal.render(&mut doc).unwrap();
        doc.append_child(doc.body(), root).unwrap();
        (doc, modal)
    }

    fn key(modal: &Modal, code: KeyCode, modifiers: Modifiers) -> DomEvent {
        let target = modal.nodes().unwrap().dialog;
        DomEvent::new(
            target,
            Event::Key(KeyEvent::new(code).with_modifiers(modifiers)),
        )
    }

    #[test]
    fn starts_closed() {
        let (_doc, modal) = mounted(ModalConfig::new());
        assert!(!modal.is_open());
    }

    #[test]
    fn modal_ids_are_unique() {
        let a = Modal::new(ModalConfig::new());
        let b = Modal::new(ModalConfig::new());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn container_element_is_defined() {
        let (doc, modal) = mounted(ModalConfig::new());
        let container = modal.nodes().unwrap().container;
        assert_eq!(doc.tag(container), Some(classes::MODAL_TAG));
        assert!(doc.has_class(container, classes::CONTAINER));
        assert_eq!(registry::owner_of(classes::MODAL_TAG), Some("Modal"));
    }

    #[test]
    fn render_twice_builds_independent_subtrees() {
        let mut doc = Document::new();
        let mut modal = Modal::new(ModalConfig::new().title("T"));
        let first = modal.render(&mut doc).unwrap();
        let second = modal.render(&mut doc).unwrap();
        assert_ne!(first, second);
        assert_eq!(modal.nodes().unwrap().container, second);
    }

    #[test]
    fn open_twice_fires_hook_once() {
        let (opened, hook) = counter();
        let (mut doc, mut modal) = mounted(ModalConfig::new().on_open(hook));
        modal.open(&mut doc);
        modal.open(&mut doc);
        assert!(modal.is_open());
        assert_eq!(opened.get(), 1);
    }

    #[test]
    fn close_twice_fires_hook_once() {
        let (closed, hook) = counter();
        let (mut doc, mut modal) = mounted(ModalConfig::new().on_close(hook));
        modal.close(&mut doc);
        assert_eq!(closed.get(), 0);
        modal.open(&mut doc);
        modal.close(&mut doc);
        modal.close(&mut doc);
        assert_eq!(closed.get(), 1);
    }

    #[test]
    fn toggle_alternates() {
        let (mut doc, mut modal) = mounted(ModalConfig::new());
        modal.toggle(&mut doc);
        assert!(modal.is_open());
        modal.toggle(&mut doc);
        assert!(!modal.is_open());
    }

    #[test]
    fn open_updates_markers_and_classes() {
        let (mut doc, mut modal) = mounted(ModalConfig::new().size(ModalSize::Large));
        let nodes = *modal.nodes().unwrap();
        assert_eq!(doc.attribute(nodes.dialog, "aria-hidden"), Some("true"));
        modal.open(&mut doc);
        assert_eq!(doc.attribute(nodes.dialog, "aria-hidden"), Some("false"));
        assert!(doc.has_class(nodes.dialog, classes::DIALOG_OPEN));
        assert!(doc.has_class(nodes.backdrop.unwrap(), classes::BACKDROP_OPEN));
        assert!(doc.has_class(nodes.dialog, classes::SIZE_LARGE));
        modal.close(&mut doc);
        assert_eq!(doc.attribute(nodes.dialog, "aria-hidden"), Some("true"));
        assert!(!doc.has_class(nodes.dialog, classes::DIALOG_OPEN));
        assert!(!doc.has_class(nodes.backdrop.unwrap(), classes::BACKDROP_OPEN));
        assert_eq!(doc.attribute(nodes.backdrop.unwrap(), "aria-hidden"), Some("true"));
    }

    #[test]
    fn escape_respects_closable() {
        let (mut doc, mut modal) = mounted(ModalConfig::new().closable(false));
        modal.open(&mut doc);
        let event = key(&modal, KeyCode::Escape, Modifiers::empty());
        assert_eq!(modal.handle_event(&mut doc, &event), EventOutcome::empty());
        assert!(modal.is_open());

        let (closed, hook) = counter();
        let (mut doc, mut modal) = mounted(ModalConfig::new().on_close(hook));
        modal.open(&mut doc);
        let event = key(&modal, KeyCode::Escape, Modifiers::empty());
        assert_eq!(modal.handle_event(&mut doc, &event), EventOutcome::all());
        assert!(!modal.is_open());
        assert_eq!(closed.get(), 1);
    }

    #[test]
    fn keys_are_ignored_while_closed() {
        let (mut doc, mut modal) = mounted(ModalConfig::new());
        let event = key(&modal, KeyCode::Escape, Modifiers::empty());
        assert_eq!(modal.handle_event(&mut doc, &event), EventOutcome::empty());
        let tab = key(&modal, KeyCode::Tab, Modifiers::empty());
        assert_eq!(modal.handle_event(&mut doc, &tab), EventOutcome::empty());
    }

    #[test]
    fn backdrop_click_respects_closable() {
        let (mut doc, mut modal) = mounted(ModalConfig::new());
        modal.open(&mut doc);
        let backdrop = modal.nodes().unwrap().backdrop.unwrap();
        let click = DomEvent::new(backdrop, Event::Mouse(MouseEvent::click()));
        assert!(modal.handle_event(&mut doc, &click).is_handled());
        assert!(!modal.is_open());

        let (mut doc, mut modal) = mounted(ModalConfig::new().closable(false));
        modal.open(&mut doc);
        let backdrop = modal.nodes().unwrap().backdrop.unwrap();
        let click = DomEvent::new(backdrop, Event::Mouse(MouseEvent::click()));
        assert!(!modal.handle_event(&mut doc, &click).is_handled());
        assert!(modal.is_open());
    }

    #[test]
    fn click_inside_dialog_does_not_close() {
        let (mut doc, mut modal) = mounted(ModalConfig::new().body("text"));
        modal.open(&mut doc);
        let body = modal.nodes().unwrap().body.unwrap();
        let click = DomEvent::new(body, Event::Mouse(MouseEvent::click()));
        assert!(!modal.handle_event(&mut doc, &click).is_handled());
        assert!(modal.is_open());
    }

    #[test]
    fn close_control_closes() {
        let (mut doc, mut modal) = mounted(ModalConfig::new());
        modal.open(&mut doc);
        let close = modal.nodes().unwrap().close_button.unwrap();
        let glyph = doc.children(close)[0];
        let click = DomEvent::new(glyph, Event::Mouse(MouseEvent::click()));
        assert!(modal.handle_event(&mut doc, &click).is_handled());
        assert!(!modal.is_open());
    }

    #[test]
    fn enter_and_space_activate_close_control() {
        for code in [KeyCode::Enter, KeyCode::Char(' ')] {
            let (closed, hook) = counter();
            let (mut doc, mut modal) = mounted(ModalConfig::new().title("Confirm").on_close(hook));
            modal.open(&mut doc);
            let close = modal.nodes().unwrap().close_button.unwrap();
            assert_eq!(doc.active_element(), Some(close));
            let press = DomEvent::new(close, Event::key(code));
            assert_eq!(
                modal.handle_event(&mut doc, &press),
                EventOutcome::HANDLED | EventOutcome::PREVENT_DEFAULT
            );
            assert!(!modal.is_open(), "{code:?}");
            assert_eq!(closed.get(), 1);
        }
    }

    #[test]
    fn enter_outside_close_control_is_ignored() {
        let (mut doc, mut modal) = mounted(ModalConfig::new().title("T").body("text"));
        modal.open(&mut doc);
        let nodes = *modal.nodes().unwrap();
        for target in [nodes.dialog, nodes.body.unwrap()] {
            let press = DomEvent::new(target, Event::key(KeyCode::Enter));
            assert_eq!(modal.handle_event(&mut doc, &press), EventOutcome::empty());
        }
        assert!(modal.is_open());
    }

    #[test]
    fn open_without_render_only_moves_state() {
        let mut doc = Document::new();
        let (opened, hook) = counter();
        let mut modal = Modal::new(ModalConfig::new().on_open(hook));
        modal.open(&mut doc);
        assert!(modal.is_open());
        assert_eq!(opened.get(), 1);
        assert!(doc.scroll_lock().is_locked());
        modal.close(&mut doc);
        assert!(!doc.scroll_lock().is_locked());
    }

    #[test]
    fn reopen_requested_from_close_hook() {
        let reopen = Rc::new(Cell::new(true));
        let flag = Rc::clone(&reopen);
        let (opened, open_hook) = counter();
        let (mut doc, mut modal) = mounted(ModalConfig::new().on_open(open_hook).on_close(
            move |ctx: &mut HookContext<'_>| {
                if flag.replace(false) {
                    ctx.request_open();
                }
            },
        ));
        modal.open(&mut doc);
        modal.close(&mut doc);
        assert!(modal.is_open(), "close hook reopened");
        assert_eq!(opened.get(), 2);
        assert!(doc.scroll_lock().is_locked());
        modal.close(&mut doc);
        assert!(!modal.is_open());
        assert!(!doc.scroll_lock().is_locked());
    }

    #[test]
    fn request_matching_current_state_is_noop() {
        let (closed, close_hook) = counter();
        let (mut doc, mut modal) = mounted(
            ModalConfig::new()
                .on_open(|ctx: &mut HookContext<'_>| ctx.request_open())
                .on_close(close_hook),
        );
        modal.open(&mut doc);
        assert!(modal.is_open());
        assert_eq!(closed.get(), 0);
    }

    #[test]
    fn hooks_can_touch_the_document() {
        let (mut doc, mut modal) = mounted(ModalConfig::new().on_open(
            |ctx: &mut HookContext<'_>| {
                let body = ctx.document().body();
                ctx.document().add_class(body, "has-modal").unwrap();
            },
        ));
        modal.open(&mut doc);
        assert!(doc.has_class(doc.body(), "has-modal"));
    }

    #[test]
    fn destroy_detaches_without_closing() {
        let (closed, hook) = counter();
        let (mut doc, mut modal) = mounted(ModalConfig::new().on_close(hook));
        modal.open(&mut doc);
        modal.destroy(&mut doc);
        let container = modal.nodes().unwrap().container;
        assert!(!doc.is_connected(container));
        assert!(modal.is_open());
        assert_eq!(closed.get(), 0);
        assert!(!doc.scroll_lock().is_locked());
        assert_eq!(doc.active_element(), None);

        // A later close fires the hook but does not release the lock twice.
        doc.lock_scroll();
        modal.close(&mut doc);
        assert_eq!(closed.get(), 1);
        assert!(doc.scroll_lock().is_locked());
    }

    #[test]
    fn shift_tab_via_backtab_wraps() {
        let (mut doc, mut modal) = mounted(
            ModalConfig::new()
                .title("T")
                .footer(crate::content::NodeSpec::element("button").with_text("OK")),
        );
        modal.open(&mut doc);
        let nodes = *modal.nodes().unwrap();
        let close = nodes.close_button.unwrap();
        let ok = doc.children(nodes.footer.unwrap())[0];
        assert_eq!(doc.active_element(), Some(close));
        let back = key(&modal, KeyCode::BackTab, Modifiers::empty());
        let outcome = modal.handle_event(&mut doc, &back);
        assert!(outcome.contains(EventOutcome::PREVENT_DEFAULT));
        assert_eq!(doc.active_element(), Some(ok));
    }

    #[cfg(feature = "tracing")]
    #[test]
    #[tracing_test::traced_test]
    fn lifecycle_is_logged() {
        let (mut doc, mut modal) = mounted(ModalConfig::new());
        modal.open(&mut doc);
        modal.close(&mut doc);
        assert!(logs_contain("modal opened"));
        assert!(logs_contain("modal closed"));
    }
}
