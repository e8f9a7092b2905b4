#![forbid(unsafe_code)]

//! DUI public facade.
//!
//! Re-exports the event vocabulary, the headless document and the widgets
//! under one crate, plus a [`prelude`] for the common imports.
//!
//! # Example
//!
//! ```
//! use dui::prelude::*;
//!
//! let mut doc = Document::new();
//! let mut modal = Modal::new(ModalConfig::new().title("Hello").body("World"));
//! let root = modal.render(&mut doc).unwrap();
//! doc.append_child(doc.body(), root).unwrap();
//!
//! modal.open(&mut doc);
//! let escape = DomEvent::new(modal.nodes().unwrap().dialog, Event::key(KeyCode::Escape));
//! assert!(modal.handle_event(&mut doc, &escape).is_handled());
//! assert!(!modal.is_open());
//! ```

pub use dui_core::{event, logging};
pub use dui_dom as dom;
pub use dui_widgets as widgets;

pub use dui_core::event::{Event, KeyCode, KeyEvent, Modifiers, MouseEvent};
pub use dui_dom::{Document, DomError, DomEvent, NodeId};
pub use dui_widgets::modal::{ConfigError, Modal, ModalConfig, ModalOptions, ModalSize};
pub use dui_widgets::{Component, Content, EventOutcome, NodeSpec};

#[cfg(feature = "tracing-json")]
pub use dui_core::logging::init_json as init_logging;

/// Common imports.
pub mod prelude {
    pub use crate::{
        Component, Content, Document, DomEvent, Event, EventOutcome, KeyCode, KeyEvent, Modal,
        ModalConfig, ModalSize, Modifiers, MouseEvent, NodeId, NodeSpec,
    };
    pub use dui_widgets::modal::HookContext;
}
