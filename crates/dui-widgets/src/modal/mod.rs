#![forbid(unsafe_code)]

//! Modal dialog overlay: configuration, controller and focus trap.
//!
//! # Accessibility
//!
//! - **Dialog semantics**: `role="dialog"`, `aria-modal="true"` and
//!   `aria-labelledby` pointing at the title when one is set
//! - **Visibility marker**: `aria-hidden` mirrors the open state
//! - **Auto-focus**: first tabbable element receives focus when opened,
//!   the dialog itself when there is none
//! - **Focus trap**: Tab and Shift+Tab wrap at the edges
//! - **Focus restore**: the element focused before `open()` gets focus back
//!   on `close()` if it can still take it
//!
//! # Example
//!
//! ```
//! use dui_dom::Document;
//! use dui_widgets::content::NodeSpec;
//! use dui_widgets::modal::{Modal, ModalConfig};
//!
//! let mut doc = Document::new();
//! let mut modal = Modal::new(
//!     ModalConfig::new()
//!         .title("Delete file")
//!         .body("This cannot be undone.")
//!         .footer(NodeSpec::element("button").with_text("Delete"))
//!         .on_close(|ctx| {
//!             let body = ctx.document().body();
//!             let _ = ctx.document().remove_class(body, "is-busy");
//!         }),
//! );
//! let root = modal.render(&mut doc).unwrap();
//! doc.append_child(doc.body(), root).unwrap();
//! modal.open(&mut doc);
//! assert!(doc.scroll_lock().is_locked());
//! ```

pub mod classes;
mod config;
mod controller;
mod focus_trap;

pub use config::{
    ConfigError, HookContext, LifecycleHook, ModalConfig, ModalOptions, ModalSize, Transition,
};
pub use controller::{Modal, ModalId, ModalNodes};
pub use focus_trap::FocusTrap;
