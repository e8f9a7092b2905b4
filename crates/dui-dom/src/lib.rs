#![forbid(unsafe_code)]

//! Headless host document for DUI components.
//!
//! Components build their markup into a [`Document`], register listeners on
//! the nodes they own, and react to events routed through
//! [`Document::dispatch`]. The document is deterministic and host-driven:
//! nothing happens unless the host calls in, which makes component
//! behaviour testable without a browser.
//!
//! This crate provides:
//! - [`Document`] with a node arena, attributes, class lists, inline style
//!   and focus
//! - [`listener`] for listener registration and bubbling dispatch paths
//! - [`scroll`] for the reference-counted body scroll lock
//! - [`registry`] for process-wide custom element definitions
//! - [`html`] serialization for inspection and snapshot tests

pub mod document;
pub mod error;
pub mod focus;
pub mod html;
pub mod listener;
pub mod node;
pub mod registry;
pub mod scroll;

pub use document::Document;
pub use error::DomError;
pub use listener::{DispatchPath, DomEvent, ListenerId};
pub use node::{NodeData, NodeId};
pub use registry::ElementDefinition;
