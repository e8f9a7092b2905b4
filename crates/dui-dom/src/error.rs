//! Document errors.
//!
//! # Failure Modes
//!
//! | Failure | Cause |
//! |---------|-------|
//! | `UnknownNode` | Id not allocated by this document |
//! | `NotAnElement` | Element-only operation on a text node |
//! | `HierarchyRequest` | Inserting a node into itself or its own subtree |
//! | `InvalidName` | Custom element name without a hyphen, or not lower-case |
//! | `AlreadyDefined` | Defining a custom element name another component owns |

use crate::node::NodeId;

/// Errors from document operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("unknown node {0}")]
    UnknownNode(NodeId),
    #[error("node {0} is not an element")]
    NotAnElement(NodeId),
    #[error("cannot insert {child} under {parent}: would create a cycle")]
    HierarchyRequest { parent: NodeId, child: NodeId },
    #[error("invalid custom element name '{0}'")]
    InvalidName(String),
    #[error("custom element '{name}' is already defined by {owner}")]
    AlreadyDefined { name: String, owner: &'static str },
}
