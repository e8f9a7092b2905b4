//! Renderable content for widget slots.
//!
//! Slots (a modal's body and footer, for instance) accept either plain text
//! or a small element template. Templates are plain data, built once at
//! configuration time and instantiated into the document at render time.

use dui_dom::{Document, DomError, NodeId};
use indexmap::IndexMap;

/// An element or text template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeSpec {
    Text(String),
    Element {
        tag: String,
        attributes: IndexMap<String, String>,
        children: Vec<NodeSpec>,
    },
}

impl NodeSpec {
    #[must_use]
    pub fn element(tag: impl Into<String>) -> Self {
        Self::Element {
            tag: tag.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Set an attribute. Ignored on text templates.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Self::Element { attributes, .. } = &mut self {
            attributes.insert(name.into(), value.into());
        }
        self
    }

    /// Append a child template. Ignored on text templates.
    #[must_use]
    pub fn child(mut self, child: NodeSpec) -> Self {
        if let Self::Element { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    /// Append a text child. Ignored on text templates.
    #[must_use]
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.child(Self::Text(text.into()))
    }

    /// Instantiate the template as a detached subtree.
    pub fn build(&self, doc: &mut Document) -> Result<NodeId, DomError> {
        match self {
            Self::Text(text) => Ok(doc.create_text(text.as_str())),
            Self::Element {
                tag,
                attributes,
                children,
            } => {
                let node = doc.create_element(tag);
                for (name, value) in attributes {
                    doc.set_attribute(node, name, value.as_str())?;
                }
                for child in children {
                    let child = child.build(doc)?;
                    doc.append_child(node, child)?;
                }
                Ok(node)
            }
        }
    }
}

/// Slot content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Content {
    #[default]
    Empty,
    Text(String),
    Nodes(Vec<NodeSpec>),
}

impl Content {
    /// Whether mounting would produce nothing visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.is_empty(),
            Self::Nodes(nodes) => nodes.is_empty(),
        }
    }

    /// Instantiate and append under `parent`.
    pub fn mount(&self, doc: &mut Document, parent: NodeId) -> Result<(), DomError> {
        match self {
            Self::Empty => Ok(()),
            Self::Text(text) => {
                if text.is_empty() {
                    return Ok(());
                }
                let node = doc.create_text(text.as_str());
                doc.append_child(parent, node)
            }
            Self::Nodes(nodes) => {
                for spec in nodes {
                    let node = spec.build(doc)?;
                    doc.append_child(parent, node)?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<NodeSpec> for Content {
    fn from(node: NodeSpec) -> Self {
        Self::Nodes(vec![node])
    }
}

impl From<Vec<NodeSpec>> for Content {
    fn from(nodes: Vec<NodeSpec>) -> Self {
        Self::Nodes(nodes)
    }
}
