//! Node storage.
//!
//! Nodes live in the document arena for the lifetime of the document.
//! Detaching a node only clears its parent link; its id stays valid so a
//! component can reinsert the same subtree later.
//!
//! `class` and `style` are ordinary attributes. Class-list and inline-style
//! helpers read and rewrite those attribute strings, so serialization and
//! attribute reads always agree with them.

use core::fmt;

use indexmap::IndexMap;
use slotmap::{Key, new_key_type};

new_key_type! {
    /// Handle to a node in a [`Document`](crate::Document).
    ///
    /// The default value is the null key and never names a live node.
    pub struct NodeId;
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:?}", self.data())
    }
}

/// Element payload: tag name plus attributes in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    pub(crate) tag: String,
    pub(crate) attributes: IndexMap<String, String>,
}

impl ElementData {
    pub(crate) fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: IndexMap::new(),
        }
    }

    /// Lower-cased tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attribute value by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Set or replace an attribute. Replacing keeps the original position.
    pub(crate) fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        self.attributes.insert(name.to_owned(), value.into());
    }

    /// Remove an attribute, keeping the order of the rest.
    pub(crate) fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.shift_remove(name)
    }

    /// Class tokens in order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attribute("class")
            .unwrap_or_default()
            .split_ascii_whitespace()
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    pub(crate) fn add_class(&mut self, class: &str) {
        if class.is_empty() || self.has_class(class) {
            return;
        }
        let joined = match self.attribute("class") {
            Some(existing) if !existing.trim().is_empty() => {
                format!("{} {class}", existing.trim())
            }
            _ => class.to_owned(),
        };
        self.set_attribute("class", joined);
    }

    pub(crate) fn remove_class(&mut self, class: &str) {
        if !self.has_class(class) {
            return;
        }
        let kept: Vec<&str> = self.classes().filter(|c| *c != class).collect();
        let joined = kept.join(" ");
        self.set_attribute("class", joined);
    }

    /// Inline style declarations in order.
    pub fn style_declarations(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attribute("style")
            .unwrap_or_default()
            .split(';')
            .filter_map(|decl| {
                let (name, value) = decl.split_once(':')?;
                let name = name.trim();
                (!name.is_empty()).then(|| (name, value.trim()))
            })
    }

    #[must_use]
    pub fn style_property(&self, name: &str) -> Option<&str> {
        self.style_declarations()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    pub(crate) fn set_style_property(&mut self, name: &str, value: Option<&str>) {
        let mut decls: Vec<(String, String)> = self
            .style_declarations()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        match value {
            Some(value) => match decls.iter_mut().find(|(key, _)| key == name) {
                Some((_, slot)) => *slot = value.to_owned(),
                None => decls.push((name.to_owned(), value.to_owned())),
            },
            None => decls.retain(|(key, _)| key != name),
        }
        if decls.is_empty() {
            self.remove_attribute("style");
            return;
        }
        let joined = decls
            .iter()
            .map(|(k, v)| format!("{k}: {v};"))
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attribute("style", joined);
    }
}

/// Node payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    Element(ElementData),
    Text(String),
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) data: NodeData,
}

impl Node {
    pub(crate) fn new(data: NodeData) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            data,
        }
    }

    pub(crate) fn element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(el) => Some(el),
            NodeData::Text(_) => None,
        }
    }

    pub(crate) fn element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(el) => Some(el),
            NodeData::Text(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_is_lowercased() {
        assert_eq!(ElementData::new("BUTTON").tag(), "button");
    }

    #[test]
    fn replacing_attribute_keeps_position() {
        let mut el = ElementData::new("div");
        el.set_attribute("a", "1");
        el.set_attribute("b", "2");
        el.set_attribute("a", "3");
        let attrs: Vec<_> = el.attributes().collect();
        assert_eq!(attrs, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn class_list_is_deduplicated() {
        let mut el = ElementData::new("div");
        el.add_class("x");
        el.add_class("y");
        el.add_class("x");
        assert_eq!(el.attribute("class"), Some("x y"));
        el.remove_class("x");
        assert_eq!(el.attribute("class"), Some("y"));
        assert!(!el.has_class("x"));
    }

    #[test]
    fn empty_class_token_is_ignored() {
        let mut el = ElementData::new("div");
        el.add_class("");
        assert_eq!(el.attribute("class"), None);
    }

    #[test]
    fn style_property_roundtrip() {
        let mut el = ElementData::new("body");
        el.set_attribute("style", "color: red; overflow: auto");
        assert_eq!(el.style_property("overflow"), Some("auto"));
        el.set_style_property("overflow", Some("hidden"));
        assert_eq!(el.attribute("style"), Some("color: red; overflow: hidden;"));
        el.set_style_property("overflow", None);
        assert_eq!(el.attribute("style"), Some("color: red;"));
        el.set_style_property("color", None);
        assert_eq!(el.attribute("style"), None);
    }

    #[test]
    fn removing_attribute_keeps_order_of_rest() {
        let mut el = ElementData::new("div");
        el.set_attribute("a", "1");
        el.set_attribute("b", "2");
        el.set_attribute("c", "3");
        assert_eq!(el.remove_attribute("a"), Some("1".to_owned()));
        assert_eq!(el.remove_attribute("a"), None);
        let attrs: Vec<_> = el.attributes().collect();
        assert_eq!(attrs, vec![("b", "2"), ("c", "3")]);
    }

    #[test]
    fn null_node_id_displays_with_prefix() {
        let shown = NodeId::default().to_string();
        assert!(shown.starts_with('#'), "{shown}");
        assert!(NodeId::default().is_null());
    }
}
