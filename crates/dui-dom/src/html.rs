//! Deterministic HTML serialization.
//!
//! Output is stable for a given tree: attributes appear in insertion order,
//! text and attribute values are escaped, void elements have no closing
//! tag. Used for inspection and snapshot-style assertions.

use core::fmt::Write;

use v_htmlescape::escape;

use crate::document::Document;
use crate::node::{NodeData, NodeId};

const VOID_ELEMENTS: [&str; 6] = ["br", "hr", "img", "input", "link", "meta"];

impl Document {
    /// Serialize the subtree rooted at `node` (outer HTML).
    #[must_use]
    pub fn to_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_html(node, &mut out);
        out
    }

    fn write_html(&self, node: NodeId, out: &mut String) {
        match self.data(node) {
            None => {}
            Some(NodeData::Text(text)) => {
                let _ = write!(out, "{}", escape(text));
            }
            Some(NodeData::Element(el)) => {
                out.push('<');
                out.push_str(el.tag());
                for (name, value) in el.attributes() {
                    let _ = write!(out, " {name}=\"{}\"", escape(value));
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&el.tag()) {
                    return;
                }
                for child in self.children(node) {
                    self.write_html(*child, out);
                }
                let _ = write!(out, "</{}>", el.tag());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_attributes_in_order_and_escapes() {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        doc.set_attribute(div, "role", "dialog").unwrap();
        doc.set_attribute(div, "data-x", "a\"b").unwrap();
        let text = doc.create_text("1 < 2 & 3");
        doc.append_child(div, text).unwrap();
        assert_eq!(
            doc.to_html(div),
            "<div role=\"dialog\" data-x=\"a&quot;b\">1 &lt; 2 &amp; 3</div>"
        );
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let mut doc = Document::new();
        let input = doc.create_element("input");
        doc.set_attribute(input, "type", "text").unwrap();
        assert_eq!(doc.to_html(input), "<input type=\"text\">");
    }

    #[test]
    fn class_and_style_serialize_as_attributes() {
        let mut doc = Document::new();
        let body = doc.body();
        doc.add_class(body, "page").unwrap();
        doc.set_style_property(body, "overflow", Some("hidden")).unwrap();
        assert_eq!(
            doc.to_html(body),
            "<body class=\"page\" style=\"overflow: hidden;\"></body>"
        );
    }
}
