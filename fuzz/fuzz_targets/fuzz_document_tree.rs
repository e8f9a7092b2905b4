#![no_main]

//! Arbitrary tree edits must never panic and must keep the tree acyclic.

use arbitrary::Arbitrary;
use dui_dom::{Document, NodeId};
use libfuzzer_sys::fuzz_target;

const TAGS: [&str; 5] = ["div", "button", "input", "a", "span"];

#[derive(Debug, Arbitrary)]
enum Op {
    Create { tag: u8 },
    Text { len: u8 },
    Append { parent: u8, child: u8 },
    Remove { node: u8 },
    Attr { node: u8, tabindex: i8 },
    Class { node: u8, on: bool },
    Focus { node: u8 },
    Lock,
    Unlock,
}

fuzz_target!(|ops: Vec<Op>| {
    let mut doc = Document::new();
    let mut nodes = vec![doc.body()];
    let mut locks = 0u32;

    for op in ops.into_iter().take(512) {
        let pick = |i: u8, nodes: &[NodeId]| nodes[usize::from(i) % nodes.len()];
        match op {
            Op::Create { tag } => nodes.push(doc.create_element(TAGS[usize::from(tag) % TAGS.len()])),
            Op::Text { len } => nodes.push(doc.create_text("x".repeat(usize::from(len % 8)))),
            Op::Append { parent, child } => {
                let _ = doc.append_child(pick(parent, &nodes), pick(child, &nodes));
            }
            Op::Remove { node } => {
                let _ = doc.remove(pick(node, &nodes));
            }
            Op::Attr { node, tabindex } => {
                let _ = doc.set_attribute(pick(node, &nodes), "tabindex", tabindex.to_string());
            }
            Op::Class { node, on } => {
                let node = pick(node, &nodes);
                let _ = if on {
                    doc.add_class(node, "fuzz")
                } else {
                    doc.remove_class(node, "fuzz")
                };
            }
            Op::Focus { node } => {
                let _ = doc.focus(pick(node, &nodes));
            }
            Op::Lock => {
                doc.lock_scroll();
                locks += 1;
            }
            Op::Unlock => {
                doc.unlock_scroll();
                locks = locks.saturating_sub(1);
            }
        }

        for &node in &nodes {
            if let Some(parent) = doc.parent(node) {
                assert!(!doc.contains(node, parent));
            }
        }
        assert_eq!(doc.scroll_lock().depth(), locks);
        let _ = doc.to_html(doc.root());
    }
});
