#![no_main]

//! Drive a mounted modal with arbitrary lifecycle calls and input events.
//!
//! Checks after every step: hook counts balance with `is_open`, the scroll
//! lock depth matches, and focus never points at a detached node.

use std::cell::Cell;
use std::rc::Rc;

use arbitrary::Arbitrary;
use dui_core::event::{Event, KeyCode, KeyEvent, Modifiers, MouseEvent};
use dui_dom::{Document, DomEvent};
use dui_widgets::content::NodeSpec;
use dui_widgets::modal::{HookContext, Modal, ModalConfig};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Key {
    Tab,
    ShiftTab,
    BackTab,
    Escape,
    Enter,
}

#[derive(Debug, Arbitrary)]
enum Op {
    Open,
    Close,
    Toggle,
    Key { key: Key, target: u8 },
    Click { target: u8 },
    Focus { target: u8 },
}

#[derive(Debug, Arbitrary)]
struct Input {
    closable: bool,
    show_backdrop: bool,
    buttons: u8,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let opens = Rc::new(Cell::new(0u32));
    let closes = Rc::new(Cell::new(0u32));
    let (o, c) = (Rc::clone(&opens), Rc::clone(&closes));
    let footer: Vec<NodeSpec> = (0..input.buttons % 6)
        .map(|i| NodeSpec::element("button").with_text(format!("b{i}")))
        .collect();

    let mut doc = Document::new();
    let mut modal = Modal::new(
        ModalConfig::new()
            .title("Fuzz")
            .footer(footer)
            .closable(input.closable)
            .show_backdrop(input.show_backdrop)
            .on_open(move |_: &mut HookContext<'_>| o.set(o.get() + 1))
            .on_close(move |_: &mut HookContext<'_>| c.set(c.get() + 1)),
    );
    let Ok(root) = modal.render(&mut doc) else {
        return;
    };
    let body = doc.body();
    if doc.append_child(body, root).is_err() {
        return;
    }
    let nodes = doc.descendants(root);

    for op in input.ops.into_iter().take(256) {
        let pick = |i: u8| nodes[usize::from(i) % nodes.len()];
        match op {
            Op::Open => modal.open(&mut doc),
            Op::Close => modal.close(&mut doc),
            Op::Toggle => modal.toggle(&mut doc),
            Op::Key { key, target } => {
                let key = match key {
                    Key::Tab => KeyEvent::new(KeyCode::Tab),
                    Key::ShiftTab => KeyEvent::new(KeyCode::Tab).with_modifiers(Modifiers::SHIFT),
                    Key::BackTab => KeyEvent::new(KeyCode::BackTab),
                    Key::Escape => KeyEvent::new(KeyCode::Escape),
                    Key::Enter => KeyEvent::new(KeyCode::Enter),
                };
                let _ = modal.handle_event(&mut doc, &DomEvent::new(pick(target), Event::Key(key)));
            }
            Op::Click { target } => {
                let event = DomEvent::new(pick(target), Event::Mouse(MouseEvent::click()));
                let _ = modal.handle_event(&mut doc, &event);
            }
            Op::Focus { target } => {
                let _ = doc.focus(pick(target));
            }
        }

        assert_eq!(opens.get() - closes.get(), u32::from(modal.is_open()));
        assert_eq!(doc.scroll_lock().is_locked(), modal.is_open());
        if let Some(active) = doc.active_element() {
            assert!(doc.is_connected(active));
        }
    }
});
