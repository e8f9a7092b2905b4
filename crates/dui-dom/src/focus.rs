//! Focusability rules.
//!
//! Two predicates matter:
//!
//! - [`is_tabbable`]: the element is part of sequential (Tab) navigation.
//!   Enabled `button`, `input`, `select`, `textarea`; `a` with `href`; any
//!   element whose `tabindex` parses to a non-negative integer.
//! - [`can_receive_focus`]: the element accepts programmatic focus. Every
//!   tabbable element, plus anything carrying a parseable `tabindex`
//!   (including negative values). Disabled form controls never do.
//!
//! Connectivity is checked by the document, not here.

use crate::node::ElementData;

const FORM_CONTROLS: [&str; 4] = ["button", "input", "select", "textarea"];

/// Parsed `tabindex`, if present and an integer.
#[must_use]
pub fn tab_index(el: &ElementData) -> Option<i32> {
    el.attribute("tabindex")?.trim().parse().ok()
}

fn is_disabled_control(el: &ElementData) -> bool {
    FORM_CONTROLS.contains(&el.tag()) && el.attribute("disabled").is_some()
}

fn is_natively_focusable(el: &ElementData) -> bool {
    if FORM_CONTROLS.contains(&el.tag()) {
        return el.attribute("disabled").is_none();
    }
    el.tag() == "a" && el.attribute("href").is_some()
}

#[must_use]
pub fn is_tabbable(el: &ElementData) -> bool {
    is_natively_focusable(el) || tab_index(el).is_some_and(|idx| idx >= 0)
}

#[must_use]
pub fn can_receive_focus(el: &ElementData) -> bool {
    if is_disabled_control(el) {
        return false;
    }
    is_natively_focusable(el) || tab_index(el).is_some()
}
