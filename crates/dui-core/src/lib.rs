#![forbid(unsafe_code)]

//! Core input vocabulary for DUI.
//!
//! This crate provides:
//! - [`event`] for the key and pointer events a host feeds into components
//! - [`logging`] for opt-in structured logging setup

pub mod event;
pub mod logging;

pub use event::{
    Event, EventKind, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
