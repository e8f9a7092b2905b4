#![forbid(unsafe_code)]

//! Host input events.
//!
//! Events are plain data. A host (browser glue, test harness, showcase)
//! translates its native input into [`Event`] values and hands them to the
//! document for routing. Nothing here performs I/O.
//!
//! # Mapping to DOM event types
//!
//! | Event | DOM type |
//! |-------|----------|
//! | `Key` with `Press` or `Repeat` | `keydown` |
//! | `Key` with `Release` | `keyup` |
//! | `Mouse` with `Click(_)` | `click` |
//! | `Mouse` with `Down(_)` | `mousedown` |
//! | `Mouse` with `Up(_)` | `mouseup` |

use bitflags::bitflags;

bitflags! {
    /// Modifier keys held during a key or mouse event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const ALT   = 0b0010;
        const CTRL  = 0b0100;
        const SUPER = 0b1000;
    }
}

/// Logical key identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Escape,
    Tab,
    /// Shift+Tab as reported by hosts that fold the modifier into the code.
    BackTab,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

/// Key press phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    #[default]
    Press,
    Repeat,
    Release,
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// A key press with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
            kind: KeyEventKind::Press,
        }
    }

    /// Set the modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the phase.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Whether Shift is held, counting `BackTab` as Shift+Tab.
    #[inline]
    #[must_use]
    pub fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT) || self.code == KeyCode::BackTab
    }

    /// Whether this is a forward or backward Tab.
    #[inline]
    #[must_use]
    pub fn is_tab(&self) -> bool {
        matches!(self.code, KeyCode::Tab | KeyCode::BackTab)
    }

    /// Whether this is a key-down phase (`Press` or `Repeat`).
    #[inline]
    #[must_use]
    pub fn is_down(&self) -> bool {
        matches!(self.kind, KeyEventKind::Press | KeyEventKind::Repeat)
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Mouse event phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    Down(MouseButton),
    Up(MouseButton),
    /// A completed press and release on the same target.
    Click(MouseButton),
}

/// A pointer event in host (CSS pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub x: i32,
    pub y: i32,
    pub modifiers: Modifiers,
}

impl MouseEvent {
    #[must_use]
    pub const fn new(kind: MouseEventKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            x,
            y,
            modifiers: Modifiers::empty(),
        }
    }

    /// A primary-button click at the origin. Position rarely matters once a
    /// host has resolved the target node.
    #[must_use]
    pub const fn click() -> Self {
        Self::new(MouseEventKind::Click(MouseButton::Left), 0, 0)
    }
}

/// An input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
}

/// DOM event type an [`Event`] is delivered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    KeyDown,
    KeyUp,
    Click,
    MouseDown,
    MouseUp,
}

impl EventKind {
    /// DOM event type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::KeyDown => "keydown",
            Self::KeyUp => "keyup",
            Self::Click => "click",
            Self::MouseDown => "mousedown",
            Self::MouseUp => "mouseup",
        }
    }
}

impl Event {
    /// The DOM event type this event dispatches as.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Key(key) if key.is_down() => EventKind::KeyDown,
            Self::Key(_) => EventKind::KeyUp,
            Self::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Click(_) => EventKind::Click,
                MouseEventKind::Down(_) => EventKind::MouseDown,
                MouseEventKind::Up(_) => EventKind::MouseUp,
            },
        }
    }

    /// Shorthand for a key press with no modifiers.
    #[must_use]
    pub const fn key(code: KeyCode) -> Self {
        Self::Key(KeyEvent::new(code))
    }
}
