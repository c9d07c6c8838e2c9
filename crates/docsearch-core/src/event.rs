#![forbid(unsafe_code)]

//! Input events consumed by the search widget.
//!
//! Host event listeners (document and search-field key handlers, the native
//! `search` event, form submission) are translated into [`Event`] values so
//! routing and selection logic never touch a specific dispatch mechanism.
//! Each event is delivered together with the current [`Focus`].

use bitflags::bitflags;

bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const NONE = 0;
        const SHIFT = 1 << 0;
        const ALT = 1 << 1;
        const CTRL = 1 << 2;
        const SUPER = 1 << 3;
    }
}

/// Logical key identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    Enter,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Tab,
    Backspace,
    Delete,
    Home,
    End,
    /// Any key the widget has no use for.
    Unidentified,
}

/// Whether the key went down or came back up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    #[default]
    Press,
    Release,
}

/// A single key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Key press with no modifiers.
    #[must_use]
    pub const fn press(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Key release with no modifiers.
    #[must_use]
    pub const fn release(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Release,
        }
    }

    /// Replace the modifier set.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// True when no modifier key is held.
    #[inline]
    #[must_use]
    pub const fn is_unmodified(&self) -> bool {
        self.modifiers.is_empty()
    }
}

/// An input event delivered to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    Key(KeyEvent),
    /// Native `search` event fired by the query field.
    Search,
    /// The search form was submitted.
    Submit,
}

/// Kind of editable control that can hold keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditableKind {
    TextInput,
    TextArea,
    Select,
    Button,
}

/// Where keyboard focus is when an event fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    /// Nothing editable is focused.
    #[default]
    Document,
    /// The search query field itself.
    SearchField,
    /// Some other editable control on the page.
    Editable(EditableKind),
}

impl Focus {
    /// Whether typing would land in a control. The search field counts.
    #[must_use]
    pub const fn is_editable(self) -> bool {
        !matches!(self, Self::Document)
    }
}
