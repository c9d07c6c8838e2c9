#![forbid(unsafe_code)]

//! Host input records.
//!
//! The page's event listeners forward each `keyup`, `keydown`, `search` and
//! `submit` as one flat JSON record:
//!
//! ```json
//! { "type": "keyup", "key": "ArrowDown", "ctrl": false, "alt": false,
//!   "shift": false, "meta": false, "focus": "search", "query": "ord" }
//! ```
//!
//! `key` follows `KeyboardEvent.key`. `focus` is `"search"` for the query
//! field, the lowercase tag name of any other focused element, or absent.
//! Elements other than `input`, `textarea`, `select` and `button` count as
//! document focus. Every field except `type` is optional.

use crate::error::InputError;
use docsearch_core::{EditableKind, Event, Focus, KeyCode, KeyEvent, Modifiers};
use serde::{Deserialize, Serialize};

/// One raw input record as the page sends it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HostInput {
    #[serde(rename = "type")]
    pub kind: String,
    pub key: Option<String>,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
    pub focus: Option<String>,
    pub query: String,
}

/// A decoded input record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub event: Event,
    pub focus: Focus,
    pub query: String,
}

impl HostInput {
    /// Decode a JSON record.
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Translate into a widget event.
    pub fn parse(&self) -> Result<ParsedInput, InputError> {
        let event = match self.kind.as_str() {
            "keydown" => {
                Event::Key(KeyEvent::press(self.key_code()?).with_modifiers(self.modifiers()))
            }
            "keyup" => {
                Event::Key(KeyEvent::release(self.key_code()?).with_modifiers(self.modifiers()))
            }
            "search" => Event::Search,
            "submit" => Event::Submit,
            other => return Err(InputError::UnknownEventType(other.to_owned())),
        };
        Ok(ParsedInput {
            event,
            focus: parse_focus(self.focus.as_deref()),
            query: self.query.clone(),
        })
    }

    fn key_code(&self) -> Result<KeyCode, InputError> {
        self.key
            .as_deref()
            .map(parse_key)
            .ok_or(InputError::MissingKey)
    }

    fn modifiers(&self) -> Modifiers {
        let mut mods = Modifiers::NONE;
        mods.set(Modifiers::CTRL, self.ctrl);
        mods.set(Modifiers::ALT, self.alt);
        mods.set(Modifiers::SHIFT, self.shift);
        mods.set(Modifiers::SUPER, self.meta);
        mods
    }
}

/// Map a `KeyboardEvent.key` value.
#[must_use]
pub fn parse_key(key: &str) -> KeyCode {
    match key {
        "Enter" => KeyCode::Enter,
        "Escape" | "Esc" => KeyCode::Escape,
        "ArrowUp" | "Up" => KeyCode::Up,
        "ArrowDown" | "Down" => KeyCode::Down,
        "ArrowLeft" | "Left" => KeyCode::Left,
        "ArrowRight" | "Right" => KeyCode::Right,
        "Tab" => KeyCode::Tab,
        "Backspace" => KeyCode::Backspace,
        "Delete" | "Del" => KeyCode::Delete,
        "Home" => KeyCode::Home,
        "End" => KeyCode::End,
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => KeyCode::Unidentified,
            }
        }
    }
}

/// Map a focus descriptor.
#[must_use]
pub fn parse_focus(focus: Option<&str>) -> Focus {
    let Some(focus) = focus else {
        return Focus::Document;
    };
    if focus.eq_ignore_ascii_case("search") {
        Focus::SearchField
    } else if focus.eq_ignore_ascii_case("input") {
        Focus::Editable(EditableKind::TextInput)
    } else if focus.eq_ignore_ascii_case("textarea") {
        Focus::Editable(EditableKind::TextArea)
    } else if focus.eq_ignore_ascii_case("select") {
        Focus::Editable(EditableKind::Select)
    } else if focus.eq_ignore_ascii_case("button") {
        Focus::Editable(EditableKind::Button)
    } else {
        Focus::Document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsearch_core::KeyEventKind;

    fn parse(json: &str) -> Result<ParsedInput, InputError> {
        HostInput::from_json(json)?.parse()
    }

    #[test]
    fn keyup_in_search_field() {
        let input = parse(r#"{"type":"keyup","key":"d","focus":"search","query":"ord"}"#).unwrap();
        assert_eq!(input.event, Event::Key(KeyEvent::release(KeyCode::Char('d'))));
        assert_eq!(input.focus, Focus::SearchField);
        assert_eq!(input.query, "ord");
    }

    #[test]
    fn keydown_with_modifiers() {
        let input = parse(r#"{"type":"keydown","key":"ArrowDown","shift":true,"meta":true}"#).unwrap();
        let Event::Key(key) = input.event else {
            panic!("expected key event");
        };
        assert_eq!(key.code, KeyCode::Down);
        assert_eq!(key.kind, KeyEventKind::Press);
        assert_eq!(key.modifiers, Modifiers::SHIFT | Modifiers::SUPER);
        assert_eq!(input.focus, Focus::Document);
    }

    #[test]
    fn search_and_submit_need_no_key() {
        assert_eq!(parse(r#"{"type":"search","query":"x"}"#).unwrap().event, Event::Search);
        assert_eq!(parse(r#"{"type":"submit"}"#).unwrap().event, Event::Submit);
    }

    #[test]
    fn named_and_unknown_keys() {
        assert_eq!(parse_key("Escape"), KeyCode::Escape);
        assert_eq!(parse_key("Esc"), KeyCode::Escape);
        assert_eq!(parse_key("ArrowUp"), KeyCode::Up);
        assert_eq!(parse_key("/"), KeyCode::Char('/'));
        assert_eq!(parse_key("é"), KeyCode::Char('é'));
        assert_eq!(parse_key("F5"), KeyCode::Unidentified);
        assert_eq!(parse_key(""), KeyCode::Unidentified);
    }

    #[test]
    fn focus_targets() {
        assert_eq!(parse_focus(Some("TEXTAREA")), Focus::Editable(EditableKind::TextArea));
        assert_eq!(parse_focus(Some("select")), Focus::Editable(EditableKind::Select));
        assert_eq!(parse_focus(Some("button")), Focus::Editable(EditableKind::Button));
        assert_eq!(parse_focus(Some("a")), Focus::Document);
        assert_eq!(parse_focus(None), Focus::Document);
    }

    #[test]
    fn rejected_records() {
        assert!(matches!(
            parse(r#"{"type":"click"}"#),
            Err(InputError::UnknownEventType(t)) if t == "click"
        ));
        assert!(matches!(parse(r#"{"type":"keyup"}"#), Err(InputError::MissingKey)));
        assert!(matches!(parse("[1,2]"), Err(InputError::Decode(_))));
        assert!(matches!(parse(r#"{"type":"keyup","ctrl":"yes"}"#), Err(InputError::Decode(_))));
    }
}
