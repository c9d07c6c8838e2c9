#![forbid(unsafe_code)]

//! Key routing.
//!
//! [`KeyRouter::route`] decides what an input [`Event`] means for the widget
//! given where focus is and whether the result list is showing. It never
//! mutates anything; [`SearchWidget`](crate::SearchWidget) carries out the
//! returned [`Route`].
//!
//! | Event | Focus | Results visible | Route |
//! |-------|-------|-----------------|-------|
//! | release of a shortcut key, unmodified | not editable | any | [`Route::FocusSearch`] |
//! | `Search` | any | any | [`Route::Recompute`] |
//! | any key release | search field | any | [`Route::Recompute`] |
//! | press of Escape/Up/Down, unmodified | search field | yes | [`Route::Navigate`] |
//! | `Submit` | any | any | [`Route::Submit`] |
//! | anything else | | | [`Route::Ignore`] |

use docsearch_core::{Event, Focus, KeyCode, KeyEvent, KeyEventKind};

/// A selection movement requested from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Navigation {
    Up,
    Down,
    Escape,
}

/// What the widget should do with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Move focus into the search field.
    FocusSearch,
    /// Re-rank if the query changed since the last run.
    Recompute,
    /// Forward to the selection controller.
    Navigate(Navigation),
    /// Activate the selected (or first) result.
    Submit,
    /// Not ours.
    Ignore,
}

impl Route {
    /// Whether the host's default action for the event must be suppressed.
    #[must_use]
    pub const fn prevents_default(self) -> bool {
        matches!(self, Self::FocusSearch | Self::Navigate(_) | Self::Submit)
    }
}

/// Maps events to [`Route`]s.
#[derive(Debug, Clone)]
pub struct KeyRouter {
    shortcuts: Vec<char>,
}

impl KeyRouter {
    /// Router that focuses the search field on any of `shortcuts`.
    #[must_use]
    pub fn new(shortcuts: impl IntoIterator<Item = char>) -> Self {
        Self {
            shortcuts: shortcuts.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn shortcuts(&self) -> &[char] {
        &self.shortcuts
    }

    #[must_use]
    pub fn route(&self, event: &Event, focus: Focus, results_visible: bool) -> Route {
        match *event {
            Event::Search => Route::Recompute,
            Event::Submit => Route::Submit,

            Event::Key(KeyEvent {
                code: KeyCode::Char(c),
                kind: KeyEventKind::Release,
                modifiers,
            }) if modifiers.is_empty()
                && !focus.is_editable()
                && self.shortcuts.contains(&c) =>
            {
                Route::FocusSearch
            }

            Event::Key(KeyEvent {
                kind: KeyEventKind::Release,
                ..
            }) if focus == Focus::SearchField => Route::Recompute,

            Event::Key(
                key @ KeyEvent {
                    kind: KeyEventKind::Press,
                    ..
                },
            ) if focus == Focus::SearchField && results_visible && key.is_unmodified() => {
                match key.code {
                    KeyCode::Up => Route::Navigate(Navigation::Up),
                    KeyCode::Down => Route::Navigate(Navigation::Down),
                    KeyCode::Escape => Route::Navigate(Navigation::Escape),
                    _ => Route::Ignore,
                }
            }

            Event::Key(_) => Route::Ignore,
        }
    }
}

impl Default for KeyRouter {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_FOCUS_SHORTCUTS)
    }
}
