#![forbid(unsafe_code)]

//! Search widget configuration.
//!
//! [`SearchConfig`] carries the few knobs a host page may want to change:
//! which keys jump to the search field, what the empty state says, and an
//! optional cap on rendered results.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Result |
//! |---------|-------|--------|
//! | No shortcuts | `focus_shortcuts` is empty | [`ConfigError::NoShortcuts`] |
//! | Whitespace shortcut | a shortcut key is a space, tab, ... | [`ConfigError::WhitespaceShortcut`] |
//! | Zero limit | `result_limit = Some(0)` | [`ConfigError::ZeroResultLimit`] |
//! | Bad document | TOML/JSON does not parse (`config-file`) | [`ConfigError::Parse`] |

use core::fmt;

/// Default keys that move focus into the search field.
pub const DEFAULT_FOCUS_SHORTCUTS: [char; 2] = ['/', 's'];

/// Default empty-state text.
pub const DEFAULT_NO_RESULTS_MESSAGE: &str = "No results match this query.";

/// Configuration for a [`SearchWidget`](crate::SearchWidget).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config-file", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config-file", serde(default, deny_unknown_fields))]
pub struct SearchConfig {
    /// Keys that focus the search field when released outside any editable
    /// control with no modifier held.
    pub focus_shortcuts: Vec<char>,
    /// Message shown when a query matches nothing.
    pub no_results_message: String,
    /// Render at most this many results.
    pub result_limit: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            focus_shortcuts: DEFAULT_FOCUS_SHORTCUTS.to_vec(),
            no_results_message: DEFAULT_NO_RESULTS_MESSAGE.to_owned(),
            result_limit: None,
        }
    }
}

impl SearchConfig {
    /// Replace the focus shortcut keys.
    #[must_use]
    pub fn with_focus_shortcuts(mut self, keys: impl IntoIterator<Item = char>) -> Self {
        self.focus_shortcuts = keys.into_iter().collect();
        self
    }

    /// Replace the empty-state message.
    #[must_use]
    pub fn with_no_results_message(mut self, message: impl Into<String>) -> Self {
        self.no_results_message = message.into();
        self
    }

    /// Cap the number of rendered results.
    #[must_use]
    pub fn with_result_limit(mut self, limit: usize) -> Self {
        self.result_limit = Some(limit);
        self
    }

    /// Whether `key` is one of the focus shortcuts.
    #[inline]
    #[must_use]
    pub fn is_focus_shortcut(&self, key: char) -> bool {
        self.focus_shortcuts.contains(&key)
    }

    /// Check the configuration for values the widget cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.focus_shortcuts.is_empty() {
            return Err(ConfigError::NoShortcuts);
        }
        if let Some(&key) = self.focus_shortcuts.iter().find(|c| c.is_whitespace()) {
            return Err(ConfigError::WhitespaceShortcut(key));
        }
        if self.result_limit == Some(0) {
            return Err(ConfigError::ZeroResultLimit);
        }
        Ok(())
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(src).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document. Missing keys take their defaults.
    #[cfg(feature = "config-file")]
    pub fn from_json_str(src: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(src).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Error returned when a configuration is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No key would ever focus the search field.
    NoShortcuts,
    /// A shortcut key is whitespace and would fire while typing prose.
    WhitespaceShortcut(char),
    /// A limit of zero would hide every result.
    ZeroResultLimit,
    /// The configuration document could not be parsed.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoShortcuts => write!(f, "at least one focus shortcut is required"),
            Self::WhitespaceShortcut(c) => {
                write!(f, "focus shortcut {:?} is whitespace", c)
            }
            Self::ZeroResultLimit => write!(f, "result limit must be greater than zero"),
            Self::Parse(msg) => write!(f, "invalid search config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    // ── defaults ────────────────────────────────────────────────────────

    #[test]
    fn default_is_valid() {
        let config = SearchConfig::default();
        assert_eq!(config.focus_shortcuts, vec!['/', 's']);
        assert_eq!(config.no_results_message, "No results match this query.");
        assert_eq!(config.result_limit, None);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn builders_replace_fields() {
        let config = SearchConfig::default()
            .with_focus_shortcuts(['k'])
            .with_no_results_message("Nothing here")
            .with_result_limit(20);
        assert!(config.is_focus_shortcut('k'));
        assert!(!config.is_focus_shortcut('/'));
        assert_eq!(config.no_results_message, "Nothing here");
        assert_eq!(config.result_limit, Some(20));
    }

    // ── validation ──────────────────────────────────────────────────────

    #[test]
    fn rejects_empty_shortcuts() {
        let config = SearchConfig::default().with_focus_shortcuts([]);
        assert_eq!(config.validate(), Err(ConfigError::NoShortcuts));
    }

    #[test]
    fn rejects_whitespace_shortcut() {
        let config = SearchConfig::default().with_focus_shortcuts(['/', ' ']);
        assert_eq!(config.validate(), Err(ConfigError::WhitespaceShortcut(' ')));
    }

    #[test]
    fn rejects_zero_limit() {
        let config = SearchConfig::default().with_result_limit(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroResultLimit));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ConfigError::WhitespaceShortcut('\t').to_string(),
            "focus shortcut '\\t' is whitespace"
        );
        assert_eq!(
            ConfigError::Parse("eof".into()).to_string(),
            "invalid search config: eof"
        );
    }

    // ── documents ───────────────────────────────────────────────────────

    #[cfg(feature = "config-file")]
    #[test]
    fn toml_fills_defaults() {
        let config = SearchConfig::from_toml_str("result_limit = 15\n").unwrap();
        assert_eq!(config.result_limit, Some(15));
        assert_eq!(config.focus_shortcuts, vec!['/', 's']);
    }

    #[cfg(feature = "config-file")]
    #[test]
    fn json_round_trips_shortcuts() {
        let config =
            SearchConfig::from_json_str(r#"{"focus_shortcuts": ["k"], "no_results_message": "none"}"#)
                .unwrap();
        assert_eq!(config.focus_shortcuts, vec!['k']);
        assert_eq!(config.no_results_message, "none");
    }

    #[cfg(feature = "config-file")]
    #[test]
    fn documents_are_validated() {
        assert_eq!(
            SearchConfig::from_toml_str("result_limit = 0\n"),
            Err(ConfigError::ZeroResultLimit)
        );
        assert!(matches!(
            SearchConfig::from_json_str("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SearchConfig::from_toml_str("colour = 'red'\n"),
            Err(ConfigError::Parse(_))
        ));
    }
}
