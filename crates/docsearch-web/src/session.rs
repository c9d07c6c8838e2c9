#![forbid(unsafe_code)]

//! Host-driven search session.
//!
//! [`WebSession`] is the whole widget behind a JSON boundary: the page feeds
//! it the catalog document and one record per input event, and applies the
//! [`HostCommand`]s it gets back. The session never calls into the page.
//!
//! # Failure Modes
//!
//! | Failure | Result | Session state |
//! |---------|--------|---------------|
//! | Bad catalog JSON | [`CatalogError`] | unchanged; still accepting input |
//! | Bad input record | [`InputError`] | unchanged |

use crate::catalog::parse_catalog;
use crate::command::{CommandBuffer, HostCommand};
use crate::error::{CatalogError, InputError};
use crate::input::HostInput;
use docsearch_core::Catalog;
use docsearch_widgets::{ConfigError, InputContext, SearchConfig, SearchWidget};
use serde::{Deserialize, Serialize};

/// The page's reaction to one input record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dispatch {
    /// Call `preventDefault()` on the originating DOM event.
    pub prevent_default: bool,
    pub commands: Vec<HostCommand>,
}

/// A search widget driven by host JSON.
#[derive(Debug, Clone, Default)]
pub struct WebSession {
    widget: SearchWidget,
    buffer: CommandBuffer,
}

impl WebSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Session with a custom configuration.
    pub fn with_config(config: SearchConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            widget: SearchWidget::new(config)?,
            buffer: CommandBuffer::new(),
        })
    }

    /// Session configured from a JSON document.
    #[cfg(feature = "config-file")]
    pub fn from_config_json(json: &str) -> Result<Self, ConfigError> {
        Self::with_config(SearchConfig::from_json_str(json)?)
    }

    #[must_use]
    pub fn widget(&self) -> &SearchWidget {
        &self.widget
    }

    /// Install a decoded catalog. Returns the commands for a query typed
    /// while it was loading, if any.
    pub fn load_catalog(&mut self, catalog: Catalog) -> Vec<HostCommand> {
        self.widget.set_catalog(catalog, &mut self.buffer);
        self.buffer.drain()
    }

    /// Decode and install a catalog document.
    pub fn load_catalog_json(&mut self, json: &str) -> Result<Vec<HostCommand>, CatalogError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("web_session.load_catalog", bytes = json.len()).entered();

        let catalog = parse_catalog(json)?;
        Ok(self.load_catalog(catalog))
    }

    /// Handle one input record.
    pub fn dispatch(&mut self, input: &HostInput) -> Result<Dispatch, InputError> {
        let parsed = input.parse()?;

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("web_session.dispatch", kind = %input.kind).entered();

        let ctx = InputContext::new(parsed.focus, &parsed.query);
        let outcome = self.widget.handle_event(&parsed.event, &ctx, &mut self.buffer);
        Ok(Dispatch {
            prevent_default: outcome.prevent_default,
            commands: self.buffer.drain(),
        })
    }

    /// Handle one JSON input record and answer with a JSON [`Dispatch`].
    pub fn dispatch_json(&mut self, json: &str) -> Result<String, InputError> {
        let input = HostInput::from_json(json)?;
        let dispatch = self.dispatch(&input)?;
        Ok(serde_json::to_string(&dispatch)?)
    }
}
