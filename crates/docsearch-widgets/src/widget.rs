#![forbid(unsafe_code)]

//! The search widget controller.
//!
//! [`SearchWidget`] owns all per-page search state: the catalog, the query
//! dedupe cell, the selection controller, and which catalog items are
//! currently rendered. Every input event runs to completion inside
//! [`SearchWidget::handle_event`]; output goes to a [`RenderSink`].
//!
//! # Invariants
//!
//! 1. A recomputation happens only when the query differs from the last one
//!    that triggered a recomputation (the dedupe cell).
//! 2. Every render resets the selection.
//! 3. An empty query hides the list; it never means "match everything".
//! 4. Escape clears the dedupe cell, so retyping the same query recomputes.
//! 5. Queries that arrive before the catalog are kept and ranked as soon as
//!    [`SearchWidget::set_catalog`] installs one.
//!
//! # Example
//!
//! ```
//! use docsearch_core::{Catalog, Event, Focus, Item, ItemType, KeyCode, KeyEvent};
//! use docsearch_text::MatchResult;
//! use docsearch_widgets::{InputContext, RenderSink, SearchWidget, SelectionChange};
//!
//! #[derive(Default)]
//! struct Names(Vec<String>);
//!
//! impl RenderSink for Names {
//!     fn show_results(&mut self, results: &[MatchResult<'_>]) {
//!         self.0 = results.iter().map(|r| r.item.name.clone()).collect();
//!     }
//!     fn show_no_results(&mut self, _message: &str) { self.0.clear(); }
//!     fn hide_results(&mut self) { self.0.clear(); }
//!     fn set_active(&mut self, _change: SelectionChange) {}
//!     fn focus_search(&mut self) {}
//!     fn clear_query(&mut self) {}
//!     fn activate(&mut self, _uri: &str) {}
//! }
//!
//! let mut sink = Names::default();
//! let mut widget = SearchWidget::default();
//! widget.set_catalog(
//!     Catalog::new(vec![
//!         Item::new("OrderCreated", "/b", ItemType::Event),
//!         Item::new("CreateOrder", "/a", ItemType::Command),
//!     ]),
//!     &mut sink,
//! );
//!
//! let keyup = Event::Key(KeyEvent::release(KeyCode::Char('r')));
//! widget.handle_event(&keyup, &InputContext::new(Focus::SearchField, "order"), &mut sink);
//! assert_eq!(sink.0, ["CreateOrder", "OrderCreated"]);
//! ```

use crate::config::{ConfigError, SearchConfig};
use crate::router::{KeyRouter, Navigation, Route};
use crate::selection::{SelectionController, SelectionState};
use crate::sink::RenderSink;
use docsearch_core::{Catalog, Event, Focus, Item};
use docsearch_text::rank;

/// Host state that accompanies an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputContext<'q> {
    /// Where keyboard focus is.
    pub focus: Focus,
    /// Current contents of the search field.
    pub query: &'q str,
}

impl<'q> InputContext<'q> {
    #[must_use]
    pub const fn new(focus: Focus, query: &'q str) -> Self {
        Self { focus, query }
    }
}

/// What [`SearchWidget::handle_event`] did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventOutcome {
    pub route: Route,
    /// The host must suppress the event's default action.
    pub prevent_default: bool,
    /// The result list was re-ranked (or hidden for an empty query).
    pub recomputed: bool,
}

impl EventOutcome {
    const fn new(route: Route, recomputed: bool) -> Self {
        Self {
            route,
            prevent_default: route.prevents_default(),
            recomputed,
        }
    }
}

/// Search widget controller.
#[derive(Debug, Clone)]
pub struct SearchWidget {
    catalog: Option<Catalog>,
    config: SearchConfig,
    router: KeyRouter,
    selection: SelectionController,
    last_query: Option<String>,
    visible: bool,
    rendered: Vec<usize>,
}

impl Default for SearchWidget {
    fn default() -> Self {
        Self::with_valid_config(SearchConfig::default())
    }
}

impl SearchWidget {
    /// Create a widget, rejecting invalid configurations.
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: SearchConfig) -> Self {
        Self {
            catalog: None,
            router: KeyRouter::new(config.focus_shortcuts.iter().copied()),
            config,
            selection: SelectionController::new(),
            last_query: None,
            visible: false,
            rendered: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The installed catalog, if it has arrived.
    #[must_use]
    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    #[must_use]
    pub fn selection(&self) -> SelectionState {
        self.selection.state()
    }

    /// Whether the result list (or its empty state) is showing.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The query that last triggered a recomputation.
    #[must_use]
    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    /// Items currently rendered, in rank order.
    pub fn rendered_items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.rendered
            .iter()
            .filter_map(|&i| self.catalog.as_ref().and_then(|c| c.get(i)))
    }

    /// Install the catalog. A query typed while it was loading is ranked now.
    pub fn set_catalog(&mut self, catalog: Catalog, sink: &mut impl RenderSink) {
        #[cfg(feature = "tracing")]
        tracing::debug!(items = catalog.len(), "catalog installed");

        self.catalog = Some(catalog);
        match self.last_query.take() {
            Some(query) if !query.is_empty() => {
                self.recompute(&query, sink);
            }
            pending => self.last_query = pending,
        }
    }

    /// Route and handle one input event.
    pub fn handle_event(
        &mut self,
        event: &Event,
        ctx: &InputContext<'_>,
        sink: &mut impl RenderSink,
    ) -> EventOutcome {
        let route = self.router.route(event, ctx.focus, self.visible);

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("search_widget.handle_event", ?route).entered();

        let mut recomputed = false;
        match route {
            Route::FocusSearch => sink.focus_search(),
            Route::Recompute => recomputed = self.recompute(ctx.query, sink),
            Route::Navigate(Navigation::Down) => {
                if let Some(change) = self.selection.arrow_down() {
                    sink.set_active(change);
                }
            }
            Route::Navigate(Navigation::Up) => {
                if let Some(change) = self.selection.arrow_up() {
                    sink.set_active(change);
                }
            }
            Route::Navigate(Navigation::Escape) => self.escape(sink),
            Route::Submit => self.submit(sink),
            Route::Ignore => {}
        }
        EventOutcome::new(route, recomputed)
    }

    /// Re-rank for `query` unless it is the query already shown.
    ///
    /// Returns whether anything was recomputed.
    pub fn recompute(&mut self, query: &str, sink: &mut impl RenderSink) -> bool {
        if self.last_query.as_deref() == Some(query) {
            return false;
        }
        self.last_query = Some(query.to_owned());

        if query.is_empty() {
            self.hide(sink);
            return true;
        }

        let Some(catalog) = self.catalog.as_ref() else {
            #[cfg(feature = "tracing")]
            tracing::trace!("catalog not loaded, query deferred");
            return false;
        };

        let mut results = rank(query, catalog.as_slice());
        if let Some(limit) = self.config.result_limit {
            results.truncate(limit);
        }

        self.rendered.clear();
        self.rendered.extend(results.iter().map(|r| r.catalog_index));
        self.selection.results_rendered(results.len());
        self.visible = true;

        if results.is_empty() {
            sink.show_no_results(&self.config.no_results_message);
        } else {
            sink.show_results(&results);
        }
        true
    }

    /// Clear the query and dedupe cell and hide the list if it is showing.
    pub fn escape(&mut self, sink: &mut impl RenderSink) {
        sink.clear_query();
        self.last_query = None;
        self.hide(sink);
    }

    /// Activate the selected result, or the first one when nothing is
    /// selected.
    pub fn submit(&mut self, sink: &mut impl RenderSink) {
        let item = self
            .selection
            .submit()
            .and_then(|i| self.rendered.get(i))
            .and_then(|&i| self.catalog.as_ref()?.get(i));
        if let Some(item) = item {
            sink.activate(&item.uri);
        }
    }

    fn hide(&mut self, sink: &mut impl RenderSink) {
        self.rendered.clear();
        self.selection.escape();
        if std::mem::replace(&mut self.visible, false) {
            sink.hide_results();
        }
    }
}
