#![forbid(unsafe_code)]

//! Interactive layer of docsearch.
//!
//! - [`SelectionController`]: keyboard highlight over the rendered list
//! - [`KeyRouter`]: what an input event means given focus and visibility
//! - [`SearchWidget`]: owns catalog, dedupe cell and selection; drives a
//!   [`RenderSink`]
//! - [`SearchConfig`]: shortcuts, empty-state text, result limit
//!
//! # Feature Flags
//!
//! - `config-file`: load [`SearchConfig`] from TOML or JSON
//! - `tracing`: debug spans around event handling

pub mod config;
pub mod router;
pub mod selection;
pub mod sink;
pub mod widget;

pub use config::{ConfigError, SearchConfig};
pub use router::{KeyRouter, Navigation, Route};
pub use selection::{SelectionChange, SelectionController, SelectionState};
pub use sink::RenderSink;
pub use widget::{EventOutcome, InputContext, SearchWidget};
