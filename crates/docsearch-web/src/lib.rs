#![forbid(unsafe_code)]

//! Browser adapter for docsearch.
//!
//! The page owns the DOM; this crate owns the search state. Data crosses as
//! JSON in both directions:
//!
//! - catalog document in: [`WebSession::load_catalog_json`]
//! - input records in: [`WebSession::dispatch_json`] ([`HostInput`])
//! - commands out: [`HostCommand`], with result rows as [`ResultView`]
//!
//! On `wasm32` the session is exported to JavaScript as `DocSearch`.
//!
//! # Feature Flags
//!
//! - `config-file`: `WebSession::from_config_json`
//! - `tracing`: spans around catalog loading and dispatch

pub mod catalog;
pub mod command;
pub mod error;
pub mod input;
pub mod session;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use catalog::parse_catalog;
pub use command::{CommandBuffer, HostCommand};
pub use error::{CatalogError, InputError};
pub use input::{HostInput, ParsedInput, parse_focus, parse_key};
pub use session::{Dispatch, WebSession};
pub use view::{ResultView, SegmentView};
