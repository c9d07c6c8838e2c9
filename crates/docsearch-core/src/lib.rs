#![forbid(unsafe_code)]

//! Core types for docsearch.
//!
//! This crate provides:
//! - [`Item`] and [`Catalog`], the immutable searchable data set
//! - [`Event`], [`KeyEvent`] and [`Focus`], the input vocabulary consumed by
//!   the key router and selection controller
//! - JSON logging bootstrap behind the `tracing-json` feature

pub mod event;
pub mod item;
#[cfg(feature = "tracing-json")]
pub mod logging;

pub use event::{EditableKind, Event, Focus, KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use item::{Catalog, Item, ItemType, TypeFamily};
