#![forbid(unsafe_code)]

//! docsearch public facade.
//!
//! Client-side search over a documentation catalog: fuzzy subsequence
//! matching with highlight regions, a simple length-based rank, and a
//! keyboard-driven result list.
//!
//! ```
//! use docsearch::prelude::*;
//!
//! let items = [
//!     Item::new("CreateOrder", "/a", ItemType::Command),
//!     Item::new("OrderCreated", "/b", ItemType::Event),
//! ];
//! let names: Vec<&str> = rank("order", &items).iter().map(|r| r.item.name.as_str()).collect();
//! assert_eq!(names, ["CreateOrder", "OrderCreated"]);
//! ```

pub use docsearch_core as core;
pub use docsearch_text as text;
#[cfg(feature = "web")]
pub use docsearch_web as web;
pub use docsearch_widgets as widgets;

pub use docsearch_core::{Catalog, Event, Focus, Item, ItemType, KeyCode, KeyEvent, Modifiers};
pub use docsearch_text::{MatchResult, Region, find_regions, rank, score, segments};
pub use docsearch_widgets::{
    ConfigError, EventOutcome, InputContext, RenderSink, SearchConfig, SearchWidget,
    SelectionChange, SelectionState,
};

#[cfg(feature = "web")]
pub use docsearch_web::{HostCommand, WebSession};

/// Commonly used types.
pub mod prelude {
    pub use crate::core::{
        Catalog, EditableKind, Event, Focus, Item, ItemType, KeyCode, KeyEvent, KeyEventKind,
        Modifiers,
    };
    pub use crate::text::{MatchResult, Region, Segment, find_regions, rank, score, segments};
    pub use crate::widgets::{
        InputContext, RenderSink, SearchConfig, SearchWidget, SelectionChange, SelectionState,
    };

    #[cfg(feature = "web")]
    pub use crate::web::{Dispatch, HostCommand, HostInput, WebSession};
}
