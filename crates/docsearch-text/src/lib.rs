#![forbid(unsafe_code)]

//! Matching and ranking for docsearch.
//!
//! This crate provides:
//! - [`RegionFinder`] / [`find_regions`]: fuzzy subsequence matching with
//!   highlight-region extraction
//! - [`score`]: lower-is-better rank value for a match
//! - [`rank`]: catalog filtering and total ordering of results
//! - [`segments`]: plain/highlighted pieces of a name for renderers
//! - [`collate`]: case-insensitive name ordering used for tie-breaks

pub mod collate;
pub mod highlight;
pub mod matcher;
pub mod rank;
pub mod score;

pub use collate::collate;
pub use highlight::{Segment, segments};
pub use matcher::{Region, RegionFinder, Regions, find_regions, fold_char, is_subsequence};
pub use rank::{MatchResult, rank};
pub use score::score;
