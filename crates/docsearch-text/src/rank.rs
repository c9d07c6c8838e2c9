#![forbid(unsafe_code)]

//! Catalog ranking.
//!
//! Every query re-scans the whole catalog: each item's name goes through the
//! subsequence prefilter and the [`RegionFinder`], survivors are scored, and
//! the list is sorted ascending by score with [`collate`] breaking ties.
//!
//! # Invariants
//!
//! - Every result has a non-empty region list.
//! - Results are totally ordered: `(score, name)` ascending.
//! - The sort is stable, so items equal in score and name keep catalog order.
//!
//! # Performance
//!
//! Work is `O(items × name length)` per query, with one name buffer reused
//! across the catalog and allocation only for survivors.

use core::cmp::Ordering;

use docsearch_core::Item;

use crate::collate::collate;
use crate::matcher::{RegionFinder, Regions};
use crate::score::score;

/// One ranked catalog item.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult<'a> {
    pub item: &'a Item,
    /// Position of the item in the catalog it was ranked from.
    pub catalog_index: usize,
    /// Lower is better.
    pub score: f64,
    /// Highlight regions within `item.name`.
    pub regions: Regions,
}

impl MatchResult<'_> {
    /// Ordering used by [`rank`].
    #[must_use]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| collate(&self.item.name, &other.item.name))
    }
}

/// Rank `items` against `query`.
///
/// A blank query ranks nothing; callers hide the result list instead.
#[must_use]
pub fn rank<'a>(query: &str, items: &'a [Item]) -> Vec<MatchResult<'a>> {
    let _span = tracing::debug_span!("rank", query_len = query.len(), items = items.len()).entered();

    let mut finder = RegionFinder::new(query);
    if finder.is_blank() {
        tracing::trace!("blank query, nothing to rank");
        return Vec::new();
    }

    let mut results: Vec<MatchResult<'a>> = items
        .iter()
        .enumerate()
        .filter_map(|(catalog_index, item)| {
            if !finder.is_subsequence(&item.name) {
                return None;
            }
            let regions = finder.find(&item.name);
            if regions.is_empty() {
                return None;
            }
            Some(MatchResult {
                item,
                catalog_index,
                score: score(&item.name, &regions),
                regions,
            })
        })
        .collect();

    results.sort_by(MatchResult::rank_cmp);

    tracing::debug!(matched = results.len(), "ranked catalog");
    results
}
