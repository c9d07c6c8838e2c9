#![forbid(unsafe_code)]

//! Rank value for a matched name. Lower is better.
//!
//! ```text
//! base      = utf16_len(name)
//! proximity = regions[0].start / base
//! score     = (base + proximity) * count(regions)
//! ```
//!
//! Shorter names win, matches closer to the start win, and fragmenting the
//! match across more regions multiplies the penalty. Since
//! `regions[0].start < base`, proximity stays below one and never outweighs a
//! one-unit difference in length.

use crate::matcher::Region;

/// Score a match. Returns `f64::INFINITY` for an empty region list, which
/// only a non-match produces.
#[must_use]
pub fn score(name: &str, regions: &[Region]) -> f64 {
    let Some(first) = regions.first() else {
        return f64::INFINITY;
    };
    let base = name.encode_utf16().count() as f64;
    let proximity = first.start as f64 / base;
    (base + proximity) * regions.len() as f64
}
