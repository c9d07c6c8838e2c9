#![forbid(unsafe_code)]

//! Fuzzy subsequence matcher with highlight-region extraction.
//!
//! A query matches a name when its non-whitespace characters appear, in
//! order, among the name's non-whitespace characters under a simple lowercase
//! fold. Consecutive matched characters are grouped into one [`Region`], and a
//! literal occurrence of the still-unmatched query further along the name is
//! reported as a single region in place of the character-by-character scan.
//!
//! # Algorithm
//!
//! One left-to-right co-scan with two cursors (`qi` into the folded query,
//! `ni` into the folded name):
//!
//! 1. Leading whitespace of the remaining query is skipped. A remaining query
//!    made only of whitespace counts as exhausted.
//! 2. One name character is consumed. Whitespace name characters neither
//!    match nor close a run.
//! 3. Outside a run, the unconsumed name is searched for the whole remaining
//!    query. On a hit, that occurrence is appended as one region and the scan
//!    returns immediately, keeping any regions recorded earlier.
//! 4. Otherwise the character is compared with the next query character. A
//!    match advances the query and opens a run if none is open; a mismatch
//!    closes the open run just before the current character.
//! 5. When the name runs out with query characters left, the match fails and
//!    no regions are returned. Otherwise an open run is closed at the last
//!    consumed character.
//!
//! # Invariants
//!
//! - Positions are UTF-16 code units into the unfolded name.
//! - Regions are non-overlapping and ascending by `start`, with
//!   `start <= end < utf16_len(name)`.
//! - A non-empty result exists iff [`is_subsequence`] holds.
//!
//! # Failure Modes
//!
//! | Input | Result |
//! |-------|--------|
//! | Empty or all-whitespace query | Empty list (callers must filter these first) |
//! | Empty name | Empty list |
//! | Query characters missing from name | Empty list |

use smallvec::SmallVec;

/// Inclusive `[start, end]` span of UTF-16 code units in an item name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    pub start: usize,
    pub end: usize,
}

impl Region {
    /// Create a region. `end` is inclusive.
    #[inline]
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Number of code units covered.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Regions always cover at least one unit.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Whether `unit` falls inside the region.
    #[inline]
    #[must_use]
    pub const fn contains(&self, unit: usize) -> bool {
        self.start <= unit && unit <= self.end
    }
}

/// Ordered highlight regions for one name.
pub type Regions = SmallVec<[Region; 4]>;

/// Simple lowercase fold: the single-character lowercase mapping, or the
/// character itself when lowercasing would expand it.
#[inline]
#[must_use]
pub fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Folded characters of a name plus the UTF-16 offset of each one.
///
/// `units` has one trailing entry holding the total UTF-16 length, so
/// `units[i + 1] - 1` is the last unit of character `i`.
#[derive(Debug, Default)]
struct FoldedName {
    chars: Vec<char>,
    units: Vec<usize>,
}

impl FoldedName {
    fn load(&mut self, name: &str) {
        self.chars.clear();
        self.units.clear();
        let mut offset = 0;
        for c in name.chars() {
            self.chars.push(fold_char(c));
            self.units.push(offset);
            offset += c.len_utf16();
        }
        self.units.push(offset);
    }
}

/// Matcher prepared for one query, reusable across many names.
///
/// The folded query is computed once; the name buffer is reused between
/// calls so scanning a catalog allocates only for results.
///
/// ```
/// use docsearch_text::matcher::{Region, RegionFinder};
///
/// let mut finder = RegionFinder::new("order");
/// assert_eq!(finder.find("CreateOrder").as_slice(), &[Region::new(6, 10)]);
/// assert!(finder.find("Shipment").is_empty());
/// ```
#[derive(Debug)]
pub struct RegionFinder {
    query: Vec<char>,
    name: FoldedName,
}

impl RegionFinder {
    /// Prepare a query.
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self {
            query: query.chars().map(fold_char).collect(),
            name: FoldedName::default(),
        }
    }

    /// True when the query has no non-whitespace characters and therefore
    /// can never produce a match.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.query.iter().all(|c| c.is_whitespace())
    }

    /// Highlight regions of `name`, or an empty list when it does not match.
    pub fn find(&mut self, name: &str) -> Regions {
        self.name.load(name);
        let query = self.query.as_slice();
        let chars = self.name.chars.as_slice();
        let units = self.name.units.as_slice();

        let mut regions = Regions::new();
        let mut qi = 0;
        let mut ni = 0;
        let mut run_start: Option<usize> = None;

        loop {
            while qi < query.len() && query[qi].is_whitespace() {
                qi += 1;
            }
            if qi == query.len() || ni == chars.len() {
                break;
            }

            let c = chars[ni];
            let c_start = units[ni];
            ni += 1;

            if c.is_whitespace() {
                continue;
            }

            if run_start.is_none() {
                let rest = &query[qi..];
                if let Some(offset) = find_slice(&chars[ni..], rest) {
                    let first = ni + offset;
                    let last = first + rest.len() - 1;
                    regions.push(Region::new(units[first], units[last + 1] - 1));
                    return regions;
                }
            }

            if c == query[qi] {
                qi += 1;
                if run_start.is_none() {
                    run_start = Some(c_start);
                }
            } else if let Some(start) = run_start.take() {
                regions.push(Region::new(start, c_start - 1));
            }
        }

        if qi < query.len() {
            return Regions::new();
        }
        if let Some(start) = run_start {
            regions.push(Region::new(start, units[ni] - 1));
        }
        regions
    }

    /// Whether the query's non-whitespace characters occur in order among
    /// the non-whitespace characters of `name`.
    ///
    /// Allocation-free; accepts exactly the names [`find`](Self::find)
    /// returns regions for.
    #[must_use]
    pub fn is_subsequence(&self, name: &str) -> bool {
        let mut pending = self.query.iter().copied().filter(|c| !c.is_whitespace());
        let Some(mut want) = pending.next() else {
            return true;
        };
        for c in name.chars().map(fold_char) {
            if c.is_whitespace() || c != want {
                continue;
            }
            match pending.next() {
                Some(next) => want = next,
                None => return true,
            }
        }
        false
    }
}

/// First position of `needle` within `haystack`.
fn find_slice(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Highlight regions of `name` for `query`; empty when there is no match.
///
/// Callers must not pass an empty query: the empty result it produces means
/// "no match", not "matches everything".
#[must_use]
pub fn find_regions(name: &str, query: &str) -> Regions {
    RegionFinder::new(query).find(name)
}

/// Whether `query` matches `name` at all. See [`RegionFinder::is_subsequence`].
#[must_use]
pub fn is_subsequence(name: &str, query: &str) -> bool {
    RegionFinder::new(query).is_subsequence(name)
}
