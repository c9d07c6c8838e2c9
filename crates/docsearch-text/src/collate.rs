#![forbid(unsafe_code)]

//! Locale-style name ordering for ranking tie-breaks.
//!
//! Approximates the default collation of browser `localeCompare` with three
//! comparison levels over canonically decomposed (NFD) names:
//!
//! 1. Primary: base letters after the simple lowercase fold, accents
//!    removed, so `apply` < `Bake` < `carry` and `éxa` < `exb`.
//! 2. Secondary: accents, position by position; an unaccented letter sorts
//!    before an accented one (`exa` < `éxa`).
//! 3. Tertiary: case at the first position that differs only by case;
//!    lowercase sorts before uppercase (`order` < `Order`).
//!
//! Raw code point order breaks any remaining tie, so distinct strings never
//! compare equal.

use core::cmp::Ordering;

use smallvec::SmallVec;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::matcher::fold_char;

/// One collation position: a base character and the marks attached to it.
#[derive(Debug, Default)]
struct Element {
    base: char,
    upper: bool,
    marks: SmallVec<[char; 2]>,
}

fn elements(name: &str) -> Vec<Element> {
    let mut out: Vec<Element> = Vec::with_capacity(name.len());
    for c in name.nfd() {
        if is_combining_mark(c) {
            if let Some(last) = out.last_mut() {
                last.marks.push(c);
                continue;
            }
        }
        out.push(Element {
            base: fold_char(c),
            upper: c.is_uppercase(),
            marks: SmallVec::new(),
        });
    }
    out
}

/// Compare two names.
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    let (ea, eb) = (elements(a), elements(b));
    let primary = || ea.iter().map(|e| e.base).cmp(eb.iter().map(|e| e.base));
    let secondary = || ea.iter().map(|e| &e.marks[..]).cmp(eb.iter().map(|e| &e.marks[..]));
    let tertiary = || ea.iter().map(|e| e.upper).cmp(eb.iter().map(|e| e.upper));
    primary()
        .then_with(secondary)
        .then_with(tertiary)
        .then_with(|| a.cmp(b))
}
