#![forbid(unsafe_code)]

//! Split a name into plain and highlighted pieces for rendering.
//!
//! Regions are expressed in UTF-16 code units; this module maps them back to
//! `&str` slices so renderers never index by units themselves. A region that
//! starts before the end of the previous one is dropped, and region ends past
//! the name are clamped.

use crate::matcher::Region;

/// A contiguous run of name text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

impl<'a> Segment<'a> {
    #[must_use]
    pub const fn plain(text: &'a str) -> Self {
        Self {
            text,
            highlighted: false,
        }
    }

    #[must_use]
    pub const fn mark(text: &'a str) -> Self {
        Self {
            text,
            highlighted: true,
        }
    }
}

/// Byte offset of the first character starting at or after `unit`.
fn byte_offset(bounds: &[(usize, usize)], unit: usize) -> usize {
    let i = bounds.partition_point(|&(u, _)| u < unit);
    bounds[i.min(bounds.len() - 1)].1
}

/// Alternate plain and highlighted pieces of `name` following `regions`.
///
/// ```
/// use docsearch_text::highlight::{Segment, segments};
/// use docsearch_text::matcher::Region;
///
/// let pieces = segments("CreateOrder", &[Region::new(6, 10)]);
/// assert_eq!(pieces, [Segment::plain("Create"), Segment::mark("Order")]);
/// ```
#[must_use]
pub fn segments<'a>(name: &'a str, regions: &[Region]) -> Vec<Segment<'a>> {
    // (utf16 offset, byte offset) of every character start, plus the end.
    let mut bounds = Vec::with_capacity(name.len() + 1);
    let mut unit = 0;
    for (byte, c) in name.char_indices() {
        bounds.push((unit, byte));
        unit += c.len_utf16();
    }
    bounds.push((unit, name.len()));
    let total_units = unit;

    let mut out = Vec::with_capacity(regions.len() * 2 + 1);
    let mut prev = 0;
    for region in regions {
        if region.start < prev || region.start >= total_units {
            continue;
        }
        if region.start > prev {
            let (from, to) = (byte_offset(&bounds, prev), byte_offset(&bounds, region.start));
            out.push(Segment::plain(&name[from..to]));
        }
        let end = (region.end + 1).min(total_units);
        let (from, to) = (byte_offset(&bounds, region.start), byte_offset(&bounds, end));
        out.push(Segment::mark(&name[from..to]));
        prev = end;
    }
    if prev < total_units {
        out.push(Segment::plain(&name[byte_offset(&bounds, prev)..]));
    }
    out
}
