#![forbid(unsafe_code)]

//! Output side of the widget.
//!
//! [`SearchWidget`](crate::SearchWidget) never builds markup or touches focus
//! itself; it tells a [`RenderSink`] what changed. A browser adapter turns
//! these calls into DOM work, tests record them.

use crate::selection::SelectionChange;
use docsearch_text::MatchResult;

/// Receiver of widget output.
pub trait RenderSink {
    /// Replace the result list with `results`, in rank order, and show it.
    fn show_results(&mut self, results: &[MatchResult<'_>]);

    /// Replace the result list with the empty-state `message` and show it.
    fn show_no_results(&mut self, message: &str);

    /// Hide the result list.
    fn hide_results(&mut self);

    /// Move the "active" marker and scroll the new entry into view.
    fn set_active(&mut self, change: SelectionChange);

    /// Give keyboard focus to the search field.
    fn focus_search(&mut self);

    /// Empty the search field.
    fn clear_query(&mut self);

    /// Follow a result's link.
    fn activate(&mut self, uri: &str);
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn show_results(&mut self, results: &[MatchResult<'_>]) {
        (**self).show_results(results);
    }

    fn show_no_results(&mut self, message: &str) {
        (**self).show_no_results(message);
    }

    fn hide_results(&mut self) {
        (**self).hide_results();
    }

    fn set_active(&mut self, change: SelectionChange) {
        (**self).set_active(change);
    }

    fn focus_search(&mut self) {
        (**self).focus_search();
    }

    fn clear_query(&mut self) {
        (**self).clear_query();
    }

    fn activate(&mut self, uri: &str) {
        (**self).activate(uri);
    }
}
