#![forbid(unsafe_code)]

//! Keyboard selection over the rendered result list.
//!
//! # Invariants
//!
//! 1. `Selected(i)` always satisfies `i < count`.
//! 2. Rendering a new list always resets to [`SelectionState::NoSelection`].
//! 3. Moving down past the last result does nothing; there is no wraparound.
//! 4. Moving up from the first result clears the selection.
//! 5. With no rendered results both arrows are no-ops.

/// Which rendered result, if any, is keyboard-highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionState {
    #[default]
    NoSelection,
    Selected(usize),
}

impl SelectionState {
    /// The selected index, if any.
    #[inline]
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::NoSelection => None,
            Self::Selected(i) => Some(i),
        }
    }
}

/// A selection transition, reported to the renderer so it can move the
/// "active" marker and scroll the new entry into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionChange {
    pub previous: SelectionState,
    pub current: SelectionState,
}

/// Selection state machine for one rendered list.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    state: SelectionState,
    count: usize,
}

impl SelectionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Number of results in the rendered list.
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// A new list of `count` results was rendered.
    pub fn results_rendered(&mut self, count: usize) {
        self.count = count;
        self.state = SelectionState::NoSelection;
    }

    /// Move toward the end of the list.
    pub fn arrow_down(&mut self) -> Option<SelectionChange> {
        let next = match self.state {
            _ if self.count == 0 => return None,
            SelectionState::NoSelection => 0,
            SelectionState::Selected(i) if i + 1 < self.count => i + 1,
            SelectionState::Selected(_) => return None,
        };
        Some(self.transition(SelectionState::Selected(next)))
    }

    /// Move toward the start of the list, clearing the selection past it.
    pub fn arrow_up(&mut self) -> Option<SelectionChange> {
        let next = match self.state {
            _ if self.count == 0 => return None,
            SelectionState::NoSelection => return None,
            SelectionState::Selected(0) => SelectionState::NoSelection,
            SelectionState::Selected(i) => SelectionState::Selected(i - 1),
        };
        Some(self.transition(next))
    }

    /// The result to activate: the selected one, else the first.
    #[must_use]
    pub fn submit(&self) -> Option<usize> {
        match self.state {
            SelectionState::Selected(i) => Some(i),
            SelectionState::NoSelection if self.count > 0 => Some(0),
            SelectionState::NoSelection => None,
        }
    }

    /// Drop the list and the selection.
    pub fn escape(&mut self) {
        self.results_rendered(0);
    }

    fn transition(&mut self, current: SelectionState) -> SelectionChange {
        let previous = self.state;
        self.state = current;
        SelectionChange { previous, current }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use SelectionState::{NoSelection, Selected};

    fn rendered(count: usize) -> SelectionController {
        let mut c = SelectionController::new();
        c.results_rendered(count);
        c
    }

    // ── arrows ──────────────────────────────────────────────────────────

    #[test]
    fn down_selects_first_then_advances() {
        let mut c = rendered(3);
        assert_eq!(
            c.arrow_down(),
            Some(SelectionChange {
                previous: NoSelection,
                current: Selected(0)
            })
        );
        c.arrow_down();
        assert_eq!(c.state(), Selected(1));
    }

    #[test]
    fn down_at_end_is_idempotent() {
        let mut c = rendered(2);
        c.arrow_down();
        c.arrow_down();
        assert_eq!(c.arrow_down(), None);
        assert_eq!(c.arrow_down(), None);
        assert_eq!(c.state(), Selected(1));
    }

    #[test]
    fn up_from_first_clears() {
        let mut c = rendered(2);
        c.arrow_down();
        assert_eq!(
            c.arrow_up(),
            Some(SelectionChange {
                previous: Selected(0),
                current: NoSelection
            })
        );
        assert_eq!(c.arrow_up(), None);
    }

    #[test]
    fn up_steps_back() {
        let mut c = rendered(3);
        c.arrow_down();
        c.arrow_down();
        c.arrow_down();
        c.arrow_up();
        assert_eq!(c.state(), Selected(1));
    }

    #[test]
    fn arrows_without_results_do_nothing() {
        let mut c = rendered(0);
        assert_eq!(c.arrow_down(), None);
        assert_eq!(c.arrow_up(), None);
        assert_eq!(c.state(), NoSelection);
    }

    // ── render / submit / escape ────────────────────────────────────────

    #[test]
    fn render_resets_selection() {
        let mut c = rendered(4);
        c.arrow_down();
        c.arrow_down();
        c.results_rendered(4);
        assert_eq!(c.state(), NoSelection);
    }

    #[test]
    fn submit_prefers_selection_then_first() {
        let mut c = rendered(3);
        assert_eq!(c.submit(), Some(0));
        c.arrow_down();
        c.arrow_down();
        assert_eq!(c.submit(), Some(1));
        assert_eq!(rendered(0).submit(), None);
    }

    #[test]
    fn escape_forgets_everything() {
        let mut c = rendered(3);
        c.arrow_down();
        c.escape();
        assert_eq!(c.state(), NoSelection);
        assert_eq!(c.count(), 0);
        assert_eq!(c.submit(), None);
    }

    // ── properties ──────────────────────────────────────────────────────

    #[derive(Debug, Clone, Copy)]
    enum Op {
        Down,
        Up,
        Render(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => Just(Op::Down),
            4 => Just(Op::Up),
            1 => (0usize..6).prop_map(Op::Render),
        ]
    }

    proptest! {
        #[test]
        fn selection_stays_in_bounds(ops in proptest::collection::vec(op(), 0..64)) {
            let mut c = SelectionController::new();
            for op in ops {
                match op {
                    Op::Down => { c.arrow_down(); }
                    Op::Up => { c.arrow_up(); }
                    Op::Render(n) => {
                        c.results_rendered(n);
                        prop_assert_eq!(c.state(), NoSelection);
                    }
                }
                if let Selected(i) = c.state() {
                    prop_assert!(i < c.count());
                }
                prop_assert_eq!(c.submit().is_some(), c.count() > 0);
            }
        }

        #[test]
        fn reported_change_matches_state(ops in proptest::collection::vec(op(), 0..64)) {
            let mut c = SelectionController::new();
            for op in ops {
                let before = c.state();
                let change = match op {
                    Op::Down => c.arrow_down(),
                    Op::Up => c.arrow_up(),
                    Op::Render(n) => { c.results_rendered(n); continue; }
                };
                match change {
                    Some(change) => {
                        prop_assert_eq!(change.previous, before);
                        prop_assert_eq!(change.current, c.state());
                        prop_assert_ne!(change.previous, change.current);
                    }
                    None => prop_assert_eq!(c.state(), before),
                }
            }
        }
    }
}
