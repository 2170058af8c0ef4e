//! Pure choose-loop transitions.
//!
//! The interactive loop is: redraw, read a signal, apply [`step`]. All
//! selection logic lives here, testable without a terminal; the engine
//! only executes the returned step.

use crate::input::Signal;

/// Largest menu for which digit keys select a row directly.
pub const DIGIT_SELECT_MAX_ROWS: usize = 10;

/// Outcome of one choose-loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Selection finished with this 1-based row.
    Pick(usize),
    /// Highlight moved to this 1-based row; redraw and keep reading.
    MoveTo(usize),
    /// Signal had no effect; redraw and keep reading.
    Ignore,
}

/// Apply one input signal to the highlight state.
///
/// `cursor` and all returned rows are 1-based; `body_count` must be at
/// least 1. Movement wraps: up from row 1 lands on the last row, down from
/// the last row lands on row 1. A digit picks its row directly only when
/// the menu has at most [`DIGIT_SELECT_MAX_ROWS`] rows and the digit names
/// an existing row, so the picked row is always within `[1, body_count]`.
pub fn step(cursor: usize, body_count: usize, signal: Signal) -> Step {
    debug_assert!(body_count >= 1);
    debug_assert!((1..=body_count).contains(&cursor));

    match signal {
        Signal::Up => Step::MoveTo(if cursor == 1 { body_count } else { cursor - 1 }),
        Signal::Down => Step::MoveTo(if cursor == body_count { 1 } else { cursor + 1 }),
        Signal::Digit(digit) => {
            let row = digit as usize;
            if body_count <= DIGIT_SELECT_MAX_ROWS && (1..=body_count).contains(&row) {
                Step::Pick(row)
            } else {
                Step::Ignore
            }
        }
        Signal::Confirm => Step::Pick(cursor),
        Signal::Other => Step::Ignore,
    }
}

// ============================================================================
// TESTS
// ============================================================================
