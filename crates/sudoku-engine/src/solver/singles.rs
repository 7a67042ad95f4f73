//! The two propagation strategies: naked single and hidden single.
//!
//! Each sweep walks the grid once, top-left to bottom-right, and reports
//! whether it placed anything. The solve loop alternates them until a full
//! iteration places nothing.

use super::Solver;
use crate::{Grid, Position};

/// Place every cell whose candidate set has shrunk to one digit.
///
/// A lone candidate is unconditionally correct, so the sweep assigns as it
/// goes; assignments earlier in the pass can expose further singles later
/// in the same pass.
pub(super) fn naked_single_sweep(solver: &mut Solver) -> bool {
    let mut progress = false;
    for pos in Grid::positions() {
        if solver.grid.value(pos) != 0 {
            continue;
        }
        if let Some(value) = solver.candidates(pos).single_value() {
            solver.assign(pos, value);
            progress = true;
        }
    }
    progress
}

/// Place every cell holding a digit that fits nowhere else in one of its
/// houses.
///
/// The cell may still admit other digits; what forces the placement is the
/// digit having a single home within the row, column, or box.
pub(super) fn hidden_single_sweep(solver: &mut Solver) -> bool {
    let mut progress = false;
    for pos in Grid::positions() {
        if solver.grid.value(pos) != 0 {
            continue;
        }
        if place_hidden_single(solver, pos) {
            progress = true;
        }
    }
    progress
}

/// Try each house of `pos` in row, column, box order; the first digit found
/// with exactly one admitting cell in the house wins. Filled cells have
/// empty candidate sets and never count as admitting.
fn place_hidden_single(solver: &mut Solver, pos: Position) -> bool {
    for house in pos.houses() {
        for value in solver.candidates(pos).iter() {
            let homes = house
                .cells()
                .iter()
                .filter(|&&cell| solver.candidates(cell).contains(value))
                .count();
            if homes == 1 {
                solver.assign(pos, value);
                return true;
            }
        }
    }
    false
}
