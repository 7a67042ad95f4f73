//! Solver: candidate state, propagation to fixpoint, backtracking fallback.
//!
//! Propagation strategies live in `singles`, the exhaustive search in
//! `backtrack`. Both operate on the `Solver`'s shared grid/candidate
//! state and report progress; this module owns that state and sequences
//! the strategies.

mod backtrack;
mod singles;

use crate::{DigitSet, Grid, House, Position};
use thiserror::Error;

/// Why a solve attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Two pre-filled cells in the same house carry the same value. Caught
    /// before propagation starts, since elimination would otherwise run the
    /// conflicting grid to a plausible-looking dead end.
    #[error("given {value} appears more than once in {house}")]
    ConflictingGivens { value: u8, house: House },
    /// The search exhausted every candidate combination without completing
    /// the grid. The partial fill is retained for inspection.
    #[error("no assignment of the remaining cells satisfies the constraints")]
    Unsolvable,
}

/// Solves a single 9×9 puzzle.
///
/// Owns the value grid and a parallel 9×9 grid of candidate sets. The sets
/// start at {1..9} everywhere and only ever shrink; every given is applied
/// through the same [`assign`](Solver::assign) path used during solving, so
/// a filled cell always has an empty set and a blank cell's set is a
/// superset of the values it can legally hold.
pub struct Solver {
    pub(crate) grid: Grid,
    pub(crate) candidates: [[DigitSet; 9]; 9],
}

impl Solver {
    /// Build solver state from a puzzle grid.
    pub fn new(puzzle: &Grid) -> Self {
        let mut solver = Self {
            grid: Grid::new(),
            candidates: [[DigitSet::all(); 9]; 9],
        };
        for pos in Grid::positions() {
            if let Some(value) = puzzle.get(pos) {
                solver.assign(pos, value);
            }
        }
        solver
    }

    /// The current grid: the puzzle, a partial fill, or the solution.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consume the solver, keeping the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Candidate set of a cell. Empty for filled cells.
    pub fn candidates(&self, pos: Position) -> DigitSet {
        self.candidates[pos.row][pos.col]
    }

    /// Run propagation to a fixpoint, then backtracking over whatever is
    /// left, then verify. On failure the grid stays in its partially
    /// filled state.
    pub fn solve(&mut self) -> Result<(), SolveError> {
        self.check_givens()?;

        loop {
            let naked = singles::naked_single_sweep(self);
            let hidden = singles::hidden_single_sweep(self);
            if !naked && !hidden {
                break;
            }
        }

        if !backtrack::complete(self) {
            return Err(SolveError::Unsolvable);
        }
        if self.is_solved() {
            Ok(())
        } else {
            Err(SolveError::Unsolvable)
        }
    }

    /// Place `value` and eliminate it from every peer.
    ///
    /// This is the only path that mutates the grid during propagation; the
    /// elimination and the write happen together so the candidate sets
    /// never miss a placed value.
    pub(crate) fn assign(&mut self, pos: Position, value: u8) {
        debug_assert!((1..=9).contains(&value));
        self.eliminate(pos, value);
        self.grid.set(pos, value);
        self.candidates[pos.row][pos.col] = DigitSet::empty();
    }

    /// Remove `value` from the candidate sets of all cells sharing a house
    /// with `pos`, the cell itself included. Filled cells already have an
    /// empty set, so re-eliminating there is a no-op.
    pub(crate) fn eliminate(&mut self, pos: Position, value: u8) {
        for house in pos.houses() {
            for cell in house.cells() {
                self.candidates[cell.row][cell.col].remove(value);
            }
        }
    }

    /// Whether placing `value` at `pos` conflicts with a filled cell in the
    /// row, column, or box. Works off the live grid, not the candidate
    /// sets: during backtracking the sets reflect pre-search state and are
    /// stale for cells the search has cleared and refilled.
    pub(crate) fn is_valid_value(&self, pos: Position, value: u8) -> bool {
        pos.houses()
            .iter()
            .all(|house| house.cells().iter().all(|&c| self.grid.value(c) != value))
    }

    /// Verify the 45-sum rule on all 27 houses. Sums alone do not rule out
    /// duplicates, but every placement below went through either
    /// elimination or `is_valid_value`, and the combination is sufficient.
    pub fn is_solved(&self) -> bool {
        House::all().all(|house| {
            house
                .cells()
                .iter()
                .map(|&c| u32::from(self.grid.value(c)))
                .sum::<u32>()
                == 45
        })
    }

    /// Reject grids whose givens already collide within a house.
    fn check_givens(&self) -> Result<(), SolveError> {
        for house in House::all() {
            let mut seen = DigitSet::empty();
            for cell in house.cells() {
                if let Some(value) = self.grid.get(cell) {
                    if seen.contains(value) {
                        return Err(SolveError::ConflictingGivens { value, house });
                    }
                    seen.insert(value);
                }
            }
        }
        Ok(())
    }
}
