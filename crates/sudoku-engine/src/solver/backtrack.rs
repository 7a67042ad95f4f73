//! Exhaustive depth-first completion of whatever propagation left open.

use super::Solver;
use crate::{Grid, Position};

/// Fill every remaining blank by trial and error.
///
/// The cell order and each cell's candidate list are snapshotted from the
/// candidate sets before the search starts and never recomputed; the sets
/// go stale as the search clears and refills cells, so legality is
/// re-derived from the live grid at every placement instead. Returns false
/// once every candidate of the first cell is exhausted, leaving the grid
/// partially filled.
pub(super) fn complete(solver: &mut Solver) -> bool {
    let cells: Vec<(Position, Vec<u8>)> = Grid::positions()
        .filter(|&pos| solver.grid.value(pos) == 0)
        .map(|pos| (pos, solver.candidates(pos).iter().collect()))
        .collect();
    let mut next = vec![0usize; cells.len()];

    let mut i = 0;
    loop {
        if i == cells.len() {
            return true;
        }
        let (pos, candidates) = &cells[i];

        if next[i] == candidates.len() {
            // Nothing left to try here; unwind to the previous cell.
            next[i] = 0;
            solver.grid.set(*pos, 0);
            if i == 0 {
                return false;
            }
            i -= 1;
            continue;
        }

        let value = candidates[next[i]];
        next[i] += 1;
        if solver.is_valid_value(*pos, value) {
            solver.grid.set(*pos, value);
            i += 1;
        } else {
            solver.grid.set(*pos, 0);
        }
    }
}
