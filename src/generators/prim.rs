use rand::Rng;

use crate::generators::{carve_passage, unvisited_neighbors};
use crate::grid::{CellFlags, Grid};

/// Randomized Prim's carver.
///
/// Unlike the backtracker this grows from a random member of the whole
/// active set each step, not from the most recent cell, which produces the
/// characteristic short-corridor texture. A cell leaves the set only once
/// it has no unclaimed neighbour left.
pub struct RandPrims {
    set: Vec<(usize, usize)>,
}

impl RandPrims {
    pub(crate) fn new(grid: &mut Grid, seed: (usize, usize)) -> Self {
        grid.set_flags(seed.0, seed.1, CellFlags::VISITING);
        Self { set: vec![seed] }
    }

    pub(crate) fn step<R: Rng>(&mut self, grid: &mut Grid, rng: &mut R) {
        if self.set.is_empty() {
            return;
        }

        let index = rng.gen_range(0..self.set.len());
        let (row, col) = self.set[index];

        let candidates = unvisited_neighbors(grid, row, col);
        if candidates.is_empty() {
            grid.set_flags(row, col, CellFlags::VISITED);
            grid.clear_flags(row, col, CellFlags::VISITING);
            self.set.swap_remove(index);
        } else {
            let (dir, next) = candidates[rng.gen_range(0..candidates.len())];
            carve_passage(grid, (row, col), dir, next);
            grid.set_flags(next.0, next.1, CellFlags::VISITING);
            // The chosen cell stays in the set; it may still have other
            // unclaimed neighbours.
            self.set.push(next);
        }
    }

    pub(crate) fn is_done(&self) -> bool {
        self.set.is_empty()
    }
}
