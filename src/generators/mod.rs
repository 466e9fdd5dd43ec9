pub mod backtracking;
pub mod eller;
pub mod prim;

use rand::Rng;

use crate::grid::{CellFlags, Direction, Grid};

use crate::generators::backtracking::BackTracker;
use crate::generators::eller::Eller;
use crate::generators::prim::RandPrims;

/// Algorithm selector for [`crate::MazeGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    BackTracking,
    RandPrims,
    Eller,
}

/// The active engine, carrying only its own frontier state. The facade
/// owns the grid and the RNG and threads them through every step.
pub(crate) enum Engine {
    BackTracking(BackTracker),
    RandPrims(RandPrims),
    Eller(Eller),
}

impl Engine {
    pub(crate) fn step<R: Rng>(&mut self, grid: &mut Grid, rng: &mut R) {
        match self {
            Engine::BackTracking(engine) => engine.step(grid, rng),
            Engine::RandPrims(engine) => engine.step(grid, rng),
            Engine::Eller(engine) => engine.step(grid, rng),
        }
    }

    pub(crate) fn is_done(&self) -> bool {
        match self {
            Engine::BackTracking(engine) => engine.is_done(),
            Engine::RandPrims(engine) => engine.is_done(),
            Engine::Eller(engine) => engine.is_done(),
        }
    }

    pub(crate) fn head(&self) -> Option<(usize, usize)> {
        match self {
            Engine::BackTracking(engine) => engine.head(),
            _ => None,
        }
    }
}

/// In-bounds neighbours of `(row, col)` carrying neither `VISITING` nor
/// `VISITED`, probed in fixed east, west, north, south order.
pub(crate) fn unvisited_neighbors(
    grid: &Grid,
    row: usize,
    col: usize,
) -> Vec<(Direction, (usize, usize))> {
    let mut candidates = Vec::with_capacity(4);
    for &dir in &Direction::ALL {
        if let Some((n_row, n_col)) = dir.neighbor_of(row, col, grid.dims()) {
            let touched = CellFlags::VISITING | CellFlags::VISITED;
            if !grid.get(n_row, n_col).intersects(touched) {
                candidates.push((dir, (n_row, n_col)));
            }
        }
    }
    candidates
}

/// Opens the passage from `from` towards `dir`, setting both half-flags
/// within the same call so readers never observe a one-sided passage.
pub(crate) fn carve_passage(
    grid: &mut Grid,
    from: (usize, usize),
    dir: Direction,
    to: (usize, usize),
) {
    grid.set_flags(from.0, from.1, dir.open_flag());
    grid.set_flags(to.0, to.1, (-dir).open_flag());
}
