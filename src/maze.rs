use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ConfigError;
use crate::generators::backtracking::BackTracker;
use crate::generators::eller::Eller;
use crate::generators::prim::RandPrims;
use crate::generators::{Engine, GeneratorKind};
use crate::grid::Grid;

/// Facade over the three generation engines.
///
/// Owns the grid, the RNG, and the active engine; callers drive it one
/// [`step`](MazeGenerator::step) at a time, at whatever pace they like, and
/// read the grid in between. The grid is only ever handed out by shared
/// reference, so nothing outside the generator can mutate it.
pub struct MazeGenerator<R: Rng = StdRng> {
    grid: Grid,
    engine: Engine,
    kind: GeneratorKind,
    rng: R,
}

impl MazeGenerator<StdRng> {
    /// Builds a generator with an entropy-seeded RNG.
    pub fn new(kind: GeneratorKind, rows: usize, columns: usize) -> Result<Self, ConfigError> {
        Self::with_rng(kind, rows, columns, StdRng::from_entropy())
    }
}

impl<R: Rng> MazeGenerator<R> {
    /// Builds a generator around a caller-supplied RNG. Two generators fed
    /// the same RNG stream produce bit-identical grids at every step.
    pub fn with_rng(
        kind: GeneratorKind,
        rows: usize,
        columns: usize,
        rng: R,
    ) -> Result<Self, ConfigError> {
        if rows == 0 || columns == 0 {
            return Err(ConfigError::InvalidDimensions { rows, columns });
        }

        let mut grid = Grid::with_dims(rows, columns);
        let engine = match kind {
            GeneratorKind::BackTracking => Engine::BackTracking(BackTracker::new(&mut grid)),
            GeneratorKind::RandPrims => {
                Engine::RandPrims(RandPrims::new(&mut grid, (rows / 2, columns / 2)))
            }
            GeneratorKind::Eller => Engine::Eller(Eller::new(&grid)),
        };

        debug!("{:?} generator over {}x{} grid", kind, rows, columns);
        Ok(Self {
            grid,
            engine,
            kind,
            rng,
        })
    }

    /// Advances generation by one unit of work and reports whether the run
    /// is now terminal. Once terminal, further calls change nothing.
    pub fn step(&mut self) -> bool {
        if self.engine.is_done() {
            return true;
        }
        self.engine.step(&mut self.grid, &mut self.rng);
        let done = self.engine.is_done();
        if done {
            debug!("{:?} generation complete", self.kind);
        }
        done
    }

    pub fn is_done(&self) -> bool {
        self.engine.is_done()
    }

    /// Read-only view of the grid; safe to inspect mid-generation.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn kind(&self) -> GeneratorKind {
        self.kind
    }

    /// The backtracker's current carving head, for visualization. `None`
    /// for the other engines and once a run is done.
    pub fn head(&self) -> Option<(usize, usize)> {
        self.engine.head()
    }

    /// Runs the remaining steps to completion.
    pub fn generate(&mut self) -> &Grid {
        while !self.step() {}
        &self.grid
    }
}
