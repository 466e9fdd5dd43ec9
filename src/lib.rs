//! Incremental maze generation over a rectangular grid.
//!
//! A [`MazeGenerator`] carves a perfect maze (a spanning tree: connected,
//! acyclic, touching every cell) one step per [`MazeGenerator::step`] call,
//! so a caller can pace generation externally and render the grid between
//! steps. Three engines are available through [`GeneratorKind`]: depth-first
//! backtracking, randomized Prim's, and Eller's row-by-row algorithm.
//!
//! ```
//! use mazegen::{GeneratorKind, MazeGenerator};
//!
//! let mut maze = MazeGenerator::new(GeneratorKind::BackTracking, 8, 12).unwrap();
//! while !maze.step() {
//!     // inspect maze.grid() here, e.g. to draw a frame
//! }
//! assert!(maze.is_done());
//! ```

pub mod error;
pub mod generators;
pub mod grid;
mod maze;

pub use error::ConfigError;
pub use generators::GeneratorKind;
pub use grid::{CellFlags, Dimensions, Direction, Grid};
pub use maze::MazeGenerator;
