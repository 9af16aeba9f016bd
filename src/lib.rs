//! Perfect maze generation by randomized depth first carving, rendered as
//! ASCII art.
//!
//! ```
//! let maze = maze_carver::build_maze(4, 3).unwrap();
//! assert_eq!(maze.lines().count(), 7);
//! ```

pub mod error;
pub mod generators;
pub mod grids;
pub mod renderer;

use rand::Rng;

pub use error::MazeError;
pub use generators::backtracker::RecursiveBacktracker;
pub use generators::Generator;
pub use grids::{Direction, Directions, Grid, Position};

/// Carves a `width` x `height` maze with the thread local rng and renders it.
pub fn build_maze(width: usize, height: usize) -> Result<String, MazeError> {
    build_maze_with_rng(width, height, rand::thread_rng())
}

/// Same as [`build_maze`] but draws every shuffle from `rng`, so a seeded rng
/// gives the same maze every time.
pub fn build_maze_with_rng<R: Rng>(
    width: usize,
    height: usize,
    rng: R,
) -> Result<String, MazeError> {
    let mut generator = RecursiveBacktracker::with_rng(width, height, rng)?;
    let grid = generator.generate_maze()?;
    renderer::render(grid)
}
