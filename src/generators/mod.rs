pub mod backtracker;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::MazeError;
use crate::grids::Grid;

pub trait Generator {
    /// Carves at most one new edge.
    fn step_generation(&mut self) -> Result<(), MazeError>;
    fn next_step(&mut self) -> Result<&Grid, MazeError>;
    fn generate_maze(&mut self) -> Result<&Grid, MazeError>;
    fn is_done(&self) -> bool;
}

/// Returns a uniformly permuted copy of `items`, drawing from `rng`.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
