use thiserror::Error;

use crate::grids::{Direction, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("invalid maze dimensions {width}x{height}, both must be at least 1")]
    InvalidDimensions { width: usize, height: usize },

    /// Only reachable through a bug in a generator, never through user input.
    #[error("internal invariant violated at {position:?}: {reason}")]
    InternalInvariantViolation {
        position: Position,
        reason: InvariantKind,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantKind {
    #[error("position is outside the grid")]
    OutOfBounds,
    #[error("destination is not one {0:?} step away from the origin")]
    NotAdjacent(Direction),
}

impl MazeError {
    pub(crate) fn out_of_bounds(position: Position) -> Self {
        MazeError::InternalInvariantViolation {
            position,
            reason: InvariantKind::OutOfBounds,
        }
    }
}
