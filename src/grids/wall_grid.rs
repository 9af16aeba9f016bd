use crate::error::{InvariantKind, MazeError};
use crate::grids::{Dimensions, Direction, Directions, Position};

/// Per-cell record of carved edges, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub dims: Dimensions,

    cells: Vec<Directions>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }

        let dims = Dimensions { width, height };
        Ok(Self {
            cells: vec![Directions::NONE; dims.cell_count()],
            dims,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.dims.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.dims.height
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as usize) < self.dims.width
            && (position.y as usize) < self.dims.height
    }

    #[inline]
    fn index_of(&self, position: Position) -> Result<usize, MazeError> {
        if !self.contains(position) {
            return Err(MazeError::out_of_bounds(position));
        }
        Ok((self.dims.width * position.y as usize) + position.x as usize)
    }

    pub fn get_cell(&self, position: Position) -> Result<Directions, MazeError> {
        Ok(self.cells[self.index_of(position)?])
    }

    /// A cell counts as visited once it has at least one open edge.
    pub fn is_visited(&self, position: Position) -> Result<bool, MazeError> {
        Ok(!self.get_cell(position)?.is_empty())
    }

    /// Opens the edge between `origin` and `destination`, on both sides.
    ///
    /// This is the only way cells gain edges, which keeps every edge paired
    /// with its opposite on the neighbouring cell.
    pub fn link(
        &mut self,
        origin: Position,
        destination: Position,
        direction: Direction,
    ) -> Result<(), MazeError> {
        if origin + direction.offset() != destination {
            return Err(MazeError::InternalInvariantViolation {
                position: destination,
                reason: InvariantKind::NotAdjacent(direction),
            });
        }
        let origin_index = self.index_of(origin)?;
        let destination_index = self.index_of(destination)?;

        self.cells[origin_index].insert(direction);
        self.cells[destination_index].insert(direction.opposite());
        Ok(())
    }

    /// Every position, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let width = self.dims.width as isize;
        let height = self.dims.height as isize;
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// Number of carved edges. Each edge is stored twice, once per side.
    pub fn edge_count(&self) -> usize {
        self.cells.iter().map(|cell| cell.len()).sum::<usize>() / 2
    }
}
