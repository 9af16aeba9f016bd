use log::{debug, trace};
use rand::prelude::*;

use crate::error::MazeError;
use crate::generators::{shuffle, Generator};
use crate::grids::{Direction, Grid, Position};

/// A cell on the current path along with the directions it has yet to try,
/// stored back to front so the next one to try is at the end.
#[derive(Debug)]
struct Frame {
    position: Position,
    remaining: Vec<Direction>,
}

/// Randomized depth first carving.
///
/// Equivalent to recursing into every newly linked neighbour before trying the
/// next direction, but the path is kept on an explicit stack so large grids
/// don't run out of call stack.
#[derive(Debug)]
pub struct RecursiveBacktracker<R: Rng = ThreadRng> {
    grid: Grid,
    rng: R,
    start: Position,
    stack: Vec<Frame>,
    links: usize,
    pub done: bool,
}

impl RecursiveBacktracker<ThreadRng> {
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        Self::with_rng(width, height, rand::thread_rng())
    }
}

impl<R: Rng> RecursiveBacktracker<R> {
    pub fn with_rng(width: usize, height: usize, rng: R) -> Result<Self, MazeError> {
        let grid = Grid::new(width, height)?;
        let mut generator = Self {
            grid,
            rng,
            start: Position::ORIGIN,
            stack: Vec::with_capacity(width * height),
            links: 0,
            done: false,
        };
        generator.push_frame(Position::ORIGIN);
        Ok(generator)
    }

    fn push_frame(&mut self, position: Position) {
        let mut remaining = shuffle(&Direction::ALL, &mut self.rng);
        remaining.reverse();
        self.stack.push(Frame {
            position,
            remaining,
        });
    }

    // the start cell has no edges until its first link, so it can't rely on
    // `is_visited` alone
    fn is_claimed(&self, position: Position) -> Result<bool, MazeError> {
        Ok(position == self.start || self.grid.is_visited(position)?)
    }

    pub fn link_count(&self) -> usize {
        self.links
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

impl<R: Rng> Generator for RecursiveBacktracker<R> {
    fn step_generation(&mut self) -> Result<(), MazeError> {
        while let Some(frame) = self.stack.last_mut() {
            let current = frame.position;
            let direction = match frame.remaining.pop() {
                Some(direction) => direction,
                None => {
                    // dead end, backtrack
                    self.stack.pop();
                    continue;
                }
            };

            let next = current + direction.offset();
            if !self.grid.contains(next) || self.is_claimed(next)? {
                continue;
            }

            self.grid.link(current, next, direction)?;
            self.links += 1;
            trace!(
                "carved {} from ({}, {}) to ({}, {})",
                direction.glyph(),
                current.x,
                current.y,
                next.x,
                next.y
            );
            self.push_frame(next);
            return Ok(());
        }

        if !self.done {
            debug!(
                "finished {}x{} maze with {} links",
                self.grid.width(),
                self.grid.height(),
                self.links
            );
        }
        self.done = true;
        Ok(())
    }

    fn next_step(&mut self) -> Result<&Grid, MazeError> {
        self.step_generation()?;
        Ok(&self.grid)
    }

    fn generate_maze(&mut self) -> Result<&Grid, MazeError> {
        debug!(
            "carving {}x{} maze",
            self.grid.width(),
            self.grid.height()
        );
        loop {
            self.step_generation()?;
            if self.done {
                break;
            }
        }

        Ok(&self.grid)
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
