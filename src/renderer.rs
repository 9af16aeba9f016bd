use std::fmt;

use crate::error::MazeError;
use crate::grids::{Direction, Grid, Position};

/// Blank columns inside every cell.
pub const CELL_WIDTH: usize = 3;

const CORNER: char = '+';
const HORIZONTAL_WALL: char = '-';
const VERTICAL_WALL: char = '|';
const OPEN: char = ' ';

/// Draws the grid as ASCII art.
///
/// Each row contributes its top edge line and its left edge line, then a
/// single closed bottom edge finishes the picture. Every line ends in `\n`.
pub fn render(grid: &Grid) -> Result<String, MazeError> {
    let line_len = grid.width() * (CELL_WIDTH + 1) + 2;
    let mut out = String::with_capacity(line_len * (2 * grid.height() + 1));

    for y in 0..grid.height() {
        top_edge(grid, y as isize, &mut out)?;
        left_edge(grid, y as isize, &mut out)?;
    }
    bottom_edge(grid, &mut out);

    Ok(out)
}

fn top_edge(grid: &Grid, y: isize, out: &mut String) -> Result<(), MazeError> {
    for x in 0..grid.width() as isize {
        let fill = if grid.get_cell(Position::new(x, y))?.contains(Direction::Up) {
            OPEN
        } else {
            HORIZONTAL_WALL
        };
        out.push(CORNER);
        push_repeated(out, fill, CELL_WIDTH);
    }
    out.push(CORNER);
    out.push('\n');
    Ok(())
}

fn left_edge(grid: &Grid, y: isize, out: &mut String) -> Result<(), MazeError> {
    for x in 0..grid.width() as isize {
        if grid.get_cell(Position::new(x, y))?.contains(Direction::Left) {
            out.push(OPEN);
        } else {
            out.push(VERTICAL_WALL);
        }
        push_repeated(out, OPEN, CELL_WIDTH);
    }
    out.push(VERTICAL_WALL);
    out.push('\n');
    Ok(())
}

fn bottom_edge(grid: &Grid, out: &mut String) {
    for _ in 0..grid.width() {
        out.push(CORNER);
        push_repeated(out, HORIZONTAL_WALL, CELL_WIDTH);
    }
    out.push(CORNER);
    out.push('\n');
}

#[inline]
fn push_repeated(out: &mut String, c: char, count: usize) {
    out.extend(std::iter::repeat(c).take(count));
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = render(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
