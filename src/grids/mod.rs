pub mod wall_grid;

pub use wall_grid::Grid;

use std::fmt;
use std::ops::{Add, BitOr, Neg};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

/// Cell coordinates, `x` counts columns left to right and `y` counts rows top to bottom.
///
/// Signed so that stepping off the edge of the grid produces a position that
/// `Grid::contains` can reject instead of wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: isize,
    pub y: isize,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Self::Output {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step this direction represents.
    pub fn offset(self) -> Position {
        match self {
            Direction::Up => Position::new(0, -1),
            Direction::Down => Position::new(0, 1),
            Direction::Left => Position::new(-1, 0),
            Direction::Right => Position::new(1, 0),
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        match self {
            Direction::Up => 1 << 0,
            Direction::Down => 1 << 1,
            Direction::Left => 1 << 2,
            Direction::Right => 1 << 3,
        }
    }
}

impl Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        self.opposite()
    }
}

/// The set of open edges of a single cell.
///
/// Only the four real directions can be members, the empty set is the one and
/// only way to say "none".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Directions(u8);

impl Directions {
    pub const NONE: Directions = Directions(0);

    #[inline]
    pub fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    #[inline]
    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    #[inline]
    pub fn union(self, other: Directions) -> Directions {
        Directions(self.0 | other.0)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in `Direction::ALL` order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .iter()
            .copied()
            .filter(move |direction| self.contains(*direction))
    }
}

impl From<Direction> for Directions {
    fn from(direction: Direction) -> Self {
        Directions(direction.bit())
    }
}

impl BitOr for Directions {
    type Output = Directions;

    fn bitor(self, rhs: Directions) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOr<Direction> for Directions {
    type Output = Directions;

    fn bitor(self, rhs: Direction) -> Self::Output {
        self.union(rhs.into())
    }
}

impl fmt::Display for Directions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for direction in self.iter() {
            write!(f, "{}", direction.glyph())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test_directions {
    use super::*;

    #[test]
    fn opposites_pair_up() {
        for direction in Direction::ALL.iter().copied() {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
            assert_eq!(-direction, direction.opposite());
        }
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
    }

    #[test]
    fn offsets_cancel_with_opposite() {
        for direction in Direction::ALL.iter().copied() {
            let there_and_back = Position::ORIGIN + direction.offset() + direction.opposite().offset();
            assert_eq!(there_and_back, Position::ORIGIN);
        }
        assert_eq!(Direction::Up.offset(), Position::new(0, -1));
        assert_eq!(Direction::Right.offset(), Position::new(1, 0));
    }

    #[test]
    fn glyphs() {
        let glyphs: String = Direction::ALL.iter().map(|d| d.glyph()).collect();
        assert_eq!(glyphs, "UDLR");
    }

    #[test]
    fn set_operations() {
        let mut set = Directions::NONE;
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.to_string(), "-");

        set.insert(Direction::Right);
        set.insert(Direction::Up);
        set.insert(Direction::Up);
        assert!(!set.is_empty());
        assert_eq!(set.len(), 2);
        assert!(set.contains(Direction::Up));
        assert!(set.contains(Direction::Right));
        assert!(!set.contains(Direction::Down));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Direction::Up, Direction::Right]);
        assert_eq!(set.to_string(), "UR");

        let all = Direction::ALL
            .iter()
            .fold(Directions::NONE, |acc, direction| acc | *direction);
        assert_eq!(all.len(), 4);
        assert_eq!(set.union(all), all);
        assert_eq!(Directions::NONE | Directions::NONE, Directions::NONE);
    }
}
