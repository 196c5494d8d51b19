use std::fmt;

use super::Direction;

/// Row/column coordinate of a cell. Row 0 is the top row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub const ORIGIN: Self = Self { row: 0, column: 0 };

    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Returns the adjacent coordinate in `direction`, or `None` when it would
    /// underflow. Upper bounds are checked by the board.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.delta();
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            column: self.column.checked_add_signed(dc)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_by_one_cell() {
        let origin = Position::new(3, 5);
        assert_eq!(origin.step(Direction::North), Some(Position::new(2, 5)));
        assert_eq!(origin.step(Direction::South), Some(Position::new(4, 5)));
        assert_eq!(origin.step(Direction::West), Some(Position::new(3, 4)));
        assert_eq!(origin.step(Direction::East), Some(Position::new(3, 6)));
    }

    #[test]
    fn step_off_the_top_left_is_none() {
        assert_eq!(Position::ORIGIN.step(Direction::North), None);
        assert_eq!(Position::ORIGIN.step(Direction::West), None);
    }
}
