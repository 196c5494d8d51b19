/// One of the four directions a bubble can have a neighbour in.
///
/// Row 0 is the top row, so `North` decreases the row and `South` increases it.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumCount,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    North,
    West,
    South,
    East,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::West,
        Direction::South,
        Direction::East,
    ];

    /// Returns the antipodal direction. This is an involution.
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::West => Direction::East,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
        }
    }

    /// Unit `(row, column)` offset of this direction.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::West => (0, -1),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
        }
    }

    /// Stable slot index used for per-direction storage.
    #[inline]
    pub(crate) const fn as_index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn opposite_is_an_involution() {
        for direction in Direction::iter() {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }
    }

    #[test]
    fn directions_form_two_opposite_pairs() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::West.opposite(), Direction::East);
        assert_eq!(Direction::COUNT, 4);
    }

    #[test]
    fn opposite_deltas_cancel_out() {
        for direction in Direction::ALL {
            let (dr, dc) = direction.delta();
            let (or, oc) = direction.opposite().delta();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }

    #[test]
    fn slot_indices_are_distinct() {
        let mut seen = [false; Direction::COUNT];
        for direction in Direction::ALL {
            assert!(!seen[direction.as_index()]);
            seen[direction.as_index()] = true;
        }
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("north".parse::<Direction>(), Ok(Direction::North));
        assert_eq!("EAST".parse::<Direction>(), Ok(Direction::East));
        assert_eq!(Direction::West.to_string(), "west");
    }
}
