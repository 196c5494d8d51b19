use strum::EnumCount;

use super::{BubbleColor, Direction, Position};

/// One cell of the board: a color tag plus one neighbour slot per direction.
///
/// Neighbour slots hold the position of the linked cell inside the owning
/// [`Board`](super::Board). Links are only changed through the board so that
/// they stay symmetric.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bubble {
    color: Option<BubbleColor>,
    neighbours: [Option<Position>; Direction::COUNT],
}

impl Bubble {
    /// Creates an unlinked bubble with the given color.
    pub fn new(color: Option<BubbleColor>) -> Self {
        Self {
            color,
            neighbours: [None; Direction::COUNT],
        }
    }

    /// Color of this bubble, `None` when the cell is empty.
    pub fn color(&self) -> Option<BubbleColor> {
        self.color
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none()
    }

    /// Returns the linked cell in `direction`, if any.
    pub fn neighbour(&self, direction: Direction) -> Option<Position> {
        self.neighbours[direction.as_index()]
    }

    /// Iterates over the directions that currently carry a link.
    pub fn neighbours(&self) -> impl Iterator<Item = (Direction, Position)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| self.neighbour(direction).map(|pos| (direction, pos)))
    }

    pub fn link_count(&self) -> usize {
        self.neighbours.iter().flatten().count()
    }

    pub(crate) fn set_color(&mut self, color: Option<BubbleColor>) {
        self.color = color;
    }

    /// Sets a single slot, returning the previous occupant.
    pub(crate) fn set_neighbour(
        &mut self,
        direction: Direction,
        neighbour: Option<Position>,
    ) -> Option<Position> {
        std::mem::replace(&mut self.neighbours[direction.as_index()], neighbour)
    }

    /// Clears every slot of this cell only. The board clears back links.
    pub(crate) fn reset_neighbours(&mut self) {
        self.neighbours = [None; Direction::COUNT];
    }
}
