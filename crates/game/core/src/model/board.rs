use super::{Bubble, BubbleColor, Direction, Position};
use crate::config::BoardConfig;
use crate::error::{BoardError, Result};

/// Square grid of bubbles stored row-major.
///
/// The board never resizes. Colors and neighbour links can change for the
/// lifetime of the board, but only through the methods below, which keep every
/// link symmetric.
///
/// Deserialized boards go through the same checks as [`Board::new`] plus a
/// symmetry check of every stored link.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "BoardSnapshot"))]
pub struct Board {
    dimension: usize,
    bubbles: Vec<Bubble>,
}

/// Unchecked wire form of a [`Board`].
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
struct BoardSnapshot {
    dimension: usize,
    bubbles: Vec<Bubble>,
}

impl Board {
    /// Creates a `dimension × dimension` board of empty, unlinked cells.
    pub fn new(dimension: usize) -> Result<Self> {
        let cells = Self::cells_for(dimension)?;
        Ok(Self {
            dimension,
            bubbles: vec![Bubble::default(); cells],
        })
    }

    fn cells_for(dimension: usize) -> Result<usize> {
        match dimension.checked_mul(dimension) {
            Some(cells) if dimension > 0 && cells <= isize::MAX as usize => Ok(cells),
            _ => Err(BoardError::InvalidDimension { dimension }),
        }
    }

    pub fn with_config(config: &BoardConfig) -> Result<Self> {
        Self::new(config.dimension)
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of cells, always `dimension²`.
    pub fn cell_count(&self) -> usize {
        self.bubbles.len()
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row < self.dimension && position.column < self.dimension
    }

    /// Row-major index of `position`.
    pub fn index_of(&self, position: Position) -> Result<usize> {
        if !self.contains(position) {
            return Err(BoardError::OutOfBounds {
                position,
                dimension: self.dimension,
            });
        }
        Ok(position.row * self.dimension + position.column)
    }

    pub fn position_of(&self, index: usize) -> Option<Position> {
        (index < self.bubbles.len())
            .then(|| Position::new(index / self.dimension, index % self.dimension))
    }

    pub fn bubble(&self, position: Position) -> Result<&Bubble> {
        let index = self.index_of(position)?;
        Ok(&self.bubbles[index])
    }

    /// Iterates over every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Bubble)> + '_ {
        let dimension = self.dimension;
        self.bubbles
            .iter()
            .enumerate()
            .map(move |(index, bubble)| {
                (Position::new(index / dimension, index % dimension), bubble)
            })
    }

    pub fn color(&self, position: Position) -> Result<Option<BubbleColor>> {
        Ok(self.bubble(position)?.color())
    }

    /// Sets the color of a cell and returns the previous one.
    pub fn set_color(
        &mut self,
        position: Position,
        color: Option<BubbleColor>,
    ) -> Result<Option<BubbleColor>> {
        let index = self.index_of(position)?;
        let previous = self.bubbles[index].color();
        self.bubbles[index].set_color(color);
        Ok(previous)
    }

    /// Assigns every cell the color produced by `color_at`.
    pub fn fill_with<F>(&mut self, mut color_at: F)
    where
        F: FnMut(Position) -> Option<BubbleColor>,
    {
        let dimension = self.dimension;
        for (index, bubble) in self.bubbles.iter_mut().enumerate() {
            bubble.set_color(color_at(Position::new(index / dimension, index % dimension)));
        }
    }

    /// Linked neighbour of `position` in `direction`.
    pub fn neighbour(&self, position: Position, direction: Direction) -> Result<Option<Position>> {
        Ok(self.bubble(position)?.neighbour(direction))
    }

    /// Geometric neighbour of `position` in `direction`, regardless of links.
    /// `None` at the board edge.
    pub fn grid_neighbour(
        &self,
        position: Position,
        direction: Direction,
    ) -> Result<Option<Position>> {
        self.index_of(position)?;
        Ok(position
            .step(direction)
            .filter(|next| self.contains(*next)))
    }

    /// Clears all links of the cell at `position` together with the back links
    /// its former neighbours held to it.
    pub fn reset_neighbours(&mut self, position: Position) -> Result<()> {
        self.index_of(position)?;
        for direction in Direction::ALL {
            self.unlink(position, direction);
        }
        Ok(())
    }

    /// Links `position` to `neighbour` in `direction` and `neighbour` back to
    /// `position` in the opposite direction.
    ///
    /// Any previous partner on either end is unlinked first. Passing `None`
    /// removes the link in `direction` on both ends.
    pub fn update_neighbours(
        &mut self,
        position: Position,
        direction: Direction,
        neighbour: Option<Position>,
    ) -> Result<()> {
        self.index_of(position)?;
        if let Some(other) = neighbour {
            self.index_of(other)?;
            if other == position {
                return Err(BoardError::SelfLink {
                    position,
                    direction,
                });
            }
        }

        self.unlink(position, direction);
        if let Some(other) = neighbour {
            self.unlink(other, direction.opposite());
            self.slot(position).set_neighbour(direction, Some(other));
            self.slot(other)
                .set_neighbour(direction.opposite(), Some(position));
        }
        Ok(())
    }

    /// Full relinking pass: clears every link, then connects each cell to its
    /// geometric neighbours.
    pub fn link_grid(&mut self) {
        for bubble in &mut self.bubbles {
            bubble.reset_neighbours();
        }
        let dimension = self.dimension;
        for index in 0..self.bubbles.len() {
            let position = Position::new(index / dimension, index % dimension);
            for direction in Direction::ALL {
                let next = position
                    .step(direction)
                    .filter(|next| self.contains(*next));
                self.bubbles[index].set_neighbour(direction, next);
            }
        }
    }

    /// Returns true if every link has a matching back link.
    pub fn is_symmetric(&self) -> bool {
        self.iter().all(|(position, bubble)| {
            bubble.neighbours().all(|(direction, other)| {
                self.bubble(other)
                    .map(|back| back.neighbour(direction.opposite()) == Some(position))
                    .unwrap_or(false)
            })
        })
    }

    /// Removes the link in `direction` from `position` and the matching back
    /// link. Callers have already bounds-checked `position`.
    fn unlink(&mut self, position: Position, direction: Direction) {
        if let Some(previous) = self.slot(position).set_neighbour(direction, None) {
            let back = self.slot(previous);
            if back.neighbour(direction.opposite()) == Some(position) {
                back.set_neighbour(direction.opposite(), None);
            }
        }
    }

    fn slot(&mut self, position: Position) -> &mut Bubble {
        let index = position.row * self.dimension + position.column;
        &mut self.bubbles[index]
    }
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = BoardError;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self> {
        let BoardSnapshot { dimension, bubbles } = snapshot;
        let expected = Self::cells_for(dimension)?;
        if bubbles.len() != expected {
            return Err(BoardError::CellCount {
                dimension,
                expected,
                cells: bubbles.len(),
            });
        }

        let board = Self { dimension, bubbles };
        for (position, bubble) in board.iter() {
            for (direction, neighbour) in bubble.neighbours() {
                board.index_of(neighbour)?;
                if neighbour == position {
                    return Err(BoardError::SelfLink {
                        position,
                        direction,
                    });
                }
                if board.bubble(neighbour)?.neighbour(direction.opposite()) != Some(position) {
                    return Err(BoardError::AsymmetricLink {
                        position,
                        direction,
                        neighbour,
                    });
                }
            }
        }
        Ok(board)
    }
}
