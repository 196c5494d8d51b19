//! Error types raised by board operations.
//!
//! Every variant describes invalid input from the caller (bad coordinates,
//! bad dimensions, bad links). None of them leave the board in a modified
//! state: operations validate first and mutate afterwards.

use crate::model::{Direction, Position};

/// Errors surfaced by [`Board`](crate::Board) operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board dimension {dimension} is invalid: need at least 1 and an addressable dimension² cells")]
    InvalidDimension { dimension: usize },

    #[error("position {position} is outside a board of dimension {dimension}")]
    OutOfBounds {
        position: Position,
        dimension: usize,
    },

    #[error("cell {position} cannot be linked to itself ({direction})")]
    SelfLink {
        position: Position,
        direction: Direction,
    },

    #[error("board of dimension {dimension} needs {expected} cells, snapshot has {cells}")]
    CellCount {
        dimension: usize,
        expected: usize,
        cells: usize,
    },

    #[error("cell {position} links {direction} to {neighbour}, which has no link back")]
    AsymmetricLink {
        position: Position,
        direction: Direction,
        neighbour: Position,
    },
}

impl BoardError {
    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDimension { .. } => "BOARD_INVALID_DIMENSION",
            Self::OutOfBounds { .. } => "BOARD_OUT_OF_BOUNDS",
            Self::SelfLink { .. } => "BOARD_SELF_LINK",
            Self::CellCount { .. } => "BOARD_CELL_COUNT",
            Self::AsymmetricLink { .. } => "BOARD_ASYMMETRIC_LINK",
        }
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
