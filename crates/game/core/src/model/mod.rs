//! Board model types.
//!
//! - [`Direction`]: the four neighbour directions and their opposites
//! - [`Position`]: row/column coordinate on the board
//! - [`BubbleColor`]: the bubble palette
//! - [`Bubble`]: one cell with its color and neighbour links
//! - [`Board`]: the square grid that owns every bubble
mod board;
mod bubble;
mod color;
mod direction;
mod position;

pub use board::Board;
pub use bubble::Bubble;
pub use color::BubbleColor;
pub use direction::Direction;
pub use position::Position;
