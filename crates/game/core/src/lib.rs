//! Board model for Burst.
//!
//! `burst-core` defines the square bubble grid and the adjacency links between
//! its cells. Gameplay rules (matching, cascading, swapping) build on top of
//! these types; rendering positions bubbles from the row/column coordinates
//! exposed here.
//!
//! All link mutation flows through [`Board`], which keeps neighbour links
//! symmetric: if A points to B in some direction, B points back to A in the
//! opposite direction.
pub mod config;
pub mod error;
pub mod model;

pub use config::BoardConfig;
pub use error::BoardError;
pub use model::{Board, Bubble, BubbleColor, Direction, Position};
