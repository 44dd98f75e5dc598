//! Core module - pure game logic with no external dependencies
//!
//! This module contains the board, the shape catalog, the hand, and the
//! session state. It has zero dependencies on UI, networking, or I/O.

pub mod board;
pub mod game;
pub mod hand;
pub mod rng;
pub mod shapes;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use game::Game;
pub use hand::{draw, Hand};
pub use rng::SimpleRng;
pub use shapes::{color, mask, ShapeMask};
pub use snapshot::GameSnapshot;
