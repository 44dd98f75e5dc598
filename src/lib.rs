//! Block puzzle engine - pure, deterministic, and testable
//!
//! An 8x8 drag-and-drop block puzzle: the player drags shapes from a
//! three-slot hand onto the board, and any row or column that becomes
//! completely occupied clears. This crate is the engine only - validity
//! checking, commit, simultaneous row/column clear detection, and hand
//! refill. Pointer tracking, rendering, and styling belong to the embedding
//! shell.
//!
//! The engine has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical hand sequences
//! - **Testable**: Every transition is a function of its explicit inputs
//! - **Portable**: Can run in any shell (terminal, GUI, web, headless)
//!
//! # Module Structure
//!
//! - [`crate::core::board`]: 8x8 grid with occupancy tracking and full-line checks
//! - [`crate::core::shapes`]: the fixed catalog of ten shape masks and colors
//! - [`crate::core::hand`]: the player's hand, drawn from an injected random source
//! - [`crate::core::game`]: a session instance owning board, hand, and RNG
//! - [`crate::core::snapshot`]: plain-data view for the rendering shell
//! - [`crate::engine::place`]: the placement protocol (validate, commit, clear)
//!
//! # Game Rules
//!
//! - The board is a fixed 8x8 grid; cells are empty or occupied and do not
//!   remember which shape filled them.
//! - A dragged shape anchors to the board cell under the pointer by its
//!   mask center; a placement where any cell would leave the grid or cover
//!   an occupied cell is rejected wholesale.
//! - Completed rows and columns are detected against the same committed
//!   board, so one drop can clear a row and a column at once.
//! - The hand holds three shapes and refills only when it empties.
//!
//! # Example
//!
//! ```
//! use octoblock::core::Game;
//!
//! let mut game = Game::new(12345);
//! let shape = game.hand().slots()[0];
//!
//! // Drop the first hand shape onto the center of the empty board.
//! let outcome = game.place(shape, 4, 4).expect("center placement fits");
//! assert_eq!(outcome.cleared_cells, 0);
//! assert!(game.board().occupied_count() > 0);
//! ```

pub mod core;
pub mod engine;
pub mod types;

// Re-export commonly used types for convenience
pub use crate::core::{Board, Game, GameSnapshot, Hand, SimpleRng};
pub use crate::engine::place::{can_place, place, PlaceOutcome, Rejected};
pub use crate::types::ShapeId;
