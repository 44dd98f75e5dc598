//! Game module - an engine instance owning board, hand, and random source
//!
//! The interactive shell holds a `Game` and re-renders from the results the
//! transition methods return; it never reaches into engine internals. All
//! state changes go through [`Game::place`], which runs the full placement
//! protocol, or [`Game::reset`].

use crate::core::board::Board;
use crate::core::hand::Hand;
use crate::core::rng::SimpleRng;
use crate::core::snapshot::GameSnapshot;
use crate::engine::place::{self, PlaceOutcome, Rejected};
use crate::types::{ShapeId, GRID_SIZE, HAND_CAPACITY};

/// A complete game session: 8x8 board, hand of shapes, seeded RNG
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    hand: Hand,
    rng: SimpleRng,
    /// Successful placements this session
    placements: u32,
    /// Rows cleared this session
    rows_cleared: u32,
    /// Columns cleared this session
    cols_cleared: u32,
}

impl Game {
    /// Create a new game with the given RNG seed: empty board, full hand
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let hand = Hand::starting(&mut rng);
        Self {
            board: Board::new(),
            hand,
            rng,
            placements: 0,
            rows_cleared: 0,
            cols_cleared: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn placements(&self) -> u32 {
        self.placements
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    pub fn cols_cleared(&self) -> u32 {
        self.cols_cleared
    }

    /// Current RNG state (restarting from it reproduces the remaining draw
    /// sequence)
    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }

    /// Whether `shape` fits at the hovered cell; used by the shell for
    /// hover feedback while dragging.
    pub fn can_place(&self, shape: ShapeId, anchor_row: i8, anchor_col: i8) -> bool {
        place::can_place(&self.board, shape, anchor_row, anchor_col)
    }

    /// Drop `shape` at the hovered cell, running the full placement
    /// protocol.
    ///
    /// On success the owned board and hand advance and the outcome reports
    /// the new board plus any cleared lines. On rejection the session state
    /// is exactly as before the call.
    pub fn place(
        &mut self,
        shape: ShapeId,
        anchor_row: i8,
        anchor_col: i8,
    ) -> Result<PlaceOutcome, Rejected> {
        let outcome = place::place(
            &self.board,
            &mut self.hand,
            &mut self.rng,
            shape,
            anchor_row,
            anchor_col,
        )?;

        self.board = outcome.board;
        self.placements += 1;
        self.rows_cleared += outcome.cleared_rows.len() as u32;
        self.cols_cleared += outcome.cleared_cols.len() as u32;

        Ok(outcome)
    }

    /// Whether any shape in the hand fits anywhere on the board.
    ///
    /// The shell may surface this as a stuck indicator.
    pub fn has_any_move(&self) -> bool {
        self.hand.slots().iter().any(|&shape| {
            (0..GRID_SIZE as i8).any(|row| {
                (0..GRID_SIZE as i8).any(|col| place::can_place(&self.board, shape, row, col))
            })
        })
    }

    /// Start over: empty board, fresh hand, counters at zero.
    ///
    /// The RNG sequence continues rather than rewinding, so consecutive
    /// sessions see different hands.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.hand = Hand::starting(&mut self.rng);
        self.placements = 0;
        self.rows_cleared = 0;
        self.cols_cleared = 0;
    }

    /// Fill a reusable snapshot with the current session state.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        out.hand = [None; HAND_CAPACITY];
        for (slot, &id) in out.hand.iter_mut().zip(self.hand.slots()) {
            *slot = Some(id);
        }

        out.seed = self.rng.state();
        out.placements = self.placements;
        out.rows_cleared = self.rows_cleared;
        out.cols_cleared = self.cols_cleared;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = Game::new(12345);

        assert_eq!(game.board().occupied_count(), 0);
        assert_eq!(game.hand().len(), HAND_CAPACITY);
        assert_eq!(game.placements(), 0);
        assert_eq!(game.rows_cleared(), 0);
        assert_eq!(game.cols_cleared(), 0);
    }

    #[test]
    fn test_same_seed_same_hand() {
        let a = Game::new(777);
        let b = Game::new(777);
        assert_eq!(a.hand(), b.hand());
    }

    #[test]
    fn test_place_advances_state() {
        let mut game = Game::new(12345);
        let shape = game.hand().slots()[0];
        let hand_len = game.hand().len();

        let outcome = game.place(shape, 4, 4).unwrap();

        assert_eq!(game.board(), &outcome.board);
        assert!(game.board().occupied_count() > 0);
        assert_eq!(game.placements(), 1);
        // No line can complete on an empty board from a single shape
        assert!(outcome.cleared_rows.is_empty());
        assert!(outcome.cleared_cols.is_empty());
        // One shape consumed (3 -> 2, no refill)
        assert_eq!(game.hand().len(), hand_len - 1);
    }

    #[test]
    fn test_rejected_place_changes_nothing() {
        let mut game = Game::new(12345);
        let shape = game.hand().slots()[0];

        game.place(shape, 4, 4).unwrap();
        let board_before = *game.board();
        let hand_before = game.hand().clone();
        let placements_before = game.placements();

        // Same anchor again overlaps whatever was just placed
        let next = game.hand().slots()[0];
        assert!(game.place(next, 4, 4).is_err());

        assert_eq!(game.board(), &board_before);
        assert_eq!(game.hand(), &hand_before);
        assert_eq!(game.placements(), placements_before);
    }

    #[test]
    fn test_hand_refills_after_third_placement() {
        let mut game = Game::new(9);

        // Any shape's footprint at anchor (r, c) stays within rows r-1..=r+1
        // and cols c-2..=c+1, so these anchors can never collide or leave
        // the grid, whatever the hand holds.
        let anchors = [(1, 2), (1, 6), (5, 2)];
        for &(row, col) in &anchors {
            let shape = game.hand().slots()[0];
            game.place(shape, row, col).unwrap();
        }

        assert_eq!(game.placements(), 3);
        assert_eq!(game.hand().len(), HAND_CAPACITY);
    }

    #[test]
    fn test_line_clear_updates_counters() {
        let mut game = Game::new(12345);

        // Row 6 missing only col 7; col 7 missing exactly the rows the I3
        // will fill (5, 6, 7).
        for col in 0..7 {
            game.board.set(6, col, true);
        }
        for row in 0..5 {
            game.board.set(row, 7, true);
        }
        game.hand = Hand::from_ids(&[ShapeId::I3]);

        let outcome = game.place(ShapeId::I3, 6, 7).unwrap();

        assert_eq!(outcome.cleared_rows.as_slice(), &[6]);
        assert_eq!(outcome.cleared_cols.as_slice(), &[7]);
        assert_eq!(game.rows_cleared(), 1);
        assert_eq!(game.cols_cleared(), 1);
        // Last hand shape was consumed, so the hand refilled
        assert_eq!(game.hand().len(), HAND_CAPACITY);
    }

    #[test]
    fn test_has_any_move() {
        let mut game = Game::new(12345);
        assert!(game.has_any_move());

        // Fill the whole board: nothing fits anywhere
        for row in 0..8 {
            for col in 0..8 {
                game.board.set(row, col, true);
            }
        }
        assert!(!game.has_any_move());
    }

    #[test]
    fn test_reset() {
        let mut game = Game::new(12345);
        let first_hand = game.hand().clone();
        let shape = game.hand().slots()[0];
        game.place(shape, 4, 4).unwrap();

        game.reset();

        assert_eq!(game.board().occupied_count(), 0);
        assert_eq!(game.hand().len(), HAND_CAPACITY);
        assert_eq!(game.placements(), 0);
        // RNG moved on, so the fresh hand is drawn from later state
        assert_ne!(game.hand(), &first_hand);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut game = Game::new(12345);
        let shape = game.hand().slots()[0];
        game.place(shape, 4, 4).unwrap();

        let snap = game.snapshot();
        let occupied: u32 = snap
            .board
            .iter()
            .flat_map(|row| row.iter())
            .map(|&v| u32::from(v))
            .sum();

        assert_eq!(occupied, game.board().occupied_count());
        assert_eq!(snap.placements, 1);
        assert_eq!(snap.hand[0], game.hand().slots().first().copied());
        assert_eq!(snap.seed, game.rng_state());
    }
}
