use crate::types::{ShapeId, GRID_SIZE, HAND_CAPACITY};

/// Plain-data view of a game session for the rendering shell.
///
/// The board is exported as a 0/1 grid; shape identity is not retained by
/// cells. Reusable via [`crate::core::Game::snapshot_into`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: [[u8; GRID_SIZE as usize]; GRID_SIZE as usize],
    /// Hand slots in display order; trailing `None`s when fewer than
    /// [`HAND_CAPACITY`] shapes remain.
    pub hand: [Option<ShapeId>; HAND_CAPACITY],
    pub seed: u32,
    pub placements: u32,
    pub rows_cleared: u32,
    pub cols_cleared: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; GRID_SIZE as usize]; GRID_SIZE as usize];
        self.hand = [None; HAND_CAPACITY];
        self.seed = 0;
        self.placements = 0;
        self.rows_cleared = 0;
        self.cols_cleared = 0;
    }

    /// Shapes still in hand (ignoring empty slots)
    pub fn hand_len(&self) -> usize {
        self.hand.iter().filter(|slot| slot.is_some()).count()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; GRID_SIZE as usize]; GRID_SIZE as usize],
            hand: [None; HAND_CAPACITY],
            seed: 0,
            placements: 0,
            rows_cleared: 0,
            cols_cleared: 0,
        }
    }
}
