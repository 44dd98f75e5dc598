//! Placement module - validity checking, commit, and line clearing
//!
//! Every placement attempt walks the same sequence:
//! validate -> commit -> detect full lines -> clear -> update hand.
//! Validation is exhaustive over all set mask cells before any write, so a
//! rejected attempt leaves no partial state behind. All operations take the
//! board by reference and return a new board value; the caller keeps the
//! pre-placement board.

use arrayvec::ArrayVec;

use crate::core::board::Board;
use crate::core::hand::Hand;
use crate::core::rng::SimpleRng;
use crate::core::shapes::mask;
use crate::types::{ShapeId, GRID_SIZE, MAX_SHAPE_CELLS};

/// Board cells a shape would occupy for a given anchor
pub type Footprint = ArrayVec<(i8, i8), MAX_SHAPE_CELLS>;

/// Row/column indices, at most one entry per line
pub type LineSet = ArrayVec<i8, { GRID_SIZE as usize }>;

/// Why a placement attempt was turned down.
///
/// Rejection is an ordinary negative result - it happens on most drags and
/// is reported to the shell, never raised as a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    /// Some target cell would fall outside the 8x8 grid
    OutOfBounds,
    /// Some target cell is already occupied
    Overlap,
}

impl Rejected {
    pub fn code(self) -> &'static str {
        match self {
            Rejected::OutOfBounds | Rejected::Overlap => "invalid_place",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Rejected::OutOfBounds => "shape would leave the board",
            Rejected::Overlap => "shape overlaps occupied cells",
        }
    }
}

/// Rows and columns found completely occupied on one board
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FullLines {
    pub rows: LineSet,
    pub cols: LineSet,
}

impl FullLines {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }

    /// Total number of full lines (rows + columns)
    pub fn count(&self) -> usize {
        self.rows.len() + self.cols.len()
    }
}

/// Result of a successful placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceOutcome {
    /// Board after commit and line clearing
    pub board: Board,
    /// Rows that were completed and cleared by this placement
    pub cleared_rows: LineSet,
    /// Columns that were completed and cleared by this placement
    pub cleared_cols: LineSet,
    /// Distinct cells emptied by the clear (intersections counted once)
    pub cleared_cells: u32,
}

/// Compute the board cells `shape` would occupy when anchored at
/// (`anchor_row`, `anchor_col`).
///
/// The anchor is the board cell under the pointer at release; each set mask
/// cell (r, c) maps to `(anchor_row + r - offset_row, anchor_col + c -
/// offset_col)`. Targets may lie outside the grid; bounds are the
/// validator's job. The shell uses this for drag-preview highlighting.
pub fn footprint(shape: ShapeId, anchor_row: i8, anchor_col: i8) -> Footprint {
    let m = mask(shape);
    let mut cells = ArrayVec::new();
    for (r, c) in m.cells() {
        cells.push((
            anchor_row + r - m.offset_row(),
            anchor_col + c - m.offset_col(),
        ));
    }
    cells
}

/// Check every target cell before touching anything.
fn validate(
    board: &Board,
    shape: ShapeId,
    anchor_row: i8,
    anchor_col: i8,
) -> Result<Footprint, Rejected> {
    let cells = footprint(shape, anchor_row, anchor_col);

    for &(row, col) in &cells {
        if row < 0 || row >= GRID_SIZE as i8 || col < 0 || col >= GRID_SIZE as i8 {
            return Err(Rejected::OutOfBounds);
        }
    }
    for &(row, col) in &cells {
        if board.is_occupied(row, col) {
            return Err(Rejected::Overlap);
        }
    }

    Ok(cells)
}

/// Whether `shape` fits at the given anchor: every target cell inside the
/// grid and empty.
pub fn can_place(board: &Board, shape: ShapeId, anchor_row: i8, anchor_col: i8) -> bool {
    validate(board, shape, anchor_row, anchor_col).is_ok()
}

/// Write a validated footprint onto a copy of the board.
fn write_cells(board: &Board, cells: &Footprint) -> Board {
    let mut next = *board;
    for &(row, col) in cells {
        next.set(row, col, true);
    }
    next
}

/// Produce a new board with `shape` committed at the anchor.
///
/// Precondition: [`can_place`] holds for the same arguments. The input board
/// is left unmodified.
pub fn commit(board: &Board, shape: ShapeId, anchor_row: i8, anchor_col: i8) -> Board {
    debug_assert!(can_place(board, shape, anchor_row, anchor_col));
    write_cells(board, &footprint(shape, anchor_row, anchor_col))
}

/// Find all completely occupied rows and columns.
///
/// Rows and columns are detected independently against the same board, so a
/// single placement that completes one of each reports both.
pub fn detect_full_lines(board: &Board) -> FullLines {
    let mut lines = FullLines::default();
    for line in 0..GRID_SIZE as i8 {
        if board.is_row_full(line) {
            lines.rows.push(line);
        }
        if board.is_col_full(line) {
            lines.cols.push(line);
        }
    }
    lines
}

/// Produce a new board with every cell of each listed row and column set to
/// empty, plus the number of distinct cells cleared.
///
/// A cell at a full-row/full-column intersection is cleared exactly once.
pub fn clear_lines(board: &Board, lines: &FullLines) -> (Board, u32) {
    let mut next = *board;
    for &row in &lines.rows {
        for col in 0..GRID_SIZE as i8 {
            next.set(row, col, false);
        }
    }
    for &col in &lines.cols {
        for row in 0..GRID_SIZE as i8 {
            next.set(row, col, false);
        }
    }
    let cleared = board.occupied_count() - next.occupied_count();
    (next, cleared)
}

/// Run the full placement protocol:
///
/// 1. validate (reject wholesale on any out-of-bounds or overlapping cell),
/// 2. commit onto a new board,
/// 3. detect full rows and columns on the committed board,
/// 4. clear them,
/// 5. remove the placed shape from the hand, then refill if it hit zero.
///
/// On rejection nothing is touched: the hand is unchanged and the caller's
/// board was never written to begin with.
pub fn place(
    board: &Board,
    hand: &mut Hand,
    rng: &mut SimpleRng,
    shape: ShapeId,
    anchor_row: i8,
    anchor_col: i8,
) -> Result<PlaceOutcome, Rejected> {
    let cells = validate(board, shape, anchor_row, anchor_col)?;
    let committed = write_cells(board, &cells);
    let lines = detect_full_lines(&committed);
    let (cleared_board, cleared_cells) = clear_lines(&committed, &lines);

    hand.remove(shape);
    hand.refill_if_empty(rng);

    Ok(PlaceOutcome {
        board: cleared_board,
        cleared_rows: lines.rows,
        cleared_cols: lines.cols,
        cleared_cells,
    })
}
