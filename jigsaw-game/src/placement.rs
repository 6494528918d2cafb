//! Drop evaluation: deciding whether a piece belongs in a target cell.
use serde::{Deserialize, Serialize};

use crate::board::{Board, PieceId};
use crate::error::PuzzleError;

/// Result of dropping a piece on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementOutcome {
    /// The piece matched the cell and is now locked in.
    Placed,
    /// Wrong cell; the board is untouched.
    Rejected,
    /// The piece was already locked in; the board is untouched.
    AlreadyPlaced,
}

impl PlacementOutcome {
    #[must_use]
    pub const fn changed_board(self) -> bool {
        matches!(self, Self::Placed)
    }
}

/// Decide the outcome of a drop without touching the board.
///
/// # Errors
///
/// Returns [`PuzzleError::UnknownPiece`] for malformed ids or ids that are not
/// on this board, and [`PuzzleError::CellOutOfBounds`] when the target lies
/// outside the grid.
pub fn evaluate(
    board: &Board,
    piece_id: &str,
    row: u32,
    col: u32,
) -> Result<PlacementOutcome, PuzzleError> {
    let identity = PieceId::parse(piece_id)?;
    let piece = board.piece(piece_id).ok_or_else(|| PuzzleError::UnknownPiece {
        id: piece_id.to_string(),
    })?;
    if board.cell(row, col).is_none() {
        return Err(PuzzleError::CellOutOfBounds {
            row,
            col,
            size: board.size,
        });
    }
    if piece.is_placed {
        return Ok(PlacementOutcome::AlreadyPlaced);
    }
    if identity == PieceId::new(row, col) {
        Ok(PlacementOutcome::Placed)
    } else {
        Ok(PlacementOutcome::Rejected)
    }
}

/// Evaluate a drop and return the resulting board.
///
/// Only [`PlacementOutcome::Placed`] produces a different board; the others
/// hand back an identical copy.
///
/// # Errors
///
/// Same as [`evaluate`].
pub fn place(
    board: &Board,
    piece_id: &str,
    row: u32,
    col: u32,
) -> Result<(Board, PlacementOutcome), PuzzleError> {
    let outcome = evaluate(board, piece_id, row, col)?;
    let mut next = board.clone();
    if outcome.changed_board() {
        if let Some(cell) = next.cell_mut(row, col) {
            cell.is_occupied = true;
            cell.current_piece_id = Some(piece_id.to_string());
        }
        if let Some(piece) = next.piece_mut(piece_id) {
            piece.is_placed = true;
        }
    }
    Ok((next, outcome))
}
