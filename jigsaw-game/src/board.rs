//! Puzzle board generation: the N×N grid of cells and the shuffled piece set.
use std::fmt;

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH, MAX_GRID_SIZE, debug_log_enabled};
use crate::error::PuzzleError;

static PIECE_ID_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^piece-(\d+)-(\d+)$").ok());

/// Reject grid sizes the generator cannot lay out.
///
/// # Errors
///
/// Returns [`PuzzleError::InvalidGridSize`] for `0` or anything above
/// [`MAX_GRID_SIZE`].
pub fn validate_grid_size(size: u32) -> Result<(), PuzzleError> {
    if size == 0 || size > MAX_GRID_SIZE {
        return Err(PuzzleError::InvalidGridSize { size });
    }
    Ok(())
}

/// Row/column identity encoded in a piece id such as `piece-1-2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceId {
    pub row: u32,
    pub col: u32,
}

impl PieceId {
    #[must_use]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Decode a `piece-{row}-{col}` string.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::UnknownPiece`] when the id does not follow the
    /// piece naming scheme.
    pub fn parse(id: &str) -> Result<Self, PuzzleError> {
        let unknown = || PuzzleError::UnknownPiece { id: id.to_string() };
        let caps = PIECE_ID_RE
            .as_ref()
            .and_then(|re| re.captures(id))
            .ok_or_else(unknown)?;
        let row = caps[1].parse().map_err(|_| unknown())?;
        let col = caps[2].parse().map_err(|_| unknown())?;
        Ok(Self { row, col })
    }

    /// Id of the grid cell this piece belongs in.
    #[must_use]
    pub fn cell_id(self) -> String {
        format!("{}-{}", self.row, self.col)
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "piece-{}-{}", self.row, self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub id: String,
    pub row: u32,
    pub col: u32,
    pub is_occupied: bool,
    pub correct_piece_id: String,
    pub current_piece_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub id: String,
    pub row: u32,
    pub col: u32,
    /// Top-left corner of this piece inside the normalized canvas.
    pub origin_x: u32,
    pub origin_y: u32,
    /// Position in the tray; the only field the shuffle touches.
    pub display_order: u32,
    pub is_placed: bool,
}

impl Piece {
    #[must_use]
    pub const fn identity(&self) -> PieceId {
        PieceId::new(self.row, self.col)
    }
}

/// One generated puzzle: grid plus pieces for a single play-through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub size: u32,
    pub piece_width: u32,
    pub piece_height: u32,
    pub cells: Vec<GridCell>,
    pub pieces: Vec<Piece>,
}

impl Board {
    /// Build a fresh board with pieces in a random tray order.
    ///
    /// Piece dimensions are floored, so the right and bottom edges of the
    /// canvas can be a few pixels short of the image.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidGridSize`] if `size` is not in
    /// `1..=MAX_GRID_SIZE`.
    pub fn generate<R: Rng + ?Sized>(size: u32, rng: &mut R) -> Result<Self, PuzzleError> {
        validate_grid_size(size)?;
        let piece_width = CANVAS_WIDTH / size;
        let piece_height = CANVAS_HEIGHT / size;

        let mut cells = Vec::with_capacity((size * size) as usize);
        let mut pieces = Vec::with_capacity((size * size) as usize);
        for row in 0..size {
            for col in 0..size {
                let identity = PieceId::new(row, col);
                cells.push(GridCell {
                    id: identity.cell_id(),
                    row,
                    col,
                    is_occupied: false,
                    correct_piece_id: identity.to_string(),
                    current_piece_id: None,
                });
                pieces.push(Piece {
                    id: identity.to_string(),
                    row,
                    col,
                    origin_x: col * piece_width,
                    origin_y: row * piece_height,
                    display_order: row * size + col,
                    is_placed: false,
                });
            }
        }

        shuffle_display_order(&mut pieces, rng);

        if debug_log_enabled() {
            println!("board: generated {size}x{size}, piece {piece_width}x{piece_height}");
        }

        Ok(Self {
            size,
            piece_width,
            piece_height,
            cells,
            pieces,
        })
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.pieces.iter().filter(|piece| piece.is_placed).count()
    }

    /// Percentage of placed pieces in `[0, 100]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.pieces.is_empty() {
            return 0.0;
        }
        self.placed_count() as f64 / self.total() as f64 * 100.0
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.pieces.is_empty() && self.placed_count() == self.total()
    }

    #[must_use]
    pub fn cell(&self, row: u32, col: u32) -> Option<&GridCell> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get((row * self.size + col) as usize)
    }

    pub(crate) fn cell_mut(&mut self, row: u32, col: u32) -> Option<&mut GridCell> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get_mut((row * self.size + col) as usize)
    }

    #[must_use]
    pub fn piece(&self, id: &str) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.id == id)
    }

    pub(crate) fn piece_mut(&mut self, id: &str) -> Option<&mut Piece> {
        self.pieces.iter_mut().find(|piece| piece.id == id)
    }

    /// Unplaced pieces in tray order.
    #[must_use]
    pub fn tray(&self) -> Vec<&Piece> {
        let mut tray: Vec<&Piece> = self.pieces.iter().filter(|piece| !piece.is_placed).collect();
        tray.sort_by_key(|piece| piece.display_order);
        tray
    }
}

/// Unbiased Fisher–Yates over the tray positions; ids and origins stay put.
fn shuffle_display_order<R: Rng + ?Sized>(pieces: &mut [Piece], rng: &mut R) {
    let mut order: Vec<u32> = pieces.iter().map(|piece| piece.display_order).collect();
    for i in (1..order.len()).rev() {
        let j = rng.gen_range(0..=i);
        order.swap(i, j);
    }
    for (piece, slot) in pieces.iter_mut().zip(order) {
        piece.display_order = slot;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use std::collections::HashSet;

    fn board(size: u32, seed: u64) -> Board {
        Board::generate(size, &mut ChaCha20Rng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn cells_and_pieces_correspond_one_to_one() {
        for n in 3..=10 {
            let board = board(n, u64::from(n));
            let count = (n * n) as usize;
            assert_eq!(board.cells.len(), count);
            assert_eq!(board.pieces.len(), count);
            let wanted: HashSet<&str> =
                board.cells.iter().map(|c| c.correct_piece_id.as_str()).collect();
            let have: HashSet<&str> = board.pieces.iter().map(|p| p.id.as_str()).collect();
            assert_eq!(wanted.len(), count);
            assert_eq!(wanted, have);
        }
    }

    #[test]
    fn origins_follow_floored_piece_size() {
        let board = board(7, 1);
        assert_eq!((board.piece_width, board.piece_height), (114, 85));
        let piece = board.piece("piece-2-5").unwrap();
        assert_eq!((piece.origin_x, piece.origin_y), (5 * 114, 2 * 85));
    }

    #[test]
    fn display_order_is_a_permutation() {
        let board = board(6, 77);
        let mut order: Vec<u32> = board.pieces.iter().map(|p| p.display_order).collect();
        order.sort_unstable();
        assert_eq!(order, (0..36).collect::<Vec<_>>());
    }

    #[test]
    fn same_seed_same_shuffle() {
        assert_eq!(board(5, 42), board(5, 42));
        assert_ne!(board(5, 42).pieces, board(5, 43).pieces);
    }

    #[test]
    fn grid_size_bounds() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        assert!(matches!(
            Board::generate(0, &mut rng),
            Err(PuzzleError::InvalidGridSize { size: 0 })
        ));
        assert!(Board::generate(MAX_GRID_SIZE + 1, &mut rng).is_err());
        assert!(Board::generate(1, &mut rng).is_ok());
    }

    #[test]
    fn piece_id_parsing() {
        assert_eq!(PieceId::parse("piece-1-2").unwrap(), PieceId::new(1, 2));
        assert_eq!(PieceId::new(3, 0).to_string(), "piece-3-0");
        for bad in ["piece-1", "1-2", "piece-a-b", "piece-1-2-3", " piece-1-2"] {
            assert!(
                matches!(PieceId::parse(bad), Err(PuzzleError::UnknownPiece { .. })),
                "{bad}"
            );
        }
    }

    #[test]
    fn fresh_board_has_zero_progress_and_full_tray() {
        let board = board(4, 9);
        assert!(board.progress().abs() < f64::EPSILON);
        assert!(!board.is_complete());
        let tray = board.tray();
        assert_eq!(tray.len(), 16);
        assert!(tray.windows(2).all(|w| w[0].display_order < w[1].display_order));
        assert!(board.cell(4, 0).is_none());
    }
}
