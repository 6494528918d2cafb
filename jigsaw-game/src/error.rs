use thiserror::Error;

use crate::constants::{
    NOTICE_CATALOG, NOTICE_IMAGE_DECODE, NOTICE_INVALID_GRID, NOTICE_LEVEL_LOCKED,
    NOTICE_OUT_OF_BOUNDS, NOTICE_UNKNOWN_LEVEL, NOTICE_UNKNOWN_PIECE,
};

/// Errors raised by puzzle transitions.
///
/// None of these are fatal: the reducer turns each one into a [`crate::Notice`]
/// and keeps the previous board intact.
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("image could not be decoded: {0}")]
    ImageDecode(String),
    #[error("grid size {size} is outside 1..={max}", max = crate::constants::MAX_GRID_SIZE)]
    InvalidGridSize { size: u32 },
    #[error("piece `{id}` is not part of the current board")]
    UnknownPiece { id: String },
    #[error("cell ({row}, {col}) is outside a {size}x{size} grid")]
    CellOutOfBounds { row: u32, col: u32, size: u32 },
    #[error("level {id} does not exist")]
    UnknownLevel { id: u32 },
    #[error("level {id} is still locked")]
    LevelLocked { id: u32 },
    #[error("level catalog is malformed: {0}")]
    Catalog(#[from] serde_json::Error),
}

impl PuzzleError {
    /// Translation key shown to the player for this error.
    #[must_use]
    pub const fn notice_key(&self) -> &'static str {
        match self {
            Self::ImageDecode(_) => NOTICE_IMAGE_DECODE,
            Self::InvalidGridSize { .. } => NOTICE_INVALID_GRID,
            Self::UnknownPiece { .. } => NOTICE_UNKNOWN_PIECE,
            Self::CellOutOfBounds { .. } => NOTICE_OUT_OF_BOUNDS,
            Self::UnknownLevel { .. } => NOTICE_UNKNOWN_LEVEL,
            Self::LevelLocked { .. } => NOTICE_LEVEL_LOCKED,
            Self::Catalog(_) => NOTICE_CATALOG,
        }
    }
}

impl From<image::ImageError> for PuzzleError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageDecode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_maps_to_a_notice_key() {
        let errors = [
            PuzzleError::ImageDecode(String::from("bad header")),
            PuzzleError::InvalidGridSize { size: 0 },
            PuzzleError::UnknownPiece {
                id: String::from("piece-9-9"),
            },
            PuzzleError::CellOutOfBounds {
                row: 4,
                col: 0,
                size: 3,
            },
            PuzzleError::UnknownLevel { id: 42 },
            PuzzleError::LevelLocked { id: 2 },
        ];
        for err in errors {
            assert!(err.notice_key().starts_with("notice."), "{err}");
        }
    }

    #[test]
    fn display_mentions_offending_values() {
        let err = PuzzleError::CellOutOfBounds {
            row: 5,
            col: 1,
            size: 4,
        };
        assert_eq!(err.to_string(), "cell (5, 1) is outside a 4x4 grid");
        let err = PuzzleError::InvalidGridSize { size: 0 };
        assert!(err.to_string().contains("1..=20"));
    }
}
