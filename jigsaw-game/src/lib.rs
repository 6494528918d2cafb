//! Jigsaw Trail Game Engine
//!
//! Platform-agnostic core logic for the Jigsaw Trail puzzle game: image
//! normalization, board generation, drop evaluation, linear level unlocking
//! and the root state reducer. No UI or browser dependencies live here.

pub mod action;
pub mod board;
pub mod catalog;
pub mod constants;
pub mod error;
pub mod normalize;
pub mod placement;
pub mod state;
pub mod summary;
pub mod tutorial;
pub mod unlock;
pub mod zoom;

// Re-export commonly used types
pub use action::{Effect, GameAction, Transition};
pub use board::{Board, GridCell, Piece, PieceId, validate_grid_size};
pub use catalog::{Difficulty, Level, LevelCatalog};
pub use error::PuzzleError;
pub use normalize::{CoverFit, NormalizedImage, normalize, normalize_image};
pub use placement::{PlacementOutcome, evaluate, place};
pub use state::{DropFeedback, GameState, ImageStatus, Notice, Screen, SessionTicket};
pub use summary::{LevelSummary, format_elapsed, star_rating};
pub use tutorial::{TutorialState, TutorialStep};
pub use unlock::{NextLevel, UnlockResult, complete_level, next_level};
pub use zoom::Zoom;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_round_trip_from_select_to_completed() {
        let mut state = GameState::default().with_seed(2024);
        state = state.apply(GameAction::TutorialClose).state;
        let t = state.apply(GameAction::SelectLevel { level_id: 1 });
        let ticket = match t.effects.as_slice() {
            [Effect::LoadImage { ticket, .. }] => *ticket,
            other => panic!("unexpected effects {other:?}"),
        };
        state = t
            .state
            .apply(GameAction::ImageLoaded {
                ticket,
                url: String::from("blob:1"),
                at_ms: 0,
            })
            .state;

        for row in 0..3 {
            for col in 0..3 {
                state = state
                    .apply(GameAction::DropPiece {
                        piece_id: PieceId::new(row, col).to_string(),
                        row,
                        col,
                        at_ms: 100,
                    })
                    .state;
            }
        }
        assert!(state.completion_pending);
        state = state.apply(GameAction::CompletionElapsed { ticket }).state;
        assert_eq!(state.screen, Screen::Completed);
        assert_eq!(state.summary.map(|s| s.stars), Some(3));
    }
}
