//! Root game aggregate and the small value types the view renders from.
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::catalog::{Level, LevelCatalog};
use crate::error::PuzzleError;
use crate::summary::LevelSummary;
use crate::tutorial::TutorialState;
use crate::zoom::Zoom;

/// Top-level screen the view renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    LevelSelect,
    Playing,
    Completed,
}

/// Identifies one play session. Async results carry the ticket they were
/// issued with and are dropped if the session has moved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SessionTicket(pub u64);

impl SessionTicket {
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Player-facing message raised by a failed transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub key: String,
    pub detail: String,
}

impl From<&PuzzleError> for Notice {
    fn from(err: &PuzzleError) -> Self {
        Self {
            key: err.notice_key().to_string(),
            detail: err.to_string(),
        }
    }
}

/// Last rejected drop, rendered as a shake on the target cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropFeedback {
    pub piece_id: String,
    pub row: u32,
    pub col: u32,
    /// Bumped per miss so repeated misses on one cell restart the cue.
    pub serial: u32,
}

/// Puzzle image lifecycle for the active level.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ImageStatus {
    #[default]
    Idle,
    Loading,
    Ready(String),
}

impl ImageStatus {
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Ready(url) => Some(url),
            Self::Idle | Self::Loading => None,
        }
    }
}

/// Root aggregate. Every transition produces a new value; see
/// [`GameState::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub catalog: LevelCatalog,
    pub screen: Screen,
    pub tutorial: TutorialState,
    pub zoom: Zoom,
    pub active_level: Option<Level>,
    pub board: Option<Board>,
    /// Cached `board.progress()`, 0 when no board is loaded.
    pub progress: f64,
    pub image: ImageStatus,
    pub notice: Option<Notice>,
    pub session: SessionTicket,
    pub moves: u32,
    pub misses: u32,
    pub feedback: Option<DropFeedback>,
    pub started_at_ms: Option<u64>,
    pub last_drop_at_ms: Option<u64>,
    /// Set once the final piece lands, before the overlay is revealed.
    pub completion_pending: bool,
    pub summary: Option<LevelSummary>,
    pub seed: u64,
    pub(crate) rng: ChaCha20Rng,
}

impl Default for GameState {
    fn default() -> Self {
        Self::from_catalog(LevelCatalog::try_load_default(), 0)
    }
}

impl GameState {
    #[must_use]
    pub fn new(catalog: LevelCatalog, seed: u64) -> Self {
        Self {
            catalog,
            screen: Screen::LevelSelect,
            tutorial: TutorialState::default(),
            zoom: Zoom::default(),
            active_level: None,
            board: None,
            progress: 0.0,
            image: ImageStatus::Idle,
            notice: None,
            session: SessionTicket::default(),
            moves: 0,
            misses: 0,
            feedback: None,
            started_at_ms: None,
            last_drop_at_ms: None,
            completion_pending: false,
            summary: None,
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Start from a parsed catalog; a parse failure leaves the level list
    /// empty and raises a notice.
    #[must_use]
    pub fn from_catalog(catalog: Result<LevelCatalog, PuzzleError>, seed: u64) -> Self {
        match catalog {
            Ok(catalog) => Self::new(catalog, seed),
            Err(err) => {
                let mut state = Self::new(LevelCatalog::default(), seed);
                state.notice = Some(Notice::from(&err));
                state
            }
        }
    }

    /// Same state with a fresh RNG stream.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self.rng = ChaCha20Rng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub fn current_level_id(&self) -> Option<u32> {
        self.active_level.as_ref().map(|level| level.id)
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image.url()
    }

    /// Play time from the first frame with an image to the latest drop.
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        match (self.started_at_ms, self.last_drop_at_ms) {
            (Some(start), Some(end)) => end.saturating_sub(start),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_starts_on_level_select_with_tutorial() {
        let state = GameState::default();
        assert_eq!(state.screen, Screen::LevelSelect);
        assert!(state.tutorial.visible);
        assert_eq!(state.zoom.percent(), 100);
        assert!(state.board.is_none());
        assert!(state.progress.abs() < f64::EPSILON);
        assert_eq!(state.catalog.len(), 10);
    }

    #[test]
    fn reseeding_resets_the_stream() {
        let a = GameState::default().with_seed(7);
        let b = GameState::new(LevelCatalog::load_default(), 7);
        assert_eq!(a, b);
    }

    #[test]
    fn unreadable_catalog_becomes_a_notice() {
        let state = GameState::from_catalog(LevelCatalog::from_json("{\"levels\": ["), 3);
        assert!(state.catalog.is_empty());
        let notice = state.notice.unwrap();
        assert_eq!(notice.key, "notice.catalog");
        assert_eq!(state.screen, Screen::LevelSelect);
    }

    #[test]
    fn embedded_catalog_loads_without_notice() {
        let state = GameState::default();
        assert!(state.notice.is_none());
        assert_eq!(state.catalog, LevelCatalog::try_load_default().unwrap());
    }

    #[test]
    fn notice_carries_key_and_detail() {
        let notice = Notice::from(&PuzzleError::LevelLocked { id: 3 });
        assert_eq!(notice.key, "notice.level_locked");
        assert!(notice.detail.contains('3'));
    }
}
