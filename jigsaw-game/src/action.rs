//! The reducer: every player or host event goes through [`GameState::apply`].
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::catalog::Level;
use crate::constants::{COMPLETION_DELAY_MS, debug_log_enabled};
use crate::error::PuzzleError;
use crate::placement::{self, PlacementOutcome};
use crate::state::{DropFeedback, GameState, ImageStatus, Notice, Screen, SessionTicket};
use crate::summary::LevelSummary;
use crate::tutorial::TutorialState;
use crate::unlock::{NextLevel, complete_level, next_level};
use crate::zoom::Zoom;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    SelectLevel { level_id: u32 },
    /// Start the ad-hoc level from an already normalized upload.
    StartCustomLevel { image_url: String },
    UploadFailed { reason: String },
    ImageLoaded {
        ticket: SessionTicket,
        url: String,
        at_ms: u64,
    },
    ImageFailed {
        ticket: SessionTicket,
        reason: String,
    },
    DropPiece {
        piece_id: String,
        row: u32,
        col: u32,
        at_ms: u64,
    },
    CompletionElapsed { ticket: SessionTicket },
    NextLevel,
    PlayAgain,
    Reset,
    Exit,
    ZoomIn,
    ZoomOut,
    SetZoom(u16),
    TutorialNext,
    TutorialClose,
    ShowTutorial,
    DismissNotice,
    ClearFeedback,
}

/// Side effects the host runs after committing a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Fetch and normalize `source`, then answer with `ImageLoaded` or `ImageFailed`.
    LoadImage {
        ticket: SessionTicket,
        source: String,
    },
    /// Answer with `CompletionElapsed` after `delay_ms`.
    ScheduleCompletion {
        ticket: SessionTicket,
        delay_ms: u32,
    },
    CancelCompletion,
    /// The image URL is no longer shown and may be revoked.
    ReleaseImage { url: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: GameState,
    pub effects: Vec<Effect>,
    /// Set for drops that reached the placement evaluator.
    pub outcome: Option<PlacementOutcome>,
}

enum ImageRequest {
    /// Reuse the image already on screen.
    Keep,
    Load(String),
    Ready(String),
}

impl GameState {
    /// Apply an action, turning any failure into a [`Notice`] on the
    /// unchanged previous state.
    #[must_use]
    pub fn apply(&self, action: GameAction) -> Transition {
        match self.try_apply(action) {
            Ok(transition) => transition,
            Err(err) => {
                if debug_log_enabled() {
                    println!("apply: rejected with {err}");
                }
                let mut state = self.clone();
                state.notice = Some(Notice::from(&err));
                Transition {
                    state,
                    effects: Vec::new(),
                    outcome: None,
                }
            }
        }
    }

    /// Apply an action, surfacing failures to the caller.
    ///
    /// # Errors
    ///
    /// Returns the [`PuzzleError`] raised by the transition; `self` is never
    /// partially modified.
    pub fn try_apply(&self, action: GameAction) -> Result<Transition, PuzzleError> {
        let mut next = self.clone();
        let mut effects = Vec::new();
        let mut outcome = None;

        if debug_log_enabled() {
            println!("apply: {action:?} on {:?}", self.screen);
        }

        match action {
            GameAction::SelectLevel { level_id } => {
                next.try_select_level(level_id, &mut effects)?;
            }
            GameAction::StartCustomLevel { image_url } => {
                let level = Level::custom(image_url.clone());
                next.try_start_level(level, ImageRequest::Ready(image_url), &mut effects)?;
            }
            GameAction::UploadFailed { reason } => {
                next.notice = Some(Notice::from(&PuzzleError::ImageDecode(reason)));
            }
            GameAction::ImageLoaded { ticket, url, at_ms } => {
                if ticket == next.session && next.image == ImageStatus::Loading {
                    next.image = ImageStatus::Ready(url);
                    next.started_at_ms = Some(at_ms);
                } else {
                    effects.push(Effect::ReleaseImage { url });
                }
            }
            GameAction::ImageFailed { ticket, reason } => {
                if ticket == next.session && next.screen == Screen::Playing {
                    next.exit_to_select(&mut effects);
                    next.notice = Some(Notice::from(&PuzzleError::ImageDecode(reason)));
                }
            }
            GameAction::DropPiece {
                piece_id,
                row,
                col,
                at_ms,
            } => {
                outcome = next.try_drop_piece(&piece_id, row, col, at_ms, &mut effects)?;
            }
            GameAction::CompletionElapsed { ticket } => {
                if ticket == next.session
                    && next.completion_pending
                    && next.screen == Screen::Playing
                {
                    next.completion_pending = false;
                    next.screen = Screen::Completed;
                }
            }
            GameAction::NextLevel => {
                if next.screen == Screen::Completed {
                    next.try_next_level(&mut effects)?;
                }
            }
            GameAction::PlayAgain => {
                if next.screen != Screen::LevelSelect
                    && let Some(level) = next.active_level.clone()
                {
                    next.try_start_level(level, ImageRequest::Keep, &mut effects)?;
                }
            }
            GameAction::Reset => {
                if next.screen == Screen::Playing
                    && let Some(level) = next.active_level.clone()
                {
                    next.try_start_level(level, ImageRequest::Keep, &mut effects)?;
                }
            }
            GameAction::Exit => {
                if next.screen != Screen::LevelSelect {
                    next.exit_to_select(&mut effects);
                }
            }
            GameAction::ZoomIn => next.zoom = next.zoom.zoom_in(),
            GameAction::ZoomOut => next.zoom = next.zoom.zoom_out(),
            GameAction::SetZoom(percent) => next.zoom = Zoom::new(percent),
            GameAction::TutorialNext => next.tutorial = next.tutorial.advance(),
            GameAction::TutorialClose => next.tutorial = next.tutorial.close(),
            GameAction::ShowTutorial => next.tutorial = TutorialState::default(),
            GameAction::DismissNotice => next.notice = None,
            GameAction::ClearFeedback => next.feedback = None,
        }

        Ok(Transition {
            state: next,
            effects,
            outcome,
        })
    }

    fn try_select_level(
        &mut self,
        level_id: u32,
        effects: &mut Vec<Effect>,
    ) -> Result<(), PuzzleError> {
        let level = self
            .catalog
            .get(level_id)
            .cloned()
            .ok_or(PuzzleError::UnknownLevel { id: level_id })?;
        if level.is_locked {
            return Err(PuzzleError::LevelLocked { id: level_id });
        }
        let source = level.thumbnail.clone();
        self.try_start_level(level, ImageRequest::Load(source), effects)
    }

    fn try_next_level(&mut self, effects: &mut Vec<Effect>) -> Result<(), PuzzleError> {
        let Some(current) = self.current_level_id() else {
            self.exit_to_select(effects);
            return Ok(());
        };
        match next_level(&self.catalog, current) {
            NextLevel::Play(id) => self.try_select_level(id, effects),
            NextLevel::Select => {
                self.exit_to_select(effects);
                Ok(())
            }
        }
    }

    fn try_start_level(
        &mut self,
        level: Level,
        image: ImageRequest,
        effects: &mut Vec<Effect>,
    ) -> Result<(), PuzzleError> {
        let board = Board::generate(level.grid_size, &mut self.rng)?;
        self.begin_session(effects);

        match image {
            ImageRequest::Keep if matches!(self.image, ImageStatus::Ready(_)) => {}
            ImageRequest::Keep => {
                self.image = ImageStatus::Loading;
                effects.push(Effect::LoadImage {
                    ticket: self.session,
                    source: level.thumbnail.clone(),
                });
            }
            ImageRequest::Load(source) => {
                self.release_image(effects);
                self.image = ImageStatus::Loading;
                effects.push(Effect::LoadImage {
                    ticket: self.session,
                    source,
                });
            }
            ImageRequest::Ready(url) => {
                if self.image.url() != Some(url.as_str()) {
                    self.release_image(effects);
                }
                self.image = ImageStatus::Ready(url);
            }
        }

        if debug_log_enabled() {
            println!(
                "start: level {} ({}x{}) session {}",
                level.id, level.grid_size, level.grid_size, self.session.0
            );
        }

        self.progress = board.progress();
        self.board = Some(board);
        self.active_level = Some(level);
        self.screen = Screen::Playing;
        Ok(())
    }

    fn try_drop_piece(
        &mut self,
        piece_id: &str,
        row: u32,
        col: u32,
        at_ms: u64,
        effects: &mut Vec<Effect>,
    ) -> Result<Option<PlacementOutcome>, PuzzleError> {
        if self.screen != Screen::Playing {
            return Ok(None);
        }
        let Some(board) = self.board.as_ref() else {
            return Ok(None);
        };
        let (board, outcome) = placement::place(board, piece_id, row, col)?;

        match outcome {
            PlacementOutcome::Placed => {
                self.record_move(at_ms);
                self.feedback = None;
                self.progress = board.progress();
                let complete = board.is_complete();
                self.board = Some(board);
                if complete && !self.completion_pending {
                    self.finish_level(effects);
                }
            }
            PlacementOutcome::Rejected => {
                self.record_move(at_ms);
                self.misses = self.misses.saturating_add(1);
                self.feedback = Some(DropFeedback {
                    piece_id: piece_id.to_string(),
                    row,
                    col,
                    serial: self.misses,
                });
            }
            PlacementOutcome::AlreadyPlaced => {}
        }
        Ok(Some(outcome))
    }

    fn record_move(&mut self, at_ms: u64) {
        self.moves = self.moves.saturating_add(1);
        self.started_at_ms.get_or_insert(at_ms);
        self.last_drop_at_ms = Some(at_ms);
    }

    fn finish_level(&mut self, effects: &mut Vec<Effect>) {
        let Some(level) = self.active_level.as_ref() else {
            return;
        };
        let level_id = level.id;
        let summary = LevelSummary::new(
            level_id,
            level.grid_size,
            self.moves,
            self.misses,
            self.elapsed_ms(),
        );

        let unlock = complete_level(&self.catalog, level_id);
        if debug_log_enabled() {
            println!(
                "complete: level {level_id}, unlocked {:?}, stars {}",
                unlock.unlocked, summary.stars
            );
        }
        self.catalog = unlock.catalog;
        if let Some(updated) = self.catalog.get(level_id) {
            self.active_level = Some(updated.clone());
        }
        self.summary = Some(summary);
        self.completion_pending = true;
        effects.push(Effect::ScheduleCompletion {
            ticket: self.session,
            delay_ms: COMPLETION_DELAY_MS,
        });
    }

    fn exit_to_select(&mut self, effects: &mut Vec<Effect>) {
        self.begin_session(effects);
        self.release_image(effects);
        self.board = None;
        self.active_level = None;
        self.progress = 0.0;
        self.screen = Screen::LevelSelect;
    }

    /// Invalidate outstanding tickets and clear per-run counters.
    fn begin_session(&mut self, effects: &mut Vec<Effect>) {
        if self.completion_pending {
            effects.push(Effect::CancelCompletion);
        }
        self.session = self.session.next();
        self.completion_pending = false;
        self.moves = 0;
        self.misses = 0;
        self.feedback = None;
        self.started_at_ms = None;
        self.last_drop_at_ms = None;
        self.summary = None;
    }

    fn release_image(&mut self, effects: &mut Vec<Effect>) {
        if let ImageStatus::Ready(url) = std::mem::take(&mut self.image) {
            effects.push(Effect::ReleaseImage { url });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CUSTOM_LEVEL_ID;

    fn select(state: &GameState, level_id: u32) -> Transition {
        state.apply(GameAction::SelectLevel { level_id })
    }

    fn loaded(state: &GameState, url: &str) -> GameState {
        state
            .apply(GameAction::ImageLoaded {
                ticket: state.session,
                url: url.to_string(),
                at_ms: 1_000,
            })
            .state
    }

    fn drop_at(state: &GameState, piece_id: &str, row: u32, col: u32, at_ms: u64) -> Transition {
        state.apply(GameAction::DropPiece {
            piece_id: piece_id.to_string(),
            row,
            col,
            at_ms,
        })
    }

    fn solve(mut state: GameState) -> Transition {
        let pieces: Vec<(String, u32, u32)> = state
            .board
            .as_ref()
            .unwrap()
            .pieces
            .iter()
            .map(|p| (p.id.clone(), p.row, p.col))
            .collect();
        let mut last = None;
        for (idx, (id, row, col)) in pieces.into_iter().enumerate() {
            let t = drop_at(&state, &id, row, col, 2_000 + idx as u64 * 1_000);
            state = t.state.clone();
            last = Some(t);
        }
        last.unwrap()
    }

    fn playing_level_one() -> GameState {
        let t = select(&GameState::default(), 1);
        loaded(&t.state, "blob:level-1")
    }

    #[test]
    fn selecting_a_level_generates_board_and_requests_image() {
        let t = select(&GameState::default(), 1);
        assert_eq!(t.state.screen, Screen::Playing);
        assert_eq!(t.state.board.as_ref().unwrap().pieces.len(), 9);
        assert_eq!(t.state.image, ImageStatus::Loading);
        assert!(matches!(
            t.effects.as_slice(),
            [Effect::LoadImage { ticket, .. }] if *ticket == t.state.session
        ));
    }

    #[test]
    fn locked_and_unknown_levels_raise_notices() {
        let state = GameState::default();
        let locked = select(&state, 2);
        assert_eq!(locked.state.screen, Screen::LevelSelect);
        assert_eq!(locked.state.notice.as_ref().unwrap().key, "notice.level_locked");
        let unknown = select(&state, 77);
        assert_eq!(unknown.state.notice.as_ref().unwrap().key, "notice.unknown_level");
        assert!(unknown.state.apply(GameAction::DismissNotice).state.notice.is_none());
        assert!(state.try_apply(GameAction::SelectLevel { level_id: 2 }).is_err());
    }

    #[test]
    fn wrong_drop_records_miss_and_feedback_only() {
        let state = playing_level_one();
        let t = drop_at(&state, "piece-0-0", 1, 1, 1_500);
        assert_eq!(t.outcome, Some(PlacementOutcome::Rejected));
        assert_eq!(t.state.board, state.board);
        assert!((t.state.progress - state.progress).abs() < f64::EPSILON);
        assert_eq!(t.state.misses, 1);
        assert_eq!(t.state.feedback.as_ref().unwrap().row, 1);
        assert!(t.state.apply(GameAction::ClearFeedback).state.feedback.is_none());
    }

    #[test]
    fn malformed_drop_becomes_notice() {
        let state = playing_level_one();
        let t = drop_at(&state, "piece-9-9", 0, 0, 1_500);
        assert_eq!(t.state.notice.as_ref().unwrap().key, "notice.unknown_piece");
        assert_eq!(t.state.board, state.board);
        let t = drop_at(&state, "piece-0-0", 5, 0, 1_500);
        assert_eq!(t.state.notice.as_ref().unwrap().key, "notice.out_of_bounds");
    }

    #[test]
    fn final_piece_unlocks_and_schedules_completion() {
        let last = solve(playing_level_one());
        let state = &last.state;
        assert!((state.progress - 100.0).abs() < f64::EPSILON);
        assert_eq!(state.screen, Screen::Playing);
        assert!(state.completion_pending);
        assert!(state.catalog.get(1).unwrap().is_completed);
        assert!(!state.catalog.get(2).unwrap().is_locked);
        assert_eq!(
            last.effects,
            vec![Effect::ScheduleCompletion {
                ticket: state.session,
                delay_ms: COMPLETION_DELAY_MS
            }]
        );
        let summary = state.summary.as_ref().unwrap();
        assert_eq!((summary.moves, summary.misses, summary.stars), (9, 0, 3));
        assert_eq!(summary.elapsed_ms, 9_000);

        let done = state.apply(GameAction::CompletionElapsed {
            ticket: state.session,
        });
        assert_eq!(done.state.screen, Screen::Completed);
    }

    #[test]
    fn stale_completion_after_exit_is_ignored() {
        let pending = solve(playing_level_one()).state;
        let ticket = pending.session;
        let exited = pending.apply(GameAction::Exit);
        assert!(exited.effects.contains(&Effect::CancelCompletion));
        assert!(exited.effects.contains(&Effect::ReleaseImage {
            url: String::from("blob:level-1")
        }));
        let after = exited.state.apply(GameAction::CompletionElapsed { ticket });
        assert_eq!(after.state.screen, Screen::LevelSelect);
        assert!(!after.state.catalog.get(2).unwrap().is_locked);
    }

    #[test]
    fn stale_completion_after_reset_is_ignored() {
        let pending = solve(playing_level_one()).state;
        let ticket = pending.session;
        let reset = pending.apply(GameAction::Reset).state;
        assert_eq!(reset.image_url(), Some("blob:level-1"));
        assert!(reset.progress.abs() < f64::EPSILON);
        let after = reset.apply(GameAction::CompletionElapsed { ticket });
        assert_eq!(after.state.screen, Screen::Playing);
    }

    #[test]
    fn stale_image_is_released_not_shown() {
        let first = select(&GameState::default(), 1).state;
        let stale_ticket = first.session;
        let exited = first.apply(GameAction::Exit).state;
        let t = exited.apply(GameAction::ImageLoaded {
            ticket: stale_ticket,
            url: String::from("blob:old"),
            at_ms: 5,
        });
        assert_eq!(t.state.image, ImageStatus::Idle);
        assert_eq!(
            t.effects,
            vec![Effect::ReleaseImage {
                url: String::from("blob:old")
            }]
        );
    }

    #[test]
    fn image_failure_returns_to_select_with_notice() {
        let state = select(&GameState::default(), 1).state;
        let t = state.apply(GameAction::ImageFailed {
            ticket: state.session,
            reason: String::from("404"),
        });
        assert_eq!(t.state.screen, Screen::LevelSelect);
        assert_eq!(t.state.notice.as_ref().unwrap().key, "notice.image_decode");
    }

    #[test]
    fn next_level_plays_unlocked_successor() {
        let pending = solve(playing_level_one()).state;
        let completed = pending
            .apply(GameAction::CompletionElapsed {
                ticket: pending.session,
            })
            .state;
        let t = completed.apply(GameAction::NextLevel);
        assert_eq!(t.state.screen, Screen::Playing);
        assert_eq!(t.state.current_level_id(), Some(2));
        assert!(t.effects.iter().any(|e| matches!(e, Effect::LoadImage { .. })));
        assert!(t.effects.contains(&Effect::ReleaseImage {
            url: String::from("blob:level-1")
        }));
    }

    #[test]
    fn play_again_replays_same_level_with_fresh_board() {
        let pending = solve(playing_level_one()).state;
        let completed = pending
            .apply(GameAction::CompletionElapsed {
                ticket: pending.session,
            })
            .state;
        let again = completed.apply(GameAction::PlayAgain).state;
        assert_eq!(again.screen, Screen::Playing);
        assert_eq!(again.current_level_id(), Some(1));
        assert_eq!(again.moves, 0);
        assert!(again.summary.is_none());
        assert!(again.board.as_ref().unwrap().placed_count() == 0);
    }

    #[test]
    fn custom_level_completes_without_unlocking() {
        let t = GameState::default().apply(GameAction::StartCustomLevel {
            image_url: String::from("blob:upload"),
        });
        assert!(t.effects.is_empty());
        assert_eq!(t.state.current_level_id(), Some(CUSTOM_LEVEL_ID));
        assert_eq!(t.state.image_url(), Some("blob:upload"));
        let done = solve(t.state).state;
        assert!(done.completion_pending);
        assert!(done.catalog.levels()[1].is_locked);
        let completed = done
            .apply(GameAction::CompletionElapsed {
                ticket: done.session,
            })
            .state;
        let next = completed.apply(GameAction::NextLevel).state;
        assert_eq!(next.screen, Screen::LevelSelect);
    }

    #[test]
    fn zoom_and_tutorial_actions() {
        let mut state = GameState::default();
        for _ in 0..30 {
            state = state.apply(GameAction::ZoomIn).state;
        }
        assert_eq!(state.zoom.percent(), 200);
        state = state.apply(GameAction::SetZoom(10)).state;
        assert_eq!(state.zoom.percent(), 50);

        state = state.apply(GameAction::TutorialNext).state;
        state = state.apply(GameAction::TutorialNext).state;
        assert!(state.tutorial.visible);
        state = state.apply(GameAction::TutorialNext).state;
        assert!(!state.tutorial.visible);
        state = state.apply(GameAction::ShowTutorial).state;
        assert!(state.tutorial.visible);
        assert!(!state.apply(GameAction::TutorialClose).state.tutorial.visible);
    }
}
