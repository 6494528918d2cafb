//! Headless host for the engine: runs effects the way the browser would,
//! with images that load instantly and a virtual clock.
use jigsaw_game::{
    Effect, GameAction, GameState, PlacementOutcome, Screen, SessionTicket, Transition,
    constants::COMPLETION_DELAY_MS,
};
use serde::Serialize;

use crate::logic::policy::DropPolicy;

/// Simulated time spent decoding an image.
const IMAGE_LOAD_MS: u64 = 250;
/// Simulated think time between drops.
const DROP_INTERVAL_MS: u64 = 400;
/// Upper bound on drops per level before the run is declared stuck.
const MAX_DROPS_PER_LEVEL: u32 = 2_000;

/// What one finished level looked like from the outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelRun {
    pub level_id: u32,
    pub grid_size: u32,
    pub moves: u32,
    pub misses: u32,
    pub stars: u8,
    pub elapsed_ms: u64,
}

/// Drives a [`GameState`] and records everything a scenario may assert on.
pub struct Harness {
    pub state: GameState,
    pub clock_ms: u64,
    /// Tickets of completion timers that were scheduled but not fired yet.
    pub pending_timers: Vec<SessionTicket>,
    pub released_images: Vec<String>,
    pub cancelled_timers: u32,
    /// Fire completion timers as soon as they are scheduled.
    pub auto_fire: bool,
    verbose: bool,
}

impl Harness {
    #[must_use]
    pub fn new(seed: u64, verbose: bool) -> Self {
        Self {
            state: GameState::default().with_seed(seed),
            clock_ms: 0,
            pending_timers: Vec::new(),
            released_images: Vec::new(),
            cancelled_timers: 0,
            auto_fire: true,
            verbose,
        }
    }

    /// Apply an action and run its effects; returns the drop outcome, if any.
    pub fn dispatch(&mut self, action: GameAction) -> Option<PlacementOutcome> {
        if self.verbose {
            log::debug!("t={}ms {action:?}", self.clock_ms);
        }
        let Transition {
            state,
            effects,
            outcome,
        } = self.state.apply(action);
        self.state = state;
        for effect in effects {
            self.run_effect(effect);
        }
        outcome
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::LoadImage { ticket, source } => {
                self.clock_ms += IMAGE_LOAD_MS;
                let at_ms = self.clock_ms;
                self.dispatch(GameAction::ImageLoaded {
                    ticket,
                    url: format!("blob:{source}"),
                    at_ms,
                });
            }
            Effect::ScheduleCompletion { ticket, delay_ms } => {
                if self.auto_fire {
                    self.clock_ms += u64::from(delay_ms);
                    self.dispatch(GameAction::CompletionElapsed { ticket });
                } else {
                    self.pending_timers.push(ticket);
                }
            }
            Effect::CancelCompletion => {
                self.cancelled_timers += 1;
                self.pending_timers.clear();
            }
            Effect::ReleaseImage { url } => self.released_images.push(url),
        }
    }

    /// Fire every timer still held back. Cancelled timers were already
    /// dropped from the queue and never fire.
    pub fn fire_pending_timers(&mut self) {
        for ticket in std::mem::take(&mut self.pending_timers) {
            self.clock_ms += u64::from(COMPLETION_DELAY_MS);
            self.dispatch(GameAction::CompletionElapsed { ticket });
        }
    }

    /// One drop chosen by `policy`; `None` when the tray is empty.
    pub fn step(&mut self, policy: &mut dyn DropPolicy) -> Option<PlacementOutcome> {
        let board = self.state.board.as_ref()?;
        let drop = policy.next_drop(board)?;
        self.clock_ms += DROP_INTERVAL_MS;
        let at_ms = self.clock_ms;
        self.dispatch(GameAction::DropPiece {
            piece_id: drop.piece_id,
            row: drop.row,
            col: drop.col,
            at_ms,
        })
    }

    /// Play the active level until the tray is empty.
    ///
    /// # Errors
    /// Fails if progress ever moves backwards, leaves `0..=100`, or the
    /// policy keeps dropping past the safety limit.
    pub fn solve_active_level(&mut self, policy: &mut dyn DropPolicy) -> Result<(), String> {
        if self.state.screen != Screen::Playing {
            return Err(format!("no level in play (screen {:?})", self.state.screen));
        }
        let mut drops = 0_u32;
        let mut last_progress = self.state.progress;
        while self.step(policy).is_some() {
            drops += 1;
            let progress = self.state.progress;
            if !(0.0..=100.0).contains(&progress) {
                return Err(format!("progress {progress} out of range"));
            }
            if progress < last_progress {
                return Err(format!("progress fell from {last_progress} to {progress}"));
            }
            last_progress = progress;
            if drops > MAX_DROPS_PER_LEVEL {
                return Err(format!("{} never finished the board", policy.name()));
            }
        }
        Ok(())
    }

    /// Snapshot of the level that just completed.
    #[must_use]
    pub fn last_run(&self) -> Option<LevelRun> {
        let summary = self.state.summary.as_ref()?;
        Some(LevelRun {
            level_id: summary.level_id,
            grid_size: summary.grid_size,
            moves: summary.moves,
            misses: summary.misses,
            stars: summary.stars,
            elapsed_ms: summary.elapsed_ms,
        })
    }
}
