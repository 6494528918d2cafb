use std::fmt;

use jigsaw_game::Board;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// One drop the scripted player wants to make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedDrop {
    pub piece_id: String,
    pub row: u32,
    pub col: u32,
}

/// Policy interface for automated play strategies.
pub trait DropPolicy {
    /// Name used for logging/debug output.
    fn name(&self) -> &'static str;

    /// Next drop for the current board, or `None` once nothing is left in the tray.
    fn next_drop(&mut self, board: &Board) -> Option<PlannedDrop>;
}

/// Built-in strategies, selectable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayStrategy {
    /// Take pieces off the tray front to back and never miss
    Ordered,
    /// Pick tray pieces at random and never miss
    Shuffled,
    /// Random picks with a one-in-three chance of a wrong cell first
    Clumsy,
}

impl PlayStrategy {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ordered => "Ordered",
            Self::Shuffled => "Shuffled",
            Self::Clumsy => "Clumsy",
        }
    }

    #[must_use]
    pub fn create_policy(self, seed: u64) -> Box<dyn DropPolicy> {
        match self {
            Self::Ordered => Box::new(OrderedPolicy),
            Self::Shuffled => Box::new(ShuffledPolicy::new(seed)),
            Self::Clumsy => Box::new(ClumsyPolicy::new(seed)),
        }
    }
}

impl fmt::Display for PlayStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn correct_drop(piece_id: &str, row: u32, col: u32) -> PlannedDrop {
    PlannedDrop {
        piece_id: piece_id.to_string(),
        row,
        col,
    }
}

struct OrderedPolicy;

impl DropPolicy for OrderedPolicy {
    fn name(&self) -> &'static str {
        "ordered"
    }

    fn next_drop(&mut self, board: &Board) -> Option<PlannedDrop> {
        let piece = board.tray().into_iter().next()?;
        Some(correct_drop(&piece.id, piece.row, piece.col))
    }
}

struct ShuffledPolicy {
    rng: ChaCha20Rng,
}

impl ShuffledPolicy {
    fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed ^ 0x5348_5546),
        }
    }
}

impl DropPolicy for ShuffledPolicy {
    fn name(&self) -> &'static str {
        "shuffled"
    }

    fn next_drop(&mut self, board: &Board) -> Option<PlannedDrop> {
        let tray = board.tray();
        let piece = tray.choose(&mut self.rng)?;
        Some(correct_drop(&piece.id, piece.row, piece.col))
    }
}

struct ClumsyPolicy {
    rng: ChaCha20Rng,
    /// Piece that already missed once and goes home next.
    retry: Option<String>,
}

impl ClumsyPolicy {
    fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed ^ 0x434C_554D),
            retry: None,
        }
    }
}

impl DropPolicy for ClumsyPolicy {
    fn name(&self) -> &'static str {
        "clumsy"
    }

    fn next_drop(&mut self, board: &Board) -> Option<PlannedDrop> {
        if let Some(id) = self.retry.take()
            && let Some(piece) = board.piece(&id).filter(|p| !p.is_placed)
        {
            return Some(correct_drop(&piece.id, piece.row, piece.col));
        }

        let tray = board.tray();
        let piece = *tray.choose(&mut self.rng)?;
        let free: Vec<_> = board
            .cells
            .iter()
            .filter(|c| !c.is_occupied && (c.row, c.col) != (piece.row, piece.col))
            .collect();
        if !free.is_empty() && self.rng.gen_range(0..3) == 0 {
            let cell = free[self.rng.gen_range(0..free.len())];
            self.retry = Some(piece.id.clone());
            return Some(correct_drop(&piece.id, cell.row, cell.col));
        }
        Some(correct_drop(&piece.id, piece.row, piece.col))
    }
}
