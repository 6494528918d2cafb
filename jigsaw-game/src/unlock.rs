//! Linear level progression.
use serde::{Deserialize, Serialize};

use crate::catalog::LevelCatalog;

/// Catalog after a level was finished, plus what changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockResult {
    pub catalog: LevelCatalog,
    pub completed: Option<u32>,
    pub unlocked: Option<u32>,
}

/// Where the "next level" button leads from the completion dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NextLevel {
    Play(u32),
    Select,
}

/// Mark `level_id` completed and unlock the level after it.
///
/// Levels outside the catalog (the custom upload level) change nothing.
/// Lock state only ever moves from locked to unlocked.
#[must_use]
pub fn complete_level(catalog: &LevelCatalog, level_id: u32) -> UnlockResult {
    let mut next = catalog.clone();
    let Some(idx) = next.index_of(level_id) else {
        return UnlockResult {
            catalog: next,
            completed: None,
            unlocked: None,
        };
    };

    let levels = next.levels_mut();
    levels[idx].is_completed = true;
    let unlocked = levels.get_mut(idx + 1).and_then(|following| {
        if following.is_locked {
            following.is_locked = false;
            Some(following.id)
        } else {
            None
        }
    });

    UnlockResult {
        catalog: next,
        completed: Some(level_id),
        unlocked,
    }
}

/// Resolve the next-level button: play the following level if it is open,
/// otherwise go back to the picker.
#[must_use]
pub fn next_level(catalog: &LevelCatalog, level_id: u32) -> NextLevel {
    catalog
        .next_after(level_id)
        .filter(|level| !level.is_locked)
        .map_or(NextLevel::Select, |level| NextLevel::Play(level.id))
}
