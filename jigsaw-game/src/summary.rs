//! Completion summary shown in the level-complete dialog.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSummary {
    pub level_id: u32,
    pub grid_size: u32,
    /// Every drop, correct or not.
    pub moves: u32,
    pub misses: u32,
    pub elapsed_ms: u64,
    pub stars: u8,
}

impl LevelSummary {
    #[must_use]
    pub fn new(level_id: u32, grid_size: u32, moves: u32, misses: u32, elapsed_ms: u64) -> Self {
        Self {
            level_id,
            grid_size,
            moves,
            misses,
            elapsed_ms,
            stars: star_rating(misses, grid_size),
        }
    }

    #[must_use]
    pub fn elapsed_label(&self) -> String {
        format_elapsed(self.elapsed_ms)
    }
}

/// Three stars for a clean run, two for at most one miss per row, else one.
#[must_use]
pub const fn star_rating(misses: u32, grid_size: u32) -> u8 {
    if misses == 0 {
        3
    } else if misses <= grid_size {
        2
    } else {
        1
    }
}

/// `m:ss`, with hours folded into minutes.
#[must_use]
pub fn format_elapsed(elapsed_ms: u64) -> String {
    let total_secs = elapsed_ms / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_follow_miss_thresholds() {
        assert_eq!(star_rating(0, 3), 3);
        assert_eq!(star_rating(1, 3), 2);
        assert_eq!(star_rating(3, 3), 2);
        assert_eq!(star_rating(4, 3), 1);
        assert_eq!(star_rating(10, 10), 2);
    }

    #[test]
    fn elapsed_formats_as_minutes_and_seconds() {
        assert_eq!(format_elapsed(0), "0:00");
        assert_eq!(format_elapsed(165_000), "2:45");
        assert_eq!(format_elapsed(59_999), "0:59");
        assert_eq!(format_elapsed(3_725_000), "62:05");
    }

    #[test]
    fn summary_derives_stars() {
        let summary = LevelSummary::new(4, 4, 20, 4, 61_000);
        assert_eq!(summary.stars, 2);
        assert_eq!(summary.elapsed_label(), "1:01");
    }
}
