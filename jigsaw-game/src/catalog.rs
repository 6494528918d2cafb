//! Level catalog: the fixed, ordered list of playable puzzles.
use serde::{Deserialize, Serialize};

use crate::board::validate_grid_size;
use crate::constants::{CUSTOM_GRID_SIZE, CUSTOM_LEVEL_ID};
use crate::error::PuzzleError;

const DEFAULT_CATALOG_JSON: &str = include_str!("../data/levels.json");

/// Difficulty badge shown on a level card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    VeryHard,
    Expert,
    Custom,
}

impl Difficulty {
    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::Easy => "difficulty.easy",
            Self::Medium => "difficulty.medium",
            Self::Hard => "difficulty.hard",
            Self::VeryHard => "difficulty.very_hard",
            Self::Expert => "difficulty.expert",
            Self::Custom => "difficulty.custom",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub id: u32,
    /// Translation key for the level title; `name` is the untranslated fallback.
    #[serde(default)]
    pub name_key: String,
    pub name: String,
    pub thumbnail: String,
    pub difficulty: Difficulty,
    pub grid_size: u32,
    #[serde(default)]
    pub is_locked: bool,
    #[serde(default)]
    pub is_completed: bool,
}

impl Level {
    /// The ad-hoc level started from an uploaded image.
    #[must_use]
    pub fn custom(thumbnail: impl Into<String>) -> Self {
        Self {
            id: CUSTOM_LEVEL_ID,
            name_key: String::from("levels.custom"),
            name: String::from("Custom puzzle"),
            thumbnail: thumbnail.into(),
            difficulty: Difficulty::Custom,
            grid_size: CUSTOM_GRID_SIZE,
            is_locked: false,
            is_completed: false,
        }
    }

    #[must_use]
    pub const fn is_custom(&self) -> bool {
        self.id == CUSTOM_LEVEL_ID
    }

    #[must_use]
    pub const fn piece_count(&self) -> u32 {
        self.grid_size * self.grid_size
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCatalog {
    levels: Vec<Level>,
}

impl LevelCatalog {
    /// Parse and validate a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::Catalog`] for malformed JSON and
    /// [`PuzzleError::InvalidGridSize`] if an entry has an unusable grid.
    pub fn from_json(json: &str) -> Result<Self, PuzzleError> {
        let catalog: Self = serde_json::from_str(json)?;
        for level in &catalog.levels {
            validate_grid_size(level.grid_size)?;
        }
        Ok(catalog)
    }

    /// Parse the embedded level list.
    ///
    /// # Errors
    ///
    /// Same as [`LevelCatalog::from_json`].
    pub fn try_load_default() -> Result<Self, PuzzleError> {
        Self::from_json(DEFAULT_CATALOG_JSON)
    }

    /// The ten built-in levels, level 1 unlocked. Empty if the embedded data
    /// fails to parse; [`GameState`](crate::state::GameState) reports that
    /// case as a notice instead.
    #[must_use]
    pub fn load_default() -> Self {
        Self::try_load_default().unwrap_or_default()
    }

    #[must_use]
    pub fn from_levels(levels: Vec<Level>) -> Self {
        Self { levels }
    }

    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub(crate) fn levels_mut(&mut self) -> &mut [Level] {
        &mut self.levels
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Level> {
        self.levels.iter().find(|level| level.id == id)
    }

    #[must_use]
    pub fn index_of(&self, id: u32) -> Option<usize> {
        self.levels.iter().position(|level| level.id == id)
    }

    /// The level following `id` in catalog order.
    #[must_use]
    pub fn next_after(&self, id: u32) -> Option<&Level> {
        self.index_of(id).and_then(|idx| self.levels.get(idx + 1))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.levels.iter().filter(|level| level.is_completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_ten_linear_levels() {
        let catalog = LevelCatalog::load_default();
        assert_eq!(catalog.len(), 10);
        let sizes: Vec<u32> = catalog.levels().iter().map(|l| l.grid_size).collect();
        assert_eq!(sizes, vec![3, 3, 4, 4, 5, 6, 7, 8, 9, 10]);
        assert!(!catalog.levels()[0].is_locked);
        assert!(catalog.levels()[1..].iter().all(|l| l.is_locked));
        assert!(catalog.levels().iter().all(|l| !l.is_completed));
        assert_eq!(catalog.levels()[9].difficulty, Difficulty::Expert);
    }

    #[test]
    fn next_after_follows_catalog_order() {
        let catalog = LevelCatalog::load_default();
        assert_eq!(catalog.next_after(1).map(|l| l.id), Some(2));
        assert_eq!(catalog.next_after(9).map(|l| l.id), Some(10));
        assert!(catalog.next_after(10).is_none());
        assert!(catalog.next_after(CUSTOM_LEVEL_ID).is_none());
    }

    #[test]
    fn rejects_zero_grid_entries() {
        let json = r#"{"levels":[{"id":1,"name":"x","thumbnail":"t","difficulty":"easy","grid_size":0}]}"#;
        assert!(matches!(
            LevelCatalog::from_json(json),
            Err(PuzzleError::InvalidGridSize { size: 0 })
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            LevelCatalog::from_json("{\"levels\": 3"),
            Err(PuzzleError::Catalog(_))
        ));
    }

    #[test]
    fn custom_level_is_outside_catalog() {
        let custom = Level::custom("blob:abc");
        assert!(custom.is_custom());
        assert_eq!(custom.grid_size, CUSTOM_GRID_SIZE);
        assert_eq!(custom.piece_count(), 9);
        assert!(LevelCatalog::load_default().get(custom.id).is_none());
    }
}
