pub mod completion_dialog;
pub mod game_controls;
pub mod level_select;
pub mod notice_banner;
pub mod piece_tray;
pub mod puzzle_board;
pub mod tutorial_dialog;

use crate::game::Level;
use crate::i18n::t;

/// Localized level name, falling back to the catalog's English name.
#[must_use]
pub fn level_name(level: &Level) -> String {
    let translated = t(&level.name_key);
    if translated == level.name_key {
        level.name.clone()
    } else {
        translated
    }
}
