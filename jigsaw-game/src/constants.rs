//! Centralized tuning constants for the puzzle engine.
//!
//! Board geometry, zoom bounds and timing live here so the view layer and
//! the tester agree on a single set of numbers.

// Logging ------------------------------------------------------------------
pub(crate) const DEBUG_ENV_VAR: &str = "JIGSAW_DEBUG_LOGS";

// Canvas -------------------------------------------------------------------
/// Width of the normalized puzzle image in pixels.
pub const CANVAS_WIDTH: u32 = 800;
/// Height of the normalized puzzle image in pixels.
pub const CANVAS_HEIGHT: u32 = 600;
/// JPEG quality used when encoding the normalized canvas.
pub const CANVAS_JPEG_QUALITY: u8 = 90;

// Board --------------------------------------------------------------------
/// Largest grid dimension accepted by the generator (pieces stay >= 30px tall).
pub const MAX_GRID_SIZE: u32 = 20;
/// Grid dimension used for uploaded images.
pub const CUSTOM_GRID_SIZE: u32 = 3;
/// Identifier reserved for the ad-hoc level started by an upload.
pub const CUSTOM_LEVEL_ID: u32 = 999;

// Zoom ---------------------------------------------------------------------
pub const ZOOM_MIN: u16 = 50;
pub const ZOOM_MAX: u16 = 200;
pub const ZOOM_STEP: u16 = 10;
pub const ZOOM_DEFAULT: u16 = 100;

// Timing -------------------------------------------------------------------
/// Delay between the final placement and the completion overlay.
pub const COMPLETION_DELAY_MS: u32 = 500;

// Notices ------------------------------------------------------------------
pub(crate) const NOTICE_IMAGE_DECODE: &str = "notice.image_decode";
pub(crate) const NOTICE_INVALID_GRID: &str = "notice.invalid_grid";
pub(crate) const NOTICE_UNKNOWN_PIECE: &str = "notice.unknown_piece";
pub(crate) const NOTICE_OUT_OF_BOUNDS: &str = "notice.out_of_bounds";
pub(crate) const NOTICE_UNKNOWN_LEVEL: &str = "notice.unknown_level";
pub(crate) const NOTICE_LEVEL_LOCKED: &str = "notice.level_locked";
pub(crate) const NOTICE_CATALOG: &str = "notice.catalog";

#[cfg(debug_assertions)]
pub(crate) fn debug_log_enabled() -> bool {
    matches!(std::env::var(DEBUG_ENV_VAR), Ok(val) if val != "0")
}

#[cfg(not(debug_assertions))]
pub(crate) const fn debug_log_enabled() -> bool {
    false
}
