//! Board zoom level, kept inside the supported range.
use serde::{Deserialize, Serialize};

use crate::constants::{ZOOM_DEFAULT, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Zoom(u16);

impl Default for Zoom {
    fn default() -> Self {
        Self(ZOOM_DEFAULT)
    }
}

impl Zoom {
    #[must_use]
    pub const fn new(percent: u16) -> Self {
        let clamped = if percent < ZOOM_MIN {
            ZOOM_MIN
        } else if percent > ZOOM_MAX {
            ZOOM_MAX
        } else {
            percent
        };
        Self(clamped)
    }

    #[must_use]
    pub const fn percent(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn zoom_in(self) -> Self {
        Self::new(self.0.saturating_add(ZOOM_STEP))
    }

    #[must_use]
    pub const fn zoom_out(self) -> Self {
        Self::new(self.0.saturating_sub(ZOOM_STEP))
    }

    #[must_use]
    pub const fn can_zoom_in(self) -> bool {
        self.0 < ZOOM_MAX
    }

    #[must_use]
    pub const fn can_zoom_out(self) -> bool {
        self.0 > ZOOM_MIN
    }

    /// Scale factor for CSS transforms.
    #[must_use]
    pub fn scale(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}
