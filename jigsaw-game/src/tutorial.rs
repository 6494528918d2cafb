//! Three-step onboarding overlay shown on first launch.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TutorialStep {
    DragAndDrop,
    MovePieces,
    ZoomControls,
}

impl TutorialStep {
    pub const ALL: [Self; 3] = [Self::DragAndDrop, Self::MovePieces, Self::ZoomControls];

    #[must_use]
    pub const fn title_key(self) -> &'static str {
        match self {
            Self::DragAndDrop => "tutorial.drag.title",
            Self::MovePieces => "tutorial.move.title",
            Self::ZoomControls => "tutorial.zoom.title",
        }
    }

    #[must_use]
    pub const fn body_key(self) -> &'static str {
        match self {
            Self::DragAndDrop => "tutorial.drag.body",
            Self::MovePieces => "tutorial.move.body",
            Self::ZoomControls => "tutorial.zoom.body",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::DragAndDrop => 0,
            Self::MovePieces => 1,
            Self::ZoomControls => 2,
        }
    }

    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::DragAndDrop => Some(Self::MovePieces),
            Self::MovePieces => Some(Self::ZoomControls),
            Self::ZoomControls => None,
        }
    }

    #[must_use]
    pub const fn is_last(self) -> bool {
        self.next().is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialState {
    pub visible: bool,
    pub step: TutorialStep,
}

impl Default for TutorialState {
    fn default() -> Self {
        Self {
            visible: true,
            step: TutorialStep::DragAndDrop,
        }
    }
}

impl TutorialState {
    #[must_use]
    pub const fn hidden() -> Self {
        Self {
            visible: false,
            step: TutorialStep::DragAndDrop,
        }
    }

    /// Advance one step; the last step closes the overlay.
    #[must_use]
    pub const fn advance(self) -> Self {
        match self.step.next() {
            Some(step) => Self {
                visible: self.visible,
                step,
            },
            None => Self::hidden(),
        }
    }

    #[must_use]
    pub const fn close(self) -> Self {
        Self::hidden()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_walks_all_steps_then_hides() {
        let start = TutorialState::default();
        assert!(start.visible);
        let second = start.advance();
        assert_eq!(second.step, TutorialStep::MovePieces);
        let third = second.advance();
        assert!(third.step.is_last());
        assert!(third.visible);
        assert!(!third.advance().visible);
    }

    #[test]
    fn close_hides_from_any_step() {
        for step in TutorialStep::ALL {
            let state = TutorialState {
                visible: true,
                step,
            };
            assert!(!state.close().visible);
        }
    }
}
