use crate::game::Screen;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Levels,
    #[at("/play")]
    Play,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// The completion overlay sits on top of the board, so it shares `/play`.
    #[must_use]
    pub const fn from_screen(screen: Screen) -> Self {
        match screen {
            Screen::LevelSelect => Self::Levels,
            Screen::Playing | Screen::Completed => Self::Play,
        }
    }

    /// Screen a route asks for. `/play` cannot start a level on its own.
    #[must_use]
    pub const fn to_screen(&self) -> Option<Screen> {
        match self {
            Self::Levels => Some(Screen::LevelSelect),
            Self::Play | Self::NotFound => None,
        }
    }
}
