use crate::game::{Effect, GameAction, GameState, PlacementOutcome};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Reducer wrapper around [`GameState`].
///
/// Every dispatch runs the engine transition and parks its effects in the
/// shared outbox. The effect runner drains the outbox after each render,
/// keyed on `revision`.
#[derive(Debug, Clone)]
pub struct AppModel {
    pub game: GameState,
    pub revision: u64,
    pub last_outcome: Option<PlacementOutcome>,
    outbox: Rc<RefCell<Vec<Effect>>>,
}

impl PartialEq for AppModel {
    fn eq(&self, other: &Self) -> bool {
        self.revision == other.revision && self.game == other.game
    }
}

impl AppModel {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_game(GameState::default().with_seed(seed))
    }

    #[must_use]
    pub fn from_game(game: GameState) -> Self {
        Self {
            game,
            revision: 0,
            last_outcome: None,
            outbox: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Hand over every effect queued since the last drain.
    #[must_use]
    pub fn take_effects(&self) -> Vec<Effect> {
        std::mem::take(&mut *self.outbox.borrow_mut())
    }
}

impl Reducible for AppModel {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        log::debug!("dispatch {action:?}");
        let transition = self.game.apply(action);
        if transition.effects.is_empty() && transition.state == self.game {
            return self;
        }
        self.outbox.borrow_mut().extend(transition.effects);
        Rc::new(Self {
            game: transition.state,
            revision: self.revision.wrapping_add(1),
            last_outcome: transition.outcome,
            outbox: Rc::clone(&self.outbox),
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub model: UseReducerHandle<AppModel>,
    pub current_language: UseStateHandle<String>,
    /// An upload is being decoded; the upload card shows a busy state.
    pub uploading: UseStateHandle<bool>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        model: use_reducer(|| AppModel::new(initial_seed())),
        current_language: use_state(crate::i18n::current_lang),
        uploading: use_state(|| false),
    }
}

/// Fresh shuffle seed per page load.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn initial_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        let entropy = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
        crate::dom::now_ms() ^ (entropy << 32)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0
    }
}
