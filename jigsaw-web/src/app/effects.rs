//! Runs engine effects in the browser: image loads, the completion timer,
//! object URL cleanup and screen reader announcements.
use crate::app::state::{AppModel, AppState};
use crate::game::{Effect, GameAction, PlacementOutcome, Screen, SessionTicket, WebImageError};
use crate::i18n::{fmt_pct, t, tr};
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

/// How long the miss shake stays on a cell.
pub const FEEDBACK_CLEAR_MS: u32 = 600;

type TimerSlot = Rc<RefCell<Option<Timeout>>>;

fn image_failed(ticket: SessionTicket, source: &str, err: &WebImageError) -> GameAction {
    log::error!("failed to load {source}: {err}");
    GameAction::ImageFailed {
        ticket,
        reason: err.to_string(),
    }
}

fn run_effect(effect: Effect, dispatcher: &UseReducerDispatcher<AppModel>, timer: &TimerSlot) {
    match effect {
        Effect::LoadImage { ticket, source } => {
            let dispatcher = dispatcher.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let url = crate::paths::asset_path(&source);
                match crate::game::load_remote_image(&url).await {
                    Ok(url) => dispatcher.dispatch(GameAction::ImageLoaded {
                        ticket,
                        url,
                        at_ms: crate::dom::now_ms(),
                    }),
                    Err(err) => dispatcher.dispatch(image_failed(ticket, &source, &err)),
                }
            });
        }
        Effect::ScheduleCompletion { ticket, delay_ms } => {
            let dispatcher = dispatcher.clone();
            // Replacing the slot drops, and so cancels, any earlier timer.
            timer.borrow_mut().replace(Timeout::new(delay_ms, move || {
                dispatcher.dispatch(GameAction::CompletionElapsed { ticket });
            }));
        }
        Effect::CancelCompletion => {
            timer.borrow_mut().take();
        }
        Effect::ReleaseImage { url } => crate::dom::revoke_object_url(&url),
    }
}

fn announcement(model: &AppModel) -> Option<String> {
    if model.game.screen == Screen::Completed {
        return Some(t("status.completed"));
    }
    match model.last_outcome? {
        PlacementOutcome::Placed => {
            let pct = fmt_pct(model.game.progress);
            let mut args = BTreeMap::new();
            args.insert("pct", pct.as_str());
            Some(tr("status.placed", Some(&args)))
        }
        PlacementOutcome::Rejected => Some(t("status.rejected")),
        PlacementOutcome::AlreadyPlaced => None,
    }
}

/// Drain the effect outbox after every committed transition.
#[hook]
pub fn use_effect_runner(state: &AppState) {
    let timer: TimerSlot = use_mut_ref(|| None);
    let model = state.model.clone();
    let dispatcher = state.model.dispatcher();
    use_effect_with(model.revision, move |_| {
        for effect in model.take_effects() {
            run_effect(effect, &dispatcher, &timer);
        }
        if let Some(msg) = announcement(&model) {
            crate::a11y::set_status(&msg);
        }
    });
}

/// Clear the miss shake once its animation has played.
#[hook]
pub fn use_feedback_reset(state: &AppState) {
    let serial = state.model.game.feedback.as_ref().map(|f| f.serial);
    let dispatcher = state.model.dispatcher();
    use_effect_with(serial, move |serial| {
        let timeout = serial.map(|_| {
            Timeout::new(FEEDBACK_CLEAR_MS, move || {
                dispatcher.dispatch(GameAction::ClearFeedback);
            })
        });
        move || drop(timeout)
    });
}
