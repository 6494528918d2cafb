use crate::app::state::AppState;
use crate::game::GameAction;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::Navigator;

/// A drop request from the board: piece id plus target cell.
pub type DropRequest = (String, u32, u32);

#[derive(Clone)]
pub struct AppHandlers {
    pub select_level: Callback<u32>,
    pub upload: Callback<web_sys::File>,
    pub drop_piece: Callback<DropRequest>,
    pub zoom_in: Callback<()>,
    pub zoom_out: Callback<()>,
    pub reset: Callback<()>,
    pub exit: Callback<()>,
    pub next_level: Callback<()>,
    pub play_again: Callback<()>,
    pub tutorial_next: Callback<()>,
    pub tutorial_close: Callback<()>,
    pub show_tutorial: Callback<()>,
    pub dismiss_notice: Callback<()>,
    pub lang_change: Callback<String>,
    pub go_home: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState, navigator: Option<Navigator>) -> Self {
        Self {
            select_level: build_select_level(state),
            upload: build_upload(state),
            drop_piece: build_drop_piece(state),
            zoom_in: build_action(state, GameAction::ZoomIn),
            zoom_out: build_action(state, GameAction::ZoomOut),
            reset: build_action(state, GameAction::Reset),
            exit: build_action(state, GameAction::Exit),
            next_level: build_action(state, GameAction::NextLevel),
            play_again: build_action(state, GameAction::PlayAgain),
            tutorial_next: build_action(state, GameAction::TutorialNext),
            tutorial_close: build_action(state, GameAction::TutorialClose),
            show_tutorial: build_action(state, GameAction::ShowTutorial),
            dismiss_notice: build_action(state, GameAction::DismissNotice),
            lang_change: build_lang_change(state),
            go_home: build_go_home(state, navigator),
        }
    }
}

fn build_action(state: &AppState, action: GameAction) -> Callback<()> {
    let dispatcher = state.model.dispatcher();
    Callback::from(move |()| dispatcher.dispatch(action.clone()))
}

fn build_select_level(state: &AppState) -> Callback<u32> {
    let dispatcher = state.model.dispatcher();
    Callback::from(move |level_id| dispatcher.dispatch(GameAction::SelectLevel { level_id }))
}

fn build_drop_piece(state: &AppState) -> Callback<DropRequest> {
    let dispatcher = state.model.dispatcher();
    Callback::from(move |(piece_id, row, col): DropRequest| {
        dispatcher.dispatch(GameAction::DropPiece {
            piece_id,
            row,
            col,
            at_ms: crate::dom::now_ms(),
        });
    })
}

fn build_upload(state: &AppState) -> Callback<web_sys::File> {
    let dispatcher = state.model.dispatcher();
    let uploading = state.uploading.clone();
    Callback::from(move |file: web_sys::File| {
        if *uploading {
            return;
        }
        uploading.set(true);
        let dispatcher = dispatcher.clone();
        let uploading = uploading.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match crate::game::load_upload(&file).await {
                Ok(image_url) => dispatcher.dispatch(GameAction::StartCustomLevel { image_url }),
                Err(err) => {
                    log::error!("upload of {} failed: {err}", file.name());
                    dispatcher.dispatch(GameAction::UploadFailed {
                        reason: err.to_string(),
                    });
                }
            }
            uploading.set(false);
        });
    })
}

fn build_lang_change(state: &AppState) -> Callback<String> {
    let current_language = state.current_language.clone();
    Callback::from(move |lang: String| {
        crate::i18n::set_lang(&lang);
        current_language.set(lang);
    })
}

fn build_go_home(state: &AppState, navigator: Option<Navigator>) -> Callback<()> {
    let dispatcher = state.model.dispatcher();
    Callback::from(move |()| {
        dispatcher.dispatch(GameAction::Exit);
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Levels);
        }
    })
}
