use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::game::Screen;
use crate::pages::{levels::LevelsPage, not_found::NotFound, play::PlayPage};
use crate::router::Route;
use yew::prelude::*;

pub fn render_main_view(state: &AppState, handlers: &AppHandlers, route: Option<&Route>) -> Html {
    let game = &state.model.game;
    let not_found = matches!(route, None | Some(Route::NotFound));
    if not_found && game.screen == Screen::LevelSelect {
        return html! { <NotFound on_go_home={handlers.go_home.clone()} /> };
    }

    match (game.screen, game.active_level.as_ref(), game.board.as_ref()) {
        (Screen::Playing | Screen::Completed, Some(level), Some(board)) => {
            let has_next = !level.is_custom() && game.catalog.next_after(level.id).is_some();
            html! {
                <PlayPage
                    level={level.clone()}
                    board={board.clone()}
                    image_url={game.image_url().map(|url| AttrValue::from(url.to_string()))}
                    zoom={game.zoom}
                    progress={game.progress}
                    feedback={game.feedback.clone()}
                    summary={game.summary.clone().filter(|_| game.screen == Screen::Completed)}
                    has_next={has_next}
                    on_drop={handlers.drop_piece.clone()}
                    on_zoom_in={handlers.zoom_in.clone()}
                    on_zoom_out={handlers.zoom_out.clone()}
                    on_reset={handlers.reset.clone()}
                    on_exit={handlers.exit.clone()}
                    on_play_again={handlers.play_again.clone()}
                    on_next_level={handlers.next_level.clone()}
                />
            }
        }
        _ => html! {
            <LevelsPage
                levels={game.catalog.levels().to_vec()}
                uploading={*state.uploading}
                on_select={handlers.select_level.clone()}
                on_upload={handlers.upload.clone()}
            />
        },
    }
}
