mod handlers;
mod phases;

pub use handlers::{AppHandlers, DropRequest};

use crate::app::state::AppState;
use crate::components::{
    footer::Footer,
    header::Header,
    ui::{notice_banner::NoticeBanner, tutorial_dialog::TutorialDialog},
};
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::Navigator;

pub fn render_app(state: &AppState, route: Option<&Route>, navigator: Option<Navigator>) -> Html {
    let handlers = AppHandlers::new(state, navigator);
    let main_view = phases::render_main_view(state, &handlers, route);
    let game = &state.model.game;

    html! {
        <>
            <Header
                on_lang_change={handlers.lang_change.clone()}
                on_help={handlers.show_tutorial.clone()}
                current_lang={(*state.current_language).clone()}
            />
            <main id="main" role="main">
                <style>{ crate::a11y::visible_focus_css() }</style>
                <div id={crate::a11y::STATUS_REGION_ID} class="sr-only" aria-live="polite" role="status"></div>
                { game.notice.clone().map(|notice| html! {
                    <NoticeBanner {notice} on_dismiss={handlers.dismiss_notice.clone()} />
                }).unwrap_or_default() }
                { main_view }
                <TutorialDialog
                    tutorial={game.tutorial}
                    on_next={handlers.tutorial_next.clone()}
                    on_close={handlers.tutorial_close.clone()}
                />
            </main>
            <Footer />
        </>
    }
}
