#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod effects;
pub mod routing;
pub mod state;
pub mod view;

pub use state::{AppModel, AppState};

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();
    effects::use_effect_runner(&app_state);
    effects::use_feedback_reset(&app_state);

    let navigator = use_navigator();
    let route = use_route::<Route>();
    let screen = app_state.model.game.screen;

    routing::use_sync_route_with_screen(screen, navigator.clone(), route.clone());
    routing::use_sync_screen_with_route(screen, app_state.model.dispatcher(), route.clone());

    view::render_app(&app_state, route.as_ref(), navigator)
}
