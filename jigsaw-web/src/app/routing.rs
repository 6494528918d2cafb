#[cfg(any(target_arch = "wasm32", test))]
use crate::game::{GameAction, Screen};
#[cfg(any(target_arch = "wasm32", test))]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::Navigator;

#[cfg(any(target_arch = "wasm32", test))]
fn next_route_for_screen(screen: Screen, current_route: Option<&Route>) -> Option<Route> {
    // Unknown URLs keep showing the 404 page until the player leaves it.
    if screen == Screen::LevelSelect && current_route == Some(&Route::NotFound) {
        return None;
    }
    let new_route = Route::from_screen(screen);
    if Some(&new_route) == current_route {
        None
    } else {
        Some(new_route)
    }
}

/// Browser navigation can only leave a level; it never starts one.
#[cfg(any(target_arch = "wasm32", test))]
fn action_for_route(screen: Screen, route: Option<&Route>) -> Option<GameAction> {
    let wanted = route.and_then(Route::to_screen)?;
    (wanted == Screen::LevelSelect && screen != Screen::LevelSelect).then_some(GameAction::Exit)
}

/// Push the route that matches the engine screen whenever the screen moves.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_route_with_screen(
    screen: Screen,
    navigator: Option<Navigator>,
    active_route: Option<Route>,
) {
    use_effect_with(screen, move |screen| {
        if let (Some(nav), Some(new_route)) = (
            navigator.as_ref(),
            next_route_for_screen(*screen, active_route.as_ref()),
        ) {
            nav.push(&new_route);
        }
    });
}

/// Leave the board when the player navigates back to the level list.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_screen_with_route(
    screen: Screen,
    dispatcher: UseReducerDispatcher<crate::app::state::AppModel>,
    route: Option<Route>,
) {
    use_effect_with(route, move |route| {
        if let Some(action) = action_for_route(screen, route.as_ref()) {
            dispatcher.dispatch(action);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_route_for_screen_skips_when_unchanged() {
        assert!(next_route_for_screen(Screen::Playing, Some(&Route::Play)).is_none());
        assert!(next_route_for_screen(Screen::Completed, Some(&Route::Play)).is_none());
        assert_eq!(
            next_route_for_screen(Screen::LevelSelect, Some(&Route::Play)),
            Some(Route::Levels)
        );
        assert_eq!(
            next_route_for_screen(Screen::Playing, None),
            Some(Route::Play)
        );
    }

    #[test]
    fn not_found_page_stays_until_a_level_starts() {
        assert!(next_route_for_screen(Screen::LevelSelect, Some(&Route::NotFound)).is_none());
        assert_eq!(
            next_route_for_screen(Screen::Playing, Some(&Route::NotFound)),
            Some(Route::Play)
        );
    }

    #[test]
    fn back_to_levels_exits_an_active_level() {
        assert_eq!(
            action_for_route(Screen::Playing, Some(&Route::Levels)),
            Some(GameAction::Exit)
        );
        assert_eq!(
            action_for_route(Screen::Completed, Some(&Route::Levels)),
            Some(GameAction::Exit)
        );
        assert!(action_for_route(Screen::LevelSelect, Some(&Route::Levels)).is_none());
    }

    #[test]
    fn play_and_unknown_routes_never_start_a_level() {
        assert!(action_for_route(Screen::LevelSelect, Some(&Route::Play)).is_none());
        assert!(action_for_route(Screen::LevelSelect, Some(&Route::NotFound)).is_none());
        assert!(action_for_route(Screen::Playing, None).is_none());
    }
}
