use futures::executor::block_on;
use jigsaw_web::components::footer::Footer;
use jigsaw_web::components::header::Header;
use jigsaw_web::components::modal::Modal;
use jigsaw_web::game::{GameAction, GameState, LevelCatalog, LevelSummary, Zoom};
use jigsaw_web::pages::{levels::LevelsPage, not_found::NotFound, play::PlayPage};
use yew::html::ChildrenRenderer;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn playing_state() -> GameState {
    GameState::default()
        .with_seed(21)
        .apply(GameAction::SelectLevel { level_id: 1 })
        .state
}

fn play_props(image_url: Option<&str>) -> jigsaw_web::pages::play::Props {
    let state = playing_state();
    jigsaw_web::pages::play::Props {
        level: state.active_level.clone().unwrap(),
        board: state.board.clone().unwrap(),
        image_url: image_url.map(|url| AttrValue::from(url.to_string())),
        zoom: Zoom::default(),
        progress: 0.0,
        feedback: None,
        summary: None,
        has_next: true,
        on_drop: Callback::noop(),
        on_zoom_in: Callback::noop(),
        on_zoom_out: Callback::noop(),
        on_reset: Callback::noop(),
        on_exit: Callback::noop(),
        on_play_again: Callback::noop(),
        on_next_level: Callback::noop(),
    }
}

#[test]
fn header_renders_language_and_help() {
    jigsaw_web::i18n::set_lang("en");
    let props = jigsaw_web::components::header::Props {
        on_lang_change: Callback::noop(),
        on_help: Callback::noop(),
        current_lang: "en".to_string(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("lang-select"));
    assert!(html.contains("Türkçe"));
    assert!(html.contains("help-open-btn"));
    assert!(html.contains("Puzzle Game"));
}

#[test]
fn footer_renders_copy() {
    jigsaw_web::i18n::set_lang("en");
    let html = block_on(LocalServerRenderer::<Footer>::new().render());
    assert!(html.contains("<footer"));
    assert!(html.contains("Jigsaw Trail"));
}

#[test]
fn modal_renders_when_open_and_skips_when_closed() {
    jigsaw_web::i18n::set_lang("en");
    let open_props = jigsaw_web::components::modal::Props {
        open: true,
        title: AttrValue::from("Title"),
        description: Some(AttrValue::from("Desc")),
        on_close: Callback::noop(),
        return_focus_id: None,
        children: ChildrenRenderer::default(),
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(open_props).render());
    assert!(html.contains("modal__header"));
    assert!(html.contains("Desc"));
    assert!(html.contains("aria-modal=\"true\""));

    let closed_props = jigsaw_web::components::modal::Props {
        open: false,
        title: AttrValue::from("Title"),
        description: None,
        on_close: Callback::noop(),
        return_focus_id: None,
        children: ChildrenRenderer::default(),
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(closed_props).render());
    assert!(!html.contains("modal-backdrop"));
}

#[test]
fn not_found_offers_way_home() {
    jigsaw_web::i18n::set_lang("en");
    let props = jigsaw_web::pages::not_found::Props {
        on_go_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NotFound>::with_props(props).render());
    assert!(html.contains("Page not found"));
    assert!(html.contains("Back to levels"));
}

#[test]
fn levels_page_lists_catalog() {
    jigsaw_web::i18n::set_lang("en");
    let props = jigsaw_web::pages::levels::Props {
        levels: LevelCatalog::load_default().levels().to_vec(),
        on_select: Callback::noop(),
        on_upload: Callback::noop(),
        uploading: false,
    };
    let html = block_on(LocalServerRenderer::<LevelsPage>::with_props(props).render());
    assert!(html.contains("Choose a puzzle"));
    assert!(html.contains("Mountain View"));
    assert!(html.contains("Final"));
}

#[test]
fn play_page_waits_for_image() {
    jigsaw_web::i18n::set_lang("en");
    let html = block_on(LocalServerRenderer::<PlayPage>::with_props(play_props(None)).render());
    assert!(html.contains("Loading image..."));
    assert!(!html.contains("puzzle-board"));
    assert!(html.contains("Easy Start"));
}

#[test]
fn play_page_shows_board_tray_and_controls() {
    jigsaw_web::i18n::set_lang("en");
    let html = block_on(
        LocalServerRenderer::<PlayPage>::with_props(play_props(Some("blob:ready"))).render(),
    );
    assert!(html.contains("puzzle-board"));
    assert!(html.contains("Puzzle pieces"));
    assert!(html.contains("Zoom 100%"));
    assert!(html.contains("0% complete"));
    assert!(!html.contains("Complete!"));
}

#[test]
fn play_page_overlays_completion_summary() {
    jigsaw_web::i18n::set_lang("en");
    let mut props = play_props(Some("blob:ready"));
    props.summary = Some(LevelSummary::new(1, 3, 9, 0, 12_000));
    let html = block_on(LocalServerRenderer::<PlayPage>::with_props(props).render());
    assert!(html.contains("Level 1 Complete!"));
    assert!(html.contains("Time: 0:12"));
    assert!(html.contains("Next level"));
}

#[test]
fn turkish_locale_renders_translated_copy() {
    jigsaw_web::i18n::set_lang("tr");
    let html = block_on(LocalServerRenderer::<PlayPage>::with_props(play_props(None)).render());
    jigsaw_web::i18n::set_lang("en");
    assert!(html.contains("Resim yükleniyor..."), "{html}");
}
