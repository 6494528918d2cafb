use crate::app::view::DropRequest;
use crate::components::ui::{
    completion_dialog::CompletionDialog, game_controls::GameControls, level_name,
    piece_tray::PieceTray, puzzle_board::PuzzleBoard,
};
use crate::game::{Board, DropFeedback, Level, LevelSummary, Zoom};
use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub level: Level,
    pub board: Board,
    /// `None` while the level image is still loading.
    #[prop_or_default]
    pub image_url: Option<AttrValue>,
    pub zoom: Zoom,
    pub progress: f64,
    #[prop_or_default]
    pub feedback: Option<DropFeedback>,
    /// Present once the completion overlay is due.
    #[prop_or_default]
    pub summary: Option<LevelSummary>,
    #[prop_or_default]
    pub has_next: bool,
    pub on_drop: Callback<DropRequest>,
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_exit: Callback<()>,
    pub on_play_again: Callback<()>,
    pub on_next_level: Callback<()>,
}

#[function_component(PlayPage)]
pub fn play_page(p: &Props) -> Html {
    let workspace = match p.image_url.as_ref() {
        Some(url) => html! {
            <div class="play-layout">
                <PuzzleBoard
                    board={p.board.clone()}
                    image_url={url.clone()}
                    zoom={p.zoom}
                    feedback={p.feedback.clone()}
                    on_drop={p.on_drop.clone()}
                />
                <PieceTray board={p.board.clone()} image_url={url.clone()} />
            </div>
        },
        None => html! {
            <div class="play-loading" role="status" aria-busy="true">{ t("board.loading") }</div>
        },
    };

    html! {
        <section class="panel play-page" aria-labelledby="play-heading">
            <h2 id="play-heading" class="play-page__title">{ level_name(&p.level) }</h2>
            <GameControls
                zoom={p.zoom}
                progress={p.progress}
                on_zoom_in={p.on_zoom_in.clone()}
                on_zoom_out={p.on_zoom_out.clone()}
                on_reset={p.on_reset.clone()}
                on_exit={p.on_exit.clone()}
            />
            { workspace }
            { p.summary.clone().map(|summary| html! {
                <CompletionDialog
                    {summary}
                    has_next={p.has_next}
                    on_play_again={p.on_play_again.clone()}
                    on_next_level={p.on_next_level.clone()}
                />
            }).unwrap_or_default() }
        </section>
    }
}
