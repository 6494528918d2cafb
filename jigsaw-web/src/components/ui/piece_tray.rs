use crate::components::ui::puzzle_board::{DRAG_MIME, piece_style};
use crate::game::Board;
use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub board: Board,
    pub image_url: AttrValue,
}

/// Unplaced pieces in their shuffled tray order.
#[function_component(PieceTray)]
pub fn piece_tray(p: &Props) -> Html {
    let tray = p.board.tray();
    let pieces = tray.iter().map(|piece| {
        let ondragstart = {
            let id = piece.id.clone();
            Callback::from(move |e: DragEvent| {
                if let Some(dt) = e.data_transfer() {
                    let _ = dt.set_data(DRAG_MIME, &id);
                    dt.set_effect_allowed("move");
                }
            })
        };
        html! {
            <li key={piece.id.clone()} class="tray-slot">
                <div
                    id={piece.id.clone()}
                    class="tray-piece"
                    draggable="true"
                    role="img"
                    aria-label={t("board.piece_label")}
                    style={piece_style(piece, &p.board, &p.image_url)}
                    {ondragstart}
                ></div>
            </li>
        }
    });

    html! {
        <aside class="piece-tray" aria-labelledby="tray-title">
            <h2 id="tray-title" class="piece-tray__title">{ t("board.tray_title") }</h2>
            if tray.is_empty() {
                <p class="piece-tray__empty">{ t("board.tray_empty") }</p>
            } else {
                <ul class="piece-tray__list" role="list">{ for pieces }</ul>
            }
        </aside>
    }
}
