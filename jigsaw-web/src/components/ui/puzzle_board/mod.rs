use crate::app::view::DropRequest;
use crate::game::{Board, DropFeedback, Piece, Zoom};
use crate::i18n::tr;
use std::collections::BTreeMap;
use yew::prelude::*;

/// MIME type carried by piece drags.
pub const DRAG_MIME: &str = "text/plain";

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub board: Board,
    pub image_url: AttrValue,
    pub zoom: Zoom,
    #[prop_or_default]
    pub feedback: Option<DropFeedback>,
    pub on_drop: Callback<DropRequest>,
}

/// Inline style that crops `piece` out of the full image.
#[must_use]
pub fn piece_style(piece: &Piece, board: &Board, image_url: &str) -> String {
    format!(
        "width:{pw}px;height:{ph}px;background-image:url('{image_url}');background-size:{bw}px {bh}px;background-position:-{x}px -{y}px;",
        pw = board.piece_width,
        ph = board.piece_height,
        bw = board.piece_width * board.size,
        bh = board.piece_height * board.size,
        x = piece.origin_x,
        y = piece.origin_y,
    )
}

fn grid_style(board: &Board, zoom: Zoom) -> String {
    format!(
        "grid-template-columns:repeat({n}, minmax(0, 1fr));width:{w}px;transform:scale({s});transform-origin:top center;",
        n = board.size,
        w = board.piece_width * board.size,
        s = zoom.scale(),
    )
}

fn cell_label(row: u32, col: u32) -> String {
    let (row, col) = ((row + 1).to_string(), (col + 1).to_string());
    let mut args = BTreeMap::new();
    args.insert("row", row.as_str());
    args.insert("col", col.as_str());
    tr("board.cell_label", Some(&args))
}

#[function_component(PuzzleBoard)]
pub fn puzzle_board(p: &Props) -> Html {
    let board = &p.board;
    let on_dragover = Callback::from(|e: DragEvent| e.prevent_default());

    let cells = board.cells.iter().map(|cell| {
        let (row, col) = (cell.row, cell.col);
        let ondrop = {
            let cb = p.on_drop.clone();
            Callback::from(move |e: DragEvent| {
                e.prevent_default();
                if let Some(piece_id) = e
                    .data_transfer()
                    .and_then(|dt| dt.get_data(DRAG_MIME).ok())
                    .filter(|id| !id.is_empty())
                {
                    cb.emit((piece_id, row, col));
                }
            })
        };
        let missed = p
            .feedback
            .as_ref()
            .filter(|f| f.row == row && f.col == col);
        let class = classes!(
            "board-cell",
            cell.is_occupied.then_some("occupied"),
            missed.map(|_| "miss")
        );
        let content = cell
            .current_piece_id
            .as_deref()
            .and_then(|id| board.piece(id))
            .map(|piece| html! {
                <div class="board-piece" style={piece_style(piece, board, &p.image_url)}></div>
            })
            .unwrap_or_default();
        html! {
            <div
                key={format!("{}-{}", cell.id, missed.map_or(0, |f| f.serial))}
                id={cell.id.clone()}
                class={class}
                role="gridcell"
                aria-label={cell_label(row, col)}
                style={format!("width:{}px;height:{}px;", board.piece_width, board.piece_height)}
                ondragover={on_dragover.clone()}
                ondrop={ondrop}
            >
                { content }
            </div>
        }
    });

    html! {
        <div class="board-viewport">
            <div class="puzzle-board" role="grid" style={grid_style(board, p.zoom)}>
                { for cells }
            </div>
        </div>
    }
}
