use crate::components::ui::level_name;
use crate::game::Level;
use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub levels: Vec<Level>,
    pub on_select: Callback<u32>,
    pub on_upload: Callback<web_sys::File>,
    #[prop_or_default]
    pub uploading: bool,
}

fn pieces_label(grid_size: u32) -> String {
    let size = grid_size.to_string();
    let mut args = BTreeMap::new();
    args.insert("size", size.as_str());
    tr("levels.pieces", Some(&args))
}

fn render_upload_card(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_upload.clone();
        Callback::from(move |e: Event| {
            let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                cb.emit(file);
            }
            // Allow picking the same file twice in a row.
            input.set_value("");
        })
    };
    let class = classes!("level-card", "upload-card", p.uploading.then_some("busy"));
    html! {
        <li class={class} aria-busy={p.uploading.to_string()}>
            <label for="upload-input" class="upload-card__label">
                <span class="upload-card__icon" aria-hidden="true">{"⇪"}</span>
                <span class="level-card__name">{ t("levels.upload_prompt") }</span>
                <span class="level-card__pieces">{ pieces_label(crate::game::constants::CUSTOM_GRID_SIZE) }</span>
            </label>
            <input
                id="upload-input"
                class="sr-only"
                type="file"
                accept="image/*"
                aria-label={t("levels.upload")}
                disabled={p.uploading}
                onchange={on_change}
            />
        </li>
    }
}

fn render_level_card(level: &Level, on_select: &Callback<u32>) -> Html {
    let name = level_name(level);
    let onclick = {
        let cb = on_select.clone();
        let id = level.id;
        Callback::from(move |_| cb.emit(id))
    };
    let class = classes!(
        "level-card",
        level.is_locked.then_some("locked"),
        level.is_completed.then_some("completed")
    );
    html! {
        <li class={class} data-level={level.id.to_string()}>
            <div class="level-card__thumb">
                <img src={crate::paths::asset_path(&level.thumbnail)} alt={name.clone()} loading="lazy" />
                if level.is_completed {
                    <span class="level-card__trophy" role="img" aria-label={t("levels.completed")}>{"🏆"}</span>
                }
                if level.is_locked {
                    <span class="level-card__lock" aria-hidden="true">{"🔒"}</span>
                }
            </div>
            <div class="level-card__meta">
                <span class="level-card__name">{ name }</span>
                <span class={classes!("badge", format!("badge--{}", level.difficulty.i18n_key().trim_start_matches("difficulty.")))}>
                    { t(level.difficulty.i18n_key()) }
                </span>
            </div>
            <span class="level-card__pieces">{ pieces_label(level.grid_size) }</span>
            <button type="button" class="btn-primary" disabled={level.is_locked} {onclick}>
                { if level.is_locked { t("levels.locked") } else { t("levels.play") } }
            </button>
        </li>
    }
}

#[function_component(LevelSelect)]
pub fn level_select(p: &Props) -> Html {
    html! {
        <ul class="level-grid" role="list">
            { render_upload_card(p) }
            { for p.levels.iter().map(|level| render_level_card(level, &p.on_select)) }
        </ul>
    }
}
