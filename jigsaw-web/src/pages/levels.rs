use crate::components::ui::level_select::LevelSelect;
use crate::game::Level;
use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub levels: Vec<Level>,
    pub on_select: Callback<u32>,
    pub on_upload: Callback<web_sys::File>,
    #[prop_or_default]
    pub uploading: bool,
}

#[function_component(LevelsPage)]
pub fn levels_page(p: &Props) -> Html {
    html! {
        <section class="panel levels-page" aria-labelledby="levels-heading">
            <h2 id="levels-heading">{ t("levels.heading") }</h2>
            <LevelSelect
                levels={p.levels.clone()}
                on_select={p.on_select.clone()}
                on_upload={p.on_upload.clone()}
                uploading={p.uploading}
            />
        </section>
    }
}
