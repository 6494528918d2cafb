use crate::i18n::t;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="app-footer">{ t("footer.copyright") }</footer>
    }
}
