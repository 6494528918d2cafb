use crate::game::Notice;
use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub notice: Notice,
    pub on_dismiss: Callback<()>,
}

#[function_component(NoticeBanner)]
pub fn notice_banner(p: &Props) -> Html {
    let on_dismiss = {
        let cb = p.on_dismiss.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class="notice" role="alert" title={p.notice.detail.clone()}>
            <span class="notice__text">{ t(&p.notice.key) }</span>
            <button type="button" class="btn-icon notice__dismiss" aria-label={t("notice.dismiss")} onclick={on_dismiss}>
                {"×"}
            </button>
        </div>
    }
}
