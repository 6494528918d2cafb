use crate::components::modal::Modal;
use crate::game::{TutorialState, TutorialStep};
use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub tutorial: TutorialState,
    pub on_next: Callback<()>,
    pub on_close: Callback<()>,
}

fn step_counter(step: TutorialStep) -> String {
    let current = (step.index() + 1).to_string();
    let total = TutorialStep::ALL.len().to_string();
    let mut args = BTreeMap::new();
    args.insert("current", current.as_str());
    args.insert("total", total.as_str());
    tr("tutorial.step", Some(&args))
}

#[function_component(TutorialDialog)]
pub fn tutorial_dialog(p: &Props) -> Html {
    let step = p.tutorial.step;
    let on_next = {
        let cb = p.on_next.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let dots = TutorialStep::ALL.iter().map(|s| {
        let class = classes!("tutorial__dot", (*s == step).then_some("active"));
        html! { <span class={class} aria-hidden="true"></span> }
    });

    html! {
        <Modal
            open={p.tutorial.visible}
            title={AttrValue::from(t("tutorial.title"))}
            description={Some(AttrValue::from(t("tutorial.description")))}
            on_close={p.on_close.clone()}
            return_focus_id={Some(AttrValue::from("help-open-btn"))}
        >
            <div class="tutorial">
                <p class="sr-only">{ step_counter(step) }</p>
                <h3 class="tutorial__title">{ t(step.title_key()) }</h3>
                <p class="tutorial__body">{ t(step.body_key()) }</p>
                <div class="tutorial__dots">{ for dots }</div>
                <button type="button" class="btn-primary" onclick={on_next}>
                    { if step.is_last() { t("tutorial.start") } else { t("tutorial.next") } }
                </button>
            </div>
        </Modal>
    }
}
