use crate::game::Zoom;
use crate::i18n::{fmt_pct, t, tr};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub zoom: Zoom,
    pub progress: f64,
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_exit: Callback<()>,
}

fn emit(cb: &Callback<()>) -> Callback<MouseEvent> {
    let cb = cb.clone();
    Callback::from(move |_| cb.emit(()))
}

#[function_component(GameControls)]
pub fn game_controls(p: &Props) -> Html {
    let zoom_pct = p.zoom.percent().to_string();
    let progress_pct = fmt_pct(p.progress);
    let zoom_label = {
        let mut args = BTreeMap::new();
        args.insert("pct", zoom_pct.as_str());
        tr("controls.zoom_level", Some(&args))
    };
    let progress_label = {
        let mut args = BTreeMap::new();
        args.insert("pct", progress_pct.as_str());
        tr("controls.progress", Some(&args))
    };

    html! {
        <div class="game-controls" role="toolbar" aria-label={t("app.title")}>
            <div class="game-controls__zoom">
                <button type="button" class="btn-icon" aria-label={t("controls.zoom_out")}
                    disabled={!p.zoom.can_zoom_out()} onclick={emit(&p.on_zoom_out)}>{"−"}</button>
                <span class="game-controls__zoom-level" aria-live="polite">{ zoom_label }</span>
                <button type="button" class="btn-icon" aria-label={t("controls.zoom_in")}
                    disabled={!p.zoom.can_zoom_in()} onclick={emit(&p.on_zoom_in)}>{"+"}</button>
                <button type="button" class="btn-secondary" onclick={emit(&p.on_reset)}>
                    { t("controls.reset") }
                </button>
            </div>
            <div class="game-controls__progress">
                <progress max="100" value={progress_pct.clone()} aria-label={progress_label.clone()}></progress>
                <span>{ progress_label }</span>
            </div>
            <button type="button" class="btn-secondary" onclick={emit(&p.on_exit)}>
                { t("controls.exit") }
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(zoom: Zoom, progress: f64) -> String {
        block_on(
            LocalServerRenderer::<GameControls>::with_props(Props {
                zoom,
                progress,
                on_zoom_in: Callback::noop(),
                on_zoom_out: Callback::noop(),
                on_reset: Callback::noop(),
                on_exit: Callback::noop(),
            })
            .render(),
        )
    }

    #[test]
    fn shows_zoom_and_progress() {
        crate::i18n::set_lang("en");
        let html = render(Zoom::new(120), 100.0 / 9.0);
        assert!(html.contains("Zoom 120%"), "{html}");
        assert!(html.contains("11% complete"), "{html}");
        assert!(html.contains("Reset puzzle"), "{html}");
        assert!(html.contains("Exit puzzle"), "{html}");
        assert!(!html.contains("disabled"), "{html}");
    }

    #[test]
    fn zoom_buttons_disable_at_bounds() {
        crate::i18n::set_lang("en");
        assert_eq!(render(Zoom::new(200), 0.0).matches("disabled").count(), 1);
        assert_eq!(render(Zoom::new(50), 0.0).matches("disabled").count(), 1);
    }
}
