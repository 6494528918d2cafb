use crate::components::modal::Modal;
use crate::game::{LevelSummary, constants::CUSTOM_LEVEL_ID};
use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub summary: LevelSummary,
    /// Offer the next level instead of the way back to the list.
    pub has_next: bool,
    pub on_play_again: Callback<()>,
    pub on_next_level: Callback<()>,
}

fn title(summary: &LevelSummary) -> String {
    if summary.level_id == CUSTOM_LEVEL_ID {
        return t("completion.custom_title");
    }
    let level = summary.level_id.to_string();
    let mut args = BTreeMap::new();
    args.insert("level", level.as_str());
    tr("completion.title", Some(&args))
}

fn line(key: &str, name: &str, value: &str) -> String {
    let mut args = BTreeMap::new();
    args.insert(name, value);
    tr(key, Some(&args))
}

#[function_component(CompletionDialog)]
pub fn completion_dialog(p: &Props) -> Html {
    let summary = &p.summary;
    let play_again = {
        let cb = p.on_play_again.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let next = {
        let cb = p.on_next_level.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let stars = (1..=3_u8).map(|n| {
        let class = classes!("star", (n <= summary.stars).then_some("earned"));
        html! { <span class={class} aria-hidden="true">{"★"}</span> }
    });
    let stars_label = line("completion.stars", "count", &summary.stars.to_string());

    html! {
        <Modal
            open={true}
            title={AttrValue::from(title(summary))}
            description={Some(AttrValue::from(t("completion.description")))}
            on_close={p.on_next_level.clone()}
        >
            <div class="completion">
                <div class="completion__trophy" aria-hidden="true">{"🏆"}</div>
                <div class="completion__stars" role="img" aria-label={stars_label}>{ for stars }</div>
                <ul class="completion__stats" role="list">
                    <li>{ line("completion.time", "time", &summary.elapsed_label()) }</li>
                    <li>{ line("completion.moves", "moves", &summary.moves.to_string()) }</li>
                    <li>{ line("completion.misses", "count", &summary.misses.to_string()) }</li>
                </ul>
                <div class="completion__actions">
                    <button type="button" class="btn-secondary" onclick={play_again}>
                        { t("completion.play_again") }
                    </button>
                    <button type="button" class="btn-primary" onclick={next}>
                        { if p.has_next { t("completion.next_level") } else { t("completion.back_to_levels") } }
                    </button>
                </div>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(summary: LevelSummary, has_next: bool) -> String {
        block_on(
            LocalServerRenderer::<CompletionDialog>::with_props(Props {
                summary,
                has_next,
                on_play_again: Callback::noop(),
                on_next_level: Callback::noop(),
            })
            .render(),
        )
    }

    #[test]
    fn shows_level_time_and_stars() {
        crate::i18n::set_lang("en");
        let html = render(LevelSummary::new(4, 4, 18, 2, 165_000), true);
        assert!(html.contains("Level 4 Complete!"), "{html}");
        assert!(html.contains("Time: 2:45"), "{html}");
        assert!(html.contains("Moves: 18"), "{html}");
        assert!(html.contains("2 misses"), "{html}");
        assert!(html.contains("2 of 3 stars"), "{html}");
        assert_eq!(html.matches("star earned").count(), 2, "{html}");
        assert!(html.contains("Play again"), "{html}");
        assert!(html.contains("Next level"), "{html}");
    }

    #[test]
    fn clean_custom_run_reads_back_to_levels() {
        crate::i18n::set_lang("en");
        let html = render(LevelSummary::new(CUSTOM_LEVEL_ID, 3, 9, 0, 4_000), false);
        assert!(html.contains("Custom puzzle complete!"), "{html}");
        assert!(html.contains("No misses"), "{html}");
        assert!(html.contains("Back to levels"), "{html}");
    }
}
