use rancho_core::{LoadingRules, LoadingTimeline};
use yew::prelude::*;

use crate::components::dust::DustField;
use crate::hooks::use_interval;
use crate::i18n;

const DUST_MOTES: usize = 20;

#[derive(Properties, Clone, PartialEq)]
pub struct LoadingPageProps {
    pub rules: LoadingRules,
    /// Fired once, when the timeline reports it has finished.
    pub on_complete: Callback<()>,
}

#[function_component(LoadingPage)]
pub fn loading_page(props: &LoadingPageProps) -> Html {
    let elapsed = use_state(|| 0_u64);
    let frame = LoadingTimeline::new(props.rules).frame_at(*elapsed);

    {
        let elapsed = elapsed.clone();
        let tick = u64::from(props.rules.tick_ms);
        let finished = frame.finished;
        let on_tick = Callback::from(move |()| {
            if !finished {
                elapsed.set(*elapsed + tick);
            }
        });
        use_interval(on_tick, props.rules.tick_ms);
    }

    {
        let on_complete = props.on_complete.clone();
        use_effect_with(frame.finished, move |&done| {
            if done {
                log::debug!("loading finished");
                on_complete.emit(());
            }
            || {}
        });
    }

    let status = if frame.is_full() {
        i18n::t("loading.ready")
    } else {
        i18n::t("loading.loading")
    };

    html! {
        <div class="loading-screen" data-testid="loading-screen" aria-busy={(!frame.is_full()).to_string()}>
            <DustField count={DUST_MOTES} />
            <div class={classes!("loading-title", frame.title_visible.then_some("visible"))}>
                <h1>
                    <span class="title-top">{ i18n::t("app.title_top") }</span>
                    <span class="title-bottom">{ i18n::t("app.title_bottom") }</span>
                </h1>
                <p class="subtitle">{ i18n::t("app.subtitle") }</p>
            </div>
            <div
                class="loading-bar"
                role="progressbar"
                aria-label={i18n::t("loading.progress")}
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow={frame.progress.to_string()}
            >
                <div class="loading-fill" style={format!("width:{}%", frame.progress)} />
            </div>
            <p class="loading-status" aria-live="polite">{ status }</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn first_frame_is_empty_and_loading() {
        crate::i18n::set_lang("pt");
        let props = LoadingPageProps {
            rules: LoadingRules::default(),
            on_complete: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<LoadingPage>::with_props(props).render());
        assert!(html.contains("aria-valuenow=\"0\""));
        assert!(html.contains("Carregando..."));
        assert!(!html.contains("loading-title visible"));
        assert_eq!(html.matches("dust-mote").count(), DUST_MOTES);
    }
}
