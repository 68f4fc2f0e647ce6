use rancho_core::{LifeBand, SheetState};
use yew::prelude::*;

use crate::i18n;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub state: SheetState,
    pub on_decrease: Callback<()>,
    pub on_increase: Callback<()>,
}

const fn band_class(band: LifeBand) -> &'static str {
    match band {
        LifeBand::Healthy => "life-healthy",
        LifeBand::Wounded => "life-wounded",
        LifeBand::Critical => "life-critical",
    }
}

/// Life bar with step buttons plus the defense value.
#[function_component(VitalsPanel)]
pub fn vitals_panel(p: &Props) -> Html {
    let s = p.state;
    let on_decrease = {
        let cb = p.on_decrease.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_increase = {
        let cb = p.on_increase.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let pct = s.life_pct();

    html! {
        <section class={classes!("vitals", s.heroic_will_active().then_some("vitals-heroic"))}>
            <h3>{ i18n::t("sheet.life_defense") }</h3>
            <div class="life-row">
                <span class="stat-label">{ i18n::t("sheet.life") }</span>
                <button
                    class="btn-step"
                    data-testid="life-decrease"
                    aria-label={i18n::t("sheet.decrease")}
                    disabled={!s.can_decrease()}
                    onclick={on_decrease}
                >{ "−" }</button>
                <span class="life-value" data-testid="life-value">
                    { format!("{}/{}", s.current_life(), s.max_life()) }
                </span>
                <button
                    class="btn-step"
                    data-testid="life-increase"
                    aria-label={i18n::t("sheet.increase")}
                    disabled={!s.can_increase()}
                    onclick={on_increase}
                >{ "+" }</button>
            </div>
            <div
                class="life-bar"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax={s.max_life().to_string()}
                aria-valuenow={s.current_life().to_string()}
            >
                <div class={classes!("life-fill", band_class(s.life_band()))} style={format!("width:{pct}%")} />
            </div>
            <div class="defense-row">
                <span class="stat-label">{ i18n::t("sheet.defense") }</span>
                <span class="defense-value" data-testid="defense-value">{ s.defense() }</span>
            </div>
        </section>
    }
}
