use yew::prelude::*;

use crate::components::back_button::BackButton;
use crate::components::dust::DustField;
use crate::i18n;

#[derive(Properties, Clone, PartialEq)]
pub struct CreditsPageProps {
    pub on_back: Callback<()>,
}

#[function_component(CreditsPage)]
pub fn credits_page(props: &CreditsPageProps) -> Html {
    html! {
        <div class="credits-screen" data-testid="credits-screen">
            <DustField count={12} />
            <header class="page-header">
                <BackButton on_back={props.on_back.clone()} />
                <h1>{ i18n::t("credits.title") }</h1>
            </header>
            <section class="credits-card">
                <p class="credits-label">{ i18n::t("credits.created_by") }</p>
                <p class="credits-author">{ i18n::t("credits.author") }</p>
                <p class="credits-made">
                    { i18n::t("credits.made_with") }
                    <span class="heart" aria-hidden="true">{ " ♥ " }</span>
                    { i18n::t("credits.for_players") }
                </p>
                <hr />
                <p class="credits-tagline">{ i18n::t("credits.tagline") }</p>
                <p class="credits-system">{ i18n::t("credits.system") }</p>
            </section>
            <footer class="menu-quote">
                <p>{ i18n::t("credits.quote") }</p>
            </footer>
        </div>
    }
}
