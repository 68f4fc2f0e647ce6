use rancho_core::{LoreBook, Pager};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

use crate::components::back_button::BackButton;
use crate::components::page_dots::PageDots;
use crate::components::ui::lore_body::LoreBody;
use crate::i18n;

#[derive(Properties, Clone, PartialEq)]
pub struct LorePageProps {
    pub book: Rc<LoreBook>,
    pub on_back: Callback<()>,
}

#[function_component(LorePage)]
pub fn lore_page(props: &LorePageProps) -> Html {
    let pager = use_state(|| Pager::new(props.book.len()));

    let Some(page) = props.book.page(pager.page()) else {
        return html! {
            <div class="lore-screen" data-testid="lore-screen">
                <header class="page-header">
                    <BackButton on_back={props.on_back.clone()} />
                    <h1>{ i18n::t("lore.title") }</h1>
                </header>
                <p class="empty-notice">{ i18n::t("lore.empty") }</p>
            </div>
        };
    };

    let on_prev = {
        let pager = pager.clone();
        Callback::from(move |_: MouseEvent| pager.set(pager.previous()))
    };
    let on_next = {
        let pager = pager.clone();
        Callback::from(move |_: MouseEvent| pager.set(pager.next()))
    };
    let on_dot = {
        let pager = pager.clone();
        Callback::from(move |index: usize| pager.set(pager.select(index)))
    };

    let current = (pager.page() + 1).to_string();
    let total = pager.len().to_string();
    let mut args = BTreeMap::new();
    args.insert("current", current.as_str());
    args.insert("total", total.as_str());

    html! {
        <div class="lore-screen" data-testid="lore-screen">
            <header class="page-header">
                <BackButton on_back={props.on_back.clone()} />
                <h1>{ i18n::t("lore.title") }</h1>
                <p class="page-counter">{ i18n::tr("lore.page", Some(&args)) }</p>
            </header>
            <article class="lore-page" key={page.id.to_string()}>
                <h2>{ page.title.clone() }</h2>
                <LoreBody paragraphs={page.paragraphs()} />
            </article>
            <nav class="lore-nav">
                <button class="btn-ghost" disabled={pager.is_first()} onclick={on_prev}>
                    { "‹ " }{ i18n::t("common.previous") }
                </button>
                <PageDots count={pager.len()} current={pager.page()} on_select={on_dot} />
                <button class="btn-ghost" disabled={pager.is_last()} onclick={on_next}>
                    { i18n::t("common.next") }{ " ›" }
                </button>
            </nav>
        </div>
    }
}
