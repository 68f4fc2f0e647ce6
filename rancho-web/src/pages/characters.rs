use rancho_core::{Carousel, CharacterId, CharacterRoster};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

use crate::components::back_button::BackButton;
use crate::components::page_dots::PageDots;
use crate::components::ui::character_card::CharacterCard;
use crate::i18n;

#[derive(Properties, Clone, PartialEq)]
pub struct CharactersPageProps {
    pub roster: Rc<CharacterRoster>,
    pub on_select: Callback<CharacterId>,
    pub on_back: Callback<()>,
}

fn counter_text(carousel: Carousel) -> String {
    let current = (carousel.index() + 1).to_string();
    let total = carousel.len().to_string();
    let mut args = BTreeMap::new();
    args.insert("current", current.as_str());
    args.insert("total", total.as_str());
    i18n::tr("characters.counter", Some(&args))
}

#[function_component(CharactersPage)]
pub fn characters_page(props: &CharactersPageProps) -> Html {
    let carousel = use_state(|| Carousel::new(props.roster.len()));

    let header = html! {
        <header class="page-header">
            <BackButton on_back={props.on_back.clone()} />
            <h1>{ i18n::t("characters.title") }</h1>
        </header>
    };

    let Some(character) = props.roster.get(carousel.index()) else {
        return html! {
            <div class="characters-screen" data-testid="characters-screen">
                { header }
                <p class="empty-notice">{ i18n::t("characters.empty") }</p>
            </div>
        };
    };

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.previous()))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.next()))
    };
    let on_dot = {
        let carousel = carousel.clone();
        Callback::from(move |index: usize| carousel.set(carousel.select(index)))
    };

    html! {
        <div class="characters-screen" data-testid="characters-screen">
            { header }
            <p class="carousel-counter" aria-live="polite">{ counter_text(*carousel) }</p>
            <div class="carousel">
                <button class="carousel-nav" aria-label={i18n::t("characters.previous")} onclick={on_prev}>{ "‹" }</button>
                <CharacterCard
                    key={character.id.to_string()}
                    character={Rc::new(character.clone())}
                    on_select={props.on_select.clone()}
                />
                <button class="carousel-nav" aria-label={i18n::t("characters.next")} onclick={on_next}>{ "›" }</button>
            </div>
            <PageDots count={carousel.len()} current={carousel.index()} on_select={on_dot} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_is_one_based() {
        crate::i18n::set_lang("pt");
        let c = Carousel::new(11).previous();
        assert_eq!(counter_text(c), "11 de 11 pistoleiros");
        assert_eq!(counter_text(c.next()), "1 de 11 pistoleiros");
    }
}
