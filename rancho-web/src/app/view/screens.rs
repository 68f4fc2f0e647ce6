use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::components::back_button::BackButton;
use crate::i18n;
use crate::pages::{
    characters::CharactersPage, credits::CreditsPage, inventory::InventoryPage,
    loading::LoadingPage, lore::LorePage, menu::MenuPage, sheet::SheetPage,
};
use rancho_core::{Character, CharacterId, NavEvent, Screen};
use std::rc::Rc;
use yew::prelude::*;

pub fn render_main_view(state: &AppState, handlers: &AppHandlers) -> Html {
    let back = handlers.emit(NavEvent::Back);
    match state.nav.screen() {
        Screen::Loading => html! {
            <LoadingPage rules={state.config.loading} on_complete={handlers.emit(NavEvent::Start)} />
        },
        Screen::Menu => {
            let on_open = {
                let navigate = handlers.navigate.clone();
                Callback::from(move |target| navigate.emit(NavEvent::Open(target)))
            };
            html! {
                <MenuPage
                    {on_open}
                    current_lang={AttrValue::from((*state.current_language).clone())}
                    on_lang_change={handlers.lang_change.clone()}
                />
            }
        }
        Screen::Characters => {
            let on_select = {
                let navigate = handlers.navigate.clone();
                Callback::from(move |id: CharacterId| navigate.emit(NavEvent::Select(id)))
            };
            html! { <CharactersPage roster={(*state.roster).clone()} {on_select} on_back={back} /> }
        }
        Screen::Sheet { character } => match find_character(state, character) {
            Some(c) => html! {
                <SheetPage
                    key={character.to_string()}
                    character={c}
                    rules={state.config.heroic_will}
                    on_back={back}
                    on_inventory={handlers.emit(NavEvent::OpenInventory)}
                />
            },
            None => render_missing(back),
        },
        Screen::Inventory { character } => match find_character(state, character) {
            Some(c) => html! {
                <InventoryPage
                    key={character.to_string()}
                    character={c}
                    toast_ms={state.config.toast_ms}
                    on_back={back}
                />
            },
            None => render_missing(back),
        },
        Screen::Lore => html! { <LorePage book={(*state.lore).clone()} on_back={back} /> },
        Screen::Credits => html! { <CreditsPage on_back={back} /> },
    }
}

fn find_character(state: &AppState, id: &CharacterId) -> Option<Rc<Character>> {
    let found = state.roster.get_by_id(id).cloned().map(Rc::new);
    if found.is_none() {
        log::error!("selected character {id} is not in the roster");
    }
    found
}

fn render_missing(on_back: Callback<()>) -> Html {
    html! {
        <div class="missing-screen">
            <p class="empty-notice">{ i18n::t("sheet.missing") }</p>
            <BackButton {on_back} />
        </div>
    }
}
