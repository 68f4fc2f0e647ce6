use rancho_core::{CharacterRoster, CompanionConfig, LoreBook, NavigationController};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub nav: UseStateHandle<NavigationController>,
    pub roster: UseStateHandle<Rc<CharacterRoster>>,
    pub lore: UseStateHandle<Rc<LoreBook>>,
    pub config: UseStateHandle<CompanionConfig>,
    pub current_language: UseStateHandle<String>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        nav: use_state(NavigationController::new),
        roster: use_state(|| Rc::new(crate::content::roster().clone())),
        lore: use_state(|| Rc::new(crate::content::lore().clone())),
        config: use_state(crate::content::config),
        current_language: use_state(crate::i18n::current_lang),
    }
}
