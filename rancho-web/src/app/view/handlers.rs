use crate::app::state::AppState;
use rancho_core::{NavEvent, Screen};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Clone)]
pub struct AppHandlers {
    pub navigate: Callback<NavEvent>,
    pub lang_change: Callback<String>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            navigate: build_navigate(state),
            lang_change: build_lang_change(state),
        }
    }

    /// `navigate` pre-bound to one event, for `Callback<()>` props.
    #[must_use]
    pub fn emit(&self, event: NavEvent) -> Callback<()> {
        let navigate = self.navigate.clone();
        Callback::from(move |()| navigate.emit(event.clone()))
    }
}

fn screen_title(screen: &Screen) -> String {
    crate::i18n::t(&format!("screens.{}", screen.label()))
}

fn build_navigate(state: &AppState) -> Callback<NavEvent> {
    let nav = state.nav.clone();
    Callback::from(move |event: NavEvent| {
        let mut next = (*nav).clone();
        if !next.dispatch(&event) {
            return;
        }
        log::info!("screen -> {}", next.screen().label());
        let title = screen_title(next.screen());
        let mut args = BTreeMap::new();
        args.insert("target", title.as_str());
        crate::a11y::set_status(&crate::i18n::tr("menu.opened", Some(&args)));
        nav.set(next);
    })
}

fn build_lang_change(state: &AppState) -> Callback<String> {
    let current_language = state.current_language.clone();
    Callback::from(move |code: String| {
        crate::i18n::set_lang(&code);
        current_language.set(crate::i18n::current_lang());
    })
}
