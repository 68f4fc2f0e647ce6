use rancho_core::MenuTarget;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::dust::DustField;
use crate::i18n;

#[derive(Properties, Clone, PartialEq)]
pub struct MenuPageProps {
    pub on_open: Callback<MenuTarget>,
    pub current_lang: AttrValue,
    pub on_lang_change: Callback<String>,
}

const MENU_ENTRIES: [(MenuTarget, &str, &str); 3] = [
    (MenuTarget::Characters, "menu.characters", "🤠"),
    (MenuTarget::Lore, "menu.lore", "📜"),
    (MenuTarget::Credits, "menu.credits", "⭐"),
];

fn open_callback(on_open: &Callback<MenuTarget>, target: MenuTarget) -> Callback<MouseEvent> {
    let on_open = on_open.clone();
    Callback::from(move |_: MouseEvent| on_open.emit(target))
}

#[function_component(MenuPage)]
pub fn menu_page(props: &MenuPageProps) -> Html {
    let on_lang = {
        let cb = props.on_lang_change.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e.target_dyn_into::<HtmlSelectElement>() {
                cb.emit(sel.value());
            }
        })
    };

    html! {
        <div class="menu-screen" data-testid="menu-screen">
            <DustField count={12} />
            <header class="menu-title">
                <h1>
                    <span class="title-top">{ i18n::t("app.title_top") }</span>
                    <span class="title-bottom">{ i18n::t("app.title_bottom") }</span>
                </h1>
                <p class="subtitle">{ i18n::t("app.subtitle") }</p>
            </header>

            <nav class="menu-actions">
                { for MENU_ENTRIES.iter().map(|&(target, key, icon)| html! {
                    <button
                        class="btn-western"
                        data-testid={format!("menu-{}", target.label())}
                        onclick={open_callback(&props.on_open, target)}
                    >
                        <span aria-hidden="true">{ icon }</span>
                        { " " }
                        { i18n::t(key) }
                    </button>
                }) }
            </nav>

            <label class="lang-picker">
                <span>{ i18n::t("menu.language") }</span>
                <select onchange={on_lang}>
                    { for i18n::locales().iter().map(|loc| html! {
                        <option value={loc.code} selected={props.current_lang.as_str() == loc.code}>
                            { loc.name }
                        </option>
                    }) }
                </select>
            </label>

            <footer class="menu-quote">
                <p>{ i18n::t("menu.quote") }</p>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn menu_offers_three_destinations_and_languages() {
        crate::i18n::set_lang("pt");
        let props = MenuPageProps {
            on_open: Callback::noop(),
            current_lang: AttrValue::from("pt"),
            on_lang_change: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<MenuPage>::with_props(props).render());
        assert!(html.contains("SELEÇÃO DE PERSONAGENS"));
        assert!(html.contains("data-testid=\"menu-lore\""));
        assert!(html.contains("data-testid=\"menu-credits\""));
        assert!(html.contains("English"));
    }
}
