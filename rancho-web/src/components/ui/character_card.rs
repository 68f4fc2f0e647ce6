use rancho_core::{Character, CharacterId};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

use crate::i18n;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub character: Rc<Character>,
    pub on_select: Callback<CharacterId>,
}

/// Carousel card summarizing one gunslinger.
#[function_component(CharacterCard)]
pub fn character_card(p: &Props) -> Html {
    let c = &p.character;
    let onclick = {
        let on_select = p.on_select.clone();
        let id = c.id.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
    };

    let first_name = c.first_name().to_uppercase();
    let mut select_args = BTreeMap::new();
    select_args.insert("name", first_name.as_str());
    let select_label = i18n::tr("characters.select", Some(&select_args));

    html! {
        <article class="character-card" data-character={c.id.to_string()}>
            <header class="card-header">
                <span class="card-emoji" aria-hidden="true">{ c.emoji.clone() }</span>
                <h2 class="card-name">{ c.name.clone() }</h2>
                <p class="card-title">{ c.title.clone() }</p>
            </header>

            <div class="card-vitals">
                <div class="stat">
                    <span class="stat-label">{ i18n::t("characters.life") }</span>
                    <span class="stat-value">{ c.life }</span>
                </div>
                <div class="stat">
                    <span class="stat-label">{ i18n::t("characters.defense") }</span>
                    <span class="stat-value">{ c.defense }</span>
                </div>
            </div>

            <section class="card-section">
                <h3>{ i18n::t("characters.attributes") }</h3>
                <dl class="attribute-grid">
                    { for c.attributes.iter().map(|a| html! {
                        <div class="attribute">
                            <dt>{ a.name.clone() }</dt>
                            <dd>{ a.signed_value() }</dd>
                        </div>
                    }) }
                </dl>
            </section>

            <section class="card-section">
                <h3>{ i18n::t("characters.abilities") }</h3>
                <ul class="ability-list">
                    { for c.abilities.iter().map(|a| html! {
                        <li><strong>{ a.name.clone() }</strong>{ ": " }{ a.description.clone() }</li>
                    }) }
                </ul>
            </section>

            <section class="card-section">
                <h3>{ i18n::t("characters.weapons") }</h3>
                <ul class="weapon-list">
                    { for c.weapons.iter().map(|w| {
                        let mut args = BTreeMap::new();
                        args.insert("kind", w.kind.as_str());
                        args.insert("damage", w.damage.as_str());
                        html! {
                            <li>
                                <span class="weapon-name">{ w.name.clone() }</span>
                                <span class="weapon-meta">{ i18n::tr("characters.weapon_line", Some(&args)) }</span>
                            </li>
                        }
                    }) }
                </ul>
            </section>

            <button class="btn-primary select-btn" data-testid="select-character" {onclick}>
                { select_label }
            </button>
        </article>
    }
}
