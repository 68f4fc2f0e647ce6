use rancho_core::{Attribute, Character, HeroicWillRules, SheetState};
use std::collections::BTreeMap;
use std::rc::Rc;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::components::back_button::BackButton;
use crate::components::ui::vitals_panel::VitalsPanel;
use crate::i18n;
use crate::storage::companion_store;

#[derive(Properties, Clone, PartialEq)]
pub struct SheetPageProps {
    pub character: Rc<Character>,
    pub rules: HeroicWillRules,
    pub on_back: Callback<()>,
    pub on_inventory: Callback<()>,
}

fn attribute_tone(attr: &Attribute) -> &'static str {
    match attr.value.signum() {
        1 => "attr-positive",
        -1 => "attr-negative",
        _ => "attr-neutral",
    }
}

fn load_notes(character: &Character) -> String {
    companion_store()
        .load_notes(&character.id)
        .unwrap_or_else(|err| {
            log::warn!("could not read notes for {}: {err}", character.id);
            String::new()
        })
}

#[function_component(SheetPage)]
pub fn sheet_page(props: &SheetPageProps) -> Html {
    let character = props.character.clone();
    let sheet = {
        let character = character.clone();
        let rules = props.rules;
        use_state(move || SheetState::new(&character, rules))
    };
    let notes = {
        let character = character.clone();
        use_state(move || load_notes(&character))
    };

    let on_decrease = {
        let sheet = sheet.clone();
        Callback::from(move |()| {
            let mut next = *sheet;
            next.decrease_life();
            sheet.set(next);
        })
    };
    let on_increase = {
        let sheet = sheet.clone();
        Callback::from(move |()| {
            let mut next = *sheet;
            next.increase_life();
            sheet.set(next);
        })
    };
    let on_toggle = {
        let sheet = sheet.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *sheet;
            next.toggle_heroic_will();
            sheet.set(next);
        })
    };
    let on_inventory = {
        let cb = props.on_inventory.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_notes = {
        let notes = notes.clone();
        let id = character.id.clone();
        Callback::from(move |e: InputEvent| {
            let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() else {
                return;
            };
            let text = area.value();
            if let Err(err) = companion_store().save_notes(&id, &text) {
                log::warn!("could not save notes for {id}: {err}");
            }
            notes.set(text);
        })
    };

    let heroic = sheet.heroic_will_active();
    let (toggle_key, abilities_key) = if heroic {
        ("sheet.heroic_off", "sheet.heroic_abilities")
    } else {
        ("sheet.heroic_on", "sheet.abilities")
    };

    html! {
        <div class={classes!("sheet-screen", heroic.then_some("heroic"))} data-testid="sheet-screen">
            <header class="page-header sheet-header">
                <BackButton label={AttrValue::from(i18n::t("sheet.change"))} on_back={props.on_back.clone()} />
                <span class="sheet-emoji" aria-hidden="true">{ character.emoji.clone() }</span>
                <h1>{ character.name.clone() }</h1>
                <p class="sheet-title">
                    { if heroic { character.heroic_will.name.clone() } else { character.title.clone() } }
                </p>
            </header>

            <div class="sheet-actions">
                <button
                    class={classes!("btn-heroic", heroic.then_some("active"))}
                    aria-pressed={heroic.to_string()}
                    data-testid="heroic-toggle"
                    onclick={on_toggle}
                >
                    { "⚡ " }{ i18n::t(toggle_key) }
                </button>
                <button class="btn-western" data-testid="open-inventory" onclick={on_inventory}>
                    { "🎒 " }{ i18n::t("sheet.inventory") }
                </button>
            </div>

            if heroic {
                <section class="bonus-panel" data-testid="heroic-bonuses">
                    <h3>{ i18n::t("sheet.bonuses") }</h3>
                    <ul>
                        { for character.heroic_will.effects.iter().map(|effect| html! { <li>{ effect.clone() }</li> }) }
                    </ul>
                </section>
            }

            <VitalsPanel state={*sheet} {on_decrease} {on_increase} />

            <section class="sheet-section">
                <h3>{ i18n::t("sheet.attributes") }</h3>
                <dl class="attribute-grid">
                    { for character.attributes.iter().map(|a| html! {
                        <div class={classes!("attribute", attribute_tone(a))}>
                            <dt>{ a.name.clone() }</dt>
                            <dd>{ a.signed_value() }</dd>
                        </div>
                    }) }
                </dl>
            </section>

            <section class="sheet-section">
                <h3>{ i18n::t(abilities_key) }</h3>
                <ul class="ability-list">
                    { for character.abilities_for(heroic).iter().map(|a| html! {
                        <li>
                            <strong>{ a.name.clone() }</strong>
                            <p>{ a.description.clone() }</p>
                        </li>
                    }) }
                </ul>
            </section>

            <section class="sheet-section">
                <h3>{ i18n::t("sheet.weapons") }</h3>
                <ul class="weapon-list">
                    { for character.weapons.iter().map(|w| {
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

            <section class="sheet-section">
                <label for="sheet-notes"><h3>{ i18n::t("sheet.notes") }</h3></label>
                <textarea
                    id="sheet-notes"
                    rows="5"
                    value={(*notes).clone()}
                    placeholder={i18n::t("sheet.notes_placeholder")}
                    oninput={on_notes}
                />
            </section>

            <section class="sheet-section">
                <h3>{ i18n::t("sheet.story") }</h3>
                <p class="story">{ character.story.clone() }</p>
            </section>
        </div>
    }
}
