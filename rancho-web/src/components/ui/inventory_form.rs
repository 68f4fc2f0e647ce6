use rancho_core::ItemDraft;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::i18n;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub draft: ItemDraft,
    /// Editing an existing item rather than adding a new one.
    pub editing: bool,
    pub on_name: Callback<String>,
    pub on_description: Callback<String>,
    /// Raw quantity text; parsing happens in the editor.
    pub on_quantity: Callback<String>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

fn input_value(cb: &Callback<String>) -> Callback<InputEvent> {
    let cb = cb.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            cb.emit(input.value());
        }
    })
}

#[function_component(InventoryForm)]
pub fn inventory_form(p: &Props) -> Html {
    let onsubmit = {
        let on_submit = p.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };
    let on_cancel = {
        let cb = p.on_cancel.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_description = {
        let cb = p.on_description.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                cb.emit(area.value());
            }
        })
    };

    let (heading, submit) = if p.editing {
        ("inventory.edit", "inventory.submit_edit")
    } else {
        ("inventory.new", "inventory.submit_add")
    };

    html! {
        <form class="inventory-form" data-testid="inventory-form" {onsubmit}>
            <h3>{ i18n::t(heading) }</h3>
            <label for="item-name">{ i18n::t("inventory.name") }</label>
            <input
                id="item-name"
                type="text"
                value={p.draft.name.clone()}
                placeholder={i18n::t("inventory.name_placeholder")}
                oninput={input_value(&p.on_name)}
            />
            <label for="item-description">{ i18n::t("inventory.description") }</label>
            <textarea
                id="item-description"
                rows="3"
                value={p.draft.description.clone()}
                placeholder={i18n::t("inventory.description_placeholder")}
                oninput={on_description}
            />
            <label for="item-quantity">{ i18n::t("inventory.quantity") }</label>
            <input
                id="item-quantity"
                type="number"
                min="1"
                value={p.draft.quantity.to_string()}
                oninput={input_value(&p.on_quantity)}
            />
            <div class="form-actions">
                <button type="submit" class="btn-primary">{ i18n::t(submit) }</button>
                <button type="button" class="btn-ghost" onclick={on_cancel}>{ i18n::t("inventory.cancel") }</button>
            </div>
        </form>
    }
}
