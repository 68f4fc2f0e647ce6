use rancho_core::{
    Character, Inventory, InventoryEditor, InventoryError, InventoryItem, InventoryNotice, ItemId,
};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

use crate::components::back_button::BackButton;
use crate::components::toast::Toast;
use crate::components::ui::inventory_form::InventoryForm;
use crate::i18n;
use crate::storage::companion_store;

#[derive(Properties, Clone, PartialEq)]
pub struct InventoryPageProps {
    pub character: Rc<Character>,
    pub toast_ms: u32,
    pub on_back: Callback<()>,
}

/// Toast content plus a generation counter used as its key.
#[derive(Clone, PartialEq)]
struct ToastMessage {
    generation: u32,
    title: String,
    description: String,
    destructive: bool,
}

fn named(key: &str, name: &str) -> String {
    let mut args = BTreeMap::new();
    args.insert("name", name);
    i18n::tr(key, Some(&args))
}

fn notice_text(notice: &InventoryNotice) -> (String, String) {
    let (title, body) = match notice {
        InventoryNotice::Added(_) => ("inventory.added_title", "inventory.added"),
        InventoryNotice::Updated(_) => ("inventory.updated_title", "inventory.updated"),
        InventoryNotice::Removed(_) => ("inventory.removed_title", "inventory.removed"),
    };
    (i18n::t(title), named(body, notice.item_name()))
}

fn error_text(err: &InventoryError) -> (String, String) {
    match err {
        InventoryError::NameRequired => (
            i18n::t("inventory.name_required_title"),
            i18n::t("inventory.name_required"),
        ),
        InventoryError::UnknownItem(_) => (i18n::t("inventory.title"), err.to_string()),
    }
}

fn load_items(character: &Character) -> Inventory {
    companion_store()
        .load_inventory_or_quarantine(&character.id)
        .unwrap_or_else(|err| {
            log::warn!("could not read inventory for {}: {err}", character.id);
            Inventory::empty()
        })
}

fn persist(character: &Character, items: &Inventory) {
    if let Err(err) = companion_store().save_inventory(&character.id, items) {
        log::warn!("could not save inventory for {}: {err}", character.id);
    }
}

/// Handles shared by every editor callback.
#[derive(Clone)]
struct EditorCtx {
    editor: UseStateHandle<InventoryEditor>,
    character: Rc<Character>,
    show_toast: Callback<(String, String, bool)>,
}

impl EditorCtx {
    /// Run one editor step on a copy, persist if it produced a notice, and
    /// surface the outcome as a toast.
    fn apply(
        &self,
        step: impl FnOnce(&mut InventoryEditor) -> Option<Result<InventoryNotice, InventoryError>>,
    ) {
        let mut next = (*self.editor).clone();
        match step(&mut next) {
            Some(Ok(notice)) => {
                persist(&self.character, next.items());
                let (title, body) = notice_text(&notice);
                self.show_toast.emit((title, body, false));
            }
            Some(Err(err)) => {
                let (title, body) = error_text(&err);
                self.show_toast.emit((title, body, true));
            }
            None => {}
        }
        self.editor.set(next);
    }
}

#[function_component(InventoryPage)]
pub fn inventory_page(props: &InventoryPageProps) -> Html {
    let character = props.character.clone();
    let editor = {
        let character = character.clone();
        use_state(move || InventoryEditor::new(load_items(&character)))
    };
    let toast = use_state(|| None::<ToastMessage>);

    let show_toast = {
        let toast = toast.clone();
        Callback::from(move |(title, description, destructive): (String, String, bool)| {
            let generation = (*toast).as_ref().map_or(0, |t| t.generation.wrapping_add(1));
            crate::a11y::set_status(&description);
            toast.set(Some(ToastMessage {
                generation,
                title,
                description,
                destructive,
            }));
        })
    };

    let ctx = EditorCtx {
        editor: editor.clone(),
        character: character.clone(),
        show_toast,
    };

    let on_open_add = {
        let ctx = ctx.clone();
        Callback::from(move |_: MouseEvent| {
            ctx.apply(|ed| {
                ed.open_add();
                None
            });
        })
    };
    let on_name = {
        let ctx = ctx.clone();
        Callback::from(move |value: String| {
            ctx.apply(|ed| {
                ed.set_name(value);
                None
            });
        })
    };
    let on_description = {
        let ctx = ctx.clone();
        Callback::from(move |value: String| {
            ctx.apply(|ed| {
                ed.set_description(value);
                None
            });
        })
    };
    let on_quantity = {
        let ctx = ctx.clone();
        Callback::from(move |value: String| {
            ctx.apply(|ed| {
                ed.set_quantity_input(&value);
                None
            });
        })
    };
    let on_submit = {
        let ctx = ctx.clone();
        Callback::from(move |()| ctx.apply(|ed| Some(ed.submit())))
    };
    let on_cancel = {
        let ctx = ctx.clone();
        Callback::from(move |()| {
            ctx.apply(|ed| {
                ed.cancel();
                None
            });
        })
    };
    let on_edit = {
        let ctx = ctx.clone();
        Callback::from(move |id: ItemId| ctx.apply(|ed| ed.start_edit(&id).err().map(Err)))
    };
    let on_delete = {
        let ctx = ctx;
        Callback::from(move |id: ItemId| ctx.apply(|ed| Some(ed.delete(&id))))
    };
    let on_dismiss = {
        let toast = toast.clone();
        Callback::from(move |()| toast.set(None))
    };

    let items = editor.items();

    html! {
        <div class="inventory-screen" data-testid="inventory-screen">
            <header class="page-header">
                <BackButton on_back={props.on_back.clone()} />
                <h1>{ "🎒 " }{ i18n::t("inventory.title") }</h1>
                <p class="sheet-title">{ character.name.clone() }</p>
            </header>

            if editor.is_form_open() {
                <InventoryForm
                    draft={editor.draft().clone()}
                    editing={editor.editing().is_some()}
                    {on_name}
                    {on_description}
                    {on_quantity}
                    {on_submit}
                    {on_cancel}
                />
            } else {
                <button class="btn-primary" data-testid="add-item" onclick={on_open_add}>
                    { "+ " }{ i18n::t("inventory.add") }
                </button>
            }

            <p class="inventory-count">{ i18n::tr_count("inventory.count", items.len()) }</p>

            if items.is_empty() {
                <p class="empty-notice" data-testid="inventory-empty">{ i18n::t("inventory.empty") }</p>
            } else {
                <ul class="inventory-list">
                    { for items.iter().map(|item| render_item(item, &on_edit, &on_delete)) }
                </ul>
            }

            if let Some(msg) = (*toast).clone() {
                <Toast
                    key={msg.generation.to_string()}
                    title={msg.title}
                    description={msg.description}
                    destructive={msg.destructive}
                    duration_ms={props.toast_ms}
                    on_dismiss={on_dismiss}
                />
            }
        </div>
    }
}

fn render_item(item: &InventoryItem, on_edit: &Callback<ItemId>, on_delete: &Callback<ItemId>) -> Html {
    let edit = {
        let cb = on_edit.clone();
        let id = item.id.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
    };
    let delete = {
        let cb = on_delete.clone();
        let id = item.id.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
    };
    html! {
        <li class="inventory-item" key={item.id.to_string()} data-item={item.id.to_string()}>
            <div class="item-main">
                <span class="item-name">{ item.name.clone() }</span>
                <span class="item-qty">{ format!("x{}", item.quantity) }</span>
            </div>
            if item.has_description() {
                <p class="item-description">{ item.description.clone() }</p>
            }
            <div class="item-actions">
                <button class="btn-icon" aria-label={named("inventory.edit_item", &item.name)} onclick={edit}>{ "✏️" }</button>
                <button class="btn-icon btn-danger" aria-label={named("inventory.delete_item", &item.name)} onclick={delete}>{ "🗑️" }</button>
            </div>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_name_the_item() {
        crate::i18n::set_lang("pt");
        let (title, body) = notice_text(&InventoryNotice::Added("Corda".into()));
        assert_eq!(title, "Item adicionado");
        assert_eq!(body, "Corda foi adicionado ao inventário.");
        let (title, _) = error_text(&InventoryError::NameRequired);
        assert_eq!(title, "Nome obrigatório");
    }
}
