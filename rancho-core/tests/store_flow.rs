use rancho_core::{
    CharacterId, CompanionStore, InventoryEditor, InventoryError, InventoryNotice, KeyValueStore,
    MemoryStore, NavigationController, MenuTarget, Screen,
};

fn open_editor(store: &CompanionStore<MemoryStore>, id: &CharacterId) -> InventoryEditor {
    InventoryEditor::new(store.load_inventory_or_quarantine(id).unwrap())
}

#[test]
fn notes_survive_a_sheet_reload_without_touching_others() {
    let store = CompanionStore::new(MemoryStore::new());
    let a = CharacterId::from("vander");
    let b = CharacterId::from("rosa");
    store.save_notes(&b, "Cuidado com o xerife").unwrap();

    let mut nav = NavigationController::new();
    nav.start();
    nav.navigate(MenuTarget::Characters);
    nav.select_character(a.clone());
    let selected = nav.selected_character().unwrap().clone();
    store.save_notes(&selected, "A mina fica ao norte").unwrap();

    nav.back();
    assert_eq!(nav.screen(), &Screen::Characters);
    nav.select_character(a.clone());
    assert_eq!(store.load_notes(&a).unwrap(), "A mina fica ao norte");
    assert_eq!(store.load_notes(&b).unwrap(), "Cuidado com o xerife");
}

#[test]
fn inventory_editor_persists_every_mutation() {
    let store = CompanionStore::new(MemoryStore::new());
    let id = CharacterId::from("bess");

    let mut editor = open_editor(&store, &id);
    editor.open_add();
    editor.set_name("Rope");
    editor.set_quantity_input("3");
    assert_eq!(editor.submit(), Ok(InventoryNotice::Added(String::from("Rope"))));
    store.save_inventory(&id, editor.items()).unwrap();

    let mut editor = open_editor(&store, &id);
    let item_id = editor.items().items()[0].id.clone();
    editor.start_edit(&item_id).unwrap();
    editor.set_quantity(5);
    editor.submit().unwrap();
    store.save_inventory(&id, editor.items()).unwrap();

    let mut editor = open_editor(&store, &id);
    assert_eq!(editor.items().len(), 1);
    assert_eq!(editor.items().items()[0].id, item_id);
    assert_eq!(editor.items().items()[0].quantity, 5);

    editor.open_add();
    assert_eq!(editor.submit(), Err(InventoryError::NameRequired));
    assert_eq!(editor.items().len(), 1);

    editor.delete(&item_id).unwrap();
    store.save_inventory(&id, editor.items()).unwrap();
    assert!(open_editor(&store, &id).items().is_empty());
}

#[test]
fn legacy_inventory_is_rewritten_in_the_envelope_format() {
    let backend = MemoryStore::new();
    backend
        .put(
            "inventory-eli",
            r#"[{"id":"1712345678901","name":"Carta lacrada","description":"","quantity":1}]"#,
        )
        .unwrap();
    let store = CompanionStore::new(backend.clone());
    let id = CharacterId::from("eli");

    let items = store.load_inventory(&id).unwrap();
    assert_eq!(items.items()[0].name, "Carta lacrada");
    store.save_inventory(&id, &items).unwrap();
    let raw = backend.raw("inventory-eli").unwrap();
    assert!(raw.starts_with(r#"{"version":1,"items":["#), "{raw}");
}
