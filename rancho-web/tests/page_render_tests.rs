use futures::executor::block_on;
use rancho_core::{CharacterId, CharacterRoster, HeroicWillRules, LoreBook, LorePage};
use rancho_web::content;
use rancho_web::pages::{
    characters::{CharactersPage, CharactersPageProps},
    credits::{CreditsPage, CreditsPageProps},
    inventory::{InventoryPage, InventoryPageProps},
    lore::{LorePage as LoreScreen, LorePageProps},
    sheet::{SheetPage, SheetPageProps},
};
use rancho_web::storage::companion_store;
use std::rc::Rc;
use yew::{Callback, LocalServerRenderer};

fn portuguese() {
    rancho_web::i18n::set_lang("pt");
}

fn character(id: &str) -> Rc<rancho_core::Character> {
    let found = content::roster()
        .get_by_id(&CharacterId::from(id))
        .cloned()
        .expect("shipped character");
    Rc::new(found)
}

#[test]
fn characters_page_starts_at_the_first_gunslinger() {
    portuguese();
    let roster = Rc::new(content::roster().clone());
    let first = roster.get(0).expect("roster not empty").name.clone();
    let props = CharactersPageProps {
        roster,
        on_select: Callback::noop(),
        on_back: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CharactersPage>::with_props(props).render());
    assert!(html.contains("1 de 11 pistoleiros"));
    assert!(html.contains(&first));
    assert_eq!(html.matches("data-index=").count(), 11);
}

#[test]
fn characters_page_handles_an_empty_roster() {
    portuguese();
    let props = CharactersPageProps {
        roster: Rc::new(CharacterRoster::empty()),
        on_select: Callback::noop(),
        on_back: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CharactersPage>::with_props(props).render());
    assert!(html.contains("Nenhum pistoleiro apareceu no horizonte."));
    assert!(!html.contains("select-character"));
}

#[test]
fn sheet_page_shows_base_form_and_saved_notes() {
    portuguese();
    let rosa = character("rosa");
    companion_store()
        .save_notes(&rosa.id, "Deve 3 dólares ao xerife")
        .expect("memory fallback accepts writes");
    let props = SheetPageProps {
        character: rosa.clone(),
        rules: HeroicWillRules::default(),
        on_back: Callback::noop(),
        on_inventory: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<SheetPage>::with_props(props).render());
    assert!(html.contains(&rosa.name));
    assert!(html.contains(&format!("{0}/{0}", rosa.life)));
    assert!(html.contains("HABILIDADES"));
    assert!(!html.contains("PODERES HEROICOS"));
    assert!(!html.contains("heroic-bonuses"));
    assert!(html.contains("Trocar Personagem"));
    assert!(html.contains("Deve 3 dólares ao xerife"));
}

#[test]
fn inventory_page_lists_stored_items() {
    portuguese();
    let eli = character("eli");
    let mut editor = rancho_core::InventoryEditor::new(rancho_core::Inventory::empty());
    editor.open_add();
    editor.set_name("Corda");
    editor.set_description("Dez metros de cânhamo");
    editor.set_quantity(3);
    editor.submit().expect("valid draft");
    companion_store()
        .save_inventory(&eli.id, editor.items())
        .expect("memory fallback accepts writes");

    let props = InventoryPageProps {
        character: eli,
        toast_ms: 3000,
        on_back: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<InventoryPage>::with_props(props).render());
    assert!(html.contains("Corda"));
    assert!(html.contains("x3"));
    assert!(html.contains("Dez metros de cânhamo"));
    assert!(html.contains("1 item"));
    assert!(!html.contains("inventory-empty"));
}

#[test]
fn inventory_page_shows_empty_state() {
    portuguese();
    let props = InventoryPageProps {
        character: character("doc"),
        toast_ms: 3000,
        on_back: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<InventoryPage>::with_props(props).render());
    assert!(html.contains("inventory-empty"));
    assert!(html.contains("Adicionar Item"));
    assert!(html.contains("0 itens"));
}

#[test]
fn lore_page_renders_first_page_with_disabled_previous() {
    portuguese();
    let book = Rc::new(content::lore().clone());
    let title = book.page(0).expect("first page").title.clone();
    let props = LorePageProps {
        book,
        on_back: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LoreScreen>::with_props(props).render());
    assert!(html.contains(&title));
    assert!(html.contains("Página 1 de 5"));
    assert_eq!(html.matches("disabled").count(), 1);
}

#[test]
fn lore_page_single_page_disables_both_buttons() {
    portuguese();
    let book = LoreBook::new(vec![LorePage {
        id: 1,
        title: "Prólogo".into(),
        content: "Uma linha só.".into(),
    }]);
    let props = LorePageProps {
        book: Rc::new(book),
        on_back: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LoreScreen>::with_props(props).render());
    assert!(html.contains("Página 1 de 1"));
    assert_eq!(html.matches("disabled").count(), 2);
}

#[test]
fn credits_page_names_the_author() {
    portuguese();
    let props = CreditsPageProps {
        on_back: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CreditsPage>::with_props(props).render());
    assert!(html.contains("ALX"));
    assert!(html.contains("CRÉDITOS"));
}
