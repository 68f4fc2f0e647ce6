pub mod character_card;
pub mod inventory_form;
pub mod lore_body;
pub mod vitals_panel;
