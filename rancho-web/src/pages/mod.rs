pub mod characters;
pub mod credits;
pub mod inventory;
pub mod loading;
pub mod lore;
pub mod menu;
pub mod sheet;
