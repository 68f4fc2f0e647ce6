//! O Último Rancho companion core
//!
//! Platform-agnostic rules for the companion app: content tables, the
//! character sheet, the inventory editor, screen navigation and persistence.
//! This crate has no UI or browser dependencies.

pub mod characters;
pub mod config;
pub mod constants;
pub mod inventory;
pub mod loading;
pub mod lore;
pub mod markup;
pub mod navigation;
pub mod paging;
pub mod sheet;
pub mod storage;

use thiserror::Error;

// Re-export commonly used types
pub use characters::{
    Ability, Attribute, Character, CharacterId, CharacterRoster, HeroicWill, Weapon,
};
pub use config::{CompanionConfig, HeroicWillRules, LoadingRules};
pub use inventory::{
    FormMode, Inventory, InventoryEditor, InventoryError, InventoryItem, InventoryNotice,
    ItemDraft, ItemId, parse_quantity,
};
pub use loading::{LoadingFrame, LoadingTimeline};
pub use lore::{LoreBook, LorePage};
pub use markup::{Paragraph, Span, parse_body};
pub use navigation::{MenuTarget, NavEvent, NavigationController, Screen};
pub use paging::{Carousel, Pager};
pub use sheet::{LifeBand, SheetState};
pub use storage::{CompanionStore, KeyValueStore, MemoryStore, StorageError};

/// Errors raised while loading the embedded content tables.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),
    #[error("character id {0} appears more than once")]
    DuplicateCharacter(CharacterId),
    #[error("character at position {index} has an empty id")]
    EmptyId { index: usize },
}
