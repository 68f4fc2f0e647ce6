//! Centralized rule and timing constants for the companion app.
//!
//! `CompanionConfig::default()` is built from these values, so the embedded
//! `config.json` can only tune what is listed here.

// Heroic Will ---------------------------------------------------------------
pub const HEROIC_WILL_LIFE_BONUS: u32 = 10;
pub const HEROIC_WILL_DEFENSE_BONUS: u32 = 2;

// Life bar bands (percent of max life) ---------------------------------------
pub const LIFE_HEALTHY_ABOVE_PCT: u32 = 50;
pub const LIFE_WOUNDED_ABOVE_PCT: u32 = 25;

// Loading timeline -----------------------------------------------------------
pub const LOADING_TICK_MS: u32 = 50;
pub const LOADING_STEP_PCT: u8 = 2;
pub const LOADING_COMPLETE_DELAY_MS: u32 = 800;
pub const LOADING_TITLE_DELAY_MS: u32 = 500;

// Inventory ------------------------------------------------------------------
pub const DEFAULT_ITEM_QUANTITY: u32 = 1;
pub const TOAST_DURATION_MS: u32 = 3000;

// Storage keys ---------------------------------------------------------------
pub(crate) const NOTES_KEY_PREFIX: &str = "notes-";
pub(crate) const INVENTORY_KEY_PREFIX: &str = "inventory-";
pub(crate) const QUARANTINE_KEY_SUFFIX: &str = ".corrupt";
pub const INVENTORY_FORMAT_VERSION: u32 = 1;
