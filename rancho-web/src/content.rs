//! Content tables embedded at build time.
use once_cell::sync::Lazy;
use rancho_core::{CharacterRoster, CompanionConfig, LoreBook};

const CHARACTERS_JSON: &str = include_str!("../static/assets/data/characters.json");
const LORE_JSON: &str = include_str!("../static/assets/data/lore.json");
const CONFIG_JSON: &str = include_str!("../static/assets/data/config.json");

static ROSTER: Lazy<CharacterRoster> = Lazy::new(|| {
    CharacterRoster::from_json(CHARACTERS_JSON).unwrap_or_else(|err| {
        log::error!("failed to load characters: {err}");
        CharacterRoster::empty()
    })
});

static LORE: Lazy<LoreBook> = Lazy::new(|| {
    LoreBook::from_json(LORE_JSON).unwrap_or_else(|err| {
        log::error!("failed to load lore: {err}");
        LoreBook::empty()
    })
});

static CONFIG: Lazy<CompanionConfig> = Lazy::new(|| {
    CompanionConfig::from_json(CONFIG_JSON).unwrap_or_else(|err| {
        log::error!("failed to load config, using defaults: {err}");
        CompanionConfig::default_config()
    })
});

#[must_use]
pub fn roster() -> &'static CharacterRoster {
    &ROSTER
}

#[must_use]
pub fn lore() -> &'static LoreBook {
    &LORE
}

#[must_use]
pub fn config() -> CompanionConfig {
    *CONFIG
}
