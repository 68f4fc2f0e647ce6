use anyhow::{Context, Result};
use rancho_core::{CharacterRoster, CompanionConfig, LoreBook};

const CHARACTERS_JSON: &str =
    include_str!("../../../rancho-web/static/assets/data/characters.json");
const LORE_JSON: &str = include_str!("../../../rancho-web/static/assets/data/lore.json");
const CONFIG_JSON: &str = include_str!("../../../rancho-web/static/assets/data/config.json");

/// Content tables the scenarios exercise, parsed once per run.
#[derive(Debug, Clone)]
pub struct TesterAssets {
    pub roster: CharacterRoster,
    pub lore: LoreBook,
    pub config: CompanionConfig,
}

impl TesterAssets {
    /// Parse the tables shipped with the web app.
    ///
    /// # Errors
    ///
    /// Returns an error if any shipped table fails to parse.
    pub fn load_default() -> Result<Self> {
        Ok(Self {
            roster: CharacterRoster::from_json(CHARACTERS_JSON).context("characters.json")?,
            lore: LoreBook::from_json(LORE_JSON).context("lore.json")?,
            config: CompanionConfig::from_json(CONFIG_JSON).context("config.json")?,
        })
    }
}
