//! Tunable rules and timings
use serde::{Deserialize, Serialize};

use crate::constants::{
    HEROIC_WILL_DEFENSE_BONUS, HEROIC_WILL_LIFE_BONUS, LOADING_COMPLETE_DELAY_MS,
    LOADING_STEP_PCT, LOADING_TICK_MS, LOADING_TITLE_DELAY_MS, TOAST_DURATION_MS,
};

/// Bonuses granted while Heroic Will is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroicWillRules {
    pub life_bonus: u32,
    pub defense_bonus: u32,
}

impl Default for HeroicWillRules {
    fn default() -> Self {
        Self {
            life_bonus: HEROIC_WILL_LIFE_BONUS,
            defense_bonus: HEROIC_WILL_DEFENSE_BONUS,
        }
    }
}

/// Timing of the cosmetic loading screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingRules {
    pub tick_ms: u32,
    pub step_pct: u8,
    pub complete_delay_ms: u32,
    pub title_delay_ms: u32,
}

impl Default for LoadingRules {
    fn default() -> Self {
        Self {
            tick_ms: LOADING_TICK_MS,
            step_pct: LOADING_STEP_PCT,
            complete_delay_ms: LOADING_COMPLETE_DELAY_MS,
            title_delay_ms: LOADING_TITLE_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanionConfig {
    pub heroic_will: HeroicWillRules,
    pub loading: LoadingRules,
    pub toast_ms: u32,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            heroic_will: HeroicWillRules::default(),
            loading: LoadingRules::default(),
            toast_ms: TOAST_DURATION_MS,
        }
    }
}

impl CompanionConfig {
    /// Get default configuration
    #[must_use]
    pub fn default_config() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON string. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is not a valid configuration object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut cfg: Self = serde_json::from_str(json)?;
        if cfg.loading.step_pct == 0 {
            log::warn!("loading.step_pct of 0 would never finish; using default");
            cfg.loading.step_pct = LOADING_STEP_PCT;
        }
        if cfg.loading.tick_ms == 0 {
            log::warn!("loading.tick_ms of 0 is not schedulable; using default");
            cfg.loading.tick_ms = LOADING_TICK_MS;
        }
        Ok(cfg)
    }
}
