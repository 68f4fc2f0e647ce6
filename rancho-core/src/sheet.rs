//! Character sheet life and Heroic Will rules
use serde::{Deserialize, Serialize};

use crate::characters::Character;
use crate::config::HeroicWillRules;
use crate::constants::{LIFE_HEALTHY_ABOVE_PCT, LIFE_WOUNDED_ABOVE_PCT};

/// Color band of the life bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeBand {
    Healthy,
    Wounded,
    Critical,
}

/// Per-session sheet state; `current_life` always stays in `0..=max_life()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetState {
    base_life: u32,
    base_defense: u32,
    current_life: u32,
    heroic_will: bool,
    rules: HeroicWillRules,
}

impl SheetState {
    #[must_use]
    pub fn new(character: &Character, rules: HeroicWillRules) -> Self {
        Self {
            base_life: character.life,
            base_defense: character.defense,
            current_life: character.life,
            heroic_will: false,
            rules,
        }
    }

    #[must_use]
    pub const fn base_life(&self) -> u32 {
        self.base_life
    }

    #[must_use]
    pub const fn current_life(&self) -> u32 {
        self.current_life
    }

    #[must_use]
    pub const fn heroic_will_active(&self) -> bool {
        self.heroic_will
    }

    #[must_use]
    pub const fn max_life(&self) -> u32 {
        if self.heroic_will {
            self.base_life.saturating_add(self.rules.life_bonus)
        } else {
            self.base_life
        }
    }

    #[must_use]
    pub const fn defense(&self) -> u32 {
        if self.heroic_will {
            self.base_defense.saturating_add(self.rules.defense_bonus)
        } else {
            self.base_defense
        }
    }

    #[must_use]
    pub const fn can_increase(&self) -> bool {
        self.current_life < self.max_life()
    }

    #[must_use]
    pub const fn can_decrease(&self) -> bool {
        self.current_life > 0
    }

    pub fn decrease_life(&mut self) {
        self.current_life = self.current_life.saturating_sub(1);
    }

    pub fn increase_life(&mut self) {
        self.current_life = self.current_life.saturating_add(1).min(self.max_life());
    }

    /// Flip Heroic Will. Activating adds the life bonus (capped at the new
    /// max); deactivating clamps back to base life and discards the excess.
    pub fn toggle_heroic_will(&mut self) {
        if self.heroic_will {
            self.heroic_will = false;
            self.current_life = self.current_life.min(self.max_life());
        } else {
            self.heroic_will = true;
            self.current_life = self
                .current_life
                .saturating_add(self.rules.life_bonus)
                .min(self.max_life());
        }
    }

    /// Current life as a whole percentage of max life.
    #[must_use]
    pub fn life_pct(&self) -> u32 {
        let max = self.max_life();
        if max == 0 {
            return 0;
        }
        let pct = u64::from(self.current_life) * 100 / u64::from(max);
        u32::try_from(pct).unwrap_or(100)
    }

    #[must_use]
    pub fn life_band(&self) -> LifeBand {
        let max = u64::from(self.max_life());
        let scaled = u64::from(self.current_life) * 100;
        if scaled > max * u64::from(LIFE_HEALTHY_ABOVE_PCT) {
            LifeBand::Healthy
        } else if scaled > max * u64::from(LIFE_WOUNDED_ABOVE_PCT) {
            LifeBand::Wounded
        } else {
            LifeBand::Critical
        }
    }
}
