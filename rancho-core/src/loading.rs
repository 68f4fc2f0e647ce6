//! Cosmetic loading screen timeline.
//!
//! The loading bar is a pure function of elapsed time so the web layer only
//! has to count ticks. Progress advances one step per tick; completion is
//! noticed on the tick *after* the bar reaches 100, and the menu opens a
//! fixed delay later.
use serde::{Deserialize, Serialize};

use crate::config::LoadingRules;

pub const FULL_PROGRESS: u8 = 100;

/// What the loading screen shows at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadingFrame {
    pub progress: u8,
    pub title_visible: bool,
    pub finished: bool,
}

impl LoadingFrame {
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.progress >= FULL_PROGRESS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingTimeline {
    rules: LoadingRules,
}

impl LoadingTimeline {
    #[must_use]
    pub const fn new(rules: LoadingRules) -> Self {
        Self { rules }
    }

    #[must_use]
    pub const fn rules(&self) -> &LoadingRules {
        &self.rules
    }

    /// Ticks needed for the bar to reach 100.
    #[must_use]
    pub fn ticks_to_full(&self) -> u32 {
        let step = u32::from(self.rules.step_pct.max(1));
        u32::from(FULL_PROGRESS).div_ceil(step)
    }

    /// Elapsed time at which the screen hands over to the menu.
    #[must_use]
    pub fn finish_at_ms(&self) -> u64 {
        let observed_tick = u64::from(self.ticks_to_full()) + 1;
        observed_tick * u64::from(self.rules.tick_ms.max(1))
            + u64::from(self.rules.complete_delay_ms)
    }

    #[must_use]
    pub fn frame_at(&self, elapsed_ms: u64) -> LoadingFrame {
        let ticks = elapsed_ms / u64::from(self.rules.tick_ms.max(1));
        let raw = ticks.saturating_mul(u64::from(self.rules.step_pct));
        let progress = u8::try_from(raw.min(u64::from(FULL_PROGRESS))).unwrap_or(FULL_PROGRESS);
        LoadingFrame {
            progress,
            title_visible: elapsed_ms >= u64::from(self.rules.title_delay_ms),
            finished: elapsed_ms >= self.finish_at_ms(),
        }
    }
}

impl Default for LoadingTimeline {
    fn default() -> Self {
        Self::new(LoadingRules::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeline_matches_classic_timing() {
        let t = LoadingTimeline::default();
        assert_eq!(t.ticks_to_full(), 50);
        assert_eq!(t.finish_at_ms(), 51 * 50 + 800);

        let start = t.frame_at(0);
        assert_eq!(start.progress, 0);
        assert!(!start.title_visible);
        assert!(!start.finished);

        assert_eq!(t.frame_at(49).progress, 0);
        assert_eq!(t.frame_at(50).progress, 2);
        assert!(!t.frame_at(499).title_visible);
        assert!(t.frame_at(500).title_visible);
    }

    #[test]
    fn full_bar_waits_before_finishing() {
        let t = LoadingTimeline::default();
        let full = t.frame_at(2500);
        assert!(full.is_full());
        assert!(!full.finished);
        assert!(!t.frame_at(3349).finished);
        assert!(t.frame_at(3350).finished);
        assert_eq!(t.frame_at(60_000).progress, FULL_PROGRESS);
    }

    #[test]
    fn progress_is_monotonic_and_capped() {
        let t = LoadingTimeline::new(LoadingRules {
            step_pct: 3,
            ..LoadingRules::default()
        });
        assert_eq!(t.ticks_to_full(), 34);
        let mut last = 0;
        for ms in (0..4000).step_by(10) {
            let frame = t.frame_at(ms);
            assert!(frame.progress >= last);
            assert!(frame.progress <= FULL_PROGRESS);
            last = frame.progress;
        }
        assert_eq!(last, FULL_PROGRESS);
    }
}
