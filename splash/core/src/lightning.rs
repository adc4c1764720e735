//! Lightning Scheduler
//!
//! Stormy scenes get a strike after a random delay; each strike shows a
//! short flash and immediately books the next one. Both steps are timers on
//! the gate's [`TimerSet`], so cancelling the set stops the chain cold.

use std::ops::Range;
use std::time::Duration;

use rand::Rng;

use crate::animation::{TimerKind, TimerSet};

/// Range the delay before a strike is drawn from (milliseconds)
pub const STRIKE_DELAY_MS: Range<u64> = 3_000..8_000;
/// How long the flash stays on screen
pub const FLASH_DURATION: Duration = Duration::from_millis(150);

/// Books strikes and flashes on the gate's timers
#[derive(Clone, Debug, Default)]
pub struct LightningScheduler {
    enabled: bool,
    visible: bool,
    strikes: u64,
    last_delay: Option<Duration>,
}

impl LightningScheduler {
    /// A scheduler that does nothing until [`Self::enable`]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the strike chain
    pub fn enable<R: Rng + ?Sized>(&mut self, timers: &mut TimerSet, now: Duration, rng: &mut R) {
        self.enabled = true;
        self.schedule_next(timers, now, rng);
    }

    /// Stop the chain, hide any flash and drop pending timers
    pub fn disable(&mut self, timers: &mut TimerSet) {
        self.enabled = false;
        self.visible = false;
        timers.cancel(TimerKind::LightningStrike);
        timers.cancel(TimerKind::LightningFlash);
    }

    /// Handle a fired [`TimerKind::LightningStrike`]
    pub fn strike<R: Rng + ?Sized>(&mut self, timers: &mut TimerSet, now: Duration, rng: &mut R) {
        if !self.enabled {
            return;
        }
        self.visible = true;
        self.strikes += 1;
        timers.arm(TimerKind::LightningFlash, FLASH_DURATION, now);
        self.schedule_next(timers, now, rng);
        tracing::debug!(strikes = self.strikes, "Lightning strike");
    }

    /// Handle a fired [`TimerKind::LightningFlash`]
    pub fn end_flash(&mut self) {
        self.visible = false;
    }

    /// Whether the flash overlay should be drawn
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the chain is running
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Strikes so far
    #[must_use]
    pub fn strikes(&self) -> u64 {
        self.strikes
    }

    /// Most recently drawn strike delay
    #[must_use]
    pub fn last_delay(&self) -> Option<Duration> {
        self.last_delay
    }

    fn schedule_next<R: Rng + ?Sized>(&mut self, timers: &mut TimerSet, now: Duration, rng: &mut R) {
        let delay = Duration::from_millis(rng.gen_range(STRIKE_DELAY_MS));
        self.last_delay = Some(delay);
        timers.arm(TimerKind::LightningStrike, delay, now);
    }
}
