//! Named Timers
//!
//! One-shot timers keyed by purpose. Arming a timer that is already armed
//! replaces its deadline, so at most one callback per kind is ever pending.

use std::collections::BTreeMap;
use std::time::Duration;

/// Every timer the gate can have pending
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimerKind {
    /// Next lightning strike
    LightningStrike,
    /// End of the current lightning flash
    LightningFlash,
    /// Vehicle waiting off-screen before turning around
    VehiclePause,
    /// No wheel input for the quiet period
    WheelQuiet,
}

/// Set of named one-shot timers on the gate clock
#[derive(Clone, Debug, Default)]
pub struct TimerSet {
    /// Deadline per armed timer, measured on the gate clock
    deadlines: BTreeMap<TimerKind, Duration>,
}

impl TimerSet {
    /// Create an empty timer set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `kind` to fire `after` from `now`, replacing any pending deadline
    pub fn arm(&mut self, kind: TimerKind, after: Duration, now: Duration) {
        self.deadlines.insert(kind, now + after);
    }

    /// Cancel `kind`; returns whether it was armed
    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        self.deadlines.remove(&kind).is_some()
    }

    /// Cancel every pending timer
    pub fn cancel_all(&mut self) {
        self.deadlines.clear();
    }

    /// Whether `kind` is pending
    #[must_use]
    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.deadlines.contains_key(&kind)
    }

    /// Number of pending timers
    #[must_use]
    pub fn armed_count(&self) -> usize {
        self.deadlines.len()
    }

    /// Time left before `kind` fires
    #[must_use]
    pub fn remaining(&self, kind: TimerKind, now: Duration) -> Option<Duration> {
        self.deadlines
            .get(&kind)
            .map(|deadline| deadline.saturating_sub(now))
    }

    /// Remove and return every timer due at `now`, earliest deadline first
    pub fn take_due(&mut self, now: Duration) -> Vec<TimerKind> {
        let mut due: Vec<(Duration, TimerKind)> = self
            .deadlines
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(kind, deadline)| (*deadline, *kind))
            .collect();
        due.sort();

        for (_, kind) in &due {
            self.deadlines.remove(kind);
        }
        due.into_iter().map(|(_, kind)| kind).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_arm_and_fire_in_deadline_order() {
        let mut timers = TimerSet::new();
        timers.arm(TimerKind::WheelQuiet, ms(300), ms(0));
        timers.arm(TimerKind::LightningFlash, ms(150), ms(0));
        timers.arm(TimerKind::VehiclePause, ms(3000), ms(0));

        assert!(timers.take_due(ms(100)).is_empty());
        assert_eq!(
            timers.take_due(ms(400)),
            vec![TimerKind::LightningFlash, TimerKind::WheelQuiet]
        );
        assert_eq!(timers.armed_count(), 1);
        assert_eq!(timers.remaining(TimerKind::VehiclePause, ms(400)), Some(ms(2600)));
    }

    #[test]
    fn test_rearm_replaces_deadline() {
        let mut timers = TimerSet::new();
        timers.arm(TimerKind::WheelQuiet, ms(300), ms(0));
        timers.arm(TimerKind::WheelQuiet, ms(300), ms(250));

        assert!(timers.take_due(ms(400)).is_empty());
        assert_eq!(timers.take_due(ms(550)), vec![TimerKind::WheelQuiet]);
        assert!(!timers.is_armed(TimerKind::WheelQuiet));
    }

    #[test]
    fn test_cancel_and_cancel_all() {
        let mut timers = TimerSet::new();
        timers.arm(TimerKind::LightningStrike, ms(5000), ms(0));
        timers.arm(TimerKind::VehiclePause, ms(3000), ms(0));

        assert!(timers.cancel(TimerKind::LightningStrike));
        assert!(!timers.cancel(TimerKind::LightningStrike));

        timers.cancel_all();
        assert_eq!(timers.armed_count(), 0);
        assert!(timers.take_due(ms(10_000)).is_empty());
    }
}
