//! Timer seam between the game and whatever drives time.
//!
//! The game never sleeps or spawns anything itself. It asks a [`Scheduler`]
//! to start or cancel a repeating tick identified by a [`TimerId`], and the
//! driver reports each tick back through `Game::on_timer`. Ticks carrying an
//! id other than the game's active timer are ignored, so a cancelled timer
//! whose tick is already in flight cannot advance a newer round.

use std::collections::BTreeMap;
use std::time::Duration;

/// Identity of one scheduled repeating tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Starts and cancels repeating ticks.
///
/// `cancel` must be idempotent: cancelling an id that is unknown or already
/// cancelled does nothing.
pub trait Scheduler {
    fn schedule_repeating(&mut self, id: TimerId, period: Duration);
    fn cancel(&mut self, id: TimerId);
}

impl<S: Scheduler + ?Sized> Scheduler for Box<S> {
    fn schedule_repeating(&mut self, id: TimerId, period: Duration) {
        (**self).schedule_repeating(id, period);
    }

    fn cancel(&mut self, id: TimerId) {
        (**self).cancel(id);
    }
}

#[derive(Debug, Clone, Copy)]
struct ManualTimer {
    period: Duration,
    elapsed: Duration,
}

/// Deterministic scheduler driven by explicit [`ManualScheduler::advance`] calls.
///
/// Used by tests, benches, and synchronous drivers.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    timers: BTreeMap<TimerId, ManualTimer>,
    scheduled: u64,
    cancelled: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward and return the ids that fired, in firing order.
    ///
    /// A timer whose period elapses several times within `elapsed` appears
    /// once per period.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<TimerId> {
        let mut fired = Vec::new();
        for (&id, timer) in self.timers.iter_mut() {
            if timer.period.is_zero() {
                continue;
            }
            timer.elapsed += elapsed;
            while timer.elapsed >= timer.period {
                timer.elapsed -= timer.period;
                fired.push(id);
            }
        }
        fired
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id)
    }

    pub fn active_timers(&self) -> Vec<TimerId> {
        self.timers.keys().copied().collect()
    }

    pub fn active_count(&self) -> usize {
        self.timers.len()
    }

    /// Total `schedule_repeating` calls seen
    pub fn scheduled_count(&self) -> u64 {
        self.scheduled
    }

    /// Cancellations that actually stopped a running timer
    pub fn cancelled_count(&self) -> u64 {
        self.cancelled
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_repeating(&mut self, id: TimerId, period: Duration) {
        self.scheduled += 1;
        self.timers.insert(
            id,
            ManualTimer {
                period,
                elapsed: Duration::ZERO,
            },
        );
    }

    fn cancel(&mut self, id: TimerId) {
        if self.timers.remove(&id).is_some() {
            self.cancelled += 1;
        }
    }
}
