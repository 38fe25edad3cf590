//! Tokio-backed countdown timers.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::core::{Scheduler, TimerId};

/// Runs each repeating tick as a spawned task that sends its [`TimerId`]
/// into a channel; cancelling aborts the task.
///
/// A tick already sitting in the channel when its timer is cancelled is still
/// delivered, and the game discards it by id.
#[derive(Debug)]
pub struct TokioScheduler {
    tick_tx: mpsc::UnboundedSender<TimerId>,
    tasks: HashMap<TimerId, JoinHandle<()>>,
}

impl TokioScheduler {
    pub fn new(tick_tx: mpsc::UnboundedSender<TimerId>) -> Self {
        Self {
            tick_tx,
            tasks: HashMap::new(),
        }
    }

    /// Scheduler plus the receiving end of its tick channel
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<TimerId>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    pub fn active_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_repeating(&mut self, id: TimerId, period: Duration) {
        let tx = self.tick_tx.clone();
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(id).is_err() {
                    break;
                }
            }
        });

        if let Some(previous) = self.tasks.insert(id, handle) {
            previous.abort();
        }
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(handle) = self.tasks.remove(&id) {
            handle.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}
