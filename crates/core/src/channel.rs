//! Publish/subscribe channel for game state snapshots.
//!
//! Each [`Game`](crate::Game) owns its own channel, so listeners never leak
//! between game instances. Delivery is synchronous: `publish` returns after
//! every listener has seen the snapshot, and each listener sees snapshots in
//! publish order. A listener registered with
//! [`StateChannel::subscribe_while`] is dropped the first time it returns
//! false.

use crate::GameSnapshot;

/// Callback registered on a [`StateChannel`]; returning false unsubscribes it.
pub type Listener = Box<dyn FnMut(&GameSnapshot) -> bool + Send>;

/// Handle returned by [`StateChannel::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub struct StateChannel {
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
    published: u64,
}

impl StateChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, mut listener: F) -> SubscriptionId
    where
        F: FnMut(&GameSnapshot) + Send + 'static,
    {
        self.subscribe_while(move |snapshot| {
            listener(snapshot);
            true
        })
    }

    /// Register a listener that stays subscribed while it returns true.
    pub fn subscribe_while<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&GameSnapshot) -> bool + Send + 'static,
    {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.listeners.push((id, Box::new(listener)));
        tracing::debug!(subscription = id.0, "subscribed to game state");
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        before != self.listeners.len()
    }

    pub fn publish(&mut self, snapshot: &GameSnapshot) {
        self.published += 1;
        self.listeners.retain_mut(|(id, listener)| {
            let keep = listener(snapshot);
            if !keep {
                tracing::debug!(subscription = id.0, "listener dropped");
            }
            keep
        });
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Number of snapshots published so far
    pub fn published(&self) -> u64 {
        self.published
    }
}

impl std::fmt::Debug for StateChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateChannel")
            .field("listeners", &self.listeners.len())
            .field("published", &self.published)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn snapshot(game_id: u32) -> GameSnapshot {
        GameSnapshot {
            game_id,
            ..Default::default()
        }
    }

    #[test]
    fn test_every_listener_sees_every_snapshot_in_order() {
        let mut channel = StateChannel::new();
        let seen_a = Arc::new(Mutex::new(Vec::new()));
        let seen_b = Arc::new(Mutex::new(Vec::new()));

        let a = seen_a.clone();
        channel.subscribe(move |s| a.lock().unwrap().push(s.game_id));
        let b = seen_b.clone();
        channel.subscribe(move |s| b.lock().unwrap().push(s.game_id));

        for id in 1..=3 {
            channel.publish(&snapshot(id));
        }

        assert_eq!(*seen_a.lock().unwrap(), vec![1, 2, 3]);
        assert_eq!(*seen_b.lock().unwrap(), vec![1, 2, 3]);
        assert_eq!(channel.published(), 3);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut channel = StateChannel::new();
        let seen = Arc::new(Mutex::new(0u32));

        let s = seen.clone();
        let id = channel.subscribe(move |_| *s.lock().unwrap() += 1);
        channel.publish(&snapshot(1));

        assert!(channel.unsubscribe(id));
        assert!(!channel.unsubscribe(id));
        channel.publish(&snapshot(2));

        assert_eq!(*seen.lock().unwrap(), 1);
        assert_eq!(channel.listener_count(), 0);
    }

    #[test]
    fn test_listener_returning_false_is_removed() {
        let mut channel = StateChannel::new();
        let calls = Arc::new(Mutex::new(0u32));

        let c = calls.clone();
        channel.subscribe_while(move |_| {
            let mut calls = c.lock().unwrap();
            *calls += 1;
            *calls < 2
        });
        channel.subscribe(|_| {});

        for id in 1..=4 {
            channel.publish(&snapshot(id));
        }

        assert_eq!(*calls.lock().unwrap(), 2);
        assert_eq!(channel.listener_count(), 1);
    }

    #[test]
    fn test_publish_without_listeners() {
        let mut channel = StateChannel::new();
        channel.publish(&snapshot(1));
        assert_eq!(channel.published(), 1);
    }

    #[test]
    fn test_channels_are_independent() {
        let mut first = StateChannel::new();
        let mut second = StateChannel::new();
        let seen = Arc::new(Mutex::new(0u32));

        let s = seen.clone();
        first.subscribe(move |_| *s.lock().unwrap() += 1);
        second.publish(&snapshot(1));

        assert_eq!(*seen.lock().unwrap(), 0);
    }
}
