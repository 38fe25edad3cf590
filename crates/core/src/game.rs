//! Game state machine - round progression, countdown, and game-over detection.
//!
//! The game has two macro states:
//!
//! - **Idle/Finished**: no current round, no timer running
//! - **Running**: a current round and exactly one active countdown timer
//!
//! Every transition publishes a [`GameSnapshot`] on the game's own
//! [`StateChannel`]. The game knows nothing about rendering, and renderers
//! only ever see snapshots.

use std::time::Duration;

use arrayvec::ArrayVec;

use crate::types::{MAX_ROUNDS, ROUNDS_PER_GAME, ROUND_TIME_SECS, TICK_MS};
use crate::{
    CandidatePool, GameSnapshot, QuizError, Round, RoundSnapshot, Scheduler, StateChannel,
    SubscriptionId, TargetPicker, TimerId,
};

/// Tunables for one game instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Rounds generated per `start()`
    pub rounds: usize,
    /// Countdown budget per round, in ticks
    pub round_secs: u32,
    /// Tick period
    pub tick: Duration,
    /// Seed for target selection
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rounds: ROUNDS_PER_GAME,
            round_secs: ROUND_TIME_SECS,
            tick: Duration::from_millis(TICK_MS),
            seed: 0,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), QuizError> {
        if self.rounds == 0 || self.rounds > MAX_ROUNDS {
            return Err(QuizError::InvalidRoundCount {
                got: self.rounds,
                max: MAX_ROUNDS,
            });
        }
        if self.round_secs == 0 {
            return Err(QuizError::InvalidRoundTime);
        }
        if self.tick.is_zero() {
            return Err(QuizError::InvalidTick);
        }
        Ok(())
    }
}

/// Orchestrates an ordered sequence of [`Round`]s
#[derive(Debug)]
pub struct Game<S: Scheduler> {
    config: GameConfig,
    pool: CandidatePool,
    picker: TargetPicker,
    rounds: ArrayVec<Round, MAX_ROUNDS>,
    /// Index into `rounds`; `None` before the first start and after finishing.
    current: Option<usize>,
    /// The single active countdown, if any.
    timer: Option<TimerId>,
    next_timer_id: u64,
    game_id: u32,
    scheduler: S,
    channel: StateChannel,
}

impl<S: Scheduler> Game<S> {
    /// Create an idle game bound to `pool`.
    ///
    /// Fails on an empty pool or an out-of-range config.
    pub fn new<I, N>(pool: I, scheduler: S, config: GameConfig) -> Result<Self, QuizError>
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        config.validate()?;
        let pool = CandidatePool::new(pool)?;

        Ok(Self {
            config,
            pool,
            picker: TargetPicker::new(config.seed),
            rounds: ArrayVec::new(),
            current: None,
            timer: None,
            next_timer_id: 0,
            game_id: 0,
            scheduler,
            channel: StateChannel::new(),
        })
    }

    /// Start a fresh game, discarding any game in progress.
    ///
    /// Cancels the running timer, draws new targets, selects round 1, starts
    /// its countdown, and publishes.
    pub fn start(&mut self) {
        self.cancel_timer();
        self.game_id = self.game_id.wrapping_add(1);
        self.current = None;
        self.rounds.clear();

        let targets = self.picker.pick_many(&self.pool, self.config.rounds);
        for (i, target) in targets.into_iter().enumerate() {
            self.rounds
                .push(Round::new(i as u32 + 1, target, self.config.round_secs));
        }

        tracing::info!(
            game_id = self.game_id,
            rounds = self.rounds.len(),
            "game started"
        );
        self.next_round();
    }

    /// Abort the game without publishing.
    pub fn stop(&mut self) {
        tracing::debug!(game_id = self.game_id, "stopping game");
        self.cancel_timer();
        self.current = None;
    }

    /// Submit a guess for the current round and move on.
    ///
    /// Returns `None` when the game is finished (nothing is published), else
    /// whether the round was guessed correctly.
    pub fn guess_suburb(&mut self, candidate: &str) -> Option<bool> {
        let Some(i) = self.current else {
            tracing::debug!(candidate, "guess ignored: game is finished");
            return None;
        };

        let correct = self.rounds[i].guess(candidate);
        tracing::debug!(
            round = self.rounds[i].index(),
            candidate,
            correct,
            known = self.pool.contains(candidate),
            "guessed suburb"
        );

        self.next_round();
        Some(correct)
    }

    /// Deliver one countdown tick.
    ///
    /// Returns false for a stale tick (an id that is not the active timer),
    /// which is ignored. On the tick that runs the clock to zero the round
    /// ends as if nothing had been guessed in time.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.timer != Some(id) {
            tracing::debug!(timer = id.get(), "stale tick ignored");
            return false;
        }

        let Some(i) = self.current else {
            self.cancel_timer();
            return false;
        };

        let time_left = self.rounds[i].update_time();
        if time_left == 0 {
            self.cancel_timer();
            self.next_round();
        } else {
            self.publish();
        }
        true
    }

    pub fn is_game_finished(&self) -> bool {
        self.current.is_none()
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.current.map(|i| &self.rounds[i])
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn total_score(&self) -> u32 {
        self.rounds.iter().map(Round::score).sum()
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn candidate_pool(&self) -> &CandidatePool {
        &self.pool
    }

    pub fn active_timer(&self) -> Option<TimerId> {
        self.timer
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&GameSnapshot) + Send + 'static,
    {
        self.channel.subscribe(listener)
    }

    /// Subscribe until `listener` returns false.
    pub fn subscribe_while<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&GameSnapshot) -> bool + Send + 'static,
    {
        self.channel.subscribe_while(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.channel.unsubscribe(id)
    }

    pub fn channel(&self) -> &StateChannel {
        &self.channel
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.game_id = self.game_id;
        out.current_round = self.current_round().map(RoundSnapshot::from);
        out.rounds.clear();
        out.rounds.extend(self.rounds.iter().map(RoundSnapshot::from));
        out.game_finished = self.is_game_finished();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Select the round after the current one, or finish.
    ///
    /// Publishes regardless of which branch was taken.
    fn next_round(&mut self) {
        let next = self.current.map_or(0, |i| i + 1);
        if next >= self.rounds.len() {
            self.cancel_timer();
            self.current = None;
            tracing::info!(
                game_id = self.game_id,
                score = self.total_score(),
                rounds = self.rounds.len(),
                "game finished"
            );
        } else {
            self.current = Some(next);
            self.start_timer();
        }

        self.publish();
    }

    fn start_timer(&mut self) {
        self.cancel_timer();
        self.next_timer_id += 1;
        let id = TimerId::new(self.next_timer_id);
        self.scheduler.schedule_repeating(id, self.config.tick);
        self.timer = Some(id);
    }

    fn cancel_timer(&mut self) {
        if let Some(id) = self.timer.take() {
            self.scheduler.cancel(id);
        }
    }

    fn publish(&mut self) {
        let snapshot = self.snapshot();
        tracing::debug!(
            round = snapshot.current_round.as_ref().map(|r| r.index),
            suburb = snapshot.current_round.as_ref().map(|r| r.target.as_str()),
            time_left = snapshot.current_round.as_ref().map(|r| r.time_left),
            "state update"
        );
        self.channel.publish(&snapshot);
    }
}

impl Game<crate::ManualScheduler> {
    /// Advance a manually scheduled game by `elapsed`, delivering due ticks.
    ///
    /// Time is fed in steps of at most one tick period so a countdown started
    /// mid-call gets its share of the remaining time. Returns the number of
    /// ticks applied.
    pub fn tick(&mut self, elapsed: Duration) -> usize {
        let mut remaining = elapsed;
        let mut applied = 0;

        while !remaining.is_zero() {
            let step = remaining.min(self.config.tick);
            remaining -= step;
            for id in self.scheduler.advance(step) {
                if self.on_timer(id) {
                    applied += 1;
                }
            }
        }

        applied
    }
}
