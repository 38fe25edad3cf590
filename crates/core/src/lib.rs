//! Core quiz logic - pure, deterministic, and testable
//!
//! This crate contains the round/timer state machine that drives the quiz:
//! round progression, countdown, scoring, and game-over detection, plus the
//! publish/subscribe channel that carries state snapshots to renderers.
//! It has no dependencies on rendering, data loading, or any async runtime.
//!
//! # Module Structure
//!
//! - [`round`]: one timed challenge (target, guess, score, time left)
//! - [`game`]: the state machine orchestrating a sequence of rounds
//! - [`channel`]: per-game publish/subscribe for [`GameSnapshot`]s
//! - [`snapshot`]: read-only projections handed to listeners
//! - [`scheduler`]: the timer seam and a deterministic manual scheduler
//! - [`pool`] / [`rng`]: candidate names and seeded uniform target draws
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use suburb_quiz_core::{Game, GameConfig, ManualScheduler};
//!
//! let pool = ["Richmond", "Fitzroy", "Brunswick"];
//! let mut game = Game::new(pool, ManualScheduler::new(), GameConfig::default()).unwrap();
//! game.start();
//! assert_eq!(game.current_round().unwrap().index(), 1);
//!
//! // A correct guess scores and moves to round 2
//! let target = game.current_round().unwrap().target().to_owned();
//! assert_eq!(game.guess_suburb(&target), Some(true));
//! assert_eq!(game.current_round().unwrap().index(), 2);
//!
//! // Running the clock out also moves on
//! game.tick(Duration::from_secs(15));
//! assert_eq!(game.current_round().unwrap().index(), 3);
//! ```
//!
//! # Timing
//!
//! The game never sleeps. A driver implements [`Scheduler`] and feeds ticks
//! back through [`Game::on_timer`]; each tick takes one second off the
//! current round.

pub mod channel;
pub mod error;
pub mod game;
pub mod pool;
pub mod rng;
pub mod round;
pub mod scheduler;
pub mod snapshot;

pub use suburb_quiz_types as types;

// Re-export commonly used types for convenience
pub use channel::{Listener, StateChannel, SubscriptionId};
pub use error::QuizError;
pub use game::{Game, GameConfig};
pub use pool::CandidatePool;
pub use rng::TargetPicker;
pub use round::Round;
pub use scheduler::{ManualScheduler, Scheduler, TimerId};
pub use snapshot::{GameSnapshot, RoundSnapshot};
