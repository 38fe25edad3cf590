//! Async runtime integration.
//!
//! Drives a core `Game` from a tokio task: countdown ticks come from
//! [`TokioScheduler`], player actions arrive as [`QuizCommand`]s through a
//! cloneable [`QuizHandle`], and snapshots fan out to subscribers over
//! unbounded channels.
//!
//! # Environment Variables
//!
//! - `QUIZ_CITY`: city key, `melbourne` (default) or `sydney`
//! - `QUIZ_DATA_DIR`: directory holding the city data files (default: `data`)
//! - `QUIZ_ROUNDS`: rounds per game (default: 5)
//! - `QUIZ_ROUND_SECS`: seconds per round (default: 15)
//! - `QUIZ_TICK_MS`: countdown tick period (default: 1000)
//! - `QUIZ_SEED`: fixed seed for target selection (default: time based)
//! - `QUIZ_MAX_PENDING`: command queue depth (default: 32)

pub mod config;
pub mod runtime;
pub mod scheduler;

pub use suburb_quiz_core as core;
pub use suburb_quiz_types as types;

pub use config::QuizConfig;
pub use runtime::{spawn_quiz, GuessOutcome, QuizCommand, QuizHandle};
pub use scheduler::TokioScheduler;
