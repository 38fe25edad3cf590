//! Quiz configuration from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use crate::core::GameConfig;
use crate::types::{CityKey, ROUNDS_PER_GAME, ROUND_TIME_SECS, TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub city: CityKey,
    pub data_dir: PathBuf,
    pub rounds: usize,
    pub round_secs: u32,
    pub tick_ms: u64,
    pub seed: Option<u64>,
    pub max_pending_commands: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            city: CityKey::Melbourne,
            data_dir: PathBuf::from("data"),
            rounds: ROUNDS_PER_GAME,
            round_secs: ROUND_TIME_SECS,
            tick_ms: TICK_MS,
            seed: None,
            max_pending_commands: 32,
        }
    }
}

impl QuizConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparsable values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let city = match lookup("QUIZ_CITY") {
            Some(raw) => CityKey::from_str(&raw).unwrap_or_else(|| {
                tracing::warn!(city = %raw, "unknown city, falling back to melbourne");
                CityKey::Melbourne
            }),
            None => defaults.city,
        };

        let data_dir = lookup("QUIZ_DATA_DIR")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        Self {
            city,
            data_dir,
            rounds: parse_var(&lookup, "QUIZ_ROUNDS").unwrap_or(defaults.rounds),
            round_secs: parse_var(&lookup, "QUIZ_ROUND_SECS").unwrap_or(defaults.round_secs),
            tick_ms: parse_var(&lookup, "QUIZ_TICK_MS").unwrap_or(defaults.tick_ms),
            seed: parse_var(&lookup, "QUIZ_SEED"),
            max_pending_commands: parse_var(&lookup, "QUIZ_MAX_PENDING")
                .unwrap_or(defaults.max_pending_commands),
        }
    }

    /// Core game settings; without a fixed seed one is derived from the clock.
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            rounds: self.rounds,
            round_secs: self.round_secs,
            tick: Duration::from_millis(self.tick_ms),
            seed: self.seed.unwrap_or_else(clock_seed),
        }
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|v| v.trim().parse().ok())
}

fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
