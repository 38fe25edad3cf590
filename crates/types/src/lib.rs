//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the quiz.
//! All types are plain data with no I/O, so they are usable in any context
//! (round/timer logic, data loading, terminal rendering).
//!
//! # Game Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `ROUNDS_PER_GAME` | 5 | Rounds generated by each `start()` |
//! | `ROUND_TIME_SECS` | 15 | Countdown budget for one round |
//! | `TICK_MS` | 1000 | Period of the countdown tick |
//! | `MAX_ROUNDS` | 20 | Upper bound for a configured round count |
//! | `DANGER_TIME_SECS` | 3 | Remaining time at which the status turns red |
//!
//! # Examples
//!
//! ```
//! use suburb_quiz_types::{Bounds, CityKey, ROUNDS_PER_GAME};
//!
//! assert_eq!(CityKey::from_str("Sydney"), Some(CityKey::Sydney));
//! assert_eq!(CityKey::from_str("perth"), None);
//!
//! let bounds = Bounds::new(-38.0, 144.0, -37.0, 145.0);
//! assert_eq!(bounds.center(), (-37.5, 144.5));
//!
//! assert_eq!(ROUNDS_PER_GAME, 5);
//! ```

use serde::{Deserialize, Serialize};

/// Rounds generated per game
pub const ROUNDS_PER_GAME: usize = 5;

/// Per-round countdown budget in seconds
pub const ROUND_TIME_SECS: u32 = 15;

/// Countdown tick period in milliseconds (one tick = one second of round time)
pub const TICK_MS: u64 = 1000;

/// Maximum number of rounds a game can be configured with
pub const MAX_ROUNDS: usize = 20;

/// Remaining seconds at or below which renderers flag the countdown
pub const DANGER_TIME_SECS: u32 = 3;

/// Cities with bundled suburb data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CityKey {
    #[default]
    Melbourne,
    Sydney,
}

impl CityKey {
    pub const ALL: [CityKey; 2] = [CityKey::Melbourne, CityKey::Sydney];

    /// Parse city key from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use suburb_quiz_types::CityKey;
    ///
    /// assert_eq!(CityKey::from_str("melbourne"), Some(CityKey::Melbourne));
    /// assert_eq!(CityKey::from_str(" Sydney "), Some(CityKey::Sydney));
    /// assert_eq!(CityKey::from_str("hobart"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "melbourne" => Some(CityKey::Melbourne),
            "sydney" => Some(CityKey::Sydney),
            _ => None,
        }
    }

    /// Lowercase key, also the stem of the city's data files
    pub fn as_str(&self) -> &'static str {
        match self {
            CityKey::Melbourne => "melbourne",
            CityKey::Sydney => "sydney",
        }
    }
}

impl std::fmt::Display for CityKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named geographic area the player must identify on the map
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
}

impl Region {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Lat/lon bounding extent of a loaded city
///
/// Serialized with the short keys used by the bundled bounds files
/// (`minlat`, `minlon`, `maxlat`, `maxlon`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    #[serde(rename = "minlat")]
    pub min_lat: f64,
    #[serde(rename = "minlon")]
    pub min_lon: f64,
    #[serde(rename = "maxlat")]
    pub max_lat: f64,
    #[serde(rename = "maxlon")]
    pub max_lon: f64,
}

impl Bounds {
    pub fn new(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            min_lon,
            max_lat,
            max_lon,
        }
    }

    /// Midpoint as `(lat, lon)`
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lon..=self.max_lon).contains(&lon)
    }
}
