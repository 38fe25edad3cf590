//! QuizView: maps a `GameSnapshot` into what the player reads.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::types::DANGER_TIME_SECS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeStyle {
    Normal,
    Danger,
}

/// Status for the round in play
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub target: String,
    pub round: u32,
    pub rounds: usize,
    pub time_left: u32,
    pub time_style: TimeStyle,
}

impl StatusView {
    pub fn prompt(&self) -> String {
        format!("Find {}", self.target)
    }

    pub fn round_text(&self) -> String {
        format!("Round {} of {}", self.round, self.rounds)
    }

    pub fn time_text(&self) -> String {
        format!("Time left {}s", self.time_left)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub index: u32,
    pub target: String,
    /// Last guess, or `-` when time ran out
    pub guessed: String,
    pub correct: bool,
}

impl SummaryRow {
    pub fn mark(&self) -> &'static str {
        if self.correct {
            "✔"
        } else {
            "✘"
        }
    }
}

/// End-of-game table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub rows: Vec<SummaryRow>,
    pub total_score: u32,
}

impl SummaryView {
    pub fn score_text(&self) -> String {
        format!(
            "Your final score is {} / {}",
            self.total_score,
            self.rows.len()
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct QuizView {
    danger_secs: u32,
}

impl Default for QuizView {
    fn default() -> Self {
        Self {
            danger_secs: DANGER_TIME_SECS,
        }
    }
}

impl QuizView {
    pub fn new(danger_secs: u32) -> Self {
        Self { danger_secs }
    }

    /// Status while a round is running; `None` otherwise.
    pub fn status(&self, snapshot: &GameSnapshot) -> Option<StatusView> {
        if snapshot.game_finished {
            return None;
        }
        let round = snapshot.current_round.as_ref()?;
        let time_style = if round.time_left <= self.danger_secs {
            TimeStyle::Danger
        } else {
            TimeStyle::Normal
        };

        Some(StatusView {
            target: round.target.clone(),
            round: round.index,
            rounds: snapshot.rounds.len(),
            time_left: round.time_left,
            time_style,
        })
    }

    /// Summary once a game has run to completion; `None` otherwise.
    pub fn summary(&self, snapshot: &GameSnapshot) -> Option<SummaryView> {
        if !snapshot.game_finished || snapshot.rounds.is_empty() {
            return None;
        }

        let rows = snapshot
            .rounds
            .iter()
            .map(|r| SummaryRow {
                index: r.index,
                target: r.target.clone(),
                guessed: r.guessed.clone().unwrap_or_else(|| "-".to_string()),
                correct: r.correct,
            })
            .collect();

        Some(SummaryView {
            rows,
            total_score: snapshot.total_score(),
        })
    }
}
