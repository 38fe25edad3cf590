use serde::{Deserialize, Serialize};

use crate::Round;

/// Read-only copy of one [`Round`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub index: u32,
    pub target: String,
    pub guessed: Option<String>,
    pub score: u32,
    pub time_left: u32,
    pub correct: bool,
}

impl From<&Round> for RoundSnapshot {
    fn from(value: &Round) -> Self {
        Self {
            index: value.index(),
            target: value.target().to_owned(),
            guessed: value.guessed_target().map(str::to_owned),
            score: value.score(),
            time_left: value.time_left(),
            correct: value.is_guessed_correctly(),
        }
    }
}

/// State published to renderers on every round transition and timer tick.
///
/// This is the whole contract between the game and anything drawing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Increments on every `start()`
    pub game_id: u32,
    pub current_round: Option<RoundSnapshot>,
    /// Full ordered sequence, for summary rendering
    pub rounds: Vec<RoundSnapshot>,
    pub game_finished: bool,
}

impl Default for GameSnapshot {
    /// A game that has not started: no current round, so finished.
    fn default() -> Self {
        Self {
            game_id: 0,
            current_round: None,
            rounds: Vec::new(),
            game_finished: true,
        }
    }
}

impl GameSnapshot {
    pub fn total_score(&self) -> u32 {
        self.rounds.iter().map(|r| r.score).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_snapshot_copies_round() {
        let mut round = Round::new(3, "Fitzroy", 15);
        round.guess("Fitzroy");
        round.update_time();

        let snap = RoundSnapshot::from(&round);
        assert_eq!(snap.index, 3);
        assert_eq!(snap.target, "Fitzroy");
        assert_eq!(snap.guessed.as_deref(), Some("Fitzroy"));
        assert_eq!(snap.score, 1);
        assert_eq!(snap.time_left, 14);
        assert!(snap.correct);
    }

    #[test]
    fn test_total_score() {
        let snapshot = GameSnapshot {
            game_id: 1,
            current_round: None,
            rounds: vec![
                RoundSnapshot { index: 1, score: 1, correct: true, ..Default::default() },
                RoundSnapshot { index: 2, ..Default::default() },
                RoundSnapshot { index: 3, score: 1, correct: true, ..Default::default() },
            ],
            game_finished: true,
        };

        assert_eq!(snapshot.total_score(), 2);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot = GameSnapshot {
            game_id: 4,
            current_round: Some(RoundSnapshot {
                index: 1,
                target: "Richmond".into(),
                time_left: 15,
                ..Default::default()
            }),
            rounds: Vec::new(),
            game_finished: false,
        };

        let v: serde_json::Value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(v["game_id"], 4);
        assert_eq!(v["current_round"]["target"], "Richmond");
        assert_eq!(v["current_round"]["guessed"], serde_json::Value::Null);
        assert_eq!(v["game_finished"], false);
    }

    #[test]
    fn test_default_is_finished_without_round() {
        let snapshot = GameSnapshot::default();

        assert!(snapshot.current_round.is_none());
        assert!(snapshot.game_finished);
        assert_eq!(snapshot.game_finished, snapshot.current_round.is_none());
    }
}
