use thiserror::Error;

/// Precondition violations rejected when a [`Game`](crate::Game) is built.
///
/// Runtime misuse (guessing after the game finished, cancelling a timer that
/// is not running) is not an error; those calls are no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("candidate pool must contain at least one region name")]
    EmptyCandidatePool,
    #[error("round count must be between 1 and {max} (got {got})")]
    InvalidRoundCount { got: usize, max: usize },
    #[error("round time must be at least one second")]
    InvalidRoundTime,
    #[error("tick period must be non-zero")]
    InvalidTick,
}
