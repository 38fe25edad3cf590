//! Candidate pool - the region names rounds draw their targets from.

use crate::QuizError;

/// Non-empty list of region names for the loaded city.
///
/// Emptiness is rejected up front so target selection never indexes into an
/// empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePool {
    names: Vec<String>,
}

impl CandidatePool {
    pub fn new<I, N>(names: I) -> Result<Self, QuizError>
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(QuizError::EmptyCandidatePool);
        }

        let distinct = names
            .iter()
            .collect::<std::collections::HashSet<_>>()
            .len();
        if distinct == 1 {
            tracing::warn!(
                name = %names[0],
                "candidate pool has a single distinct region; every round will target it"
            );
        }

        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}
