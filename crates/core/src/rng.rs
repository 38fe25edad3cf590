//! RNG module - round target selection
//!
//! Each round's target is drawn independently and uniformly from the candidate
//! pool, with replacement, so the same suburb may come up twice in one game.
//!
//! The generator is ChaCha8 seeded from a `u64`: the same seed and pool always
//! produce the same sequence of targets, which keeps games reproducible in tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::CandidatePool;

/// Seeded uniform picker over a [`CandidatePool`]
#[derive(Debug, Clone)]
pub struct TargetPicker {
    rng: ChaCha8Rng,
    seed: u64,
}

impl TargetPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Draw one name from the pool
    pub fn pick<'a>(&mut self, pool: &'a CandidatePool) -> &'a str {
        let index = self.rng.gen_range(0..pool.len());
        &pool.names()[index]
    }

    /// Draw `count` names, with replacement
    pub fn pick_many(&mut self, pool: &CandidatePool, count: usize) -> Vec<String> {
        (0..count).map(|_| self.pick(pool).to_owned()).collect()
    }

    /// Seed this picker was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for TargetPicker {
    fn default() -> Self {
        Self::new(0)
    }
}
