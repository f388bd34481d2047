//! Lottery game rules and draw results.
//!
//! Wraps the sampler with the game-level shape the UI consumes: a rule set
//! (range plus pick count) and a serializable draw result.

use serde::{Deserialize, Serialize};

use crate::error::SampleError;
use crate::rng::RandomSource;
use crate::sampler::{sample_unique, validate_range};

/// A lottery rule set: pick `picks` unique numbers from [min, max].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    pub min: i64,
    pub max: i64,
    pub picks: usize,
}

impl GameRules {
    /// The classic 6-of-45 game the original UI plays.
    pub fn standard() -> Self {
        Self {
            min: 1,
            max: 45,
            picks: 6,
        }
    }

    /// Check the rules describe a satisfiable draw.
    pub fn validate(&self) -> Result<(), SampleError> {
        validate_range(self.min, self.max, self.picks).map(|_| ())
    }
}

/// One completed draw: distinct numbers, sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draw {
    pub numbers: Vec<i64>,
}

/// Run one draw under the given rules.
pub fn draw<R: RandomSource>(rules: &GameRules, rng: &mut R) -> Result<Draw, SampleError> {
    let numbers = sample_unique(rules.min, rules.max, rules.picks, rng)?;
    Ok(Draw { numbers })
}
