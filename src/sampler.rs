//! Unique-value sampling without replacement.
//!
//! Ports the lottery generator's inner loop: draw uniformly from [min, max]
//! into a set until it holds `k` values, then return them sorted ascending.
//!
//! Rejection sampling is used instead of shuffle-and-take because the target
//! range (e.g. 1-45) is typically much larger than `k` (e.g. 6). Expected
//! draw count is `sum(n/(n-i) for i in 0..k)`, at most `n * H(n)` even when
//! `k` equals the full range, so the loop is cheap for any sane input. The
//! draw budget exists only to turn a broken draw source into an error
//! instead of a hang; the original JS looped unbounded.

use std::collections::HashSet;

use crate::error::SampleError;
use crate::rng::{DrawRng, RandomSource};

/// Floor for the draw budget so tiny ranges still get plenty of slack.
const MIN_DRAW_BUDGET: u64 = 100_000;

/// Check the sampling preconditions, returning the number of distinct
/// values in [min, max] on success.
///
/// Distance fits in u64 for any i64 pair; +1 saturates only for the full
/// i64 range, where no representable k can exceed it anyway.
pub fn validate_range(min: i64, max: i64, k: usize) -> Result<u64, SampleError> {
    if min > max {
        return Err(SampleError::InvalidRange { min, max });
    }
    let available = (max.wrapping_sub(min) as u64).saturating_add(1);
    if k as u64 > available {
        return Err(SampleError::InsufficientRange {
            requested: k as u64,
            available,
        });
    }
    Ok(available)
}

/// Draw `k` distinct integers uniformly from [min, max], sorted ascending.
///
/// The draw source is passed in so callers can seed it for deterministic
/// replay. Fails fast on an empty range (`min > max`) or when `k` exceeds
/// the number of distinct values available; no partial result is ever
/// returned.
pub fn sample_unique<R: RandomSource>(
    min: i64,
    max: i64,
    k: usize,
    rng: &mut R,
) -> Result<Vec<i64>, SampleError> {
    let available = validate_range(min, max, k)?;

    let budget = available.saturating_mul(64).max(MIN_DRAW_BUDGET);
    let mut chosen: HashSet<i64> = HashSet::with_capacity(k);
    let mut draws: u64 = 0;

    while chosen.len() < k {
        if draws >= budget {
            return Err(SampleError::DrawBudgetExceeded {
                budget,
                collected: chosen.len() as u64,
                requested: k as u64,
            });
        }
        draws += 1;
        chosen.insert(rng.gen_inclusive(min, max));
    }

    let mut numbers: Vec<i64> = chosen.into_iter().collect();
    numbers.sort_unstable();
    Ok(numbers)
}

/// Convenience wrapper seeding from system entropy.
pub fn sample(min: i64, max: i64, k: usize) -> Result<Vec<i64>, SampleError> {
    sample_unique(min, max, k, &mut DrawRng::new())
}
