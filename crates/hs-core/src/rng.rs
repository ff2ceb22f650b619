//! Deterministic per-household RNG.
//!
//! # Determinism strategy
//!
//! Each (household, iteration) pair gets its own independent `SmallRng`
//! seeded by:
//!
//!   stream = (iteration << 32) | household_id
//!   seed   = global_seed XOR (stream * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive ids uniformly across the seed space.  This means:
//!
//! - Households never share RNG state, so the parallel runner may visit them
//!   in any order and still reproduce identical schedules.
//! - Adding households to a run does not disturb the streams of existing ones.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::HouseholdId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── HouseholdRng ──────────────────────────────────────────────────────────────

/// RNG owned by one household's scheduling pass.
///
/// Not `Sync`: a household is scheduled on exactly one thread.
pub struct HouseholdRng(SmallRng);

impl HouseholdRng {
    /// Seed deterministically from the run's global seed, a household and an
    /// iteration number.
    pub fn new(global_seed: u64, household: HouseholdId, iteration: u32) -> Self {
        let stream = ((iteration as u64) << 32) | household.0 as u64;
        let seed = global_seed ^ stream.wrapping_mul(MIXING_CONSTANT);
        HouseholdRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Uniform draw in `[0, 1)` at single precision, the resolution of the
    /// distribution tables.
    #[inline]
    pub fn unit_f32(&mut self) -> f32 {
        self.0.r#gen::<f32>()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Choose a random element from a slice; `None` if it is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
