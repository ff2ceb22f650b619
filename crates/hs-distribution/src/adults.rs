//! Distributions of how many adults take part in a joint episode.

use hs_core::HouseholdRng;

use crate::{DistributionError, DistributionResult};

/// One weight row per household type; see
/// [`adult_distribution`][crate::adult_distribution] for the row index.
/// Outcome `i` of a row means `i` adults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdultDistributions {
    rows: Vec<Vec<f32>>,
}

impl AdultDistributions {
    pub fn new(rows: Vec<Vec<f32>>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Draw an adult count in `1..=max_adults` from row `row`.
    ///
    /// `Ok(None)` when the row has no mass in that range.
    pub fn sample(
        &self,
        row: usize,
        max_adults: usize,
        rng: &mut HouseholdRng,
    ) -> DistributionResult<Option<usize>> {
        let weights = self
            .rows
            .get(row)
            .ok_or(DistributionError::UnknownAdultDistribution(row))?;
        let upper = max_adults.min(weights.len().saturating_sub(1));
        if upper < 1 {
            return Ok(None);
        }
        let u = rng.unit_f32();
        Ok(crate::sample::roulette((1..=upper).map(|i| weights[i]), u).map(|i| i + 1))
    }
}
