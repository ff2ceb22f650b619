//! Inverse-CDF (roulette-wheel) sampling over the distribution tables.
//!
//! Every draw builds the cumulative sum over the requested index range,
//! scales a single `u ∈ [0, 1)` by the total and scans for the first bucket
//! whose cumulative weight exceeds it.  Zero totals are infeasible, never
//! errors.

use std::ops::{Range, RangeInclusive};

use hs_core::{DistributionId, HouseholdRng, Time};

use crate::{DistributionError, DistributionResult, DistributionTable, StartTimeProfile};

/// Pick an index from `weights` with probability proportional to its weight.
///
/// Non-positive weights are skipped.  Returns `None` when the total is not
/// positive.  If rounding lets `u * total` reach the end of the scan, the
/// last positive bucket is returned.
pub(crate) fn roulette<I>(weights: I, u: f32) -> Option<usize>
where
    I: Iterator<Item = f32> + Clone,
{
    let total: f32 = weights.clone().filter(|w| *w > 0.0).sum();
    if !(total > 0.0) {
        return None;
    }
    let target = u * total;
    let mut cdf = 0.0f32;
    let mut last = None;
    for (i, w) in weights.enumerate() {
        if w <= 0.0 {
            continue;
        }
        cdf += w;
        last = Some(i);
        if target < cdf {
            return Some(i);
        }
    }
    last
}

impl DistributionTable {
    /// Draw an episode count in `range` (inclusive, clamped to the table).
    ///
    /// `factor` multiplies the weight of every outcome ≥ 1 before
    /// normalization; pass `1.0` for the base rates, or the result of
    /// [`Adjustments::generation_factor`][crate::Adjustments::generation_factor].
    pub fn sample_frequency(
        &self,
        id: DistributionId,
        range: RangeInclusive<u32>,
        factor: f32,
        rng: &mut HouseholdRng,
    ) -> DistributionResult<Option<u32>> {
        let entry = self.entry(id)?;
        let min = *range.start();
        let max = (*range.end()).min(self.max_frequency());
        if min > max {
            return Ok(None);
        }
        if min == max {
            return Ok(Some(min));
        }
        let weights = (min..=max).map(|f| {
            let w = entry.frequency_weight(f as usize);
            if f >= 1 { w * factor } else { w }
        });
        let u = rng.unit_f32();
        Ok(roulette(weights, u).map(|i| min + i as u32))
    }

    /// Draw a start time from the half-open bin window `bins`, conditioned
    /// on the day's `frequency` of this activity.
    ///
    /// A draw landing on the first minute of the day is infeasible.
    pub fn sample_start_time(
        &self,
        id: DistributionId,
        frequency: u32,
        bins: Range<usize>,
        profile: &StartTimeProfile<'_>,
        rng: &mut HouseholdRng,
    ) -> DistributionResult<Option<Time>> {
        let entry = self.entry(id)?;
        if frequency > self.max_frequency() {
            return Err(DistributionError::FrequencyOutOfRange {
                id,
                frequency,
                max: self.max_frequency(),
            });
        }
        let first = bins.start;
        let end = bins.end.min(self.quanta);
        if first >= end {
            return Ok(None);
        }
        let weights = (first..end).map(|bin| {
            let w = entry.start_weight(bin, frequency as usize);
            if profile.is_neutral() { w } else { w * profile.factor(self.time_of_bin(bin)) }
        });
        let u = rng.unit_f32();
        Ok(roulette(weights, u)
            .map(|i| self.time_of_bin(first + i))
            .filter(|&t| t > self.day_start))
    }

    /// Draw a duration for an episode starting at `start`.
    ///
    /// With `max` the draw is limited to the whole bins that fit in it;
    /// without, to the bins left before the end of the day.  Duration bin 0
    /// counts as one bin, so a feasible draw is never zero-length.
    pub fn sample_duration(
        &self,
        id: DistributionId,
        start: Time,
        max: Option<Time>,
        rng: &mut HouseholdRng,
    ) -> DistributionResult<Option<Time>> {
        let entry = self.entry(id)?;
        let start_bin = self.bin_of(start);
        let max_bin = match max {
            Some(limit) => self.duration_bins(limit),
            None => self.quanta.saturating_sub(1 + start_bin),
        };
        if max_bin == 0 {
            return Ok(None);
        }
        let weights = (0..=max_bin).map(|bin| entry.duration_weight(start_bin, bin));
        let u = rng.unit_f32();
        Ok(roulette(weights, u).map(|bin| {
            let bins = bin.max(1) as i32;
            Time(bins * self.bin_width.as_minutes())
        }))
    }
}
