//! Sampling helpers bound to one distribution id.

use hs_core::{DistributionId, DistrictId, HouseholdRng, Time};
use hs_distribution::{DistributionResult, DistributionTable, StartTimeProfile};

use crate::SchedulerStats;

/// One distribution row with its generation factor and start-time profile
/// already resolved.  Every infeasible draw is tallied.
pub(crate) struct Timetable<'a> {
    table:    &'a DistributionTable,
    stats:    &'a SchedulerStats,
    attempts: u32,
    id:       DistributionId,
    factor:   f32,
    profile:  StartTimeProfile<'a>,
}

impl<'a> Timetable<'a> {
    pub fn new(
        table: &'a DistributionTable,
        stats: &'a SchedulerStats,
        attempts: u32,
        id: DistributionId,
        household_district: Option<DistrictId>,
        work_district: Option<DistrictId>,
    ) -> Self {
        let adjustments = table.adjustments();
        Self {
            table,
            stats,
            attempts,
            id,
            factor: adjustments.generation_factor(id, household_district, work_district),
            profile: adjustments.start_time_profile(id, household_district, work_district),
        }
    }

    /// Draw how many episodes to generate, at most `max`.
    ///
    /// With a `window`, a frequency only counts once a start time for it can
    /// be drawn inside the window.  Gives up with 0 after the attempt cap.
    pub fn frequency(
        &self,
        max: u32,
        window: Option<(Time, Time)>,
        rng: &mut HouseholdRng,
    ) -> DistributionResult<u32> {
        for _ in 0..self.attempts {
            let Some(frequency) = self.table.sample_frequency(self.id, 0..=max, self.factor, rng)? else {
                self.stats.record_infeasible();
                continue;
            };
            if frequency == 0 {
                return Ok(0);
            }
            match window {
                None => return Ok(frequency),
                Some(window) => {
                    if self.start(frequency, window, rng)?.is_some() {
                        return Ok(frequency);
                    }
                }
            }
        }
        Ok(0)
    }

    /// Draw a start time in `[lo, hi]`.
    pub fn start(&self, frequency: u32, (lo, hi): (Time, Time), rng: &mut HouseholdRng) -> DistributionResult<Option<Time>> {
        let bins = if hi < lo { 0..0 } else { self.table.bin_of(lo)..self.table.bin_of(hi) + 1 };
        let start = self
            .table
            .sample_start_time(self.id, frequency, bins, &self.profile, rng)?
            .map(|t| t.max(lo));
        if start.is_none() {
            self.stats.record_infeasible();
        }
        Ok(start)
    }

    /// Draw a start time anywhere in the day.
    pub fn start_any(&self, frequency: u32, rng: &mut HouseholdRng) -> DistributionResult<Option<Time>> {
        let start = self
            .table
            .sample_start_time(self.id, frequency, 0..self.table.quanta(), &self.profile, rng)?;
        if start.is_none() {
            self.stats.record_infeasible();
        }
        Ok(start)
    }

    /// Draw a duration for an episode starting at `start`, at most `max`.
    pub fn duration(&self, start: Time, max: Option<Time>, rng: &mut HouseholdRng) -> DistributionResult<Option<Time>> {
        let duration = self.table.sample_duration(self.id, start, max, rng)?;
        if duration.is_none() {
            self.stats.record_infeasible();
        }
        Ok(duration)
    }
}
