//! The `Scheduler` and its run loop over a population.

use hs_core::{HouseholdId, SchedulerConfig};
use hs_household::{Household, Population};
use hs_schedule::{LocationChoice, TravelTime};
use tracing::{info, warn};

use crate::pass::HouseholdPass;
use crate::{
    HouseholdSchedule, RunObserver, SchedulerContext, SchedulerError, SchedulerResult, SchedulerStats,
    StatsSnapshot,
};

/// Households handed to the workers at a time.  Results of a chunk are
/// reported to the observer before the next chunk starts.
const HOUSEHOLD_CHUNK: usize = 1024;

type Scheduled = (HouseholdId, u32, SchedulerResult<HouseholdSchedule>);

/// Runs the generation pipeline over households.
///
/// Holds the read-only [`SchedulerContext`] and the shared tallies.  Each
/// (household, iteration) pair is scheduled on one thread with its own RNG
/// stream, so results do not depend on the order in which households are
/// visited.
///
/// Create via [`SchedulerBuilder`][crate::SchedulerBuilder].
pub struct Scheduler<T, L> {
    context: SchedulerContext<T, L>,
    stats:   SchedulerStats,
    #[cfg(feature = "parallel")]
    pool:    Option<rayon::ThreadPool>,
}

impl<T: TravelTime, L: LocationChoice> Scheduler<T, L> {
    pub(crate) fn new(context: SchedulerContext<T, L>) -> Self {
        Self {
            context,
            stats: SchedulerStats::new(),
            #[cfg(feature = "parallel")]
            pool: None,
        }
    }

    /// Run household workers on `pool` instead of Rayon's global pool.
    #[cfg(feature = "parallel")]
    pub(crate) fn with_pool(mut self, pool: Option<rayon::ThreadPool>) -> Self {
        self.pool = pool;
        self
    }

    #[inline]
    pub fn context(&self) -> &SchedulerContext<T, L> {
        &self.context
    }

    #[inline]
    pub fn config(&self) -> &SchedulerConfig {
        &self.context.config
    }

    /// Tallies accumulated so far.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Schedule one iteration of one household.
    ///
    /// Fatal errors come back wrapped in [`SchedulerError::Household`].
    pub fn schedule_household(&self, household: &Household, iteration: u32) -> SchedulerResult<HouseholdSchedule> {
        match HouseholdPass::new(&self.context, &self.stats, household, iteration).run() {
            Ok(schedule) => {
                self.stats.record_scheduled();
                Ok(schedule)
            }
            Err(source) => {
                self.stats.record_failed();
                Err(SchedulerError::Household { household: household.id, iteration, source: Box::new(source) })
            }
        }
    }

    /// Schedule every household `household_iterations` times.
    ///
    /// Observer hooks run on the calling thread in household order.  A
    /// failed household stops the run unless
    /// `continue_on_household_error` is set, in which case it is logged,
    /// reported to the observer and skipped.
    pub fn run<O: RunObserver>(&self, population: &Population, observer: &mut O) -> SchedulerResult<StatsSnapshot> {
        let config = &self.context.config;
        let iterations = config.household_iterations;
        info!(households = population.len(), persons = population.person_count(), iterations, "scheduling started");
        observer.on_run_start(population.len(), iterations);

        for chunk in population.households().chunks(HOUSEHOLD_CHUNK) {
            for (household, iteration, result) in self.schedule_chunk(chunk) {
                match result {
                    Ok(schedule) => observer.on_household(&schedule),
                    Err(error) if config.continue_on_household_error => {
                        warn!(%household, iteration, %error, "household failed, continuing");
                        observer.on_household_failed(household, iteration, &error);
                    }
                    Err(error) => return Err(error),
                }
            }
        }

        let stats = self.stats.snapshot();
        info!(
            scheduled = stats.households_scheduled,
            failed = stats.households_failed,
            episodes = stats.episodes_generated,
            abandoned = stats.occurrences_abandoned,
            skipped = stats.episodes_skipped,
            skipped_weight = stats.skipped_weight,
            "scheduling finished",
        );
        observer.on_run_end(&stats);
        Ok(stats)
    }

    fn schedule_chunk(&self, chunk: &[Household]) -> Vec<Scheduled> {
        let iterations = self.context.config.household_iterations;

        #[cfg(not(feature = "parallel"))]
        {
            chunk
                .iter()
                .flat_map(|hh| (0..iterations).map(move |it| (hh.id, it, self.schedule_household(hh, it))))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let work = || {
                chunk
                    .par_iter()
                    .flat_map_iter(|hh| (0..iterations).map(move |it| (hh.id, it, self.schedule_household(hh, it))))
                    .collect::<Vec<Scheduled>>()
            };
            match &self.pool {
                Some(pool) => pool.install(work),
                None => work(),
            }
        }
    }
}
