//! Fluent builder for constructing a [`Scheduler`].

use hs_core::SchedulerConfig;
use hs_distribution::{AdultDistributions, DistributionTable};
use hs_schedule::{LocationChoice, TravelTime};

use crate::{Scheduler, SchedulerContext, SchedulerError, SchedulerResult};

/// Household types covered by the adult-count distributions (three for
/// joint other, three for joint market).
const ADULT_DISTRIBUTION_ROWS: usize = 6;

/// Fluent builder for [`Scheduler<T, L>`].
///
/// # Required inputs
///
/// - [`SchedulerConfig`]: day bounds, quantum, attempt cap, seed, ...
/// - [`DistributionTable`]: built for the same configuration
/// - `T: TravelTime`: travel-time provider (e.g. [`hs_schedule::TravelMatrix`])
/// - `L: LocationChoice`: location-choice model (e.g. [`hs_schedule::UniformZones`])
///
/// # Optional inputs (have defaults)
///
/// | Method                       | Default                                  |
/// |------------------------------|------------------------------------------|
/// | `.adult_distributions(a)`    | Every adult count equally likely         |
///
/// # Example
///
/// ```rust,ignore
/// let table = DistributionTableBuilder::new(&config).entry(id, entry).build()?;
/// let scheduler = SchedulerBuilder::new(config, table, TravelMatrix::new(Time(20)), UniformZones::new(zones))
///     .adult_distributions(adults)
///     .build()?;
/// scheduler.run(&population, &mut NoopObserver)?;
/// ```
pub struct SchedulerBuilder<T, L> {
    config:   SchedulerConfig,
    table:    DistributionTable,
    adults:   Option<AdultDistributions>,
    travel:   T,
    location: L,
}

impl<T: TravelTime, L: LocationChoice> SchedulerBuilder<T, L> {
    pub fn new(config: SchedulerConfig, table: DistributionTable, travel: T, location: L) -> Self {
        Self { config, table, adults: None, travel, location }
    }

    /// Supply the joint-activity adult-count distributions.
    pub fn adult_distributions(mut self, adults: AdultDistributions) -> Self {
        self.adults = Some(adults);
        self
    }

    /// Validate the configuration and its agreement with the table, then
    /// build the scheduler.
    ///
    /// # Errors
    ///
    /// - [`SchedulerError::Config`] if the configuration is inconsistent, or
    ///   if the `num_threads` pool cannot be created.
    /// - [`SchedulerError::TableMismatch`] if the table was built for a
    ///   different number of start-time bins or frequency outcomes.
    pub fn build(self) -> SchedulerResult<Scheduler<T, L>> {
        self.config.validate()?;
        let quanta = self.config.start_time_quanta as usize;
        if self.table.quanta() != quanta {
            return Err(SchedulerError::TableMismatch {
                what:     "start-time quanta",
                expected: quanta,
                got:      self.table.quanta(),
            });
        }
        if self.table.max_frequency() != self.config.max_frequency {
            return Err(SchedulerError::TableMismatch {
                what:     "maximum frequency",
                expected: self.config.max_frequency as usize,
                got:      self.table.max_frequency() as usize,
            });
        }

        let adults = self.adults.unwrap_or_else(|| {
            let outcomes = self.config.adult_frequencies as usize;
            AdultDistributions::new(vec![vec![1.0; outcomes]; ADULT_DISTRIBUTION_ROWS])
        });

        #[cfg(feature = "parallel")]
        let pool = self
            .config
            .num_threads
            .map(|n| rayon::ThreadPoolBuilder::new().num_threads(n).build())
            .transpose()
            .map_err(|e| hs_core::CoreError::Config(format!("thread pool: {e}")))?;

        let context = SchedulerContext {
            config: self.config,
            table: self.table,
            adults,
            travel: self.travel,
            location: self.location,
        };
        let scheduler = Scheduler::new(context);
        #[cfg(feature = "parallel")]
        let scheduler = scheduler.with_pool(pool);
        Ok(scheduler)
    }
}
