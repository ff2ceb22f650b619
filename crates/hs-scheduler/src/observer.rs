//! Run observer trait for progress reporting and output collection.

use hs_core::HouseholdId;

use crate::{HouseholdSchedule, SchedulerError, StatsSnapshot};

/// Callbacks invoked by [`Scheduler::run`][crate::Scheduler::run].
///
/// All methods have default no-op implementations.  Hooks are always called
/// from the thread that called `run`, in household order, even when the
/// households were scheduled in parallel.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct Progress { done: usize }
///
/// impl RunObserver for Progress {
///     fn on_household(&mut self, _schedule: &HouseholdSchedule) {
///         self.done += 1;
///         if self.done % 10_000 == 0 {
///             println!("{} household iterations", self.done);
///         }
///     }
/// }
/// ```
pub trait RunObserver {
    /// Called once before the first household.
    fn on_run_start(&mut self, _households: usize, _iterations: u32) {}

    /// Called for every household iteration that completed.
    fn on_household(&mut self, _schedule: &HouseholdSchedule) {}

    /// Called for every household iteration that failed fatally while the run
    /// continues.
    fn on_household_failed(&mut self, _household: HouseholdId, _iteration: u32, _error: &SchedulerError) {}

    /// Called once after the last household.
    fn on_run_end(&mut self, _stats: &StatsSnapshot) {}
}

/// A [`RunObserver`] that does nothing.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
