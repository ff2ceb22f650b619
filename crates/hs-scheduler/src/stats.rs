//! Process-wide tallies shared by every household worker.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters updated concurrently by household workers.
///
/// Integer counts are atomics.  The expansion-weighted skipped-episode
/// total is a float and sits behind a `Mutex`.
#[derive(Debug, Default)]
pub struct SchedulerStats {
    households_scheduled:  AtomicU64,
    households_failed:     AtomicU64,
    episodes_generated:    AtomicU64,
    occurrences_abandoned: AtomicU64,
    infeasible_samples:    AtomicU64,
    episodes_skipped:      AtomicU64,
    skipped_weight:        Mutex<f64>,
}

/// Point-in-time copy of [`SchedulerStats`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsSnapshot {
    /// Household iterations that completed.
    pub households_scheduled:  u64,
    /// Household iterations that ended in a fatal error.
    pub households_failed:     u64,
    /// Episodes accepted into a project schedule.
    pub episodes_generated:    u64,
    /// Occurrences given up after the attempt cap.
    pub occurrences_abandoned: u64,
    /// Sampling draws that came back infeasible.
    pub infeasible_samples:    u64,
    /// Project episodes that could not be merged into a person's day.
    pub episodes_skipped:      u64,
    /// `episodes_skipped` weighted by each person's expansion factor.
    pub skipped_weight:        f64,
}

impl SchedulerStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_scheduled(&self) {
        self.households_scheduled.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_failed(&self) {
        self.households_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_generated(&self) {
        self.episodes_generated.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_abandoned(&self) {
        self.occurrences_abandoned.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_infeasible(&self) {
        self.infeasible_samples.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_skipped(&self, expansion_factor: f32) {
        self.episodes_skipped.fetch_add(1, Ordering::Relaxed);
        let mut weight = self.skipped_weight.lock().unwrap_or_else(|e| e.into_inner());
        *weight += f64::from(expansion_factor);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            households_scheduled:  self.households_scheduled.load(Ordering::Relaxed),
            households_failed:     self.households_failed.load(Ordering::Relaxed),
            episodes_generated:    self.episodes_generated.load(Ordering::Relaxed),
            occurrences_abandoned: self.occurrences_abandoned.load(Ordering::Relaxed),
            infeasible_samples:    self.infeasible_samples.load(Ordering::Relaxed),
            episodes_skipped:      self.episodes_skipped.load(Ordering::Relaxed),
            skipped_weight:        *self.skipped_weight.lock().unwrap_or_else(|e| e.into_inner()),
        }
    }
}
