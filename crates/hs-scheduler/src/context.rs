//! Read-only inputs shared by every household worker.

use hs_core::SchedulerConfig;
use hs_distribution::{AdultDistributions, DistributionTable};

/// Everything a household pass reads and nothing it writes.
///
/// Built once by [`SchedulerBuilder`][crate::SchedulerBuilder]; shared by
/// reference across threads.  `T` and `L` are the travel-time and
/// location-choice collaborators.
pub struct SchedulerContext<T, L> {
    pub config:   SchedulerConfig,
    pub table:    DistributionTable,
    pub adults:   AdultDistributions,
    pub travel:   T,
    pub location: L,
}
