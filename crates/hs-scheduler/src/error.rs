use hs_core::{Activity, CoreError, HouseholdId, PersonId};
use hs_distribution::DistributionError;
use hs_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("scheduler configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("distribution table {what} is {got}, configuration expects {expected}")]
    TableMismatch {
        what:     &'static str,
        expected: usize,
        got:      usize,
    },

    #[error("distribution error: {0}")]
    Distribution(#[from] DistributionError),

    #[error("household {household}: person {person} works outside the home but has no workplace")]
    MissingEmploymentZone {
        household: HouseholdId,
        person:    PersonId,
    },

    #[error("person {person}, {activity}: {source}")]
    Schedule {
        person:   PersonId,
        activity: Activity,
        #[source]
        source:   ScheduleError,
    },

    #[error("household {household} (iteration {iteration}): {source}")]
    Household {
        household: HouseholdId,
        iteration: u32,
        #[source]
        source:    Box<SchedulerError>,
    },
}

pub type SchedulerResult<T> = Result<T, SchedulerError>;
