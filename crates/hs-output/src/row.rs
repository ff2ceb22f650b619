//! Plain data row types written by output backends.
//!
//! Times are minutes since midnight of the survey day, so values past 1440
//! are the early hours of the following morning.

use hs_core::Activity;
use hs_scheduler::{HouseholdSchedule, StatsSnapshot};

/// One trip of one person's day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripRow {
    pub household:      u32,
    pub iteration:      u32,
    pub person:         u32,
    /// Chain index within the person's day.
    pub chain:          u32,
    /// Trip index within the chain.
    pub trip:           u32,
    pub purpose:        Activity,
    pub origin:         u32,
    pub destination:    u32,
    pub start:          i32,
    pub duration:       i32,
    pub joint_tour:     Option<u32>,
    pub representative: bool,
}

impl TripRow {
    /// Flatten every chain of every member, in household order.
    pub fn from_schedule(schedule: &HouseholdSchedule) -> Vec<TripRow> {
        let mut rows = Vec::with_capacity(schedule.trip_count());
        for day in &schedule.persons {
            for (c, chain) in day.chains.iter().enumerate() {
                for (t, trip) in chain.trips.iter().enumerate() {
                    rows.push(TripRow {
                        household:      schedule.household.0,
                        iteration:      schedule.iteration,
                        person:         day.person.0,
                        chain:          c as u32,
                        trip:           t as u32,
                        purpose:        trip.purpose,
                        origin:         trip.origin.0,
                        destination:    trip.destination.0,
                        start:          trip.start.as_minutes(),
                        duration:       trip.duration.as_minutes(),
                        joint_tour:     chain.joint_tour,
                        representative: chain.representative,
                    });
                }
            }
        }
        rows
    }
}

/// One episode of one person's merged day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeRow {
    pub household: u32,
    pub iteration: u32,
    pub person:    u32,
    pub activity:  Activity,
    pub start:     i32,
    pub end:       i32,
    /// `None` only for episodes that were never located.
    pub zone:      Option<u32>,
    pub joint:     bool,
}

impl EpisodeRow {
    pub fn from_schedule(schedule: &HouseholdSchedule) -> Vec<EpisodeRow> {
        let mut rows = Vec::with_capacity(schedule.episode_count());
        for day in &schedule.persons {
            for ep in day.schedule.schedule().iter() {
                rows.push(EpisodeRow {
                    household: schedule.household.0,
                    iteration: schedule.iteration,
                    person:    day.person.0,
                    activity:  ep.activity(),
                    start:     ep.start().as_minutes(),
                    end:       ep.end().as_minutes(),
                    zone:      ep.zone().map(|z| z.0),
                    joint:     ep.is_joint(),
                });
            }
        }
        rows
    }
}

/// Final tallies of one scheduler run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummaryRow {
    pub households_scheduled:  u64,
    pub households_failed:     u64,
    pub episodes_generated:    u64,
    pub occurrences_abandoned: u64,
    pub infeasible_samples:    u64,
    pub episodes_skipped:      u64,
    pub skipped_weight:        f64,
}

impl From<&StatsSnapshot> for RunSummaryRow {
    fn from(s: &StatsSnapshot) -> Self {
        Self {
            households_scheduled:  s.households_scheduled,
            households_failed:     s.households_failed,
            episodes_generated:    s.episodes_generated,
            occurrences_abandoned: s.occurrences_abandoned,
            infeasible_samples:    s.infeasible_samples,
            episodes_skipped:      s.episodes_skipped,
            skipped_weight:        s.skipped_weight,
        }
    }
}
