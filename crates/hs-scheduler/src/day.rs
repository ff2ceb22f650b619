//! Per-household results.

use hs_core::{HouseholdId, PersonId};
use hs_schedule::{PersonSchedule, TripChain};

/// One person's merged day and the trip chains walked from it.
#[derive(Clone, Debug)]
pub struct PersonDay {
    pub person:   PersonId,
    pub schedule: PersonSchedule,
    pub chains:   Vec<TripChain>,
}

impl PersonDay {
    pub fn trip_count(&self) -> usize {
        self.chains.iter().map(TripChain::len).sum()
    }
}

/// Result of one pipeline run for one household.
#[derive(Clone, Debug)]
pub struct HouseholdSchedule {
    pub household: HouseholdId,
    pub iteration: u32,
    /// One entry per member, in household order.
    pub persons:   Vec<PersonDay>,
}

impl HouseholdSchedule {
    pub fn episode_count(&self) -> usize {
        self.persons.iter().map(|p| p.schedule.len()).sum()
    }

    pub fn trip_count(&self) -> usize {
        self.persons.iter().map(PersonDay::trip_count).sum()
    }

    /// Distinct joint tours linked across members.
    pub fn joint_tour_count(&self) -> usize {
        self.persons
            .iter()
            .flat_map(|p| &p.chains)
            .filter(|c| c.representative)
            .count()
    }
}
