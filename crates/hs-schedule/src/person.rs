//! A person's merged, located and travel-padded day.

use std::ops::Deref;

use hs_core::{Activity, HouseholdRng, PersonId, SchedulerConfig, Time, ZoneId};
use hs_household::Person;
use tracing::debug;

use crate::{
    DayBounds, Episode, InsertOutcome, LocationChoice, Rejection, Schedule, ScheduleResult, TravelPadding,
    TravelTime,
};

/// Final per-person timeline.  Every episode has a zone; travel time between
/// consecutive episodes is kept free and recorded on the earlier episode.
#[derive(Clone, Debug)]
pub struct PersonSchedule {
    person:    PersonId,
    home_zone: ZoneId,
    schedule:  Schedule,
}

impl PersonSchedule {
    pub fn new(person: PersonId, home_zone: ZoneId, config: &SchedulerConfig) -> Self {
        Self::with_bounds(person, home_zone, DayBounds::from_config(config))
    }

    pub fn with_bounds(person: PersonId, home_zone: ZoneId, bounds: DayBounds) -> Self {
        Self { person, home_zone, schedule: Schedule::new(bounds) }
    }

    #[inline]
    pub fn person(&self) -> PersonId {
        self.person
    }

    #[inline]
    pub fn home_zone(&self) -> ZoneId {
        self.home_zone
    }

    #[inline]
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Insert `ep`.  An episode without a zone is located first; no zone
    /// rejects the attempt.  Splits are never legal at this stage.
    pub fn insert<T, L>(
        &mut self,
        mut ep: Episode,
        person: &Person,
        travel: &T,
        location: &L,
        rng: &mut HouseholdRng,
    ) -> ScheduleResult<InsertOutcome>
    where
        T: TravelTime + ?Sized,
        L: LocationChoice + ?Sized,
    {
        if ep.zone().is_none() {
            match location.choose_zone(&ep, person, self.home_zone, rng) {
                Some(zone) => ep.set_zone(Some(zone)),
                None => {
                    debug!(person = %self.person, activity = %ep.activity(), "no location");
                    return Ok(InsertOutcome::Rejected(Rejection::NoLocation));
                }
            }
        }
        self.insert_located(ep, travel)
    }

    /// Insert an episode whose zone is already fixed (a joint copy, or an
    /// at-home activity).  Unlocated episodes are taken to be at home.
    pub fn insert_located<T: TravelTime + ?Sized>(&mut self, ep: Episode, travel: &T) -> ScheduleResult<InsertOutcome> {
        let pad = TravelPadding { travel, person: self.person, home: self.home_zone };
        let outcome = self.schedule.insert_with(ep, &pad, false)?;
        if outcome.is_inserted() {
            self.schedule.refresh_travel(&pad);
        }
        Ok(outcome)
    }

    /// Drop primary-work episodes shorter than `min`.  Returns how many were
    /// removed.
    pub fn remove_short_work(&mut self, min: Time) -> usize {
        let before = self.schedule.len();
        self.schedule
            .retain(|e| e.activity() != Activity::PrimaryWork || e.duration() >= min);
        before - self.schedule.len()
    }

    /// Recompute travel times after episodes were removed.
    pub fn refresh_travel<T: TravelTime + ?Sized>(&mut self, travel: &T) {
        let pad = TravelPadding { travel, person: self.person, home: self.home_zone };
        self.schedule.refresh_travel(&pad);
    }

    /// Zone of episode `index`, falling back to home.
    pub fn zone_at(&self, index: usize) -> ZoneId {
        self.schedule
            .get(index)
            .and_then(Episode::zone)
            .unwrap_or(self.home_zone)
    }
}

impl Deref for PersonSchedule {
    type Target = Schedule;

    fn deref(&self) -> &Schedule {
        &self.schedule
    }
}
