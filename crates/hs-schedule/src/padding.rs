//! Non-compressible travel padding between consecutive episodes.
//!
//! Project schedules use [`NoPadding`]: their episodes are not yet located.
//! Person schedules use [`TravelPadding`], which asks the travel-time
//! provider for the trip between the episodes' zones.

use hs_core::{PersonId, Time, ZoneId};

use crate::{Episode, TravelTime};

pub trait Padding {
    /// Travel needed between the end of `from` and the start of `to`.
    fn gap(&self, from: &Episode, to: &Episode) -> Time;

    /// Travel from home to the first episode of the day.
    fn lead(&self, first: &Episode) -> Time;

    /// Travel home after the last episode of the day.
    fn tail(&self, last: &Episode) -> Time;
}

/// Zero padding everywhere.
pub struct NoPadding;

impl Padding for NoPadding {
    #[inline]
    fn gap(&self, _from: &Episode, _to: &Episode) -> Time {
        Time::ZERO
    }

    #[inline]
    fn lead(&self, _first: &Episode) -> Time {
        Time::ZERO
    }

    #[inline]
    fn tail(&self, _last: &Episode) -> Time {
        Time::ZERO
    }
}

/// Travel-time padding for one person.  Episodes without a zone are taken
/// to be at home.
pub struct TravelPadding<'a, T: TravelTime + ?Sized> {
    pub travel: &'a T,
    pub person: PersonId,
    pub home:   ZoneId,
}

impl<T: TravelTime + ?Sized> TravelPadding<'_, T> {
    #[inline]
    fn zone_of(&self, ep: &Episode) -> ZoneId {
        ep.zone().unwrap_or(self.home)
    }
}

impl<T: TravelTime + ?Sized> Padding for TravelPadding<'_, T> {
    fn gap(&self, from: &Episode, to: &Episode) -> Time {
        self.travel
            .travel_time(self.person, self.zone_of(from), self.zone_of(to), from.end())
            .non_negative()
    }

    fn lead(&self, first: &Episode) -> Time {
        self.travel
            .travel_time(self.person, self.home, self.zone_of(first), first.start())
            .non_negative()
    }

    fn tail(&self, last: &Episode) -> Time {
        self.travel
            .travel_time(self.person, self.zone_of(last), self.home, last.end())
            .non_negative()
    }
}
