//! Travel-time collaborator.
//!
//! The scheduler never routes anything itself; it asks a [`TravelTime`]
//! provider, typically backed by pre-loaded network skims, how long a trip
//! takes.  Providers must be deterministic and side-effect free.

use hs_core::{PersonId, Time, ZoneId};
use rustc_hash::FxHashMap;

/// Pluggable travel-time lookup.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: one provider is shared by every
/// household worker.
pub trait TravelTime: Send + Sync {
    /// Time for `person` to travel from `origin` to `destination` when
    /// departing at `departure`.
    fn travel_time(&self, person: PersonId, origin: ZoneId, destination: ZoneId, departure: Time) -> Time;
}

impl<T: TravelTime + ?Sized> TravelTime for &T {
    #[inline]
    fn travel_time(&self, person: PersonId, origin: ZoneId, destination: ZoneId, departure: Time) -> Time {
        (**self).travel_time(person, origin, destination, departure)
    }
}

// ── ConstantTravelTime ────────────────────────────────────────────────────────

/// One time within a zone, another between zones.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstantTravelTime {
    pub intrazonal: Time,
    pub interzonal: Time,
}

impl TravelTime for ConstantTravelTime {
    #[inline]
    fn travel_time(&self, _person: PersonId, origin: ZoneId, destination: ZoneId, _departure: Time) -> Time {
        if origin == destination { self.intrazonal } else { self.interzonal }
    }
}

// ── TravelMatrix ──────────────────────────────────────────────────────────────

/// Zone-pair skim with a fallback for pairs that were not loaded.
/// Time of day is ignored.
#[derive(Clone, Debug, Default)]
pub struct TravelMatrix {
    times:    FxHashMap<(ZoneId, ZoneId), Time>,
    fallback: Time,
}

impl TravelMatrix {
    pub fn new(fallback: Time) -> Self {
        Self { times: FxHashMap::default(), fallback }
    }

    pub fn insert(&mut self, origin: ZoneId, destination: ZoneId, time: Time) -> &mut Self {
        self.times.insert((origin, destination), time);
        self
    }

    /// Insert the same time in both directions.
    pub fn insert_symmetric(&mut self, a: ZoneId, b: ZoneId, time: Time) -> &mut Self {
        self.insert(a, b, time).insert(b, a, time)
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

impl TravelTime for TravelMatrix {
    fn travel_time(&self, _person: PersonId, origin: ZoneId, destination: ZoneId, _departure: Time) -> Time {
        self.times.get(&(origin, destination)).copied().unwrap_or(self.fallback)
    }
}
