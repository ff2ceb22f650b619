//! Trips and trip chains derived from a person's schedule.

use hs_core::{Activity, PersonId, Time, ZoneId};

/// One movement between zones.  `purpose` is the activity at the
/// destination ([`Activity::Home`] for trips home).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trip {
    pub purpose:     Activity,
    pub start:       Time,
    pub origin:      ZoneId,
    pub destination: ZoneId,
    /// Travel time of the trip.
    pub duration:    Time,
}

impl Trip {
    #[inline]
    pub fn arrival(&self) -> Time {
        self.start + self.duration
    }

    /// Same departure, purpose and zones, with a purpose that can be shared.
    pub fn is_joint_with(&self, other: &Trip) -> bool {
        self.purpose.is_joint_trip_purpose()
            && self.purpose == other.purpose
            && self.start == other.start
            && self.origin == other.origin
            && self.destination == other.destination
    }
}

/// A home-based sequence of trips.  Closed when its last trip goes home.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripChain {
    pub person:         PersonId,
    pub trips:          Vec<Trip>,
    /// Household-level joint tour number shared by linked chains.
    pub joint_tour:     Option<u32>,
    /// `true` for the chain that represents its joint tour.
    pub representative: bool,
}

impl TripChain {
    pub fn new(person: PersonId) -> Self {
        Self { person, trips: Vec::new(), joint_tour: None, representative: false }
    }

    pub fn push(&mut self, trip: Trip) {
        self.trips.push(trip);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn start_time(&self) -> Option<Time> {
        self.trips.first().map(|t| t.start)
    }

    pub fn end_time(&self) -> Option<Time> {
        self.trips.last().map(Trip::arrival)
    }

    pub fn is_closed(&self) -> bool {
        self.trips.last().is_some_and(|t| t.purpose == Activity::Home)
    }

    #[inline]
    pub fn is_joint(&self) -> bool {
        self.joint_tour.is_some()
    }

    /// Trip-by-trip exact match with another person's chain.
    pub fn matches(&self, other: &TripChain) -> bool {
        self.person != other.person
            && !self.trips.is_empty()
            && self.trips.len() == other.trips.len()
            && self.trips.iter().zip(&other.trips).all(|(a, b)| a.is_joint_with(b))
    }
}
