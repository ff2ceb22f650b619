//! Location-choice collaborator.
//!
//! Called once an episode's time window is known and before it is committed
//! to a person's schedule.  Returning `None` makes that insertion attempt
//! fail; it is not an error.

use hs_core::{HouseholdRng, ZoneId};
use hs_household::Person;

use crate::Episode;

/// Pluggable zone assignment.
///
/// # Contract
///
/// - Must be deterministic given the same `rng` state.
/// - Must not block or perform I/O.
/// - Implementations must be `Send + Sync` (shared across Rayon threads).
pub trait LocationChoice: Send + Sync {
    fn choose_zone(
        &self,
        episode: &Episode,
        person: &Person,
        home_zone: ZoneId,
        rng: &mut HouseholdRng,
    ) -> Option<ZoneId>;
}

impl<L: LocationChoice + ?Sized> LocationChoice for &L {
    #[inline]
    fn choose_zone(&self, episode: &Episode, person: &Person, home_zone: ZoneId, rng: &mut HouseholdRng) -> Option<ZoneId> {
        (**self).choose_zone(episode, person, home_zone, rng)
    }
}

// ── HomeLocation ──────────────────────────────────────────────────────────────

/// Every episode happens in the home zone.
pub struct HomeLocation;

impl LocationChoice for HomeLocation {
    #[inline]
    fn choose_zone(&self, _episode: &Episode, _person: &Person, home_zone: ZoneId, _rng: &mut HouseholdRng) -> Option<ZoneId> {
        Some(home_zone)
    }
}

// ── UniformZones ──────────────────────────────────────────────────────────────

/// Picks uniformly among a fixed list of zones.  An empty list makes every
/// choice infeasible.
pub struct UniformZones {
    zones: Vec<ZoneId>,
}

impl UniformZones {
    pub fn new(zones: Vec<ZoneId>) -> Self {
        Self { zones }
    }
}

impl LocationChoice for UniformZones {
    fn choose_zone(&self, _episode: &Episode, _person: &Person, _home_zone: ZoneId, rng: &mut HouseholdRng) -> Option<ZoneId> {
        rng.choose(&self.zones).copied()
    }
}
