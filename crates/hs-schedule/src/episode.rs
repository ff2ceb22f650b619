//! The atomic schedule unit.
//!
//! An episode's identity (activity, owners, original duration) is fixed at
//! creation.  Its timing is mutable, but only the schedule that holds it may
//! move or resize it, and only through the conflict resolver.

use hs_core::{Activity, PersonId, Time, ZoneId};

/// One scheduled activity occurrence.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Episode {
    activity:          Activity,
    start:             Time,
    end:               Time,
    original_duration: Time,
    owners:            Vec<PersonId>,
    zone:              Option<ZoneId>,
    travel_time:       Time,
}

impl Episode {
    /// An individual episode owned by `owner`.
    pub fn new(activity: Activity, start: Time, duration: Time, owner: PersonId) -> Self {
        Self::joint(activity, start, duration, vec![owner])
    }

    /// An episode shared by `owners` (a joint household episode, or a
    /// participant's copy of one).
    pub fn joint(activity: Activity, start: Time, duration: Time, owners: Vec<PersonId>) -> Self {
        let duration = duration.non_negative();
        Self {
            activity,
            start,
            end: start + duration,
            original_duration: duration,
            owners,
            zone: None,
            travel_time: Time::ZERO,
        }
    }

    /// Builder-style zone assignment.
    pub fn with_zone(mut self, zone: ZoneId) -> Self {
        self.zone = Some(zone);
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn activity(&self) -> Activity {
        self.activity
    }

    #[inline]
    pub fn start(&self) -> Time {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Time {
        self.end
    }

    #[inline]
    pub fn duration(&self) -> Time {
        self.end - self.start
    }

    /// Duration at creation; the reference for every shrink floor.
    #[inline]
    pub fn original_duration(&self) -> Time {
        self.original_duration
    }

    /// Shortest duration the resolver may compress this episode to.
    #[inline]
    pub fn floor(&self, overlap_allowed: f32) -> Time {
        self.original_duration.scale_ceil(overlap_allowed)
    }

    #[inline]
    pub fn owners(&self) -> &[PersonId] {
        &self.owners
    }

    /// First owner.  For a joint episode this is the participant whose
    /// insertion chose the zone.
    #[inline]
    pub fn owner(&self) -> PersonId {
        self.owners.first().copied().unwrap_or(PersonId::INVALID)
    }

    #[inline]
    pub fn is_joint(&self) -> bool {
        self.owners.len() > 1
    }

    #[inline]
    pub fn zone(&self) -> Option<ZoneId> {
        self.zone
    }

    pub fn set_zone(&mut self, zone: Option<ZoneId>) {
        self.zone = zone;
    }

    /// Travel time from this episode to the next one (or home).
    #[inline]
    pub fn travel_time(&self) -> Time {
        self.travel_time
    }

    /// `true` if the two episodes share any minute.
    pub fn overlaps(&self, other: &Episode) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Minutes shared with `[start, end)`.
    pub fn overlap_with(&self, start: Time, end: Time) -> Time {
        (self.end.min(end) - self.start.max(start)).non_negative()
    }

    // ── Timing mutation (crate-internal) ──────────────────────────────────

    pub(crate) fn set_window(&mut self, start: Time, end: Time) {
        self.start = start;
        self.end = end;
    }

    pub(crate) fn set_travel_time(&mut self, travel_time: Time) {
        self.travel_time = travel_time;
    }

    /// A split fragment becomes its own episode: its original duration is
    /// the fragment's length.
    pub(crate) fn rebase(&mut self) {
        self.original_duration = self.duration();
    }
}
