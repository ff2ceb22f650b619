//! Shape of a person's (and household's) work/school day.
//!
//! The status is derived from the work and school projects once they are
//! generated and feeds the distribution ids of the individual and joint
//! activities.

use hs_core::Time;

/// A span ending by this time leaves the evening free.
const NO_EVENING_END: Time = Time::hm(14, 0);
/// A span starting at or after this time is an evening span.
const EVENING_START: Time = Time::hm(9, 0);
/// A part-time span ending by this time is a morning span.
const PART_TIME_DAY_END: Time = Time::hm(9, 0);

// ── PersonStatus ──────────────────────────────────────────────────────────────

/// Classification of one person's work/school window.
///
/// The discriminant is the offset used by the distribution-id resolver.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PersonStatus {
    NoWorkOrSchool = 0,
    FullTimeNoEvening = 1,
    FullTimeEvening = 2,
    FullTimeDayAndEvening = 3,
    PartTimeDay = 4,
    PartTimeEvening = 5,
    Other = 6,
}

impl PersonStatus {
    /// Classify a work/school window `(first start, end)`.
    ///
    /// `None`, or a window starting at or before `day_start`, means no work
    /// or school today.
    pub fn classify(window: Option<(Time, Time)>, day_start: Time, full_time: Time) -> PersonStatus {
        let Some((start, end)) = window else {
            return PersonStatus::NoWorkOrSchool;
        };
        if start <= day_start {
            return PersonStatus::NoWorkOrSchool;
        }
        if end - start >= full_time {
            if end <= NO_EVENING_END {
                PersonStatus::FullTimeNoEvening
            } else if start >= EVENING_START {
                PersonStatus::FullTimeEvening
            } else {
                PersonStatus::FullTimeDayAndEvening
            }
        } else if end <= PART_TIME_DAY_END {
            PersonStatus::PartTimeDay
        } else if end <= NO_EVENING_END {
            PersonStatus::PartTimeEvening
        } else {
            PersonStatus::Other
        }
    }

    #[inline]
    pub fn offset(self) -> u16 {
        self as u16
    }

    fn has_evening(self) -> bool {
        matches!(
            self,
            PersonStatus::FullTimeEvening | PersonStatus::FullTimeDayAndEvening | PersonStatus::Other
        )
    }

    fn has_morning(self) -> bool {
        matches!(
            self,
            PersonStatus::FullTimeNoEvening
                | PersonStatus::FullTimeDayAndEvening
                | PersonStatus::PartTimeDay
                | PersonStatus::PartTimeEvening
        )
    }
}

// ── HouseholdStatus ───────────────────────────────────────────────────────────

/// Aggregate of the members' [`PersonStatus`] values.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HouseholdStatus {
    NoWorkOrSchool = 0,
    NoEveningWorkOrSchool = 1,
    EveningWorkOrSchool = 2,
    DayAndEveningWorkOrSchool = 3,
}

impl HouseholdStatus {
    pub fn aggregate<I: IntoIterator<Item = PersonStatus>>(statuses: I) -> HouseholdStatus {
        let (mut any, mut evening, mut morning) = (false, false, false);
        for status in statuses {
            any |= status != PersonStatus::NoWorkOrSchool;
            evening |= status.has_evening();
            morning |= status.has_morning();
        }
        if !any {
            HouseholdStatus::NoWorkOrSchool
        } else if !evening {
            HouseholdStatus::NoEveningWorkOrSchool
        } else if !morning {
            HouseholdStatus::EveningWorkOrSchool
        } else {
            HouseholdStatus::DayAndEveningWorkOrSchool
        }
    }

    #[inline]
    pub fn offset(self) -> u16 {
        self as u16
    }
}
