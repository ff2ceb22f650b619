//! Person attributes referenced by the distribution-id resolver and the
//! generation rules.

use hs_core::{DistrictId, PersonId, ZoneId};

// ── Demographic enums ─────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    Male,
    Female,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EmploymentStatus {
    NotEmployed,
    FullTime,
    PartTime,
    WorkAtHomeFullTime,
    WorkAtHomePartTime,
    Unknown,
}

impl EmploymentStatus {
    /// Works outside the home on a regular schedule.
    #[inline]
    pub fn is_regular_worker(self) -> bool {
        matches!(self, EmploymentStatus::FullTime | EmploymentStatus::PartTime)
    }

    #[inline]
    pub fn works_at_home(self) -> bool {
        matches!(self, EmploymentStatus::WorkAtHomeFullTime | EmploymentStatus::WorkAtHomePartTime)
    }

    #[inline]
    pub fn is_full_time(self) -> bool {
        matches!(self, EmploymentStatus::FullTime | EmploymentStatus::WorkAtHomeFullTime)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupation {
    NotEmployed,
    Office,
    Manufacturing,
    Professional,
    Retail,
    Unknown,
}

impl Occupation {
    /// Position of an employed occupation in the resolver tables, or `None`
    /// for `NotEmployed`/`Unknown`.
    pub fn table_index(self) -> Option<u16> {
        match self {
            Occupation::Office        => Some(0),
            Occupation::Manufacturing => Some(1),
            Occupation::Professional  => Some(2),
            Occupation::Retail        => Some(3),
            Occupation::NotEmployed | Occupation::Unknown => None,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StudentStatus {
    NotStudent,
    FullTime,
    PartTime,
    Unknown,
}

impl StudentStatus {
    #[inline]
    pub fn is_student(self) -> bool {
        matches!(self, StudentStatus::FullTime | StudentStatus::PartTime)
    }
}

/// Where a worker works.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Workplace {
    /// A fixed employment zone.
    Zone(ZoneId),
    /// No fixed workplace; only work-based business is generated, located
    /// through location choice.
    Roaming,
}

impl Workplace {
    #[inline]
    pub fn zone(self) -> Option<ZoneId> {
        match self {
            Workplace::Zone(z) => Some(z),
            Workplace::Roaming => None,
        }
    }
}

// ── Person ────────────────────────────────────────────────────────────────────

/// One household member.  Read-only during scheduling.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    pub id: PersonId,
    pub age: u8,
    pub gender: Gender,
    pub employment: EmploymentStatus,
    pub occupation: Occupation,
    pub student: StudentStatus,
    pub workplace: Option<Workplace>,
    pub school_zone: Option<ZoneId>,
    /// District of the workplace, for generation adjustments.
    pub work_district: Option<DistrictId>,
    /// Survey weight; skipped episodes are tallied in these units.
    pub expansion_factor: f32,
}

impl Person {
    #[inline]
    pub fn is_female(&self) -> bool {
        self.gender == Gender::Female
    }

    #[inline]
    pub fn is_adult(&self) -> bool {
        self.age >= crate::ADULT_AGE
    }

    /// Full-time student holding a part-time job.  Their school day takes
    /// precedence over work when the day is merged.
    #[inline]
    pub fn is_student_first(&self) -> bool {
        self.student == StudentStatus::FullTime && self.employment == EmploymentStatus::PartTime
    }
}
