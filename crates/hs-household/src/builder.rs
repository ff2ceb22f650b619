//! Fluent builders for [`Person`] and [`Household`].
//!
//! # Usage
//!
//! ```rust
//! use hs_core::{HouseholdId, PersonId, ZoneId};
//! use hs_household::{EmploymentStatus, HouseholdBuilder, Occupation, PersonBuilder, Workplace};
//!
//! let worker = PersonBuilder::new(PersonId(0), 40)
//!     .employment(EmploymentStatus::FullTime, Occupation::Office)
//!     .workplace(Workplace::Zone(ZoneId(12)))
//!     .build();
//!
//! let household = HouseholdBuilder::new(HouseholdId(1), ZoneId(3))
//!     .person(worker)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(household.adults(), 1);
//! ```

use hs_core::{DistrictId, HouseholdId, PersonId, ZoneId};
use rustc_hash::FxHashSet;

use crate::{
    EmploymentStatus, Gender, Household, HouseholdError, HouseholdResult, Occupation, Person,
    StudentStatus, Workplace,
};

// ── PersonBuilder ─────────────────────────────────────────────────────────────

/// Fluent builder for [`Person`].  Defaults to a male non-worker,
/// non-student with expansion factor 1.
pub struct PersonBuilder {
    person: Person,
}

impl PersonBuilder {
    pub fn new(id: PersonId, age: u8) -> Self {
        Self {
            person: Person {
                id,
                age,
                gender:           Gender::Male,
                employment:       EmploymentStatus::NotEmployed,
                occupation:       Occupation::NotEmployed,
                student:          StudentStatus::NotStudent,
                workplace:        None,
                school_zone:      None,
                work_district:    None,
                expansion_factor: 1.0,
            },
        }
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.person.gender = gender;
        self
    }

    pub fn female(self) -> Self {
        self.gender(Gender::Female)
    }

    pub fn employment(mut self, status: EmploymentStatus, occupation: Occupation) -> Self {
        self.person.employment = status;
        self.person.occupation = occupation;
        self
    }

    pub fn workplace(mut self, workplace: Workplace) -> Self {
        self.person.workplace = Some(workplace);
        self
    }

    pub fn work_district(mut self, district: DistrictId) -> Self {
        self.person.work_district = Some(district);
        self
    }

    /// Student status and, optionally, the school zone.  Students without a
    /// school zone attend school at home.
    pub fn student(mut self, status: StudentStatus, school_zone: Option<ZoneId>) -> Self {
        self.person.student = status;
        self.person.school_zone = school_zone;
        self
    }

    pub fn expansion_factor(mut self, factor: f32) -> Self {
        self.person.expansion_factor = factor;
        self
    }

    pub fn build(self) -> Person {
        self.person
    }
}

// ── HouseholdBuilder ──────────────────────────────────────────────────────────

/// Fluent builder for [`Household`].
pub struct HouseholdBuilder {
    id:            HouseholdId,
    home_zone:     ZoneId,
    home_district: Option<DistrictId>,
    persons:       Vec<Person>,
}

impl HouseholdBuilder {
    pub fn new(id: HouseholdId, home_zone: ZoneId) -> Self {
        Self { id, home_zone, home_district: None, persons: Vec::new() }
    }

    pub fn home_district(mut self, district: DistrictId) -> Self {
        self.home_district = Some(district);
        self
    }

    pub fn person(mut self, person: Person) -> Self {
        self.persons.push(person);
        self
    }

    pub fn persons<I: IntoIterator<Item = Person>>(mut self, persons: I) -> Self {
        self.persons.extend(persons);
        self
    }

    /// Validate and build.
    ///
    /// Fails if the household is empty, has no valid home zone, or lists the
    /// same person id twice.
    pub fn build(self) -> HouseholdResult<Household> {
        if self.persons.is_empty() {
            return Err(HouseholdError::Empty(self.id));
        }
        if !self.home_zone.is_valid() {
            return Err(HouseholdError::MissingHomeZone(self.id));
        }
        let mut seen = FxHashSet::default();
        for p in &self.persons {
            if !seen.insert(p.id) {
                return Err(HouseholdError::DuplicatePerson { household: self.id, person: p.id });
            }
        }
        Ok(Household {
            id:            self.id,
            home_zone:     self.home_zone,
            home_district: self.home_district,
            persons:       self.persons,
        })
    }
}
