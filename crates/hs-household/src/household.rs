//! The household: a home zone plus its members.

use hs_core::{DistrictId, HouseholdId, PersonId, ZoneId};

use crate::Person;

/// Persons at least this old count as adults.
pub const ADULT_AGE: u8 = 16;

/// One household.  Construct with [`HouseholdBuilder`][crate::HouseholdBuilder].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Household {
    pub id: HouseholdId,
    pub home_zone: ZoneId,
    pub home_district: Option<DistrictId>,
    /// Members, in input order.  Person ids are unique within the household.
    pub persons: Vec<Person>,
}

impl Household {
    #[inline]
    pub fn size(&self) -> usize {
        self.persons.len()
    }

    pub fn adults(&self) -> usize {
        self.persons.iter().filter(|p| p.is_adult()).count()
    }

    pub fn children(&self) -> usize {
        self.size() - self.adults()
    }

    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.persons.iter().find(|p| p.id == id)
    }

    /// Position of `id` in `persons`.
    pub fn position_of(&self, id: PersonId) -> Option<usize> {
        self.persons.iter().position(|p| p.id == id)
    }

    /// Household weight, taken from the first member.
    pub fn expansion_factor(&self) -> f32 {
        self.persons.first().map_or(1.0, |p| p.expansion_factor)
    }
}
