//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  Episodes, trips and schedules refer
//! to their owners through these ids rather than through live references.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline(always)]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Household identifier, also mixed into the household's RNG seed.
    pub struct HouseholdId(u32);
}

typed_id! {
    /// Person identifier.  Unique within a household; the scheduler never
    /// compares persons across households.
    pub struct PersonId(u32);
}

typed_id! {
    /// Traffic-analysis zone.
    pub struct ZoneId(u32);
}

typed_id! {
    /// Planning district a zone belongs to.  Used only to key generation
    /// adjustments.
    pub struct DistrictId(u16);
}

typed_id! {
    /// Row of the empirical distribution table.
    pub struct DistributionId(u16);
}

impl DistributionId {
    /// Offset an id by `n` rows.  Used by the resolver's offset tables.
    #[inline]
    pub fn offset(self, n: u16) -> DistributionId {
        DistributionId(self.0 + n)
    }
}
