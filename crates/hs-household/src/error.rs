use thiserror::Error;

use hs_core::{HouseholdId, PersonId};

#[derive(Debug, Error)]
pub enum HouseholdError {
    #[error("household {0} has no members")]
    Empty(HouseholdId),

    #[error("household {household} lists person {person} twice")]
    DuplicatePerson {
        household: HouseholdId,
        person:    PersonId,
    },

    #[error("household {0} has no home zone")]
    MissingHomeZone(HouseholdId),

    #[error("household {0} appears twice in the population")]
    DuplicateHousehold(HouseholdId),
}

pub type HouseholdResult<T> = Result<T, HouseholdError>;
