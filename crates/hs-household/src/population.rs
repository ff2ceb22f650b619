//! Owning store of all households in a run.

use hs_core::HouseholdId;
use rustc_hash::FxHashMap;

use crate::{Household, HouseholdError, HouseholdResult};

/// All households of a run, in input order, with an id index.
#[derive(Clone, Debug, Default)]
pub struct Population {
    households: Vec<Household>,
    index:      FxHashMap<HouseholdId, usize>,
}

impl Population {
    /// Build from a list of households.  Household ids must be unique.
    pub fn new(households: Vec<Household>) -> HouseholdResult<Self> {
        let mut index = FxHashMap::default();
        index.reserve(households.len());
        for (i, h) in households.iter().enumerate() {
            if index.insert(h.id, i).is_some() {
                return Err(HouseholdError::DuplicateHousehold(h.id));
            }
        }
        Ok(Self { households, index })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.households.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.households.is_empty()
    }

    pub fn get(&self, id: HouseholdId) -> Option<&Household> {
        self.index.get(&id).map(|&i| &self.households[i])
    }

    pub fn households(&self) -> &[Household] {
        &self.households
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Household> {
        self.households.iter()
    }

    pub fn person_count(&self) -> usize {
        self.households.iter().map(Household::size).sum()
    }
}
