//! Spatial calibration of the generation rates.
//!
//! An adjustment multiplies the weights of a set of distribution ids for
//! persons living (and optionally working) in given districts.  The base
//! tables are never modified; factors are applied while the cumulative sums
//! are built, on every call.

use hs_core::{DistributionId, DistrictId, Time};

fn district_matches(filter: Option<DistrictId>, actual: Option<DistrictId>) -> bool {
    match filter {
        None => true,
        Some(d) => actual == Some(d),
    }
}

// ── GenerationAdjustment ──────────────────────────────────────────────────────

/// Scales how often an activity happens.
///
/// The factor multiplies the weights of every frequency outcome ≥ 1, so it
/// shifts mass between "no episode" and "some episodes".
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationAdjustment {
    pub distribution_ids:   Vec<DistributionId>,
    /// `None` matches every household district.
    pub household_district: Option<DistrictId>,
    /// `None` matches every work district (and non-workers).
    pub work_district:      Option<DistrictId>,
    pub factor:             f32,
}

impl GenerationAdjustment {
    pub fn applies_to(
        &self,
        id: DistributionId,
        household_district: Option<DistrictId>,
        work_district: Option<DistrictId>,
    ) -> bool {
        self.distribution_ids.contains(&id)
            && district_matches(self.household_district, household_district)
            && district_matches(self.work_district, work_district)
    }
}

// ── StartTimeAdjustment ───────────────────────────────────────────────────────

/// Scales the start-time weights of bins whose first minute lies in
/// `[start, end)`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartTimeAdjustment {
    pub distribution_ids:   Vec<DistributionId>,
    pub household_district: Option<DistrictId>,
    pub work_district:      Option<DistrictId>,
    pub start:              Time,
    pub end:                Time,
    pub factor:             f32,
}

impl StartTimeAdjustment {
    pub fn applies_to(
        &self,
        id: DistributionId,
        household_district: Option<DistrictId>,
        work_district: Option<DistrictId>,
    ) -> bool {
        self.distribution_ids.contains(&id)
            && district_matches(self.household_district, household_district)
            && district_matches(self.work_district, work_district)
    }
}

// ── Adjustments ───────────────────────────────────────────────────────────────

/// All adjustments of a run.  Empty by default (every factor is 1).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Adjustments {
    pub generation: Vec<GenerationAdjustment>,
    pub start_time: Vec<StartTimeAdjustment>,
}

impl Adjustments {
    /// Product of every matching generation factor.
    pub fn generation_factor(
        &self,
        id: DistributionId,
        household_district: Option<DistrictId>,
        work_district: Option<DistrictId>,
    ) -> f32 {
        self.generation
            .iter()
            .filter(|a| a.applies_to(id, household_district, work_district))
            .map(|a| a.factor)
            .product()
    }

    /// The start-time windows that apply to one (id, geography) pair.
    pub fn start_time_profile(
        &self,
        id: DistributionId,
        household_district: Option<DistrictId>,
        work_district: Option<DistrictId>,
    ) -> StartTimeProfile<'_> {
        StartTimeProfile {
            windows: self
                .start_time
                .iter()
                .filter(|a| a.applies_to(id, household_district, work_district))
                .collect(),
        }
    }
}

/// Start-time factors for one sampling call.
#[derive(Clone, Debug, Default)]
pub struct StartTimeProfile<'a> {
    windows: Vec<&'a StartTimeAdjustment>,
}

impl StartTimeProfile<'_> {
    /// A profile with every factor equal to 1.
    pub fn neutral() -> StartTimeProfile<'static> {
        StartTimeProfile { windows: Vec::new() }
    }

    #[inline]
    pub fn is_neutral(&self) -> bool {
        self.windows.is_empty()
    }

    /// Factor for a bin starting at `time`.
    pub fn factor(&self, time: Time) -> f32 {
        self.windows
            .iter()
            .filter(|w| w.start <= time && time < w.end)
            .map(|w| w.factor)
            .product()
    }
}
