//! Joint household activities.

use hs_core::{Activity, PersonId};
use hs_distribution::{adult_distribution, fixed_adult_count, household_distribution};
use hs_schedule::{Episode, LocationChoice, ProjectKind, TravelTime};

use crate::SchedulerResult;
use crate::pass::HouseholdPass;

impl<T: TravelTime, L: LocationChoice> HouseholdPass<'_, T, L> {
    /// Generate `activity` (joint other or joint market) for the household.
    ///
    /// Each occurrence draws a window and an adult count, then takes the
    /// first eligible adults in household order: old enough, and with a
    /// work/school window that does not overlap the occurrence.
    pub(crate) fn generate_joint(&mut self, activity: Activity) -> SchedulerResult<()> {
        let household = self.household;
        if household.size() < 2 || household.adults() == 0 {
            return Ok(());
        }
        let ctx = self.ctx;
        let config = &ctx.config;
        let status = self.projects.household_status(config);
        let Some(id) = household_distribution(household, activity, status) else {
            return Ok(());
        };
        let kind = if activity == Activity::JointMarket { ProjectKind::JointMarket } else { ProjectKind::JointOther };
        let tt = self.household_timetable(id);
        let day = (config.day_start, config.day_end);
        let frequency = tt.frequency(self.table().max_frequency(), Some(day), &mut self.rng)?;

        for _ in 0..frequency {
            self.place(0, kind, |rng, projects, _| {
                let Some(start) = tt.start(frequency, day, rng)? else { return Ok(None) };
                let Some(duration) = tt.duration(start, None, rng)? else { return Ok(None) };
                let end = start + duration;

                let wanted = match fixed_adult_count(household) {
                    Some(n) => n,
                    None => {
                        let Some(row) = adult_distribution(household, activity) else { return Ok(None) };
                        let Some(n) = ctx.adults.sample(row, household.adults(), rng)? else { return Ok(None) };
                        n
                    }
                };
                let owners: Vec<PersonId> = household
                    .persons
                    .iter()
                    .zip(&projects.persons)
                    .filter(|(p, _)| p.age >= config.min_joint_adult_age)
                    .filter(|(_, own)| own.work_school_window().is_none_or(|(s, e)| s > end || e < start))
                    .map(|(p, _)| p.id)
                    .take(wanted)
                    .collect();
                if wanted == 0 || owners.len() < wanted {
                    return Ok(None);
                }
                Ok(Some(Episode::joint(activity, start, duration, owners)))
            })?;
        }
        Ok(())
    }
}
