//! Individual other and market activities.

use hs_core::Activity;
use hs_distribution::person_distribution;
use hs_schedule::{Episode, LocationChoice, ProjectKind, TravelTime};
use tracing::debug;

use crate::SchedulerResult;
use crate::pass::HouseholdPass;
use crate::timetable::Timetable;

impl<T: TravelTime, L: LocationChoice> HouseholdPass<'_, T, L> {
    /// Generate `activity` for member `index`.
    ///
    /// If an occurrence is abandoned the person's project for the activity
    /// is cleared and the frequency redrawn, once.
    pub(crate) fn generate_individual(&mut self, index: usize, activity: Activity) -> SchedulerResult<()> {
        let household = self.household;
        let person = &household.persons[index];
        let ctx = self.ctx;
        if person.age < ctx.config.min_individual_age {
            return Ok(());
        }
        let status = self.projects.persons[index].status(&ctx.config);
        let Some(id) = person_distribution(person, activity, status) else {
            return Ok(());
        };
        let kind = if activity == Activity::Market { ProjectKind::Market } else { ProjectKind::IndividualOther };
        let tt = self.person_timetable(id, person);

        if !self.individual_round(index, activity, kind, &tt)? {
            debug!(person = %person.id, %activity, "occurrence abandoned, regenerating");
            self.projects.project_mut(index, kind).clear();
            self.individual_round(index, activity, kind, &tt)?;
        }
        Ok(())
    }

    /// Draw a frequency and place every occurrence.  `false` as soon as one
    /// occurrence is abandoned.
    fn individual_round(
        &mut self,
        index: usize,
        activity: Activity,
        kind: ProjectKind,
        tt: &Timetable<'_>,
    ) -> SchedulerResult<bool> {
        let person = self.household.persons[index].id;
        let overlap_allowed = self.ctx.config.overlap_allowed;
        let frequency = tt.frequency(self.table().max_frequency(), None, &mut self.rng)?;

        for _ in 0..frequency {
            let placed = self.place(index, kind, |rng, projects, last| {
                let Some(start) = tt.start_any(frequency, rng)? else { return Ok(None) };
                let Some(duration) = tt.duration(start, None, rng)? else { return Ok(None) };
                let overlap = projects.persons[index].fixed_overlap(start, start + duration);
                let share = overlap.as_minutes() as f32 / duration.as_minutes().max(1) as f32;
                if share >= overlap_allowed && !last {
                    return Ok(None);
                }
                Ok(Some(Episode::new(activity, start, duration, person)))
            })?;
            if placed.is_none() {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
