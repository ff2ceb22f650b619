//! Merge of the project schedules into each person's located day.
//!
//! Per person the order is strict:
//!
//! 1. work-kind episodes (school first for students who also work),
//!    except work-based business;
//! 2. joint episodes the person takes part in, then individual other, then
//!    market;
//! 3. work-based business last, fitted around everything else.
//!
//! Every insertion goes through the person schedule with travel padding.
//! Rejected episodes are dropped and tallied with the person's expansion
//! factor.

use hs_core::{Activity, HouseholdRng, ZoneId};
use hs_household::Person;
use hs_schedule::{Episode, InsertOutcome, LocationChoice, PersonSchedule, ProjectSchedule, TravelTime};
use tracing::debug;

use crate::pass::HouseholdPass;
use crate::{PersonDay, SchedulerContext, SchedulerError, SchedulerResult, SchedulerStats};

impl<T: TravelTime, L: LocationChoice> HouseholdPass<'_, T, L> {
    pub(crate) fn merge(&mut self) -> SchedulerResult<Vec<PersonDay>> {
        let household = self.household;
        let ctx = self.ctx;
        let projects = &self.projects;
        let mut merger = Merger { ctx, stats: self.stats, rng: &mut self.rng };
        let mut joint_zones: [Vec<Option<ZoneId>>; 2] =
            [vec![None; projects.joint_other.len()], vec![None; projects.joint_market.len()]];

        let mut days = Vec::with_capacity(household.size());
        for (index, person) in household.persons.iter().enumerate() {
            let mut day = PersonSchedule::new(person.id, household.home_zone, &ctx.config);
            let own = &projects.persons[index];

            let fixed = if person.is_student_first() { [&own.school, &own.work] } else { [&own.work, &own.school] };
            for project in fixed {
                for ep in project.iter().filter(|e| e.activity() != Activity::WorkBasedBusiness) {
                    merger.insert(&mut day, person, ep.clone())?;
                }
            }

            let joint = [&projects.joint_other, &projects.joint_market];
            for (project, zones) in joint.into_iter().zip(joint_zones.iter_mut()) {
                merger.insert_joint(&mut day, person, project, zones)?;
            }

            for project in [&own.other, &own.market] {
                for ep in project.iter() {
                    merger.insert(&mut day, person, ep.clone())?;
                }
            }

            for ep in own.work.iter().filter(|e| e.activity() == Activity::WorkBasedBusiness) {
                merger.insert(&mut day, person, ep.clone())?;
            }

            if day.remove_short_work(ctx.config.work.min_primary_work_fragment) > 0 {
                day.refresh_travel(&ctx.travel);
            }
            days.push(PersonDay { person: person.id, schedule: day, chains: Vec::new() });
        }
        Ok(days)
    }
}

/// Borrowed pieces of a household pass needed while its projects are read.
struct Merger<'p, 'a, T, L> {
    ctx:   &'a SchedulerContext<T, L>,
    stats: &'a SchedulerStats,
    rng:   &'p mut HouseholdRng,
}

impl<T: TravelTime, L: LocationChoice> Merger<'_, '_, T, L> {
    /// Insert this person's copies of a joint project's episodes.  The first
    /// participant to place an episode fixes its zone for the others.
    fn insert_joint(
        &mut self,
        day: &mut PersonSchedule,
        person: &Person,
        project: &ProjectSchedule,
        zones: &mut [Option<ZoneId>],
    ) -> SchedulerResult<()> {
        for (ep, zone) in project.iter().zip(zones.iter_mut()) {
            if !ep.owners().contains(&person.id) {
                continue;
            }
            let mut copy = ep.clone();
            copy.set_zone(*zone);
            if let Some(placed) = self.insert(day, person, copy)? {
                zone.get_or_insert(placed);
            }
        }
        Ok(())
    }

    /// Insert one episode.  Returns the zone it was placed in, or `None`
    /// when it was rejected.
    fn insert(&mut self, day: &mut PersonSchedule, person: &Person, ep: Episode) -> SchedulerResult<Option<ZoneId>> {
        let ctx = self.ctx;
        let (activity, start) = (ep.activity(), ep.start());
        let outcome = day
            .insert(ep, person, &ctx.travel, &ctx.location, self.rng)
            .map_err(|source| SchedulerError::Schedule { person: person.id, activity, source })?;
        match outcome {
            InsertOutcome::Inserted { position } => Ok(Some(day.zone_at(position))),
            InsertOutcome::Rejected(reason) => {
                debug!(person = %person.id, %activity, %start, ?reason, "episode skipped in merge");
                self.stats.record_skipped(person.expansion_factor);
                Ok(None)
            }
        }
    }
}
