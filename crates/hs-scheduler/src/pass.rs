//! One pipeline run over one household.

use hs_core::{DistributionId, HouseholdRng};
use hs_distribution::DistributionTable;
use hs_household::{Household, Person};
use hs_schedule::{Episode, InsertOutcome, LocationChoice, ProjectKind, TravelTime};
use tracing::debug;

use crate::chains::build_chains;
use crate::joint_trips::link_joint_trips;
use crate::projects::HouseholdProjects;
use crate::timetable::Timetable;
use crate::{HouseholdSchedule, SchedulerContext, SchedulerError, SchedulerResult, SchedulerStats};

/// Mutable state of one (household, iteration) pass: its RNG stream and its
/// project schedules.  Generation and merge are implemented on this type in
/// `generate` and `merge`.
pub(crate) struct HouseholdPass<'a, T, L> {
    pub ctx:       &'a SchedulerContext<T, L>,
    pub stats:     &'a SchedulerStats,
    pub household: &'a Household,
    pub iteration: u32,
    pub rng:       HouseholdRng,
    pub projects:  HouseholdProjects,
}

impl<'a, T: TravelTime, L: LocationChoice> HouseholdPass<'a, T, L> {
    pub(crate) fn new(
        ctx: &'a SchedulerContext<T, L>,
        stats: &'a SchedulerStats,
        household: &'a Household,
        iteration: u32,
    ) -> Self {
        Self {
            ctx,
            stats,
            household,
            iteration,
            rng: HouseholdRng::new(ctx.config.seed, household.id, iteration),
            projects: HouseholdProjects::new(household.size(), &ctx.config),
        }
    }

    /// Generate, merge, then derive trip chains and link joint tours.
    pub(crate) fn run(mut self) -> SchedulerResult<HouseholdSchedule> {
        self.generate()?;
        let mut persons = self.merge()?;

        let ctx = self.ctx;
        for day in &mut persons {
            day.chains = build_chains(&day.schedule, &ctx.travel, ctx.config.min_at_home_time);
        }
        let tours = link_joint_trips(&mut persons);

        let schedule = HouseholdSchedule { household: self.household.id, iteration: self.iteration, persons };
        debug!(
            household = %schedule.household,
            iteration = self.iteration,
            episodes = schedule.episode_count(),
            trips = schedule.trip_count(),
            joint_tours = tours,
            "household scheduled",
        );
        Ok(schedule)
    }

    // ── Helpers shared by the generation steps ────────────────────────────

    /// Sampler for a person's row, adjusted for their home and work
    /// districts.
    pub(crate) fn person_timetable(&self, id: DistributionId, person: &Person) -> Timetable<'a> {
        let ctx = self.ctx;
        Timetable::new(
            &ctx.table,
            self.stats,
            ctx.config.scheduling_attempts,
            id,
            self.household.home_district,
            person.work_district,
        )
    }

    /// Sampler for a household-level row.
    pub(crate) fn household_timetable(&self, id: DistributionId) -> Timetable<'a> {
        let ctx = self.ctx;
        Timetable::new(&ctx.table, self.stats, ctx.config.scheduling_attempts, id, self.household.home_district, None)
    }

    #[inline]
    pub(crate) fn table(&self) -> &'a DistributionTable {
        &self.ctx.table
    }

    /// Insert into a project.  Rejections are returned; only a broken
    /// schedule is an error.
    pub(crate) fn insert_project(&mut self, index: usize, kind: ProjectKind, ep: Episode) -> SchedulerResult<InsertOutcome> {
        let (person, activity) = (ep.owner(), ep.activity());
        let outcome = self
            .projects
            .project_mut(index, kind)
            .insert(ep)
            .map_err(|source| SchedulerError::Schedule { person, activity, source })?;
        if outcome.is_inserted() {
            self.stats.record_generated();
        }
        Ok(outcome)
    }

    /// Draw and insert one occurrence, retrying up to the attempt cap.
    ///
    /// `draw` receives the RNG, the current projects and whether this is the
    /// last attempt, and returns a candidate or `None` for an infeasible
    /// draw.  Returns the inserted position, or `None` once the occurrence
    /// is abandoned.
    pub(crate) fn place<F>(&mut self, index: usize, kind: ProjectKind, mut draw: F) -> SchedulerResult<Option<usize>>
    where
        F: FnMut(&mut HouseholdRng, &HouseholdProjects, bool) -> SchedulerResult<Option<Episode>>,
    {
        let attempts = self.ctx.config.scheduling_attempts;
        for attempt in 1..=attempts {
            let Some(ep) = draw(&mut self.rng, &self.projects, attempt == attempts)? else {
                continue;
            };
            if let InsertOutcome::Inserted { position } = self.insert_project(index, kind, ep)? {
                return Ok(Some(position));
            }
        }
        self.stats.record_abandoned();
        Ok(None)
    }
}
