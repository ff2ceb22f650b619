//! Work project: primary work and the episodes layered on it.

use hs_core::{Activity, Time, ZoneId};
use hs_distribution::person_distribution;
use hs_household::{PersonStatus, Workplace};
use hs_schedule::{Episode, LocationChoice, ProjectKind, TravelTime};
use tracing::debug;

use crate::pass::HouseholdPass;
use crate::{SchedulerError, SchedulerResult};

impl<T: TravelTime, L: LocationChoice> HouseholdPass<'_, T, L> {
    pub(crate) fn generate_work(&mut self, index: usize) -> SchedulerResult<()> {
        let household = self.household;
        let person = &household.persons[index];
        let ctx = self.ctx;
        let config = &ctx.config;
        if person.age < config.min_working_age {
            return Ok(());
        }
        if person.employment.is_regular_worker() {
            match person.workplace {
                None => {
                    return Err(SchedulerError::MissingEmploymentZone { household: household.id, person: person.id });
                }
                Some(Workplace::Roaming) => self.roaming_business(index)?,
                Some(Workplace::Zone(zone)) => self.primary_work(index, zone)?,
            }
        }
        if person.employment.works_at_home() && person.age >= config.work.min_work_at_home_age {
            self.work_at_home(index)?;
        }
        Ok(())
    }

    fn primary_work(&mut self, index: usize, zone: ZoneId) -> SchedulerResult<()> {
        let household = self.household;
        let person = &household.persons[index];
        let Some(id) = person_distribution(person, Activity::PrimaryWork, PersonStatus::NoWorkOrSchool) else {
            return Ok(());
        };
        let tt = self.person_timetable(id, person);
        let frequency = tt.frequency(self.table().max_frequency(), None, &mut self.rng)?;

        for _ in 0..frequency {
            let placed = self.place(index, ProjectKind::Work, |rng, _, _| {
                let Some(start) = tt.start_any(frequency, rng)? else { return Ok(None) };
                let Some(duration) = tt.duration(start, None, rng)? else { return Ok(None) };
                Ok(Some(Episode::new(Activity::PrimaryWork, start, duration, person.id).with_zone(zone)))
            })?;
            let Some(position) = placed else {
                debug!(person = %person.id, "primary work abandoned");
                continue;
            };
            let Some((start, end)) = self.projects.persons[index].work.get(position).map(|e| (e.start(), e.end()))
            else {
                continue;
            };
            self.work_business(index, start, end)?;
            self.secondary_work(index, zone, end)?;
            self.return_from_work(index, start, end)?;
        }
        Ok(())
    }

    /// Work-based business inside a primary-work window.
    fn work_business(&mut self, index: usize, start: Time, end: Time) -> SchedulerResult<()> {
        let household = self.household;
        let person = &household.persons[index];
        let Some(id) = person_distribution(person, Activity::WorkBasedBusiness, PersonStatus::NoWorkOrSchool) else {
            return Ok(());
        };
        let tt = self.person_timetable(id, person);
        let window = (start, end);
        let frequency = tt.frequency(self.table().max_frequency(), Some(window), &mut self.rng)?;

        for _ in 0..frequency {
            self.place(index, ProjectKind::Work, |rng, _, _| {
                let Some(at) = tt.start(frequency, window, rng)? else { return Ok(None) };
                let Some(duration) = tt.duration(at, Some(end - at), rng)? else { return Ok(None) };
                Ok(Some(Episode::new(Activity::WorkBasedBusiness, at, duration, person.id)))
            })?;
        }
        Ok(())
    }

    /// Workers without a fixed workplace only make business trips.
    fn roaming_business(&mut self, index: usize) -> SchedulerResult<()> {
        let household = self.household;
        let person = &household.persons[index];
        let Some(id) = person_distribution(person, Activity::WorkBasedBusiness, PersonStatus::NoWorkOrSchool) else {
            return Ok(());
        };
        let tt = self.person_timetable(id, person);
        let frequency = tt.frequency(self.table().max_frequency(), None, &mut self.rng)?;

        for _ in 0..frequency {
            self.place(index, ProjectKind::Work, |rng, _, _| {
                let Some(start) = tt.start_any(frequency, rng)? else { return Ok(None) };
                let Some(duration) = tt.duration(start, None, rng)? else { return Ok(None) };
                Ok(Some(Episode::new(Activity::WorkBasedBusiness, start, duration, person.id)))
            })?;
        }
        Ok(())
    }

    /// A second job after primary work that ends early enough.
    fn secondary_work(&mut self, index: usize, zone: ZoneId, work_end: Time) -> SchedulerResult<()> {
        let ctx = self.ctx;
        let config = &ctx.config;
        let rules = &config.work;
        if work_end >= rules.secondary_work_threshold {
            return Ok(());
        }
        let household = self.household;
        let person = &household.persons[index];
        let Some(id) = person_distribution(person, Activity::SecondaryWork, PersonStatus::NoWorkOrSchool) else {
            return Ok(());
        };
        let tt = self.person_timetable(id, person);
        let day_end = config.day_end;
        let window = ((work_end + rules.secondary_work_gap).max(rules.secondary_work_min_start), day_end);
        let frequency = tt.frequency(self.table().max_frequency(), Some(window), &mut self.rng)?;

        for _ in 0..frequency {
            self.place(index, ProjectKind::Work, |rng, _, _| {
                let Some(start) = tt.start(frequency, window, rng)? else { return Ok(None) };
                let Some(duration) = tt.duration(start, Some(day_end - start), rng)? else { return Ok(None) };
                Ok(Some(Episode::new(Activity::SecondaryWork, start, duration, person.id).with_zone(zone)))
            })?;
        }
        Ok(())
    }

    /// At most one trip home in the middle of a long morning-start work day.
    fn return_from_work(&mut self, index: usize, start: Time, end: Time) -> SchedulerResult<()> {
        let household = self.household;
        let ctx = self.ctx;
        let rules = &ctx.config.work;
        if start > rules.return_home_max_work_start || end - start < rules.return_home_min_work_duration {
            return Ok(());
        }
        let person = &household.persons[index];
        let Some(id) = person_distribution(person, Activity::ReturnFromWork, PersonStatus::NoWorkOrSchool) else {
            return Ok(());
        };
        let tt = self.person_timetable(id, person);
        let buffer = rules.return_home_buffer;
        let max_end = rules.return_home_max_end;
        let first = start + buffer;
        let frequency = tt.frequency(1, Some((first, (end + buffer).min(max_end))), &mut self.rng)?;
        let window = (first, (end - buffer).min(max_end));

        for _ in 0..frequency {
            self.place(index, ProjectKind::Work, |rng, _, _| {
                let Some(at) = tt.start(frequency, window, rng)? else { return Ok(None) };
                let longest = (max_end - Time::ONE_HOUR).min(end - buffer - at);
                if longest <= Time::ZERO {
                    return Ok(None);
                }
                let Some(duration) = tt.duration(at, Some(longest), rng)? else { return Ok(None) };
                Ok(Some(Episode::new(Activity::ReturnFromWork, at, duration, person.id).with_zone(household.home_zone)))
            })?;
        }
        Ok(())
    }

    fn work_at_home(&mut self, index: usize) -> SchedulerResult<()> {
        let household = self.household;
        let person = &household.persons[index];
        let Some(id) = person_distribution(person, Activity::WorkAtHomeBusiness, PersonStatus::NoWorkOrSchool) else {
            return Ok(());
        };
        let tt = self.person_timetable(id, person);
        let day_end = self.ctx.config.day_end;
        let frequency = tt.frequency(self.table().max_frequency(), None, &mut self.rng)?;

        for _ in 0..frequency {
            self.place(index, ProjectKind::Work, |rng, _, _| {
                let Some(start) = tt.start_any(frequency, rng)? else { return Ok(None) };
                let Some(duration) = tt.duration(start, Some(day_end - start), rng)? else { return Ok(None) };
                Ok(Some(
                    Episode::new(Activity::WorkAtHomeBusiness, start, duration, person.id).with_zone(household.home_zone),
                ))
            })?;
        }
        Ok(())
    }
}
