//! School project.
//!
//! Older students sample their school day from the tables.  Younger
//! children get a fixed session: a full day, or for the youngest school age
//! a morning or afternoon half day.

use hs_core::{Activity, Time, ZoneId};
use hs_distribution::person_distribution;
use hs_household::PersonStatus;
use hs_schedule::{Episode, LocationChoice, ProjectKind, TravelTime};

use crate::SchedulerResult;
use crate::pass::HouseholdPass;

impl<T: TravelTime, L: LocationChoice> HouseholdPass<'_, T, L> {
    pub(crate) fn generate_school(&mut self, index: usize) -> SchedulerResult<()> {
        let household = self.household;
        let person = &household.persons[index];
        if !person.student.is_student() {
            return Ok(());
        }
        let ctx = self.ctx;
        let rules = &ctx.config.school;
        let zone = person.school_zone.unwrap_or(household.home_zone);

        if person.age >= rules.min_sampled_age {
            self.sampled_school(index, zone)
        } else if person.age >= rules.full_day_min_age {
            self.fixed_school(index, zone, rules.morning_start, rules.afternoon_end)
        } else if person.age == rules.half_day_age {
            if self.rng.gen_bool(rules.afternoon_probability) {
                self.fixed_school(index, zone, rules.afternoon_start, rules.afternoon_end)
            } else {
                self.fixed_school(index, zone, rules.morning_start, rules.morning_end)
            }
        } else {
            Ok(())
        }
    }

    fn sampled_school(&mut self, index: usize, zone: ZoneId) -> SchedulerResult<()> {
        let household = self.household;
        let person = &household.persons[index];
        let Some(id) = person_distribution(person, Activity::School, PersonStatus::NoWorkOrSchool) else {
            return Ok(());
        };
        let tt = self.person_timetable(id, person);
        let frequency = tt.frequency(self.table().max_frequency(), None, &mut self.rng)?;

        for _ in 0..frequency {
            self.place(index, ProjectKind::School, |rng, _, _| {
                let Some(start) = tt.start_any(frequency, rng)? else { return Ok(None) };
                let Some(duration) = tt.duration(start, None, rng)? else { return Ok(None) };
                Ok(Some(Episode::new(Activity::School, start, duration, person.id).with_zone(zone)))
            })?;
        }
        Ok(())
    }

    fn fixed_school(&mut self, index: usize, zone: ZoneId, start: Time, end: Time) -> SchedulerResult<()> {
        let person = self.household.persons[index].id;
        let ep = Episode::new(Activity::School, start, end - start, person).with_zone(zone);
        if !self.insert_project(index, ProjectKind::School, ep)?.is_inserted() {
            self.stats.record_abandoned();
        }
        Ok(())
    }
}
