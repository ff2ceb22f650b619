//! Per-household project schedules, filled by generation and drained by
//! merge.

use hs_core::{SchedulerConfig, Time};
use hs_household::{HouseholdStatus, PersonStatus};
use hs_schedule::{ProjectKind, ProjectSchedule};

/// The four individual projects of one person.
pub(crate) struct PersonProjects {
    pub work:   ProjectSchedule,
    pub school: ProjectSchedule,
    pub other:  ProjectSchedule,
    pub market: ProjectSchedule,
}

impl PersonProjects {
    fn new(config: &SchedulerConfig) -> Self {
        Self {
            work:   ProjectSchedule::new(ProjectKind::Work, config),
            school: ProjectSchedule::new(ProjectKind::School, config),
            other:  ProjectSchedule::new(ProjectKind::IndividualOther, config),
            market: ProjectSchedule::new(ProjectKind::Market, config),
        }
    }

    /// Earliest start and latest end across work and school.
    pub fn work_school_window(&self) -> Option<(Time, Time)> {
        let spans = [&self.work, &self.school];
        let start = spans.iter().filter_map(|p| p.first_start()).min()?;
        let end = spans.iter().filter_map(|p| p.last_end()).max()?;
        Some((start, end))
    }

    /// Overlap of `[start, end)` with the work and school projects.
    pub fn fixed_overlap(&self, start: Time, end: Time) -> Time {
        self.work.overlap_with(start, end) + self.school.overlap_with(start, end)
    }

    pub fn status(&self, config: &SchedulerConfig) -> PersonStatus {
        PersonStatus::classify(self.work_school_window(), config.day_start, config.full_time_activity)
    }
}

/// Every project of one household.  Person projects are indexed by the
/// member's position in the household.
pub(crate) struct HouseholdProjects {
    pub persons:      Vec<PersonProjects>,
    pub joint_other:  ProjectSchedule,
    pub joint_market: ProjectSchedule,
}

impl HouseholdProjects {
    pub fn new(members: usize, config: &SchedulerConfig) -> Self {
        Self {
            persons:      (0..members).map(|_| PersonProjects::new(config)).collect(),
            joint_other:  ProjectSchedule::new(ProjectKind::JointOther, config),
            joint_market: ProjectSchedule::new(ProjectKind::JointMarket, config),
        }
    }

    /// Project `kind` of member `index`, or the household's for joint kinds.
    pub fn project_mut(&mut self, index: usize, kind: ProjectKind) -> &mut ProjectSchedule {
        match kind {
            ProjectKind::JointOther => &mut self.joint_other,
            ProjectKind::JointMarket => &mut self.joint_market,
            ProjectKind::Work => &mut self.persons[index].work,
            ProjectKind::School => &mut self.persons[index].school,
            ProjectKind::IndividualOther => &mut self.persons[index].other,
            ProjectKind::Market => &mut self.persons[index].market,
        }
    }

    pub fn household_status(&self, config: &SchedulerConfig) -> HouseholdStatus {
        HouseholdStatus::aggregate(self.persons.iter().map(|p| p.status(config)))
    }
}
