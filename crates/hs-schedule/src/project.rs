//! Per-activity scratch schedules, filled before episodes are located.

use std::ops::Deref;

use hs_core::{Activity, SchedulerConfig};

use crate::{DayBounds, Episode, InsertOutcome, NoPadding, Schedule, ScheduleResult};

/// Which activities a project collects.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProjectKind {
    /// Primary and secondary work, work-based business, work-at-home
    /// business and returns home from work.
    Work,
    School,
    IndividualOther,
    Market,
    JointOther,
    JointMarket,
}

impl ProjectKind {
    pub const ALL: [ProjectKind; 6] = [
        ProjectKind::Work,
        ProjectKind::School,
        ProjectKind::IndividualOther,
        ProjectKind::Market,
        ProjectKind::JointOther,
        ProjectKind::JointMarket,
    ];

    /// The project an activity's episodes are generated into.
    pub fn of(activity: Activity) -> Option<ProjectKind> {
        Some(match activity {
            a if a.is_work() => ProjectKind::Work,
            Activity::School => ProjectKind::School,
            Activity::IndividualOther => ProjectKind::IndividualOther,
            Activity::Market => ProjectKind::Market,
            Activity::JointOther => ProjectKind::JointOther,
            Activity::JointMarket => ProjectKind::JointMarket,
            _ => return None,
        })
    }

    #[inline]
    pub fn accepts(self, activity: Activity) -> bool {
        ProjectKind::of(activity) == Some(self)
    }

    #[inline]
    pub fn is_joint(self) -> bool {
        matches!(self, ProjectKind::JointOther | ProjectKind::JointMarket)
    }
}

// ── ProjectSchedule ───────────────────────────────────────────────────────────

/// Schedule for one project of one person (or of the household, for joint
/// projects).  No travel padding; the work project may split primary work.
#[derive(Clone, Debug)]
pub struct ProjectSchedule {
    kind:     ProjectKind,
    schedule: Schedule,
}

impl ProjectSchedule {
    pub fn new(kind: ProjectKind, config: &SchedulerConfig) -> Self {
        Self::with_bounds(kind, DayBounds::from_config(config))
    }

    pub fn with_bounds(kind: ProjectKind, bounds: DayBounds) -> Self {
        Self { kind, schedule: Schedule::new(bounds) }
    }

    #[inline]
    pub fn kind(&self) -> ProjectKind {
        self.kind
    }

    #[inline]
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Insert `ep`, resolving conflicts with no padding.
    ///
    /// Returns `Err` only if the schedule's invariants were broken, which is
    /// a resolver defect.
    pub fn insert(&mut self, ep: Episode) -> ScheduleResult<InsertOutcome> {
        debug_assert!(self.kind.accepts(ep.activity()), "{} does not belong in {:?}", ep.activity(), self.kind);
        self.schedule.insert_with(ep, &NoPadding, self.kind == ProjectKind::Work)
    }

    pub fn clear(&mut self) {
        self.schedule.clear();
    }

    pub fn retain(&mut self, keep: impl FnMut(&Episode) -> bool) {
        self.schedule.retain(keep);
    }
}

impl Deref for ProjectSchedule {
    type Target = Schedule;

    fn deref(&self) -> &Schedule {
        &self.schedule
    }
}
