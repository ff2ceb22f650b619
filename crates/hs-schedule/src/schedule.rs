//! Ordered, non-overlapping episode list shared by project and person
//! schedules.
//!
//! All structural changes go through [`Schedule::insert_with`], which
//! classifies the candidate, fits up to three episodes, commits the new
//! timings and finally re-checks every invariant.  A rejected insertion
//! leaves the list untouched.

use std::fmt::Write as _;

use hs_core::{Activity, SchedulerConfig, Time};
use tracing::debug;

use crate::conflict::{ConflictType, classify};
use crate::fit::{Frame, Slot, fit};
use crate::{ConflictReport, Episode, Padding, ScheduleError, ScheduleResult};

// ── DayBounds ─────────────────────────────────────────────────────────────────

/// The slice of [`SchedulerConfig`] a schedule needs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DayBounds {
    pub day_start:       Time,
    /// Latest legal end: day end plus one quantum.
    pub latest_end:      Time,
    pub overlap_allowed: f32,
}

impl DayBounds {
    pub fn from_config(config: &SchedulerConfig) -> Self {
        Self {
            day_start:       config.day_start,
            latest_end:      config.latest_end(),
            overlap_allowed: config.overlap_allowed,
        }
    }
}

impl Default for DayBounds {
    fn default() -> Self {
        Self::from_config(&SchedulerConfig::default())
    }
}

// ── Outcomes ──────────────────────────────────────────────────────────────────

/// Why a candidate was not inserted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rejection {
    CompleteOverlap,
    /// Split of an episode that may not be split by this candidate.
    IllegalSplit,
    /// Floors plus padding do not fit in the available window.
    NoRoom,
    /// Location choice found no zone.
    NoLocation,
}

/// Result of a non-fatal insertion attempt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted { position: usize },
    Rejected(Rejection),
}

impl InsertOutcome {
    #[inline]
    pub fn is_inserted(&self) -> bool {
        matches!(self, InsertOutcome::Inserted { .. })
    }
}

// ── Schedule ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Schedule {
    episodes: Vec<Episode>,
    bounds:   DayBounds,
}

impl Schedule {
    pub fn new(bounds: DayBounds) -> Self {
        Self { episodes: Vec::new(), bounds }
    }

    #[inline]
    pub fn bounds(&self) -> DayBounds {
        self.bounds
    }

    #[inline]
    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Episode> {
        self.episodes.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Episode> {
        self.episodes.get(index)
    }

    pub fn first_start(&self) -> Option<Time> {
        self.episodes.first().map(Episode::start)
    }

    pub fn last_end(&self) -> Option<Time> {
        self.episodes.last().map(Episode::end)
    }

    /// `(first start, last end)` over episodes of `activity`.
    pub fn window_of(&self, activity: Activity) -> Option<(Time, Time)> {
        let mut matching = self.episodes.iter().filter(|e| e.activity() == activity);
        let first = matching.next()?;
        let last = matching.last().unwrap_or(first);
        Some((first.start(), last.end()))
    }

    pub fn contains_activity(&self, activity: Activity) -> bool {
        self.episodes.iter().any(|e| e.activity() == activity)
    }

    /// Minutes of `[start, end)` already covered by episodes.
    pub fn overlap_with(&self, start: Time, end: Time) -> Time {
        self.episodes.iter().map(|e| e.overlap_with(start, end)).sum()
    }

    /// Classify `ep` without padding.
    pub fn classify(&self, ep: &Episode) -> ConflictReport {
        classify(&self.episodes, ep, &crate::NoPadding)
    }

    pub fn clear(&mut self) {
        self.episodes.clear();
    }

    pub fn remove(&mut self, index: usize) -> Option<Episode> {
        (index < self.episodes.len()).then(|| self.episodes.remove(index))
    }

    /// Removing episodes never breaks ordering or overlap.
    pub fn retain(&mut self, keep: impl FnMut(&Episode) -> bool) {
        self.episodes.retain(keep);
    }

    // ── Insertion ─────────────────────────────────────────────────────────

    /// Insert `ep` using `pad` between episodes.  Splits are performed only
    /// when `allow_split` is set and the split is legal.
    pub(crate) fn insert_with<P: Padding + ?Sized>(
        &mut self,
        ep: Episode,
        pad: &P,
        allow_split: bool,
    ) -> ScheduleResult<InsertOutcome> {
        let report = classify(&self.episodes, &ep, pad);
        let position = match report.kind {
            ConflictType::CompleteOverlap => {
                debug!(activity = %ep.activity(), start = %ep.start(), "complete overlap");
                return Ok(InsertOutcome::Rejected(Rejection::CompleteOverlap));
            }
            ConflictType::Split => {
                if !allow_split || !is_legal_split(&self.episodes[report.position], &ep) {
                    return Ok(InsertOutcome::Rejected(Rejection::IllegalSplit));
                }
                self.split_insert(report.position, ep);
                self.check_integrity()?;
                return Ok(InsertOutcome::Inserted { position: report.position + 1 });
            }
            ConflictType::NoConflict | ConflictType::Anterior => report.position,
            ConflictType::Posterior => report.position + 1,
        };

        match self.fit_at(position, &ep, pad) {
            Some(fitted) => {
                self.commit(position, ep, fitted);
                self.check_integrity()?;
                Ok(InsertOutcome::Inserted { position })
            }
            None => Ok(InsertOutcome::Rejected(Rejection::NoRoom)),
        }
    }

    /// Fit `ep` as if inserted at `position`: its prior neighbour is the
    /// episode before `position`, its post neighbour the one at `position`.
    fn fit_at<P: Padding + ?Sized>(&self, position: usize, ep: &Episode, pad: &P) -> Option<crate::fit::Fitted> {
        let frac = self.bounds.overlap_allowed;
        let slot = |e: &Episode| Slot { start: e.start(), end: e.end(), original: e.original_duration(), floor: e.floor(frac) };

        let prior = position.checked_sub(1).map(|i| &self.episodes[i]);
        let post = self.episodes.get(position);

        let early = match position {
            0 => self.bounds.day_start + pad.lead(ep),
            1 => self.bounds.day_start + pad.lead(&self.episodes[0]),
            _ => {
                let before = &self.episodes[position - 2];
                before.end() + pad.gap(before, &self.episodes[position - 1])
            }
        };
        let late = match (post, self.episodes.get(position + 1)) {
            (Some(post), Some(after)) => after.start() - pad.gap(post, after),
            _ => self.bounds.latest_end,
        };
        let frame = Frame {
            before: prior.map_or(Time::ZERO, |p| pad.gap(p, ep)),
            after:  post.map_or(Time::ZERO, |p| pad.gap(ep, p)),
            early,
            late,
        };
        fit(prior.map(slot), slot(ep), post.map(slot), frame)
    }

    fn commit(&mut self, position: usize, mut ep: Episode, fitted: crate::fit::Fitted) {
        if let (Some(p), Some(i)) = (fitted.prior, position.checked_sub(1)) {
            self.episodes[i].set_window(p.start, p.end);
        }
        if let Some(p) = fitted.post {
            self.episodes[position].set_window(p.start, p.end);
        }
        ep.set_window(fitted.middle.start, fitted.middle.end);
        self.episodes.insert(position, ep);
    }

    /// Replace the episode at `position` by a fragment before `ep`, `ep`
    /// itself, and a fragment after it.
    fn split_insert(&mut self, position: usize, ep: Episode) {
        let mut before = self.episodes[position].clone();
        let mut after = before.clone();
        before.set_window(before.start(), ep.start());
        before.rebase();
        after.set_window(ep.end(), after.end());
        after.rebase();
        debug!(
            activity = %ep.activity(),
            split = %before.activity(),
            before = %before.duration(),
            after = %after.duration(),
            "split",
        );
        self.episodes[position] = before;
        self.episodes.insert(position + 1, ep);
        self.episodes.insert(position + 2, after);
    }

    /// Recompute each episode's travel time to the next one, and home after
    /// the last.
    pub(crate) fn refresh_travel<P: Padding + ?Sized>(&mut self, pad: &P) {
        let n = self.episodes.len();
        for i in 0..n {
            let tt = match self.episodes.get(i + 1) {
                Some(next) => pad.gap(&self.episodes[i], next),
                None => pad.tail(&self.episodes[i]),
            };
            self.episodes[i].set_travel_time(tt);
        }
    }

    // ── Integrity ─────────────────────────────────────────────────────────

    /// Check ordering, overlap, day bounds and duration floors.
    pub fn check_integrity(&self) -> ScheduleResult<()> {
        let b = self.bounds;
        for (i, e) in self.episodes.iter().enumerate() {
            let reason = if e.end() < e.start() {
                Some(format!("episode {i} ends before it starts"))
            } else if e.start() < b.day_start || e.end() > b.latest_end {
                Some(format!("episode {i} is outside [{}, {}]", b.day_start, b.latest_end))
            } else if e.duration() < e.floor(b.overlap_allowed) {
                Some(format!("episode {i} is shorter than its floor {}", e.floor(b.overlap_allowed)))
            } else if i > 0 && self.episodes[i - 1].end() > e.start() {
                Some(format!("episode {i} overlaps or precedes episode {}", i - 1))
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(ScheduleError::Integrity { reason, dump: self.dump() });
            }
        }
        Ok(())
    }

    /// One line per episode, for diagnostics.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for e in &self.episodes {
            let _ = writeln!(
                out,
                "Activity -> {}, Start -> {}, End -> {}, TT -> {}",
                e.activity(),
                e.start(),
                e.end(),
                e.travel_time(),
            );
        }
        out
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Episode;
    type IntoIter = std::slice::Iter<'a, Episode>;

    fn into_iter(self) -> Self::IntoIter {
        self.episodes.iter()
    }
}

/// Only primary work may be split, and only by work-based business or a
/// return home from work.
pub fn is_legal_split(existing: &Episode, candidate: &Episode) -> bool {
    existing.activity() == Activity::PrimaryWork
        && matches!(candidate.activity(), Activity::WorkBasedBusiness | Activity::ReturnFromWork)
}
