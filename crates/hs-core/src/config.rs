//! Scheduler configuration.
//!
//! Typically built with `SchedulerConfig::default()` and adjusted field by
//! field, or deserialized from JSON by the application (`serde` feature).
//! Every calibrated constant of the generation rules is a field here rather
//! than a literal in the pipeline.

use crate::{CoreError, CoreResult, Time};

// ── WorkRules ─────────────────────────────────────────────────────────────────

/// Thresholds layered onto the primary-work episode.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorkRules {
    /// Secondary work is only generated when primary work ends before this.
    pub secondary_work_threshold: Time,
    /// Secondary work never starts before this.
    pub secondary_work_min_start: Time,
    /// Minimum gap between the end of primary work and secondary work.
    pub secondary_work_gap: Time,
    /// Return-from-work is only generated when primary work starts by this.
    pub return_home_max_work_start: Time,
    /// Return-from-work needs primary work at least this long.
    pub return_home_min_work_duration: Time,
    /// Return-from-work must end by this.
    pub return_home_max_end: Time,
    /// Margin kept between return-from-work and the primary work boundaries.
    pub return_home_buffer: Time,
    /// Primary-work fragments shorter than this are dropped after merging.
    pub min_primary_work_fragment: Time,
    /// Work-at-home business requires at least this age.
    pub min_work_at_home_age: u8,
}

impl Default for WorkRules {
    fn default() -> Self {
        Self {
            secondary_work_threshold:      Time::hm(19, 0),
            secondary_work_min_start:      Time::hm(15, 0),
            secondary_work_gap:            Time::ONE_HOUR,
            return_home_max_work_start:    Time::hm(12, 0),
            return_home_min_work_duration: Time::hm(2, 0),
            return_home_max_end:           Time::hm(15, 0),
            return_home_buffer:            Time::minutes(30),
            min_primary_work_fragment:     Time::minutes(30),
            min_work_at_home_age:          19,
        }
    }
}

// ── SchoolRules ───────────────────────────────────────────────────────────────

/// Fixed school sessions for young children and the sampled-school age.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SchoolRules {
    /// Students at least this old get sampled school episodes.
    pub min_sampled_age: u8,
    /// Children from this age up to `min_sampled_age - 1` attend a full day.
    pub full_day_min_age: u8,
    /// Children of exactly this age attend a half day.
    pub half_day_age: u8,
    pub morning_start: Time,
    pub morning_end: Time,
    pub afternoon_start: Time,
    pub afternoon_end: Time,
    /// Probability a half-day child attends the afternoon session.
    pub afternoon_probability: f64,
}

impl Default for SchoolRules {
    fn default() -> Self {
        Self {
            min_sampled_age:       11,
            full_day_min_age:      6,
            half_day_age:          5,
            morning_start:         Time::hm(8, 45),
            morning_end:           Time::hm(12, 0),
            afternoon_start:       Time::hm(12, 15),
            afternoon_end:         Time::hm(15, 30),
            afternoon_probability: 0.5,
        }
    }
}

// ── SchedulerConfig ───────────────────────────────────────────────────────────

/// Top-level scheduler configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SchedulerConfig {
    /// First schedulable minute of the day.  Default 04:00.
    pub day_start: Time,
    /// Last schedulable minute of the day.  Default 28:00 (04:00 next day).
    pub day_end: Time,
    /// Tolerance past `day_end` and minimum episode length.  Default 5 min.
    pub quantum: Time,
    /// Number of start-time bins the day is divided into.  Default 96
    /// (15-minute bins).
    pub start_time_quanta: u32,
    /// Largest frequency outcome in the tables.  Default 10.
    pub max_frequency: u32,
    /// Rows in the distribution table.  Default 262.
    pub number_of_distributions: u16,
    /// Outcomes in each adult-count distribution.  Default 9.
    pub adult_frequencies: u32,
    /// Fraction of its original duration an episode may be compressed to.
    /// Default 0.5.
    pub overlap_allowed: f32,
    /// Attempts per episode occurrence before it is abandoned.  Default 10.
    pub scheduling_attempts: u32,
    /// Work/school spans at least this long count as full time.  Default 4:40.
    pub full_time_activity: Time,
    pub min_working_age: u8,
    /// Joint activities only recruit persons at least this old.  Default 16.
    pub min_joint_adult_age: u8,
    /// Individual activities are only generated for persons this old.
    pub min_individual_age: u8,
    /// Minimum dwell at home for a return-home detour.  Default 15 min.
    pub min_at_home_time: Time,
    /// Master RNG seed.  The same seed always produces identical schedules.
    pub seed: u64,
    /// Pipeline runs per household, each with its own RNG stream.
    pub household_iterations: u32,
    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    pub num_threads: Option<usize>,
    /// Keep going after a household fails fatally (the failure is still
    /// reported and tallied).
    pub continue_on_household_error: bool,
    pub work: WorkRules,
    pub school: SchoolRules,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            day_start:                   Time::hm(4, 0),
            day_end:                     Time::hm(28, 0),
            quantum:                     Time::minutes(5),
            start_time_quanta:           96,
            max_frequency:               10,
            number_of_distributions:     262,
            adult_frequencies:           9,
            overlap_allowed:             0.5,
            scheduling_attempts:         10,
            full_time_activity:          Time::hm(4, 40),
            min_working_age:             11,
            min_joint_adult_age:         16,
            min_individual_age:          11,
            min_at_home_time:            Time::minutes(15),
            seed:                        1_234_123,
            household_iterations:        100,
            num_threads:                 None,
            continue_on_household_error: true,
            work:                        WorkRules::default(),
            school:                      SchoolRules::default(),
        }
    }
}

impl SchedulerConfig {
    /// Check internal consistency.  Called by the scheduler builder.
    pub fn validate(&self) -> CoreResult<()> {
        if self.day_end <= self.day_start {
            return Err(CoreError::Config(format!(
                "day_end {} must be after day_start {}",
                self.day_end, self.day_start
            )));
        }
        if self.quantum <= Time::ZERO {
            return Err(CoreError::Config("quantum must be positive".into()));
        }
        if self.start_time_quanta == 0
            || (self.day_length().as_minutes() as u32) % self.start_time_quanta != 0
        {
            return Err(CoreError::Config(format!(
                "start_time_quanta {} must evenly divide the {}-minute day",
                self.start_time_quanta,
                self.day_length().as_minutes()
            )));
        }
        if !(self.overlap_allowed > 0.0 && self.overlap_allowed <= 1.0) {
            return Err(CoreError::Config(format!(
                "overlap_allowed {} must lie in (0, 1]",
                self.overlap_allowed
            )));
        }
        if self.scheduling_attempts == 0 {
            return Err(CoreError::Config("scheduling_attempts must be at least 1".into()));
        }
        if self.household_iterations == 0 {
            return Err(CoreError::Config("household_iterations must be at least 1".into()));
        }
        Ok(())
    }

    #[inline]
    pub fn day_length(&self) -> Time {
        self.day_end - self.day_start
    }

    /// Latest end time an episode may have.
    #[inline]
    pub fn latest_end(&self) -> Time {
        self.day_end + self.quantum
    }

    /// Width of one start-time bin (15 minutes by default).
    #[inline]
    pub fn bin_width(&self) -> Time {
        Time(self.day_length().as_minutes() / self.start_time_quanta.max(1) as i32)
    }

    /// Start-time bin containing `time`, clamped to the table.
    pub fn bin_of(&self, time: Time) -> usize {
        let offset = (time - self.day_start).as_minutes().max(0);
        let bin = (offset / self.bin_width().as_minutes().max(1)) as usize;
        bin.min(self.start_time_quanta.saturating_sub(1) as usize)
    }

    /// First minute of start-time bin `bin`.
    #[inline]
    pub fn time_of_bin(&self, bin: usize) -> Time {
        self.day_start + Time(bin as i32 * self.bin_width().as_minutes())
    }

    /// Number of whole bins in `duration`, clamped to `[0, quanta]`.
    pub fn duration_bins(&self, duration: Time) -> usize {
        let bins = duration.as_minutes().max(0) / self.bin_width().as_minutes().max(1);
        (bins as usize).min(self.start_time_quanta as usize)
    }

    /// Number of frequency outcomes (`0..=max_frequency`).
    #[inline]
    pub fn frequency_outcomes(&self) -> usize {
        self.max_frequency as usize + 1
    }
}
