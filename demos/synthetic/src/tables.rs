//! Synthetic distribution table.
//!
//! Each block of rows gets a hand-shaped profile: a frequency mass, a
//! triangular start-time peak inside a window, and a uniform duration range.
//! Good enough to exercise every generation path; not calibrated to any
//! survey.

use hs_core::{DistributionId, SchedulerConfig, Time};
use hs_distribution::{DistributionEntry, DistributionResult, DistributionTable, DistributionTableBuilder};

struct Profile {
    /// Weights for 0, 1, 2, ... occurrences.
    frequency: &'static [f32],
    starts:    (Time, Time),
    durations: (Time, Time),
}

const fn profile(frequency: &'static [f32], starts: (Time, Time), durations: (Time, Time)) -> Profile {
    Profile { frequency, starts, durations }
}

/// Row blocks in table order: `(first row, one past the last, profile)`.
const BLOCKS: [(u16, u16, Profile); 10] = [
    // primary work
    (0, 32, profile(&[0.1, 0.9], (Time::hm(6, 30), Time::hm(10, 0)), (Time::hm(6, 0), Time::hm(9, 0)))),
    // secondary work
    (32, 40, profile(&[0.9, 0.1], (Time::hm(17, 0), Time::hm(21, 0)), (Time::hm(1, 0), Time::hm(3, 0)))),
    // work-based business
    (40, 72, profile(&[0.8, 0.2], (Time::hm(9, 30), Time::hm(15, 0)), (Time::minutes(30), Time::hm(2, 0)))),
    // work-at-home business
    (72, 84, profile(&[0.6, 0.4], (Time::hm(8, 0), Time::hm(14, 0)), (Time::hm(1, 0), Time::hm(4, 0)))),
    // school
    (84, 94, profile(&[0.05, 0.95], (Time::hm(7, 30), Time::hm(9, 30)), (Time::hm(5, 0), Time::hm(7, 0)))),
    // return from work
    (94, 102, profile(&[0.85, 0.15], (Time::hm(11, 30), Time::hm(13, 30)), (Time::minutes(30), Time::hm(1, 0)))),
    // individual other
    (102, 158, profile(&[0.5, 0.35, 0.15], (Time::hm(9, 0), Time::hm(21, 0)), (Time::minutes(30), Time::hm(2, 30)))),
    // joint other
    (158, 182, profile(&[0.7, 0.3], (Time::hm(17, 0), Time::hm(21, 0)), (Time::hm(1, 0), Time::hm(3, 0)))),
    // market
    (182, 238, profile(&[0.55, 0.35, 0.1], (Time::hm(9, 0), Time::hm(20, 0)), (Time::minutes(15), Time::hm(1, 15)))),
    // joint market
    (238, 262, profile(&[0.8, 0.2], (Time::hm(10, 0), Time::hm(18, 0)), (Time::minutes(30), Time::hm(1, 30)))),
];

fn entry(config: &SchedulerConfig, p: &Profile) -> DistributionEntry {
    let quanta = config.start_time_quanta as usize;
    let mut e = DistributionEntry::zeros(quanta, config.frequency_outcomes());
    for (frequency, &weight) in p.frequency.iter().enumerate() {
        e.set_frequency(frequency, weight);
    }

    let first = config.bin_of(p.starts.0);
    let last = config.bin_of(p.starts.1).min(quanta - 1);
    let peak = (first + last) as f32 / 2.0;
    let half_width = ((last - first) as f32 / 2.0).max(1.0);
    for bin in first..=last {
        let weight = 1.0 - 0.8 * ((bin as f32 - peak).abs() / half_width);
        for frequency in 1..p.frequency.len() {
            e.set_start_weight(bin, frequency, weight);
        }
    }

    let shortest = config.duration_bins(p.durations.0).max(1);
    let longest = config.duration_bins(p.durations.1);
    for start in 0..quanta {
        for duration in shortest..=longest {
            e.set_duration_weight(start, duration, 1.0);
        }
    }
    e
}

/// One entry for every row the resolver can name.
pub fn build_table(config: &SchedulerConfig) -> DistributionResult<DistributionTable> {
    let mut builder = DistributionTableBuilder::new(config);
    for (first, end, profile) in &BLOCKS {
        let e = entry(config, profile);
        for id in *first..*end {
            builder = builder.entry(DistributionId(id), e.clone());
        }
    }
    builder.build()
}
