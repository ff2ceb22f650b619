//! In-memory distribution tables.
//!
//! Each distribution id owns three empirical tables:
//!
//! | Table                  | Shape                      | Meaning                                  |
//! |------------------------|----------------------------|------------------------------------------|
//! | `frequency`            | `outcomes`                 | mass over episode counts `0..=max_frequency` |
//! | `start_time_frequency` | `quanta × outcomes`        | start-bin mass given the day's frequency |
//! | `durations`            | `quanta × (quanta + 1)`    | duration-bin mass given the start bin    |
//!
//! Tables are stored flat, row-major.  Weights are single precision and need
//! not be normalized.

use hs_core::{DistributionId, SchedulerConfig, Time};

use crate::{Adjustments, DistributionError, DistributionResult};

// ── DistributionEntry ─────────────────────────────────────────────────────────

/// The three tables of one distribution id.
#[derive(Clone, Debug, PartialEq)]
pub struct DistributionEntry {
    quanta:               usize,
    outcomes:             usize,
    frequency:            Vec<f32>,
    start_time_frequency: Vec<f32>,
    durations:            Vec<f32>,
}

impl DistributionEntry {
    /// An all-zero entry for a table with `quanta` start bins and `outcomes`
    /// frequency outcomes.  Fill it with the `set_*` methods.
    pub fn zeros(quanta: usize, outcomes: usize) -> Self {
        Self {
            quanta,
            outcomes,
            frequency:            vec![0.0; outcomes],
            start_time_frequency: vec![0.0; quanta * outcomes],
            durations:            vec![0.0; quanta * (quanta + 1)],
        }
    }

    /// Build from nested rows: `start_time_frequency[bin][frequency]` and
    /// `durations[start_bin][duration_bin]`.
    ///
    /// Row widths are checked by [`DistributionTableBuilder::build`].
    pub fn from_rows(
        frequency: Vec<f32>,
        start_time_frequency: Vec<Vec<f32>>,
        durations: Vec<Vec<f32>>,
    ) -> Self {
        let quanta = start_time_frequency.len();
        let outcomes = frequency.len();
        Self {
            quanta,
            outcomes,
            frequency,
            start_time_frequency: start_time_frequency.concat(),
            durations: durations.concat(),
        }
    }

    pub fn set_frequency(&mut self, frequency: usize, weight: f32) -> &mut Self {
        if let Some(w) = self.frequency.get_mut(frequency) {
            *w = weight;
        }
        self
    }

    pub fn set_start_weight(&mut self, bin: usize, frequency: usize, weight: f32) -> &mut Self {
        if bin < self.quanta && frequency < self.outcomes {
            self.start_time_frequency[bin * self.outcomes + frequency] = weight;
        }
        self
    }

    pub fn set_duration_weight(&mut self, start_bin: usize, duration_bin: usize, weight: f32) -> &mut Self {
        if start_bin < self.quanta && duration_bin <= self.quanta {
            self.durations[start_bin * (self.quanta + 1) + duration_bin] = weight;
        }
        self
    }

    #[inline]
    pub fn frequency_weight(&self, frequency: usize) -> f32 {
        self.frequency.get(frequency).copied().unwrap_or(0.0)
    }

    #[inline]
    pub fn start_weight(&self, bin: usize, frequency: usize) -> f32 {
        if bin >= self.quanta || frequency >= self.outcomes {
            return 0.0;
        }
        self.start_time_frequency[bin * self.outcomes + frequency]
    }

    #[inline]
    pub fn duration_weight(&self, start_bin: usize, duration_bin: usize) -> f32 {
        if start_bin >= self.quanta || duration_bin > self.quanta {
            return 0.0;
        }
        self.durations[start_bin * (self.quanta + 1) + duration_bin]
    }

    fn check_shape(&self, id: DistributionId, quanta: usize, outcomes: usize) -> DistributionResult<()> {
        let checks = [
            ("frequency row", outcomes, self.frequency.len()),
            ("start-time table", quanta * outcomes, self.start_time_frequency.len()),
            ("duration table", quanta * (quanta + 1), self.durations.len()),
        ];
        for (what, expected, got) in checks {
            if expected != got {
                return Err(DistributionError::Shape { id, what, expected, got });
            }
        }
        Ok(())
    }
}

// ── DistributionTable ─────────────────────────────────────────────────────────

/// Read-only cache of every distribution entry, keyed by id, plus the
/// spatial adjustments applied while sampling.
#[derive(Clone, Debug)]
pub struct DistributionTable {
    pub(crate) entries:     Vec<Option<DistributionEntry>>,
    pub(crate) adjustments: Adjustments,
    pub(crate) day_start:   Time,
    pub(crate) bin_width:   Time,
    pub(crate) quanta:      usize,
    pub(crate) outcomes:    usize,
}

impl DistributionTable {
    /// Entry for `id`.
    pub fn entry(&self, id: DistributionId) -> DistributionResult<&DistributionEntry> {
        self.entries
            .get(id.index())
            .and_then(Option::as_ref)
            .ok_or(DistributionError::UnknownDistribution(id))
    }

    pub fn contains(&self, id: DistributionId) -> bool {
        self.entry(id).is_ok()
    }

    pub fn adjustments(&self) -> &Adjustments {
        &self.adjustments
    }

    /// Number of start-time bins.
    #[inline]
    pub fn quanta(&self) -> usize {
        self.quanta
    }

    /// Largest frequency outcome.
    #[inline]
    pub fn max_frequency(&self) -> u32 {
        self.outcomes.saturating_sub(1) as u32
    }

    /// First minute of start-time bin `bin`.
    #[inline]
    pub fn time_of_bin(&self, bin: usize) -> Time {
        self.day_start + Time(bin as i32 * self.bin_width.as_minutes())
    }

    /// Start-time bin containing `time`, clamped to the table.
    pub fn bin_of(&self, time: Time) -> usize {
        let offset = (time - self.day_start).as_minutes().max(0);
        ((offset / self.bin_width.as_minutes().max(1)) as usize).min(self.quanta.saturating_sub(1))
    }

    /// Whole bins in `duration`, clamped to `[0, quanta]`.
    pub fn duration_bins(&self, duration: Time) -> usize {
        let bins = duration.as_minutes().max(0) / self.bin_width.as_minutes().max(1);
        (bins as usize).min(self.quanta)
    }

    #[inline]
    pub fn bin_width(&self) -> Time {
        self.bin_width
    }
}

// ── DistributionTableBuilder ──────────────────────────────────────────────────

/// Fluent builder for [`DistributionTable`].
///
/// ```rust
/// use hs_core::{DistributionId, SchedulerConfig};
/// use hs_distribution::{DistributionEntry, DistributionTableBuilder};
///
/// let cfg = SchedulerConfig::default();
/// let mut entry = DistributionEntry::zeros(96, 11);
/// entry.set_frequency(1, 1.0);
///
/// let table = DistributionTableBuilder::new(&cfg)
///     .entry(DistributionId(0), entry)
///     .build()
///     .unwrap();
/// assert!(table.contains(DistributionId(0)));
/// ```
pub struct DistributionTableBuilder {
    rows:        usize,
    quanta:      usize,
    outcomes:    usize,
    day_start:   Time,
    bin_width:   Time,
    entries:     Vec<(DistributionId, DistributionEntry)>,
    adjustments: Adjustments,
}

impl DistributionTableBuilder {
    /// Table dimensions are taken from `config`.
    pub fn new(config: &SchedulerConfig) -> Self {
        Self {
            rows:        config.number_of_distributions as usize,
            quanta:      config.start_time_quanta as usize,
            outcomes:    config.frequency_outcomes(),
            day_start:   config.day_start,
            bin_width:   config.bin_width(),
            entries:     Vec::new(),
            adjustments: Adjustments::default(),
        }
    }

    /// Add (or replace) the entry for `id`.
    pub fn entry(mut self, id: DistributionId, entry: DistributionEntry) -> Self {
        self.entries.push((id, entry));
        self
    }

    pub fn adjustments(mut self, adjustments: Adjustments) -> Self {
        self.adjustments = adjustments;
        self
    }

    /// Validate every entry's shape and build the table.  Later entries for
    /// the same id replace earlier ones.
    pub fn build(self) -> DistributionResult<DistributionTable> {
        let mut entries: Vec<Option<DistributionEntry>> = vec![None; self.rows];
        for (id, entry) in self.entries {
            entry.check_shape(id, self.quanta, self.outcomes)?;
            let slot = entries
                .get_mut(id.index())
                .ok_or(DistributionError::IdOutOfRange { id, rows: self.rows })?;
            *slot = Some(entry);
        }
        Ok(DistributionTable {
            entries,
            adjustments: self.adjustments,
            day_start:   self.day_start,
            bin_width:   self.bin_width,
            quanta:      self.quanta,
            outcomes:    self.outcomes,
        })
    }
}
