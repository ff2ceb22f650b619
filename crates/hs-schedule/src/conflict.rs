//! Conflict classification of a candidate against a sorted episode list.

use crate::{Episode, Padding};

/// How a candidate episode relates to the episodes already scheduled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConflictType {
    /// Fits in a gap (padding included).
    NoConflict,
    /// Covers an existing episode entirely.  Always rejected.
    CompleteOverlap,
    /// Lies strictly inside an existing episode.
    Split,
    /// Overlaps the head of the episode at `position`.
    Anterior,
    /// Overlaps the tail of the episode at `position`.
    Posterior,
}

/// Result of [`classify`]: the conflict kind and the index of the first
/// episode the candidate interacts with (for `NoConflict`, the index the
/// candidate would be inserted at).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ConflictReport {
    pub kind:     ConflictType,
    pub position: usize,
}

impl ConflictReport {
    #[inline]
    fn new(kind: ConflictType, position: usize) -> Self {
        Self { kind, position }
    }
}

/// Classify `ep` against `episodes`, which must be sorted and
/// non-overlapping.
///
/// Touching windows (`a.end + gap == b.start`) do not conflict, so an
/// episode re-classified against its own schedule with itself removed is
/// always `NoConflict` at its current index.
pub fn classify<P: Padding + ?Sized>(episodes: &[Episode], ep: &Episode, pad: &P) -> ConflictReport {
    let Some(i) = episodes
        .iter()
        .position(|e| e.end() + pad.gap(e, ep) > ep.start())
    else {
        return ConflictReport::new(ConflictType::NoConflict, episodes.len());
    };

    let current = &episodes[i];
    if ep.end() + pad.gap(ep, current) <= current.start() {
        return ConflictReport::new(ConflictType::NoConflict, i);
    }

    if current.start() >= ep.start() && ep.end() >= current.end() {
        return ConflictReport::new(ConflictType::CompleteOverlap, i);
    }
    if let Some(next) = episodes.get(i + 1) {
        if next.start() >= ep.start() && ep.end() >= next.end() {
            return ConflictReport::new(ConflictType::CompleteOverlap, i + 1);
        }
    }
    if current.start() < ep.start() && ep.end() < current.end() {
        return ConflictReport::new(ConflictType::Split, i);
    }
    if current.start() >= ep.start() {
        ConflictReport::new(ConflictType::Anterior, i)
    } else {
        ConflictReport::new(ConflictType::Posterior, i)
    }
}
