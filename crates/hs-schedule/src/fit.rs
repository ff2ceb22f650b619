//! Three-episode fitting.
//!
//! Given up to three consecutive episodes (`prior`, the candidate `middle`,
//! `post`), the travel padding between them and the window `[early, late]`
//! they must all fit inside, compute new timings or report that no timing
//! exists.  Pure: nothing is mutated, so a rejected fit leaves the schedule
//! exactly as it was.
//!
//! Resolution order:
//!
//! 1. Pre-check: summed floors plus padding must fit in the window.
//! 2. If the current durations do not fit, squeeze: each slot keeps its
//!    floor plus a share of the leftover window proportional to its original
//!    duration, laid out from `early`.
//! 3. Otherwise keep every duration and shift.  First move only the middle
//!    into the gap between its neighbours.  If the gap is too small, push
//!    `prior` left and `post` right, splitting the deficit in proportion to
//!    the free room each has against the window bounds.

use hs_core::Time;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Slot {
    pub start:    Time,
    pub end:      Time,
    pub original: Time,
    pub floor:    Time,
}

impl Slot {
    #[inline]
    fn duration(&self) -> Time {
        self.end - self.start
    }

    #[inline]
    fn placed(self, start: Time, duration: Time) -> Slot {
        Slot { start, end: start + duration, ..self }
    }

    #[inline]
    fn shifted(self, by: Time) -> Slot {
        Slot { start: self.start + by, end: self.end + by, ..self }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Fitted {
    pub prior:  Option<Slot>,
    pub middle: Slot,
    pub post:   Option<Slot>,
}

/// Padding and bounds around the three slots.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Frame {
    /// Padding between `prior` and `middle` (zero without a prior).
    pub before: Time,
    /// Padding between `middle` and `post` (zero without a post).
    pub after:  Time,
    pub early:  Time,
    pub late:   Time,
}

pub(crate) fn fit(prior: Option<Slot>, middle: Slot, post: Option<Slot>, frame: Frame) -> Option<Fitted> {
    let slots = || prior.iter().chain(std::iter::once(&middle)).chain(post.iter());
    let padding = frame.before + frame.after;
    let window = frame.late - frame.early;

    let floors: Time = slots().map(|s| s.floor).sum();
    if window < floors + padding {
        return None;
    }

    let current: Time = slots().map(|s| s.duration()).sum();
    let fitted = if window < current + padding {
        squeeze(prior, middle, post, frame, window - floors - padding)
    } else {
        shift(prior, middle, post, frame)
    };
    verify(&fitted, frame).then_some(fitted)
}

fn squeeze(prior: Option<Slot>, middle: Slot, post: Option<Slot>, frame: Frame, leftover: Time) -> Fitted {
    let total_original: i64 = [prior, Some(middle), post]
        .iter()
        .flatten()
        .map(|s| s.original.as_minutes() as i64)
        .sum();
    let share = |s: &Slot| -> Time {
        if total_original <= 0 {
            return s.floor;
        }
        let part = leftover.as_minutes() as i64 * s.original.as_minutes() as i64 / total_original;
        s.floor + Time::minutes(part as i32)
    };

    let mut cursor = frame.early;
    let prior = prior.map(|p| {
        let placed = p.placed(cursor, share(&p));
        cursor = placed.end + frame.before;
        placed
    });
    let middle = middle.placed(cursor, share(&middle));
    cursor = middle.end + frame.after;
    let post = post.map(|p| p.placed(cursor, share(&p)));
    Fitted { prior, middle, post }
}

fn shift(prior: Option<Slot>, middle: Slot, post: Option<Slot>, frame: Frame) -> Fitted {
    let length = middle.duration();
    let lo = prior.map_or(frame.early, |p| p.end + frame.before).max(frame.early);
    let hi = post.map_or(frame.late, |p| p.start - frame.after).min(frame.late) - length;

    if lo <= hi {
        let start = middle.start.clamp(lo, hi);
        return Fitted { prior, middle: middle.placed(start, length), post };
    }

    let deficit = (lo - hi).as_minutes() as i64;
    let prior_room = prior.map_or(0, |p| (p.start - frame.early).as_minutes().max(0) as i64);
    let post_room = post.map_or(0, |p| (frame.late - p.end).as_minutes().max(0) as i64);
    let room = prior_room + post_room;
    let to_prior = if room > 0 { deficit * prior_room / room } else { 0 };
    let to_post = deficit - to_prior;

    let prior = prior.map(|p| p.shifted(Time::minutes(-(to_prior as i32))));
    let post = post.map(|p| p.shifted(Time::minutes(to_post as i32)));
    let start = prior.map_or(frame.early, |p| p.end + frame.before);
    Fitted { prior, middle: middle.placed(start, length), post }
}

fn verify(f: &Fitted, frame: Frame) -> bool {
    let ok_slot = |s: &Slot| s.end >= s.start && s.duration() >= s.floor;
    let slots_ok = [f.prior, Some(f.middle), f.post].iter().flatten().all(ok_slot);
    let first = f.prior.unwrap_or(f.middle);
    let last = f.post.unwrap_or(f.middle);
    let prior_gap = f.prior.is_none_or(|p| p.end + frame.before <= f.middle.start);
    let post_gap = f.post.is_none_or(|p| f.middle.end + frame.after <= p.start);
    slots_ok && prior_gap && post_gap && first.start >= frame.early && last.end <= frame.late
}
