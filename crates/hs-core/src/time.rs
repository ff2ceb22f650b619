//! Schedule time model.
//!
//! # Design
//!
//! Time is a signed count of whole minutes since midnight of the survey day.
//! The scheduling day runs from 04:00 to 28:00 (04:00 the next morning), so
//! late-night activities sort after midnight without wraparound.  Integer
//! minutes keep every insertion exact: repeated shifts and shrinks never
//! accumulate floating-point drift.
//!
//! Durations are also `Time` values.  Negative values are legal as
//! intermediate results (e.g. an overlap that turned out to be a gap) but are
//! never stored in a valid schedule.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

// ── Time ──────────────────────────────────────────────────────────────────────

/// A point in the scheduling day, or a duration, in whole minutes.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Time(pub i32);

impl Time {
    pub const ZERO: Time = Time(0);
    pub const ONE_HOUR: Time = Time(60);

    /// `minutes` minutes.
    #[inline]
    pub const fn minutes(minutes: i32) -> Time {
        Time(minutes)
    }

    /// `hours:minutes`.  Hours past 24 are allowed (`hm(26, 30)` is 02:30 on
    /// the following morning).
    #[inline]
    pub const fn hm(hours: i32, minutes: i32) -> Time {
        Time(hours * 60 + minutes)
    }

    #[inline]
    pub fn as_minutes(self) -> i32 {
        self.0
    }

    #[inline]
    pub fn as_hours(self) -> f32 {
        self.0 as f32 / 60.0
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Multiply by `factor`, rounding to the nearest minute.
    #[inline]
    pub fn scale(self, factor: f32) -> Time {
        Time((self.0 as f32 * factor).round() as i32)
    }

    /// Multiply by `factor`, rounding up.  Used for duration floors so a
    /// floor is never below the exact fraction.
    #[inline]
    pub fn scale_ceil(self, factor: f32) -> Time {
        Time((self.0 as f32 * factor).ceil() as i32)
    }

    /// Multiply by `factor`, rounding down.
    #[inline]
    pub fn scale_floor(self, factor: f32) -> Time {
        Time((self.0 as f32 * factor).floor() as i32)
    }

    /// Clamp negative values to zero.
    #[inline]
    pub fn non_negative(self) -> Time {
        Time(self.0.max(0))
    }
}

impl Add for Time {
    type Output = Time;
    #[inline]
    fn add(self, rhs: Time) -> Time {
        Time(self.0 + rhs.0)
    }
}

impl Sub for Time {
    type Output = Time;
    #[inline]
    fn sub(self, rhs: Time) -> Time {
        Time(self.0 - rhs.0)
    }
}

impl AddAssign for Time {
    #[inline]
    fn add_assign(&mut self, rhs: Time) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Time {
    #[inline]
    fn sub_assign(&mut self, rhs: Time) {
        self.0 -= rhs.0;
    }
}

impl Neg for Time {
    type Output = Time;
    #[inline]
    fn neg(self) -> Time {
        Time(-self.0)
    }
}

impl std::iter::Sum for Time {
    fn sum<I: Iterator<Item = Time>>(iter: I) -> Time {
        iter.fold(Time::ZERO, Add::add)
    }
}

impl fmt::Display for Time {
    /// `HH:MM`, with a leading `-` for negative values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{:02}:{:02}", abs / 60, abs % 60)
    }
}
