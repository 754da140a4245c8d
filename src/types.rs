use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR, MIN_YEAR, MONTH_NAMES,
};
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Month derived from calendar arithmetic, already known to be in range.
    pub(crate) fn from_computed(value: i64) -> Self {
        debug_assert!((1..=i64::from(MAX_MONTH)).contains(&value));
        Self(
            u8::try_from(value)
                .ok()
                .and_then(NonZeroU8::new)
                .unwrap_or(NonZeroU8::MIN),
        )
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// English name of the month
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.0.get() as usize]
    }

    /// Three-letter English abbreviation of the month
    pub fn abbreviation(self) -> &'static str {
        let name = self.name();
        name.get(..3).unwrap_or(name)
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day-of-month value, at least 1 and valid for the month it was checked against
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given
    /// proleptic Gregorian year and month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or invalid for the given year and month.
    pub fn new(value: u8, year: i64, month: u8) -> Result<Self, ParseError> {
        Self::with_limit(value, days_in_month(year, month)).ok_or(ParseError::InvalidDay {
            year,
            month,
            day: value,
        })
    }

    /// Day checked against an explicit month length; used by calendars with other leap rules.
    pub(crate) fn with_limit(value: u8, max_day: u8) -> Option<Self> {
        if value > max_day {
            return None;
        }
        NonZeroU8::new(value).map(Self)
    }

    /// Day derived from calendar arithmetic, already known to be in range.
    pub(crate) fn from_computed(value: i64) -> Self {
        debug_assert!((1..=31).contains(&value));
        Self(
            u8::try_from(value)
                .ok()
                .and_then(NonZeroU8::new)
                .unwrap_or(NonZeroU8::MIN),
        )
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Without year/month context only the upper bound of any month applies
        Self::with_limit(value, DAYS_IN_MONTH[1]).ok_or(ParseError::InvalidDay {
            year: 0,
            month: 0,
            day: value,
        })
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// Checks that a year lies within `MIN_YEAR..=MAX_YEAR`
///
/// # Errors
/// Returns `ParseError::InvalidYear` outside that range.
pub(crate) fn check_year(year: i64) -> Result<i64, ParseError> {
    if year < MIN_YEAR || year > MAX_YEAR {
        return Err(ParseError::InvalidYear(year));
    }
    Ok(year)
}

/// Position of `days + offset` within a repeating cycle of `len` days, counting from 0.
///
/// Reduces before shifting, so any `i64` day number is accepted.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) const fn cycle_index(days: i64, offset: i64, len: i64) -> usize {
    debug_assert!(len > 0 && offset >= 0 && offset < len);
    // rem_euclid is in 0..len, which always fits
    (days.rem_euclid(len) + offset).rem_euclid(len) as usize
}

/// Proleptic Gregorian leap-year rule; valid for negative (astronomical) years too.
pub const fn is_leap_year(year: i64) -> bool {
    (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
        || year.rem_euclid(GREGORIAN_CYCLE) == 0
}

/// Length of a Gregorian month, February included
pub const fn days_in_month(year: i64, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
