mod almanac;
mod consts;
mod energies;
mod format;
mod gregorian;
mod haab;
mod julian;
mod long_count;
mod prelude;
mod range;
mod round;
mod system;
mod types;
mod tzolkin;

pub use consts::*;
pub use energies::{DayEnergy, MonthEnergies};
pub use format::{DateStyle, FormatOptions, SelectorError, format_date};
pub use gregorian::GregorianDate;
pub use haab::{HaabDate, HaabMonth};
pub use julian::{JulianDate, is_julian_leap_year};
pub use long_count::{DomainWarning, FormatError, LongCount, PeriodEnding, Unit};
pub use range::{DateRange, Days, RangeError};
pub use round::{MayanDate, SignificantDate, is_same_mayan_day, next_significant_date};
pub use system::{CalendarDate, CalendarSystem, all_systems, format_in};
pub use types::{Day, Month, days_in_month, is_leap_year};
pub use tzolkin::{TzolkinDate, TzolkinDayName};

use crate::prelude::*;
use tracing::debug;

/// Error type for Gregorian date input.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {} to {})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i64),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i64, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Error type for Tzolkin and Haab text such as `4 Ahau` or `3 Kankin`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CycleParseError {
    #[error("Expected '<number> <name>', found: {0:?}")]
    InvalidFormat(String),
    #[error("Invalid day number: {0:?}")]
    InvalidNumber(String),
    #[error("Unknown Tzolkin day name: {0:?}")]
    UnknownDayName(String),
    #[error("Unknown Haab month: {0:?}")]
    UnknownMonth(String),
    #[error("Tzolkin number out of range 1..=13: {0}")]
    NumberOutOfRange(u8),
    #[error("Haab position {position} does not exist in {month}")]
    PositionOutOfRange { position: u8, month: HaabMonth },
}

/// Long Count, Tzolkin and Haab of a Gregorian day
pub fn gregorian_to_mayan(date: GregorianDate) -> MayanDate {
    MayanDate::from_gregorian(date)
}

/// Gregorian day a Long Count denotes.
///
/// Places outside their canonical range are accepted and normalized through
/// the day number; each one is reported as a `debug` event. Day numbers
/// outside `MIN_MAYAN_DAY..=MAX_MAYAN_DAY` saturate to the first or last
/// supported day.
pub fn mayan_to_gregorian(long_count: LongCount) -> GregorianDate {
    for warning in long_count.domain_warnings() {
        debug!(%long_count, %warning, "normalizing non-canonical Long Count");
    }
    let days = long_count.to_days();
    if !(MIN_MAYAN_DAY..=MAX_MAYAN_DAY).contains(&days) {
        debug!(%long_count, days, "Long Count outside the supported range; saturating");
    }
    GregorianDate::from_unix_days(days.saturating_sub(MAYAN_EPOCH_OFFSET))
}

/// Parses `baktun.katun.tun.uinal.kin`
///
/// # Errors
/// Returns a `FormatError` unless the text is exactly five dot-separated
/// integers denoting a day in `MIN_MAYAN_DAY..=MAX_MAYAN_DAY`.
pub fn parse_long_count(s: &str) -> Result<LongCount, FormatError> {
    s.parse()
}

/// Lazily converted entries for every day of a Gregorian month
///
/// # Errors
/// Returns `ParseError::InvalidYear` for a year outside `MIN_YEAR..=MAX_YEAR`.
pub fn month_energies(year: i64, month: Month) -> Result<MonthEnergies, ParseError> {
    MonthEnergies::new(year, month)
}

#[cfg(test)]
pub(crate) mod test_utils {
    use crate::{GregorianDate, Month};

    /// Helper to build a known-valid date in tests
    pub fn date(year: i64, month: u8, day: u8) -> GregorianDate {
        GregorianDate::new(year, month, day).expect("test date should be valid")
    }

    /// Helper to build a known-valid month in tests
    pub fn month(value: u8) -> Month {
        Month::new(value).expect("test month should be valid")
    }
}
