use std::{fmt, str::FromStr};

use crate::{
    DATE_SEPARATOR, ParseError,
    consts::{
        DAYS_IN_GREGORIAN_CYCLE, GREGORIAN_CYCLE, MAX_UNIX_DAY, MIN_DAY, MIN_UNIX_DAY,
        UNIX_EPOCH_FROM_MARCH_ZERO,
    },
    types::{Day, Month, check_year, days_in_month},
};

/// A calendar day in the proleptic Gregorian calendar.
///
/// Years use astronomical numbering: year 0 exists and is 1 BCE, year -3113 is
/// 3114 BCE. Years are limited to `MIN_YEAR..=MAX_YEAR`. The value is a date,
/// never an instant; no time zone is involved. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year:  i64,
    month: Month,
    day:   Day,
}

impl GregorianDate {
    /// Creates a date from raw components
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear`, `ParseError::InvalidMonth` or
    /// `ParseError::InvalidDay` when the components do not name a supported day.
    pub fn new(year: i64, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = check_year(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month.get())?;
        Ok(Self { year, month, day })
    }

    /// Creates a date from an already validated month and a raw day
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` for an unsupported year, or
    /// `ParseError::InvalidDay` if the day does not exist in that month.
    pub fn from_parts(year: i64, month: Month, day: u8) -> Result<Self, ParseError> {
        let year = check_year(year)?;
        let day = Day::new(day, year, month.get())?;
        Ok(Self { year, month, day })
    }

    /// The first day of a month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` for an unsupported year.
    pub fn first_day_of(year: i64, month: Month) -> Result<Self, ParseError> {
        Ok(Self {
            year: check_year(year)?,
            month,
            day: Day::from_computed(i64::from(MIN_DAY)),
        })
    }

    /// Returns the (astronomical) year
    pub const fn year(&self) -> i64 {
        self.year
    }

    /// Returns the month as u8
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of month as u8
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Number of days in this date's month
    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.year, self.month.get())
    }

    /// Days elapsed since 1970-01-01 (negative before it).
    pub fn to_unix_days(&self) -> i64 {
        // Count from a March-based year so the leap day is the last day of the year
        let month = i64::from(self.month.get());
        let year = if month <= 2 { self.year - 1 } else { self.year };
        let era = year.div_euclid(GREGORIAN_CYCLE);
        let year_of_era = year.rem_euclid(GREGORIAN_CYCLE);
        let shifted_month = if month > 2 { month - 3 } else { month + 9 };
        let day_of_year = (153 * shifted_month + 2) / 5 + i64::from(self.day.get()) - 1;
        let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
        era * DAYS_IN_GREGORIAN_CYCLE + day_of_era - UNIX_EPOCH_FROM_MARCH_ZERO
    }

    /// The date `days` days after 1970-01-01 (before it when negative).
    ///
    /// Day numbers outside `MIN_UNIX_DAY..=MAX_UNIX_DAY` saturate at the first
    /// or last supported day.
    pub fn from_unix_days(days: i64) -> Self {
        let shifted = days.clamp(MIN_UNIX_DAY, MAX_UNIX_DAY) + UNIX_EPOCH_FROM_MARCH_ZERO;
        let era = shifted.div_euclid(DAYS_IN_GREGORIAN_CYCLE);
        let day_of_era = shifted.rem_euclid(DAYS_IN_GREGORIAN_CYCLE);
        let year_of_era =
            (day_of_era - day_of_era / 1_460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
        let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
        let shifted_month = (5 * day_of_year + 2) / 153;
        let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
        let month = if shifted_month < 10 { shifted_month + 3 } else { shifted_month - 9 };
        let year = year_of_era + era * GREGORIAN_CYCLE + i64::from(month <= 2);

        Self {
            year,
            month: Month::from_computed(month),
            day: Day::from_computed(day),
        }
    }

    /// The date `days` days later (earlier when negative), saturating at the supported range
    pub fn add_days(&self, days: i64) -> Self {
        Self::from_unix_days(self.to_unix_days().saturating_add(days))
    }

    /// Signed number of days from `other` to `self`
    pub fn days_since(&self, other: &Self) -> i64 {
        self.to_unix_days() - other.to_unix_days()
    }

    /// First day of this date's month
    pub fn first_of_month(&self) -> Self {
        Self {
            year:  self.year,
            month: self.month,
            day:   Day::from_computed(i64::from(MIN_DAY)),
        }
    }

    /// Last day of this date's month
    pub fn last_of_month(&self) -> Self {
        Self {
            year:  self.year,
            month: self.month,
            day:   Day::from_computed(i64::from(self.days_in_month())),
        }
    }

    fn parse_component<T: FromStr>(s: &str) -> Result<T, ParseError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        s.parse::<T>().map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            f.write_str("-")?;
        }
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.unsigned_abs(),
            self.month.get(),
            self.day.get()
        )
    }
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    /// Parses ISO `YYYY-MM-DD`, with an optional leading sign on the year
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let (negative, unsigned) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let parts: Vec<&str> = unsigned.split(DATE_SEPARATOR).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s): {s}",
                parts.len()
            )));
        }

        let magnitude: i64 = Self::parse_component(parts[0])?;
        let year = if negative { -magnitude } else { magnitude };
        let month: u8 = Self::parse_component(parts[1])?;
        let day: u8 = Self::parse_component(parts[2])?;

        Self::new(year, month, day)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
