use std::fmt;

use crate::{
    GregorianDate, ParseError,
    consts::{
        DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_UNIX_DAY,
        MIN_UNIX_DAY, UNIX_EPOCH_JDN,
    },
    types::{Day, Month, check_year},
};

// Julian Day Number arithmetic shifts years by this much so every year is positive
const JDN_YEAR_SHIFT: i64 = 4_800;
const JULIAN_JDN_OFFSET: i64 = 32_083;

/// A day in the proleptic Julian calendar, astronomical year numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JulianDate {
    year:  i64,
    month: Month,
    day:   Day,
}

/// Julian leap rule: every fourth year, no century exception
pub const fn is_julian_leap_year(year: i64) -> bool {
    year.rem_euclid(LEAP_YEAR_CYCLE) == 0
}

const fn julian_days_in_month(year: i64, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_julian_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

impl JulianDate {
    /// Creates a Julian date from its components
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear`, `ParseError::InvalidMonth` or
    /// `ParseError::InvalidDay` when the components do not name a supported
    /// day of the Julian calendar.
    pub fn new(year: i64, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = check_year(year)?;
        let month = Month::new(month)?;
        let day = Day::with_limit(day, julian_days_in_month(year, month.get())).ok_or(
            ParseError::InvalidDay {
                year,
                month: month.get(),
                day,
            },
        )?;
        Ok(Self { year, month, day })
    }

    /// Astronomical year (1 BC is year 0)
    pub const fn year(&self) -> i64 {
        self.year
    }

    /// Month number, 1-12
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Day of the month, starting at 1
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Month as the validated newtype
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Days elapsed since 1970-01-01 (Gregorian), negative before it
    pub fn to_unix_days(&self) -> i64 {
        let month = i64::from(self.month.get());
        let a = (14 - month) / 12;
        let y = self.year + JDN_YEAR_SHIFT - a;
        let m = month + 12 * a - 3;
        let jdn = i64::from(self.day.get()) + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4)
            - JULIAN_JDN_OFFSET;
        jdn - UNIX_EPOCH_JDN
    }

    /// Julian date of a Unix day number, saturating at the supported range
    pub fn from_unix_days(days: i64) -> Self {
        let c = days.clamp(MIN_UNIX_DAY, MAX_UNIX_DAY) + UNIX_EPOCH_JDN + JULIAN_JDN_OFFSET - 1;
        let d = (4 * c + 3).div_euclid(1_461);
        let e = c - (1_461 * d).div_euclid(4);
        let m = (5 * e + 2) / 153;
        let day = e - (153 * m + 2) / 5 + 1;
        let month = m + 3 - 12 * (m / 10);
        let year = d - JDN_YEAR_SHIFT + m / 10;

        Self {
            year,
            month: Month::from_computed(month),
            day: Day::from_computed(day),
        }
    }

    /// The same day in the Julian calendar
    pub fn from_gregorian(date: GregorianDate) -> Self {
        Self::from_unix_days(date.to_unix_days())
    }

    /// The same day in the proleptic Gregorian calendar
    pub fn to_gregorian(&self) -> GregorianDate {
        GregorianDate::from_unix_days(self.to_unix_days())
    }

    /// `21/12/2012`
    pub fn short(&self) -> String {
        format!("{}/{}/{}", self.day, self.month, self.year)
    }

    /// `21 Dec 2012`
    pub fn medium(&self) -> String {
        format!("{} {} {}", self.day, self.month.abbreviation(), self.year)
    }

    /// `21 December 2012 (Julian)`
    pub fn long(&self) -> String {
        format!("{} {} {} (Julian)", self.day, self.month.name(), self.year)
    }
}

impl fmt::Display for JulianDate {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{consts::MAX_YEAR, test_utils::date};

    #[test]
    fn test_against_gregorian() {
        struct TestCase {
            julian:    (i64, u8, u8),
            gregorian: (i64, u8, u8),
        }

        let cases = [
            TestCase {
                julian:    (1582, 10, 5),
                gregorian: (1582, 10, 15),
            },
            TestCase {
                julian:    (1999, 12, 19),
                gregorian: (2000, 1, 1),
            },
            TestCase {
                julian:    (1969, 12, 19),
                gregorian: (1970, 1, 1),
            },
            TestCase {
                julian:    (1, 1, 3),
                gregorian: (1, 1, 1),
            },
            TestCase {
                julian:    (-3113, 9, 6),
                gregorian: (-3113, 8, 11),
            },
        ];

        for case in &cases {
            let (jy, jm, jd) = case.julian;
            let (gy, gm, gd) = case.gregorian;
            let julian = JulianDate::new(jy, jm, jd).unwrap();
            assert_eq!(julian.to_gregorian(), date(gy, gm, gd), "{julian} to Gregorian");
            assert_eq!(JulianDate::from_gregorian(date(gy, gm, gd)), julian, "{gy}-{gm}-{gd} to Julian");
        }
    }

    #[test]
    fn test_leap_rule() {
        assert!(is_julian_leap_year(1900));
        assert!(is_julian_leap_year(-4));
        assert!(!is_julian_leap_year(-1));
        assert!(JulianDate::new(1900, 2, 29).is_ok());
        assert!(matches!(
            JulianDate::new(1901, 2, 29),
            Err(ParseError::InvalidDay { year: 1901, month: 2, day: 29 })
        ));
        assert!(matches!(JulianDate::new(1901, 13, 1), Err(ParseError::InvalidMonth(13))));
    }

    #[test]
    fn test_unix_days_walk_is_contiguous() {
        let mut days = JulianDate::new(1899, 12, 1).unwrap().to_unix_days();
        let mut current = JulianDate::from_unix_days(days);
        for _ in 0..800 {
            let next = JulianDate::from_unix_days(days + 1);
            assert!(next > current);
            assert_eq!(next.to_unix_days(), days + 1);
            current = next;
            days += 1;
        }
    }

    #[test]
    fn test_year_range() {
        assert!(JulianDate::new(MAX_YEAR, 1, 1).is_ok());
        assert_eq!(JulianDate::new(MAX_YEAR + 1, 1, 1), Err(ParseError::InvalidYear(MAX_YEAR + 1)));
        assert_eq!(JulianDate::new(i64::MIN, 1, 1), Err(ParseError::InvalidYear(i64::MIN)));

        assert_eq!(
            JulianDate::from_unix_days(i64::MAX),
            JulianDate::from_unix_days(MAX_UNIX_DAY)
        );
        assert_eq!(
            JulianDate::from_unix_days(i64::MIN).to_gregorian(),
            GregorianDate::from_unix_days(MIN_UNIX_DAY)
        );
    }

    #[test]
    fn test_renderings() {
        let julian = JulianDate::from_gregorian(date(2013, 1, 3));
        assert_eq!(julian.short(), "21/12/2012");
        assert_eq!(julian.medium(), "21 Dec 2012");
        assert_eq!(julian.long(), "21 December 2012 (Julian)");
        assert_eq!(julian.to_string(), "2012-12-21");
    }
}
