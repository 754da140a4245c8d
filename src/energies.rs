use std::iter::FusedIterator;

use serde::Serialize;

use crate::{
    GregorianDate, MayanDate, ParseError,
    haab::HaabDate,
    long_count::LongCount,
    range::{DateRange, Days},
    tzolkin::TzolkinDate,
    types::Month,
};

/// One day of a month listing with its Mayan reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayEnergy {
    pub gregorian_date: GregorianDate,
    pub tzolkin:        TzolkinDate,
    pub haab:           HaabDate,
    pub long_count:     LongCount,
}

impl DayEnergy {
    /// Converts one Gregorian day into its listing entry
    pub fn new(date: GregorianDate) -> Self {
        let mayan = MayanDate::from_gregorian(date);
        Self {
            gregorian_date: date,
            tzolkin:        mayan.tzolkin(),
            haab:           mayan.haab(),
            long_count:     mayan.long_count(),
        }
    }
}

/// Lazy walk over a span of days, converting each one as it is reached.
///
/// Cloning gives an independent walk from the current position; calling
/// [`MonthEnergies::restart`] gives a fresh one from the first day.
#[derive(Debug, Clone)]
pub struct MonthEnergies {
    range: DateRange,
    days:  Days,
}

impl MonthEnergies {
    /// All days of a Gregorian month, ascending
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` for an unsupported year.
    pub fn new(year: i64, month: Month) -> Result<Self, ParseError> {
        DateRange::month(year, month).map(Self::over)
    }

    /// All days of an arbitrary range, ascending
    pub fn over(range: DateRange) -> Self {
        Self {
            range,
            days: range.days(),
        }
    }

    /// The whole range being listed, regardless of how far iteration has gone
    pub const fn range(&self) -> DateRange {
        self.range
    }

    /// A new walk from the first day of the same range
    pub fn restart(&self) -> Self {
        Self::over(self.range)
    }
}

impl Iterator for MonthEnergies {
    type Item = DayEnergy;

    fn next(&mut self) -> Option<Self::Item> {
        self.days.next().map(DayEnergy::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.days.size_hint()
    }
}

impl DoubleEndedIterator for MonthEnergies {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.days.next_back().map(DayEnergy::new)
    }
}

impl ExactSizeIterator for MonthEnergies {}

impl FusedIterator for MonthEnergies {}
