use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    GregorianDate, MayanDate,
    format::{DateStyle, FormatOptions, SelectorError, format_date},
    julian::JulianDate,
    long_count::LongCount,
    mayan_to_gregorian,
};

/// Calendar systems a date can be rendered in or translated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarSystem {
    Gregorian,
    #[default]
    Mayan,
    Julian,
}

impl CalendarSystem {
    /// Every supported system, in display order
    pub const ALL: [Self; 3] = [Self::Gregorian, Self::Mayan, Self::Julian];

    /// Lowercase selector, as accepted by `FromStr` and serde
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gregorian => "gregorian",
            Self::Mayan => "mayan",
            Self::Julian => "julian",
        }
    }
}

impl fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarSystem {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|system| system.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SelectorError {
                kind:  "calendar system",
                value: wanted.to_owned(),
            })
    }
}

/// One day expressed in a particular calendar system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarDate {
    Gregorian(GregorianDate),
    Mayan(LongCount),
    Julian(JulianDate),
}

impl CalendarDate {
    /// Expresses a Gregorian day in `system`
    pub fn from_gregorian(date: GregorianDate, system: CalendarSystem) -> Self {
        match system {
            CalendarSystem::Gregorian => Self::Gregorian(date),
            CalendarSystem::Mayan => Self::Mayan(MayanDate::from_gregorian(date).long_count()),
            CalendarSystem::Julian => Self::Julian(JulianDate::from_gregorian(date)),
        }
    }

    /// The same day in the proleptic Gregorian calendar; Long Counts are normalized first
    pub fn to_gregorian(&self) -> GregorianDate {
        match self {
            Self::Gregorian(date) => *date,
            Self::Mayan(long_count) => mayan_to_gregorian(*long_count),
            Self::Julian(date) => date.to_gregorian(),
        }
    }

    /// Which calendar this date is written in
    pub const fn system(&self) -> CalendarSystem {
        match self {
            Self::Gregorian(_) => CalendarSystem::Gregorian,
            Self::Mayan(_) => CalendarSystem::Mayan,
            Self::Julian(_) => CalendarSystem::Julian,
        }
    }

    /// The same day in another calendar system
    pub fn translate(&self, to: CalendarSystem) -> Self {
        if self.system() == to {
            return *self;
        }
        Self::from_gregorian(self.to_gregorian(), to)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gregorian(date) => fmt::Display::fmt(date, f),
            Self::Mayan(long_count) => fmt::Display::fmt(long_count, f),
            Self::Julian(date) => fmt::Display::fmt(date, f),
        }
    }
}

fn format_gregorian(date: GregorianDate, style: DateStyle) -> String {
    let month = date.month_typed();
    match style {
        DateStyle::Short => format!("{}/{}/{}", date.month(), date.day(), date.year()),
        DateStyle::Medium => format!("{} {}, {}", month.abbreviation(), date.day(), date.year()),
        _ => format!("{} {}, {}", month.name(), date.day(), date.year()),
    }
}

fn format_julian(date: JulianDate, style: DateStyle) -> String {
    match style {
        DateStyle::Short => date.short(),
        DateStyle::Medium => date.medium(),
        _ => date.long(),
    }
}

/// Renders a Gregorian day in the system and style named by `options`.
///
/// Mayan-only styles (`longCount`, `tzolkin`, `haab`) fall back to the long
/// form for the other systems.
pub fn format_in(date: GregorianDate, options: FormatOptions) -> String {
    let FormatOptions { system, style } = options;
    if system != CalendarSystem::Mayan && style.is_mayan_only() {
        trace!(%system, %style, "style has no meaning outside the Mayan calendar; using long form");
    }

    match system {
        CalendarSystem::Gregorian => format_gregorian(date, style),
        CalendarSystem::Mayan => format_date(&MayanDate::from_gregorian(date), style),
        CalendarSystem::Julian => format_julian(JulianDate::from_gregorian(date), style),
    }
}

/// The day rendered in every supported system, long form
pub fn all_systems(date: GregorianDate) -> Vec<(CalendarSystem, String)> {
    CalendarSystem::ALL
        .into_iter()
        .map(|system| (system, format_in(date, FormatOptions::new(system, DateStyle::Long))))
        .collect()
}
