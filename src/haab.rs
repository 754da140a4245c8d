use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    CycleParseError,
    consts::{HAAB_DAYS, HAAB_MONTH_DAYS, HAAB_MONTH_NAMES, HAAB_OFFSET, UAYEB_DAYS},
    types::cycle_index,
};

/// The nineteen Haab months in calendar order.
///
/// The Haab has no leap day, so it drifts against the solar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HaabMonth {
    Pop,
    Uo,
    Zip,
    Zotz,
    Tzec,
    Xul,
    Yaxkin,
    Mol,
    Chen,
    Yax,
    Zac,
    Ceh,
    Mac,
    Kankin,
    Muan,
    Pax,
    Kayab,
    Cumku,
    Uayeb,
}

impl HaabMonth {
    /// All months, starting at Pop
    pub const ALL: [Self; 19] = [
        Self::Pop,
        Self::Uo,
        Self::Zip,
        Self::Zotz,
        Self::Tzec,
        Self::Xul,
        Self::Yaxkin,
        Self::Mol,
        Self::Chen,
        Self::Yax,
        Self::Zac,
        Self::Ceh,
        Self::Mac,
        Self::Kankin,
        Self::Muan,
        Self::Pax,
        Self::Kayab,
        Self::Cumku,
        Self::Uayeb,
    ];

    /// Zero-based position in the year
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Month name, e.g. `Kankin`
    pub const fn name(self) -> &'static str {
        HAAB_MONTH_NAMES[self.index()]
    }

    /// Number of days in the month: 20, or 5 for Uayeb
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn days(self) -> u8 {
        match self {
            Self::Uayeb => UAYEB_DAYS as u8,
            _ => HAAB_MONTH_DAYS as u8,
        }
    }
}

impl fmt::Display for HaabMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HaabMonth {
    type Err = CycleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|month| month.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CycleParseError::UnknownMonth(wanted.to_owned()))
    }
}

/// A Haab position such as `8 Cumku`; positions count from 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HaabDate {
    position: u8,
    month:    HaabMonth,
}

impl HaabDate {
    /// Creates a Haab date, checking the position against the month length
    pub const fn new(position: u8, month: HaabMonth) -> Option<Self> {
        if position < month.days() {
            Some(Self { position, month })
        } else {
            None
        }
    }

    /// Haab position of a Mayan day number; day 0 is 8 Cumku
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_days(days: i64) -> Self {
        let day_of_year = cycle_index(days, HAAB_OFFSET, HAAB_DAYS);
        let month_len = HAAB_MONTH_DAYS as usize;
        Self {
            // Always below 20
            position: (day_of_year % month_len) as u8,
            month:    HaabMonth::ALL[day_of_year / month_len],
        }
    }

    /// Day within the month, 0..=19 (0..=4 in Uayeb)
    pub const fn position(&self) -> u8 {
        self.position
    }

    /// Haab month, Uayeb included
    pub const fn month(&self) -> HaabMonth {
        self.month
    }

    /// Zero-based day of the Haab year, 0..365
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn day_of_year(&self) -> u16 {
        self.month.index() as u16 * HAAB_MONTH_DAYS as u16 + self.position as u16
    }
}

impl fmt::Display for HaabDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.position, self.month)
    }
}

impl FromStr for HaabDate {
    type Err = CycleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (position, month) = s
            .trim()
            .split_once(char::is_whitespace)
            .ok_or_else(|| CycleParseError::InvalidFormat(s.to_owned()))?;
        let position: u8 = position
            .parse()
            .map_err(|_| CycleParseError::InvalidNumber(position.to_owned()))?;
        let month: HaabMonth = month.parse()?;
        Self::new(position, month).ok_or(CycleParseError::PositionOutOfRange { position, month })
    }
}

impl Serialize for HaabDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HaabDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
