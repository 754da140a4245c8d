use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    CycleParseError,
    consts::{
        TZOLKIN_DAY_NAMES, TZOLKIN_NAME_CYCLE, TZOLKIN_NAME_OFFSET, TZOLKIN_NUMBER_CYCLE,
        TZOLKIN_NUMBER_OFFSET, TZOLKIN_NUMBERS,
    },
    types::cycle_index,
};

/// The twenty Tzolkin day signs in cyclic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TzolkinDayName {
    Imix,
    Ik,
    Akbal,
    Kan,
    Chicchan,
    Cimi,
    Manik,
    Lamat,
    Muluc,
    Oc,
    Chuen,
    Eb,
    Ben,
    Ix,
    Men,
    Cib,
    Caban,
    Etznab,
    Cauac,
    Ahau,
}

impl TzolkinDayName {
    /// All day signs, starting at Imix
    pub const ALL: [Self; 20] = [
        Self::Imix,
        Self::Ik,
        Self::Akbal,
        Self::Kan,
        Self::Chicchan,
        Self::Cimi,
        Self::Manik,
        Self::Lamat,
        Self::Muluc,
        Self::Oc,
        Self::Chuen,
        Self::Eb,
        Self::Ben,
        Self::Ix,
        Self::Men,
        Self::Cib,
        Self::Caban,
        Self::Etznab,
        Self::Cauac,
        Self::Ahau,
    ];

    /// Zero-based position in the cycle
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Day sign name as written in the Yucatec spelling, e.g. `Ahau`
    pub const fn name(self) -> &'static str {
        TZOLKIN_DAY_NAMES[self.index()]
    }
}

impl fmt::Display for TzolkinDayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TzolkinDayName {
    type Err = CycleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|sign| sign.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CycleParseError::UnknownDayName(wanted.to_owned()))
    }
}

/// A Tzolkin position such as `4 Ahau`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TzolkinDate {
    number: u8,
    name:   TzolkinDayName,
}

impl TzolkinDate {
    /// Creates a Tzolkin date, checking that the number is 1..=13
    pub fn new(number: u8, name: TzolkinDayName) -> Option<Self> {
        TZOLKIN_NUMBERS
            .contains(&number)
            .then_some(Self { number, name })
    }

    /// Tzolkin position of a Mayan day number; day 0 is 4 Ahau
    pub const fn from_days(days: i64) -> Self {
        Self {
            number: TZOLKIN_NUMBERS[cycle_index(days, TZOLKIN_NUMBER_OFFSET, TZOLKIN_NUMBER_CYCLE)],
            name:   TzolkinDayName::ALL[cycle_index(days, TZOLKIN_NAME_OFFSET, TZOLKIN_NAME_CYCLE)],
        }
    }

    /// The day number, 1..=13
    pub const fn number(&self) -> u8 {
        self.number
    }

    /// The day sign
    pub const fn name(&self) -> TzolkinDayName {
        self.name
    }
}

impl fmt::Display for TzolkinDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.name)
    }
}

impl FromStr for TzolkinDate {
    type Err = CycleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (number, name) = s
            .trim()
            .split_once(char::is_whitespace)
            .ok_or_else(|| CycleParseError::InvalidFormat(s.to_owned()))?;
        let number: u8 = number
            .parse()
            .map_err(|_| CycleParseError::InvalidNumber(number.to_owned()))?;
        let name: TzolkinDayName = name.parse()?;
        Self::new(number, name).ok_or(CycleParseError::NumberOutOfRange(number))
    }
}

impl Serialize for TzolkinDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TzolkinDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
