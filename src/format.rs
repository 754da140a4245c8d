use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{MayanDate, system::CalendarSystem};

/// How much of a date to render.
///
/// `LongCount`, `Tzolkin` and `Haab` only mean something for Mayan dates; other
/// calendars render them in their long form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateStyle {
    LongCount,
    Tzolkin,
    Haab,
    Short,
    Medium,
    #[default]
    Long,
}

impl DateStyle {
    pub const ALL: [Self; 6] = [
        Self::LongCount,
        Self::Tzolkin,
        Self::Haab,
        Self::Short,
        Self::Medium,
        Self::Long,
    ];

    /// Selector string, as accepted by `FromStr`
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LongCount => "longCount",
            Self::Tzolkin => "tzolkin",
            Self::Haab => "haab",
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    /// True for styles that exist only for Mayan dates
    pub const fn is_mayan_only(self) -> bool {
        matches!(self, Self::LongCount | Self::Tzolkin | Self::Haab)
    }
}

impl fmt::Display for DateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown selector string for a style or calendar system.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind}: {value:?}")]
pub struct SelectorError {
    pub kind:  &'static str,
    pub value: String,
}

impl FromStr for DateStyle {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SelectorError {
                kind:  "date style",
                value: wanted.to_owned(),
            })
    }
}

/// Formatting choices passed explicitly with every call.
///
/// Deserializes with defaults, so `{}` means the long Mayan form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    pub system: CalendarSystem,
    pub style:  DateStyle,
}

impl FormatOptions {
    pub const fn new(system: CalendarSystem, style: DateStyle) -> Self {
        Self { system, style }
    }
}

/// Renders a converted date in the requested style
pub fn format_date(date: &MayanDate, style: DateStyle) -> String {
    match style {
        DateStyle::LongCount | DateStyle::Short => date.long_count().to_string(),
        DateStyle::Tzolkin => date.tzolkin().to_string(),
        DateStyle::Haab => date.haab().to_string(),
        DateStyle::Medium | DateStyle::Long => date.to_string(),
    }
}
