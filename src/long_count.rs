use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    LONG_COUNT_SEPARATOR,
    consts::{
        DAYS_IN_BAKTUN, DAYS_IN_KATUN, DAYS_IN_KIN, DAYS_IN_TUN, DAYS_IN_UINAL, MAX_MAYAN_DAY,
        MAX_UINAL, MAX_VIGESIMAL_DIGIT, MIN_MAYAN_DAY,
    },
    prelude::*,
};

/// One of the five Long Count places, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Unit {
    #[display(fmt = "baktun")]
    Baktun,
    #[display(fmt = "katun")]
    Katun,
    #[display(fmt = "tun")]
    Tun,
    #[display(fmt = "uinal")]
    Uinal,
    #[display(fmt = "kin")]
    Kin,
}

impl Unit {
    /// All places in written order
    pub const ALL: [Self; 5] = [Self::Baktun, Self::Katun, Self::Tun, Self::Uinal, Self::Kin];

    /// Largest value the place takes in canonical form; the baktun is unbounded
    pub const fn canonical_max(self) -> Option<i64> {
        match self {
            Self::Baktun => None,
            Self::Katun | Self::Tun | Self::Kin => Some(MAX_VIGESIMAL_DIGIT),
            Self::Uinal => Some(MAX_UINAL),
        }
    }

    /// Days in one step of this place
    pub const fn days(self) -> i64 {
        match self {
            Self::Baktun => DAYS_IN_BAKTUN,
            Self::Katun => DAYS_IN_KATUN,
            Self::Tun => DAYS_IN_TUN,
            Self::Uinal => DAYS_IN_UINAL,
            Self::Kin => DAYS_IN_KIN,
        }
    }
}

/// A Long Count position `baktun.katun.tun.uinal.kin`.
///
/// Any integers are accepted for every place: the value denotes the day number
/// `baktun*144000 + katun*7200 + tun*360 + uinal*20 + kin`. Values produced by
/// [`LongCount::from_days`] are canonical; the baktun goes negative for days
/// before the Mayan epoch while the lower places stay in range. Parsing only
/// accepts Long Counts whose day number lies in `MIN_MAYAN_DAY..=MAX_MAYAN_DAY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LongCount {
    pub baktun: i64,
    pub katun:  i64,
    pub tun:    i64,
    pub uinal:  i64,
    pub kin:    i64,
}

/// Error type for Long Count text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Nothing but whitespace was given.
    #[error("Empty Long Count string")]
    Empty,

    /// The text does not split into exactly five places.
    #[error(
        "Invalid Long Count format: expected 5 dot-separated components \
         (baktun.katun.tun.uinal.kin), found {found}"
    )]
    WrongComponentCount { found: usize },

    /// One place is not an integer.
    #[error("Invalid Long Count {unit} component: {token:?}")]
    InvalidComponent { unit: Unit, token: String },

    /// The places denote a day outside the supported range.
    #[error(
        "Long Count {text:?} is outside the supported day numbers {}..={}",
        MIN_MAYAN_DAY,
        MAX_MAYAN_DAY
    )]
    OutOfRange { text: String },
}

/// A place outside its canonical range, reported but never rejected.
///
/// Such a Long Count is still a well-defined day number; conversion normalizes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{unit} value {value} is outside the canonical range 0..={max}")]
pub struct DomainWarning {
    pub unit:  Unit,
    pub value: i64,
    pub max:   i64,
}

/// Which cycle a period-ending date closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum PeriodEnding {
    #[display(fmt = "Tun completion")]
    Tun,
    #[display(fmt = "Katun completion")]
    Katun,
    #[display(fmt = "Baktun completion")]
    Baktun,
}

impl LongCount {
    /// Creates a Long Count from its five places, baktun first
    pub const fn new(baktun: i64, katun: i64, tun: i64, uinal: i64, kin: i64) -> Self {
        Self {
            baktun,
            katun,
            tun,
            uinal,
            kin,
        }
    }

    /// Canonical Long Count of a Mayan day number (days since `0.0.0.0.0`)
    pub const fn from_days(days: i64) -> Self {
        let baktun = days.div_euclid(DAYS_IN_BAKTUN);
        let rest = days.rem_euclid(DAYS_IN_BAKTUN);
        let katun = rest / DAYS_IN_KATUN;
        let rest = rest % DAYS_IN_KATUN;
        let tun = rest / DAYS_IN_TUN;
        let rest = rest % DAYS_IN_TUN;
        let uinal = rest / DAYS_IN_UINAL;
        let kin = rest % DAYS_IN_UINAL;

        Self::new(baktun, katun, tun, uinal, kin)
    }

    /// Mayan day number this Long Count denotes, saturating at the `i64` bounds
    pub const fn to_days(&self) -> i64 {
        self.baktun
            .saturating_mul(DAYS_IN_BAKTUN)
            .saturating_add(self.katun.saturating_mul(DAYS_IN_KATUN))
            .saturating_add(self.tun.saturating_mul(DAYS_IN_TUN))
            .saturating_add(self.uinal.saturating_mul(DAYS_IN_UINAL))
            .saturating_add(self.kin.saturating_mul(DAYS_IN_KIN))
    }

    /// Mayan day number, or `None` when it falls outside `MIN_MAYAN_DAY..=MAX_MAYAN_DAY`
    pub fn checked_days(&self) -> Option<i64> {
        let mut total = 0_i64;
        for unit in Unit::ALL {
            total = self
                .get(unit)
                .checked_mul(unit.days())
                .and_then(|days| total.checked_add(days))?;
        }
        (MIN_MAYAN_DAY..=MAX_MAYAN_DAY).contains(&total).then_some(total)
    }

    /// The value of one place
    pub const fn get(&self, unit: Unit) -> i64 {
        match unit {
            Unit::Baktun => self.baktun,
            Unit::Katun => self.katun,
            Unit::Tun => self.tun,
            Unit::Uinal => self.uinal,
            Unit::Kin => self.kin,
        }
    }

    /// Places as a tuple, baktun first
    pub const fn components(&self) -> (i64, i64, i64, i64, i64) {
        (self.baktun, self.katun, self.tun, self.uinal, self.kin)
    }

    /// Places outside their canonical range
    pub fn domain_warnings(&self) -> Vec<DomainWarning> {
        Unit::ALL
            .iter()
            .filter_map(|&unit| {
                let max = unit.canonical_max()?;
                let value = self.get(unit);
                (!(0..=max).contains(&value)).then_some(DomainWarning { unit, value, max })
            })
            .collect()
    }

    /// True when every place below the baktun is in its canonical range
    pub fn is_canonical(&self) -> bool {
        self.domain_warnings().is_empty()
    }

    /// The canonical Long Count for the same day
    pub const fn normalized(&self) -> Self {
        Self::from_days(self.to_days())
    }

    /// First day strictly after this one on which a tun ends, and which cycle it closes
    pub const fn next_period_ending(&self) -> (Self, PeriodEnding) {
        let next = self
            .to_days()
            .div_euclid(DAYS_IN_TUN)
            .saturating_add(1)
            .saturating_mul(DAYS_IN_TUN);
        let ending = Self::from_days(next);
        let kind = match (ending.katun, ending.tun) {
            (0, 0) => PeriodEnding::Baktun,
            (_, 0) => PeriodEnding::Katun,
            _ => PeriodEnding::Tun,
        };
        (ending, kind)
    }
}

impl fmt::Display for LongCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = LONG_COUNT_SEPARATOR;
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}{sep}{}",
            self.baktun, self.katun, self.tun, self.uinal, self.kin
        )
    }
}

impl FromStr for LongCount {
    type Err = FormatError;

    /// Parses `baktun.katun.tun.uinal.kin`; places may be non-canonical but the
    /// day number must be supported
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(FormatError::Empty);
        }

        let parts: Vec<&str> = trimmed.split(LONG_COUNT_SEPARATOR).collect();
        if parts.len() != Unit::ALL.len() {
            return Err(FormatError::WrongComponentCount { found: parts.len() });
        }

        let mut places = [0_i64; 5];
        for ((slot, token), unit) in places.iter_mut().zip(&parts).zip(Unit::ALL) {
            *slot = token
                .trim()
                .parse::<i64>()
                .map_err(|_| FormatError::InvalidComponent {
                    unit,
                    token: (*token).to_owned(),
                })?;
        }

        let [baktun, katun, tun, uinal, kin] = places;
        let long_count = Self::new(baktun, katun, tun, uinal, kin);
        match long_count.checked_days() {
            Some(_) => Ok(long_count),
            None => Err(FormatError::OutOfRange {
                text: trimmed.to_owned(),
            }),
        }
    }
}

impl Serialize for LongCount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LongCount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_days_known_values() {
        struct TestCase {
            days:     i64,
            expected: (i64, i64, i64, i64, i64),
        }

        let cases = [
            TestCase {
                days:     0,
                expected: (0, 0, 0, 0, 0),
            },
            TestCase {
                days:     1_872_000,
                expected: (13, 0, 0, 0, 0),
            },
            TestCase {
                days:     1_856_305,
                expected: (12, 17, 16, 7, 5),
            },
            TestCase {
                days:     -1,
                expected: (-1, 19, 19, 17, 19),
            },
            TestCase {
                days:     -144_000,
                expected: (-1, 0, 0, 0, 0),
            },
            TestCase {
                days:     143_999,
                expected: (0, 19, 19, 17, 19),
            },
        ];

        for case in &cases {
            let lc = LongCount::from_days(case.days);
            assert_eq!(lc.components(), case.expected, "day {}", case.days);
            assert_eq!(lc.to_days(), case.days);
            assert!(lc.is_canonical());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(LongCount::new(13, 0, 0, 0, 0).to_string(), "13.0.0.0.0");
        assert_eq!(LongCount::from_days(-1).to_string(), "-1.19.19.17.19");
    }

    #[test]
    fn test_parse() {
        let lc: LongCount = "9.12.11.5.18".parse().unwrap();
        assert_eq!(lc, LongCount::new(9, 12, 11, 5, 18));

        let lc: LongCount = " 13.0.0.0.0 ".parse().unwrap();
        assert_eq!(lc.baktun, 13);

        // Ranges are left to conversion
        let lc: LongCount = "-2.25.0.18.40".parse().unwrap();
        assert_eq!(lc, LongCount::new(-2, 25, 0, 18, 40));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<LongCount>(), Err(FormatError::Empty));
        assert_eq!(
            "13.0.0.0".parse::<LongCount>(),
            Err(FormatError::WrongComponentCount { found: 4 })
        );
        assert_eq!(
            "13.0.0.0.0.0".parse::<LongCount>(),
            Err(FormatError::WrongComponentCount { found: 6 })
        );
        assert_eq!(
            "13.0.x.0.0".parse::<LongCount>(),
            Err(FormatError::InvalidComponent {
                unit:  Unit::Tun,
                token: "x".to_owned(),
            })
        );
        assert!(matches!(
            "13..0.0.0".parse::<LongCount>(),
            Err(FormatError::InvalidComponent {
                unit: Unit::Katun,
                ..
            })
        ));
        assert!("1.2.3.4.5.".parse::<LongCount>().is_err());
    }

    #[test]
    fn test_parse_rejects_unsupported_day_numbers() {
        assert_eq!(
            "100000000000000.0.0.0.0".parse::<LongCount>(),
            Err(FormatError::OutOfRange {
                text: "100000000000000.0.0.0.0".to_owned(),
            })
        );
        // Overflows i64 before any range check could apply
        let huge = format!("{}.0.0.0.0", i64::MAX);
        assert!(matches!(huge.parse::<LongCount>(), Err(FormatError::OutOfRange { .. })));
        let huge = format!("0.0.0.0.{}", i64::MIN);
        assert!(matches!(huge.parse::<LongCount>(), Err(FormatError::OutOfRange { .. })));

        let last = LongCount::from_days(MAX_MAYAN_DAY);
        assert_eq!(last.to_string().parse::<LongCount>(), Ok(last));
        let past = LongCount::from_days(MAX_MAYAN_DAY + 1);
        assert!(matches!(past.to_string().parse::<LongCount>(), Err(FormatError::OutOfRange { .. })));
        let first = LongCount::from_days(MIN_MAYAN_DAY);
        assert_eq!(first.to_string().parse::<LongCount>(), Ok(first));
    }

    #[test]
    fn test_checked_and_saturating_days() {
        assert_eq!(LongCount::new(13, 0, 0, 0, 0).checked_days(), Some(1_872_000));
        assert_eq!(LongCount::new(i64::MAX, 0, 0, 0, 0).checked_days(), None);
        assert_eq!(LongCount::new(i64::MAX, 0, 0, 0, 0).to_days(), i64::MAX);
        assert_eq!(LongCount::new(i64::MIN, 0, 0, 0, -1).to_days(), i64::MIN);
        let (next, _) = LongCount::new(i64::MAX, 0, 0, 0, 0).next_period_ending();
        assert!(next.baktun > 0);
    }

    #[test]
    fn test_error_messages() {
        let err = "13.0.0.0".parse::<LongCount>().unwrap_err();
        assert!(err.to_string().contains("found 4"));
        let err = "a.0.0.0.0".parse::<LongCount>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid Long Count baktun component: \"a\"");
        let err = "3000.0.0.0.0".parse::<LongCount>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Long Count \"3000.0.0.0.0\" is outside the supported day numbers -364105723..=366379642"
        );
    }

    #[test]
    fn test_domain_warnings() {
        let lc = LongCount::new(12, 19, 20, 18, 25);
        let warnings = lc.domain_warnings();
        let units: Vec<Unit> = warnings.iter().map(|w| w.unit).collect();
        assert_eq!(units, vec![Unit::Tun, Unit::Uinal, Unit::Kin]);
        assert_eq!(
            warnings[2].to_string(),
            "kin value 25 is outside the canonical range 0..=19"
        );
        assert!(!lc.is_canonical());

        // A negative baktun is canonical, a negative katun is not
        assert!(LongCount::new(-3, 0, 0, 0, 0).is_canonical());
        assert!(!LongCount::new(0, -1, 0, 0, 0).is_canonical());
    }

    #[test]
    fn test_normalized() {
        let raw = LongCount::new(12, 19, 19, 17, 20);
        assert_eq!(raw.normalized(), LongCount::new(13, 0, 0, 0, 0));
        assert_eq!(raw.normalized().to_days(), raw.to_days());

        let raw = LongCount::new(0, 0, 0, 0, -1);
        assert_eq!(raw.normalized(), LongCount::new(-1, 19, 19, 17, 19));
    }

    #[test]
    fn test_next_period_ending() {
        let (next, kind) = LongCount::new(12, 19, 19, 17, 19).next_period_ending();
        assert_eq!(next, LongCount::new(13, 0, 0, 0, 0));
        assert_eq!(kind, PeriodEnding::Baktun);

        let (next, kind) = LongCount::new(13, 0, 19, 5, 3).next_period_ending();
        assert_eq!(next, LongCount::new(13, 1, 0, 0, 0));
        assert_eq!(kind, PeriodEnding::Katun);

        // Already on a period ending: the next one is a full tun later
        let (next, kind) = LongCount::new(13, 0, 0, 0, 0).next_period_ending();
        assert_eq!(next, LongCount::new(13, 0, 1, 0, 0));
        assert_eq!(kind, PeriodEnding::Tun);
        assert_eq!(kind.to_string(), "Tun completion");
    }

    #[test]
    fn test_serde() {
        let lc = LongCount::new(13, 0, 0, 0, 0);
        let json = serde_json::to_string(&lc).unwrap();
        assert_eq!(json, "\"13.0.0.0.0\"");
        let parsed: LongCount = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, lc);
        assert!(serde_json::from_str::<LongCount>("\"13.0.0\"").is_err());
    }
}
