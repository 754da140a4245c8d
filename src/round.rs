use std::fmt;

use serde::Serialize;

use crate::{
    consts::MAYAN_EPOCH_OFFSET,
    gregorian::GregorianDate,
    haab::HaabDate,
    long_count::{LongCount, PeriodEnding},
    tzolkin::{TzolkinDate, TzolkinDayName},
};

/// One day seen through the Mayan calendars: Long Count, Tzolkin and Haab.
///
/// This is the result of a forward conversion. It displays in the long form
/// `13.0.0.0.0 4 Ahau 3 Kankin` and serializes to a flat record carrying both
/// the formatted strings and every numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MayanDate {
    day_number: i64,
    long_count: LongCount,
    tzolkin:    TzolkinDate,
    haab:       HaabDate,
}

impl MayanDate {
    /// All three calendars for a Mayan day number (days since `0.0.0.0.0`)
    pub const fn from_days(day_number: i64) -> Self {
        Self {
            day_number,
            long_count: LongCount::from_days(day_number),
            tzolkin: TzolkinDate::from_days(day_number),
            haab: HaabDate::from_days(day_number),
        }
    }

    /// Forward conversion of a Gregorian day
    pub fn from_gregorian(date: GregorianDate) -> Self {
        Self::from_days(date.to_unix_days() + MAYAN_EPOCH_OFFSET)
    }

    /// Gregorian day of this date, saturating at the supported year range
    pub fn to_gregorian(&self) -> GregorianDate {
        GregorianDate::from_unix_days(self.day_number.saturating_sub(MAYAN_EPOCH_OFFSET))
    }

    /// Days elapsed since `0.0.0.0.0`
    pub const fn day_number(&self) -> i64 {
        self.day_number
    }

    /// Canonical Long Count
    pub const fn long_count(&self) -> LongCount {
        self.long_count
    }

    /// Position in the 260-day count
    pub const fn tzolkin(&self) -> TzolkinDate {
        self.tzolkin
    }

    /// Haab position in the vague year
    pub const fn haab(&self) -> HaabDate {
        self.haab
    }

    /// Tzolkin and Haab together, e.g. `4 Ahau 3 Kankin`; repeats every 18,980 days
    pub fn calendar_round(&self) -> String {
        format!("{} {}", self.tzolkin, self.haab)
    }

    /// Title used for events scheduled on this day, e.g. `4 Ahau / 3 Kankin`
    pub fn event_name(&self) -> String {
        format!("{} / {}", self.tzolkin, self.haab)
    }

    /// Tzolkin day sign, the key into the almanac tables
    pub const fn day_sign(&self) -> TzolkinDayName {
        self.tzolkin.name()
    }
}

impl fmt::Display for MayanDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.long_count, self.tzolkin, self.haab)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MayanDateRecord {
    long_count:        String,
    tzolkin:           String,
    haab:              String,
    baktun:            i64,
    katun:             i64,
    tun:               i64,
    uinal:             i64,
    kin:               i64,
    tzolkin_number:    u8,
    tzolkin_day_name:  &'static str,
    haab_day_position: u8,
    haab_month_name:   &'static str,
}

impl From<&MayanDate> for MayanDateRecord {
    fn from(date: &MayanDate) -> Self {
        let (baktun, katun, tun, uinal, kin) = date.long_count.components();
        Self {
            long_count: date.long_count.to_string(),
            tzolkin: date.tzolkin.to_string(),
            haab: date.haab.to_string(),
            baktun,
            katun,
            tun,
            uinal,
            kin,
            tzolkin_number: date.tzolkin.number(),
            tzolkin_day_name: date.tzolkin.name().name(),
            haab_day_position: date.haab.position(),
            haab_month_name: date.haab.month().name(),
        }
    }
}

impl Serialize for MayanDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        MayanDateRecord::from(self).serialize(serializer)
    }
}

/// The next tun, katun or baktun ending after some date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SignificantDate {
    #[serde(rename = "mayan")]
    pub long_count:   LongCount,
    pub gregorian:    GregorianDate,
    pub significance: PeriodEnding,
}

/// Whether two Gregorian dates fall on the same Long Count day
pub fn is_same_mayan_day(a: GregorianDate, b: GregorianDate) -> bool {
    MayanDate::from_gregorian(a).long_count == MayanDate::from_gregorian(b).long_count
}

/// First period ending (a day with `uinal = kin = 0`) strictly after `date`
pub fn next_significant_date(date: GregorianDate) -> SignificantDate {
    let (long_count, significance) = MayanDate::from_gregorian(date)
        .long_count
        .next_period_ending();
    SignificantDate {
        long_count,
        gregorian: GregorianDate::from_unix_days(
            long_count.to_days().saturating_sub(MAYAN_EPOCH_OFFSET),
        ),
        significance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        consts::{MAX_MAYAN_DAY, MAX_YEAR, MIN_YEAR},
        haab::HaabMonth,
        test_utils::date,
    };

    #[test]
    fn test_known_days() {
        struct TestCase {
            date:     (i64, u8, u8),
            expected: &'static str,
        }

        let cases = [
            TestCase {
                date:     (2012, 12, 21),
                expected: "13.0.0.0.0 4 Ahau 3 Kankin",
            },
            TestCase {
                date:     (1970, 1, 1),
                expected: "12.17.16.7.5 13 Chicchan 3 Kankin",
            },
            TestCase {
                date:     (-3113, 8, 11),
                expected: "0.0.0.0.0 4 Ahau 8 Cumku",
            },
            TestCase {
                date:     (-3113, 8, 10),
                expected: "-1.19.19.17.19 3 Cauac 7 Cumku",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.date;
            let mayan = MayanDate::from_gregorian(date(y, m, d));
            assert_eq!(mayan.to_string(), case.expected, "{y}-{m}-{d}");
            assert_eq!(mayan.to_gregorian(), date(y, m, d));
        }
    }

    #[test]
    fn test_calendar_round_strings() {
        let mayan = MayanDate::from_gregorian(date(2012, 12, 21));
        assert_eq!(mayan.calendar_round(), "4 Ahau 3 Kankin");
        assert_eq!(mayan.event_name(), "4 Ahau / 3 Kankin");
        assert_eq!(mayan.day_sign(), TzolkinDayName::Ahau);
        assert_eq!(mayan.haab().month(), HaabMonth::Kankin);
    }

    #[test]
    fn test_calendar_round_period() {
        let start = MayanDate::from_days(1_000_000);
        let later = MayanDate::from_days(1_000_000 + crate::CALENDAR_ROUND_DAYS);
        assert_eq!(start.calendar_round(), later.calendar_round());
        assert_ne!(start.long_count(), later.long_count());
    }

    #[test]
    fn test_extreme_day_numbers() {
        for day_number in [i64::MAX, i64::MIN, i64::MIN + 1] {
            let mayan = MayanDate::from_days(day_number);
            assert!(mayan.long_count().is_canonical(), "{day_number}");
            assert!((1..=13).contains(&mayan.tzolkin().number()));
            assert!(mayan.haab().position() < mayan.haab().month().days());
        }
        assert_eq!(MayanDate::from_days(i64::MAX).long_count().to_days(), i64::MAX);
        assert_eq!(MayanDate::from_days(i64::MAX).to_gregorian(), date(MAX_YEAR, 12, 31));
        assert_eq!(MayanDate::from_days(i64::MIN).to_gregorian(), date(MIN_YEAR, 1, 1));

        let last = next_significant_date(date(MAX_YEAR, 12, 31));
        assert_eq!(last.gregorian, date(MAX_YEAR, 12, 31));
        assert!(last.long_count.to_days() > MAX_MAYAN_DAY);
    }

    #[test]
    fn test_is_same_mayan_day() {
        assert!(is_same_mayan_day(date(2024, 5, 1), date(2024, 5, 1)));
        assert!(!is_same_mayan_day(date(2024, 5, 1), date(2024, 5, 2)));
    }

    #[test]
    fn test_next_significant_date() {
        let next = next_significant_date(date(2012, 12, 20));
        assert_eq!(next.long_count, LongCount::new(13, 0, 0, 0, 0));
        assert_eq!(next.gregorian, date(2012, 12, 21));
        assert_eq!(next.significance, PeriodEnding::Baktun);

        // A tun is 360 days, so the next ending after 13.0.0.0.0 is 360 days later
        let next = next_significant_date(date(2012, 12, 21));
        assert_eq!(next.long_count, LongCount::new(13, 0, 1, 0, 0));
        assert_eq!(next.gregorian, date(2012, 12, 21).add_days(360));
        assert_eq!(next.significance, PeriodEnding::Tun);
    }

    #[test]
    fn test_serialize_record() {
        let mayan = MayanDate::from_gregorian(date(2012, 12, 21));
        let value = serde_json::to_value(mayan).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "longCount": "13.0.0.0.0",
                "tzolkin": "4 Ahau",
                "haab": "3 Kankin",
                "baktun": 13,
                "katun": 0,
                "tun": 0,
                "uinal": 0,
                "kin": 0,
                "tzolkinNumber": 4,
                "tzolkinDayName": "Ahau",
                "haabDayPosition": 3,
                "haabMonthName": "Kankin"
            })
        );
    }

    #[test]
    fn test_serialize_significant_date() {
        let value = serde_json::to_value(next_significant_date(date(2012, 12, 20))).unwrap();
        assert_eq!(value["mayan"], "13.0.0.0.0");
        assert_eq!(value["gregorian"], "2012-12-21");
        assert_eq!(value["significance"], "Baktun");
    }
}
