/// Julian Day Number of the Mayan creation date `0.0.0.0.0`
/// (Goodman-Martinez-Thompson correlation)
pub const GMT_CORRELATION: i64 = 584_283;

/// Julian Day Number of the Unix epoch (1970-01-01)
pub const UNIX_EPOCH_JDN: i64 = 2_440_588;

/// Mayan day number of 1970-01-01, i.e. days elapsed from `0.0.0.0.0` to the Unix epoch
pub const MAYAN_EPOCH_OFFSET: i64 = UNIX_EPOCH_JDN - GMT_CORRELATION;

/// Days in one kin
pub const DAYS_IN_KIN: i64 = 1;
/// Days in one uinal (20 kins)
pub const DAYS_IN_UINAL: i64 = 20;
/// Days in one tun (18 uinals)
pub const DAYS_IN_TUN: i64 = 360;
/// Days in one katun (20 tuns)
pub const DAYS_IN_KATUN: i64 = 7_200;
/// Days in one baktun (20 katuns)
pub const DAYS_IN_BAKTUN: i64 = 144_000;

/// Largest canonical kin, tun and katun value
pub const MAX_VIGESIMAL_DIGIT: i64 = 19;
/// Largest canonical uinal value (a tun holds 18 uinals)
pub const MAX_UINAL: i64 = 17;

/// Length of the Tzolkin number cycle
pub const TZOLKIN_NUMBER_CYCLE: i64 = 13;
/// Length of the Tzolkin day-name cycle
pub const TZOLKIN_NAME_CYCLE: i64 = 20;
/// Length of the full Tzolkin cycle
pub const TZOLKIN_DAYS: i64 = TZOLKIN_NUMBER_CYCLE * TZOLKIN_NAME_CYCLE;
/// Length of the Haab vague year
pub const HAAB_DAYS: i64 = 365;
/// Days in each of the eighteen regular Haab months
pub const HAAB_MONTH_DAYS: i64 = 20;
/// Days in Uayeb, the closing Haab month
pub const UAYEB_DAYS: i64 = 5;
/// Length of the Calendar Round (least common multiple of Tzolkin and Haab)
pub const CALENDAR_ROUND_DAYS: i64 = 18_980;

// Offsets pinning Mayan day 0 to 4 Ahau 8 Cumku
pub(crate) const TZOLKIN_NAME_OFFSET: i64 = 19;
pub(crate) const TZOLKIN_NUMBER_OFFSET: i64 = 3;
pub(crate) const HAAB_OFFSET: i64 = 348;

/// Tzolkin day numbers in cyclic order
pub const TZOLKIN_NUMBERS: [u8; 13] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13];

/// Tzolkin day names in cyclic order
pub const TZOLKIN_DAY_NAMES: [&str; 20] = [
    "Imix", "Ik", "Akbal", "Kan", "Chicchan", "Cimi", "Manik", "Lamat", "Muluc", "Oc", "Chuen",
    "Eb", "Ben", "Ix", "Men", "Cib", "Caban", "Etznab", "Cauac", "Ahau",
];

/// Haab month names in calendar order; the last one is the five-day Uayeb
pub const HAAB_MONTH_NAMES: [&str; 19] = [
    "Pop", "Uo", "Zip", "Zotz", "Tzec", "Xul", "Yaxkin", "Mol", "Chen", "Yax", "Zac", "Ceh", "Mac",
    "Kankin", "Muan", "Pax", "Kayab", "Cumku", "Uayeb",
];

/// Largest supported year; years run from `MIN_YEAR` to `MAX_YEAR`
pub const MAX_YEAR: i64 = 1_000_000;
/// Smallest supported (astronomical) year
pub const MIN_YEAR: i64 = -MAX_YEAR;

/// Unix day number of `MIN_YEAR`-01-01
pub const MIN_UNIX_DAY: i64 = -365_962_028;
/// Unix day number of `MAX_YEAR`-12-31
pub const MAX_UNIX_DAY: i64 = 364_523_337;

/// Mayan day number of the first supported day
pub const MIN_MAYAN_DAY: i64 = MIN_UNIX_DAY + MAYAN_EPOCH_OFFSET;
/// Mayan day number of the last supported day
pub const MAX_MAYAN_DAY: i64 = MAX_UNIX_DAY + MAYAN_EPOCH_OFFSET;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of every month
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// English month names (index 0 is unused)
pub const MONTH_NAMES: [&str; 13] = [
    "",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Days in a 400-year Gregorian cycle
pub(crate) const DAYS_IN_GREGORIAN_CYCLE: i64 = 146_097;
/// Days from 0000-03-01 to 1970-01-01
pub(crate) const UNIX_EPOCH_FROM_MARCH_ZERO: i64 = 719_468;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';
/// Long Count component separator
pub const LONG_COUNT_SEPARATOR: char = '.';
