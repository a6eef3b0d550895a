//! Holiday date resolution.
//!
//! Maps a [`HolidayFormula`] and a year to the concrete date the holiday
//! falls on.  Movable feasts are anchored on Easter Sunday (Gauss), on the
//! 4th Sunday of Advent, on Mother's Day, or on the Day of Repentance and
//! Prayer.

use hc_core::errors::Result;
use hc_time::{Date, Month};

use crate::formula::HolidayFormula;
use crate::holiday::Holiday;

/// Easter Sunday of `year` by Gauss's algorithm.
///
/// The two corrections for `p == 56` and `p == 57` are part of the
/// algorithm; without them 1954, 1981, 2049, and 2076 come out wrong.
///
/// # Example
/// ```
/// use hc_holidays::resolver::easter_sunday;
/// use hc_time::Date;
///
/// assert_eq!(easter_sunday(2024).unwrap(), Date::from_ymd(2024, 3, 31).unwrap());
/// assert_eq!(easter_sunday(2025).unwrap(), Date::from_ymd(2025, 4, 20).unwrap());
/// ```
pub fn easter_sunday(year: u16) -> Result<Date> {
    let y = year as i32;
    let a = y % 19;
    let b = y % 4;
    let c = y % 7;
    let d = (19 * a + 24) % 30;
    let e = (2 * b + 4 * c + 6 * d + 5) % 7;
    let p = 22 + d + e;

    let april = Month::April.number();
    if p > 31 {
        if p == 56 && d == 28 && a > 10 {
            Date::from_ymd(year, april, 18)
        } else if p == 57 {
            Date::from_ymd(year, april, 19)
        } else {
            Date::from_ymd(year, april, (p - 31) as u8)
        }
    } else {
        Date::from_ymd(year, Month::March.number(), p as u8)
    }
}

/// Weekday shift shared by the Advent and Mother's Day anchors:
/// `(year - 1 + year / 4) mod 7`.
pub fn advent_mothers_day_code(year: u16) -> i32 {
    let y = year as i32;
    (y - 1 + y / 4) % 7
}

/// `day - 1 + 31 * month` of Easter Sunday, the seed of the Day of
/// Repentance and Prayer.
fn easter_code(easter: Date) -> i32 {
    easter.day_of_month() as i32 - 1 + easter.month() as i32 * 31
}

impl HolidayFormula {
    /// The date this formula yields in `year`.
    ///
    /// # Errors
    /// Returns [`Error::Date`](hc_core::Error::Date) if the result falls
    /// outside the supported date range.
    pub fn resolve(&self, year: u16) -> Result<Date> {
        match *self {
            HolidayFormula::Fixed { day, month } => Date::from_ymd(year, month.number(), day),
            HolidayFormula::EasterOffset(offset) => easter_sunday(year)?.add_days(offset),
            HolidayFormula::MothersDay(offset) => {
                let k = advent_mothers_day_code(year);
                Date::from_ymd(year, Month::May.number(), (14 - k) as u8)?.add_days(offset)
            }
            HolidayFormula::Advent(offset) => {
                let k = advent_mothers_day_code(year);
                Date::from_ymd(year, Month::December.number(), (24 - k) as u8)?.add_days(offset)
            }
            HolidayFormula::RepentanceDay(offset) => {
                let code = easter_code(easter_sunday(year)?);
                Date::from_ymd(year, Month::November.number(), (16 + code % 7) as u8)?
                    .add_days(offset)
            }
        }
    }
}

/// The date `holiday` falls on in `year` (its first day, for multi-day
/// holidays).
pub fn resolve_holiday_date(holiday: &Holiday, year: u16) -> Result<Date> {
    holiday.formula().resolve(year)
}

/// Every day occupied by `holiday` in `year`: `duration_days` consecutive
/// dates starting at the resolved date.
pub fn holiday_occurrences(holiday: &Holiday, year: u16) -> Result<Vec<Date>> {
    let first = resolve_holiday_date(holiday, year)?;
    (0..holiday.duration_days() as i32)
        .map(|i| first.add_days(i))
        .collect()
}

/// The days of `holiday` in `year` that can be represented as a [`Date`].
///
/// Like [`holiday_occurrences`], but days past the ends of the supported
/// range are dropped instead of failing, as is the whole holiday if its
/// first day cannot be resolved.
pub fn representable_occurrences(holiday: &Holiday, year: u16) -> impl Iterator<Item = Date> {
    let duration = holiday.duration_days() as i32;
    resolve_holiday_date(holiday, year)
        .ok()
        .into_iter()
        .flat_map(move |first| (0..duration).map_while(move |i| first.add_days(i).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hc_time::Weekday;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn resolve(formula: &str, year: u16) -> Date {
        formula.parse::<HolidayFormula>().unwrap().resolve(year).unwrap()
    }

    #[test]
    fn easter_known_years() {
        let known = [
            (2009, 4, 12),
            (2010, 4, 4),
            (2011, 4, 24),
            (2019, 4, 21),
            (2024, 3, 31),
            (2025, 4, 20),
            (2038, 4, 25),
        ];
        for (y, m, d) in known {
            assert_eq!(easter_sunday(y).unwrap(), date(y, m, d), "Easter {y}");
        }
    }

    #[test]
    fn easter_special_cases() {
        // p == 56, d == 28, a > 10
        assert_eq!(easter_sunday(1954).unwrap(), date(1954, 4, 18));
        assert_eq!(easter_sunday(2049).unwrap(), date(2049, 4, 18));
        // p == 57
        assert_eq!(easter_sunday(1981).unwrap(), date(1981, 4, 19));
        assert_eq!(easter_sunday(2076).unwrap(), date(2076, 4, 19));
    }

    #[test]
    fn easter_offsets() {
        assert_eq!(resolve("E:-2", 2010), date(2010, 4, 2)); // Good Friday
        assert_eq!(resolve("E:1", 2010), date(2010, 4, 5)); // Easter Monday
        assert_eq!(resolve("E:39", 2010), date(2010, 5, 13)); // Ascension
        assert_eq!(resolve("E:-48", 2024), date(2024, 2, 12)); // Rose Monday
    }

    #[test]
    fn fixed_dates() {
        assert_eq!(resolve("F:25.12", 2009), date(2009, 12, 25));
        assert_eq!(resolve("F:1.1", 2010), date(2010, 1, 1));
    }

    #[test]
    fn mothers_day_is_second_sunday_of_may() {
        for (y, d) in [(2009, 10), (2010, 9), (2024, 12), (2025, 11)] {
            let md = resolve("MD:0", y);
            assert_eq!(md, date(y, 5, d), "Mother's Day {y}");
            assert_eq!(md.weekday(), Weekday::Sunday);
        }
    }

    #[test]
    fn advent_sundays() {
        assert_eq!(resolve("AD:0", 2009), date(2009, 12, 20));
        assert_eq!(resolve("AD:-7", 2009), date(2009, 12, 13));
        assert_eq!(resolve("AD:-21", 2009), date(2009, 11, 29));
        assert_eq!(resolve("AD:0", 2024), date(2024, 12, 22));
        assert_eq!(resolve("AD:0", 2025), date(2025, 12, 21));
    }

    #[test]
    fn repentance_day() {
        for (y, d) in [(2009, 18), (2010, 17), (2024, 20), (2025, 19)] {
            let rp = resolve("RP:0", y);
            assert_eq!(rp, date(y, 11, d), "Repentance Day {y}");
            assert_eq!(rp.weekday(), Weekday::Wednesday);
        }
    }

    #[test]
    fn occurrences_follow_duration() {
        let h = Holiday::parse(
            30,
            "Betriebsferien",
            "F:23.12",
            3,
            date(1900, 1, 1),
            date(2099, 12, 31),
        )
        .unwrap();
        assert_eq!(
            holiday_occurrences(&h, 2009).unwrap(),
            vec![date(2009, 12, 23), date(2009, 12, 24), date(2009, 12, 25)]
        );
    }

    #[test]
    fn representable_occurrences_stop_at_the_range_end() {
        let h = Holiday::parse(40, "Jahreswechsel", "F:31.12", 2, Date::MIN, Date::MAX).unwrap();
        assert!(holiday_occurrences(&h, 9999).is_err());
        assert_eq!(
            representable_occurrences(&h, 9999).collect::<Vec<_>>(),
            vec![Date::MAX]
        );
        assert_eq!(
            representable_occurrences(&h, 2009).collect::<Vec<_>>(),
            holiday_occurrences(&h, 2009).unwrap()
        );

        let late = Holiday::parse(41, "Spät", "AD:14", 1, Date::MIN, Date::MAX).unwrap();
        assert_eq!(representable_occurrences(&late, 9999).count(), 0);
    }

    #[test]
    fn out_of_range_year_is_an_error() {
        assert!(resolve_holiday_date(
            &Holiday::parse(1, "Silvester+1", "F:31.12", 1, Date::MIN, Date::MAX).unwrap(),
            0
        )
        .is_err());
        let late = "AD:14".parse::<HolidayFormula>().unwrap();
        assert!(late.resolve(9999).is_err());
    }
}
