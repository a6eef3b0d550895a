//! Working-day counting.
//!
//! The count over `[begin, end]` is built from a per-weekday tally rather
//! than a day-by-day walk:
//!
//! 1. Every weekday occurring in the first seven days of the range is given
//!    `(n - i) / 7 + 1` occurrences, where `n` is the length of the range and
//!    `i` the offset of that weekday's first occurrence.
//! 2. That formula counts the weekday following `end` once too often; its
//!    bucket is decremented unless it is already empty.
//! 3. Every holiday date inside the range removes one occurrence from its
//!    weekday's bucket.  A date is removed at most once, however many
//!    holidays fall on it.
//! 4. Monday–Friday buckets are summed, plus Saturday and Sunday if the
//!    [`WorkingWeek`] says so.
//!
//! The cost is `O(years × holidays)`, independent of the range length.

use std::collections::HashSet;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use hc_core::errors::{Error, Result};
use hc_core::RegionId;
use hc_time::{Date, Weekday};

use crate::catalog::{HolidayCatalog, HolidaySource};
use crate::holiday::Holiday;
use crate::resolver::representable_occurrences;

/// Which weekend days count as working days.  Monday–Friday always do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkingWeek {
    /// Count Saturdays as working days.
    pub saturday_is_working_day: bool,
    /// Count Sundays as working days.
    pub sunday_is_working_day: bool,
}

impl WorkingWeek {
    /// Whether days falling on `weekday` are working days (holidays aside).
    pub fn is_working(&self, weekday: Weekday) -> bool {
        match weekday {
            Weekday::Saturday => self.saturday_is_working_day,
            Weekday::Sunday => self.sunday_is_working_day,
            _ => true,
        }
    }
}

/// Number of working days in `[begin, end]`, both ends inclusive.
///
/// Holidays only count if their validity window covers the whole range
/// (see [`Holiday::is_valid_for`]).  Multi-day holidays occupy
/// `duration_days` consecutive dates.
///
/// Holiday days that fall outside the supported date range cannot lie in
/// `[begin, end]` and are skipped.
///
/// # Errors
/// Returns [`Error::InvalidRange`] if `begin > end`.
pub fn count_working_days(
    holidays: &[Holiday],
    begin: Date,
    end: Date,
    week: WorkingWeek,
) -> Result<i32> {
    if begin > end {
        return Err(Error::InvalidRange {
            begin: begin.to_string(),
            end: end.to_string(),
        });
    }

    let days = begin.days_between(end) + 1;
    let mut tally = [0i32; 7];
    for i in 0..=(days - 1).min(6) {
        tally[begin.add_days(i)?.weekday().index()] = (days - i) / 7 + 1;
    }

    // Short ranges never reach the weekday after `end`.
    let after_end = end.weekday().next().index();
    if tally[after_end] > 0 {
        tally[after_end] -= 1;
    }

    let mut consumed = HashSet::new();
    for year in begin.year()..=end.year() {
        for holiday in holidays.iter().filter(|h| h.is_valid_for(begin, end)) {
            for date in representable_occurrences(holiday, year) {
                if date >= begin && date <= end && consumed.insert(date) {
                    trace!("{} on {date} ({})", holiday.name(), date.weekday());
                    tally[date.weekday().index()] -= 1;
                }
            }
        }
    }

    Ok(Weekday::ALL
        .iter()
        .filter(|w| week.is_working(**w))
        .map(|w| tally[w.index()])
        .sum())
}

/// The first holiday in `holidays` whose resolved date for `date.year()` is
/// `date`.
///
/// Only the first day of a multi-day holiday matches, and validity windows
/// are not consulted.  A holiday with no representable date in that year
/// never matches.
pub fn holiday_on(holidays: &[Holiday], date: Date) -> Option<&Holiday> {
    holidays
        .iter()
        .find(|h| h.formula().resolve(date.year()).is_ok_and(|d| d == date))
}

/// Counts working days and looks up holidays against a [`HolidaySource`].
///
/// Every query exists in two forms: one taking the region explicitly
/// (`*_in`), and one reading the source's current region at call time.
///
/// # Example
/// ```
/// use hc_holidays::{Holiday, HolidayCatalog, WorkingDayCounter};
/// use hc_time::Date;
///
/// let d = |y, m, day| Date::from_ymd(y, m, day).unwrap();
/// let catalog = HolidayCatalog::builder("DE", "DE")
///     .region(0, "Catalog")
///     .region(1, "Deutschland")
///     .holiday(
///         Holiday::parse(10, "Neujahr", "F:1.1", 1, d(1900, 1, 1), d(2099, 12, 31)).unwrap(),
///         [0, 1],
///     )
///     .build()
///     .unwrap();
///
/// let counter = WorkingDayCounter::new(&catalog);
/// // Mon 2009-12-28 .. Sun 2010-01-03: five weekdays, one of them New Year.
/// let n = counter.count_working_days_in(1, d(2009, 12, 28), d(2010, 1, 3)).unwrap();
/// assert_eq!(n, 4);
/// assert_eq!(counter.holiday_name_in(1, d(2010, 1, 1)).unwrap(), Some("Neujahr"));
/// ```
#[derive(Debug)]
pub struct WorkingDayCounter<'s, S: ?Sized = HolidayCatalog> {
    source: &'s S,
    week: WorkingWeek,
}

impl<'s, S: HolidaySource + ?Sized> WorkingDayCounter<'s, S> {
    /// A counter over `source` with a Monday–Friday working week.
    pub fn new(source: &'s S) -> Self {
        Self {
            source,
            week: WorkingWeek::default(),
        }
    }

    /// Replace the weekend configuration.
    pub fn with_working_week(mut self, week: WorkingWeek) -> Self {
        self.week = week;
        self
    }

    /// The weekend configuration.
    pub fn working_week(&self) -> WorkingWeek {
        self.week
    }

    /// Whether Saturdays count as working days.
    pub fn saturday_is_working_day(&self) -> bool {
        self.week.saturday_is_working_day
    }

    /// Set whether Saturdays count as working days.
    pub fn set_saturday_is_working_day(&mut self, working: bool) {
        self.week.saturday_is_working_day = working;
    }

    /// Whether Sundays count as working days.
    pub fn sunday_is_working_day(&self) -> bool {
        self.week.sunday_is_working_day
    }

    /// Set whether Sundays count as working days.
    pub fn set_sunday_is_working_day(&mut self, working: bool) {
        self.week.sunday_is_working_day = working;
    }

    // ── Region-explicit queries ──────────────────────────────────────────

    /// Working days in `[begin, end]` for `region`.
    pub fn count_working_days_in(
        &self,
        region: RegionId,
        begin: Date,
        end: Date,
    ) -> Result<i32> {
        let holidays = self.source.holidays_for_region(region)?;
        let count = count_working_days(holidays, begin, end, self.week)?;
        debug!("region {region}: {count} working days in [{begin}, {end}]");
        Ok(count)
    }

    /// The holiday falling on `date` in `region`, if any.
    pub fn holiday_in(&self, region: RegionId, date: Date) -> Result<Option<&'s Holiday>> {
        Ok(holiday_on(self.source.holidays_for_region(region)?, date))
    }

    /// Whether `date` is a holiday in `region`.
    pub fn is_holiday_in(&self, region: RegionId, date: Date) -> Result<bool> {
        Ok(self.holiday_in(region, date)?.is_some())
    }

    /// Name of the holiday falling on `date` in `region`; `None` if there is
    /// none.
    pub fn holiday_name_in(&self, region: RegionId, date: Date) -> Result<Option<&'s str>> {
        Ok(self.holiday_in(region, date)?.map(Holiday::name))
    }

    // ── Current-region queries ───────────────────────────────────────────

    /// Working days in `[begin, end]` for the source's current region.
    pub fn count_working_days(&self, begin: Date, end: Date) -> Result<i32> {
        self.count_working_days_in(self.source.current_region_id(), begin, end)
    }

    /// The holiday falling on `date` in the current region, if any.
    pub fn holiday(&self, date: Date) -> Result<Option<&'s Holiday>> {
        self.holiday_in(self.source.current_region_id(), date)
    }

    /// Whether `date` is a holiday in the current region.
    pub fn is_holiday(&self, date: Date) -> Result<bool> {
        self.is_holiday_in(self.source.current_region_id(), date)
    }

    /// Name of the holiday falling on `date` in the current region.
    pub fn holiday_name(&self, date: Date) -> Result<Option<&'s str>> {
        self.holiday_name_in(self.source.current_region_id(), date)
    }
}
