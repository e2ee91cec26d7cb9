//! Date filter over a file's price bars.
//!
//! A [`Query`] either selects only the most recent bar (the default) or every
//! bar strictly after a calendar date. The CSV row reader consults the
//! accessors to decide which rows to emit.

use chrono::{Datelike, Days, NaiveDate};

/// Price-bar selection: last bar only, or every bar after a date.
///
/// # Example
///
/// ```
/// use price_catalog::Query;
///
/// let mut query = Query::new();
/// assert!(query.is_last_only());
///
/// query.set_greater_than(2020, 1, 32);
/// assert!(!query.is_last_only());
/// assert_eq!((query.year(), query.month(), query.day()), (2020, 2, 1));
///
/// query.set_last_only();
/// assert_eq!((query.year(), query.month(), query.day()), (0, 0, 0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Query {
    after: Option<NaiveDate>,
}

impl Query {
    /// Creates a query selecting only the most recent bar.
    #[must_use]
    pub const fn new() -> Self {
        Self { after: None }
    }

    /// Creates a query selecting every bar after the normalized date.
    #[must_use]
    pub fn greater_than(year: i32, month: i32, day: i32) -> Self {
        let mut query = Self::new();
        query.set_greater_than(year, month, day);
        query
    }

    /// Selects every bar strictly after the given date.
    ///
    /// Out-of-range components roll over the way calendar arithmetic does:
    /// month 13 is January of the following year, day 0 is the last day of
    /// the previous month, and day 32 of a 31-day month is the first of the
    /// next.
    pub fn set_greater_than(&mut self, year: i32, month: i32, day: i32) {
        self.after = Some(normalize(year, month, day));
    }

    /// Selects only the most recent bar, clearing any date bound.
    pub const fn set_last_only(&mut self) {
        self.after = None;
    }

    /// Returns `true` when only the most recent bar is selected.
    #[must_use]
    pub const fn is_last_only(&self) -> bool {
        self.after.is_none()
    }

    /// Returns the exclusive lower date bound, if any.
    #[must_use]
    pub const fn after(&self) -> Option<NaiveDate> {
        self.after
    }

    /// Returns the bound's year, or `0` in last-only mode.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.after.map_or(0, |date| date.year())
    }

    /// Returns the bound's month (1-12), or `0` in last-only mode.
    #[must_use]
    pub fn month(&self) -> i32 {
        self.after.map_or(0, |date| component(date.month()))
    }

    /// Returns the bound's day of month, or `0` in last-only mode.
    #[must_use]
    pub fn day(&self) -> i32 {
        self.after.map_or(0, |date| component(date.day()))
    }
}

/// Normalizes a possibly out-of-range date triple.
///
/// Months are folded into years first, then the day offset is applied to the
/// first of the resulting month. Dates beyond chrono's range saturate.
fn normalize(year: i32, month: i32, day: i32) -> NaiveDate {
    let total_months = i64::from(year) * 12 + i64::from(month) - 1;
    let start_opt = i32::try_from(total_months.div_euclid(12))
        .ok()
        .zip(u32::try_from(total_months.rem_euclid(12) + 1).ok())
        .and_then(|(y, m)| NaiveDate::from_ymd_opt(y, m, 1));
    let Some(month_start) = start_opt else {
        return saturated(total_months > 0);
    };

    let offset = i64::from(day) - 1;
    let days = Days::new(offset.unsigned_abs());
    let shifted = if offset >= 0 {
        month_start.checked_add_days(days)
    } else {
        month_start.checked_sub_days(days)
    };
    shifted.unwrap_or_else(|| saturated(offset >= 0))
}

/// Month and day numbers are at most 31, so the conversion never fails.
fn component(value: u32) -> i32 {
    i32::try_from(value).unwrap_or_default()
}

const fn saturated(forward: bool) -> NaiveDate {
    if forward {
        NaiveDate::MAX
    } else {
        NaiveDate::MIN
    }
}

#[cfg(test)]
mod tests {
    //! Covers mode switching and calendar normalization.

    use rstest::rstest;

    use super::*;

    #[test]
    fn new_query_is_last_only() {
        let query = Query::new();

        assert!(query.is_last_only());
        assert_eq!(query, Query::default());
        assert_eq!(query.after(), None);
    }

    #[test]
    fn set_greater_than_switches_mode() {
        let mut query = Query::new();

        query.set_greater_than(2020, 2, 20);

        assert!(!query.is_last_only());
        assert_eq!(query.year(), 2020);
        assert_eq!(query.month(), 2);
        assert_eq!(query.day(), 20);
    }

    #[test]
    fn set_last_only_clears_the_date() {
        let mut query = Query::greater_than(2020, 2, 20);
        assert!(!query.is_last_only());

        query.set_last_only();

        assert!(query.is_last_only());
        assert_eq!((query.year(), query.month(), query.day()), (0, 0, 0));
    }

    #[test]
    fn accessors_feed_back_into_the_setter() {
        let original = Query::greater_than(2020, 14, 31);
        let mut copy = Query::new();

        copy.set_greater_than(original.year(), original.month(), original.day());

        assert_eq!(copy, original);
    }

    #[test]
    fn later_bound_overwrites_earlier_bound() {
        let mut query = Query::greater_than(2019, 5, 1);

        query.set_greater_than(2021, 7, 4);

        assert_eq!(query.after(), NaiveDate::from_ymd_opt(2021, 7, 4));
    }

    #[rstest]
    #[case::day_past_month_end(2020, 1, 32, (2020, 2, 1))]
    #[case::leap_day_rollover(2020, 2, 30, (2020, 3, 1))]
    #[case::non_leap_february(2021, 2, 29, (2021, 3, 1))]
    #[case::day_zero(2020, 3, 0, (2020, 2, 29))]
    #[case::negative_day(2020, 1, -1, (2019, 12, 30))]
    #[case::month_thirteen(2020, 13, 1, (2021, 1, 1))]
    #[case::month_zero(2020, 0, 15, (2019, 12, 15))]
    #[case::month_and_day_overflow(2020, 14, 31, (2021, 3, 3))]
    #[case::year_end(2020, 12, 32, (2021, 1, 1))]
    fn set_greater_than_normalizes(
        #[case] year: i32,
        #[case] month: i32,
        #[case] day: i32,
        #[case] expected: (i32, i32, i32),
    ) {
        let query = Query::greater_than(year, month, day);

        assert_eq!((query.year(), query.month(), query.day()), expected);
    }

    #[rstest]
    #[case::far_future(i32::MAX, 12, 31, NaiveDate::MAX)]
    #[case::far_past(i32::MIN, 1, 1, NaiveDate::MIN)]
    fn out_of_range_dates_saturate(
        #[case] year: i32,
        #[case] month: i32,
        #[case] day: i32,
        #[case] expected: NaiveDate,
    ) {
        let query = Query::greater_than(year, month, day);

        assert_eq!(query.after(), Some(expected));
    }
}
