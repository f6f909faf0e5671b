// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Relative date phrasing
//!
//! Dates are compared by calendar day, never by elapsed hours.

use chrono::NaiveDate;
use std::fmt;

#[cfg(test)]
use chrono::{DateTime, TimeZone};

/// Display format: short weekday, short month, day, year (`Mon, Jan 5, 2026`)
const DISPLAY_FORMAT: &str = "%a, %b %-d, %Y";

/// Format a date for display, e.g. `Mon, Jan 5, 2026`
pub fn display_date(date: NaiveDate) -> impl fmt::Display {
    date.format(DISPLAY_FORMAT)
}

/// A date described relative to today
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RelativeDate {
    date: NaiveDate,
    /// Calendar days from today to `date`; negative in the past
    days: i64,
}

impl RelativeDate {
    /// Describe `date` relative to `today`
    pub fn between(date: NaiveDate, today: NaiveDate) -> Self {
        let days = date.signed_duration_since(today).num_days();
        RelativeDate { date, days }
    }

    /// Describe timestamp `date` relative to timestamp `now`
    ///
    /// Both are truncated to their calendar day first, so any two times on
    /// the same day compare equal.
    #[cfg(test)]
    pub fn between_times<Tz: TimeZone>(date: &DateTime<Tz>, now: &DateTime<Tz>) -> Self {
        Self::between(date.date_naive(), now.date_naive())
    }
}

impl fmt::Display for RelativeDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let date = display_date(self.date);
        match self.days {
            0 => write!(f, "Today is {date}"),
            n if n > 0 => write!(f, "{n} days from today is {date}"),
            n => write!(f, "{} days ago from today was {date}", n.unsigned_abs()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Local, NaiveDateTime, Utc};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(date: NaiveDate, h: u32, min: u32) -> NaiveDateTime {
        date.and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn display_format() {
        assert_eq!(display_date(ymd(2026, 1, 5)).to_string(), "Mon, Jan 5, 2026");
        assert_eq!(display_date(ymd(2026, 10, 16)).to_string(), "Fri, Oct 16, 2026");
        assert_eq!(display_date(ymd(2024, 2, 29)).to_string(), "Thu, Feb 29, 2024");
    }

    #[test]
    fn today() {
        let today = ymd(2026, 1, 5);
        let rel = RelativeDate::between(today, today);
        assert_eq!(rel.days, 0);
        assert_eq!(rel.to_string(), "Today is Mon, Jan 5, 2026");
    }

    #[test]
    fn future() {
        let rel = RelativeDate::between(ymd(2026, 1, 8), ymd(2026, 1, 5));
        assert_eq!(rel.days, 3);
        assert_eq!(rel.to_string(), "3 days from today is Thu, Jan 8, 2026");
    }

    #[test]
    fn past() {
        let rel = RelativeDate::between(ymd(2026, 1, 3), ymd(2026, 1, 5));
        assert_eq!(rel.days, -2);
        assert_eq!(rel.to_string(), "2 days ago from today was Sat, Jan 3, 2026");
    }

    #[test]
    fn single_day_keeps_plural() {
        let rel = RelativeDate::between(ymd(2026, 1, 6), ymd(2026, 1, 5));
        assert_eq!(rel.to_string(), "1 days from today is Tue, Jan 6, 2026");
        let rel = RelativeDate::between(ymd(2026, 1, 4), ymd(2026, 1, 5));
        assert_eq!(rel.to_string(), "1 days ago from today was Sun, Jan 4, 2026");
    }

    #[test]
    fn across_year_boundary() {
        let rel = RelativeDate::between(ymd(2027, 1, 1), ymd(2026, 12, 31));
        assert_eq!(rel.days, 1);
        let rel = RelativeDate::between(ymd(2025, 12, 31), ymd(2026, 3, 1));
        assert_eq!(rel.days, -60);
    }

    #[test]
    fn same_day_ignores_time() {
        let day = ymd(2026, 1, 5);
        let early = Utc.from_utc_datetime(&at(day, 0, 1));
        let late = Utc.from_utc_datetime(&at(day, 23, 59));
        assert_eq!(RelativeDate::between_times(&early, &late).days, 0);
        assert_eq!(RelativeDate::between_times(&late, &early).days, 0);
    }

    #[test]
    fn next_day_by_minutes() {
        let late = Utc.from_utc_datetime(&at(ymd(2026, 1, 5), 23, 59));
        let early = Utc.from_utc_datetime(&at(ymd(2026, 1, 6), 0, 1));
        // Two minutes apart, but one calendar day
        assert_eq!(RelativeDate::between_times(&early, &late).days, 1);
        assert_eq!(RelativeDate::between_times(&late, &early).days, -1);
    }

    #[test]
    fn truncates_in_own_timezone() {
        // 23:30 at UTC-5 is already the next day in UTC
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        let date = tz.from_local_datetime(&at(ymd(2026, 1, 5), 23, 30)).unwrap();
        let now = tz.from_local_datetime(&at(ymd(2026, 1, 5), 8, 0)).unwrap();
        assert_eq!(RelativeDate::between_times(&date, &now).days, 0);
    }

    #[test]
    fn local_now_is_today() {
        let now = Local::now();
        let rel = RelativeDate::between_times(&now, &now);
        assert!(rel.to_string().starts_with("Today is "));
    }
}
