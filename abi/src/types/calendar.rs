use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Set of calendar days a vehicle is already booked for.
///
/// Built from the raw `bookedDates` strings on the vehicle record. Entries
/// that do not parse as a date are skipped silently: the marketplace API owns
/// that list, and one bad entry must not take the whole booking form down.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookedDateSet {
    days: HashSet<NaiveDate>,
}

impl BookedDateSet {
    pub fn new<S: AsRef<str>>(dates: &[S]) -> Self {
        let days = dates
            .iter()
            .filter_map(|s| parse_calendar_day(s.as_ref()))
            .collect();
        Self { days }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.days.contains(&day)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Booked days in calendar order, for rendering as blocked in a picker.
    pub fn sorted_days(&self) -> Vec<NaiveDate> {
        let mut days: Vec<_> = self.days.iter().copied().collect();
        days.sort();
        days
    }
}

/// Parse one booked-date entry to a calendar day, truncating any time-of-day
/// component. Accepts plain `YYYY-MM-DD` and RFC 3339 datetimes.
pub fn parse_calendar_day(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(day) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(day);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    None
}
