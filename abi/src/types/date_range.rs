use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A proposed rental window. `end` is the return day and is not itself an
/// occupied night.
///
/// The range is always replaced wholesale when the guest interacts with the
/// picker; the two endpoints are never updated independently, so downstream
/// checks never see a half-updated range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Range covering whole days, midnight to midnight.
    pub fn from_days(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: start.and_time(NaiveTime::MIN),
            end: end.and_time(NaiveTime::MIN),
        }
    }

    /// The occupied nights, end-exclusive: `[start.date(), end.date())`.
    /// Empty when the range is degenerate or inverted.
    pub fn selected_days(&self) -> Vec<NaiveDate> {
        let mut days = Vec::new();
        let mut day = self.start.date();
        while day < self.end.date() {
            days.push(day);
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        days
    }

    pub fn is_inverted(&self) -> bool {
        self.start >= self.end
    }
}
