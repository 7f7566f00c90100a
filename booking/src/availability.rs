use abi::{BookedDateSet, BookingError, ConflictInfo, DateRange, ValidationResult};
use chrono::NaiveDate;

/// Check a proposed range against the booked-day set.
///
/// Returns the end-exclusive day list when the range is bookable. The check
/// order is a contract: a conflict with booked days wins over an empty
/// selection, which wins over an inverted range. A range where start equals
/// end yields no days and reports the empty selection, never the inversion.
pub fn check(range: DateRange, booked: &BookedDateSet) -> Result<Vec<NaiveDate>, BookingError> {
    let days = range.selected_days();

    let conflicts: Vec<NaiveDate> = days
        .iter()
        .copied()
        .filter(|day| booked.contains(*day))
        .collect();
    if !conflicts.is_empty() {
        return Err(BookingError::DateConflict(ConflictInfo::new(conflicts)));
    }

    if days.is_empty() {
        return Err(BookingError::EmptySelection);
    }

    if range.is_inverted() {
        return Err(BookingError::InvertedRange);
    }

    Ok(days)
}

/// Same check, in the shape the booking form renders.
pub fn validate(range: DateRange, booked: &BookedDateSet) -> ValidationResult {
    match check(range, booked) {
        Ok(_) => ValidationResult::ok(),
        Err(e) => ValidationResult::from(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn open_range_should_be_bookable() {
        let booked = BookedDateSet::default();
        let range = DateRange::from_days(day(2024, 6, 10), day(2024, 6, 12));

        let days = check(range, &booked).unwrap();
        assert_eq!(days, vec![day(2024, 6, 10), day(2024, 6, 11)]);

        let result = validate(range, &booked);
        assert!(result.valid);
        assert!(result.reason.is_none());
    }

    #[test]
    fn booked_day_inside_range_should_conflict() {
        // Scenario A: one booked night, range covering exactly that night.
        let booked = BookedDateSet::new(&["2024-06-10"]);
        let range = DateRange::from_days(day(2024, 6, 10), day(2024, 6, 11));

        let err = check(range, &booked).unwrap_err();
        assert_eq!(
            err,
            BookingError::DateConflict(ConflictInfo::new(vec![day(2024, 6, 10)]))
        );

        let result = validate(range, &booked);
        assert!(!result.valid);
        assert_eq!(
            result.reason.as_deref(),
            Some("selected dates conflict with already booked dates")
        );
    }

    #[test]
    fn return_day_booked_should_not_conflict() {
        // End-exclusive: checking out on a booked day is fine.
        let booked = BookedDateSet::new(&["2024-06-12"]);
        let range = DateRange::from_days(day(2024, 6, 10), day(2024, 6, 12));
        assert!(check(range, &booked).is_ok());
    }

    #[test]
    fn same_day_range_should_report_empty_selection() {
        // Scenario C: the degenerate reason, not the inverted-range one.
        let booked = BookedDateSet::new(&["2024-06-10"]);
        let range = DateRange::from_days(day(2024, 6, 10), day(2024, 6, 10));

        let result = validate(range, &booked);
        assert!(!result.valid);
        assert_eq!(result.reason.as_deref(), Some("select at least one day"));
    }

    #[test]
    fn inverted_range_should_report_empty_selection() {
        // An inverted range selects no nights, so it resolves the same way
        // as the degenerate one.
        let booked = BookedDateSet::default();
        let range = DateRange::from_days(day(2024, 6, 12), day(2024, 6, 10));
        assert_eq!(check(range, &booked), Err(BookingError::EmptySelection));
    }

    #[test]
    fn conflict_should_take_precedence_over_other_reasons() {
        let booked = BookedDateSet::new(&["2024-06-10", "2024-06-11"]);
        let range = DateRange::from_days(day(2024, 6, 10), day(2024, 6, 12));

        let err = check(range, &booked).unwrap_err();
        match err {
            BookingError::DateConflict(info) => {
                assert_eq!(info.days, vec![day(2024, 6, 10), day(2024, 6, 11)]);
            }
            other => panic!("expected conflict, got {:?}", other),
        }
    }
}
