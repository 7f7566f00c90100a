use abi::{
    BookedDateSet, BookingStatus, DateRange, Guest, PriceQuote, ReservationIntent,
    ValidationResult, Vehicle,
};
use chrono::NaiveDate;

use crate::{availability, eligibility, price, Clock};

/// Where the current range came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// Showing the default today-to-tomorrow range.
    Idle,
    /// The guest has picked a range at least once.
    UserModified,
}

/// Everything derived from one range, rebuilt as a unit so a consumer never
/// reads a validation computed from a different range than the day list or
/// the quote.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub selected_days: Vec<NaiveDate>,
    pub validation: ValidationResult,
    pub quote: PriceQuote,
    pub intent: Option<ReservationIntent>,
}

/// One booking attempt for one vehicle.
///
/// Owns the selection state machine and the derived snapshot. Each flow
/// instance is independent; rendering several booking forms at once means
/// one flow per form, never shared state.
#[derive(Debug, Clone)]
pub struct ReservationFlow {
    vehicle: Vehicle,
    guest: Option<Guest>,
    booked: BookedDateSet,
    state: SelectionState,
    range: DateRange,
    snapshot: Snapshot,
}

impl ReservationFlow {
    pub fn new(vehicle: Vehicle, guest: Option<Guest>, clock: &dyn Clock) -> Self {
        let today = clock.today();
        let tomorrow = today.succ_opt().unwrap_or(today);
        let range = DateRange::from_days(today, tomorrow);
        let booked = BookedDateSet::new(&vehicle.booked_dates);
        let snapshot = build_snapshot(&vehicle, guest.as_ref(), &booked, range);
        Self {
            vehicle,
            guest,
            booked,
            state: SelectionState::Idle,
            range,
            snapshot,
        }
    }

    /// Replace the selection wholesale. Both endpoints move together, so no
    /// transient half-updated range is ever validated.
    pub fn select_range(&mut self, range: DateRange) {
        self.state = SelectionState::UserModified;
        self.range = range;
        self.recompute();
    }

    pub fn set_guest(&mut self, guest: Option<Guest>) {
        self.guest = guest;
        self.recompute();
    }

    /// Swap in a fresh vehicle record; the booked-day set is rebuilt from it.
    pub fn set_vehicle(&mut self, vehicle: Vehicle) {
        self.booked = BookedDateSet::new(&vehicle.booked_dates);
        self.vehicle = vehicle;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.snapshot = build_snapshot(&self.vehicle, self.guest.as_ref(), &self.booked, self.range);
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn guest(&self) -> Option<&Guest> {
        self.guest.as_ref()
    }

    /// Booked days in calendar order, for the picker to render as blocked.
    /// The picker itself stays permissive; the availability check is the
    /// only authority on whether a range is acceptable.
    pub fn booked_days(&self) -> Vec<NaiveDate> {
        self.booked.sorted_days()
    }

    pub fn status(&self) -> BookingStatus {
        eligibility::submit_status(self.guest.as_ref(), &self.vehicle, &self.snapshot.validation)
    }

    pub fn can_submit(&self) -> bool {
        self.status().is_ready()
    }
}

fn build_snapshot(
    vehicle: &Vehicle,
    guest: Option<&Guest>,
    booked: &BookedDateSet,
    range: DateRange,
) -> Snapshot {
    let selected_days = range.selected_days();
    let validation = availability::validate(range, booked);
    let quote = price::quote(range, vehicle.price);
    let intent = guest.map(|guest| {
        ReservationIntent::assemble(vehicle, guest, range, selected_days.clone(), quote)
    });
    Snapshot {
        selected_days,
        validation,
        quote,
        intent,
    }
}
