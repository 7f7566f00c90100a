use abi::{BookingStatus, Guest, ValidationResult, Vehicle};

/// Label for the submit control. First matching condition wins: login,
/// self-booking, sold out, invalid dates, then ready.
pub fn submit_status(
    guest: Option<&Guest>,
    vehicle: &Vehicle,
    validation: &ValidationResult,
) -> BookingStatus {
    let guest = match guest {
        Some(guest) => guest,
        None => return BookingStatus::LoginRequired,
    };
    if guest.email == vehicle.host.email {
        return BookingStatus::OwnVehicle;
    }
    if vehicle.sold_out {
        return BookingStatus::SoldOut;
    }
    if !validation.valid {
        return BookingStatus::InvalidDates;
    }
    BookingStatus::Ready
}

/// Submission is a pure AND of the four gate conditions, independent of which
/// label happens to be shown.
pub fn can_submit(guest: Option<&Guest>, vehicle: &Vehicle, validation: &ValidationResult) -> bool {
    submit_status(guest, vehicle, validation).is_ready()
}
