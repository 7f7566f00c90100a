use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::{BookingError, DateRange, Guest, PriceQuote, Validator, Vehicle};

/// Submission-ready description of a proposed booking.
///
/// Denormalized on purpose: the gateway receives one self-contained payload
/// whose dates, day list and price all derive from the same range snapshot.
/// Owned by a single booking attempt and discarded after hand-off.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationIntent {
    pub vehicle_id: String,
    pub title: String,
    pub location: String,
    pub image: Option<String>,
    pub host_email: String,
    pub guest_name: Option<String>,
    pub guest_email: String,
    pub guest_avatar: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub selected_days: Vec<NaiveDate>,
    pub total_days: i64,
    pub total_price: f64,
}

impl ReservationIntent {
    pub fn assemble(
        vehicle: &Vehicle,
        guest: &Guest,
        range: DateRange,
        selected_days: Vec<NaiveDate>,
        quote: PriceQuote,
    ) -> Self {
        Self {
            vehicle_id: vehicle.id.clone(),
            title: vehicle.title.clone(),
            location: vehicle.location.clone(),
            image: vehicle.image.clone(),
            host_email: vehicle.host.email.clone(),
            guest_name: guest.name.clone(),
            guest_email: guest.email.clone(),
            guest_avatar: guest.avatar_url.clone(),
            start: range.start,
            end: range.end,
            selected_days,
            total_days: quote.total_days,
            total_price: quote.total_price,
        }
    }
}

impl Validator for ReservationIntent {
    fn validate(&self) -> Result<(), BookingError> {
        if self.vehicle_id.is_empty() {
            return Err(BookingError::IncompleteIntent("vehicleId"));
        }
        if self.host_email.is_empty() {
            return Err(BookingError::IncompleteIntent("hostEmail"));
        }
        if self.guest_email.is_empty() {
            return Err(BookingError::IncompleteIntent("guestEmail"));
        }
        if self.selected_days.is_empty() {
            return Err(BookingError::EmptySelection);
        }
        Ok(())
    }
}
