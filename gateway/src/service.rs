use abi::{BookingError, Validator};
use booking::ReservationFlow;
use tracing::{info, warn};

use crate::{BookingGateway, BookingReceipt};

/// Front door for a booking attempt: checks eligibility, validates the
/// assembled intent, and hands it to the gateway exactly once per call.
///
/// Failure is surfaced as-is and nothing is retried here; the flow is left
/// untouched so the guest can correct the selection and resubmit.
pub struct BookingService<G> {
    gateway: G,
}

impl<G: BookingGateway> BookingService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub async fn submit(&self, flow: &ReservationFlow) -> Result<BookingReceipt, BookingError> {
        let status = flow.status();
        if !status.is_ready() {
            return Err(BookingError::NotPermitted(status));
        }

        let intent = flow
            .snapshot()
            .intent
            .as_ref()
            .ok_or(BookingError::MissingGuest)?;
        intent.validate()?;

        info!(
            vehicle_id = %intent.vehicle_id,
            total_days = intent.total_days,
            "submitting reservation"
        );

        match self.gateway.submit(intent).await {
            Ok(receipt) => {
                info!(booking_id = %receipt.id, "reservation accepted");
                Ok(receipt)
            }
            Err(e) => {
                warn!(error = %e, "reservation submission failed");
                Err(e)
            }
        }
    }
}
