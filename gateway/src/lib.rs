mod rest;
mod service;

use abi::{BookingError, ReservationIntent};
use async_trait::async_trait;
use serde::Deserialize;

pub use rest::RestGateway;
pub use service::BookingService;

/// Confirmation returned by the booking API after a successful hand-off.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookingReceipt {
    pub id: String,
}

/// Remote booking and payment boundary.
///
/// The gateway re-validates conflicts server-side and owns payment capture
/// and any retries. The caller's only duty is a complete, internally
/// consistent payload; a failed attempt is terminal for that call.
#[async_trait]
pub trait BookingGateway {
    /// submit one reservation intent for persistence and payment capture
    async fn submit(&self, intent: &ReservationIntent) -> Result<BookingReceipt, BookingError>;
}
