use std::time::Duration;

use abi::{BookingError, GatewayConfig, ReservationIntent};
use async_trait::async_trait;
use reqwest::Client;

use crate::{BookingGateway, BookingReceipt};

/// HTTP implementation posting the reservation payload to the booking API.
#[derive(Debug, Clone)]
pub struct RestGateway {
    client: Client,
    url: String,
}

impl RestGateway {
    pub fn from_config(config: &GatewayConfig) -> Result<Self, BookingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BookingError::Gateway(e.to_string()))?;
        Ok(Self {
            client,
            url: config.bookings_url(),
        })
    }
}

#[async_trait]
impl BookingGateway for RestGateway {
    async fn submit(&self, intent: &ReservationIntent) -> Result<BookingReceipt, BookingError> {
        let resp = self
            .client
            .post(&self.url)
            .json(intent)
            .send()
            .await
            .map_err(|e| BookingError::Gateway(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(BookingError::Gateway(format!("{}: {}", status, body)));
        }

        resp.json::<BookingReceipt>()
            .await
            .map_err(|e| BookingError::Gateway(e.to_string()))
    }
}
