use core::fmt;

use serde::Serialize;

/// State of the submit control for one booking attempt.
///
/// The first matching condition wins for the label; submission itself is
/// permitted only when every gate passes and the status is `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BookingStatus {
    LoginRequired,
    OwnVehicle,
    SoldOut,
    InvalidDates,
    Ready,
}

impl BookingStatus {
    pub fn is_ready(self) -> bool {
        matches!(self, BookingStatus::Ready)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::LoginRequired => write!(f, "Login to Book"),
            BookingStatus::OwnVehicle => write!(f, "Cannot Book Own Vehicle"),
            BookingStatus::SoldOut => write!(f, "Sold Out - Unavailable"),
            BookingStatus::InvalidDates => write!(f, "Select Valid Dates"),
            BookingStatus::Ready => write!(f, "Reserve Now"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_should_match_submit_control() {
        assert_eq!(BookingStatus::LoginRequired.to_string(), "Login to Book");
        assert_eq!(BookingStatus::OwnVehicle.to_string(), "Cannot Book Own Vehicle");
        assert_eq!(BookingStatus::SoldOut.to_string(), "Sold Out - Unavailable");
        assert_eq!(BookingStatus::InvalidDates.to_string(), "Select Valid Dates");
        assert_eq!(BookingStatus::Ready.to_string(), "Reserve Now");
    }

    #[test]
    fn only_ready_should_permit_submission() {
        assert!(BookingStatus::Ready.is_ready());
        assert!(!BookingStatus::SoldOut.is_ready());
        assert!(!BookingStatus::LoginRequired.is_ready());
    }
}
