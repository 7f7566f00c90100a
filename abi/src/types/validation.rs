use serde::Serialize;

use crate::BookingError;

/// Outcome of the availability check, in the shape the booking form renders:
/// a flag plus a human-readable reason when the range is not bookable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub reason: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    pub fn fail(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: Some(reason.into()),
        }
    }
}

impl From<&BookingError> for ValidationResult {
    fn from(e: &BookingError) -> Self {
        Self::fail(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_should_become_reason() {
        let result = ValidationResult::from(&BookingError::EmptySelection);
        assert!(!result.valid);
        assert_eq!(result.reason.as_deref(), Some("select at least one day"));
    }

    #[test]
    fn ok_should_carry_no_reason() {
        let result = ValidationResult::ok();
        assert!(result.valid);
        assert!(result.reason.is_none());
    }
}
