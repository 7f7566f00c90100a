mod config;
mod error;
mod types;

pub use config::*;
pub use error::*;
pub use types::*;

/// Structural validation before a record crosses the gateway boundary.
pub trait Validator {
    fn validate(&self) -> Result<(), BookingError>;
}
