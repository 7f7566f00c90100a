mod conflict;

use thiserror::Error;

pub use conflict::*;

use crate::BookingStatus;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    #[error("select at least one day")]
    EmptySelection,

    #[error("selected dates conflict with already booked dates")]
    DateConflict(ConflictInfo),

    #[error("end date must be after start date")]
    InvertedRange,

    #[error("no authenticated guest")]
    MissingGuest,

    #[error("booking not permitted: {0}")]
    NotPermitted(BookingStatus),

    #[error("incomplete reservation: missing {0}")]
    IncompleteIntent(&'static str),

    #[error("gateway error: {0}")]
    Gateway(String),
}
