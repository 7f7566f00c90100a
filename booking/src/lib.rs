pub mod availability;
mod clock;
pub mod eligibility;
mod flow;
pub mod price;

pub use clock::{Clock, SystemClock};
pub use flow::{ReservationFlow, SelectionState, Snapshot};
