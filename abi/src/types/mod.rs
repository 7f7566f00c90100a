mod booking_status;
mod calendar;
mod date_range;
mod intent;
mod quote;
mod record;
mod validation;

pub use booking_status::*;
pub use calendar::*;
pub use date_range::*;
pub use intent::*;
pub use quote::*;
pub use record::*;
pub use validation::*;
