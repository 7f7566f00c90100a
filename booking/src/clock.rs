use chrono::{Local, NaiveDate};

/// Source of "today" for the default selection. Injected instead of read
/// from the ambient system clock so the pipeline stays deterministic under
/// test.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation used by the application shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
