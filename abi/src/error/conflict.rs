use core::fmt;

use chrono::NaiveDate;

/// The overlap between a proposed range and the already booked days.
///
/// Days are kept in selection order so the first entry is the earliest
/// conflicting night the guest picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictInfo {
    pub days: Vec<NaiveDate>,
}

impl ConflictInfo {
    pub fn new(days: Vec<NaiveDate>) -> Self {
        Self { days }
    }

    pub fn first(&self) -> Option<NaiveDate> {
        self.days.first().copied()
    }
}

impl fmt::Display for ConflictInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, day) in self.days.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", day)?;
        }
        Ok(())
    }
}
