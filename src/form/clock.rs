//! Source of "today" for date validation.

use chrono::NaiveDate;

/// Provides the current calendar day.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Always reports the same day. Used by tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
