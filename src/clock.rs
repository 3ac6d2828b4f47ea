//! Source of "today" for the daily rules.

use std::cell::Cell;

use chrono::{Local, NaiveDate};

/// Tells the account which calendar date operations happen on
pub trait Clock {
    /// current calendar date
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the machine
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock that only moves when told to.
///
/// Used by tests and by [`crate::replay`] where every operation carries its own date.
#[derive(Debug, Clone)]
pub struct ManualClock {
    today: Cell<NaiveDate>,
}

impl ManualClock {
    /// clock stopped at `date`
    pub fn new(date: NaiveDate) -> Self {
        Self {
            today: Cell::new(date),
        }
    }

    /// move clock to `date`, earlier dates are allowed
    pub fn set(&self, date: NaiveDate) {
        self.today.set(date);
    }

    /// move clock `days` forward
    pub fn advance_days(&self, days: u64) {
        let next = self
            .today
            .get()
            .checked_add_days(chrono::Days::new(days))
            .unwrap_or(NaiveDate::MAX);
        self.today.set(next);
    }
}

impl Clock for ManualClock {
    fn today(&self) -> NaiveDate {
        self.today.get()
    }
}
