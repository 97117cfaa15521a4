// clock.rs — Date source for the store.
//
// Every log operation stamps "today" at call time. Routing that through
// a trait keeps the store deterministic under test: production code uses
// the wall clock, tests pin a date.

use chrono::{Local, NaiveDate};

/// Source of the current calendar date.
pub trait Clock: Send {
    /// Today's date in the user's local timezone.
    fn today(&self) -> NaiveDate;
}

/// Wall-clock dates from the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date.
///
/// Used throughout the test suites; exported for callers that need
/// reproducible runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
