use chrono::{Local, NaiveDateTime};

/// Source of "now" for records that capture their creation time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in local time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
