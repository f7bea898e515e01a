//! Time source for recency scoring, injectable so tests are deterministic.

use chrono::Datelike;
use std::fmt;

/// Supplies the current calendar year.
pub trait Clock: Send + Sync + fmt::Debug {
    fn current_year(&self) -> i32;
}

/// Reads the year from the system clock in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        chrono::Utc::now().year()
    }
}

/// Always reports the same year.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}
