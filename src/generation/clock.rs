//! Time source for date-dependent placeholder values

use chrono::{Datelike, Local};

/// Supplies the calendar year used for the `year` placeholder
pub trait Clock: Send + Sync {
    fn current_year(&self) -> i32;
}

/// Wall-clock time in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

/// A clock frozen at one year, for reproducible output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    year: i32,
}

impl FixedClock {
    pub fn new(year: i32) -> Self {
        Self { year }
    }
}

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.year
    }
}
