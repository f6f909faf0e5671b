// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Source of the current calendar date

use chrono::{Local, NaiveDate};

/// Provides "today"
///
/// The date counter never reads system time directly; this lets the window
/// run against the local clock while tests use a fixed date.
pub trait Clock {
    /// The current calendar date, in local time
    fn today(&self) -> NaiveDate;
}

/// The system clock, in the local timezone
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
