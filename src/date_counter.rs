// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Date counter
//!
//! A count adjusted by a configurable step. Each adjustment moves a date by
//! the same number of days; the date is shown relative to today.

use crate::clock::Clock;
use crate::relative::RelativeDate;
use chrono::{Days, NaiveDate};
use kas::prelude::*;
use kas::widgets::{format_data, Adapt, Button};
use std::time::Duration;

/// How often "today" is re-read from the clock
const REFRESH: Duration = Duration::from_secs(60);
const REFRESH_TIMER: u64 = 0;

// Button labels; `&` marks the access key
const STEP_DOWN: &str = "&Decrease step";
const STEP_UP: &str = "&Increase step";
const COUNT_DOWN: &str = "Decrease &count";
const COUNT_UP: &str = "Increase c&ount";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    StepDown,
    StepUp,
    Adjust(Direction),
}

/// Widget state
///
/// Invariants: `step >= 1`, and `date` is always `count` days after the
/// initial date.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateCounter {
    step: u32,
    count: i64,
    date: NaiveDate,
    today: NaiveDate,
}

impl DateCounter {
    pub fn new(today: NaiveDate) -> Self {
        DateCounter {
            step: 1,
            count: 0,
            date: today,
            today,
        }
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The date the message is relative to
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn increase_step(&mut self) {
        self.step = self.step.saturating_add(1);
    }

    pub fn decrease_step(&mut self) {
        self.step = self.step.saturating_sub(1).max(1);
    }

    /// Move count and date by one step
    ///
    /// The date moves from its current value, not from today. An adjustment
    /// which would take either value out of range is ignored.
    pub fn adjust(&mut self, direction: Direction) {
        let days = Days::new(self.step.into());
        let step = i64::from(self.step);
        let next = match direction {
            Direction::Back => self
                .count
                .checked_sub(step)
                .zip(self.date.checked_sub_days(days)),
            Direction::Forward => self
                .count
                .checked_add(step)
                .zip(self.date.checked_add_days(days)),
        };

        match next {
            Some((count, date)) => {
                self.count = count;
                self.date = date;
                log::debug!("adjust {direction:?}: count={count}, date={date}");
            }
            None => log::warn!(
                "adjust {direction:?} by {step} out of range (count={}, date={})",
                self.count,
                self.date
            ),
        }
    }

    /// Set the reference date; returns true if it changed
    pub fn set_today(&mut self, today: NaiveDate) -> bool {
        if today == self.today {
            return false;
        }
        log::debug!("today changed: {} -> {today}", self.today);
        self.today = today;
        true
    }

    pub fn relative(&self) -> RelativeDate {
        RelativeDate::between(self.date, self.today())
    }

    /// The relative-date message, e.g. `3 days from today is Thu, Jan 8, 2026`
    pub fn message(&self) -> String {
        self.relative().to_string()
    }

    pub fn handle(&mut self, control: Control) {
        match control {
            Control::StepDown => self.decrease_step(),
            Control::StepUp => self.increase_step(),
            Control::Adjust(direction) => self.adjust(direction),
        }
    }
}

pub fn window<C: Clock + 'static>(clock: C) -> Window<()> {
    let ui = kas::column![
        row![
            Button::label_msg(STEP_DOWN, Control::StepDown).map_any(),
            align!(center, format_data!(data: &DateCounter, "Step: {}", data.step())),
            Button::label_msg(STEP_UP, Control::StepUp).map_any(),
        ],
        row![
            Button::label_msg(COUNT_DOWN, Control::Adjust(Direction::Back)).map_any(),
            align!(center, format_data!(data: &DateCounter, "Count: {}", data.count())),
            Button::label_msg(COUNT_UP, Control::Adjust(Direction::Forward)).map_any(),
        ],
        align!(center, format_data!(data: &DateCounter, "{}", data.message())),
    ];

    let ui = Adapt::new(ui, DateCounter::new(clock.today()))
        .on_configure(|cx, _| cx.request_timer(REFRESH_TIMER, REFRESH))
        .on_timer(REFRESH_TIMER, move |cx, state, _| {
            cx.request_timer(REFRESH_TIMER, REFRESH);
            state.set_today(clock.today())
        })
        .on_message(|_, state, control: Control| state.handle(control));
    Window::new(ui, "Date Counter")
}
