//! Scheduling value objects: calendar due dates, start times and durations.

use super::TaskDomainError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::IntErrorKind;

/// Calendar day a task is due on.
///
/// Due dates are plain calendar values with no time-of-day or offset, so a
/// date typed into a form always displays as the same day regardless of the
/// viewer's UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DueDate(NaiveDate);

impl DueDate {
    /// Format used by date inputs and for display.
    pub const INPUT_FORMAT: &'static str = "%Y-%m-%d";

    /// Wraps a calendar date.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Builds a due date from year, month and day.
    ///
    /// Returns `None` when the components do not name a real day.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parses the value of a date-only form input (`YYYY-MM-DD`).
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidDueDate`] when the input is not a
    /// calendar date in input format.
    pub fn parse_local_input(input: &str) -> Result<Self, TaskDomainError> {
        NaiveDate::parse_from_str(input.trim(), Self::INPUT_FORMAT)
            .map(Self)
            .map_err(|_| TaskDomainError::InvalidDueDate(input.to_owned()))
    }

    /// Returns the viewer's current calendar day.
    #[must_use]
    pub fn today(clock: &impl Clock) -> Self {
        Self(clock.local().date_naive())
    }

    /// Returns the calendar day an instant falls on in its own timezone.
    #[must_use]
    pub fn from_local_instant<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self(instant.date_naive())
    }

    /// Returns local midnight of this day at the given UTC offset.
    #[must_use]
    pub fn start_of_day_in(self, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
        offset
            .from_local_datetime(&self.0.and_time(NaiveTime::MIN))
            .single()
    }

    /// Returns the wrapped calendar date.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::INPUT_FORMAT))
    }
}

/// Planned duration of a task in whole minutes, always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DurationMinutes(u32);

impl DurationMinutes {
    /// Duration used when none is given or input is unusable.
    pub const DEFAULT: Self = Self(60);

    /// Increment applied by the duration stepper.
    pub const STEP: u32 = 15;

    /// Creates a validated duration.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidDuration`] when `minutes` is zero.
    pub const fn new(minutes: u32) -> Result<Self, TaskDomainError> {
        if minutes == 0 {
            return Err(TaskDomainError::InvalidDuration(minutes));
        }
        Ok(Self(minutes))
    }

    /// Reads numeric form input as a duration.
    ///
    /// Returns `None` unless the input is a positive integer. Integers too
    /// large for `u32` saturate at `u32::MAX` minutes.
    #[must_use]
    pub fn parse_input(input: &str) -> Option<Self> {
        let minutes = match input.trim().parse::<u32>() {
            Ok(minutes) => minutes,
            Err(err) if *err.kind() == IntErrorKind::PosOverflow => u32::MAX,
            Err(_) => return None,
        };
        Self::new(minutes).ok()
    }

    /// Returns the duration increased by `step` minutes.
    #[must_use]
    pub const fn stepped_up(self, step: u32) -> Self {
        Self(self.0.saturating_add(step))
    }

    /// Returns the duration decreased by `step` minutes, never below one.
    #[must_use]
    pub fn stepped_down(self, step: u32) -> Self {
        Self(self.0.saturating_sub(step).max(1))
    }

    /// Returns the number of minutes.
    #[must_use]
    pub const fn minutes(self) -> u32 {
        self.0
    }
}

impl Default for DurationMinutes {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for DurationMinutes {
    type Error = TaskDomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DurationMinutes> for u32 {
    fn from(value: DurationMinutes) -> Self {
        value.0
    }
}

impl fmt::Display for DurationMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.0)
    }
}

/// Free-form time-of-day entered for a task.
///
/// The value is kept as typed; only blank input is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StartTime(String);

impl StartTime {
    /// Reads a start time from form input. Blank input yields `None`.
    #[must_use]
    pub fn from_input(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_owned()))
    }

    /// Returns the start time as typed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StartTime {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StartTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
