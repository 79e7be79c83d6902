// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Weekday-based time patterns.
//!
//! These patterns fire on the days selected by a [`WeekdayMask`] and repeat
//! forever. [`RecurringTime`] fires at one time of day, optionally jittered
//! as [`RecurringRandomizedTime`]; [`IntervalTime`] describes an active
//! window between two times of day instead of a single trigger.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex_lite::Regex;

use crate::error::{Result, ValidationError};
use crate::time::{TimeOfDay, WeekdayMask};

static RECURRING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^W(\d{1,3})/T(\d{2}):(\d{2}):(\d{2})$").expect("recurring time regex is valid")
});

static RECURRING_RANDOMIZED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^W(\d{1,3})/T(\d{2}):(\d{2}):(\d{2})A(\d{2}):(\d{2}):(\d{2})$")
        .expect("recurring randomized time regex is valid")
});

static INTERVAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^W(\d{1,3})/T(\d{2}):(\d{2}):(\d{2})/T(\d{2}):(\d{2}):(\d{2})$")
        .expect("interval time regex is valid")
});

// =============================================================================
// RecurringTime
// =============================================================================

/// A trigger firing at the same time on every selected weekday, forever.
///
/// Canonical form: `WWWW/THH:MM:SS` with a 3-digit zero-padded weekday
/// mask, e.g. `W064/T06:00:00` for every Monday at 06:00.
///
/// # Examples
///
/// ```
/// use huer_lib::time::{RecurringTime, TimeOfDay, WeekdayMask};
///
/// let wake_up = RecurringTime::new(WeekdayMask::MONDAY, TimeOfDay::new(6, 0, 0).unwrap());
/// assert_eq!(wake_up.to_string(), "W064/T06:00:00");
///
/// let weekend = wake_up.on(WeekdayMask::WEEKEND).at_hms(9, 30, 0).unwrap();
/// assert_eq!(weekend.to_string(), "W003/T09:30:00");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct RecurringTime {
    weekdays: WeekdayMask,
    time: TimeOfDay,
}

impl RecurringTime {
    /// Creates a pattern firing on the given weekdays at the given time.
    #[must_use]
    pub const fn new(weekdays: WeekdayMask, time: TimeOfDay) -> Self {
        Self { weekdays, time }
    }

    /// Returns `true` if the string follows the recurring grammar.
    #[must_use]
    pub fn matches(s: &str) -> bool {
        RECURRING_RE.is_match(s)
    }

    /// Returns the weekday mask.
    #[must_use]
    pub const fn weekdays(&self) -> WeekdayMask {
        self.weekdays
    }

    /// Returns the trigger time.
    #[must_use]
    pub const fn time(&self) -> TimeOfDay {
        self.time
    }

    /// Sets the weekday mask.
    #[must_use]
    pub const fn on(mut self, weekdays: WeekdayMask) -> Self {
        self.weekdays = weekdays;
        self
    }

    /// Sets the trigger time.
    #[must_use]
    pub const fn at(mut self, time: TimeOfDay) -> Self {
        self.time = time;
        self
    }

    /// Sets the weekday mask from its raw bit value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` without altering any field if
    /// the mask is outside [1, 127].
    pub fn on_mask(self, mask: u8) -> Result<Self> {
        Ok(self.on(WeekdayMask::new(mask)?))
    }

    /// Sets the trigger time from raw hour, minute, and second values.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` without altering any field if
    /// a value is out of bounds.
    pub fn at_hms(self, hours: u8, minutes: u8, seconds: u8) -> Result<Self> {
        Ok(self.at(TimeOfDay::new(hours, minutes, seconds)?))
    }
}

impl fmt::Display for RecurringTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W{}/T{}", self.weekdays, self.time)
    }
}

impl FromStr for RecurringTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        let caps = RECURRING_RE
            .captures(s)
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "recurring time".to_string(),
                expected: "WWWW/THH:MM:SS",
                value: s.to_string(),
            })?;
        Ok(Self {
            weekdays: caps[1].parse()?,
            time: TimeOfDay::from_captures(&caps[2], &caps[3], &caps[4])?,
        })
    }
}

// =============================================================================
// RecurringRandomizedTime
// =============================================================================

/// A recurring weekday trigger with a random jitter window.
///
/// Canonical form: `WWWW/THH:MM:SSAHH:MM:SS`.
///
/// # Examples
///
/// ```
/// use huer_lib::time::{RecurringRandomizedTime, TimeOfDay, WeekdayMask};
///
/// let lived_in = RecurringRandomizedTime::new(
///     WeekdayMask::ALL,
///     TimeOfDay::new(22, 0, 0).unwrap(),
/// )
/// .with_random(TimeOfDay::new(0, 30, 0).unwrap());
/// assert_eq!(lived_in.to_string(), "W127/T22:00:00A00:30:00");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct RecurringRandomizedTime {
    weekdays: WeekdayMask,
    time: TimeOfDay,
    random: TimeOfDay,
}

impl RecurringRandomizedTime {
    /// Creates a pattern firing on the given weekdays at the given time
    /// with a zero jitter window.
    #[must_use]
    pub const fn new(weekdays: WeekdayMask, time: TimeOfDay) -> Self {
        Self {
            weekdays,
            time,
            random: TimeOfDay::MIDNIGHT,
        }
    }

    /// Returns `true` if the string follows the recurring randomized
    /// grammar.
    #[must_use]
    pub fn matches(s: &str) -> bool {
        RECURRING_RANDOMIZED_RE.is_match(s)
    }

    /// Returns the weekday mask.
    #[must_use]
    pub const fn weekdays(&self) -> WeekdayMask {
        self.weekdays
    }

    /// Returns the trigger time.
    #[must_use]
    pub const fn time(&self) -> TimeOfDay {
        self.time
    }

    /// Returns the jitter window.
    #[must_use]
    pub const fn random(&self) -> TimeOfDay {
        self.random
    }

    /// Sets the weekday mask.
    #[must_use]
    pub const fn on(mut self, weekdays: WeekdayMask) -> Self {
        self.weekdays = weekdays;
        self
    }

    /// Sets the trigger time.
    #[must_use]
    pub const fn at(mut self, time: TimeOfDay) -> Self {
        self.time = time;
        self
    }

    /// Sets the jitter window.
    #[must_use]
    pub const fn with_random(mut self, random: TimeOfDay) -> Self {
        self.random = random;
        self
    }

    /// Sets the weekday mask from its raw bit value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` without altering any field if
    /// the mask is outside [1, 127].
    pub fn on_mask(self, mask: u8) -> Result<Self> {
        Ok(self.on(WeekdayMask::new(mask)?))
    }

    /// Sets the trigger time from raw hour, minute, and second values.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` without altering any field if
    /// a value is out of bounds.
    pub fn at_hms(self, hours: u8, minutes: u8, seconds: u8) -> Result<Self> {
        Ok(self.at(TimeOfDay::new(hours, minutes, seconds)?))
    }

    /// Sets the jitter window from raw hour, minute, and second values.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` without altering any field if
    /// a value is out of bounds.
    pub fn with_random_hms(self, hours: u8, minutes: u8, seconds: u8) -> Result<Self> {
        Ok(self.with_random(TimeOfDay::new(hours, minutes, seconds)?))
    }
}

impl fmt::Display for RecurringRandomizedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W{}/T{}A{}", self.weekdays, self.time, self.random)
    }
}

impl FromStr for RecurringRandomizedTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        let caps = RECURRING_RANDOMIZED_RE
            .captures(s)
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "recurring randomized time".to_string(),
                expected: "WWWW/THH:MM:SSAHH:MM:SS",
                value: s.to_string(),
            })?;
        Ok(Self {
            weekdays: caps[1].parse()?,
            time: TimeOfDay::from_captures(&caps[2], &caps[3], &caps[4])?,
            random: TimeOfDay::from_captures(&caps[5], &caps[6], &caps[7])?,
        })
    }
}

// =============================================================================
// IntervalTime
// =============================================================================

/// An active window between two times of day on the selected weekdays.
///
/// Schedules carrying an interval stay active from the first time to the
/// second on every matching day. Canonical form:
/// `WWWW/THH:MM:SS/THH:MM:SS`.
///
/// # Examples
///
/// ```
/// use huer_lib::time::{IntervalTime, TimeOfDay, WeekdayMask};
///
/// let night = IntervalTime::new(
///     WeekdayMask::ALL,
///     TimeOfDay::new(23, 0, 0).unwrap(),
///     TimeOfDay::new(6, 0, 0).unwrap(),
/// );
/// assert_eq!(night.to_string(), "W127/T23:00:00/T06:00:00");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct IntervalTime {
    weekdays: WeekdayMask,
    from: TimeOfDay,
    to: TimeOfDay,
}

impl IntervalTime {
    /// Creates an interval on the given weekdays between two times.
    #[must_use]
    pub const fn new(weekdays: WeekdayMask, from: TimeOfDay, to: TimeOfDay) -> Self {
        Self { weekdays, from, to }
    }

    /// Returns `true` if the string follows the interval grammar.
    #[must_use]
    pub fn matches(s: &str) -> bool {
        INTERVAL_RE.is_match(s)
    }

    /// Returns the weekday mask.
    #[must_use]
    pub const fn weekdays(&self) -> WeekdayMask {
        self.weekdays
    }

    /// Returns the start of the window.
    #[must_use]
    pub const fn from_time(&self) -> TimeOfDay {
        self.from
    }

    /// Returns the end of the window.
    #[must_use]
    pub const fn to_time(&self) -> TimeOfDay {
        self.to
    }

    /// Sets the weekday mask.
    #[must_use]
    pub const fn on(mut self, weekdays: WeekdayMask) -> Self {
        self.weekdays = weekdays;
        self
    }

    /// Sets both ends of the window.
    #[must_use]
    pub const fn between(mut self, from: TimeOfDay, to: TimeOfDay) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Sets the weekday mask from its raw bit value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` without altering any field if
    /// the mask is outside [1, 127].
    pub fn on_mask(self, mask: u8) -> Result<Self> {
        Ok(self.on(WeekdayMask::new(mask)?))
    }
}

impl fmt::Display for IntervalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W{}/T{}/T{}", self.weekdays, self.from, self.to)
    }
}

impl FromStr for IntervalTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        let caps = INTERVAL_RE
            .captures(s)
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "interval time".to_string(),
                expected: "WWWW/THH:MM:SS/THH:MM:SS",
                value: s.to_string(),
            })?;
        Ok(Self {
            weekdays: caps[1].parse()?,
            from: TimeOfDay::from_captures(&caps[2], &caps[3], &caps[4])?,
            to: TimeOfDay::from_captures(&caps[5], &caps[6], &caps[7])?,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
