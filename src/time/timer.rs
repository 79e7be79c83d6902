// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Countdown time patterns.
//!
//! Timers count down from the moment the schedule is activated rather than
//! firing at a wall-clock time. The countdown is expressed as a
//! [`TimeOfDay`] in the `PT` segment. Recurring timers repeat the countdown
//! a bounded number of times ([`Reoccurs`]) or without limit; randomized
//! timers add a jitter window after the `A` marker.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex_lite::Regex;

use crate::error::{Result, ValidationError};
use crate::time::{Reoccurs, TimeOfDay};

static TIMER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^PT(\d{2}):(\d{2}):(\d{2})$").expect("timer regex is valid")
});

static RECURRING_TIMER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^R(\d{0,2})/PT(\d{2}):(\d{2}):(\d{2})$").expect("recurring timer regex is valid")
});

static RANDOMIZED_TIMER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^PT(\d{2}):(\d{2}):(\d{2})A(\d{2}):(\d{2}):(\d{2})$")
        .expect("randomized timer regex is valid")
});

static RECURRING_RANDOMIZED_TIMER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^R(\d{0,2})/PT(\d{2}):(\d{2}):(\d{2})A(\d{2}):(\d{2}):(\d{2})$")
        .expect("recurring randomized timer regex is valid")
});

// =============================================================================
// Timer
// =============================================================================

/// A single countdown from schedule activation.
///
/// Canonical form: `PTHH:MM:SS`.
///
/// # Examples
///
/// ```
/// use huer_lib::time::{Timer, TimeOfDay};
///
/// let ten_minutes = Timer::new(TimeOfDay::new(0, 10, 0).unwrap());
/// assert_eq!(ten_minutes.to_string(), "PT00:10:00");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Timer {
    time: TimeOfDay,
}

impl Timer {
    /// Creates a timer with the given countdown.
    #[must_use]
    pub const fn new(time: TimeOfDay) -> Self {
        Self { time }
    }

    /// Returns `true` if the string follows the timer grammar.
    #[must_use]
    pub fn matches(s: &str) -> bool {
        TIMER_RE.is_match(s)
    }

    /// Returns the countdown.
    #[must_use]
    pub const fn time(&self) -> TimeOfDay {
        self.time
    }

    /// Sets the countdown.
    #[must_use]
    pub const fn at(mut self, time: TimeOfDay) -> Self {
        self.time = time;
        self
    }

    /// Sets the countdown from raw hour, minute, and second values.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` without altering any field if
    /// a value is out of bounds.
    pub fn at_hms(self, hours: u8, minutes: u8, seconds: u8) -> Result<Self> {
        Ok(self.at(TimeOfDay::new(hours, minutes, seconds)?))
    }
}

impl fmt::Display for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PT{}", self.time)
    }
}

impl FromStr for Timer {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        let caps = TIMER_RE
            .captures(s)
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "timer".to_string(),
                expected: "PTHH:MM:SS",
                value: s.to_string(),
            })?;
        Ok(Self {
            time: TimeOfDay::from_captures(&caps[1], &caps[2], &caps[3])?,
        })
    }
}

// =============================================================================
// RecurringTimer
// =============================================================================

/// A repeating countdown.
///
/// Canonical form: `R{RR}/PTHH:MM:SS`. An empty count repeats without
/// limit (`R/PT...`); a 2-digit count repeats exactly that many times.
///
/// # Examples
///
/// ```
/// use huer_lib::time::{RecurringTimer, Reoccurs, TimeOfDay};
///
/// let blink = RecurringTimer::new(
///     Reoccurs::new(5).unwrap(),
///     TimeOfDay::new(0, 0, 30).unwrap(),
/// );
/// assert_eq!(blink.to_string(), "R05/PT00:00:30");
///
/// let forever = blink.repeats(Reoccurs::UNLIMITED);
/// assert_eq!(forever.to_string(), "R/PT00:00:30");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct RecurringTimer {
    reoccurs: Reoccurs,
    time: TimeOfDay,
}

impl RecurringTimer {
    /// Creates a repeating timer.
    #[must_use]
    pub const fn new(reoccurs: Reoccurs, time: TimeOfDay) -> Self {
        Self { reoccurs, time }
    }

    /// Returns `true` if the string follows the recurring timer grammar.
    #[must_use]
    pub fn matches(s: &str) -> bool {
        RECURRING_TIMER_RE.is_match(s)
    }

    /// Returns the repeat count.
    #[must_use]
    pub const fn reoccurs(&self) -> Reoccurs {
        self.reoccurs
    }

    /// Returns the countdown.
    #[must_use]
    pub const fn time(&self) -> TimeOfDay {
        self.time
    }

    /// Sets the repeat count.
    #[must_use]
    pub const fn repeats(mut self, reoccurs: Reoccurs) -> Self {
        self.reoccurs = reoccurs;
        self
    }

    /// Sets the countdown.
    #[must_use]
    pub const fn at(mut self, time: TimeOfDay) -> Self {
        self.time = time;
        self
    }

    /// Sets the repeat count from a raw value, where 0 means unlimited.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` without altering any field if
    /// the count exceeds 99.
    pub fn repeats_count(self, count: u8) -> Result<Self> {
        Ok(self.repeats(Reoccurs::new(count)?))
    }

    /// Sets the countdown from raw hour, minute, and second values.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` without altering any field if
    /// a value is out of bounds.
    pub fn at_hms(self, hours: u8, minutes: u8, seconds: u8) -> Result<Self> {
        Ok(self.at(TimeOfDay::new(hours, minutes, seconds)?))
    }
}

impl fmt::Display for RecurringTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}/PT{}", self.reoccurs, self.time)
    }
}

impl FromStr for RecurringTimer {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        let caps = RECURRING_TIMER_RE
            .captures(s)
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "recurring timer".to_string(),
                expected: "R{RR}/PTHH:MM:SS",
                value: s.to_string(),
            })?;
        Ok(Self {
            reoccurs: caps[1].parse()?,
            time: TimeOfDay::from_captures(&caps[2], &caps[3], &caps[4])?,
        })
    }
}

// =============================================================================
// RandomizedTimer
// =============================================================================

/// A single countdown with a random jitter window.
///
/// Canonical form: `PTHH:MM:SSAHH:MM:SS`.
///
/// # Examples
///
/// ```
/// use huer_lib::time::{RandomizedTimer, TimeOfDay};
///
/// let timer = RandomizedTimer::new(TimeOfDay::new(0, 30, 0).unwrap())
///     .with_random(TimeOfDay::new(0, 5, 0).unwrap());
/// assert_eq!(timer.to_string(), "PT00:30:00A00:05:00");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct RandomizedTimer {
    time: TimeOfDay,
    random: TimeOfDay,
}

impl RandomizedTimer {
    /// Creates a timer with the given countdown and a zero jitter window.
    #[must_use]
    pub const fn new(time: TimeOfDay) -> Self {
        Self {
            time,
            random: TimeOfDay::MIDNIGHT,
        }
    }

    /// Returns `true` if the string follows the randomized timer grammar.
    #[must_use]
    pub fn matches(s: &str) -> bool {
        RANDOMIZED_TIMER_RE.is_match(s)
    }

    /// Returns the countdown.
    #[must_use]
    pub const fn time(&self) -> TimeOfDay {
        self.time
    }

    /// Returns the jitter window.
    #[must_use]
    pub const fn random(&self) -> TimeOfDay {
        self.random
    }

    /// Sets the countdown.
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

    /// Sets the countdown from raw hour, minute, and second values.
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

impl fmt::Display for RandomizedTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PT{}A{}", self.time, self.random)
    }
}

impl FromStr for RandomizedTimer {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        let caps = RANDOMIZED_TIMER_RE
            .captures(s)
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "randomized timer".to_string(),
                expected: "PTHH:MM:SSAHH:MM:SS",
                value: s.to_string(),
            })?;
        Ok(Self {
            time: TimeOfDay::from_captures(&caps[1], &caps[2], &caps[3])?,
            random: TimeOfDay::from_captures(&caps[4], &caps[5], &caps[6])?,
        })
    }
}

// =============================================================================
// RecurringRandomizedTimer
// =============================================================================

/// A repeating countdown with a random jitter window.
///
/// Canonical form: `R{RR}/PTHH:MM:SSAHH:MM:SS`.
///
/// # Examples
///
/// ```
/// use huer_lib::time::{RecurringRandomizedTimer, Reoccurs, TimeOfDay};
///
/// let timer = RecurringRandomizedTimer::new(
///     Reoccurs::UNLIMITED,
///     TimeOfDay::new(1, 0, 0).unwrap(),
/// )
/// .with_random(TimeOfDay::new(0, 10, 0).unwrap());
/// assert_eq!(timer.to_string(), "R/PT01:00:00A00:10:00");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct RecurringRandomizedTimer {
    reoccurs: Reoccurs,
    time: TimeOfDay,
    random: TimeOfDay,
}

impl RecurringRandomizedTimer {
    /// Creates a repeating timer with a zero jitter window.
    #[must_use]
    pub const fn new(reoccurs: Reoccurs, time: TimeOfDay) -> Self {
        Self {
            reoccurs,
            time,
            random: TimeOfDay::MIDNIGHT,
        }
    }

    /// Returns `true` if the string follows the recurring randomized timer
    /// grammar.
    #[must_use]
    pub fn matches(s: &str) -> bool {
        RECURRING_RANDOMIZED_TIMER_RE.is_match(s)
    }

    /// Returns the repeat count.
    #[must_use]
    pub const fn reoccurs(&self) -> Reoccurs {
        self.reoccurs
    }

    /// Returns the countdown.
    #[must_use]
    pub const fn time(&self) -> TimeOfDay {
        self.time
    }

    /// Returns the jitter window.
    #[must_use]
    pub const fn random(&self) -> TimeOfDay {
        self.random
    }

    /// Sets the repeat count.
    #[must_use]
    pub const fn repeats(mut self, reoccurs: Reoccurs) -> Self {
        self.reoccurs = reoccurs;
        self
    }

    /// Sets the countdown.
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

    /// Sets the repeat count from a raw value, where 0 means unlimited.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` without altering any field if
    /// the count exceeds 99.
    pub fn repeats_count(self, count: u8) -> Result<Self> {
        Ok(self.repeats(Reoccurs::new(count)?))
    }

    /// Sets the countdown from raw hour, minute, and second values.
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

impl fmt::Display for RecurringRandomizedTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}/PT{}A{}", self.reoccurs, self.time, self.random)
    }
}

impl FromStr for RecurringRandomizedTimer {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        let caps = RECURRING_RANDOMIZED_TIMER_RE
            .captures(s)
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "recurring randomized timer".to_string(),
                expected: "R{RR}/PTHH:MM:SSAHH:MM:SS",
                value: s.to_string(),
            })?;
        Ok(Self {
            reoccurs: caps[1].parse()?,
            time: TimeOfDay::from_captures(&caps[2], &caps[3], &caps[4])?,
            random: TimeOfDay::from_captures(&caps[5], &caps[6], &caps[7])?,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
