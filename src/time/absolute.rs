// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! One-shot time patterns anchored to a calendar date.
//!
//! [`AbsoluteTime`] fires once at an exact date and time. [`RandomizedTime`]
//! adds a jitter window: the bridge delays the trigger by a random amount of
//! up to the second time-of-day field.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex_lite::Regex;

use crate::error::{Result, ValidationError};
use crate::time::{CalendarDate, TimeOfDay};

static ABSOLUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})T(\d{2}):(\d{2}):(\d{2})$")
        .expect("absolute time regex is valid")
});

static RANDOMIZED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})T(\d{2}):(\d{2}):(\d{2})A(\d{2}):(\d{2}):(\d{2})$")
        .expect("randomized time regex is valid")
});

// =============================================================================
// AbsoluteTime
// =============================================================================

/// A one-shot schedule trigger at an exact date and time.
///
/// Canonical form: `YYYY-MM-DDTHH:MM:SS`.
///
/// # Examples
///
/// ```
/// use huer_lib::time::{AbsoluteTime, CalendarDate, TimeOfDay};
///
/// let when = AbsoluteTime::new(
///     CalendarDate::new(2026, 12, 24).unwrap(),
///     TimeOfDay::new(18, 30, 0).unwrap(),
/// );
/// assert_eq!(when.to_string(), "2026-12-24T18:30:00");
///
/// let parsed: AbsoluteTime = "2026-12-24T18:30:00".parse().unwrap();
/// assert_eq!(parsed, when);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct AbsoluteTime {
    date: CalendarDate,
    time: TimeOfDay,
}

impl AbsoluteTime {
    /// Creates a pattern firing at the given date and time.
    #[must_use]
    pub const fn new(date: CalendarDate, time: TimeOfDay) -> Self {
        Self { date, time }
    }

    /// Returns `true` if the string follows the absolute grammar.
    #[must_use]
    pub fn matches(s: &str) -> bool {
        ABSOLUTE_RE.is_match(s)
    }

    /// Returns the trigger date.
    #[must_use]
    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    /// Returns the trigger time.
    #[must_use]
    pub const fn time(&self) -> TimeOfDay {
        self.time
    }

    /// Sets the trigger date.
    #[must_use]
    pub const fn with_date(mut self, date: CalendarDate) -> Self {
        self.date = date;
        self
    }

    /// Sets the trigger time.
    #[must_use]
    pub const fn at(mut self, time: TimeOfDay) -> Self {
        self.time = time;
        self
    }

    /// Sets the trigger date from raw year, month, and day values.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` without altering any field if
    /// a value is out of bounds.
    pub fn on_ymd(self, year: u16, month: u8, day: u8) -> Result<Self> {
        Ok(self.with_date(CalendarDate::new(year, month, day)?))
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

impl fmt::Display for AbsoluteTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

impl FromStr for AbsoluteTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        let caps = ABSOLUTE_RE
            .captures(s)
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "absolute time".to_string(),
                expected: "YYYY-MM-DDTHH:MM:SS",
                value: s.to_string(),
            })?;
        Ok(Self {
            date: CalendarDate::from_captures(&caps[1], &caps[2], &caps[3])?,
            time: TimeOfDay::from_captures(&caps[4], &caps[5], &caps[6])?,
        })
    }
}

// =============================================================================
// RandomizedTime
// =============================================================================

/// A one-shot trigger with a random jitter window.
///
/// The bridge delays the trigger by a random amount between zero and the
/// jitter time. Canonical form: `YYYY-MM-DDTHH:MM:SSAHH:MM:SS`.
///
/// # Examples
///
/// ```
/// use huer_lib::time::{RandomizedTime, CalendarDate, TimeOfDay};
///
/// let when = RandomizedTime::new(
///     CalendarDate::new(2026, 12, 24).unwrap(),
///     TimeOfDay::new(18, 30, 0).unwrap(),
/// )
/// .with_random(TimeOfDay::new(0, 15, 0).unwrap());
/// assert_eq!(when.to_string(), "2026-12-24T18:30:00A00:15:00");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct RandomizedTime {
    date: CalendarDate,
    time: TimeOfDay,
    random: TimeOfDay,
}

impl RandomizedTime {
    /// Creates a pattern firing at the given date and time with a zero
    /// jitter window.
    #[must_use]
    pub const fn new(date: CalendarDate, time: TimeOfDay) -> Self {
        Self {
            date,
            time,
            random: TimeOfDay::MIDNIGHT,
        }
    }

    /// Returns `true` if the string follows the randomized grammar.
    #[must_use]
    pub fn matches(s: &str) -> bool {
        RANDOMIZED_RE.is_match(s)
    }

    /// Returns the trigger date.
    #[must_use]
    pub const fn date(&self) -> CalendarDate {
        self.date
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

    /// Sets the trigger date.
    #[must_use]
    pub const fn with_date(mut self, date: CalendarDate) -> Self {
        self.date = date;
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

    /// Sets the trigger date from raw year, month, and day values.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` without altering any field if
    /// a value is out of bounds.
    pub fn on_ymd(self, year: u16, month: u8, day: u8) -> Result<Self> {
        Ok(self.with_date(CalendarDate::new(year, month, day)?))
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

impl fmt::Display for RandomizedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}A{}", self.date, self.time, self.random)
    }
}

impl FromStr for RandomizedTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        let caps = RANDOMIZED_RE
            .captures(s)
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "randomized time".to_string(),
                expected: "YYYY-MM-DDTHH:MM:SSAHH:MM:SS",
                value: s.to_string(),
            })?;
        Ok(Self {
            date: CalendarDate::from_captures(&caps[1], &caps[2], &caps[3])?,
            time: TimeOfDay::from_captures(&caps[4], &caps[5], &caps[6])?,
            random: TimeOfDay::from_captures(&caps[7], &caps[8], &caps[9])?,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> CalendarDate {
        CalendarDate::new(2026, 12, 24).unwrap()
    }

    fn time() -> TimeOfDay {
        TimeOfDay::new(18, 30, 0).unwrap()
    }

    // -------------------------------------------------------------------------
    // AbsoluteTime Tests
    // -------------------------------------------------------------------------

    #[test]
    fn absolute_serializes_canonical_form() {
        let when = AbsoluteTime::new(date(), time());
        assert_eq!(when.to_string(), "2026-12-24T18:30:00");
    }

    #[test]
    fn absolute_round_trips() {
        let when = AbsoluteTime::new(date(), time());
        let parsed: AbsoluteTime = when.to_string().parse().unwrap();
        assert_eq!(parsed, when);
    }

    #[test]
    fn absolute_matches() {
        assert!(AbsoluteTime::matches("2026-12-24T18:30:00"));
        assert!(!AbsoluteTime::matches("2026-12-24T18:30:00A00:15:00"));
        assert!(!AbsoluteTime::matches("PT00:10:00"));
        assert!(!AbsoluteTime::matches("W064/T06:00:00"));
        assert!(!AbsoluteTime::matches(""));
    }

    #[test]
    fn absolute_rejects_out_of_range_fields() {
        assert!("2026-13-24T18:30:00".parse::<AbsoluteTime>().is_err());
        assert!("2026-12-24T24:30:00".parse::<AbsoluteTime>().is_err());
        assert!("1899-12-24T18:30:00".parse::<AbsoluteTime>().is_err());
    }

    #[test]
    fn absolute_accepts_permissive_day() {
        // Day 31 in February parses; calendar validity is not checked.
        let when: AbsoluteTime = "2026-02-31T00:00:00".parse().unwrap();
        assert_eq!(when.date().day(), 31);
    }

    #[test]
    fn absolute_fluent_setters() {
        let when = AbsoluteTime::default()
            .on_ymd(2026, 6, 15)
            .unwrap()
            .at_hms(7, 45, 30)
            .unwrap();
        assert_eq!(when.to_string(), "2026-06-15T07:45:30");
    }

    #[test]
    fn absolute_setter_failure_does_not_mutate() {
        let when = AbsoluteTime::new(date(), time());
        assert!(when.at_hms(25, 0, 0).is_err());
        assert_eq!(when.time(), time());
    }

    // -------------------------------------------------------------------------
    // RandomizedTime Tests
    // -------------------------------------------------------------------------

    #[test]
    fn randomized_serializes_canonical_form() {
        let when = RandomizedTime::new(date(), time())
            .with_random(TimeOfDay::new(0, 15, 0).unwrap());
        assert_eq!(when.to_string(), "2026-12-24T18:30:00A00:15:00");
    }

    #[test]
    fn randomized_round_trips() {
        let when = RandomizedTime::new(date(), time())
            .with_random_hms(1, 0, 0)
            .unwrap();
        let parsed: RandomizedTime = when.to_string().parse().unwrap();
        assert_eq!(parsed, when);
    }

    #[test]
    fn randomized_round_trips_with_default_jitter() {
        let when = RandomizedTime::new(date(), time());
        assert_eq!(when.random(), TimeOfDay::MIDNIGHT);
        let parsed: RandomizedTime = when.to_string().parse().unwrap();
        assert_eq!(parsed, when);
    }

    #[test]
    fn randomized_matches() {
        assert!(RandomizedTime::matches("2026-12-24T18:30:00A00:15:00"));
        assert!(!RandomizedTime::matches("2026-12-24T18:30:00"));
        assert!(!RandomizedTime::matches("PT00:10:00A00:05:00"));
    }

    #[test]
    fn randomized_rejects_out_of_range_jitter() {
        assert!(
            "2026-12-24T18:30:00A24:00:00"
                .parse::<RandomizedTime>()
                .is_err()
        );
    }
}
