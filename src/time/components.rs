// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Time-of-day and calendar-date value objects.
//!
//! These are the fixed-field building blocks of the schedule time patterns.
//! Both types validate every field at construction time and render to the
//! zero-padded canonical form the bridge expects (`HH:MM:SS` and
//! `YYYY-MM-DD`).

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveTime, Timelike, Utc};
use regex_lite::Regex;

use crate::error::{Result, ValidationError};

static TIME_OF_DAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2}):(\d{2}):(\d{2})$").expect("time-of-day regex is valid")
});

static CALENDAR_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("calendar-date regex is valid")
});

/// Month names, indexed by 1-based month number minus one.
///
/// Kept for display and name lookup only; the month itself is stored as a
/// plain 1-based number.
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// =============================================================================
// TimeOfDay
// =============================================================================

/// A wall-clock time with hours, minutes, and seconds.
///
/// Valid ranges: hours 0-23, minutes 0-59, seconds 0-59. The canonical
/// string form is zero-padded `HH:MM:SS`.
///
/// # Examples
///
/// ```
/// use huer_lib::time::TimeOfDay;
///
/// let time = TimeOfDay::new(6, 0, 0).unwrap();
/// assert_eq!(time.to_string(), "06:00:00");
///
/// // Parse from the canonical form
/// let parsed: TimeOfDay = "23:59:59".parse().unwrap();
/// assert_eq!(parsed.hours(), 23);
///
/// // Out-of-range fields are rejected
/// assert!(TimeOfDay::new(24, 0, 0).is_err());
/// assert!(TimeOfDay::new(0, 60, 0).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
pub struct TimeOfDay {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl TimeOfDay {
    /// The midnight default, `00:00:00`.
    pub const MIDNIGHT: Self = Self {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Creates a new time of day.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` if hours exceed 23 or minutes
    /// or seconds exceed 59.
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Result<Self> {
        check_field("hours", hours, 23)?;
        check_field("minutes", minutes, 59)?;
        check_field("seconds", seconds, 59)?;
        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }

    /// Creates a time of day from a `chrono` wall-clock time.
    ///
    /// Sub-second precision is discarded.
    #[must_use]
    pub fn from_naive_time(time: NaiveTime) -> Self {
        // chrono guarantees hour <= 23 and minute/second <= 59
        #[allow(clippy::cast_possible_truncation)]
        Self {
            hours: time.hour() as u8,
            minutes: time.minute() as u8,
            seconds: time.second() as u8,
        }
    }

    /// Returns the current UTC wall-clock time.
    #[must_use]
    pub fn now_utc() -> Self {
        Self::from_naive_time(Utc::now().time())
    }

    /// Returns the hours field (0-23).
    #[must_use]
    pub const fn hours(&self) -> u8 {
        self.hours
    }

    /// Returns the minutes field (0-59).
    #[must_use]
    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Returns the seconds field (0-59).
    #[must_use]
    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Returns a copy with the hours field replaced.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` if `hours` exceeds 23. The
    /// original value is unchanged on failure.
    pub fn with_hours(self, hours: u8) -> Result<Self> {
        check_field("hours", hours, 23)?;
        Ok(Self { hours, ..self })
    }

    /// Returns a copy with the minutes field replaced.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` if `minutes` exceeds 59.
    pub fn with_minutes(self, minutes: u8) -> Result<Self> {
        check_field("minutes", minutes, 59)?;
        Ok(Self { minutes, ..self })
    }

    /// Returns a copy with the seconds field replaced.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` if `seconds` exceeds 59.
    pub fn with_seconds(self, seconds: u8) -> Result<Self> {
        check_field("seconds", seconds, 59)?;
        Ok(Self { seconds, ..self })
    }

    /// Builds a time of day from three already-matched digit groups.
    pub(crate) fn from_captures(hours: &str, minutes: &str, seconds: &str) -> Result<Self> {
        Self::new(
            parse_digits("hours", hours)?,
            parse_digits("minutes", minutes)?,
            parse_digits("seconds", seconds)?,
        )
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        let caps = TIME_OF_DAY_RE
            .captures(s)
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "time".to_string(),
                expected: "HH:MM:SS",
                value: s.to_string(),
            })?;
        Self::from_captures(&caps[1], &caps[2], &caps[3])
    }
}

// =============================================================================
// CalendarDate
// =============================================================================

/// A calendar date with year, month, and day.
///
/// Valid ranges: year 1900-3000, month 1-12, day 0-31. The day field is
/// deliberately permissive: day 31 is accepted in every month (and day 0 is
/// accepted at all), matching the bridge's own behavior. No month-length
/// check is performed.
///
/// The canonical string form is zero-padded `YYYY-MM-DD`. The default value
/// is the current UTC date.
///
/// # Examples
///
/// ```
/// use huer_lib::time::CalendarDate;
///
/// let date = CalendarDate::new(2026, 2, 14).unwrap();
/// assert_eq!(date.to_string(), "2026-02-14");
/// assert_eq!(date.month_name(), "February");
///
/// // Day 31 is accepted even in February
/// assert!(CalendarDate::new(2026, 2, 31).is_ok());
///
/// // Months can be resolved from names
/// assert_eq!(CalendarDate::month_from_name("september").unwrap(), 9);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct CalendarDate {
    year: u16,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Minimum accepted year.
    pub const YEAR_MIN: u16 = 1900;

    /// Maximum accepted year.
    pub const YEAR_MAX: u16 = 3000;

    /// Creates a new calendar date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` if the year is outside
    /// [1900, 3000], the month outside [1, 12], or the day outside [0, 31].
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(Self::YEAR_MIN..=Self::YEAR_MAX).contains(&year) {
            return Err(ValidationError::OutOfRange {
                field: "year".to_string(),
                min: f64::from(Self::YEAR_MIN),
                max: f64::from(Self::YEAR_MAX),
                actual: f64::from(year),
            });
        }
        if !(1..=12).contains(&month) {
            return Err(ValidationError::OutOfRange {
                field: "month".to_string(),
                min: 1.0,
                max: 12.0,
                actual: f64::from(month),
            });
        }
        check_field("day", day, 31)?;
        Ok(Self { year, month, day })
    }

    /// Returns the current UTC date.
    #[must_use]
    pub fn today_utc() -> Self {
        let today = Utc::now().date_naive();
        // The host clock is assumed to lie inside the bridge's year window.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Self {
            year: today.year().clamp(i32::from(Self::YEAR_MIN), i32::from(Self::YEAR_MAX)) as u16,
            month: today.month() as u8,
            day: today.day() as u8,
        }
    }

    /// Resolves a month name to its 1-based number.
    ///
    /// The comparison is case-insensitive and requires the full English
    /// month name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidChoice` if the name is not one of
    /// the twelve month names.
    pub fn month_from_name(name: &str) -> Result<u8> {
        MONTH_NAMES
            .iter()
            .position(|m| m.eq_ignore_ascii_case(name))
            .map(|idx| {
                // Position over a 12-entry table always fits in u8
                #[allow(clippy::cast_possible_truncation)]
                let month = idx as u8 + 1;
                month
            })
            .ok_or_else(|| ValidationError::InvalidChoice {
                field: "month".to_string(),
                value: name.to_string(),
                allowed: MONTH_NAMES.join(", "),
            })
    }

    /// Returns the year field (1900-3000).
    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the 1-based month number (1-12).
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the English name of the month.
    #[must_use]
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[usize::from(self.month) - 1]
    }

    /// Returns the day field (0-31).
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns a copy with the year replaced.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` if `year` is outside
    /// [1900, 3000]. The original value is unchanged on failure.
    pub fn with_year(self, year: u16) -> Result<Self> {
        Self::new(year, self.month, self.day)
    }

    /// Returns a copy with the month replaced.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` if `month` is outside [1, 12].
    pub fn with_month(self, month: u8) -> Result<Self> {
        Self::new(self.year, month, self.day)
    }

    /// Returns a copy with the month replaced, resolved from its name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidChoice` if the name is not a month.
    pub fn with_month_name(self, name: &str) -> Result<Self> {
        Self::new(self.year, Self::month_from_name(name)?, self.day)
    }

    /// Returns a copy with the day replaced.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` if `day` exceeds 31.
    pub fn with_day(self, day: u8) -> Result<Self> {
        Self::new(self.year, self.month, day)
    }

    /// Builds a calendar date from three already-matched digit groups.
    pub(crate) fn from_captures(year: &str, month: &str, day: &str) -> Result<Self> {
        let year: u16 = year
            .parse()
            .map_err(|_| ValidationError::InvalidFormat {
                field: "year".to_string(),
                expected: "YYYY",
                value: year.to_string(),
            })?;
        Self::new(year, parse_digits("month", month)?, parse_digits("day", day)?)
    }
}

impl Default for CalendarDate {
    fn default() -> Self {
        Self::today_utc()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        let caps = CALENDAR_DATE_RE
            .captures(s)
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "date".to_string(),
                expected: "YYYY-MM-DD",
                value: s.to_string(),
            })?;
        Self::from_captures(&caps[1], &caps[2], &caps[3])
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Checks a zero-based field against its inclusive maximum.
fn check_field(field: &'static str, value: u8, max: u8) -> Result<()> {
    if value > max {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0.0,
            max: f64::from(max),
            actual: f64::from(value),
        });
    }
    Ok(())
}

/// Parses a short digit group into a `u8`.
fn parse_digits(field: &'static str, raw: &str) -> Result<u8> {
    raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        expected: "a two-digit number",
        value: raw.to_string(),
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // TimeOfDay Tests
    // -------------------------------------------------------------------------

    #[test]
    fn time_of_day_valid_values() {
        for (h, m, s) in [(0, 0, 0), (23, 59, 59), (6, 30, 15)] {
            let time = TimeOfDay::new(h, m, s).unwrap();
            assert_eq!(time.hours(), h);
            assert_eq!(time.minutes(), m);
            assert_eq!(time.seconds(), s);
        }
    }

    #[test]
    fn time_of_day_invalid_values() {
        assert!(TimeOfDay::new(24, 0, 0).is_err());
        assert!(TimeOfDay::new(0, 60, 0).is_err());
        assert!(TimeOfDay::new(0, 0, 60).is_err());
    }

    #[test]
    fn time_of_day_error_names_field() {
        let err = TimeOfDay::new(99, 0, 0).unwrap_err();
        assert!(err.to_string().contains("hours"));
        assert!(err.to_string().contains("99"));
        assert!(err.to_string().contains("23"));
    }

    #[test]
    fn time_of_day_display_zero_pads() {
        let time = TimeOfDay::new(6, 5, 4).unwrap();
        assert_eq!(time.to_string(), "06:05:04");
    }

    #[test]
    fn time_of_day_default_is_midnight() {
        assert_eq!(TimeOfDay::default(), TimeOfDay::MIDNIGHT);
        assert_eq!(TimeOfDay::default().to_string(), "00:00:00");
    }

    #[test]
    fn time_of_day_from_str_round_trip() {
        let time: TimeOfDay = "12:34:56".parse().unwrap();
        assert_eq!(time.to_string(), "12:34:56");
    }

    #[test]
    fn time_of_day_from_str_rejects_bad_shapes() {
        assert!("1:02:03".parse::<TimeOfDay>().is_err());
        assert!("12:34".parse::<TimeOfDay>().is_err());
        assert!("12-34-56".parse::<TimeOfDay>().is_err());
        assert!("".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn time_of_day_from_str_rejects_out_of_range() {
        assert!("24:00:00".parse::<TimeOfDay>().is_err());
        assert!("00:60:00".parse::<TimeOfDay>().is_err());
        assert!("00:00:60".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn time_of_day_with_field_mutators() {
        let time = TimeOfDay::MIDNIGHT
            .with_hours(7)
            .unwrap()
            .with_minutes(30)
            .unwrap()
            .with_seconds(15)
            .unwrap();
        assert_eq!(time.to_string(), "07:30:15");
    }

    #[test]
    fn time_of_day_mutator_failure_leaves_value_unchanged() {
        let time = TimeOfDay::new(7, 0, 0).unwrap();
        assert!(time.with_hours(24).is_err());
        assert_eq!(time.hours(), 7);
    }

    #[test]
    fn time_of_day_from_naive_time() {
        let naive = NaiveTime::from_hms_opt(14, 25, 36).unwrap();
        let time = TimeOfDay::from_naive_time(naive);
        assert_eq!(time.to_string(), "14:25:36");
    }

    #[test]
    fn time_of_day_now_utc_is_valid() {
        let now = TimeOfDay::now_utc();
        assert!(now.hours() <= 23);
        assert!(now.minutes() <= 59);
        assert!(now.seconds() <= 59);
    }

    #[test]
    fn time_of_day_ordering() {
        let early: TimeOfDay = "06:00:00".parse().unwrap();
        let late: TimeOfDay = "18:00:00".parse().unwrap();
        assert!(early < late);
    }

    // -------------------------------------------------------------------------
    // CalendarDate Tests
    // -------------------------------------------------------------------------

    #[test]
    fn calendar_date_valid_values() {
        let date = CalendarDate::new(2026, 8, 29).unwrap();
        assert_eq!(date.year(), 2026);
        assert_eq!(date.month(), 8);
        assert_eq!(date.day(), 29);
    }

    #[test]
    fn calendar_date_year_bounds() {
        assert!(CalendarDate::new(1900, 1, 1).is_ok());
        assert!(CalendarDate::new(3000, 12, 31).is_ok());
        assert!(CalendarDate::new(1899, 1, 1).is_err());
        assert!(CalendarDate::new(3001, 1, 1).is_err());
    }

    #[test]
    fn calendar_date_month_bounds() {
        assert!(CalendarDate::new(2026, 0, 1).is_err());
        assert!(CalendarDate::new(2026, 13, 1).is_err());
    }

    #[test]
    fn calendar_date_day_is_permissive() {
        // No month-length validation: day 31 is valid in every month,
        // and day 0 is accepted as well.
        assert!(CalendarDate::new(2026, 2, 31).is_ok());
        assert!(CalendarDate::new(2026, 4, 31).is_ok());
        assert!(CalendarDate::new(2026, 1, 0).is_ok());
        assert!(CalendarDate::new(2026, 1, 32).is_err());
    }

    #[test]
    fn calendar_date_display_zero_pads() {
        let date = CalendarDate::new(1905, 3, 4).unwrap();
        assert_eq!(date.to_string(), "1905-03-04");
    }

    #[test]
    fn calendar_date_from_str_round_trip() {
        let date: CalendarDate = "2026-08-29".parse().unwrap();
        assert_eq!(date.to_string(), "2026-08-29");
    }

    #[test]
    fn calendar_date_from_str_rejects_bad_shapes() {
        assert!("2026-8-29".parse::<CalendarDate>().is_err());
        assert!("26-08-29".parse::<CalendarDate>().is_err());
        assert!("2026/08/29".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn calendar_date_month_names() {
        assert_eq!(CalendarDate::month_from_name("January").unwrap(), 1);
        assert_eq!(CalendarDate::month_from_name("december").unwrap(), 12);
        assert_eq!(CalendarDate::month_from_name("SEPTEMBER").unwrap(), 9);
        assert!(CalendarDate::month_from_name("Sept").is_err());
        assert!(CalendarDate::month_from_name("").is_err());
    }

    #[test]
    fn calendar_date_month_name_display() {
        let date = CalendarDate::new(2026, 7, 1).unwrap();
        assert_eq!(date.month_name(), "July");
    }

    #[test]
    fn calendar_date_with_field_mutators() {
        let date = CalendarDate::new(2026, 1, 1)
            .unwrap()
            .with_year(2027)
            .unwrap()
            .with_month(6)
            .unwrap()
            .with_day(15)
            .unwrap();
        assert_eq!(date.to_string(), "2027-06-15");
    }

    #[test]
    fn calendar_date_with_month_name() {
        let date = CalendarDate::new(2026, 1, 1)
            .unwrap()
            .with_month_name("October")
            .unwrap();
        assert_eq!(date.month(), 10);
    }

    #[test]
    fn calendar_date_mutator_failure_leaves_value_unchanged() {
        let date = CalendarDate::new(2026, 5, 10).unwrap();
        assert!(date.with_month(13).is_err());
        assert_eq!(date.month(), 5);
    }

    #[test]
    fn calendar_date_default_is_today() {
        let today = CalendarDate::default();
        assert!(today.year() >= CalendarDate::YEAR_MIN);
        assert!((1..=12).contains(&today.month()));
    }
}
