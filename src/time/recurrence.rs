// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Recurrence fields for schedule time patterns.
//!
//! [`WeekdayMask`] selects the days a recurring pattern fires on, as the
//! 7-bit set the bridge encodes after the `W` marker. [`Reoccurs`] is the
//! repeat count of a recurring timer, where zero means unlimited.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use crate::error::{Result, ValidationError};

// =============================================================================
// WeekdayMask
// =============================================================================

/// A 7-bit day-of-week set, one bit per day.
///
/// Monday is the highest bit (64) and Sunday the lowest (1). The mask is
/// rendered as a 3-digit zero-padded number in the recurring grammars
/// (e.g. `W064` for Monday only).
///
/// Invariant: `1 <= mask <= 127`. An empty mask is rejected because a
/// recurring pattern that fires on no day is meaningless to the bridge.
///
/// # Examples
///
/// ```
/// use huer_lib::time::WeekdayMask;
///
/// // Compose days with bitwise OR
/// let mon_wed_fri = WeekdayMask::MONDAY | WeekdayMask::WEDNESDAY | WeekdayMask::FRIDAY;
/// assert_eq!(mon_wed_fri.value(), 84);
/// assert!(mon_wed_fri.contains(WeekdayMask::MONDAY));
/// assert!(!mon_wed_fri.contains(WeekdayMask::SUNDAY));
///
/// // Named shortcuts
/// assert_eq!(WeekdayMask::ALL.value(), 127);
/// assert_eq!(WeekdayMask::WEEKEND.value(), 3);
///
/// // Out-of-range masks are rejected
/// assert!(WeekdayMask::new(0).is_err());
/// assert!(WeekdayMask::new(128).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct WeekdayMask(u8);

impl WeekdayMask {
    /// Monday (bit 64).
    pub const MONDAY: Self = Self(64);
    /// Tuesday (bit 32).
    pub const TUESDAY: Self = Self(32);
    /// Wednesday (bit 16).
    pub const WEDNESDAY: Self = Self(16);
    /// Thursday (bit 8).
    pub const THURSDAY: Self = Self(8);
    /// Friday (bit 4).
    pub const FRIDAY: Self = Self(4);
    /// Saturday (bit 2).
    pub const SATURDAY: Self = Self(2);
    /// Sunday (bit 1).
    pub const SUNDAY: Self = Self(1);

    /// Every day of the week (127).
    pub const ALL: Self = Self(127);
    /// Monday through Friday (124).
    pub const WEEKDAY: Self = Self(124);
    /// Saturday and Sunday (3).
    pub const WEEKEND: Self = Self(3);

    /// Creates a mask from its raw bit value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` if `mask` is 0 or greater
    /// than 127.
    pub fn new(mask: u8) -> Result<Self> {
        if !(1..=127).contains(&mask) {
            return Err(ValidationError::OutOfRange {
                field: "weekdays".to_string(),
                min: 1.0,
                max: 127.0,
                actual: f64::from(mask),
            });
        }
        Ok(Self(mask))
    }

    /// Returns the raw bit value (1-127).
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns `true` if every day of `other` is set in this mask.
    #[must_use]
    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Default for WeekdayMask {
    fn default() -> Self {
        Self::ALL
    }
}

impl BitOr for WeekdayMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for WeekdayMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for WeekdayMask {
    /// Renders the 3-digit zero-padded form used inside the grammars.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

impl FromStr for WeekdayMask {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        let mask: u8 = s.parse().map_err(|_| ValidationError::InvalidFormat {
            field: "weekdays".to_string(),
            expected: "a 1-3 digit weekday mask",
            value: s.to_string(),
        })?;
        Self::new(mask)
    }
}

// =============================================================================
// Reoccurs
// =============================================================================

/// Repeat count of a recurring timer.
///
/// Zero means the timer repeats without limit and serializes to an empty
/// count field (`R/PT...`). Counts 1-99 serialize zero-padded to two
/// digits (`R05/PT...`).
///
/// # Examples
///
/// ```
/// use huer_lib::time::Reoccurs;
///
/// let five = Reoccurs::new(5).unwrap();
/// assert_eq!(five.to_string(), "05");
/// assert!(!five.is_unlimited());
///
/// assert_eq!(Reoccurs::UNLIMITED.to_string(), "");
/// assert!(Reoccurs::UNLIMITED.is_unlimited());
///
/// assert!(Reoccurs::new(100).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Reoccurs(u8);

impl Reoccurs {
    /// Maximum bounded repeat count.
    pub const MAX: u8 = 99;

    /// Repeats without limit; serializes to an empty count field.
    pub const UNLIMITED: Self = Self(0);

    /// Creates a repeat count.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` if `count` exceeds 99.
    pub fn new(count: u8) -> Result<Self> {
        if count > Self::MAX {
            return Err(ValidationError::OutOfRange {
                field: "reoccurs".to_string(),
                min: 0.0,
                max: f64::from(Self::MAX),
                actual: f64::from(count),
            });
        }
        Ok(Self(count))
    }

    /// Returns the raw count, where 0 means unlimited.
    #[must_use]
    pub const fn count(&self) -> u8 {
        self.0
    }

    /// Returns `true` if the timer repeats without limit.
    #[must_use]
    pub const fn is_unlimited(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Reoccurs {
    /// Renders the count field of the grammar: empty for unlimited,
    /// two zero-padded digits otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            Ok(())
        } else {
            write!(f, "{:02}", self.0)
        }
    }
}

impl FromStr for Reoccurs {
    type Err = ValidationError;

    /// Parses the count field of the grammar, where an empty string means
    /// unlimited.
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Ok(Self::UNLIMITED);
        }
        let count: u8 = s.parse().map_err(|_| ValidationError::InvalidFormat {
            field: "reoccurs".to_string(),
            expected: "an empty or 1-2 digit count",
            value: s.to_string(),
        })?;
        Self::new(count)
    }
}

// =============================================================================
// Tests
// =============================================================================
