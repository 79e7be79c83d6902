// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Schedule time patterns for the Hue bridge.
//!
//! The bridge encodes when a schedule fires as a compact string in one of
//! nine grammars. This module provides a value type per grammar, the
//! building blocks they share, and a dispatcher that classifies arbitrary
//! strings.
//!
//! # Grammars
//!
//! | Type | Form | Meaning |
//! |------|------|---------|
//! | [`AbsoluteTime`] | `YYYY-MM-DDTHH:MM:SS` | one-shot at date+time |
//! | [`RandomizedTime`] | `YYYY-MM-DDTHH:MM:SSAHH:MM:SS` | one-shot + jitter |
//! | [`RecurringTime`] | `WWW/THH:MM:SS` | matching weekdays, forever |
//! | [`RecurringRandomizedTime`] | `WWW/THH:MM:SSAHH:MM:SS` | recurring + jitter |
//! | [`IntervalTime`] | `WWW/THH:MM:SS/THH:MM:SS` | active window on weekdays |
//! | [`Timer`] | `PTHH:MM:SS` | single countdown |
//! | [`RecurringTimer`] | `R{RR}/PTHH:MM:SS` | repeating countdown |
//! | [`RandomizedTimer`] | `PTHH:MM:SSAHH:MM:SS` | countdown + jitter |
//! | [`RecurringRandomizedTimer`] | `R{RR}/PTHH:MM:SSAHH:MM:SS` | repeating countdown + jitter |
//!
//! # Examples
//!
//! ```
//! use huer_lib::time::{classify, RecurringTime, TimeOfDay, TimePattern, WeekdayMask};
//!
//! // Build a pattern and serialize it for the bridge
//! let wake_up = RecurringTime::new(
//!     WeekdayMask::WEEKDAY,
//!     TimeOfDay::new(6, 30, 0).unwrap(),
//! );
//! assert_eq!(wake_up.to_string(), "W124/T06:30:00");
//!
//! // Classify a string coming back from the bridge
//! let pattern = classify("W124/T06:30:00").unwrap();
//! assert_eq!(pattern, TimePattern::Recurring(wake_up));
//! ```

mod absolute;
mod components;
mod pattern;
mod recurrence;
mod recurring;
mod timer;

pub use absolute::{AbsoluteTime, RandomizedTime};
pub use components::{CalendarDate, TimeOfDay};
pub use pattern::{PatternKind, TimePattern, classify, is_recurring, is_time_pattern};
pub use recurrence::{Reoccurs, WeekdayMask};
pub use recurring::{IntervalTime, RecurringRandomizedTime, RecurringTime};
pub use timer::{RandomizedTimer, RecurringRandomizedTimer, RecurringTimer, Timer};
