// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `Huer` Lib - A Rust library for Philips Hue bridge schedules and state
//! validation.
//!
//! This library provides the value layer of a Hue bridge client: the nine
//! schedule time-pattern grammars the bridge accepts in `localtime`, and a
//! declarative validation framework that coerces loosely-typed command
//! parameters into the canonical JSON the bridge expects.
//!
//! # Supported Features
//!
//! - **Time patterns**: Build, parse and classify all nine grammar
//!   variants, from absolute timestamps to randomized recurring timers
//! - **Value validation**: Booleans, bounded integers and floats, choice
//!   lists, strings, lists and field-projecting objects
//! - **State payloads**: Fluent light-state and group-action builders that
//!   validate whole payloads in one pass
//!
//! # Quick Start
//!
//! ## Classifying a Schedule Time
//!
//! ```
//! use huer_lib::time::{PatternKind, classify, is_recurring};
//!
//! let pattern = classify("W064/T06:00:00")?;
//! assert_eq!(pattern.kind(), PatternKind::Recurring);
//! assert_eq!(pattern.to_string(), "W064/T06:00:00");
//! assert!(is_recurring("W064/T06:00:00")?);
//! # Ok::<(), huer_lib::ValidationError>(())
//! ```
//!
//! ## Building a Pattern
//!
//! ```
//! use huer_lib::time::{RecurringTime, TimeOfDay, WeekdayMask};
//!
//! let wake_up = RecurringTime::new(
//!     WeekdayMask::WEEKDAY,
//!     TimeOfDay::new(6, 30, 0)?,
//! );
//! assert_eq!(wake_up.to_string(), "W124/T06:30:00");
//! # Ok::<(), huer_lib::ValidationError>(())
//! ```
//!
//! ## Validating a Light State
//!
//! ```
//! use huer_lib::state::LightState;
//!
//! let payload = LightState::new()
//!     .on(true)
//!     .brightness(200)
//!     .xy(0.4, 0.3)
//!     .build()?;
//! assert_eq!(payload["bri"], 200);
//!
//! // Out-of-range values fail with the field and the bound.
//! let err = LightState::new().brightness(255).build().unwrap_err();
//! assert!(err.to_string().contains("254"));
//! # Ok::<(), huer_lib::ValidationError>(())
//! ```

pub mod error;
pub mod state;
pub mod time;
pub mod types;

pub use error::{Result, ValidationError};
pub use state::{GroupState, LightState};
pub use time::{
    AbsoluteTime, CalendarDate, IntervalTime, PatternKind, RandomizedTime, RandomizedTimer,
    RecurringRandomizedTime, RecurringRandomizedTimer, RecurringTime, RecurringTimer, Reoccurs,
    TimeOfDay, TimePattern, Timer, WeekdayMask,
};
pub use types::{
    BooleanType, BridgeType, ChoiceType, FloatType, IntWidth, ListType, ObjectType, RangedIntType,
    StringType, TimePatternType,
};
