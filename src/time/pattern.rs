// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Time-pattern classification.
//!
//! [`TimePattern`] is the tagged union over the nine grammar variants, and
//! [`classify`] turns an arbitrary string into the right variant. The
//! variants' `matches` predicates are not globally unambiguous on their
//! own: a recurring timer string would be mis-read by a plain timer parser
//! if the repeat marker were ignored. Correctness therefore depends on
//! trial order, which is kept as an explicit table here, most qualified
//! grammar first.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ValidationError};
use crate::time::{
    AbsoluteTime, IntervalTime, RandomizedTime, RandomizedTimer, RecurringRandomizedTime,
    RecurringRandomizedTimer, RecurringTime, RecurringTimer, Timer,
};

/// The nine time-pattern grammar kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    /// `YYYY-MM-DDTHH:MM:SS`
    Absolute,
    /// `YYYY-MM-DDTHH:MM:SSAHH:MM:SS`
    Randomized,
    /// `WWW/THH:MM:SS`
    Recurring,
    /// `WWW/THH:MM:SSAHH:MM:SS`
    RecurringRandomized,
    /// `WWW/THH:MM:SS/THH:MM:SS`
    Interval,
    /// `PTHH:MM:SS`
    Timer,
    /// `R{RR}/PTHH:MM:SS`
    RecurringTimer,
    /// `PTHH:MM:SSAHH:MM:SS`
    RandomizedTimer,
    /// `R{RR}/PTHH:MM:SSAHH:MM:SS`
    RecurringRandomizedTimer,
}

/// A schedule time pattern in any of the nine bridge grammars.
///
/// This is the value read from and written to the `time`/`localtime` field
/// of a schedule resource. Use [`classify`] (or `FromStr`) to parse an
/// arbitrary string and `Display` to obtain the canonical wire form.
///
/// Serde serializes a `TimePattern` as its canonical grammar string, which
/// is the representation the bridge exchanges.
///
/// # Examples
///
/// ```
/// use huer_lib::time::{classify, TimePattern};
///
/// let pattern = classify("PT00:10:00").unwrap();
/// assert!(matches!(pattern, TimePattern::Timer(_)));
/// assert_eq!(pattern.to_string(), "PT00:10:00");
/// assert!(!pattern.is_recurring());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimePattern {
    /// One-shot at an exact date and time.
    Absolute(AbsoluteTime),
    /// One-shot with a jitter window.
    Randomized(RandomizedTime),
    /// Fires on matching weekdays, forever.
    Recurring(RecurringTime),
    /// Recurring with a jitter window.
    RecurringRandomized(RecurringRandomizedTime),
    /// Active window between two times on matching weekdays.
    Interval(IntervalTime),
    /// Single countdown from activation.
    Timer(Timer),
    /// Repeating countdown.
    RecurringTimer(RecurringTimer),
    /// Single countdown with a jitter window.
    RandomizedTimer(RandomizedTimer),
    /// Repeating countdown with a jitter window.
    RecurringRandomizedTimer(RecurringRandomizedTimer),
}

impl TimePattern {
    /// Returns the grammar kind of this pattern.
    #[must_use]
    pub const fn kind(&self) -> PatternKind {
        match self {
            Self::Absolute(_) => PatternKind::Absolute,
            Self::Randomized(_) => PatternKind::Randomized,
            Self::Recurring(_) => PatternKind::Recurring,
            Self::RecurringRandomized(_) => PatternKind::RecurringRandomized,
            Self::Interval(_) => PatternKind::Interval,
            Self::Timer(_) => PatternKind::Timer,
            Self::RecurringTimer(_) => PatternKind::RecurringTimer,
            Self::RandomizedTimer(_) => PatternKind::RandomizedTimer,
            Self::RecurringRandomizedTimer(_) => PatternKind::RecurringRandomizedTimer,
        }
    }

    /// Returns `true` if this pattern repeats indefinitely.
    ///
    /// Weekday-based recurring patterns always repeat; recurring timers
    /// only when their repeat count is unlimited. A one-shot pattern, an
    /// interval window, and a bounded timer are not recurring in this
    /// sense.
    #[must_use]
    pub fn is_recurring(&self) -> bool {
        match self {
            Self::Recurring(_) | Self::RecurringRandomized(_) => true,
            Self::RecurringTimer(t) => t.reoccurs().is_unlimited(),
            Self::RecurringRandomizedTimer(t) => t.reoccurs().is_unlimited(),
            _ => false,
        }
    }
}

impl fmt::Display for TimePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute(v) => v.fmt(f),
            Self::Randomized(v) => v.fmt(f),
            Self::Recurring(v) => v.fmt(f),
            Self::RecurringRandomized(v) => v.fmt(f),
            Self::Interval(v) => v.fmt(f),
            Self::Timer(v) => v.fmt(f),
            Self::RecurringTimer(v) => v.fmt(f),
            Self::RandomizedTimer(v) => v.fmt(f),
            Self::RecurringRandomizedTimer(v) => v.fmt(f),
        }
    }
}

impl FromStr for TimePattern {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        classify(s)
    }
}

impl serde::Serialize for TimePattern {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for TimePattern {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        classify(&s).map_err(serde::de::Error::custom)
    }
}

macro_rules! wrapping_from {
    ($variant:ident, $inner:ty) => {
        impl From<$inner> for TimePattern {
            fn from(value: $inner) -> Self {
                Self::$variant(value)
            }
        }
    };
}

wrapping_from!(Absolute, AbsoluteTime);
wrapping_from!(Randomized, RandomizedTime);
wrapping_from!(Recurring, RecurringTime);
wrapping_from!(RecurringRandomized, RecurringRandomizedTime);
wrapping_from!(Interval, IntervalTime);
wrapping_from!(Timer, Timer);
wrapping_from!(RecurringTimer, RecurringTimer);
wrapping_from!(RandomizedTimer, RandomizedTimer);
wrapping_from!(RecurringRandomizedTimer, RecurringRandomizedTimer);

// =============================================================================
// Classification
// =============================================================================

/// One trial entry of the classifier table.
struct Classifier {
    kind: PatternKind,
    matches: fn(&str) -> bool,
    parse: fn(&str) -> Result<TimePattern>,
}

/// Trial order for classification, most qualified grammar first.
///
/// Grammars carrying repeat or jitter markers must be tried before their
/// plainer specializations.
static CLASSIFIERS: [Classifier; 9] = [
    Classifier {
        kind: PatternKind::RecurringRandomizedTimer,
        matches: RecurringRandomizedTimer::matches,
        parse: |s| s.parse::<RecurringRandomizedTimer>().map(TimePattern::from),
    },
    Classifier {
        kind: PatternKind::RecurringTimer,
        matches: RecurringTimer::matches,
        parse: |s| s.parse::<RecurringTimer>().map(TimePattern::from),
    },
    Classifier {
        kind: PatternKind::RandomizedTimer,
        matches: RandomizedTimer::matches,
        parse: |s| s.parse::<RandomizedTimer>().map(TimePattern::from),
    },
    Classifier {
        kind: PatternKind::Timer,
        matches: Timer::matches,
        parse: |s| s.parse::<Timer>().map(TimePattern::from),
    },
    Classifier {
        kind: PatternKind::Interval,
        matches: IntervalTime::matches,
        parse: |s| s.parse::<IntervalTime>().map(TimePattern::from),
    },
    Classifier {
        kind: PatternKind::RecurringRandomized,
        matches: RecurringRandomizedTime::matches,
        parse: |s| s.parse::<RecurringRandomizedTime>().map(TimePattern::from),
    },
    Classifier {
        kind: PatternKind::Recurring,
        matches: RecurringTime::matches,
        parse: |s| s.parse::<RecurringTime>().map(TimePattern::from),
    },
    Classifier {
        kind: PatternKind::Randomized,
        matches: RandomizedTime::matches,
        parse: |s| s.parse::<RandomizedTime>().map(TimePattern::from),
    },
    Classifier {
        kind: PatternKind::Absolute,
        matches: AbsoluteTime::matches,
        parse: |s| s.parse::<AbsoluteTime>().map(TimePattern::from),
    },
];

/// Classifies a string into the time-pattern variant it encodes.
///
/// Each grammar is tried in the fixed precedence order of the classifier
/// table; the first match wins.
///
/// # Errors
///
/// Returns `ValidationError::UnknownTimePattern` if no grammar matches,
/// or the variant's field error if the shape matches but a field is out
/// of range (e.g. `W000/...`).
///
/// # Examples
///
/// ```
/// use huer_lib::time::{classify, PatternKind};
///
/// assert_eq!(classify("PT00:10:00").unwrap().kind(), PatternKind::Timer);
/// assert_eq!(
///     classify("R05/PT00:00:30").unwrap().kind(),
///     PatternKind::RecurringTimer,
/// );
/// assert!(classify("tomorrow").is_err());
/// ```
pub fn classify(s: &str) -> Result<TimePattern> {
    for classifier in &CLASSIFIERS {
        if (classifier.matches)(s) {
            tracing::trace!(kind = ?classifier.kind, value = %s, "time pattern matched");
            return (classifier.parse)(s);
        }
    }
    Err(ValidationError::UnknownTimePattern {
        value: s.to_string(),
    })
}

/// Returns `true` if any of the nine grammars matches the string.
///
/// Note that a matching shape can still fail [`classify`] on a field
/// check, e.g. a weekday mask of zero.
#[must_use]
pub fn is_time_pattern(s: &str) -> bool {
    CLASSIFIERS.iter().any(|c| (c.matches)(s))
}

/// Classifies a string and reports whether it repeats indefinitely.
///
/// # Errors
///
/// Returns `ValidationError::UnknownTimePattern` if the string is not a
/// time pattern.
pub fn is_recurring(s: &str) -> Result<bool> {
    classify(s).map(|pattern| pattern.is_recurring())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{CalendarDate, Reoccurs, TimeOfDay, WeekdayMask};

    #[test]
    fn classifier_order_is_most_qualified_first() {
        let order: Vec<PatternKind> = CLASSIFIERS.iter().map(|c| c.kind).collect();
        assert_eq!(
            order,
            vec![
                PatternKind::RecurringRandomizedTimer,
                PatternKind::RecurringTimer,
                PatternKind::RandomizedTimer,
                PatternKind::Timer,
                PatternKind::Interval,
                PatternKind::RecurringRandomized,
                PatternKind::Recurring,
                PatternKind::Randomized,
                PatternKind::Absolute,
            ]
        );
    }

    #[test]
    fn classify_timer_scenario() {
        let pattern = classify("PT00:10:00").unwrap();
        assert_eq!(pattern.kind(), PatternKind::Timer);
        assert_eq!(pattern.to_string(), "PT00:10:00");
    }

    #[test]
    fn classify_recurring_timer_scenario() {
        let pattern = classify("R05/PT00:00:30").unwrap();
        let TimePattern::RecurringTimer(timer) = pattern else {
            panic!("expected a recurring timer, got {pattern:?}");
        };
        assert_eq!(timer.reoccurs().count(), 5);
        assert_eq!(pattern.to_string(), "R05/PT00:00:30");
    }

    #[test]
    fn classify_unlimited_recurring_timer_scenario() {
        let pattern = classify("R/PT00:00:30").unwrap();
        let TimePattern::RecurringTimer(timer) = pattern else {
            panic!("expected a recurring timer, got {pattern:?}");
        };
        assert!(timer.reoccurs().is_unlimited());
        assert_eq!(pattern.to_string(), "R/PT00:00:30");
    }

    #[test]
    fn classify_each_grammar() {
        let cases = [
            ("2026-12-24T18:30:00", PatternKind::Absolute),
            ("2026-12-24T18:30:00A00:15:00", PatternKind::Randomized),
            ("W064/T06:00:00", PatternKind::Recurring),
            ("W064/T06:00:00A00:30:00", PatternKind::RecurringRandomized),
            ("W127/T23:00:00/T06:00:00", PatternKind::Interval),
            ("PT00:10:00", PatternKind::Timer),
            ("R05/PT00:00:30", PatternKind::RecurringTimer),
            ("PT00:10:00A00:05:00", PatternKind::RandomizedTimer),
            (
                "R05/PT00:00:30A00:00:10",
                PatternKind::RecurringRandomizedTimer,
            ),
        ];
        for (input, expected) in cases {
            let pattern = classify(input).unwrap();
            assert_eq!(pattern.kind(), expected, "wrong kind for {input}");
            assert_eq!(pattern.to_string(), input, "no round trip for {input}");
        }
    }

    #[test]
    fn classify_rejects_non_patterns() {
        for input in ["", "tomorrow", "T06:00:00", "W064", "PT0:10:00", "06:00:00"] {
            let err = classify(input).unwrap_err();
            assert!(
                matches!(err, ValidationError::UnknownTimePattern { .. }),
                "unexpected error for {input}: {err}"
            );
        }
    }

    #[test]
    fn classify_reports_field_errors_on_matching_shapes() {
        // Shape matches the recurring grammar, mask is invalid
        let err = classify("W000/T06:00:00").unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }

    #[test]
    fn round_trip_through_classify_for_every_variant() {
        let patterns: Vec<TimePattern> = vec![
            AbsoluteTime::new(
                CalendarDate::new(2026, 1, 31).unwrap(),
                TimeOfDay::new(8, 15, 0).unwrap(),
            )
            .into(),
            RandomizedTime::new(
                CalendarDate::new(2026, 6, 1).unwrap(),
                TimeOfDay::new(20, 0, 0).unwrap(),
            )
            .with_random(TimeOfDay::new(0, 45, 0).unwrap())
            .into(),
            RecurringTime::new(WeekdayMask::MONDAY, TimeOfDay::new(6, 0, 0).unwrap()).into(),
            RecurringRandomizedTime::new(WeekdayMask::WEEKEND, TimeOfDay::new(9, 30, 0).unwrap())
                .with_random(TimeOfDay::new(0, 20, 0).unwrap())
                .into(),
            IntervalTime::new(
                WeekdayMask::ALL,
                TimeOfDay::new(23, 0, 0).unwrap(),
                TimeOfDay::new(6, 0, 0).unwrap(),
            )
            .into(),
            Timer::new(TimeOfDay::new(0, 10, 0).unwrap()).into(),
            RecurringTimer::new(Reoccurs::new(5).unwrap(), TimeOfDay::new(0, 0, 30).unwrap())
                .into(),
            RandomizedTimer::new(TimeOfDay::new(0, 30, 0).unwrap())
                .with_random(TimeOfDay::new(0, 5, 0).unwrap())
                .into(),
            RecurringRandomizedTimer::new(
                Reoccurs::UNLIMITED,
                TimeOfDay::new(1, 0, 0).unwrap(),
            )
            .with_random(TimeOfDay::new(0, 10, 0).unwrap())
            .into(),
        ];

        for pattern in patterns {
            let serialized = pattern.to_string();
            let reparsed = classify(&serialized).unwrap();
            assert_eq!(reparsed, pattern, "no round trip for {serialized}");
            assert_eq!(reparsed.to_string(), serialized);
        }
    }

    #[test]
    fn is_time_pattern_accepts_all_grammars() {
        assert!(is_time_pattern("2026-12-24T18:30:00"));
        assert!(is_time_pattern("W064/T06:00:00"));
        assert!(is_time_pattern("PT00:10:00"));
        assert!(is_time_pattern("R/PT00:00:30"));
        assert!(!is_time_pattern("not a pattern"));
        assert!(!is_time_pattern(""));
    }

    #[test]
    fn is_recurring_scenarios() {
        assert!(is_recurring("W127/T00:00:00").unwrap());
        assert!(!is_recurring("PT00:00:00").unwrap());
        assert!(is_recurring("W064/T06:00:00A00:30:00").unwrap());
        // Unlimited timers recur, bounded ones do not
        assert!(is_recurring("R/PT00:00:30").unwrap());
        assert!(!is_recurring("R05/PT00:00:30").unwrap());
        assert!(is_recurring("R/PT00:00:30A00:00:10").unwrap());
        // One-shots and intervals never recur
        assert!(!is_recurring("2026-12-24T18:30:00").unwrap());
        assert!(!is_recurring("W127/T23:00:00/T06:00:00").unwrap());
        assert!(is_recurring("nonsense").is_err());
    }

    #[test]
    fn serde_round_trip_as_wire_string() {
        let pattern = classify("W064/T06:00:00").unwrap();
        let json = serde_json::to_string(&pattern).unwrap();
        assert_eq!(json, "\"W064/T06:00:00\"");

        let back: TimePattern = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pattern);
    }

    #[test]
    fn serde_rejects_invalid_wire_string() {
        let result: std::result::Result<TimePattern, _> = serde_json::from_str("\"glorp\"");
        assert!(result.is_err());
    }
}
