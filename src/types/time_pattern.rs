// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Schedule time-pattern descriptor.

use serde_json::Value;

use super::{BridgeType, TypeSpec, display_value};
use crate::error::{Result, ValidationError};
use crate::time::{TimePattern, classify};

/// A parameter holding a schedule time-pattern string.
///
/// Raw input must be a string matching one of the bridge's time-pattern
/// grammars; it is classified and re-emitted in canonical zero-padded
/// form. An already-built [`TimePattern`] can be supplied through
/// [`from_pattern`](Self::from_pattern).
///
/// # Examples
///
/// ```
/// use huer_lib::types::{BridgeType, TimePatternType};
/// use serde_json::json;
///
/// let localtime = TimePatternType::new("localtime").required();
/// assert_eq!(
///     localtime.get_value(Some(&json!("W127/T06:30:00"))).unwrap(),
///     Some(json!("W127/T06:30:00"))
/// );
/// assert!(localtime.get_value(Some(&json!("tomorrow"))).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct TimePatternType {
    spec: TypeSpec,
}

impl TimePatternType {
    /// Creates an optional time-pattern parameter.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            spec: TypeSpec::new(name),
        }
    }

    /// Marks the parameter as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.spec.require();
        self
    }

    /// Sets the pattern string used when input is absent. The default goes
    /// through the same classification as explicit input.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.spec.set_default(Value::String(default.into()));
        self
    }

    /// Renders an already-built pattern as the canonical payload value.
    #[must_use]
    pub fn from_pattern(pattern: &TimePattern) -> Value {
        Value::String(pattern.to_string())
    }
}

impl BridgeType for TimePatternType {
    fn name(&self) -> &str {
        self.spec.name()
    }

    fn is_optional(&self) -> bool {
        self.spec.is_optional()
    }

    fn default_value(&self) -> Option<&Value> {
        self.spec.default_value()
    }

    fn coerce(&self, raw: &Value) -> Result<Value> {
        let Value::String(text) = raw else {
            return Err(ValidationError::UnexpectedType {
                field: self.name().to_string(),
                expected: "a time pattern string",
                value: display_value(raw),
            });
        };
        let pattern = classify(text)?;
        Ok(Value::String(pattern.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{Timer, TimeOfDay};
    use serde_json::json;

    #[test]
    fn valid_patterns_come_back_canonical() {
        let localtime = TimePatternType::new("localtime");
        // Single-digit recurrence count is zero-padded on the way out.
        assert_eq!(
            localtime.get_value(Some(&json!("R5/PT00:00:30"))).unwrap(),
            Some(json!("R05/PT00:00:30"))
        );
    }

    #[test]
    fn unknown_grammars_are_rejected() {
        let localtime = TimePatternType::new("localtime");
        let err = localtime.get_value(Some(&json!("sunset"))).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownTimePattern { .. }));
    }

    #[test]
    fn non_string_input_is_rejected() {
        let localtime = TimePatternType::new("localtime");
        assert!(matches!(
            localtime.get_value(Some(&json!(63000))).unwrap_err(),
            ValidationError::UnexpectedType { .. }
        ));
    }

    #[test]
    fn built_patterns_render_directly() {
        let timer = Timer::new(TimeOfDay::new(0, 5, 0).unwrap());
        assert_eq!(
            TimePatternType::from_pattern(&timer.into()),
            json!("PT00:05:00")
        );
    }

    #[test]
    fn default_pattern_resolves_when_absent() {
        let localtime = TimePatternType::new("localtime").with_default("W127/T00:00:00");
        assert_eq!(
            localtime.get_value(None).unwrap(),
            Some(json!("W127/T00:00:00"))
        );
    }
}
