// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scalar descriptors: booleans, strings and choice lists.

use serde_json::Value;

use super::{BridgeType, TypeSpec, display_value};
use crate::error::{Result, ValidationError};

// ============================================================================
// BooleanType
// ============================================================================

/// A boolean parameter coerced by truthiness.
///
/// Any raw value is accepted: `false`, `0`, the empty string and `null`
/// coerce to `false`, everything else to `true`. This mirrors how the
/// bridge itself interprets loosely-typed switch parameters.
///
/// # Examples
///
/// ```
/// use huer_lib::types::{BooleanType, BridgeType};
/// use serde_json::json;
///
/// let on = BooleanType::new("on");
/// assert_eq!(on.get_value(Some(&json!(1))).unwrap(), Some(json!(true)));
/// assert_eq!(on.get_value(Some(&json!(""))).unwrap(), Some(json!(false)));
/// ```
#[derive(Debug, Clone)]
pub struct BooleanType {
    spec: TypeSpec,
}

impl BooleanType {
    /// Creates an optional boolean parameter.
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

    /// Sets the value used when input is absent.
    #[must_use]
    pub fn with_default(mut self, default: bool) -> Self {
        self.spec.set_default(Value::Bool(default));
        self
    }
}

impl BridgeType for BooleanType {
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
        Ok(Value::Bool(truthy(raw)))
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// ============================================================================
// StringType
// ============================================================================

/// A string parameter with optional length bounds.
///
/// Numbers and booleans are stringified; arrays and objects are rejected.
#[derive(Debug, Clone)]
pub struct StringType {
    spec: TypeSpec,
    min_length: Option<usize>,
    max_length: Option<usize>,
}

impl StringType {
    /// Creates an optional string parameter with no length bounds.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            spec: TypeSpec::new(name),
            min_length: None,
            max_length: None,
        }
    }

    /// Marks the parameter as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.spec.require();
        self
    }

    /// Sets the value used when input is absent.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.spec.set_default(Value::String(default.into()));
        self
    }

    /// Sets the inclusive minimum length in characters.
    #[must_use]
    pub fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Sets the inclusive maximum length in characters.
    #[must_use]
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    fn check_length(&self, text: &str) -> Result<()> {
        let length = text.chars().count();
        let min = self.min_length.unwrap_or(0);
        let max = self.max_length.unwrap_or(usize::MAX);
        if length < min || length > max {
            return Err(ValidationError::LengthOutOfRange {
                field: self.name().to_string(),
                min,
                max,
                actual: length,
            });
        }
        Ok(())
    }
}

impl BridgeType for StringType {
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
        let text = match raw {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => {
                return Err(ValidationError::UnexpectedType {
                    field: self.name().to_string(),
                    expected: "a string",
                    value: display_value(other),
                });
            }
        };
        self.check_length(&text)?;
        Ok(Value::String(text))
    }
}

// ============================================================================
// ChoiceType
// ============================================================================

/// A parameter restricted to a fixed list of allowed values.
///
/// Membership is exact value equality; no coercion is applied before the
/// check, so `1` does not match an allowed `"1"`.
///
/// # Examples
///
/// ```
/// use huer_lib::types::{BridgeType, ChoiceType};
/// use serde_json::json;
///
/// let alert = ChoiceType::strings("alert", &["none", "select", "lselect"]);
/// assert!(alert.get_value(Some(&json!("select"))).is_ok());
/// assert!(alert.get_value(Some(&json!("blink"))).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ChoiceType {
    spec: TypeSpec,
    values: Vec<Value>,
}

impl ChoiceType {
    /// Creates an optional choice parameter over the given allowed values.
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            spec: TypeSpec::new(name),
            values,
        }
    }

    /// Creates a choice parameter over a list of allowed strings.
    #[must_use]
    pub fn strings(name: impl Into<String>, values: &[&str]) -> Self {
        Self::new(
            name,
            values.iter().map(|v| Value::String((*v).to_string())).collect(),
        )
    }

    /// Marks the parameter as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.spec.require();
        self
    }

    /// Sets the value used when input is absent. The default goes through
    /// the same membership check as explicit input.
    #[must_use]
    pub fn with_default(mut self, default: Value) -> Self {
        self.spec.set_default(default);
        self
    }

    /// Returns the allowed values.
    #[must_use]
    pub fn allowed_values(&self) -> &[Value] {
        &self.values
    }
}

impl BridgeType for ChoiceType {
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
        if self.values.contains(raw) {
            return Ok(raw.clone());
        }
        let allowed = self
            .values
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", ");
        Err(ValidationError::InvalidChoice {
            field: self.name().to_string(),
            value: display_value(raw),
            allowed,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
