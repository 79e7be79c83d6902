// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Numeric descriptors: bounded integers and floats.

use serde_json::Value;

use super::{BridgeType, TypeSpec, display_value};
use crate::error::{Result, ValidationError};

// ============================================================================
// IntWidth
// ============================================================================

/// The four integer widths the bridge API documents.
///
/// These are magnitude bounds, not two's-complement ranges: the signed
/// widths run symmetrically to the same magnitude as their unsigned
/// counterparts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
    /// Signed 8-bit magnitude, `[-255, 255]`.
    Int8,
    /// Signed 16-bit magnitude, `[-65535, 65535]`.
    Int16,
    /// Unsigned 8-bit, `[0, 255]`.
    UInt8,
    /// Unsigned 16-bit, `[0, 65535]`.
    UInt16,
}

impl IntWidth {
    /// Returns the inclusive `(min, max)` bounds of this width.
    #[must_use]
    pub const fn bounds(self) -> (i64, i64) {
        match self {
            Self::Int8 => (-255, 255),
            Self::Int16 => (-65535, 65535),
            Self::UInt8 => (0, 255),
            Self::UInt16 => (0, 65535),
        }
    }
}

// ============================================================================
// RangedIntType
// ============================================================================

/// A bounded integer parameter.
///
/// Raw numbers and numeric strings are accepted; fractions truncate toward
/// zero before the range check. The range defaults to the width's bounds
/// and can be narrowed per parameter.
///
/// # Examples
///
/// ```
/// use huer_lib::types::{BridgeType, RangedIntType};
/// use serde_json::json;
///
/// let sat = RangedIntType::uint8("sat").with_range(0, 254);
/// assert_eq!(sat.get_value(Some(&json!(254))).unwrap(), Some(json!(254)));
/// assert!(sat.get_value(Some(&json!(255))).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RangedIntType {
    spec: TypeSpec,
    width: IntWidth,
    min: i64,
    max: i64,
}

impl RangedIntType {
    fn with_width(name: impl Into<String>, width: IntWidth) -> Self {
        let (min, max) = width.bounds();
        Self {
            spec: TypeSpec::new(name),
            width,
            min,
            max,
        }
    }

    /// Creates a signed 8-bit parameter, `[-255, 255]`.
    #[must_use]
    pub fn int8(name: impl Into<String>) -> Self {
        Self::with_width(name, IntWidth::Int8)
    }

    /// Creates a signed 16-bit parameter, `[-65535, 65535]`.
    #[must_use]
    pub fn int16(name: impl Into<String>) -> Self {
        Self::with_width(name, IntWidth::Int16)
    }

    /// Creates an unsigned 8-bit parameter, `[0, 255]`.
    #[must_use]
    pub fn uint8(name: impl Into<String>) -> Self {
        Self::with_width(name, IntWidth::UInt8)
    }

    /// Creates an unsigned 16-bit parameter, `[0, 65535]`.
    #[must_use]
    pub fn uint16(name: impl Into<String>) -> Self {
        Self::with_width(name, IntWidth::UInt16)
    }

    /// Marks the parameter as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.spec.require();
        self
    }

    /// Sets the value used when input is absent.
    #[must_use]
    pub fn with_default(mut self, default: i64) -> Self {
        self.spec.set_default(Value::from(default));
        self
    }

    /// Narrows the inclusive range within the width's bounds.
    #[must_use]
    pub fn with_range(mut self, min: i64, max: i64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Returns the width this parameter was declared with.
    #[must_use]
    pub const fn width(&self) -> IntWidth {
        self.width
    }

    /// Returns the inclusive `(min, max)` range in force.
    #[must_use]
    pub const fn range(&self) -> (i64, i64) {
        (self.min, self.max)
    }
}

impl BridgeType for RangedIntType {
    fn name(&self) -> &str {
        self.spec.name()
    }

    fn is_optional(&self) -> bool {
        self.spec.is_optional()
    }

    fn default_value(&self) -> Option<&Value> {
        self.spec.default_value()
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn coerce(&self, raw: &Value) -> Result<Value> {
        let number = to_number(self.name(), raw)?;
        let truncated = number.trunc();
        if truncated < self.min as f64 || truncated > self.max as f64 {
            return Err(ValidationError::OutOfRange {
                field: self.name().to_string(),
                min: self.min as f64,
                max: self.max as f64,
                actual: truncated,
            });
        }
        // In range, so the cast is exact.
        Ok(Value::from(truncated as i64))
    }
}

// ============================================================================
// FloatType
// ============================================================================

/// A bounded float parameter. The fractional part is preserved.
#[derive(Debug, Clone)]
pub struct FloatType {
    spec: TypeSpec,
    min: f64,
    max: f64,
}

impl FloatType {
    /// Creates an optional float parameter over the full finite range.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            spec: TypeSpec::new(name),
            min: -f64::MAX,
            max: f64::MAX,
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
    pub fn with_default(mut self, default: f64) -> Self {
        self.spec.set_default(Value::from(default));
        self
    }

    /// Sets the inclusive range.
    #[must_use]
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Returns the inclusive `(min, max)` range in force.
    #[must_use]
    pub const fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}

impl BridgeType for FloatType {
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
        let number = to_number(self.name(), raw)?;
        if number < self.min || number > self.max {
            return Err(ValidationError::OutOfRange {
                field: self.name().to_string(),
                min: self.min,
                max: self.max,
                actual: number,
            });
        }
        Ok(Value::from(number))
    }
}

/// Converts a raw value to a finite float, accepting numbers and numeric
/// strings.
fn to_number(field: &str, raw: &Value) -> Result<f64> {
    let parsed = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .filter(|f| f.is_finite())
        .ok_or_else(|| ValidationError::NotANumber {
            field: field.to_string(),
            value: display_value(raw),
        })
}

// ============================================================================
// Tests
// ============================================================================
