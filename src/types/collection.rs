// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Collection descriptors: lists and field-projecting objects.

use serde_json::{Map, Value};

use super::{BridgeType, TypeSpec, display_value};
use crate::error::{Result, ValidationError};

type BoxedType = Box<dyn BridgeType + Send + Sync>;

// ============================================================================
// ListType
// ============================================================================

/// A list parameter with a uniform entry type and optional arity bounds.
///
/// A bare scalar is wrapped into a one-entry list before validation, so
/// callers may pass either `0.5` or `[0.5]` for a single-entry list. Every
/// entry runs through the entry descriptor and the first invalid entry
/// aborts the call.
///
/// # Examples
///
/// ```
/// use huer_lib::types::{BridgeType, FloatType, ListType};
/// use serde_json::json;
///
/// let xy = ListType::new("xy", FloatType::new("xy").with_range(0.0, 1.0))
///     .with_entry_bounds(2, 2);
/// assert!(xy.get_value(Some(&json!([0.4, 0.3]))).is_ok());
/// assert!(xy.get_value(Some(&json!([0.4]))).is_err());
/// ```
pub struct ListType {
    spec: TypeSpec,
    entry_type: BoxedType,
    min_entries: Option<usize>,
    max_entries: Option<usize>,
}

impl ListType {
    /// Creates an optional list parameter over the given entry type.
    #[must_use]
    pub fn new(name: impl Into<String>, entry_type: impl BridgeType + Send + Sync + 'static) -> Self {
        Self {
            spec: TypeSpec::new(name),
            entry_type: Box::new(entry_type),
            min_entries: None,
            max_entries: None,
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
    pub fn with_default(mut self, default: Value) -> Self {
        self.spec.set_default(default);
        self
    }

    /// Sets the inclusive entry-count bounds.
    #[must_use]
    pub fn with_entry_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_entries = Some(min);
        self.max_entries = Some(max);
        self
    }

    fn check_arity(&self, count: usize) -> Result<()> {
        let min = self.min_entries.unwrap_or(0);
        let max = self.max_entries.unwrap_or(usize::MAX);
        if count < min || count > max {
            return Err(ValidationError::ArityOutOfRange {
                field: self.name().to_string(),
                min,
                max,
                actual: count,
            });
        }
        Ok(())
    }
}

impl BridgeType for ListType {
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
        let entries: Vec<Value> = match raw {
            Value::Array(entries) => entries.clone(),
            scalar => vec![scalar.clone()],
        };
        self.check_arity(entries.len())?;
        let mut out = Vec::with_capacity(entries.len());
        for entry in &entries {
            match self.entry_type.get_value(Some(entry))? {
                Some(value) => out.push(value),
                None => out.push(Value::Null),
            }
        }
        Ok(Value::Array(out))
    }
}

// ============================================================================
// ObjectType
// ============================================================================

/// An object parameter that projects a declared set of fields.
///
/// Undeclared keys in the input are dropped. Each declared field resolves
/// through its own descriptor, so defaults and required fields apply within
/// the object. A projection that comes out empty counts as absent: an error
/// for a required object, no value for an optional one.
pub struct ObjectType {
    spec: TypeSpec,
    fields: Vec<BoxedType>,
}

impl ObjectType {
    /// Creates an optional object parameter with no declared fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            spec: TypeSpec::new(name),
            fields: Vec::new(),
        }
    }

    /// Marks the parameter as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.spec.require();
        self
    }

    /// Declares a field of the object.
    #[must_use]
    pub fn with_field(mut self, field: impl BridgeType + Send + Sync + 'static) -> Self {
        self.fields.push(Box::new(field));
        self
    }

    /// Returns the declared field descriptors in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[BoxedType] {
        &self.fields
    }
}

impl BridgeType for ObjectType {
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
        let Value::Object(input) = raw else {
            return Err(ValidationError::UnexpectedType {
                field: self.name().to_string(),
                expected: "an object",
                value: display_value(raw),
            });
        };
        let mut out = Map::new();
        for field in &self.fields {
            if let Some(value) = field.get_value(input.get(field.name()))? {
                out.insert(field.name().to_string(), value);
            }
        }
        Ok(Value::Object(out))
    }

    fn get_value(&self, raw: Option<&Value>) -> Result<Option<Value>> {
        match raw {
            None | Some(Value::Null) => self.resolve_absent(),
            Some(value) => {
                let projected = self.coerce(value)?;
                let empty = projected.as_object().is_some_and(Map::is_empty);
                if !empty {
                    return Ok(Some(projected));
                }
                if self.is_optional() {
                    Ok(None)
                } else {
                    Err(ValidationError::EmptyObject {
                        field: self.name().to_string(),
                    })
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BooleanType, FloatType, RangedIntType, StringType};
    use serde_json::json;

    fn xy() -> ListType {
        ListType::new("xy", FloatType::new("xy").with_range(0.0, 1.0)).with_entry_bounds(2, 2)
    }

    #[test]
    fn list_validates_every_entry() {
        assert_eq!(
            xy().get_value(Some(&json!([0.4, 0.3]))).unwrap(),
            Some(json!([0.4, 0.3]))
        );
        let err = xy().get_value(Some(&json!([0.4, 1.5]))).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }

    #[test]
    fn list_arity_bounds_are_enforced() {
        for bad in [json!([]), json!([0.1]), json!([0.1, 0.2, 0.3])] {
            assert!(matches!(
                xy().get_value(Some(&bad)).unwrap_err(),
                ValidationError::ArityOutOfRange { .. }
            ));
        }
    }

    #[test]
    fn bare_scalar_becomes_a_singleton_list() {
        let levels = ListType::new("levels", RangedIntType::uint8("levels"));
        assert_eq!(
            levels.get_value(Some(&json!(7))).unwrap(),
            Some(json!([7]))
        );
    }

    #[test]
    fn list_entry_coercion_applies() {
        let levels = ListType::new("levels", RangedIntType::uint8("levels"));
        assert_eq!(
            levels.get_value(Some(&json!(["3", 1.9]))).unwrap(),
            Some(json!([3, 1]))
        );
    }

    fn state() -> ObjectType {
        ObjectType::new("state")
            .with_field(BooleanType::new("on"))
            .with_field(RangedIntType::uint8("bri").with_range(1, 254))
            .with_field(StringType::new("scene"))
    }

    #[test]
    fn object_projects_declared_fields_only() {
        let raw = json!({"on": 1, "bri": 200, "colormode": "xy"});
        assert_eq!(
            state().get_value(Some(&raw)).unwrap(),
            Some(json!({"on": true, "bri": 200}))
        );
    }

    #[test]
    fn object_field_errors_propagate() {
        let err = state().get_value(Some(&json!({"bri": 255}))).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }

    #[test]
    fn missing_required_field_fails() {
        let strict = ObjectType::new("state").with_field(BooleanType::new("on").required());
        assert!(matches!(
            strict.get_value(Some(&json!({}))).unwrap_err(),
            ValidationError::NotOptional { .. }
        ));
    }

    #[test]
    fn empty_projection_counts_as_absent() {
        // Optional object: nothing declared survives, so no value.
        assert_eq!(state().get_value(Some(&json!({"other": 1}))).unwrap(), None);
        // Required object: same input is an error.
        let strict = ObjectType::new("state")
            .with_field(BooleanType::new("on"))
            .required();
        assert!(matches!(
            strict.get_value(Some(&json!({"other": 1}))).unwrap_err(),
            ValidationError::EmptyObject { .. }
        ));
    }

    #[test]
    fn field_defaults_fill_in_inside_objects() {
        let with_default = ObjectType::new("state")
            .with_field(RangedIntType::uint16("transitiontime").with_default(4));
        assert_eq!(
            with_default.get_value(Some(&json!({"ignored": true}))).unwrap(),
            Some(json!({"transitiontime": 4}))
        );
    }

    #[test]
    fn non_object_input_is_rejected() {
        assert!(matches!(
            state().get_value(Some(&json!([1, 2]))).unwrap_err(),
            ValidationError::UnexpectedType { .. }
        ));
    }
}
