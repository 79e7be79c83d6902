// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Declarative value validation for bridge command parameters.
//!
//! Bridge endpoints accept loosely-typed JSON. Each parameter is described
//! once by an immutable type descriptor that knows how to coerce raw input
//! into the canonical value the bridge expects, or reject it with a
//! [`ValidationError`](crate::error::ValidationError) naming the field, the
//! offending value, and the violated constraint.
//!
//! # Available Descriptors
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`BooleanType`] | truthiness coercion |
//! | [`ChoiceType`] | membership in a fixed allowed-values list |
//! | [`RangedIntType`] | bounded integers in four bridge widths |
//! | [`FloatType`] | bounded floats, fraction preserved |
//! | [`StringType`] | string coercion with optional length bounds |
//! | [`ListType`] | arrays with entry bounds and a per-entry type |
//! | [`ObjectType`] | projection of declared fields |
//! | [`TimePatternType`] | schedule time-pattern strings |
//!
//! # Resolution Policy
//!
//! Every descriptor resolves input the same way: absent or `null` input
//! yields the coerced default when one is configured, no value when the
//! descriptor is optional, and an error otherwise; present input is coerced
//! and validated, and the first violation aborts the call. (JSON cannot
//! carry `NaN`, so `null` is the only in-band absent marker.)
//!
//! # Examples
//!
//! ```
//! use huer_lib::types::{BridgeType, RangedIntType};
//! use serde_json::json;
//!
//! let bri = RangedIntType::uint8("bri").with_range(1, 254);
//!
//! // Canonical value out
//! assert_eq!(bri.get_value(Some(&json!(200))).unwrap(), Some(json!(200)));
//!
//! // Fractions truncate toward zero, strings are parsed
//! assert_eq!(bri.get_value(Some(&json!(1.9))).unwrap(), Some(json!(1)));
//! assert_eq!(bri.get_value(Some(&json!("128"))).unwrap(), Some(json!(128)));
//!
//! // Violations name the field and the bound
//! let err = bri.get_value(Some(&json!(255))).unwrap_err();
//! assert!(err.to_string().contains("254"));
//! ```

mod collection;
mod numeric;
mod scalar;
mod time_pattern;

pub use collection::{ListType, ObjectType};
pub use numeric::{FloatType, IntWidth, RangedIntType};
pub use scalar::{BooleanType, ChoiceType, StringType};
pub use time_pattern::TimePatternType;

use serde_json::Value;

use crate::error::{Result, ValidationError};

/// A descriptor that validates and coerces one bridge parameter.
///
/// Descriptors are immutable: they are built once (typically as
/// process-lifetime constants) and reused for any number of
/// [`get_value`](Self::get_value) calls.
pub trait BridgeType {
    /// Returns the parameter name used in payloads and error messages.
    fn name(&self) -> &str;

    /// Returns `true` if the parameter may be absent.
    fn is_optional(&self) -> bool;

    /// Returns the configured default, if any.
    fn default_value(&self) -> Option<&Value>;

    /// Coerces a present raw value into its canonical form.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` describing the first violated
    /// constraint.
    fn coerce(&self, raw: &Value) -> Result<Value>;

    /// Resolves absent input: the coerced default if configured, no value
    /// if optional, an error otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NotOptional` when no default is
    /// configured and the parameter is required.
    fn resolve_absent(&self) -> Result<Option<Value>> {
        if let Some(default) = self.default_value() {
            return self.coerce(default).map(Some);
        }
        if self.is_optional() {
            Ok(None)
        } else {
            Err(ValidationError::NotOptional {
                field: self.name().to_string(),
            })
        }
    }

    /// Resolves raw input to a canonical value.
    ///
    /// Absent and `null` input go through [`resolve_absent`](Self::resolve_absent);
    /// everything else is coerced and validated.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` describing the first violated
    /// constraint.
    fn get_value(&self, raw: Option<&Value>) -> Result<Option<Value>> {
        match raw {
            None | Some(Value::Null) => self.resolve_absent(),
            Some(value) => self.coerce(value).map(Some),
        }
    }
}

/// The name/optional/default triple shared by every descriptor.
#[derive(Debug, Clone)]
pub(crate) struct TypeSpec {
    name: String,
    optional: bool,
    default: Option<Value>,
}

impl TypeSpec {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            optional: true,
            default: None,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn is_optional(&self) -> bool {
        self.optional
    }

    pub(crate) fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub(crate) fn require(&mut self) {
        self.optional = false;
    }

    pub(crate) fn set_default(&mut self, default: Value) {
        self.default = Some(default);
    }
}

/// Renders a raw value for error messages, without JSON string quoting.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_value_strips_string_quotes() {
        assert_eq!(display_value(&json!("warm")), "warm");
        assert_eq!(display_value(&json!(42)), "42");
        assert_eq!(display_value(&json!([1, 2])), "[1,2]");
        assert_eq!(display_value(&json!(null)), "null");
    }

    #[test]
    fn resolution_policy_prefers_default_over_optionality() {
        let with_default = BooleanType::new("on").with_default(true);
        assert_eq!(with_default.get_value(None).unwrap(), Some(json!(true)));

        let optional = BooleanType::new("on");
        assert_eq!(optional.get_value(None).unwrap(), None);

        let required = BooleanType::new("on").required();
        assert!(matches!(
            required.get_value(None).unwrap_err(),
            ValidationError::NotOptional { .. }
        ));
    }

    #[test]
    fn null_input_follows_the_absent_path() {
        let required = BooleanType::new("on").required();
        assert!(required.get_value(Some(&Value::Null)).is_err());

        let with_default = BooleanType::new("on").with_default(false);
        assert_eq!(
            with_default.get_value(Some(&Value::Null)).unwrap(),
            Some(json!(false))
        );
    }
}
