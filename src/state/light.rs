// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light-state and group-action builders.

use std::sync::LazyLock;

use serde_json::{Map, Value, json};

use crate::error::Result;
use crate::types::{
    BooleanType, BridgeType, ChoiceType, FloatType, ListType, ObjectType, RangedIntType,
    StringType,
};

// ============================================================================
// Field tables
// ============================================================================

fn light_fields(name: &str) -> ObjectType {
    ObjectType::new(name)
        .with_field(BooleanType::new("on"))
        .with_field(RangedIntType::uint8("bri").with_range(1, 254))
        .with_field(RangedIntType::uint16("hue"))
        .with_field(RangedIntType::uint8("sat").with_range(0, 254))
        .with_field(
            ListType::new("xy", FloatType::new("xy").with_range(0.0, 1.0)).with_entry_bounds(2, 2),
        )
        .with_field(RangedIntType::uint16("ct").with_range(153, 500))
        .with_field(ChoiceType::strings("alert", &["none", "select", "lselect"]))
        .with_field(ChoiceType::strings("effect", &["none", "colorloop"]))
        .with_field(RangedIntType::uint16("transitiontime"))
        .with_field(RangedIntType::int8("bri_inc").with_range(-254, 254))
        .with_field(RangedIntType::int8("sat_inc").with_range(-254, 254))
        .with_field(RangedIntType::int16("hue_inc").with_range(-65534, 65534))
        .with_field(RangedIntType::int16("ct_inc").with_range(-65534, 65534))
        .with_field(
            ListType::new("xy_inc", FloatType::new("xy_inc").with_range(-0.5, 0.5))
                .with_entry_bounds(2, 2),
        )
}

static LIGHT_STATE: LazyLock<ObjectType> = LazyLock::new(|| light_fields("state"));

static GROUP_STATE: LazyLock<ObjectType> =
    LazyLock::new(|| light_fields("action").with_field(StringType::new("scene")));

/// Returns the field table for a light `/state` payload.
#[must_use]
pub fn light_state_type() -> &'static ObjectType {
    &LIGHT_STATE
}

/// Returns the field table for a group `/action` payload. It carries every
/// light-state field plus the group-only `scene`.
#[must_use]
pub fn group_state_type() -> &'static ObjectType {
    &GROUP_STATE
}

// ============================================================================
// LightState
// ============================================================================

/// Fluent builder for a light `/state` payload.
///
/// Setters collect raw values without validating; [`build`](Self::build)
/// validates the whole payload in one pass and fails on the first invalid
/// field.
#[derive(Debug, Clone, Default)]
pub struct LightState {
    values: Map<String, Value>,
}

impl LightState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches the light on or off.
    #[must_use]
    pub fn on(self, on: bool) -> Self {
        self.set("on", json!(on))
    }

    /// Sets the brightness, `[1, 254]`.
    #[must_use]
    pub fn brightness(self, bri: i64) -> Self {
        self.set("bri", json!(bri))
    }

    /// Sets the hue, `[0, 65535]`.
    #[must_use]
    pub fn hue(self, hue: i64) -> Self {
        self.set("hue", json!(hue))
    }

    /// Sets the saturation, `[0, 254]`.
    #[must_use]
    pub fn saturation(self, sat: i64) -> Self {
        self.set("sat", json!(sat))
    }

    /// Sets the CIE colour coordinates, each in `[0, 1]`.
    #[must_use]
    pub fn xy(self, x: f64, y: f64) -> Self {
        self.set("xy", json!([x, y]))
    }

    /// Sets the mired colour temperature, `[153, 500]`.
    #[must_use]
    pub fn color_temperature(self, ct: i64) -> Self {
        self.set("ct", json!(ct))
    }

    /// Sets the alert effect: `none`, `select` or `lselect`.
    #[must_use]
    pub fn alert(self, alert: &str) -> Self {
        self.set("alert", json!(alert))
    }

    /// Sets the dynamic effect: `none` or `colorloop`.
    #[must_use]
    pub fn effect(self, effect: &str) -> Self {
        self.set("effect", json!(effect))
    }

    /// Sets the transition time in 100ms steps, `[0, 65535]`.
    #[must_use]
    pub fn transition_time(self, deciseconds: i64) -> Self {
        self.set("transitiontime", json!(deciseconds))
    }

    /// Adjusts the brightness by a delta, `[-254, 254]`.
    #[must_use]
    pub fn brightness_delta(self, delta: i64) -> Self {
        self.set("bri_inc", json!(delta))
    }

    /// Adjusts the saturation by a delta, `[-254, 254]`.
    #[must_use]
    pub fn saturation_delta(self, delta: i64) -> Self {
        self.set("sat_inc", json!(delta))
    }

    /// Adjusts the hue by a delta, `[-65534, 65534]`.
    #[must_use]
    pub fn hue_delta(self, delta: i64) -> Self {
        self.set("hue_inc", json!(delta))
    }

    /// Adjusts the colour temperature by a delta, `[-65534, 65534]`.
    #[must_use]
    pub fn color_temperature_delta(self, delta: i64) -> Self {
        self.set("ct_inc", json!(delta))
    }

    /// Adjusts the colour coordinates by deltas, each in `[-0.5, 0.5]`.
    #[must_use]
    pub fn xy_delta(self, dx: f64, dy: f64) -> Self {
        self.set("xy_inc", json!([dx, dy]))
    }

    /// Sets a raw field value. Unknown fields are dropped at build time.
    #[must_use]
    pub fn set(mut self, field: &str, value: Value) -> Self {
        self.values.insert(field.to_string(), value);
        self
    }

    /// Validates every populated field and returns the canonical payload.
    ///
    /// # Errors
    ///
    /// Returns the first field's `ValidationError`, leaving no partial
    /// payload behind.
    pub fn build(&self) -> Result<Map<String, Value>> {
        let payload = validate(&LIGHT_STATE, &self.values)?;
        tracing::debug!(fields = payload.len(), "validated light state");
        Ok(payload)
    }
}

// ============================================================================
// GroupState
// ============================================================================

/// Fluent builder for a group `/action` payload.
///
/// Accepts every light-state field plus the group-only scene identifier.
#[derive(Debug, Clone, Default)]
pub struct GroupState {
    state: LightState,
}

impl GroupState {
    /// Creates an empty action.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the action from an existing light state.
    #[must_use]
    pub fn with_state(mut self, state: LightState) -> Self {
        self.state = state;
        self
    }

    /// Recalls a scene by identifier.
    #[must_use]
    pub fn scene(mut self, id: &str) -> Self {
        self.state = self.state.set("scene", json!(id));
        self
    }

    /// Sets a raw field value. Unknown fields are dropped at build time.
    #[must_use]
    pub fn set(mut self, field: &str, value: Value) -> Self {
        self.state = self.state.set(field, value);
        self
    }

    /// Validates every populated field and returns the canonical payload.
    ///
    /// # Errors
    ///
    /// Returns the first field's `ValidationError`, leaving no partial
    /// payload behind.
    pub fn build(&self) -> Result<Map<String, Value>> {
        let payload = validate(&GROUP_STATE, &self.state.values)?;
        tracing::debug!(fields = payload.len(), "validated group action");
        Ok(payload)
    }
}

fn validate(descriptor: &ObjectType, values: &Map<String, Value>) -> Result<Map<String, Value>> {
    let raw = Value::Object(values.clone());
    match descriptor.get_value(Some(&raw))? {
        Some(Value::Object(payload)) => Ok(payload),
        _ => Ok(Map::new()),
    }
}

// ============================================================================
// Tests
// ============================================================================
