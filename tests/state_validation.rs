// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the value framework and state builders.

use huer_lib::types::{
    BooleanType, BridgeType, ChoiceType, FloatType, ListType, ObjectType, RangedIntType,
    StringType, TimePatternType,
};
use huer_lib::{GroupState, LightState, ValidationError};
use serde_json::{Value, json};

// ============================================================================
// Framework Tests
// ============================================================================

mod framework {
    use super::*;

    #[test]
    fn descriptors_compose_into_nested_documents() {
        let schedule = ObjectType::new("schedule")
            .with_field(StringType::new("name").with_min_length(1).with_max_length(32))
            .with_field(TimePatternType::new("localtime").required())
            .with_field(
                ObjectType::new("command")
                    .with_field(StringType::new("address").required())
                    .with_field(ChoiceType::strings("method", &["PUT", "POST"]).with_default(json!("PUT"))),
            )
            .with_field(BooleanType::new("autodelete").with_default(true));

        let raw = json!({
            "name": "wake up",
            "localtime": "W124/T06:30:00",
            "command": {"address": "/api/0/groups/1/action", "body": {"on": true}},
            "status": "enabled",
        });
        let validated = schedule.get_value(Some(&raw)).unwrap().unwrap();
        assert_eq!(
            validated,
            json!({
                "name": "wake up",
                "localtime": "W124/T06:30:00",
                "command": {"address": "/api/0/groups/1/action", "method": "PUT"},
                "autodelete": true,
            })
        );
    }

    #[test]
    fn nested_failures_surface_the_inner_field() {
        let schedule = ObjectType::new("schedule")
            .with_field(ObjectType::new("command").with_field(StringType::new("address").required()))
            .required();
        let err = schedule
            .get_value(Some(&json!({"command": {"method": "PUT"}})))
            .unwrap_err();
        match err {
            ValidationError::NotOptional { field } => assert_eq!(field, "address"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn lists_of_objects_validate_each_entry() {
        let lights = ListType::new(
            "lights",
            ObjectType::new("lights").with_field(RangedIntType::uint8("id").required()),
        )
        .with_entry_bounds(1, 10);

        let ok = lights
            .get_value(Some(&json!([{"id": 1}, {"id": "2"}])))
            .unwrap();
        assert_eq!(ok, Some(json!([{"id": 1}, {"id": 2}])));

        assert!(lights.get_value(Some(&json!([{"id": 1}, {}]))).is_err());
    }

    #[test]
    fn trait_objects_share_the_resolution_policy() {
        let descriptors: Vec<Box<dyn BridgeType + Send + Sync>> = vec![
            Box::new(BooleanType::new("a").required()),
            Box::new(RangedIntType::uint8("b").required()),
            Box::new(FloatType::new("c").required()),
            Box::new(StringType::new("d").required()),
            Box::new(TimePatternType::new("e").required()),
        ];
        for descriptor in &descriptors {
            assert!(matches!(
                descriptor.get_value(None).unwrap_err(),
                ValidationError::NotOptional { .. }
            ));
            assert!(descriptor.get_value(Some(&Value::Null)).is_err());
        }
    }
}

// ============================================================================
// Builder Tests
// ============================================================================

mod builders {
    use super::*;

    #[test]
    fn full_payload_round_trips_canonically() {
        let payload = LightState::new()
            .on(true)
            .brightness(254)
            .hue(30000)
            .saturation(254)
            .color_temperature(153)
            .alert("none")
            .effect("colorloop")
            .transition_time(10)
            .build()
            .unwrap();
        assert_eq!(payload.len(), 8);
        assert_eq!(payload["ct"], json!(153));
        assert_eq!(payload["effect"], json!("colorloop"));
    }

    #[test]
    fn group_actions_accept_scene_recalls() {
        let action = GroupState::new()
            .with_state(LightState::new().transition_time(0))
            .scene("sunset-01")
            .build()
            .unwrap();
        assert_eq!(action["scene"], json!("sunset-01"));
        assert_eq!(action["transitiontime"], json!(0));
    }

    #[test]
    fn invalid_payloads_never_build_partially() {
        let err = LightState::new()
            .on(true)
            .brightness(100)
            .saturation(300)
            .build()
            .unwrap_err();
        match err {
            ValidationError::OutOfRange { field, max, .. } => {
                assert_eq!(field, "sat");
                assert_eq!(max as i64, 254);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
