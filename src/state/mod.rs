// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Validated light and group state payloads.
//!
//! The bridge's `/state` and `/action` endpoints accept a JSON object of
//! loosely-typed fields. The builders here collect raw field values and
//! validate the whole payload in one pass against the declared field
//! descriptors, so a payload that reaches the transport layer is already
//! canonical.
//!
//! # Examples
//!
//! ```
//! use huer_lib::state::LightState;
//!
//! let payload = LightState::new()
//!     .on(true)
//!     .brightness(200)
//!     .transition_time(4)
//!     .build()
//!     .unwrap();
//! assert_eq!(payload["bri"], 200);
//! ```

mod light;

pub use light::{GroupState, LightState, group_state_type, light_state_type};
