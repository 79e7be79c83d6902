// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `HueR` library.
//!
//! All validation failures are reported through a single [`ValidationError`]
//! kind carrying the field or type name, the offending value, and the
//! violated constraint. Failures are synchronous and all-or-nothing: the
//! first invalid value aborts the whole call, and errors are never
//! accumulated across fields.

use thiserror::Error;

/// Errors raised while validating or coercing bridge values.
///
/// Each variant names the field (or type) that rejected the input, the
/// value that was offered, and the constraint it violated.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// A non-optional value was absent (or `null`).
    #[error("no value provided for non-optional field '{field}'")]
    NotOptional {
        /// Name of the field or type that required a value.
        field: String,
    },

    /// A numeric value is outside its allowed inclusive range.
    #[error("value {actual} for field '{field}' is out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the field or type.
        field: String,
        /// Minimum allowed value.
        min: f64,
        /// Maximum allowed value.
        max: f64,
        /// The value that was provided.
        actual: f64,
    },

    /// A value could not be converted to a number.
    #[error("value '{value}' for field '{field}' is not a parsable number")]
    NotANumber {
        /// Name of the field or type.
        field: String,
        /// Display rendering of the rejected value.
        value: String,
    },

    /// A value is not a member of the allowed-values list.
    #[error("value '{value}' for field '{field}' is not one of the allowed values [{allowed}]")]
    InvalidChoice {
        /// Name of the field or type.
        field: String,
        /// Display rendering of the rejected value.
        value: String,
        /// Comma-separated allowed values.
        allowed: String,
    },

    /// A string's length is outside the configured bounds.
    #[error("string of length {actual} for field '{field}' violates length bounds [{min}, {max}]")]
    LengthOutOfRange {
        /// Name of the field or type.
        field: String,
        /// Minimum allowed length.
        min: usize,
        /// Maximum allowed length.
        max: usize,
        /// Actual length of the provided string.
        actual: usize,
    },

    /// A list has too few or too many entries.
    #[error("list with {actual} entries for field '{field}' violates entry bounds [{min}, {max}]")]
    ArityOutOfRange {
        /// Name of the field or type.
        field: String,
        /// Minimum allowed number of entries.
        min: usize,
        /// Maximum allowed number of entries.
        max: usize,
        /// Actual number of entries provided.
        actual: usize,
    },

    /// An object projected through its declared fields came out empty.
    #[error("object for non-optional field '{field}' contains no declared values")]
    EmptyObject {
        /// Name of the object type.
        field: String,
    },

    /// A value has a JSON type the target cannot coerce.
    #[error("value '{value}' for field '{field}' cannot be coerced to {expected}")]
    UnexpectedType {
        /// Name of the field or type.
        field: String,
        /// What the field expected (e.g. "a string", "an object").
        expected: &'static str,
        /// Display rendering of the rejected value.
        value: String,
    },

    /// A string does not follow the expected fixed grammar.
    #[error("value '{value}' for field '{field}' does not match the expected {expected} format")]
    InvalidFormat {
        /// Name of the field or type.
        field: String,
        /// Human-readable description of the expected grammar.
        expected: &'static str,
        /// The rejected string.
        value: String,
    },

    /// No time-pattern grammar recognizes the string.
    #[error("no known time pattern matches '{value}'")]
    UnknownTimePattern {
        /// The rejected string.
        value: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, ValidationError>;
