//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Vex.
//! The Vex project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Vex Example Module
//!
//! This module provides the core data structure for representing individual
//! data rows in the Vex framework. VexExample is the fundamental unit of data
//! that generators consume and produce.
//!
//! ## Design Principles
//!
//! - **Flexibility**: Examples use JSON (serde_json::Value) for field values,
//!   enabling one or more text fields next to arbitrary metadata fields
//!   without a strict schema
//! - **Caller Ownership**: Generators never mutate an input example; every
//!   produced counterfactual is a deep copy with one field rewritten
//! - **Serde Support**: Examples serialize cleanly for logging, persistence,
//!   and transmission to a comparison UI
//!
//! ## Usage Example
//!
//! ```rust
//! use vex::example::VexExample;
//! use serde_json::json;
//!
//! let example = VexExample::new()
//!     .with_field("text", json!("Sarah says hello"))
//!     .with_field("label", json!(1));
//!
//! // Deep copy with one field rewritten; `example` is untouched.
//! let variant = example.with_field("text", json!("Emma says hello"));
//! assert_eq!(example.text("text"), Some("Sarah says hello"));
//! assert_eq!(variant.text("text"), Some("Emma says hello"));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{Result, VexError};

/// Field map backing a single example.
pub type VexFields = Map<String, Value>;

/// One data row: a mapping from field name to value.
///
/// An example contains one or more text fields (which fields carry text is
/// declared by the dataset spec, see [`crate::dataset::VexDataSpec`]) plus
/// arbitrary metadata fields. Examples are owned by the caller; generators
/// return deep copies and never mutate their input.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VexExample {
    fields: VexFields,
}

impl VexExample {
    /// Constructs an empty example.
    pub fn new() -> Self {
        Self {
            fields: VexFields::new(),
        }
    }

    /// Constructs an example from an existing field map.
    pub fn from_fields(fields: VexFields) -> Self {
        Self { fields }
    }

    /// Constructs an example from a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(VexError::validation(format!(
                "example must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Returns a deep copy of this example with `key` set to `value`.
    ///
    /// This is the only way generators derive counterfactuals from an input.
    pub fn with_field(&self, key: impl Into<String>, value: Value) -> Self {
        let mut copy = self.clone();
        copy.fields.insert(key.into(), value);
        copy
    }

    /// Sets a field in place.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns the string stored under `key`, if the field exists and is a string.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Returns the underlying field map.
    pub fn fields(&self) -> &VexFields {
        &self.fields
    }

    /// True when the example has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Convenience alias for working on batches of examples.
pub type VexExampleBatch = Vec<VexExample>;
