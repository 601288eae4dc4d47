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

//! # Vex Dataset Module
//!
//! Dataset spec plumbing: a spec declares, per field name, what kind of value
//! the field carries. Generators only care which fields are text segments;
//! those are the fields they perturb. Loading example corpora is out of scope
//! for this crate; [`VexDataset`] exists to carry a spec through the shared
//! generator interface.

use serde::{Deserialize, Serialize};

/// Kind of value a dataset field carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VexFieldKind {
    /// Free text eligible for perturbation.
    TextSegment,
    /// Numeric value.
    Scalar,
    /// Categorical label.
    Category,
}

/// Ordered field-name to field-kind mapping for a dataset.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VexDataSpec {
    fields: Vec<(String, VexFieldKind)>,
}

impl VexDataSpec {
    /// Constructs an empty spec.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Adds a field to the spec, builder style.
    pub fn field(mut self, name: impl Into<String>, kind: VexFieldKind) -> Self {
        self.fields.push((name.into(), kind));
        self
    }

    /// Returns the kind declared for `name`, if any.
    pub fn get(&self, name: &str) -> Option<VexFieldKind> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, kind)| *kind)
    }

    /// Returns the names of all text-bearing fields, in declaration order.
    ///
    /// These are the fields generators perturb.
    pub fn text_keys(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(_, kind)| *kind == VexFieldKind::TextSegment)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Iterates over all declared fields.
    pub fn iter(&self) -> impl Iterator<Item = (&str, VexFieldKind)> {
        self.fields.iter().map(|(name, kind)| (name.as_str(), *kind))
    }
}

/// Dataset handle exposing a spec to generators.
#[derive(Clone, Debug, Default)]
pub struct VexDataset {
    spec: VexDataSpec,
}

impl VexDataset {
    /// Constructs a dataset carrying the given spec.
    pub fn new(spec: VexDataSpec) -> Self {
        Self { spec }
    }

    /// Returns the dataset spec.
    pub fn spec(&self) -> &VexDataSpec {
        &self.spec
    }
}
