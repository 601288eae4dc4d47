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

//! # Vex Model Module
//!
//! Opaque handle for the model under inspection. The generator interface
//! accepts a model so that model-aware generators can share the same contract,
//! but the generators in this crate are model-agnostic and ignore it.
//! Model-serving wrappers live outside this crate.

/// Handle for the model under inspection.
pub trait VexModel: std::fmt::Debug {
    /// Unique, human-readable name for the model.
    fn name(&self) -> &'static str;
}

/// Placeholder model for the generators in this crate, which never consult one.
#[derive(Debug, Default)]
pub struct VexNullModel;

impl VexModel for VexNullModel {
    fn name(&self) -> &'static str {
        "model.null"
    }
}
