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

//! # Vex Generator Module
//!
//! This module defines the generator plugin trait shared by all
//! counterfactual generators in Vex. A generator takes one input example and
//! produces a list of perturbed variants of it; a comparison UI elsewhere
//! puts original and variants side by side.
//!
//! ## Generator Design
//!
//! Generators are synchronous and stateless across calls: per-instance
//! resources (a language pipeline, a template engine) are constructed once at
//! creation time and reused, but no state accumulates between `generate`
//! calls. The `model` argument is part of the shared interface contract;
//! the generators in this crate are model-agnostic and ignore it.
//!
//! ## Implementing Custom Generators
//!
//! ```rust
//! use vex::generator::VexGenerator;
//! use vex::example::{VexExample, VexExampleBatch};
//! use vex::dataset::VexDataset;
//! use vex::config::VexGeneratorConfig;
//! use vex::model::VexModel;
//! use vex::errors::Result;
//! use serde_json::json;
//!
//! #[derive(Debug)]
//! struct Shout;
//!
//! impl VexGenerator for Shout {
//!     fn name(&self) -> &'static str {
//!         "generator.shout"
//!     }
//!
//!     fn generate(
//!         &self,
//!         example: &VexExample,
//!         _model: &dyn VexModel,
//!         dataset: &VexDataset,
//!         _config: &VexGeneratorConfig,
//!     ) -> Result<VexExampleBatch> {
//!         let mut output = Vec::new();
//!         for key in dataset.spec().text_keys() {
//!             if let Some(text) = example.text(key) {
//!                 let loud = text.to_uppercase();
//!                 if loud != text {
//!                     output.push(example.with_field(key, json!(loud)));
//!                 }
//!             }
//!         }
//!         Ok(output)
//!     }
//! }
//! ```

use crate::config::VexGeneratorConfig;
use crate::dataset::VexDataset;
use crate::errors::Result;
use crate::example::{VexExample, VexExampleBatch};
use crate::model::VexModel;

/// Contract that every Vex generator plugin must fulfill.
pub trait VexGenerator: std::fmt::Debug {
    /// Unique, human-readable name for the generator.
    ///
    /// Used for logging, error messages, and registry lookup.
    fn name(&self) -> &'static str;

    /// Produces perturbed variants of one input example.
    ///
    /// # Returns
    ///
    /// A list of deep-copied examples, each differing from the input in one
    /// text field. May be empty; absence of output is the only failure signal
    /// for inputs a generator cannot perturb.
    fn generate(
        &self,
        example: &VexExample,
        model: &dyn VexModel,
        dataset: &VexDataset,
        config: &VexGeneratorConfig,
    ) -> Result<VexExampleBatch>;

    /// Produces perturbed variants for a batch of input examples.
    ///
    /// Returns one output list per input, in input order. The default
    /// implementation loops [`VexGenerator::generate`]; implementations may
    /// override this to cap the total number of outputs (the checklist
    /// perturber applies reservoir sampling here).
    fn generate_all(
        &self,
        examples: &[VexExample],
        model: &dyn VexModel,
        dataset: &VexDataset,
        config: &VexGeneratorConfig,
    ) -> Result<Vec<VexExampleBatch>> {
        let mut output = Vec::with_capacity(examples.len());
        for example in examples {
            output.push(self.generate(example, model, dataset, config)?);
        }
        Ok(output)
    }
}
