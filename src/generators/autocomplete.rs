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

//! # Autocompleter Generator
//!
//! Mask-completion generation: the configured template typically ends in a
//! `{mask}` tag and the engine's mask filler supplies completions. The full
//! expansion is computed (no per-tag sampling) and the output is capped by
//! uniform sampling.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

use crate::config::{VexGeneratorConfig, DEFAULT_SEED};
use crate::dataset::VexDataset;
use crate::errors::Result;
use crate::example::{VexExample, VexExampleBatch};
use crate::generator::VexGenerator;
use crate::model::VexModel;
use crate::sample::sample_up_to;
use crate::template::{VexTemplateEngine, VexTemplateRequest};

/// Default output cardinality cap per input example.
const DEFAULT_N_PER_EXAMPLE: usize = 10;

/// Mask-completion counterfactual generator.
#[derive(Debug)]
pub struct VexAutocompleter {
    engine: VexTemplateEngine,
    seed: u64,
}

impl VexAutocompleter {
    /// Constructs the generator over an explicitly constructed engine.
    pub fn new(engine: VexTemplateEngine) -> Self {
        Self {
            engine,
            seed: DEFAULT_SEED,
        }
    }

    /// Overrides the sampling seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl VexGenerator for VexAutocompleter {
    fn name(&self) -> &'static str {
        "generator.autocompleter"
    }

    fn generate(
        &self,
        example: &VexExample,
        _model: &dyn VexModel,
        dataset: &VexDataset,
        config: &VexGeneratorConfig,
    ) -> Result<VexExampleBatch> {
        let Some(template) = config.template.as_deref() else {
            return Ok(Vec::new());
        };
        let n_per_example = config.n_per_example_or(DEFAULT_N_PER_EXAMPLE);
        let mut rng = SmallRng::seed_from_u64(config.seed_or(self.seed));

        log::info!(
            "generating {} completions for template: {}",
            n_per_example,
            template
        );

        let request = VexTemplateRequest::new(template)
            .vocab(config.vocab_map.clone())
            .remove_duplicates(true);
        let expanded = self.engine.expand(&request, &mut rng)?;
        let new_texts = sample_up_to(&mut rng, expanded.data, n_per_example);

        let mut output = Vec::new();
        for text_key in dataset.spec().text_keys() {
            let text = example.text(text_key).unwrap_or_default();
            for new_text in &new_texts {
                if new_text == text {
                    continue;
                }
                output.push(example.with_field(text_key, json!(new_text)));
            }
        }
        Ok(output)
    }
}
