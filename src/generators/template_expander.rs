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

//! # Template Expander Generator
//!
//! Template-driven counterfactual generation. The `template` configuration
//! option supplies a placeholder template; `vocab_map` supplies fill-in
//! lists; the engine expands them (duplicate-suppressing) and the generator
//! emits one deep-copied example per generated text per text field.
//!
//! A call without a `template` yields an empty result list; absence of
//! output, not an error, is the failure signal here.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

use crate::config::{VexGeneratorConfig, DEFAULT_SEED};
use crate::dataset::VexDataset;
use crate::errors::Result;
use crate::example::{VexExample, VexExampleBatch};
use crate::generator::VexGenerator;
use crate::lexicon::VexLexicon;
use crate::model::VexModel;
use crate::sample::sample_up_to;
use crate::template::{VexTemplateEngine, VexTemplateRequest};

/// Default output cardinality cap per input example.
const DEFAULT_N_PER_EXAMPLE: usize = 3;

/// Template-driven counterfactual generator.
#[derive(Debug)]
pub struct VexTemplateExpander {
    engine: VexTemplateEngine,
    seed: u64,
}

impl VexTemplateExpander {
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

    /// The configured engine, or a freshly constructed one when the call
    /// asks for a different language.
    fn engine_for(&self, config: &VexGeneratorConfig) -> Result<Option<VexTemplateEngine>> {
        if config.language_key() == self.engine.language_key() {
            Ok(None)
        } else {
            Ok(Some(VexTemplateEngine::new(VexLexicon::load(
                config.language_key(),
            )?)))
        }
    }
}

impl VexGenerator for VexTemplateExpander {
    fn name(&self) -> &'static str {
        "generator.template_expander"
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
        let loaded = self.engine_for(config)?;
        let engine = loaded.as_ref().unwrap_or(&self.engine);
        let n_per_example = config.n_per_example_or(DEFAULT_N_PER_EXAMPLE);
        let mut rng = SmallRng::seed_from_u64(config.seed_or(self.seed));

        log::info!(
            "generating {} samples for template: {}",
            n_per_example,
            template
        );

        let mut request = VexTemplateRequest::new(template)
            .vocab(config.vocab_map.clone())
            .nsamples(n_per_example)
            .remove_duplicates(true);
        if let Some(label) = config.label {
            request = request.label(label);
        }
        let expanded = engine.expand(&request, &mut rng)?;
        let label = expanded
            .labels
            .as_ref()
            .and_then(|labels| labels.first())
            .copied();
        let new_texts = sample_up_to(&mut rng, expanded.data, n_per_example);

        let mut output = Vec::new();
        for text_key in dataset.spec().text_keys() {
            let text = example.text(text_key).unwrap_or_default();
            for new_text in &new_texts {
                if new_text == text {
                    continue;
                }
                let mut new_example = example.with_field(text_key, json!(new_text));
                if let Some(label) = label {
                    new_example.insert("label", json!(label));
                }
                output.push(new_example);
            }
        }
        Ok(output)
    }
}
