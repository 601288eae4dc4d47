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

//! # Checklist Perturber
//!
//! Rule-dispatch counterfactual generator. For each text field of the input
//! example, the perturber runs the selected rules (one rule when `rule_key`
//! is configured, the whole table otherwise), collects the perturbed strings
//! across rules, removes duplicates, drops variants identical to the input,
//! and caps the output at `n_per_example` by uniform sampling.
//!
//! Batched generation caps the total output at `n_max_samples` with
//! reservoir sampling.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

use crate::config::{VexGeneratorConfig, DEFAULT_SEED};
use crate::dataset::VexDataset;
use crate::errors::Result;
use crate::example::{VexExample, VexExampleBatch};
use crate::generator::VexGenerator;
use crate::lang::VexLanguagePipeline;
use crate::model::VexModel;
use crate::rules::VexRuleSet;
use crate::sample::{dedup_preserving_order, sample_up_to, VexReservoir};

/// Default output cardinality cap per input example.
const DEFAULT_N_PER_EXAMPLE: usize = 10;

/// Rule-dispatch counterfactual generator.
#[derive(Debug)]
pub struct VexChecklistPerturber {
    pipeline: VexLanguagePipeline,
    rules: VexRuleSet,
    seed: u64,
    swallow_rule_limitations: bool,
}

impl VexChecklistPerturber {
    /// Constructs the perturber over an explicitly loaded language pipeline.
    pub fn new(pipeline: VexLanguagePipeline) -> Self {
        Self {
            pipeline,
            rules: VexRuleSet::builtin(),
            seed: DEFAULT_SEED,
            swallow_rule_limitations: true,
        }
    }

    /// Overrides the sampling seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Disables the empty-result policy for rule limitations, so the
    /// `add_negation` limitation propagates as an error instead.
    pub fn with_swallow_rule_limitations(mut self, swallow: bool) -> Self {
        self.swallow_rule_limitations = swallow;
        self
    }

    /// The rule table backing this perturber.
    pub fn rules(&self) -> &VexRuleSet {
        &self.rules
    }

    /// Runs the selected rules over one text and returns the deduplicated
    /// perturbed strings.
    fn expand(
        &self,
        pipeline: &VexLanguagePipeline,
        text: &str,
        rule_keys: &[String],
        n_per_perturbation: usize,
        rng: &mut SmallRng,
    ) -> Result<Vec<String>> {
        let mut collected = Vec::new();
        for rule_key in rule_keys {
            // unknown rule keys are silently skipped
            let Some(rule) = self.rules.get(rule_key) else {
                continue;
            };
            let mut produced = self.rules.apply(
                rule,
                pipeline,
                text,
                self.swallow_rule_limitations,
                rng,
            )?;
            produced.truncate(n_per_perturbation);
            collected.extend(produced);
        }
        Ok(dedup_preserving_order(collected))
    }

    fn generate_with_rng(
        &self,
        example: &VexExample,
        dataset: &VexDataset,
        config: &VexGeneratorConfig,
        pipeline: &VexLanguagePipeline,
        rng: &mut SmallRng,
    ) -> Result<VexExampleBatch> {
        let rule_keys: Vec<String> = match &config.rule_key {
            Some(key) => vec![key.clone()],
            None => self
                .rules
                .keys()
                .into_iter()
                .map(str::to_string)
                .collect(),
        };
        let n_per_example = config.n_per_example_or(DEFAULT_N_PER_EXAMPLE);
        let n_per_perturbation = config.n_per_perturbation();

        let mut output = Vec::new();
        for text_key in dataset.spec().text_keys() {
            let Some(text) = example.text(text_key) else {
                log::debug!("example has no text for field '{}'", text_key);
                continue;
            };
            let new_texts =
                self.expand(pipeline, text, &rule_keys, n_per_perturbation, rng)?;
            for new_text in new_texts {
                if new_text == text {
                    continue;
                }
                output.push(example.with_field(text_key, json!(new_text)));
            }
        }

        Ok(sample_up_to(rng, output, n_per_example))
    }

    /// The configured pipeline, or a freshly loaded one when the call asks
    /// for a different language.
    fn pipeline_for(&self, config: &VexGeneratorConfig) -> Result<Option<VexLanguagePipeline>> {
        if config.language_key() == self.pipeline.language_key() {
            Ok(None)
        } else {
            Ok(Some(VexLanguagePipeline::load(config.language_key())?))
        }
    }
}

impl VexGenerator for VexChecklistPerturber {
    fn name(&self) -> &'static str {
        "generator.checklist_perturber"
    }

    fn generate(
        &self,
        example: &VexExample,
        _model: &dyn VexModel,
        dataset: &VexDataset,
        config: &VexGeneratorConfig,
    ) -> Result<VexExampleBatch> {
        let loaded = self.pipeline_for(config)?;
        let pipeline = loaded.as_ref().unwrap_or(&self.pipeline);
        let mut rng = SmallRng::seed_from_u64(config.seed_or(self.seed));
        self.generate_with_rng(example, dataset, config, pipeline, &mut rng)
    }

    /// Batched generation with reservoir sampling.
    ///
    /// Returns one output list per input; the total number of outputs across
    /// all inputs never exceeds `n_max_samples`.
    fn generate_all(
        &self,
        examples: &[VexExample],
        _model: &dyn VexModel,
        dataset: &VexDataset,
        config: &VexGeneratorConfig,
    ) -> Result<Vec<VexExampleBatch>> {
        let loaded = self.pipeline_for(config)?;
        let pipeline = loaded.as_ref().unwrap_or(&self.pipeline);
        let n_max_samples = config.n_max_samples();
        let mut rng = SmallRng::seed_from_u64(config.seed_or(self.seed));

        let mut reservoir: VexReservoir<(usize, VexExample)> = VexReservoir::new(n_max_samples);
        let mut generated = 0usize;
        for (index, example) in examples.iter().enumerate() {
            let new_examples =
                self.generate_with_rng(example, dataset, config, pipeline, &mut rng)?;
            generated += new_examples.len();
            for new_example in new_examples {
                reservoir.offer(&mut rng, (index, new_example));
            }
        }
        log::info!(
            "reservoir sampling kept {} of {} generated examples",
            reservoir.len(),
            generated
        );

        let mut output: Vec<VexExampleBatch> = vec![Vec::new(); examples.len()];
        for (index, new_example) in reservoir.into_items() {
            output[index].push(new_example);
        }
        Ok(output)
    }
}
