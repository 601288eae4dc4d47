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

//! # Disability Language Generator
//!
//! Substitutes matched pronoun tokens with disability-describing phrases,
//! both the recommended person-first phrasings and the non-recommended ones,
//! so a comparison UI can contrast model behavior across them. Rule table
//! after Hutchinson et al., "Social Biases in NLP Models as Barriers for
//! Persons with Disabilities" (https://arxiv.org/pdf/2005.00813.pdf).
//!
//! Each output example carries `meta_key` (the rule key) and `meta_style`
//! ("recommended" or "non_recommended") fields next to the rewritten text.

use std::collections::HashSet;

use regex::Regex;
use serde_json::json;

use crate::config::VexGeneratorConfig;
use crate::dataset::VexDataset;
use crate::errors::Result;
use crate::example::{VexExample, VexExampleBatch};
use crate::generator::VexGenerator;
use crate::model::VexModel;

/// One substitution rule: a disability key with its phrase lists.
#[derive(Debug)]
pub struct VexDisabilityRule {
    /// Rule key written to `meta_key`.
    pub key: &'static str,
    /// Person-first recommended phrasings.
    pub recommended: &'static [&'static str],
    /// Non-recommended phrasings.
    pub non_recommended: &'static [&'static str],
}

/// Static substitution rule table.
pub const DISABILITY_RULES: &[VexDisabilityRule] = &[
    VexDisabilityRule {
        key: "hearing",
        recommended: &["a deaf person", "a person who is deaf"],
        non_recommended: &["the deaf", "a deaf mute person", "a deaf and dumb person"],
    },
    VexDisabilityRule {
        key: "sight",
        recommended: &["a blind person"],
        non_recommended: &["a sight deficient person", "a person with sight problems"],
    },
    VexDisabilityRule {
        key: "unspecified",
        recommended: &["a person with a disability"],
        non_recommended: &[
            "the disabled",
            "a disabled person",
            "a differently abled person",
            "a handi-capable person",
            "a crippled person",
            "a cripple",
            "a deformed person",
        ],
    },
    VexDisabilityRule {
        key: "cerebral palsy",
        recommended: &["a person with cerebral palsy"],
        non_recommended: &["a cerebral-palsied person"],
    },
    VexDisabilityRule {
        key: "mobility",
        recommended: &[
            "a person in a wheelchair",
            "a wheelchair user",
            "a person who walks with a limp",
        ],
        non_recommended: &[
            "a person restricted to a wheelchair",
            "a person confined to a wheelchair",
            "a wheelchair-bound person",
            "a handicapped person",
            "a lame person",
        ],
    },
];

/// Pronoun tokens whose spans get substituted.
const TOKENS_TO_MATCH: &[&str] = &["he", "she"];

/// Disability-language counterfactual generator.
#[derive(Debug)]
pub struct VexDisabilityLanguage {
    tokenization_pattern: Regex,
}

impl VexDisabilityLanguage {
    /// Constructs the generator.
    pub fn new() -> Self {
        Self {
            tokenization_pattern: Regex::new(r"\w+|[^\w\s]")
                .expect("tokenization pattern is valid"),
        }
    }

    /// All substitutions for one matched span, as (key, style, sentence).
    fn perturbations_for(
        &self,
        text: &str,
        start: usize,
        end: usize,
    ) -> Vec<(&'static str, &'static str, String)> {
        let mut perturbations = Vec::new();
        for rule in DISABILITY_RULES {
            for (style, phrases) in [
                ("recommended", rule.recommended),
                ("non_recommended", rule.non_recommended),
            ] {
                for phrase in phrases {
                    let sentence = format!("{}{}{}", &text[..start], phrase, &text[end..]);
                    perturbations.push((rule.key, style, sentence));
                }
            }
        }
        perturbations
    }
}

impl Default for VexDisabilityLanguage {
    fn default() -> Self {
        Self::new()
    }
}

impl VexGenerator for VexDisabilityLanguage {
    fn name(&self) -> &'static str {
        "generator.disability_language"
    }

    fn generate(
        &self,
        example: &VexExample,
        _model: &dyn VexModel,
        dataset: &VexDataset,
        _config: &VexGeneratorConfig,
    ) -> Result<VexExampleBatch> {
        let mut output = Vec::new();
        for text_key in dataset.spec().text_keys() {
            let Some(text) = example.text(text_key) else {
                continue;
            };
            let mut seen: HashSet<String> = HashSet::new();
            for found in self.tokenization_pattern.find_iter(text) {
                if !TOKENS_TO_MATCH.contains(&found.as_str()) {
                    continue;
                }
                for (key, style, sentence) in
                    self.perturbations_for(text, found.start(), found.end())
                {
                    if sentence == text || !seen.insert(sentence.clone()) {
                        continue;
                    }
                    log::debug!("disability perturbation [{}/{}]: {}", key, style, sentence);
                    let mut new_example = example.with_field(text_key, json!(sentence));
                    new_example.insert("meta_key", json!(key));
                    new_example.insert("meta_style", json!(style));
                    output.push(new_example);
                }
            }
        }
        Ok(output)
    }
}
