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

//! # Vex Generator Configuration
//!
//! Validated per-call configuration shared by all generators. The recognized
//! option set is fixed; unknown keys are rejected so that typos surface as
//! validation errors instead of silently falling back to defaults. Absent
//! keys fall back to the documented defaults.
//!
//! Recognized options:
//!
//! - `rule_key`: restrict the checklist perturber to a single rule
//! - `n_per_example`: output cardinality cap per input example
//! - `n_per_perturbation`: per-rule output cap (default 100)
//! - `n_max_samples`: total output cap for batched generation (default 1000)
//! - `template`: template string for template-driven generators
//! - `vocab_map`: tag name to candidate-value lists for template fill-in
//! - `label`: label value propagated to template-generated examples
//! - `language_key` (alias `language_code`): language resource selection
//!   (default "en")
//! - `seed`: RNG seed override (default 43)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{Result, VexError};

/// Default RNG seed shared by all generators.
pub const DEFAULT_SEED: u64 = 43;

/// Default language resource key.
pub const DEFAULT_LANGUAGE_KEY: &str = "en";

/// Default per-rule output cap.
pub const DEFAULT_N_PER_PERTURBATION: usize = 100;

/// Default total output cap for batched generation.
pub const DEFAULT_N_MAX_SAMPLES: usize = 1000;

/// Validated generator configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VexGeneratorConfig {
    /// Restrict the checklist perturber to this rule, when set.
    pub rule_key: Option<String>,
    /// Output cardinality cap per input example.
    pub n_per_example: Option<usize>,
    /// Per-rule output cap.
    pub n_per_perturbation: Option<usize>,
    /// Total output cap for batched generation.
    pub n_max_samples: Option<usize>,
    /// Template string for template-driven generators.
    pub template: Option<String>,
    /// Tag name to candidate-value lists for template fill-in.
    pub vocab_map: BTreeMap<String, Vec<String>>,
    /// Label value propagated to template-generated examples.
    pub label: Option<i64>,
    /// Language resource selection.
    pub language_key: Option<String>,
    /// RNG seed override.
    pub seed: Option<u64>,
}

impl VexGeneratorConfig {
    /// Parses and validates a configuration from a JSON value.
    ///
    /// The value must be an object containing only recognized keys.
    pub fn from_value(config: &Value) -> Result<Self> {
        let obj = config
            .as_object()
            .ok_or_else(|| VexError::validation("generator config must be an object"))?;

        let mut parsed = VexGeneratorConfig::default();
        for (key, value) in obj {
            match key.as_str() {
                "rule_key" => parsed.rule_key = Some(require_str(key, value)?),
                "n_per_example" => parsed.n_per_example = Some(require_usize(key, value)?),
                "n_per_perturbation" => {
                    parsed.n_per_perturbation = Some(require_usize(key, value)?)
                }
                "n_max_samples" => parsed.n_max_samples = Some(require_usize(key, value)?),
                "template" => parsed.template = Some(require_str(key, value)?),
                "vocab_map" => parsed.vocab_map = parse_vocab_map(value)?,
                "label" => {
                    parsed.label = Some(value.as_i64().ok_or_else(|| {
                        VexError::validation("config 'label' must be an integer")
                    })?)
                }
                // both spellings select the language resources
                "language_key" | "language_code" => {
                    parsed.language_key = Some(require_str(key, value)?)
                }
                "seed" => {
                    parsed.seed = Some(value.as_u64().ok_or_else(|| {
                        VexError::validation("config 'seed' must be an unsigned integer")
                    })?)
                }
                other => {
                    return Err(VexError::validation(format!(
                        "unrecognized config key '{}'",
                        other
                    )))
                }
            }
        }
        Ok(parsed)
    }

    /// Output cardinality cap, with a generator-supplied default.
    pub fn n_per_example_or(&self, default: usize) -> usize {
        self.n_per_example.unwrap_or(default)
    }

    /// Per-rule output cap.
    pub fn n_per_perturbation(&self) -> usize {
        self.n_per_perturbation.unwrap_or(DEFAULT_N_PER_PERTURBATION)
    }

    /// Total output cap for batched generation.
    pub fn n_max_samples(&self) -> usize {
        self.n_max_samples.unwrap_or(DEFAULT_N_MAX_SAMPLES)
    }

    /// Selected language resource key.
    pub fn language_key(&self) -> &str {
        self.language_key.as_deref().unwrap_or(DEFAULT_LANGUAGE_KEY)
    }

    /// Effective RNG seed, with a generator-supplied fallback.
    pub fn seed_or(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }
}

fn require_str(key: &str, value: &Value) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| VexError::validation(format!("config '{}' must be a string", key)))
}

fn require_usize(key: &str, value: &Value) -> Result<usize> {
    value
        .as_u64()
        .map(|n| n as usize)
        .ok_or_else(|| {
            VexError::validation(format!("config '{}' must be an unsigned integer", key))
        })
}

fn parse_vocab_map(value: &Value) -> Result<BTreeMap<String, Vec<String>>> {
    let obj = value
        .as_object()
        .ok_or_else(|| VexError::validation("config 'vocab_map' must be an object"))?;

    let mut vocab = BTreeMap::new();
    for (tag, values) in obj {
        let list = values.as_array().ok_or_else(|| {
            VexError::validation(format!("vocab_map entry '{}' must be an array", tag))
        })?;
        let mut entries = Vec::with_capacity(list.len());
        for item in list {
            let text = item.as_str().ok_or_else(|| {
                VexError::validation(format!("vocab_map entry '{}' must contain strings", tag))
            })?;
            entries.push(text.to_string());
        }
        if entries.is_empty() {
            return Err(VexError::validation(format!(
                "vocab_map entry '{}' may not be empty",
                tag
            )));
        }
        vocab.insert(tag.clone(), entries);
    }
    Ok(vocab)
}
