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

//! # Vex Rule Dispatch
//!
//! Maps rule keys to perturbation recipes. A rule is a named recipe of
//! (input-shaping mode, perturbation, parameter mapping), static per rule set
//! and immutable after construction. Dispatch shapes the input text per the
//! rule's mode, invokes the perturbation, and applies the rule's failure
//! policy.
//!
//! Unknown rule keys are silently skipped, not an error: callers select rules
//! by key and absence of output is the only failure signal for a key that
//! does not exist.

use rand::rngs::SmallRng;

use crate::errors::Result;
use crate::lang::VexLanguagePipeline;
use crate::perturb::{
    VexAddNegation, VexAddTypos, VexChangeLocation, VexChangeNames, VexChangeNumber, VexContract,
    VexExpandContractions, VexPerturbInput, VexPerturbParams, VexPerturbation, VexRemoveNegation,
};

/// How a rule wants its input shaped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VexInputMode {
    /// Hand the raw text straight to the perturbation.
    Wrap,
    /// Run the language pipeline first and hand over the analyzed document.
    Analyze,
}

/// One named perturbation recipe.
#[derive(Debug)]
pub struct VexRule {
    key: &'static str,
    mode: VexInputMode,
    perturbation: Box<dyn VexPerturbation + Send + Sync>,
    params: VexPerturbParams,
    /// Treat the perturbation's `RuleLimitation` signal as "no results".
    swallow_limitation: bool,
}

impl VexRule {
    /// The rule's lookup key.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// The rule's input-shaping mode.
    pub fn mode(&self) -> VexInputMode {
        self.mode
    }
}

/// Static rule table plus dispatch.
#[derive(Debug)]
pub struct VexRuleSet {
    rules: Vec<VexRule>,
}

impl VexRuleSet {
    /// Builds the built-in rule table.
    pub fn builtin() -> Self {
        let rule = |key: &'static str,
                    mode: VexInputMode,
                    perturbation: Box<dyn VexPerturbation + Send + Sync>,
                    params: VexPerturbParams,
                    swallow_limitation: bool| VexRule {
            key,
            mode,
            perturbation,
            params,
            swallow_limitation,
        };
        let none = VexPerturbParams::default();
        let first_only = VexPerturbParams {
            first_only: true,
            ..Default::default()
        };
        let last_only = VexPerturbParams {
            last_only: true,
            ..Default::default()
        };
        Self {
            rules: vec![
                rule(
                    "add_typos",
                    VexInputMode::Wrap,
                    Box::new(VexAddTypos::default()),
                    none,
                    false,
                ),
                rule(
                    "expand_contractions",
                    VexInputMode::Wrap,
                    Box::new(VexExpandContractions::new()),
                    none,
                    false,
                ),
                rule(
                    "contractions",
                    VexInputMode::Wrap,
                    Box::new(VexContract::new()),
                    none,
                    false,
                ),
                rule(
                    "change_names_first_only",
                    VexInputMode::Analyze,
                    Box::new(VexChangeNames::default()),
                    first_only,
                    false,
                ),
                rule(
                    "change_names_last_only",
                    VexInputMode::Analyze,
                    Box::new(VexChangeNames::default()),
                    last_only,
                    false,
                ),
                rule(
                    "change_names",
                    VexInputMode::Analyze,
                    Box::new(VexChangeNames::default()),
                    none,
                    false,
                ),
                rule(
                    "change_location",
                    VexInputMode::Analyze,
                    Box::new(VexChangeLocation::default()),
                    none,
                    false,
                ),
                rule(
                    "change_number",
                    VexInputMode::Analyze,
                    Box::new(VexChangeNumber::default()),
                    none,
                    false,
                ),
                rule(
                    "add_negation",
                    VexInputMode::Analyze,
                    Box::new(VexAddNegation),
                    none,
                    true,
                ),
                rule(
                    "remove_negation",
                    VexInputMode::Analyze,
                    Box::new(VexRemoveNegation),
                    none,
                    false,
                ),
            ],
        }
    }

    /// All rule keys, in table order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.key).collect()
    }

    /// Looks up a rule by key.
    pub fn get(&self, key: &str) -> Option<&VexRule> {
        self.rules.iter().find(|rule| rule.key == key)
    }

    /// Shapes the input per the rule's mode and runs its perturbation.
    ///
    /// When the rule's failure policy allows it (currently only
    /// `add_negation`), the perturbation's `RuleLimitation` signal is
    /// converted to "no results"; every other error propagates. The
    /// `swallow_limitations` flag lets callers disable the policy.
    pub fn apply(
        &self,
        rule: &VexRule,
        pipeline: &VexLanguagePipeline,
        text: &str,
        swallow_limitations: bool,
        rng: &mut SmallRng,
    ) -> Result<Vec<String>> {
        let lexicon = pipeline.lexicon();
        let outcome = match rule.mode {
            VexInputMode::Wrap => {
                rule.perturbation
                    .perturb(&VexPerturbInput::Text(text), &rule.params, lexicon, rng)
            }
            VexInputMode::Analyze => {
                let doc = pipeline.analyze(text);
                rule.perturbation
                    .perturb(&VexPerturbInput::Doc(&doc), &rule.params, lexicon, rng)
            }
        };
        match outcome {
            Err(err)
                if err.is_rule_limitation() && rule.swallow_limitation && swallow_limitations =>
            {
                log::debug!("rule '{}' declined input: {}", rule.key, err);
                Ok(Vec::new())
            }
            other => other,
        }
    }
}
