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

use rand::rngs::SmallRng;
use regex::Regex;

use crate::errors::Result;
use crate::lexicon::{VexLexicon, CONTRACTION_PAIRS};
use crate::perturb::{VexPerturbInput, VexPerturbParams, VexPerturbation};

/// One precompiled direction of a contraction pair.
#[derive(Debug)]
struct PairMatcher {
    pattern: Regex,
    replacement: String,
}

fn compile_pairs(contract: bool) -> Vec<PairMatcher> {
    CONTRACTION_PAIRS
        .iter()
        .map(|(expanded, contracted)| {
            let (from, to) = if contract {
                (expanded, contracted)
            } else {
                (contracted, expanded)
            };
            let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(from)))
                .expect("contraction pattern is valid");
            PairMatcher {
                pattern,
                replacement: to.to_string(),
            }
        })
        .collect()
}

/// Applies one pair everywhere it matches, preserving leading capitalization.
fn apply_pair(text: &str, matcher: &PairMatcher) -> Option<String> {
    if !matcher.pattern.is_match(text) {
        return None;
    }
    let replaced = matcher.pattern.replace_all(text, |caps: &regex::Captures| {
        let matched = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
        let starts_upper = matched.chars().next().map(char::is_uppercase).unwrap_or(false);
        if starts_upper {
            let mut chars = matcher.replacement.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        } else {
            matcher.replacement.clone()
        }
    });
    Some(replaced.into_owned())
}

/// Replaces expanded forms with their contractions, one pair per variant.
#[derive(Debug)]
pub struct VexContract {
    matchers: Vec<PairMatcher>,
}

impl VexContract {
    pub fn new() -> Self {
        Self {
            matchers: compile_pairs(true),
        }
    }
}

impl Default for VexContract {
    fn default() -> Self {
        Self::new()
    }
}

impl VexPerturbation for VexContract {
    fn name(&self) -> &'static str {
        "perturb.contractions"
    }

    fn perturb(
        &self,
        input: &VexPerturbInput,
        _params: &VexPerturbParams,
        _lexicon: &VexLexicon,
        _rng: &mut SmallRng,
    ) -> Result<Vec<String>> {
        let text = input.text();
        Ok(self
            .matchers
            .iter()
            .filter_map(|matcher| apply_pair(text, matcher))
            .collect())
    }
}

/// Replaces contractions with their expanded forms, one pair per variant.
#[derive(Debug)]
pub struct VexExpandContractions {
    matchers: Vec<PairMatcher>,
}

impl VexExpandContractions {
    pub fn new() -> Self {
        Self {
            matchers: compile_pairs(false),
        }
    }
}

impl Default for VexExpandContractions {
    fn default() -> Self {
        Self::new()
    }
}

impl VexPerturbation for VexExpandContractions {
    fn name(&self) -> &'static str {
        "perturb.expand_contractions"
    }

    fn perturb(
        &self,
        input: &VexPerturbInput,
        _params: &VexPerturbParams,
        _lexicon: &VexLexicon,
        _rng: &mut SmallRng,
    ) -> Result<Vec<String>> {
        let text = input.text();
        Ok(self
            .matchers
            .iter()
            .filter_map(|matcher| apply_pair(text, matcher))
            .collect())
    }
}
