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

use crate::errors::{Result, VexError};
use crate::lexicon::{VexLexicon, CITIES, COUNTRIES};
use crate::perturb::names::{splice_targets, Target};
use crate::perturb::{VexPerturbInput, VexPerturbParams, VexPerturbation};

/// Substitutes detected cities and countries with same-category alternatives.
///
/// Cities swap with cities, countries with countries. Locations absent from
/// the lexicon are not detected and produce no variants.
#[derive(Debug)]
pub struct VexChangeLocation {
    n: usize,
}

impl VexChangeLocation {
    /// Constructs the perturbation producing up to `n` variants.
    pub fn new(n: usize) -> Self {
        Self { n: n.max(1) }
    }
}

impl Default for VexChangeLocation {
    fn default() -> Self {
        Self::new(10)
    }
}

impl VexPerturbation for VexChangeLocation {
    fn name(&self) -> &'static str {
        "perturb.change_location"
    }

    fn perturb(
        &self,
        input: &VexPerturbInput,
        _params: &VexPerturbParams,
        lexicon: &VexLexicon,
        rng: &mut SmallRng,
    ) -> Result<Vec<String>> {
        let doc = match input {
            VexPerturbInput::Doc(doc) => doc,
            VexPerturbInput::Text(_) => {
                return Err(VexError::internal(
                    "perturb.change_location requires an analyzed document input",
                ))
            }
        };

        let mut targets = Vec::new();
        for token in &doc.tokens {
            if !token.is_location {
                continue;
            }
            let pool: &[&str] = if lexicon.is_city(&token.text) {
                CITIES
            } else {
                COUNTRIES
            };
            targets.push(Target {
                start: token.start,
                end: token.end,
                candidates: pool
                    .iter()
                    .copied()
                    .filter(|candidate| !candidate.eq_ignore_ascii_case(&token.text))
                    .collect(),
            });
        }
        if targets.is_empty() {
            return Ok(Vec::new());
        }

        let variants = (0..self.n)
            .map(|_| splice_targets(&doc.text, &targets, rng))
            .collect();
        Ok(variants)
    }
}
