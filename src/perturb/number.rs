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
use rand::Rng;

use crate::errors::{Result, VexError};
use crate::lang::VexTokenKind;
use crate::lexicon::VexLexicon;
use crate::perturb::{VexPerturbInput, VexPerturbParams, VexPerturbation};

/// Substitutes integer literals with nearby values.
///
/// Only literals of two or more digits are perturbed; four-digit values in
/// the 1900..=2100 range are left alone (years).
#[derive(Debug)]
pub struct VexChangeNumber {
    n: usize,
}

impl VexChangeNumber {
    /// Constructs the perturbation producing up to `n` variants.
    pub fn new(n: usize) -> Self {
        Self { n: n.max(1) }
    }
}

impl Default for VexChangeNumber {
    fn default() -> Self {
        Self::new(10)
    }
}

fn looks_like_year(value: i64, digits: usize) -> bool {
    digits == 4 && (1900..=2100).contains(&value)
}

impl VexPerturbation for VexChangeNumber {
    fn name(&self) -> &'static str {
        "perturb.change_number"
    }

    fn perturb(
        &self,
        input: &VexPerturbInput,
        _params: &VexPerturbParams,
        _lexicon: &VexLexicon,
        rng: &mut SmallRng,
    ) -> Result<Vec<String>> {
        let doc = match input {
            VexPerturbInput::Doc(doc) => doc,
            VexPerturbInput::Text(_) => {
                return Err(VexError::internal(
                    "perturb.change_number requires an analyzed document input",
                ))
            }
        };

        let mut spans = Vec::new();
        for token in &doc.tokens {
            if token.kind != VexTokenKind::Number || token.text.len() < 2 {
                continue;
            }
            if let Ok(value) = token.text.parse::<i64>() {
                if !looks_like_year(value, token.text.len()) {
                    spans.push((token.start, token.end, value));
                }
            }
        }
        if spans.is_empty() {
            return Ok(Vec::new());
        }

        let mut variants = Vec::with_capacity(self.n);
        for _ in 0..self.n {
            let mut output = String::with_capacity(doc.text.len());
            let mut cursor = 0usize;
            for (start, end, value) in &spans {
                output.push_str(&doc.text[cursor..*start]);
                let spread = (value / 2).abs().max(1);
                let delta = rng.gen_range(1..=spread);
                let replacement = if rng.gen_bool(0.5) {
                    value + delta
                } else {
                    (value - delta).max(0)
                };
                // a zero-clamped delta can land back on the original
                let replacement = if replacement == *value {
                    value + delta
                } else {
                    replacement
                };
                output.push_str(&replacement.to_string());
                cursor = *end;
            }
            output.push_str(&doc.text[cursor..]);
            variants.push(output);
        }
        Ok(variants)
    }
}
