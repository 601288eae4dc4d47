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
use rand::seq::SliceRandom;

use crate::errors::{Result, VexError};
use crate::lang::VexDoc;
use crate::lexicon::{VexLexicon, FIRST_NAMES_FEMALE, FIRST_NAMES_MALE, LAST_NAMES};
use crate::perturb::{VexPerturbInput, VexPerturbParams, VexPerturbation};

/// A token span scheduled for substitution, with its candidate replacements.
#[derive(Debug)]
pub(crate) struct Target {
    pub start: usize,
    pub end: usize,
    pub candidates: Vec<&'static str>,
}

/// Builds one variant by splicing a sampled replacement into every target span.
///
/// Targets must be sorted by span start and non-overlapping.
pub(crate) fn splice_targets(text: &str, targets: &[Target], rng: &mut SmallRng) -> String {
    let mut output = String::with_capacity(text.len());
    let mut cursor = 0usize;
    for target in targets {
        output.push_str(&text[cursor..target.start]);
        let replacement = target
            .candidates
            .choose(rng)
            .copied()
            .unwrap_or(&text[target.start..target.end]);
        output.push_str(replacement);
        cursor = target.end;
    }
    output.push_str(&text[cursor..]);
    output
}

fn expect_doc<'a>(input: &'a VexPerturbInput, name: &str) -> Result<&'a VexDoc> {
    match input {
        VexPerturbInput::Doc(doc) => Ok(doc),
        VexPerturbInput::Text(_) => Err(VexError::internal(format!(
            "{} requires an analyzed document input",
            name
        ))),
    }
}

fn same_category_names(lexicon: &VexLexicon, original: &str, first: bool) -> Vec<&'static str> {
    let pool: &[&str] = if first {
        if lexicon.is_female_first_name(original) {
            FIRST_NAMES_FEMALE
        } else {
            FIRST_NAMES_MALE
        }
    } else {
        LAST_NAMES
    };
    pool.iter()
        .copied()
        .filter(|candidate| !candidate.eq_ignore_ascii_case(original))
        .collect()
}

/// Substitutes detected person names with alternatives of the same category.
///
/// Every variant replaces all detected names at once. Names absent from the
/// lexicon are not detected and produce no variants.
#[derive(Debug)]
pub struct VexChangeNames {
    n: usize,
}

impl VexChangeNames {
    /// Constructs the perturbation producing up to `n` variants.
    pub fn new(n: usize) -> Self {
        Self { n: n.max(1) }
    }
}

impl Default for VexChangeNames {
    fn default() -> Self {
        Self::new(10)
    }
}

impl VexPerturbation for VexChangeNames {
    fn name(&self) -> &'static str {
        "perturb.change_names"
    }

    fn perturb(
        &self,
        input: &VexPerturbInput,
        params: &VexPerturbParams,
        lexicon: &VexLexicon,
        rng: &mut SmallRng,
    ) -> Result<Vec<String>> {
        let doc = expect_doc(input, self.name())?;

        let mut targets = Vec::new();
        for token in &doc.tokens {
            let as_first = token.is_first_name && !params.last_only;
            // a token in both tables counts as a first name first
            let as_last = token.is_last_name && !token.is_first_name && !params.first_only;
            if as_first || as_last {
                targets.push(Target {
                    start: token.start,
                    end: token.end,
                    candidates: same_category_names(lexicon, &token.text, as_first),
                });
            }
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
