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

//! Grammatical negation insertion and removal.
//!
//! The insertion heuristic is deliberately narrow: it negates the first
//! auxiliary or copula it finds and declines everything else. Inputs it
//! declines (already-negated sentences, sentences without a recognizable
//! auxiliary) surface as the recoverable
//! [`crate::errors::VexError::RuleLimitation`] signal so the dispatch layer
//! can apply its documented empty-result policy.

use rand::rngs::SmallRng;

use crate::errors::{Result, VexError};
use crate::lang::VexDoc;
use crate::lexicon::{VexLexicon, NT_SPECIAL};
use crate::perturb::{VexPerturbInput, VexPerturbParams, VexPerturbation};

const RULE_ADD: &str = "add_negation";

fn expect_doc<'a>(input: &'a VexPerturbInput, name: &str) -> Result<&'a VexDoc> {
    match input {
        VexPerturbInput::Doc(doc) => Ok(doc),
        VexPerturbInput::Text(_) => Err(VexError::internal(format!(
            "{} requires an analyzed document input",
            name
        ))),
    }
}

/// Inserts "not" after the first auxiliary or copula.
#[derive(Debug, Default)]
pub struct VexAddNegation;

impl VexPerturbation for VexAddNegation {
    fn name(&self) -> &'static str {
        "perturb.add_negation"
    }

    fn perturb(
        &self,
        input: &VexPerturbInput,
        _params: &VexPerturbParams,
        _lexicon: &VexLexicon,
        _rng: &mut SmallRng,
    ) -> Result<Vec<String>> {
        let doc = expect_doc(input, self.name())?;

        if doc.tokens.iter().any(|token| token.is_negation) {
            return Err(VexError::rule_limitation(
                RULE_ADD,
                "sentence is already negated",
            ));
        }

        let auxiliary = doc
            .tokens
            .iter()
            .find(|token| token.is_auxiliary)
            .ok_or_else(|| {
                VexError::rule_limitation(RULE_ADD, "no auxiliary or copula to negate")
            })?;

        let mut output = String::with_capacity(doc.text.len() + 4);
        output.push_str(&doc.text[..auxiliary.end]);
        output.push_str(" not");
        output.push_str(&doc.text[auxiliary.end..]);
        Ok(vec![output])
    }
}

/// Removes negation markers when the sentence carries one.
#[derive(Debug, Default)]
pub struct VexRemoveNegation;

impl VexPerturbation for VexRemoveNegation {
    fn name(&self) -> &'static str {
        "perturb.remove_negation"
    }

    fn perturb(
        &self,
        input: &VexPerturbInput,
        _params: &VexPerturbParams,
        _lexicon: &VexLexicon,
        _rng: &mut SmallRng,
    ) -> Result<Vec<String>> {
        let doc = expect_doc(input, self.name())?;

        let mut variants = Vec::new();
        for token in &doc.tokens {
            if !token.is_negation {
                continue;
            }
            let lower = token.text.to_lowercase();
            if lower == "not" || lower == "never" {
                // drop the token and the space preceding it
                let before = doc.text[..token.start].trim_end();
                let after = &doc.text[token.end..];
                let mut output = String::with_capacity(doc.text.len());
                output.push_str(before);
                output.push_str(if before.is_empty() {
                    after.trim_start()
                } else {
                    after
                });
                variants.push(output);
            } else if lower.ends_with("n't") {
                let mut uncontracted = NT_SPECIAL
                    .iter()
                    .find(|(contracted, _)| *contracted == lower)
                    .map(|(_, auxiliary)| (*auxiliary).to_string())
                    .unwrap_or_else(|| token.text[..token.text.len() - 3].to_string());
                if token.is_title && !uncontracted.is_empty() {
                    let mut chars = uncontracted.chars();
                    if let Some(first) = chars.next() {
                        uncontracted =
                            first.to_uppercase().collect::<String>() + chars.as_str();
                    }
                }
                let mut output = String::with_capacity(doc.text.len());
                output.push_str(&doc.text[..token.start]);
                output.push_str(&uncontracted);
                output.push_str(&doc.text[token.end..]);
                variants.push(output);
            }
        }
        Ok(variants)
    }
}
