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

//! Masked-infill candidate ranking.
//!
//! The engine resolves `{mask}` tags by handing a set of concrete context
//! sentences (with the mask position marked) to a [`VexMaskFiller`], which
//! ranks candidate fill-ins. The seam is where a masked language model plugs
//! in; the default implementation ranks a built-in vocabulary by prior score,
//! filtered for indefinite-article agreement with the contexts.

use crate::errors::Result;
use crate::lexicon::MASK_VOCABULARY;

/// Ranks candidate fill-ins for masked positions.
pub trait VexMaskFiller: std::fmt::Debug {
    /// Token marking the masked position in context sentences.
    fn mask_token(&self) -> &str;

    /// Ranks candidates across the given contexts.
    ///
    /// Returns (candidate, score) pairs in descending score order, at most
    /// `beam` entries.
    fn fill(&self, contexts: &[String], beam: usize) -> Result<Vec<(String, f64)>>;
}

/// Deterministic lexicon-backed filler used when no model is plugged in.
#[derive(Debug)]
pub struct VexLexiconMaskFiller {
    vocabulary: Vec<(String, f64)>,
}

impl VexLexiconMaskFiller {
    /// Constructs the filler over the built-in vocabulary.
    pub fn new() -> Self {
        Self {
            vocabulary: MASK_VOCABULARY
                .iter()
                .map(|(word, score)| (word.to_string(), *score))
                .collect(),
        }
    }

    /// Constructs the filler over a caller-supplied vocabulary.
    ///
    /// Entries are (candidate, prior score); ranking sorts by score.
    pub fn with_vocabulary(vocabulary: Vec<(String, f64)>) -> Self {
        Self { vocabulary }
    }

    /// Articles appearing immediately before the mask token across contexts.
    fn preceding_articles(&self, contexts: &[String]) -> Vec<String> {
        let mut articles = Vec::new();
        for context in contexts {
            let words: Vec<&str> = context.split_whitespace().collect();
            for pair in words.windows(2) {
                if pair[1].starts_with(self.mask_token()) {
                    let before = pair[0].to_lowercase();
                    if (before == "a" || before == "an") && !articles.contains(&before) {
                        articles.push(before);
                    }
                }
            }
        }
        articles
    }
}

impl Default for VexLexiconMaskFiller {
    fn default() -> Self {
        Self::new()
    }
}

fn vowel_initial(word: &str) -> bool {
    matches!(
        word.chars().next().map(|c| c.to_ascii_lowercase()),
        Some('a') | Some('e') | Some('i') | Some('o') | Some('u')
    )
}

impl VexMaskFiller for VexLexiconMaskFiller {
    fn mask_token(&self) -> &str {
        "[MASK]"
    }

    fn fill(&self, contexts: &[String], beam: usize) -> Result<Vec<(String, f64)>> {
        let articles = self.preceding_articles(contexts);
        let mut ranked: Vec<(String, f64)> = self
            .vocabulary
            .iter()
            .filter(|(word, _)| {
                if articles.is_empty() {
                    return true;
                }
                let article = if vowel_initial(word) { "an" } else { "a" };
                articles.iter().any(|seen| seen == article)
            })
            .cloned()
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(beam);
        Ok(ranked)
    }
}
