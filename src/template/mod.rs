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

//! # Vex Template Engine
//!
//! Expands placeholder templates into concrete strings. Given one or more
//! template strings, a vocabulary of candidate values per tag, and
//! combination settings, the engine:
//!
//! 1. parses every placeholder tag (including numbered variants, the
//!    indefinite-article modifier, and masked-infill tags);
//! 2. resolves each tag to a fill-in list: request vocabulary first, then
//!    built-in lexicons, then the mask filler for `{mask}` tags;
//! 3. combines the lists via cartesian product, paired zip, or per-tag
//!    sampling when a sample count is requested;
//! 4. formats every combination into a literal string, tolerating missing
//!    tags when configured;
//! 5. suppresses combinations with duplicate fill-ins when configured and
//!    removes duplicate output strings.
//!
//! ## Usage Example
//!
//! ```rust
//! use vex::template::{VexTemplateEngine, VexTemplateRequest};
//! use vex::lexicon::VexLexicon;
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let engine = VexTemplateEngine::new(VexLexicon::load("en").unwrap());
//! let request = VexTemplateRequest::new("{greeting}, {first_name}!")
//!     .vocab_entry("greeting", ["Hello", "Hi"]);
//! let mut rng = SmallRng::seed_from_u64(43);
//! let output = engine.expand(&request, &mut rng).unwrap();
//! assert!(!output.data.is_empty());
//! ```

pub mod format;
pub mod mask;

pub use format::{add_article, find_tags, format_template, strip_number, VexTag};
pub use mask::{VexLexiconMaskFiller, VexMaskFiller};

use std::collections::BTreeMap;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::{Result, VexError};
use crate::lexicon::VexLexicon;
use crate::sample::dedup_preserving_order;

/// Context realizations sampled per mask tag and article variant.
const MASK_CONTEXT_SAMPLES: usize = 5;

/// Cap on distinct contexts handed to the mask filler.
const MAX_MASK_CONTEXTS: usize = 20;

/// Default cap on mask candidates kept per tag.
const DEFAULT_MASK_TOP: usize = 100;

/// Default beam width requested from the mask filler.
const DEFAULT_MASK_BEAM: usize = 100;

/// Cap on cartesian-product combinations per expansion.
const MAX_COMBINATIONS: usize = 10_000;

/// One template expansion request.
#[derive(Clone, Debug)]
pub struct VexTemplateRequest {
    templates: Vec<String>,
    vocab: BTreeMap<String, Vec<String>>,
    nsamples: Option<usize>,
    product: bool,
    remove_duplicates: bool,
    ignore_missing: bool,
    label: Option<i64>,
    meta: bool,
}

impl VexTemplateRequest {
    /// Constructs a request for a single template.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            templates: vec![template.into()],
            vocab: BTreeMap::new(),
            nsamples: None,
            product: true,
            remove_duplicates: false,
            ignore_missing: true,
            label: None,
            meta: false,
        }
    }

    /// Constructs a request for several templates expanded in parallel.
    pub fn with_templates(templates: Vec<String>) -> Self {
        let mut request = Self::new("");
        request.templates = templates;
        request
    }

    /// Replaces the fill-in vocabulary.
    pub fn vocab(mut self, vocab: BTreeMap<String, Vec<String>>) -> Self {
        self.vocab = vocab;
        self
    }

    /// Adds one fill-in list.
    pub fn vocab_entry<I, S>(mut self, tag: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vocab
            .insert(tag.into(), values.into_iter().map(Into::into).collect());
        self
    }

    /// Requests `n` sampled combinations instead of the full product.
    pub fn nsamples(mut self, n: usize) -> Self {
        self.nsamples = Some(n);
        self
    }

    /// Chooses cartesian product (default) or paired zip combination.
    pub fn product(mut self, product: bool) -> Self {
        self.product = product;
        self
    }

    /// Suppresses combinations where two fill-in values are equal.
    pub fn remove_duplicates(mut self, remove: bool) -> Self {
        self.remove_duplicates = remove;
        self
    }

    /// Keeps unresolvable tags literal instead of failing.
    pub fn ignore_missing(mut self, ignore: bool) -> Self {
        self.ignore_missing = ignore;
        self
    }

    /// Attaches a label propagated to every output.
    pub fn label(mut self, label: i64) -> Self {
        self.label = Some(label);
        self
    }

    /// Requests per-output fill-in mappings in the result.
    pub fn meta(mut self, meta: bool) -> Self {
        self.meta = meta;
        self
    }
}

/// Result of one template expansion.
#[derive(Clone, Debug, Default)]
pub struct VexTemplateOutput {
    /// Generated strings, duplicates removed, first-seen order.
    pub data: Vec<String>,
    /// Label per output, when the request carried one.
    pub labels: Option<Vec<i64>>,
    /// Fill-in mapping per output, when requested.
    pub meta: Option<Vec<BTreeMap<String, String>>>,
}

/// Template expansion engine.
#[derive(Debug)]
pub struct VexTemplateEngine {
    lexicon: VexLexicon,
    mask_filler: Box<dyn VexMaskFiller + Send + Sync>,
    mask_beam: usize,
}

impl VexTemplateEngine {
    /// Constructs an engine over the given lexicon with the default filler.
    pub fn new(lexicon: VexLexicon) -> Self {
        Self {
            lexicon,
            mask_filler: Box::new(VexLexiconMaskFiller::new()),
            mask_beam: DEFAULT_MASK_BEAM,
        }
    }

    /// Replaces the mask filler (the masked-language-model seam).
    pub fn with_mask_filler(mut self, filler: Box<dyn VexMaskFiller + Send + Sync>) -> Self {
        self.mask_filler = filler;
        self
    }

    /// Overrides the beam width requested from the mask filler.
    pub fn with_mask_beam(mut self, beam: usize) -> Self {
        self.mask_beam = beam.max(1);
        self
    }

    /// Language key of the engine's lexicon.
    pub fn language_key(&self) -> &str {
        self.lexicon.language_key()
    }

    /// Expands a request into concrete strings.
    pub fn expand(
        &self,
        request: &VexTemplateRequest,
        rng: &mut SmallRng,
    ) -> Result<VexTemplateOutput> {
        if request.templates.is_empty() || request.templates.iter().all(|t| t.is_empty()) {
            return Err(VexError::validation("template request has no templates"));
        }

        // every tag across all templates, unique by name, appearance order
        let mut tags: Vec<VexTag> = Vec::new();
        for template in &request.templates {
            for tag in find_tags(template) {
                if !tags.iter().any(|seen| seen.name == tag.name) {
                    tags.push(tag);
                }
            }
        }

        let mut items: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for tag in tags.iter().filter(|tag| !tag.is_mask()) {
            let fillins = request
                .vocab
                .get(&tag.name)
                .or_else(|| request.vocab.get(&tag.base))
                .cloned()
                .or_else(|| self.lexicon.fillins(&tag.base));
            match fillins {
                Some(values) if !values.is_empty() => {
                    items.insert(tag.name.clone(), values);
                }
                _ if request.ignore_missing => {}
                _ => {
                    return Err(VexError::validation(format!(
                        "no fill-in source for tag '{}'",
                        tag.name
                    )))
                }
            }
        }

        for tag in tags.iter().filter(|tag| tag.is_mask()) {
            let candidates = self.resolve_mask(tag, request, &items, rng)?;
            if candidates.is_empty() {
                if !request.ignore_missing {
                    return Err(VexError::template(format!(
                        "mask filler produced no candidates for tag '{}'",
                        tag.name
                    )));
                }
            } else {
                items.insert(tag.name.clone(), candidates);
            }
        }

        // resolved keys in tag appearance order
        let keys: Vec<String> = tags
            .iter()
            .filter(|tag| items.contains_key(&tag.name))
            .map(|tag| tag.name.clone())
            .collect();
        let vals: Vec<&Vec<String>> = keys.iter().map(|key| &items[key]).collect();

        let combos = combine(&vals, request, rng);

        let mut data = Vec::new();
        let mut meta = Vec::new();
        for combo in combos {
            if request.remove_duplicates && has_duplicate_values(&combo) {
                continue;
            }
            let mapping: BTreeMap<String, String> = keys
                .iter()
                .cloned()
                .zip(combo.iter().cloned())
                .collect();
            for template in &request.templates {
                data.push(format_template(template, &mapping, request.ignore_missing)?);
                meta.push(mapping.clone());
            }
        }

        // expansion invariant: no two output strings are identical
        let (data, meta) = dedup_aligned(data, meta);

        let labels = request.label.map(|label| vec![label; data.len()]);
        Ok(VexTemplateOutput {
            labels,
            meta: if request.meta { Some(meta) } else { None },
            data,
        })
    }

    /// Resolves a mask tag to a ranked candidate list.
    ///
    /// Concrete context realizations are sampled from the rest of the
    /// template (both article variants when the tag asks for one), then the
    /// filler ranks its candidates against them.
    fn resolve_mask(
        &self,
        tag: &VexTag,
        request: &VexTemplateRequest,
        items: &BTreeMap<String, Vec<String>>,
        rng: &mut SmallRng,
    ) -> Result<Vec<String>> {
        let top = tag.top_count().unwrap_or(DEFAULT_MASK_TOP);
        let article_variants: &[&str] = if tag.wants_article() {
            &["a ", "an "]
        } else {
            &[""]
        };

        let mut contexts = Vec::new();
        for template in &request.templates {
            if !template.contains(&tag.raw) {
                continue;
            }
            for article in article_variants {
                let with_mask = template.replace(
                    &tag.raw,
                    &format!("{}{}", article, self.mask_filler.mask_token()),
                );
                for _ in 0..MASK_CONTEXT_SAMPLES {
                    let mut mapping = BTreeMap::new();
                    for (key, values) in items {
                        if let Some(value) = values.choose(rng) {
                            mapping.insert(key.clone(), value.clone());
                        }
                    }
                    contexts.push(format_template(&with_mask, &mapping, true)?);
                }
            }
        }
        let mut contexts = dedup_preserving_order(contexts);
        contexts.truncate(MAX_MASK_CONTEXTS);
        if contexts.is_empty() {
            return Ok(Vec::new());
        }

        let ranked = self.mask_filler.fill(&contexts, self.mask_beam)?;
        Ok(ranked
            .into_iter()
            .map(|(candidate, _)| candidate)
            .take(top)
            .collect())
    }
}

fn has_duplicate_values(combo: &[String]) -> bool {
    for (i, value) in combo.iter().enumerate() {
        if combo[i + 1..].contains(value) {
            return true;
        }
    }
    false
}

/// Combines fill-in lists into concrete value tuples.
///
/// With a sample count: each list is sampled independently (with
/// replacement) and the draws are zipped positionally. Otherwise the full
/// cartesian product, or a paired zip when the request disables products.
fn combine(
    vals: &[&Vec<String>],
    request: &VexTemplateRequest,
    rng: &mut SmallRng,
) -> Vec<Vec<String>> {
    if vals.is_empty() {
        return vec![Vec::new()];
    }

    if let Some(n) = request.nsamples {
        let draws: Vec<Vec<&String>> = vals
            .iter()
            .map(|values| {
                (0..n)
                    .map(|_| &values[rng.gen_range(0..values.len())])
                    .collect()
            })
            .collect();
        return (0..n)
            .map(|i| draws.iter().map(|column| column[i].clone()).collect())
            .collect();
    }

    if !request.product {
        let shortest = vals.iter().map(|values| values.len()).min().unwrap_or(0);
        return (0..shortest)
            .map(|i| vals.iter().map(|values| values[i].clone()).collect())
            .collect();
    }

    let mut combos = Vec::new();
    let mut odometer = vec![0usize; vals.len()];
    loop {
        combos.push(
            odometer
                .iter()
                .zip(vals.iter())
                .map(|(&i, values)| values[i].clone())
                .collect(),
        );
        if combos.len() >= MAX_COMBINATIONS {
            log::debug!(
                "template product truncated at {} combinations",
                MAX_COMBINATIONS
            );
            break;
        }
        let mut position = vals.len();
        loop {
            if position == 0 {
                return combos;
            }
            position -= 1;
            odometer[position] += 1;
            if odometer[position] < vals[position].len() {
                break;
            }
            odometer[position] = 0;
        }
    }
    combos
}

fn dedup_aligned(
    data: Vec<String>,
    meta: Vec<BTreeMap<String, String>>,
) -> (Vec<String>, Vec<BTreeMap<String, String>>) {
    let mut seen = std::collections::HashSet::with_capacity(data.len());
    let mut out_data = Vec::with_capacity(data.len());
    let mut out_meta = Vec::with_capacity(meta.len());
    for (text, mapping) in data.into_iter().zip(meta.into_iter()) {
        if seen.insert(text.clone()) {
            out_data.push(text);
            out_meta.push(mapping);
        }
    }
    (out_data, out_meta)
}
