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

//! # Vex Language Pipeline
//!
//! Lightweight linguistic pre-processing for the rules that need more than
//! raw text. The pipeline tokenizes with character spans and annotates each
//! token against the lexicon: known first/last name, known location, numeric
//! literal, auxiliary/copula, negation marker.
//!
//! A pipeline is an explicitly constructed dependency: generators receive one
//! at creation time and reuse it across calls. Loading is per language key;
//! a generator asked to work in a different language loads a fresh pipeline
//! for that call.

use regex::Regex;

use crate::errors::Result;
use crate::lexicon::VexLexicon;

/// Token kind after tokenization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VexTokenKind {
    /// Alphabetic or mixed word token.
    Word,
    /// All-digit token.
    Number,
    /// Punctuation token.
    Punct,
}

/// One token with its span and lexicon annotations.
#[derive(Clone, Debug)]
pub struct VexToken {
    /// Token text as it appears in the input.
    pub text: String,
    /// Byte offset of the token start.
    pub start: usize,
    /// Byte offset one past the token end.
    pub end: usize,
    /// Token kind.
    pub kind: VexTokenKind,
    /// True when the token starts with an uppercase letter.
    pub is_title: bool,
    /// Title-cased token found in the first-name table.
    pub is_first_name: bool,
    /// Title-cased token found in the last-name table.
    pub is_last_name: bool,
    /// Title-cased token found in the city/country tables.
    pub is_location: bool,
    /// Token found in the auxiliary/copula table.
    pub is_auxiliary: bool,
    /// Token is a negation marker ("not", "never", or an "n't" form).
    pub is_negation: bool,
}

/// Analyzed text: the original string plus its annotated tokens.
#[derive(Clone, Debug)]
pub struct VexDoc {
    /// Original input text.
    pub text: String,
    /// Annotated tokens in order of appearance.
    pub tokens: Vec<VexToken>,
}

/// Tokenizer plus lexicon annotations for one language.
#[derive(Debug)]
pub struct VexLanguagePipeline {
    language_key: String,
    lexicon: VexLexicon,
    token_pattern: Regex,
}

impl VexLanguagePipeline {
    /// Loads the pipeline and its lexicon for `language_key`.
    pub fn load(language_key: &str) -> Result<Self> {
        log::info!("loading language resources: {}", language_key);
        let lexicon = VexLexicon::load(language_key)?;
        // contractions ("don't", "it's") stay single tokens
        let token_pattern = Regex::new(r"\w+(?:'\w+)?|[^\w\s]").expect("token pattern is valid");
        Ok(Self {
            language_key: language_key.to_string(),
            lexicon,
            token_pattern,
        })
    }

    /// Language key this pipeline was loaded for.
    pub fn language_key(&self) -> &str {
        &self.language_key
    }

    /// The lexicon backing this pipeline.
    pub fn lexicon(&self) -> &VexLexicon {
        &self.lexicon
    }

    /// Tokenizes and annotates `text`.
    pub fn analyze(&self, text: &str) -> VexDoc {
        let mut tokens = Vec::new();
        for found in self.token_pattern.find_iter(text) {
            let token_text = found.as_str();
            let kind = if token_text.chars().all(|c| c.is_ascii_digit()) {
                VexTokenKind::Number
            } else if token_text.chars().any(char::is_alphanumeric) {
                VexTokenKind::Word
            } else {
                VexTokenKind::Punct
            };
            let is_title = token_text
                .chars()
                .next()
                .map(char::is_uppercase)
                .unwrap_or(false);
            let lower = token_text.to_lowercase();
            let is_word = kind == VexTokenKind::Word;
            tokens.push(VexToken {
                text: token_text.to_string(),
                start: found.start(),
                end: found.end(),
                kind,
                is_title,
                is_first_name: is_word && is_title && self.lexicon.is_first_name(token_text),
                is_last_name: is_word && is_title && self.lexicon.is_last_name(token_text),
                is_location: is_word && is_title && self.lexicon.is_location(token_text),
                is_auxiliary: is_word && self.lexicon.is_auxiliary(token_text),
                is_negation: is_word
                    && (lower == "not" || lower == "never" || lower.ends_with("n't")),
            });
        }
        VexDoc {
            text: text.to_string(),
            tokens,
        }
    }
}
