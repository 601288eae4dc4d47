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

//! # Vex Lexicon Module
//!
//! Built-in linguistic resource tables and the [`VexLexicon`] handle that
//! exposes them for one language. The tables back name/location detection,
//! contraction pairing, negation heuristics, template fill-ins, and the
//! default mask filler vocabulary.
//!
//! The shipped tables cover English only. They are intentionally finite:
//! tokens not present in a table are not recognized, so e.g. names outside
//! the table produce no name perturbations. Callers needing broader coverage
//! supply their own candidate lists through `vocab_map`.

use std::collections::HashSet;

use crate::errors::{Result, VexError};

/// Female first names.
pub const FIRST_NAMES_FEMALE: &[&str] = &[
    "Sarah", "Emma", "Olivia", "Sophia", "Isabella", "Mia", "Charlotte", "Amelia", "Harper",
    "Emily", "Abigail", "Elizabeth", "Sofia", "Ella", "Grace", "Chloe", "Victoria", "Hannah",
    "Natalie", "Lucy",
];

/// Male first names.
pub const FIRST_NAMES_MALE: &[&str] = &[
    "Greg", "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph",
    "Thomas", "Daniel", "Matthew", "Andrew", "Kevin", "Brian", "George", "Edward", "Eric",
    "Peter", "Samuel",
];

/// Last names.
pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Wilson", "Anderson", "Taylor", "Moore", "Jackson", "Thompson", "White",
    "Harris", "Clark", "Walker", "Young", "King",
];

/// City names.
pub const CITIES: &[&str] = &[
    "London", "Paris", "Berlin", "Madrid", "Rome", "Tokyo", "Moscow", "Chicago", "Boston",
    "Seattle", "Toronto", "Sydney", "Dublin", "Vienna", "Prague", "Oslo", "Helsinki", "Lisbon",
    "Athens", "Cairo", "Mumbai", "Beijing", "Seoul", "Denver", "Portland", "Houston", "Atlanta",
    "Miami",
];

/// Country names.
pub const COUNTRIES: &[&str] = &[
    "France", "Germany", "Spain", "Italy", "Japan", "Brazil", "Canada", "Mexico", "Egypt",
    "India", "China", "Norway", "Sweden", "Poland", "Kenya", "Peru", "Chile", "Greece",
    "Portugal", "Ireland",
];

/// Contraction pairs as (expanded, contracted).
pub const CONTRACTION_PAIRS: &[(&str, &str)] = &[
    ("are not", "aren't"),
    ("cannot", "can't"),
    ("could not", "couldn't"),
    ("did not", "didn't"),
    ("does not", "doesn't"),
    ("do not", "don't"),
    ("had not", "hadn't"),
    ("has not", "hasn't"),
    ("have not", "haven't"),
    ("he is", "he's"),
    ("he will", "he'll"),
    ("I am", "I'm"),
    ("I will", "I'll"),
    ("I have", "I've"),
    ("is not", "isn't"),
    ("it is", "it's"),
    ("it will", "it'll"),
    ("let us", "let's"),
    ("she will", "she'll"),
    ("she is", "she's"),
    ("should not", "shouldn't"),
    ("that is", "that's"),
    ("there is", "there's"),
    ("they will", "they'll"),
    ("they are", "they're"),
    ("they have", "they've"),
    ("was not", "wasn't"),
    ("we are", "we're"),
    ("we have", "we've"),
    ("were not", "weren't"),
    ("what is", "what's"),
    ("who is", "who's"),
    ("will not", "won't"),
    ("would not", "wouldn't"),
    ("you will", "you'll"),
    ("you are", "you're"),
    ("you have", "you've"),
];

/// Auxiliaries and copulas recognized by the negation heuristics.
pub const AUXILIARIES: &[&str] = &[
    "is", "are", "was", "were", "am", "be", "been", "being", "do", "does", "did", "has", "have",
    "had", "will", "would", "can", "could", "should", "shall", "may", "might", "must",
];

/// Irregular "n't" contractions as (contracted, auxiliary).
pub const NT_SPECIAL: &[(&str, &str)] = &[
    ("won't", "will"),
    ("can't", "can"),
    ("shan't", "shall"),
    ("ain't", "is"),
];

/// Default mask filler vocabulary as (word, prior score).
///
/// Scores are relative priors, descending; the default filler ranks by them.
pub const MASK_VOCABULARY: &[(&str, f64)] = &[
    ("good", 0.95),
    ("great", 0.92),
    ("nice", 0.90),
    ("bad", 0.88),
    ("happy", 0.85),
    ("small", 0.82),
    ("big", 0.80),
    ("old", 0.78),
    ("new", 0.76),
    ("friend", 0.74),
    ("teacher", 0.72),
    ("doctor", 0.70),
    ("artist", 0.68),
    ("engineer", 0.66),
    ("idea", 0.64),
    ("answer", 0.62),
    ("apple", 0.60),
    ("orange", 0.58),
    ("umbrella", 0.56),
    ("elephant", 0.54),
    ("house", 0.52),
    ("city", 0.50),
    ("book", 0.48),
    ("movie", 0.46),
    ("song", 0.44),
];

/// Lexicon handle for one language.
///
/// Lookup is case-insensitive; fill-in lists keep their original casing.
#[derive(Debug)]
pub struct VexLexicon {
    language_key: String,
    first_names_female: HashSet<String>,
    first_names_male: HashSet<String>,
    last_names: HashSet<String>,
    cities: HashSet<String>,
    countries: HashSet<String>,
    auxiliaries: HashSet<String>,
}

fn lower_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

impl VexLexicon {
    /// Loads the lexicon for `language_key`.
    ///
    /// Only `"en"` resources ship with the crate; other keys are a resource
    /// error.
    pub fn load(language_key: &str) -> Result<Self> {
        if language_key != "en" {
            return Err(VexError::resource(format!(
                "no built-in lexicon for language_key '{}'",
                language_key
            )));
        }
        Ok(Self {
            language_key: language_key.to_string(),
            first_names_female: lower_set(FIRST_NAMES_FEMALE),
            first_names_male: lower_set(FIRST_NAMES_MALE),
            last_names: lower_set(LAST_NAMES),
            cities: lower_set(CITIES),
            countries: lower_set(COUNTRIES),
            auxiliaries: lower_set(AUXILIARIES),
        })
    }

    /// Language key this lexicon was loaded for.
    pub fn language_key(&self) -> &str {
        &self.language_key
    }

    /// True when `word` is a known first name.
    pub fn is_first_name(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.first_names_female.contains(&lower) || self.first_names_male.contains(&lower)
    }

    /// True when `word` is a known female first name.
    pub fn is_female_first_name(&self, word: &str) -> bool {
        self.first_names_female.contains(&word.to_lowercase())
    }

    /// True when `word` is a known last name.
    pub fn is_last_name(&self, word: &str) -> bool {
        self.last_names.contains(&word.to_lowercase())
    }

    /// True when `word` is a known city.
    pub fn is_city(&self, word: &str) -> bool {
        self.cities.contains(&word.to_lowercase())
    }

    /// True when `word` is a known country.
    pub fn is_country(&self, word: &str) -> bool {
        self.countries.contains(&word.to_lowercase())
    }

    /// True when `word` is a known location (city or country).
    pub fn is_location(&self, word: &str) -> bool {
        self.is_city(word) || self.is_country(word)
    }

    /// True when `word` is an auxiliary or copula.
    pub fn is_auxiliary(&self, word: &str) -> bool {
        self.auxiliaries.contains(&word.to_lowercase())
    }

    /// Built-in fill-in candidates for a template tag, if the tag is known.
    pub fn fillins(&self, tag: &str) -> Option<Vec<String>> {
        let owned = |words: &[&str]| words.iter().map(|w| w.to_string()).collect();
        match tag {
            "first_name" => {
                let mut names: Vec<String> = owned(FIRST_NAMES_FEMALE);
                names.extend(FIRST_NAMES_MALE.iter().map(|w| w.to_string()));
                Some(names)
            }
            "female" => Some(owned(FIRST_NAMES_FEMALE)),
            "male" => Some(owned(FIRST_NAMES_MALE)),
            "last_name" => Some(owned(LAST_NAMES)),
            "city" => Some(owned(CITIES)),
            "country" => Some(owned(COUNTRIES)),
            _ => None,
        }
    }
}
