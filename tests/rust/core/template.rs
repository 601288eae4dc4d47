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

//! # Vex Core Tests - Template Engine
//!
//! Tests for tag parsing, fill-in combination, mask resolution, and
//! string-safe formatting.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test template
//! ```

use std::collections::HashSet;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use vex::lexicon::VexLexicon;
use vex::template::{add_article, find_tags, strip_number, VexTemplateEngine, VexTemplateRequest};

fn engine() -> VexTemplateEngine {
    VexTemplateEngine::new(VexLexicon::load("en").unwrap())
}

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(43)
}

#[test]
fn find_tags_parses_options_and_numbers() {
    let tags = find_tags("{greeting}, {a:person1} met {t5:mask}.");
    assert_eq!(tags.len(), 3);

    assert_eq!(tags[0].name, "greeting");
    assert_eq!(tags[0].base, "greeting");
    assert!(!tags[0].wants_article());

    assert_eq!(tags[1].name, "person1");
    assert_eq!(tags[1].base, "person");
    assert!(tags[1].wants_article());

    assert_eq!(tags[2].name, "mask");
    assert!(tags[2].is_mask());
    assert_eq!(tags[2].top_count(), Some(5));
}

#[test]
fn strip_number_handles_plain_and_numbered() {
    assert_eq!(strip_number("person"), "person");
    assert_eq!(strip_number("person12"), "person");
    assert_eq!(strip_number("42"), "42");
}

#[test]
fn add_article_initial_letter() {
    assert_eq!(add_article("apple"), "an");
    assert_eq!(add_article("pear"), "a");
    assert_eq!(add_article("Orange"), "an");
}

#[test]
fn cartesian_product_expansion() {
    let request = VexTemplateRequest::new("{x} {y}")
        .vocab_entry("x", ["1", "2"])
        .vocab_entry("y", ["a", "b"]);
    let output = engine().expand(&request, &mut rng()).unwrap();
    let expected: HashSet<&str> = ["1 a", "1 b", "2 a", "2 b"].into_iter().collect();
    let got: HashSet<&str> = output.data.iter().map(String::as_str).collect();
    assert_eq!(got, expected);
}

#[test]
fn zip_expansion_stops_at_shortest() {
    let request = VexTemplateRequest::new("{x} {y}")
        .vocab_entry("x", ["1", "2", "3"])
        .vocab_entry("y", ["a", "b"])
        .product(false);
    let output = engine().expand(&request, &mut rng()).unwrap();
    assert_eq!(output.data, vec!["1 a".to_string(), "2 b".to_string()]);
}

#[test]
fn numbered_tags_share_base_list_but_vary() {
    let request = VexTemplateRequest::new("{color} and {color1}")
        .vocab_entry("color", ["red", "blue"])
        .remove_duplicates(true);
    let output = engine().expand(&request, &mut rng()).unwrap();
    let expected: HashSet<&str> = ["red and blue", "blue and red"].into_iter().collect();
    let got: HashSet<&str> = output.data.iter().map(String::as_str).collect();
    assert_eq!(got, expected);
}

#[test]
fn duplicate_fill_ins_survive_without_remove_duplicates() {
    let request = VexTemplateRequest::new("{color} and {color1}")
        .vocab_entry("color", ["red", "blue"]);
    let output = engine().expand(&request, &mut rng()).unwrap();
    assert!(output.data.contains(&"red and red".to_string()));
    assert_eq!(output.data.len(), 4);
}

#[test]
fn missing_tag_stays_literal_when_ignored() {
    let request = VexTemplateRequest::new("Hello {nobody}!");
    let output = engine().expand(&request, &mut rng()).unwrap();
    assert_eq!(output.data, vec!["Hello {nobody}!".to_string()]);
}

#[test]
fn missing_tag_fails_when_not_ignored() {
    let request = VexTemplateRequest::new("Hello {nobody}!").ignore_missing(false);
    assert!(engine().expand(&request, &mut rng()).is_err());
}

#[test]
fn article_tag_agrees_with_value() {
    let request = VexTemplateRequest::new("I ate {a:fruit}")
        .vocab_entry("fruit", ["apple", "pear"]);
    let output = engine().expand(&request, &mut rng()).unwrap();
    let got: HashSet<&str> = output.data.iter().map(String::as_str).collect();
    let expected: HashSet<&str> = ["I ate an apple", "I ate a pear"].into_iter().collect();
    assert_eq!(got, expected);
}

#[test]
fn builtin_lexicon_backs_known_tags() {
    let request = VexTemplateRequest::new("{first_name} went home").nsamples(4);
    let output = engine().expand(&request, &mut rng()).unwrap();
    assert!(!output.data.is_empty());
    assert!(output.data.len() <= 4);
    for text in &output.data {
        assert!(text.ends_with(" went home"));
    }
}

#[test]
fn nsamples_caps_and_stays_unique() {
    let request = VexTemplateRequest::new("{x}-{y}")
        .vocab_entry("x", ["1", "2", "3", "4", "5"])
        .vocab_entry("y", ["a", "b", "c", "d", "e"])
        .nsamples(6);
    let output = engine().expand(&request, &mut rng()).unwrap();
    assert!(output.data.len() <= 6);
    let unique: HashSet<&String> = output.data.iter().collect();
    assert_eq!(unique.len(), output.data.len(), "expansion output must be unique");
}

#[test]
fn mask_tag_resolves_through_filler() {
    let request = VexTemplateRequest::new("The weather is {t5:mask} today");
    let output = engine().expand(&request, &mut rng()).unwrap();
    assert_eq!(output.data.len(), 5);
    for text in &output.data {
        assert!(text.starts_with("The weather is "));
        assert!(text.ends_with(" today"));
        assert!(!text.contains("{"), "mask tag must be resolved: {}", text);
    }
}

#[test]
fn mask_article_tag_prepends_agreeing_article() {
    let request = VexTemplateRequest::new("That is {a:mask}");
    let output = engine().expand(&request, &mut rng()).unwrap();
    assert!(!output.data.is_empty());
    for text in &output.data {
        let agrees = text.starts_with("That is a ") || text.starts_with("That is an ");
        assert!(agrees, "expected an article in: {}", text);
        if text.starts_with("That is an ") {
            let word = text.trim_start_matches("That is an ");
            assert!(
                matches!(word.chars().next(), Some('a' | 'e' | 'i' | 'o' | 'u')),
                "article disagrees in: {}",
                text
            );
        }
    }
}

#[test]
fn label_propagates_to_every_output() {
    let request = VexTemplateRequest::new("{x} here")
        .vocab_entry("x", ["1", "2"])
        .label(1);
    let output = engine().expand(&request, &mut rng()).unwrap();
    assert_eq!(output.labels, Some(vec![1, 1]));
}

#[test]
fn meta_records_fill_in_values() {
    let request = VexTemplateRequest::new("{x} here")
        .vocab_entry("x", ["1", "2"])
        .meta(true);
    let output = engine().expand(&request, &mut rng()).unwrap();
    let meta = output.meta.expect("meta requested");
    assert_eq!(meta.len(), output.data.len());
    for (text, mapping) in output.data.iter().zip(meta.iter()) {
        assert!(text.starts_with(mapping.get("x").unwrap().as_str()));
    }
}

#[test]
fn empty_request_is_rejected() {
    let request = VexTemplateRequest::with_templates(Vec::new());
    assert!(engine().expand(&request, &mut rng()).is_err());
}
