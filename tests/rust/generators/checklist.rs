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

//! # Vex Generator Tests - Checklist Perturber
//!
//! Tests for rule dispatch, the per-rule failure policy, deduplication, and
//! output cardinality caps.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test checklist
//! ```

use std::collections::HashSet;

use serde_json::json;

use vex::{
    VexChecklistPerturber, VexDataSpec, VexDataset, VexExample, VexFieldKind, VexGenerator,
    VexGeneratorConfig, VexLanguagePipeline, VexNullModel,
};

fn dataset() -> VexDataset {
    VexDataset::new(VexDataSpec::new().field("text", VexFieldKind::TextSegment))
}

fn perturber() -> VexChecklistPerturber {
    VexChecklistPerturber::new(VexLanguagePipeline::load("en").unwrap())
}

fn generate(input_text: &str, config: serde_json::Value) -> Vec<String> {
    let generator = perturber();
    let example = VexExample::new().with_field("text", json!(input_text));
    let config = VexGeneratorConfig::from_value(&config).unwrap();
    let examples = generator
        .generate(&example, &VexNullModel, &dataset(), &config)
        .unwrap();
    examples
        .iter()
        .map(|ex| ex.text("text").unwrap().to_string())
        .collect()
}

#[test]
fn add_negation() {
    assert_eq!(
        generate("this test is passing", json!({"rule_key": "add_negation"})),
        vec!["this test is not passing".to_string()]
    );
    assert_eq!(
        generate("Python is awesome.", json!({"rule_key": "add_negation"})),
        vec!["Python is not awesome.".to_string()]
    );
    assert_eq!(
        generate(
            "Python is awesome and TypeScript is too.",
            json!({"rule_key": "add_negation"})
        ),
        vec!["Python is not awesome and TypeScript is too.".to_string()]
    );
}

#[test]
fn add_negation_on_negated_sentence_yields_nothing() {
    assert_eq!(
        generate("this is not cool", json!({"rule_key": "add_negation"})),
        Vec::<String>::new()
    );
}

#[test]
fn add_negation_without_auxiliary_yields_nothing() {
    assert_eq!(
        generate("they know their audience", json!({"rule_key": "add_negation"})),
        Vec::<String>::new()
    );
}

#[test]
fn remove_negation() {
    assert_eq!(
        generate("this is not cool", json!({"rule_key": "remove_negation"})),
        vec!["this is cool".to_string()]
    );
    assert_eq!(
        generate("Sarah isn't in Paris", json!({"rule_key": "remove_negation"})),
        vec!["Sarah is in Paris".to_string()]
    );
}

#[test]
fn unknown_rule_key_yields_nothing() {
    assert_eq!(
        generate("this test is passing", json!({"rule_key": "no_such_rule"})),
        Vec::<String>::new()
    );
}

#[test]
fn change_names_front() {
    let perturbations = generate("Sarah says hello", json!({"rule_key": "change_names"}));
    assert!(!perturbations.is_empty());
    assert!(perturbations.len() <= 10);
    for perturbation in &perturbations {
        let words: Vec<&str> = perturbation.split(' ').collect();
        assert_ne!(words[0], "Sarah");
        assert_eq!(words[1..].join(" "), "says hello");
    }
}

#[test]
fn change_names_multiple() {
    let perturbations = generate(
        "Sarah says hello to Greg",
        json!({"rule_key": "change_names"}),
    );
    assert!(!perturbations.is_empty());
    for perturbation in &perturbations {
        let words: Vec<&str> = perturbation.split(' ').collect();
        assert_ne!(words[0], "Sarah");
        assert_ne!(*words.last().unwrap(), "Greg");
        assert_eq!(words[1..words.len() - 1].join(" "), "says hello to");
    }
}

// names outside the lexicon are not detected; documents the coverage limit
#[test]
fn change_names_outside_lexicon_yields_nothing() {
    assert_eq!(
        generate(
            "Ayodele says hello to Tyreek",
            json!({"rule_key": "change_names"})
        ),
        Vec::<String>::new()
    );
}

#[test]
fn change_location_swaps_cities() {
    let perturbations = generate("I moved to Paris", json!({"rule_key": "change_location"}));
    assert!(!perturbations.is_empty());
    for perturbation in &perturbations {
        assert!(perturbation.starts_with("I moved to "));
        assert!(!perturbation.contains("Paris"));
    }
}

#[test]
fn change_number_perturbs_multi_digit_literals() {
    let perturbations = generate(
        "She waited 42 days",
        json!({"rule_key": "change_number"}),
    );
    assert!(!perturbations.is_empty());
    for perturbation in &perturbations {
        assert!(perturbation.starts_with("She waited "));
        assert!(perturbation.ends_with(" days"));
        assert!(!perturbation.contains(" 42 "));
    }
}

#[test]
fn contractions_rules_swap_both_directions() {
    let contracted = generate("it is what it is", json!({"rule_key": "contractions"}));
    assert!(contracted.contains(&"it's what it's".to_string()));

    let expanded = generate(
        "Sarah isn't in Paris",
        json!({"rule_key": "expand_contractions"}),
    );
    assert!(expanded.contains(&"Sarah is not in Paris".to_string()));
}

#[test]
fn output_never_echoes_the_input() {
    let input = "Sarah isn't in Paris";
    let perturbations = generate(input, json!({}));
    assert!(!perturbations.is_empty());
    for perturbation in &perturbations {
        assert_ne!(perturbation, input);
    }
}

#[test]
fn output_contains_no_duplicates() {
    let perturbations = generate("Sarah says hello to Greg in Paris", json!({}));
    let unique: HashSet<&String> = perturbations.iter().collect();
    assert_eq!(unique.len(), perturbations.len());
}

#[test]
fn n_per_example_caps_output() {
    let config = json!({"rule_key": "change_names", "n_per_example": 2, "seed": 7});
    let perturbations = generate("Sarah says hello to Greg", config);
    assert!(perturbations.len() <= 2);
}

#[test]
fn default_cap_applies_across_rules() {
    let perturbations = generate("Sarah says hello to Greg in Paris", json!({}));
    assert!(perturbations.len() <= 10);
}

#[test]
fn unrecognized_config_key_is_rejected() {
    assert!(VexGeneratorConfig::from_value(&json!({"rule_keyy": "add_typos"})).is_err());
}

#[test]
fn generate_all_respects_reservoir_cap() {
    let generator = perturber();
    let config = VexGeneratorConfig::from_value(&json!({"n_max_samples": 5})).unwrap();
    let examples: Vec<VexExample> = (0..4)
        .map(|i| {
            VexExample::new().with_field(
                "text",
                json!(format!("Sarah says hello to Greg in Paris {}", i)),
            )
        })
        .collect();
    let groups = generator
        .generate_all(&examples, &VexNullModel, &dataset(), &config)
        .unwrap();
    assert_eq!(groups.len(), examples.len());
    let total: usize = groups.iter().map(Vec::len).sum();
    assert!(total <= 5);
    assert!(total > 0);
}
