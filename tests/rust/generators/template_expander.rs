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

//! # Vex Generator Tests - Template Expander
//!
//! Tests for template-driven counterfactual generation.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test template_expander
//! ```

use std::collections::HashSet;

use serde_json::json;

use vex::{
    VexDataSpec, VexDataset, VexExample, VexFieldKind, VexGenerator, VexGeneratorConfig,
    VexLexicon, VexNullModel, VexTemplateEngine, VexTemplateExpander,
};

fn dataset() -> VexDataset {
    VexDataset::new(VexDataSpec::new().field("text", VexFieldKind::TextSegment))
}

fn expander() -> VexTemplateExpander {
    VexTemplateExpander::new(VexTemplateEngine::new(VexLexicon::load("en").unwrap()))
}

#[test]
fn missing_template_yields_empty_result() {
    let generator = expander();
    let example = VexExample::new().with_field("text", json!("blank"));
    let config = VexGeneratorConfig::from_value(&json!({})).unwrap();
    let output = generator
        .generate(&example, &VexNullModel, &dataset(), &config)
        .unwrap();
    assert!(output.is_empty());
}

#[test]
fn template_with_vocab_map_generates_capped_unique_output() {
    let generator = expander();
    let example = VexExample::new().with_field("text", json!("blank"));
    let config = VexGeneratorConfig::from_value(&json!({
        "template": "The {food} was {quality}",
        "vocab_map": {
            "food": ["pizza", "soup", "salad"],
            "quality": ["excellent", "awful"]
        },
        "n_per_example": 2,
        "seed": 7
    }))
    .unwrap();
    let output = generator
        .generate(&example, &VexNullModel, &dataset(), &config)
        .unwrap();
    assert!(!output.is_empty());
    assert!(output.len() <= 2);

    let texts: Vec<&str> = output.iter().filter_map(|ex| ex.text("text")).collect();
    let unique: HashSet<&&str> = texts.iter().collect();
    assert_eq!(unique.len(), texts.len());
    for text in texts {
        assert_ne!(text, "blank");
        assert!(text.starts_with("The "));
    }
}

#[test]
fn default_cap_is_three() {
    let generator = expander();
    let example = VexExample::new().with_field("text", json!("blank"));
    let config = VexGeneratorConfig::from_value(&json!({
        "template": "{first_name} waved from {city}",
        "seed": 11
    }))
    .unwrap();
    let output = generator
        .generate(&example, &VexNullModel, &dataset(), &config)
        .unwrap();
    assert!(!output.is_empty());
    assert!(output.len() <= 3);
}

#[test]
fn label_config_is_written_to_outputs() {
    let generator = expander();
    let example = VexExample::new().with_field("text", json!("blank"));
    let config = VexGeneratorConfig::from_value(&json!({
        "template": "The {food} was fine",
        "vocab_map": {"food": ["pizza", "soup"]},
        "label": 1
    }))
    .unwrap();
    let output = generator
        .generate(&example, &VexNullModel, &dataset(), &config)
        .unwrap();
    assert!(!output.is_empty());
    for ex in &output {
        assert_eq!(ex.get("label"), Some(&json!(1)));
    }
}

#[test]
fn generated_text_never_equals_input_field() {
    let generator = expander();
    // input text collides with one of the two possible expansions
    let example = VexExample::new().with_field("text", json!("The pizza was fine"));
    let config = VexGeneratorConfig::from_value(&json!({
        "template": "The {food} was fine",
        "vocab_map": {"food": ["pizza", "soup"]},
        "n_per_example": 10
    }))
    .unwrap();
    let output = generator
        .generate(&example, &VexNullModel, &dataset(), &config)
        .unwrap();
    for ex in &output {
        assert_ne!(ex.text("text"), Some("The pizza was fine"));
    }
}

#[test]
fn other_fields_are_preserved_in_copies() {
    let generator = expander();
    let example = VexExample::new()
        .with_field("text", json!("blank"))
        .with_field("id", json!("row-7"));
    let config = VexGeneratorConfig::from_value(&json!({
        "template": "The {food} was fine",
        "vocab_map": {"food": ["pizza", "soup"]}
    }))
    .unwrap();
    let output = generator
        .generate(&example, &VexNullModel, &dataset(), &config)
        .unwrap();
    assert!(!output.is_empty());
    for ex in &output {
        assert_eq!(ex.get("id"), Some(&json!("row-7")));
    }
    // input example untouched
    assert_eq!(example.text("text"), Some("blank"));
}
