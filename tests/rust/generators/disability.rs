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

//! # Vex Generator Tests - Disability Language
//!
//! Tests for pronoun-span phrase substitution and metadata tagging.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test disability
//! ```

use std::collections::HashSet;

use serde_json::json;

use vex::{
    VexDataSpec, VexDataset, VexDisabilityLanguage, VexExample, VexFieldKind, VexGenerator,
    VexGeneratorConfig, VexNullModel,
};

fn dataset() -> VexDataset {
    VexDataset::new(VexDataSpec::new().field("text", VexFieldKind::TextSegment))
}

fn generate(input_text: &str) -> Vec<VexExample> {
    let generator = VexDisabilityLanguage::new();
    let example = VexExample::new().with_field("text", json!(input_text));
    let config = VexGeneratorConfig::from_value(&json!({})).unwrap();
    generator
        .generate(&example, &VexNullModel, &dataset(), &config)
        .unwrap()
}

#[test]
fn matched_pronoun_fans_out_over_all_phrases() {
    let output = generate("he is tall");
    // 5 + 3 + 8 + 2 + 8 phrases across the rule table
    assert_eq!(output.len(), 26);

    let texts: HashSet<&str> = output.iter().filter_map(|ex| ex.text("text")).collect();
    assert_eq!(texts.len(), output.len());
    assert!(texts.contains("a deaf person is tall"));
    assert!(texts.contains("a wheelchair user is tall"));
    for text in &texts {
        assert_ne!(*text, "he is tall");
        assert!(text.ends_with(" is tall"));
    }
}

#[test]
fn outputs_carry_meta_key_and_style() {
    let output = generate("she is tall");
    assert!(!output.is_empty());
    let mut styles = HashSet::new();
    for ex in &output {
        assert!(ex.get("meta_key").is_some());
        let style = ex.get("meta_style").and_then(|v| v.as_str()).unwrap();
        assert!(style == "recommended" || style == "non_recommended");
        styles.insert(style.to_string());
    }
    // both phrase lists are represented, each under its own style tag
    assert_eq!(styles.len(), 2);
}

#[test]
fn style_tag_matches_phrase_list() {
    let output = generate("he is tall");
    for ex in &output {
        let text = ex.text("text").unwrap();
        let style = ex.get("meta_style").and_then(|v| v.as_str()).unwrap();
        if text.starts_with("a person with a disability") {
            assert_eq!(style, "recommended");
        }
        if text.starts_with("the disabled") {
            assert_eq!(style, "non_recommended");
        }
    }
}

#[test]
fn unmatched_text_yields_nothing() {
    assert!(generate("The cat sat on the mat").is_empty());
    // matching is token-level, not substring-level
    assert!(generate("the shed is red").is_empty());
}

#[test]
fn each_pronoun_occurrence_fans_out() {
    let output = generate("he said she agreed");
    // two matched spans, 26 phrases each, all sentences distinct
    assert_eq!(output.len(), 52);
}
