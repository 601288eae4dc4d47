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

//! # Vex Generator Tests - Autocompleter
//!
//! Tests for mask-completion generation.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test autocomplete
//! ```

use std::collections::HashSet;

use serde_json::json;

use vex::{
    VexAutocompleter, VexDataSpec, VexDataset, VexExample, VexFieldKind, VexGenerator,
    VexGeneratorConfig, VexLexicon, VexNullModel, VexTemplateEngine,
};

fn dataset() -> VexDataset {
    VexDataset::new(VexDataSpec::new().field("text", VexFieldKind::TextSegment))
}

fn autocompleter() -> VexAutocompleter {
    VexAutocompleter::new(VexTemplateEngine::new(VexLexicon::load("en").unwrap()))
}

#[test]
fn missing_template_yields_empty_result() {
    let generator = autocompleter();
    let example = VexExample::new().with_field("text", json!("blank"));
    let config = VexGeneratorConfig::from_value(&json!({})).unwrap();
    let output = generator
        .generate(&example, &VexNullModel, &dataset(), &config)
        .unwrap();
    assert!(output.is_empty());
}

#[test]
fn mask_completions_are_capped_and_unique() {
    let generator = autocompleter();
    let example = VexExample::new().with_field("text", json!("blank"));
    let config = VexGeneratorConfig::from_value(&json!({
        "template": "The weather is {mask}",
        "n_per_example": 4,
        "seed": 3
    }))
    .unwrap();
    let output = generator
        .generate(&example, &VexNullModel, &dataset(), &config)
        .unwrap();
    assert_eq!(output.len(), 4);

    let texts: Vec<&str> = output.iter().filter_map(|ex| ex.text("text")).collect();
    let unique: HashSet<&&str> = texts.iter().collect();
    assert_eq!(unique.len(), texts.len());
    for text in texts {
        assert!(text.starts_with("The weather is "));
        assert!(!text.contains("{mask}"));
    }
}

#[test]
fn default_cap_is_ten() {
    let generator = autocompleter();
    let example = VexExample::new().with_field("text", json!("blank"));
    let config = VexGeneratorConfig::from_value(&json!({
        "template": "My neighbor is {a:mask}"
    }))
    .unwrap();
    let output = generator
        .generate(&example, &VexNullModel, &dataset(), &config)
        .unwrap();
    assert!(!output.is_empty());
    assert!(output.len() <= 10);
}
