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

//! # Vex Core Library
//!
//! This is the main library entry point for the Vex counterfactual
//! generation framework. Vex produces perturbed variants (counterfactuals)
//! of text examples for model-interpretability workflows where a UI
//! compares model predictions on original vs. perturbed inputs.
//!
//! ## Module Overview
//!
//! The library is organized into the following major modules:
//!
//! - **example**: VexExample and related data structures for data rows
//! - **dataset**: Dataset specs declaring which fields carry text
//! - **model**: Opaque model handle for the shared generator contract
//! - **config**: Validated per-call generator configuration
//! - **generator**: The generator plugin trait
//! - **generators**: The built-in counterfactual generators
//! - **rules**: Rule table and dispatch for the checklist perturber
//! - **perturb**: The rule-based text transformations
//! - **template**: Placeholder-template expansion engine with masked infill
//! - **lang**: Lightweight language pipeline (tokenization + annotations)
//! - **lexicon**: Built-in linguistic resource tables
//! - **sample**: Deduplication and sampling helpers
//!
//! ## Quick Start
//!
//! ```rust
//! use vex::{
//!     VexChecklistPerturber, VexDataSpec, VexDataset, VexExample, VexFieldKind,
//!     VexGenerator, VexGeneratorConfig, VexLanguagePipeline, VexNullModel,
//! };
//! use serde_json::json;
//!
//! let pipeline = VexLanguagePipeline::load("en").unwrap();
//! let generator = VexChecklistPerturber::new(pipeline);
//!
//! let dataset = VexDataset::new(
//!     VexDataSpec::new().field("text", VexFieldKind::TextSegment),
//! );
//! let example = VexExample::new().with_field("text", json!("this test is passing"));
//! let config = VexGeneratorConfig::from_value(&json!({"rule_key": "add_negation"})).unwrap();
//!
//! let counterfactuals = generator
//!     .generate(&example, &VexNullModel, &dataset, &config)
//!     .unwrap();
//! assert_eq!(counterfactuals[0].text("text"), Some("this test is not passing"));
//! ```
//!
//! ## Architecture
//!
//! Vex follows a plugin architecture:
//! 1. **Examples**: Data rows with one or more text fields
//! 2. **Generators**: Plugins turning one example into perturbed variants
//! 3. **Rules**: Named perturbation recipes dispatched by the checklist
//!    perturber
//! 4. **Template engine**: Fill-in expansion with masked-infill ranking
//! 5. **Pipelines/Lexicons**: Explicitly constructed language resources,
//!    created once per generator and reused
//!
//! ## Error Handling
//!
//! All operations return `Result<T, VexError>` for explicit error handling.
//! Recoverable rule limitations are a dedicated variant; absence of output,
//! not an error, is the failure signal for inputs a generator cannot
//! perturb.

pub mod config;
pub mod dataset;
pub mod errors;
pub mod example;
pub mod generator;
pub mod generators;
pub mod lang;
pub mod lexicon;
pub mod model;
pub mod perturb;
pub mod rules;
pub mod sample;
pub mod template;

pub use config::VexGeneratorConfig;
pub use dataset::{VexDataSpec, VexDataset, VexFieldKind};
pub use errors::{Result, VexError};
pub use example::{VexExample, VexExampleBatch, VexFields};
pub use generator::VexGenerator;
pub use generators::{
    VexAutocompleter, VexChecklistPerturber, VexDisabilityLanguage, VexTemplateExpander,
};
pub use lang::{VexDoc, VexLanguagePipeline, VexToken, VexTokenKind};
pub use lexicon::VexLexicon;
pub use model::{VexModel, VexNullModel};
pub use rules::{VexInputMode, VexRule, VexRuleSet};
pub use sample::{dedup_preserving_order, sample_up_to, VexReservoir};
pub use template::{
    VexLexiconMaskFiller, VexMaskFiller, VexTemplateEngine, VexTemplateOutput, VexTemplateRequest,
};
