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

//! # Generators Module
//!
//! This module contains the counterfactual generator plugins shipped with
//! Vex. Each generator implements the [`crate::generator::VexGenerator`]
//! contract and produces perturbed variants of an input example.
//!
//! ## Generator Categories
//!
//! - **checklist**: Rule-dispatch perturber (typos, contractions, names,
//!   locations, numbers, negation)
//! - **template_expander**: Template-driven generation with fill-in
//!   vocabularies and masked infill
//! - **autocomplete**: Mask-completion generation
//! - **disability**: Disability-language phrase substitution

pub mod autocomplete;
pub mod checklist;
pub mod disability;
pub mod template_expander;

pub use autocomplete::VexAutocompleter;
pub use checklist::VexChecklistPerturber;
pub use disability::VexDisabilityLanguage;
pub use template_expander::VexTemplateExpander;
