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

//! # Perturbations Module
//!
//! This module contains the rule-based text transformations dispatched by the
//! checklist perturber. Each perturbation takes one input (raw text or an
//! analyzed document, depending on its declared input mode) and returns the
//! perturbed variants it can produce, or an empty list when the input offers
//! nothing to perturb.
//!
//! ## Perturbation Categories
//!
//! - **typos**: Adjacent-character transposition
//! - **contractions**: Table-driven contraction and expansion
//! - **names**: Person-name substitution (first/last)
//! - **location**: City and country substitution
//! - **number**: Integer literal substitution
//! - **negation**: Negation insertion and removal

pub mod contractions;
pub mod location;
pub mod names;
pub mod negation;
pub mod number;
pub mod typos;

pub use contractions::{VexContract, VexExpandContractions};
pub use location::VexChangeLocation;
pub use names::VexChangeNames;
pub use negation::{VexAddNegation, VexRemoveNegation};
pub use number::VexChangeNumber;
pub use typos::VexAddTypos;

use rand::rngs::SmallRng;

use crate::errors::Result;
use crate::lang::VexDoc;
use crate::lexicon::VexLexicon;

/// Parameter mapping attached to a rule.
///
/// The recognized options are fixed; rules that take no parameters use the
/// default.
#[derive(Clone, Copy, Debug, Default)]
pub struct VexPerturbParams {
    /// Restrict name substitution to first names.
    pub first_only: bool,
    /// Restrict name substitution to last names.
    pub last_only: bool,
}

/// Input handed to a perturbation, shaped per its rule's input mode.
#[derive(Debug)]
pub enum VexPerturbInput<'a> {
    /// Raw text, for rules that work on the surface string.
    Text(&'a str),
    /// Analyzed document, for rules that need token annotations.
    Doc(&'a VexDoc),
}

impl<'a> VexPerturbInput<'a> {
    /// The surface text regardless of shaping.
    pub fn text(&self) -> &str {
        match self {
            VexPerturbInput::Text(text) => text,
            VexPerturbInput::Doc(doc) => &doc.text,
        }
    }
}

/// One rule-based text transformation.
pub trait VexPerturbation: std::fmt::Debug {
    /// Unique, human-readable name for the perturbation.
    fn name(&self) -> &'static str;

    /// Produces perturbed variants of the input.
    ///
    /// Returns an empty list when the input offers nothing to perturb. A
    /// perturbation with a documented limitation returns
    /// [`crate::errors::VexError::RuleLimitation`] for inputs it declines;
    /// the dispatch layer decides whether that is recoverable.
    fn perturb(
        &self,
        input: &VexPerturbInput,
        params: &VexPerturbParams,
        lexicon: &VexLexicon,
        rng: &mut SmallRng,
    ) -> Result<Vec<String>>;
}
