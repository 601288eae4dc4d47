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

use rand::rngs::SmallRng;
use rand::Rng;

use crate::errors::Result;
use crate::lexicon::VexLexicon;
use crate::perturb::{VexPerturbInput, VexPerturbParams, VexPerturbation};

/// Injects typos by transposing adjacent characters at random positions.
#[derive(Debug)]
pub struct VexAddTypos {
    typos: usize,
}

impl VexAddTypos {
    /// Constructs the perturbation with `typos` transpositions per variant.
    pub fn new(typos: usize) -> Self {
        Self {
            typos: typos.max(1),
        }
    }
}

impl Default for VexAddTypos {
    fn default() -> Self {
        Self::new(1)
    }
}

impl VexPerturbation for VexAddTypos {
    fn name(&self) -> &'static str {
        "perturb.add_typos"
    }

    fn perturb(
        &self,
        input: &VexPerturbInput,
        _params: &VexPerturbParams,
        _lexicon: &VexLexicon,
        rng: &mut SmallRng,
    ) -> Result<Vec<String>> {
        let mut chars: Vec<char> = input.text().chars().collect();
        if chars.len() < 2 {
            return Ok(Vec::new());
        }
        for _ in 0..self.typos {
            let swap = rng.gen_range(0..chars.len() - 1);
            chars.swap(swap, swap + 1);
        }
        Ok(vec![chars.into_iter().collect()])
    }
}
