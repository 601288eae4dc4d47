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

//! # Vex Sampling Module
//!
//! Deduplication and sampling helpers shared by the generators:
//!
//! - order-preserving deduplication of generated strings, so downstream
//!   sampling sees a stable sequence;
//! - uniform sampling without replacement down to a requested cardinality;
//! - reservoir sampling for capping the output of batched generation.

use std::collections::HashSet;

use rand::rngs::SmallRng;
use rand::Rng;

/// Removes duplicate strings, keeping the first occurrence of each.
pub fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(items.len());
    let mut output = Vec::with_capacity(items.len());
    for item in items {
        if seen.insert(item.clone()) {
            output.push(item);
        }
    }
    output
}

/// Uniformly samples `n` items without replacement.
///
/// When `n` is at least the candidate count, all items are returned unchanged.
pub fn sample_up_to<T>(rng: &mut SmallRng, mut items: Vec<T>, n: usize) -> Vec<T> {
    if items.len() <= n {
        return items;
    }
    let mut picks = rand::seq::index::sample(rng, items.len(), n).into_vec();
    // remove in reverse index order so removals don't shift pending picks
    picks.sort_unstable();
    let mut output = Vec::with_capacity(n);
    for pick in picks.into_iter().rev() {
        output.push(items.swap_remove(pick));
    }
    output
}

/// Fixed-capacity reservoir for uniform streaming sampling.
///
/// Each offered item has an equal chance of being retained once the stream
/// exceeds the capacity. Retention order is not meaningful.
#[derive(Debug)]
pub struct VexReservoir<T> {
    capacity: usize,
    seen: usize,
    items: Vec<T>,
}

impl<T> VexReservoir<T> {
    /// Constructs a reservoir holding at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            seen: 0,
            items: Vec::with_capacity(capacity.min(1024)),
        }
    }

    /// Offers one item to the reservoir.
    pub fn offer(&mut self, rng: &mut SmallRng, item: T) {
        if self.capacity == 0 {
            self.seen += 1;
            return;
        }
        if self.items.len() < self.capacity {
            self.items.push(item);
        } else {
            let slot = rng.gen_range(0..=self.seen);
            if slot < self.capacity {
                self.items[slot] = item;
            }
        }
        self.seen += 1;
    }

    /// Number of retained items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing has been retained.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of items offered so far.
    pub fn seen(&self) -> usize {
        self.seen
    }

    /// Consumes the reservoir, returning the retained items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}
