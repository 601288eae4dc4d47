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

//! # Vex Core Tests - Sample
//!
//! Tests for the deduplication and sampling helpers shared by the
//! generators.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test sample
//! ```

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use vex::sample::{dedup_preserving_order, sample_up_to, VexReservoir};

#[test]
fn dedup_keeps_first_occurrence_order() {
    let input = vec![
        "b".to_string(),
        "a".to_string(),
        "b".to_string(),
        "c".to_string(),
        "a".to_string(),
    ];
    assert_eq!(
        dedup_preserving_order(input),
        vec!["b".to_string(), "a".to_string(), "c".to_string()]
    );
}

#[test]
fn dedup_empty_input() {
    assert!(dedup_preserving_order(Vec::new()).is_empty());
}

#[test]
fn sample_up_to_returns_all_when_under_cap() {
    let mut rng = SmallRng::seed_from_u64(43);
    let items = vec![1, 2, 3];
    assert_eq!(sample_up_to(&mut rng, items, 5), vec![1, 2, 3]);
}

#[test]
fn sample_up_to_caps_without_replacement() {
    let mut rng = SmallRng::seed_from_u64(43);
    let items: Vec<usize> = (0..100).collect();
    let sampled = sample_up_to(&mut rng, items, 10);
    assert_eq!(sampled.len(), 10);
    let unique: HashSet<usize> = sampled.iter().copied().collect();
    assert_eq!(unique.len(), 10, "sampling must be without replacement");
    assert!(sampled.iter().all(|item| *item < 100));
}

#[test]
fn reservoir_caps_stream() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut reservoir = VexReservoir::new(10);
    for item in 0..100 {
        reservoir.offer(&mut rng, item);
    }
    assert_eq!(reservoir.len(), 10);
    assert_eq!(reservoir.seen(), 100);
    let items = reservoir.into_items();
    let unique: HashSet<i32> = items.iter().copied().collect();
    assert_eq!(unique.len(), 10);
}

#[test]
fn reservoir_keeps_short_stream_whole() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut reservoir = VexReservoir::new(10);
    for item in 0..4 {
        reservoir.offer(&mut rng, item);
    }
    let mut items = reservoir.into_items();
    items.sort_unstable();
    assert_eq!(items, vec![0, 1, 2, 3]);
}

#[test]
fn zero_capacity_reservoir_keeps_nothing() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut reservoir = VexReservoir::new(0);
    for item in 0..5 {
        reservoir.offer(&mut rng, item);
    }
    assert!(reservoir.is_empty());
    assert_eq!(reservoir.seen(), 5);
}

proptest! {
    /// Dedup output never contains two equal strings and is idempotent.
    #[test]
    fn dedup_output_is_unique(input in proptest::collection::vec("[a-c]{0,2}", 0..40)) {
        let deduped = dedup_preserving_order(input);
        let unique: HashSet<String> = deduped.iter().cloned().collect();
        prop_assert_eq!(unique.len(), deduped.len());
        let again = dedup_preserving_order(deduped.clone());
        prop_assert_eq!(again, deduped);
    }

    /// Sampling respects the cap and draws only existing items.
    #[test]
    fn sample_respects_cap(
        items in proptest::collection::vec(0usize..1000, 0..60),
        n in 0usize..80,
        seed in any::<u64>(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let pool: HashSet<usize> = items.iter().copied().collect();
        let sampled = sample_up_to(&mut rng, items.clone(), n);
        prop_assert_eq!(sampled.len(), n.min(items.len()));
        prop_assert!(sampled.iter().all(|item| pool.contains(item)));
    }
}
