// ABOUTME: Seeded pseudo-random source threaded through every weighted choice
// ABOUTME: ChaCha8 keeps output identical across platforms for the same seed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::{Builder, Uuid};

/// Deterministic random source for one generation call
#[derive(Debug, Clone)]
pub struct SessionRng {
    rng: ChaCha8Rng,
}

impl SessionRng {
    /// Create a source from an explicit seed
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform value in `[0, 1)`
    pub fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Plan identifier drawn from the stream
    pub fn plan_id(&mut self) -> Uuid {
        let mut bytes = [0_u8; 16];
        self.rng.fill_bytes(&mut bytes);
        Builder::from_random_bytes(bytes).into_uuid()
    }

    /// Pick an index with probability proportional to its weight
    ///
    /// Non-finite and non-positive weights never win. Returns `None` for an empty
    /// slice; if every weight is unusable the first index is returned so a
    /// non-empty pool always yields a pick.
    pub fn weighted_index(&mut self, weights: &[f64]) -> Option<usize> {
        if weights.is_empty() {
            return None;
        }
        let usable = |w: f64| if w.is_finite() && w > 0.0 { w } else { 0.0 };
        let total: f64 = weights.iter().map(|w| usable(*w)).sum();
        if total <= 0.0 {
            return Some(0);
        }

        let target = self.next_unit() * total;
        let mut cumulative = 0.0;
        let mut last_usable = 0;
        for (index, weight) in weights.iter().enumerate() {
            let weight = usable(*weight);
            if weight <= 0.0 {
                continue;
            }
            cumulative += weight;
            last_usable = index;
            if target < cumulative {
                return Some(index);
            }
        }
        Some(last_usable)
    }
}
