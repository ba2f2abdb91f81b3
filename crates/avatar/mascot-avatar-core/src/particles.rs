//! Decorative particle field.
//!
//! Positions are drawn once at creation from a seeded generator and never
//! move individually; only the shared group transform rotates. Seeding keeps
//! the field reproducible across runs, which the determinism tests rely on.

use serde::{Deserialize, Serialize};

use crate::config::ParticleTuning;

/// Fixed set of decorative points around the rig.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleField {
    positions: Vec<[f32; 3]>,
}

impl ParticleField {
    pub fn new(tuning: &ParticleTuning) -> Self {
        let mut state = tuning.seed | 1;
        let mut positions = Vec::with_capacity(tuning.count);
        for _ in 0..tuning.count {
            positions.push([
                (next_unit(&mut state) - 0.5) * tuning.spread,
                (next_unit(&mut state) - 0.5) * tuning.spread,
                (next_unit(&mut state) - 0.5) * tuning.spread,
            ]);
        }
        Self { positions }
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// xorshift64* step mapped to [0, 1).
fn next_unit(state: &mut u64) -> f32 {
    *state ^= *state << 13;
    *state ^= *state >> 7;
    *state ^= *state << 17;
    let mixed = state.wrapping_mul(0x2545_F491_4F6C_DD1D);
    ((mixed >> 11) as f64 / (1u64 << 53) as f64) as f32
}
