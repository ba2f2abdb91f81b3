//! Interpolation helpers:
//! - lerp_f32 (plain linear blend)
//! - smoothing_alpha (fixed per-frame factor, or half-life converted by dt)
//! - wrap_phase (fold a phase into [0, 2π) so periodic functions stay
//!   well-conditioned over long runtimes)

use std::f64::consts::TAU;

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Per-frame interpolation weight for a smoothed channel.
///
/// With `half_life = None` this is the fixed factor: the channel covers
/// `factor` of the remaining distance each frame, regardless of dt. With a
/// half-life set, the weight is derived from elapsed real time so the decay
/// rate is independent of frame cadence: `1 - 0.5^(dt / half_life)`.
#[inline]
pub fn smoothing_alpha(factor: f32, half_life: Option<f32>, dt: f32) -> f32 {
    match half_life {
        Some(hl) if hl > 0.0 => 1.0 - 0.5f32.powf(dt / hl),
        _ => factor,
    }
    .clamp(0.0, 1.0)
}

/// Fold a phase into [0, 2π). Evaluating `sin` on the folded phase keeps
/// amplitude bounds intact even when the raw phase has grown far past the
/// precision of f32.
#[inline]
pub fn wrap_phase(phase: f64) -> f64 {
    phase.rem_euclid(TAU)
}
