//! Procedural idle animation: pure functions of elapsed time.
//!
//! Nothing here reads input. Each function maps the clock to a material or
//! transform parameter; phases are folded before evaluation so the outputs
//! stay inside their bands for arbitrarily large elapsed times.

use crate::config::{FloatTuning, GlowTuning, ParticleTuning};
use crate::interp::wrap_phase;

/// Oscillating emissive intensity. Stays within `tuning.band()` for any `t`.
pub fn glow_pulse(t: f64, tuning: &GlowTuning) -> f32 {
    let phase = wrap_phase(t * tuning.frequency as f64);
    phase.sin() as f32 * tuning.amplitude + tuning.offset
}

/// Continuous yaw angle for a group spinning at `rate` rad/s, folded into
/// [0, 2π).
pub fn spin_angle(t: f64, rate: f32) -> f32 {
    wrap_phase(t * rate as f64) as f32
}

/// Slow tilt oscillation for the particle field.
pub fn particle_tilt(t: f64, tuning: &ParticleTuning) -> f32 {
    let phase = wrap_phase(t * tuning.tilt_frequency as f64);
    phase.sin() as f32 * tuning.tilt_amplitude
}

/// Idle float offsets for the whole rig.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FloatPose {
    pub offset_y: f32,
    pub pitch: f32,
    pub yaw: f32,
}

/// Vertical bob plus gentle rotational wander.
pub fn float_pose(t: f64, tuning: &FloatTuning) -> FloatPose {
    let slow = wrap_phase(t * (tuning.speed as f64) / 4.0);
    let bob = wrap_phase(t * (tuning.speed as f64) / 2.0);
    FloatPose {
        offset_y: bob.sin() as f32 / 10.0 * tuning.float_intensity,
        pitch: slow.cos() as f32 / 8.0 * tuning.rotation_intensity,
        yaw: slow.sin() as f32 / 8.0 * tuning.rotation_intensity,
    }
}
