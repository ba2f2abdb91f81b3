//! Pose solver: chases pointer-derived targets with per-part smoothing.
//!
//! Head and torso rotations converge toward their targets by a fixed factor
//! each frame (the torso slower than the head, so it visibly lags). Pupils
//! take a direct, unsmoothed offset clamped to their socket.

use serde::{Deserialize, Serialize};

use crate::config::{Config, PartTuning, PupilTuning};
use crate::inputs::PointerSample;
use crate::interp::{lerp_f32, smoothing_alpha};

/// Rotation state of one articulated part, in radians.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PartPose {
    pub pitch: f32,
    pub yaw: f32,
}

impl PartPose {
    pub const IDENTITY: PartPose = PartPose {
        pitch: 0.0,
        yaw: 0.0,
    };

    /// Largest per-axis distance to another pose.
    pub fn distance_to(&self, other: &PartPose) -> f32 {
        (self.pitch - other.pitch)
            .abs()
            .max((self.yaw - other.yaw).abs())
    }
}

/// Target rotation a part should chase for the given sample.
pub fn target_for(sample: PointerSample, tuning: &PartTuning) -> PartPose {
    PartPose {
        yaw: sample.x * tuning.yaw_gain,
        pitch: -sample.y * tuning.pitch_gain,
    }
}

/// One smoothing step toward `target`. The interpolation weight stays in
/// (0, 1), so the step never overshoots and converges monotonically while
/// the target holds still.
pub fn seek(current: &mut PartPose, target: PartPose, tuning: &PartTuning, dt: f32) {
    let alpha = smoothing_alpha(tuning.smoothing, tuning.half_life, dt);
    current.yaw = lerp_f32(current.yaw, target.yaw, alpha);
    current.pitch = lerp_f32(current.pitch, target.pitch, alpha);
}

/// Unsmoothed pupil offset in the eye plane, clamped to the socket radius.
pub fn pupil_offset(sample: PointerSample, tuning: &PupilTuning) -> [f32; 2] {
    let dx = sample.x * tuning.gain;
    let dy = sample.y * tuning.gain;
    let len = (dx * dx + dy * dy).sqrt();
    if len > tuning.socket_radius && len > 0.0 {
        let scale = tuning.socket_radius / len;
        [dx * scale, dy * scale]
    } else {
        [dx, dy]
    }
}

/// Full articulated pose, refreshed once per frame by the composer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AvatarPose {
    pub head: PartPose,
    pub torso: PartPose,
    /// Shared by both pupils; each eye renders the same deflection.
    pub pupil_offset: [f32; 2],
}

impl AvatarPose {
    /// Advance toward the targets implied by `sample`.
    pub fn drive(&mut self, sample: PointerSample, cfg: &Config, dt: f32) {
        seek(&mut self.head, target_for(sample, &cfg.head), &cfg.head, dt);
        seek(
            &mut self.torso,
            target_for(sample, &cfg.torso),
            &cfg.torso,
            dt,
        );
        self.pupil_offset = pupil_offset(sample, &cfg.pupils);
    }
}
