//! Tuning configuration for the avatar core.
//!
//! Every knob the solver, animator and composer read lives here, with
//! defaults matching the shipped mascot. Configs round-trip through serde so
//! hosts can supply overrides as JSON.

use serde::{Deserialize, Serialize};

use crate::error::{AvatarError, ConfigError};

/// Full avatar configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Head tracking (rotates the most).
    pub head: PartTuning,
    /// Torso sway (lags the head for a layered feel).
    pub torso: PartTuning,
    pub pupils: PupilTuning,
    pub orientation: OrientationTuning,
    pub eye_glow: GlowTuning,
    pub core_glow: GlowTuning,
    pub particles: ParticleTuning,
    pub rings: RingTuning,
    pub float_motion: FloatTuning,
    pub camera: CameraConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            head: PartTuning {
                yaw_gain: 0.5,
                pitch_gain: 0.3,
                smoothing: 0.08,
                half_life: None,
            },
            torso: PartTuning {
                yaw_gain: 0.15,
                pitch_gain: 0.0,
                smoothing: 0.04,
                half_life: None,
            },
            pupils: PupilTuning::default(),
            orientation: OrientationTuning::default(),
            eye_glow: GlowTuning {
                frequency: 3.0,
                amplitude: 0.3,
                offset: 0.7,
            },
            core_glow: GlowTuning {
                frequency: 2.0,
                amplitude: 0.2,
                offset: 0.6,
            },
            particles: ParticleTuning::default(),
            rings: RingTuning::default(),
            float_motion: FloatTuning::default(),
            camera: CameraConfig::default(),
        }
    }
}

impl Config {
    /// Parse a configuration from a JSON string.
    pub fn from_json(s: &str) -> crate::error::Result<Self> {
        let cfg: Self =
            serde_json::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> crate::error::Result<()> {
        for (field, tuning) in [("head", &self.head), ("torso", &self.torso)] {
            if !(0.0..1.0).contains(&tuning.smoothing) || tuning.smoothing == 0.0 {
                return Err(invalid(
                    format!("{field}.smoothing"),
                    "smoothing factor must lie in (0, 1)",
                ));
            }
            if let Some(hl) = tuning.half_life {
                if hl <= 0.0 {
                    return Err(invalid(
                        format!("{field}.half_life"),
                        "half-life must be positive when set",
                    ));
                }
            }
        }

        if self.orientation.tilt_sensitivity <= 0.0 {
            return Err(invalid(
                "orientation.tilt_sensitivity",
                "tilt sensitivity must be positive",
            ));
        }

        for (field, glow) in [
            ("eye_glow", &self.eye_glow),
            ("core_glow", &self.core_glow),
        ] {
            if glow.amplitude < 0.0 {
                return Err(invalid(
                    format!("{field}.amplitude"),
                    "amplitude must be non-negative",
                ));
            }
            if glow.offset - glow.amplitude <= 0.0 {
                return Err(invalid(
                    format!("{field}.offset"),
                    "intensity band must stay strictly positive (offset > amplitude)",
                ));
            }
        }

        if self.particles.count == 0 {
            return Err(invalid("particles.count", "particle count must be non-zero"));
        }
        if self.particles.count > 10_000 {
            log::warn!(
                "particles.count = {} is unusually large for a decorative field",
                self.particles.count
            );
        }
        if self.particles.spread <= 0.0 {
            return Err(invalid("particles.spread", "spread must be positive"));
        }

        if self.pupils.socket_radius < 0.0 {
            return Err(invalid(
                "pupils.socket_radius",
                "socket radius must be non-negative",
            ));
        }

        for (field, profile) in [
            ("camera.full", &self.camera.full),
            ("camera.compact", &self.camera.compact),
        ] {
            if !(0.0..180.0).contains(&profile.fov_deg) || profile.fov_deg == 0.0 {
                return Err(invalid(
                    format!("{field}.fov_deg"),
                    "field of view must lie in (0, 180) degrees",
                ));
            }
            if profile.distance <= 0.0 {
                return Err(invalid(
                    format!("{field}.distance"),
                    "camera distance must be positive",
                ));
            }
        }

        Ok(())
    }
}

fn invalid(field: impl Into<String>, message: &str) -> AvatarError {
    ConfigError::InvalidValue {
        field: field.into(),
        message: message.to_string(),
    }
    .into()
}

/// Pointer-tracking gains and smoothing for one articulated part.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PartTuning {
    /// Target yaw per unit of pointer x.
    pub yaw_gain: f32,
    /// Target pitch per unit of pointer y (applied negated: pointer up looks up).
    pub pitch_gain: f32,
    /// Fixed per-frame interpolation factor in (0, 1).
    pub smoothing: f32,
    /// Optional half-life in seconds. When set, smoothing becomes
    /// frame-rate independent; left unset the fixed factor keeps the
    /// classic per-frame feel.
    pub half_life: Option<f32>,
}

impl Default for PartTuning {
    fn default() -> Self {
        Self {
            yaw_gain: 0.5,
            pitch_gain: 0.3,
            smoothing: 0.08,
            half_life: None,
        }
    }
}

/// Eye-tracking offset applied directly to the pupils (no smoothing).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PupilTuning {
    /// Offset per unit of pointer deflection.
    pub gain: f32,
    /// Maximum offset magnitude; keeps the pupil inside its socket.
    pub socket_radius: f32,
}

impl Default for PupilTuning {
    fn default() -> Self {
        Self {
            gain: 0.05,
            socket_radius: 0.06,
        }
    }
}

/// Device-orientation mapping into the normalized pointer space.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct OrientationTuning {
    /// Degrees of tilt for full deflection; raw angles divide by this.
    pub tilt_sensitivity: f32,
    /// Resting front-back pitch in degrees. Holding a device naturally tilts
    /// it away from zero, so beta is offset by this before scaling.
    pub neutral_beta: f32,
}

impl Default for OrientationTuning {
    fn default() -> Self {
        Self {
            tilt_sensitivity: 30.0,
            neutral_beta: 40.0,
        }
    }
}

/// Sine-wave emissive pulse parameters.
///
/// Intensity is `sin(t * frequency) * amplitude + offset`; the validator
/// requires `offset > amplitude` so the glow never fully turns off.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowTuning {
    /// Angular frequency in rad/s.
    pub frequency: f32,
    pub amplitude: f32,
    pub offset: f32,
}

impl GlowTuning {
    /// Inclusive intensity band this pulse stays within.
    pub fn band(&self) -> (f32, f32) {
        (self.offset - self.amplitude, self.offset + self.amplitude)
    }
}

impl Default for GlowTuning {
    fn default() -> Self {
        Self {
            frequency: 3.0,
            amplitude: 0.3,
            offset: 0.7,
        }
    }
}

/// Decorative particle field parameters.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleTuning {
    pub count: usize,
    /// Edge length of the cube positions are drawn from, centered on origin.
    pub spread: f32,
    /// Continuous yaw rate in rad/s.
    pub spin_rate: f32,
    /// Amplitude of the slow tilt oscillation in radians.
    pub tilt_amplitude: f32,
    /// Angular frequency of the tilt oscillation in rad/s.
    pub tilt_frequency: f32,
    /// Seed for the deterministic position generator.
    pub seed: u64,
}

impl Default for ParticleTuning {
    fn default() -> Self {
        Self {
            count: 50,
            spread: 8.0,
            spin_rate: 0.1,
            tilt_amplitude: 0.15,
            tilt_frequency: 0.25,
            seed: 0x6d61_7363_6f74,
        }
    }
}

/// Decorative halo ring group parameters.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RingTuning {
    /// Continuous yaw rate in rad/s.
    pub spin_rate: f32,
    /// Static tilt of the ring plane in radians.
    pub tilt: f32,
}

impl Default for RingTuning {
    fn default() -> Self {
        Self {
            spin_rate: 0.3,
            tilt: 0.35,
        }
    }
}

/// Idle float: a small vertical bob plus gentle rotational wander applied to
/// the whole rig.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatTuning {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
}

impl Default for FloatTuning {
    fn default() -> Self {
        Self {
            speed: 2.0,
            rotation_intensity: 0.2,
            float_intensity: 0.5,
        }
    }
}

/// One fixed camera placement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraProfile {
    pub fov_deg: f32,
    /// Distance from the origin along +Z, looking at the rig.
    pub distance: f32,
}

impl Default for CameraProfile {
    fn default() -> Self {
        Self {
            fov_deg: 50.0,
            distance: 6.0,
        }
    }
}

/// Camera profiles per layout mode, plus the classification threshold.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub full: CameraProfile,
    pub compact: CameraProfile,
    /// Viewport widths at or below this are classified compact.
    pub compact_max_width: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            full: CameraProfile {
                fov_deg: 50.0,
                distance: 6.0,
            },
            compact: CameraProfile {
                fov_deg: 60.0,
                distance: 7.0,
            },
            compact_max_width: 768.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        Config::default().validate().expect("defaults validate");
    }

    #[test]
    fn rejects_out_of_range_smoothing() {
        let mut cfg = Config::default();
        cfg.head.smoothing = 1.0;
        assert!(cfg.validate().is_err());
        cfg.head.smoothing = 0.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_band_reaching_zero() {
        let mut cfg = Config::default();
        cfg.eye_glow.offset = cfg.eye_glow.amplitude;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn json_roundtrip() {
        let cfg = Config::default();
        let s = serde_json::to_string(&cfg).unwrap();
        let back = Config::from_json(&s).unwrap();
        assert_eq!(back.head.smoothing, cfg.head.smoothing);
        assert_eq!(back.particles.count, cfg.particles.count);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg = Config::from_json(r#"{"head":{"smoothing":0.12}}"#).unwrap();
        assert_eq!(cfg.head.smoothing, 0.12);
        assert_eq!(cfg.torso.smoothing, 0.04);
    }
}
