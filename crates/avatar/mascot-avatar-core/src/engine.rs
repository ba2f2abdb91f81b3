//! Avatar: data ownership and the per-frame tick.
//!
//! One `update()` per frame: fold input events into the latest normalized
//! sample, advance the clock, run the pose solver and procedural animator,
//! and emit the typed update list for the adapter to apply. All state lives
//! here; nothing is ambient.

use crate::config::{CameraProfile, Config};
use crate::error::Result;
use crate::inputs::{Aggregator, Inputs, LayoutMode, PointerSample, SampleMailbox, Viewport};
use crate::outputs::{Outputs, PartOp};
use crate::particles::ParticleField;
use crate::pose::AvatarPose;
use crate::procedural::{float_pose, glow_pulse, particle_tilt, spin_angle};
use crate::rig::{light_rig, robot_rig, LightSpec, PartId, PartSpec};

/// The avatar core: input aggregation, pose state, particle field and clock.
#[derive(Debug)]
pub struct Avatar {
    cfg: Config,
    aggregator: Aggregator,
    mailbox: SampleMailbox,
    pose: AvatarPose,
    particles: ParticleField,
    /// Elapsed seconds since construction. f64 so precision holds over long
    /// sessions; periodic phases are folded before use.
    clock: f64,

    // Per-tick outputs.
    outputs: Outputs,
}

impl Avatar {
    /// Create a new avatar with the given (validated) config.
    pub fn new(cfg: Config) -> Result<Self> {
        cfg.validate()?;
        Ok(Self {
            aggregator: Aggregator::new(Viewport::default(), cfg.camera.compact_max_width),
            mailbox: SampleMailbox::new(),
            particles: ParticleField::new(&cfg.particles),
            pose: AvatarPose::default(),
            clock: 0.0,
            outputs: Outputs::default(),
            cfg,
        })
    }

    /// Shared handle to the single-slot input mailbox. Input sources running
    /// off the frame loop post normalized samples here; each tick drains at
    /// most one.
    pub fn mailbox(&self) -> SampleMailbox {
        self.mailbox.clone()
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Elapsed time in seconds since construction.
    pub fn elapsed(&self) -> f64 {
        self.clock
    }

    /// Latest normalized driving sample.
    pub fn pointer(&self) -> PointerSample {
        self.aggregator.latest()
    }

    pub fn pose(&self) -> &AvatarPose {
        &self.pose
    }

    pub fn layout(&self) -> LayoutMode {
        self.aggregator.layout()
    }

    /// Camera profile for the current layout mode.
    pub fn camera(&self) -> CameraProfile {
        match self.aggregator.layout() {
            LayoutMode::Compact => self.cfg.camera.compact,
            LayoutMode::Full => self.cfg.camera.full,
        }
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    /// Static scene topology for adapters to instantiate once at mount.
    pub fn scene(&self) -> Vec<PartSpec> {
        robot_rig()
    }

    /// Static light rig.
    pub fn lighting(&self) -> Vec<LightSpec> {
        light_rig()
    }

    /// Step the avatar by `dt` seconds with the given input events, producing
    /// the typed updates for this frame.
    pub fn update(&mut self, dt: f32, inputs: Inputs) -> &Outputs {
        self.outputs.clear();

        // 1) Fold input events, oldest first; last writer wins. A mailbox
        //    delivery is the freshest input, so it lands after the events.
        for event in &inputs.events {
            self.aggregator.ingest(event, &self.cfg.orientation);
        }
        if let Some(sample) = self.mailbox.drain() {
            self.aggregator.overwrite(sample);
        }

        // 2) Advance the clock.
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.clock += dt as f64;
        let t = self.clock;

        // 3) Pose solver against the latest sample.
        let sample = self.aggregator.latest();
        self.pose.drive(sample, &self.cfg, dt);

        self.outputs.push(
            PartId::Head,
            PartOp::SetRotation {
                pitch: self.pose.head.pitch,
                yaw: self.pose.head.yaw,
            },
        );
        self.outputs.push(
            PartId::Torso,
            PartOp::SetRotation {
                pitch: self.pose.torso.pitch,
                yaw: self.pose.torso.yaw,
            },
        );
        let [px, py] = self.pose.pupil_offset;
        for pupil in [PartId::LeftPupil, PartId::RightPupil] {
            self.outputs
                .push(pupil, PartOp::SetPositionOffset([px, py, 0.0]));
        }

        // 4) Procedural animation from elapsed time only.
        let eye = glow_pulse(t, &self.cfg.eye_glow);
        for part in [PartId::LeftEye, PartId::RightEye] {
            self.outputs.push(part, PartOp::SetEmissiveIntensity(eye));
        }
        self.outputs.push(
            PartId::ChestCore,
            PartOp::SetEmissiveIntensity(glow_pulse(t, &self.cfg.core_glow)),
        );

        self.outputs.push(
            PartId::ParticleGroup,
            PartOp::SetRotation {
                pitch: particle_tilt(t, &self.cfg.particles),
                yaw: spin_angle(t, self.cfg.particles.spin_rate),
            },
        );
        self.outputs.push(
            PartId::RingGroup,
            PartOp::SetRotation {
                pitch: self.cfg.rings.tilt,
                yaw: spin_angle(t, self.cfg.rings.spin_rate),
            },
        );

        let float = float_pose(t, &self.cfg.float_motion);
        self.outputs.push(
            PartId::Root,
            PartOp::SetPositionOffset([0.0, float.offset_y, 0.0]),
        );
        self.outputs.push(
            PartId::Root,
            PartOp::SetRotation {
                pitch: float.pitch,
                yaw: float.yaw,
            },
        );

        &self.outputs
    }
}
