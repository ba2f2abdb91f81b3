use bevy::prelude::*;

use mascot_avatar_core::rig::PartId;

/// One rig node. Carries the rest transform so per-frame ops can be applied
/// as deltas without accumulating drift.
#[derive(Component, Debug, Clone)]
pub struct MascotPart {
    pub id: PartId,
    pub rest_translation: Vec3,
    pub rest_rotation: Quat,
}

/// Marker for entities whose material emissive the animator drives.
#[derive(Component, Debug, Clone, Copy)]
pub struct GlowPart {
    /// Emissive color at intensity 1.0.
    pub color: LinearRgba,
}

/// Marker for the avatar's camera, so layout flips know what to retune.
#[derive(Component)]
pub struct MascotCamera;
