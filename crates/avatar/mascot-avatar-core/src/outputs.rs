//! Output contracts from the avatar core.
//!
//! Each tick produces one flat list of typed parameter updates keyed by
//! [`PartId`]. Adapters apply them to whatever scene-graph node type their
//! renderer provides; the ops are the whole capability surface a part needs,
//! so neither the solver nor the animator ever touches a concrete node.

use serde::{Deserialize, Serialize};

use crate::rig::PartId;

/// One mutation of a part's transform or material.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PartOp {
    /// Absolute rotation relative to the part's rest orientation, radians.
    SetRotation { pitch: f32, yaw: f32 },
    /// Translation offset added to the part's rest position.
    SetPositionOffset([f32; 3]),
    SetEmissiveIntensity(f32),
}

/// One changed part parameter for this tick.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PartUpdate {
    pub part: PartId,
    pub op: PartOp,
}

/// Updates produced by `Avatar::update()`. Regenerated every frame, never
/// persisted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub updates: Vec<PartUpdate>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.updates.clear();
    }

    #[inline]
    pub fn push(&mut self, part: PartId, op: PartOp) {
        self.updates.push(PartUpdate { part, op });
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    /// Rotation pushed for `part` this tick, if any.
    pub fn rotation_of(&self, part: PartId) -> Option<(f32, f32)> {
        self.updates.iter().find_map(|u| match u.op {
            PartOp::SetRotation { pitch, yaw } if u.part == part => Some((pitch, yaw)),
            _ => None,
        })
    }

    /// Emissive intensity pushed for `part` this tick, if any.
    pub fn emissive_of(&self, part: PartId) -> Option<f32> {
        self.updates.iter().find_map(|u| match u.op {
            PartOp::SetEmissiveIntensity(v) if u.part == part => Some(v),
            _ => None,
        })
    }
}
