//! Static scene description for the mascot rig.
//!
//! The topology here is created once at mount and never restructured; the
//! per-frame tick only mutates transform and material parameters through the
//! typed ops in `outputs`. Adapters walk the part list, build whatever
//! concrete scene-graph nodes their renderer uses, and index them by
//! [`PartId`].

use serde::{Deserialize, Serialize};

use std::f32::consts::FRAC_PI_2;

/// Stable identifier for every node in the rig.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartId {
    /// Whole-rig group; carries the idle float.
    Root,
    Head,
    Visor,
    LeftEye,
    RightEye,
    LeftPupil,
    RightPupil,
    Antenna,
    AntennaTip,
    LeftSidePanel,
    RightSidePanel,
    Torso,
    ChestCore,
    ChestRing,
    LeftShoulder,
    RightShoulder,
    LeftArm,
    RightArm,
    LeftHand,
    RightHand,
    Waist,
    Legs,
    LeftLeg,
    RightLeg,
    LeftFoot,
    RightFoot,
    /// Decorative halo group; spins continuously.
    RingGroup,
    InnerRing,
    OuterRing,
    /// Particle field group; spins and slowly tilts.
    ParticleGroup,
}

impl PartId {
    /// Parts whose transform the solver/animator drives every frame.
    pub const DRIVEN: [PartId; 7] = [
        PartId::Root,
        PartId::Head,
        PartId::Torso,
        PartId::LeftPupil,
        PartId::RightPupil,
        PartId::RingGroup,
        PartId::ParticleGroup,
    ];
}

/// Geometry primitive for one part.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    /// Box with rounded edges; renderers without a rounded primitive may
    /// substitute a plain box.
    RoundedBox { size: [f32; 3], radius: f32 },
    Box { size: [f32; 3] },
    Sphere { radius: f32 },
    Cylinder { radius: f32, height: f32 },
    /// Truncated cone (the waist).
    Cone {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
    },
    Torus {
        ring_radius: f32,
        tube_radius: f32,
    },
}

/// Surface parameters for one part.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    pub base_color: [f32; 3],
    pub metallic: f32,
    pub roughness: f32,
    pub emissive: Option<EmissiveSpec>,
    /// 1.0 is opaque.
    pub opacity: f32,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmissiveSpec {
    pub color: [f32; 3],
    /// Initial intensity; pulsing parts are overwritten every frame.
    pub intensity: f32,
}

impl MaterialSpec {
    fn solid(base_color: [f32; 3], metallic: f32, roughness: f32) -> Self {
        Self {
            base_color,
            metallic,
            roughness,
            emissive: None,
            opacity: 1.0,
        }
    }

    fn glowing(color: [f32; 3], intensity: f32) -> Self {
        Self {
            base_color: color,
            metallic: 0.0,
            roughness: 0.5,
            emissive: Some(EmissiveSpec { color, intensity }),
            opacity: 1.0,
        }
    }
}

/// One node of the static scene graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PartSpec {
    pub id: PartId,
    pub parent: Option<PartId>,
    /// `None` for pure grouping nodes.
    pub primitive: Option<Primitive>,
    /// Translation relative to the parent.
    pub position: [f32; 3],
    /// Static rotation relative to the parent, as (pitch, yaw, roll).
    pub rotation: [f32; 3],
    pub scale: f32,
    pub material: Option<MaterialSpec>,
}

impl PartSpec {
    fn group(id: PartId, parent: Option<PartId>, position: [f32; 3]) -> Self {
        Self {
            id,
            parent,
            primitive: None,
            position,
            rotation: [0.0; 3],
            scale: 1.0,
            material: None,
        }
    }

    fn mesh(
        id: PartId,
        parent: PartId,
        primitive: Primitive,
        position: [f32; 3],
        material: MaterialSpec,
    ) -> Self {
        Self {
            id,
            parent: Some(parent),
            primitive: Some(primitive),
            position,
            rotation: [0.0; 3],
            scale: 1.0,
            material: Some(material),
        }
    }

    fn rotated(mut self, rotation: [f32; 3]) -> Self {
        self.rotation = rotation;
        self
    }
}

// Palette.
const NAVY: [f32; 3] = [0.102, 0.102, 0.180];
const SLATE: [f32; 3] = [0.086, 0.129, 0.243];
const VISOR: [f32; 3] = [0.059, 0.059, 0.102];
const CYAN: [f32; 3] = [0.0, 1.0, 1.0];
const MAGENTA: [f32; 3] = [1.0, 0.0, 1.0];

/// Build the full mascot rig, root first, parents before children.
pub fn robot_rig() -> Vec<PartSpec> {
    use PartId::*;
    use Primitive::*;

    let mut parts = Vec::with_capacity(30);

    let mut root = PartSpec::group(Root, None, [0.0; 3]);
    root.scale = 0.8;
    parts.push(root);

    // Head group and face.
    parts.push(PartSpec::mesh(
        Head,
        Root,
        RoundedBox {
            size: [1.4, 1.2, 1.2],
            radius: 0.2,
        },
        [0.0, 1.8, 0.0],
        MaterialSpec::solid(NAVY, 0.8, 0.2),
    ));
    parts.push(PartSpec::mesh(
        Visor,
        Head,
        RoundedBox {
            size: [1.2, 0.5, 0.2],
            radius: 0.1,
        },
        [0.0, 0.1, 0.55],
        MaterialSpec::solid(VISOR, 0.9, 0.1),
    ));
    parts.push(PartSpec::mesh(
        LeftEye,
        Head,
        Sphere { radius: 0.12 },
        [-0.3, 0.15, 0.65],
        MaterialSpec::glowing(CYAN, 0.8),
    ));
    parts.push(PartSpec::mesh(
        RightEye,
        Head,
        Sphere { radius: 0.12 },
        [0.3, 0.15, 0.65],
        MaterialSpec::glowing(CYAN, 0.8),
    ));
    parts.push(PartSpec::mesh(
        LeftPupil,
        Head,
        Sphere { radius: 0.05 },
        [-0.3, 0.15, 0.74],
        MaterialSpec::solid(VISOR, 0.2, 0.4),
    ));
    parts.push(PartSpec::mesh(
        RightPupil,
        Head,
        Sphere { radius: 0.05 },
        [0.3, 0.15, 0.74],
        MaterialSpec::solid(VISOR, 0.2, 0.4),
    ));
    parts.push(PartSpec::mesh(
        Antenna,
        Head,
        Cylinder {
            radius: 0.03,
            height: 0.4,
        },
        [0.0, 0.9, 0.0],
        MaterialSpec::solid(MAGENTA, 0.9, 0.1),
    ));
    parts.push(PartSpec::mesh(
        AntennaTip,
        Head,
        Sphere { radius: 0.08 },
        [0.0, 1.15, 0.0],
        MaterialSpec::glowing(MAGENTA, 1.2),
    ));
    parts.push(PartSpec::mesh(
        LeftSidePanel,
        Head,
        Box {
            size: [0.15, 0.4, 0.8],
        },
        [-0.75, 0.0, 0.0],
        MaterialSpec::solid(SLATE, 0.7, 0.3),
    ));
    parts.push(PartSpec::mesh(
        RightSidePanel,
        Head,
        Box {
            size: [0.15, 0.4, 0.8],
        },
        [0.75, 0.0, 0.0],
        MaterialSpec::solid(SLATE, 0.7, 0.3),
    ));

    // Torso group.
    parts.push(PartSpec::mesh(
        Torso,
        Root,
        RoundedBox {
            size: [1.6, 1.8, 1.0],
            radius: 0.15,
        },
        [0.0, 0.4, 0.0],
        MaterialSpec::solid(SLATE, 0.7, 0.3),
    ));
    let mut core_mat = MaterialSpec::glowing(CYAN, 0.6);
    core_mat.opacity = 0.9;
    parts.push(
        PartSpec::mesh(
            ChestCore,
            Torso,
            Cylinder {
                radius: 0.25,
                height: 0.1,
            },
            [0.0, 0.2, 0.52],
            core_mat,
        )
        .rotated([FRAC_PI_2, 0.0, 0.0]),
    );
    parts.push(PartSpec::mesh(
        ChestRing,
        Torso,
        Torus {
            ring_radius: 0.35,
            tube_radius: 0.05,
        },
        [0.0, 0.2, 0.5],
        MaterialSpec::glowing(MAGENTA, 0.4),
    ));
    parts.push(PartSpec::mesh(
        LeftShoulder,
        Torso,
        Sphere { radius: 0.25 },
        [-0.95, 0.6, 0.0],
        MaterialSpec::solid(NAVY, 0.8, 0.2),
    ));
    parts.push(PartSpec::mesh(
        RightShoulder,
        Torso,
        Sphere { radius: 0.25 },
        [0.95, 0.6, 0.0],
        MaterialSpec::solid(NAVY, 0.8, 0.2),
    ));
    parts.push(PartSpec::mesh(
        LeftArm,
        Torso,
        RoundedBox {
            size: [0.3, 1.0, 0.3],
            radius: 0.1,
        },
        [-1.3, 0.2, 0.0],
        MaterialSpec::solid(SLATE, 0.7, 0.3),
    ));
    parts.push(PartSpec::mesh(
        RightArm,
        Torso,
        RoundedBox {
            size: [0.3, 1.0, 0.3],
            radius: 0.1,
        },
        [1.3, 0.2, 0.0],
        MaterialSpec::solid(SLATE, 0.7, 0.3),
    ));
    parts.push(PartSpec::mesh(
        LeftHand,
        LeftArm,
        Sphere { radius: 0.18 },
        [0.0, -0.6, 0.0],
        MaterialSpec::solid(NAVY, 0.8, 0.2),
    ));
    parts.push(PartSpec::mesh(
        RightHand,
        RightArm,
        Sphere { radius: 0.18 },
        [0.0, -0.6, 0.0],
        MaterialSpec::solid(NAVY, 0.8, 0.2),
    ));
    parts.push(PartSpec::mesh(
        Waist,
        Torso,
        Cone {
            radius_top: 0.6,
            radius_bottom: 0.7,
            height: 0.3,
        },
        [0.0, -0.9, 0.0],
        MaterialSpec::solid(NAVY, 0.8, 0.2),
    ));

    // Legs (static).
    parts.push(PartSpec::group(Legs, Some(Root), [0.0, -1.5, 0.0]));
    parts.push(PartSpec::mesh(
        LeftLeg,
        Legs,
        RoundedBox {
            size: [0.35, 1.2, 0.35],
            radius: 0.1,
        },
        [-0.4, 0.0, 0.0],
        MaterialSpec::solid(SLATE, 0.7, 0.3),
    ));
    parts.push(PartSpec::mesh(
        RightLeg,
        Legs,
        RoundedBox {
            size: [0.35, 1.2, 0.35],
            radius: 0.1,
        },
        [0.4, 0.0, 0.0],
        MaterialSpec::solid(SLATE, 0.7, 0.3),
    ));
    parts.push(PartSpec::mesh(
        LeftFoot,
        LeftLeg,
        RoundedBox {
            size: [0.4, 0.15, 0.5],
            radius: 0.05,
        },
        [0.0, -0.7, 0.1],
        MaterialSpec::solid(NAVY, 0.8, 0.2),
    ));
    parts.push(PartSpec::mesh(
        RightFoot,
        RightLeg,
        RoundedBox {
            size: [0.4, 0.15, 0.5],
            radius: 0.05,
        },
        [0.0, -0.7, 0.1],
        MaterialSpec::solid(NAVY, 0.8, 0.2),
    ));

    // Decorative halo rings (outside the floated root so they orbit steadily).
    parts.push(PartSpec::group(RingGroup, None, [0.0, 0.2, 0.0]));
    parts.push(PartSpec::mesh(
        InnerRing,
        RingGroup,
        Torus {
            ring_radius: 2.2,
            tube_radius: 0.02,
        },
        [0.0; 3],
        MaterialSpec::glowing(CYAN, 0.5),
    ));
    parts.push(PartSpec::mesh(
        OuterRing,
        RingGroup,
        Torus {
            ring_radius: 2.6,
            tube_radius: 0.015,
        },
        [0.0; 3],
        MaterialSpec::glowing(MAGENTA, 0.35),
    ));

    // Particle group node; the adapter instantiates the field under it.
    parts.push(PartSpec::group(ParticleGroup, None, [0.0; 3]));

    parts
}

/// Visual parameters for the particles the adapter spawns under
/// [`PartId::ParticleGroup`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleVisual {
    pub radius: f32,
    pub color: [f32; 3],
    pub opacity: f32,
}

impl Default for ParticleVisual {
    fn default() -> Self {
        Self {
            radius: 0.025,
            color: CYAN,
            opacity: 0.6,
        }
    }
}

/// Light kinds the rig uses.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LightKind {
    Ambient,
    Point,
    Spot { angle: f32 },
}

/// One light, with intensity relative to the rig's baseline; adapters scale
/// into their own photometric units.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightSpec {
    pub kind: LightKind,
    pub color: [f32; 3],
    pub intensity: f32,
    pub position: [f32; 3],
}

const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

/// The fixed light rig.
pub fn light_rig() -> Vec<LightSpec> {
    vec![
        LightSpec {
            kind: LightKind::Ambient,
            color: WHITE,
            intensity: 0.3,
            position: [0.0; 3],
        },
        LightSpec {
            kind: LightKind::Point,
            color: CYAN,
            intensity: 1.0,
            position: [10.0, 10.0, 10.0],
        },
        LightSpec {
            kind: LightKind::Point,
            color: MAGENTA,
            intensity: 0.5,
            position: [-10.0, -10.0, -10.0],
        },
        LightSpec {
            kind: LightKind::Spot { angle: 0.3 },
            color: WHITE,
            intensity: 1.0,
            position: [0.0, 5.0, 5.0],
        },
    ]
}
