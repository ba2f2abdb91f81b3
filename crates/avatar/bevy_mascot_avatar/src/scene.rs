//! Startup scene assembly: instantiate the core's static rig description as
//! Bevy entities, plus camera and lights.
//!
//! Topology is built once here and never restructured; the per-frame systems
//! only mutate transforms and material parameters.

use bevy::prelude::*;

use mascot_avatar_core::rig::{LightKind, MaterialSpec, PartId, ParticleVisual, Primitive};

use crate::components::{GlowPart, MascotCamera, MascotPart};
use crate::resources::{MascotEngine, PartIndex};

/// Scale from the rig's relative light intensities into lumens.
const LIGHT_LUMENS: f32 = 1_500_000.0;
/// Scale from the rig's relative ambient intensity into lux.
const AMBIENT_LUX: f32 = 250.0;

pub fn mesh_for(primitive: &Primitive) -> Mesh {
    match *primitive {
        // No rounded-box primitive in the mesh library; a plain box reads the
        // same at these radii.
        Primitive::RoundedBox { size, .. } | Primitive::Box { size } => {
            Cuboid::new(size[0], size[1], size[2]).into()
        }
        Primitive::Sphere { radius } => Sphere::new(radius).into(),
        Primitive::Cylinder { radius, height } => Cylinder::new(radius, height).into(),
        Primitive::Cone {
            radius_top,
            radius_bottom,
            height,
        } => ConicalFrustum {
            radius_top,
            radius_bottom,
            height,
        }
        .into(),
        Primitive::Torus {
            ring_radius,
            tube_radius,
        } => Torus {
            minor_radius: tube_radius,
            major_radius: ring_radius,
        }
        .into(),
    }
}

pub fn material_for(spec: &MaterialSpec) -> StandardMaterial {
    let mut material = StandardMaterial {
        base_color: Color::srgba(
            spec.base_color[0],
            spec.base_color[1],
            spec.base_color[2],
            spec.opacity,
        ),
        metallic: spec.metallic,
        perceptual_roughness: spec.roughness,
        ..default()
    };
    if spec.opacity < 1.0 {
        material.alpha_mode = AlphaMode::Blend;
    }
    if let Some(emissive) = spec.emissive {
        material.emissive = glow_color(emissive.color) * emissive.intensity;
    }
    material
}

pub fn glow_color(color: [f32; 3]) -> LinearRgba {
    LinearRgba::rgb(color[0], color[1], color[2])
}

fn transform_for(position: [f32; 3], rotation: [f32; 3], scale: f32) -> Transform {
    Transform::from_translation(Vec3::from_array(position))
        .with_rotation(Quat::from_euler(
            EulerRot::YXZ,
            rotation[1],
            rotation[0],
            rotation[2],
        ))
        .with_scale(Vec3::splat(scale))
}

/// Spawn the rig, particle field, camera and lights. Skips quietly when the
/// render asset stores are absent (headless test apps).
pub fn setup_scene_system(
    mut commands: Commands,
    engine: Option<Res<MascotEngine>>,
    meshes: Option<ResMut<Assets<Mesh>>>,
    materials: Option<ResMut<Assets<StandardMaterial>>>,
    index: Option<ResMut<PartIndex>>,
) {
    let (Some(engine), Some(mut meshes), Some(mut materials), Some(mut index)) =
        (engine, meshes, materials, index)
    else {
        log::debug!("render assets unavailable; skipping mascot scene assembly");
        return;
    };

    for part in engine.0.scene() {
        let transform = transform_for(part.position, part.rotation, part.scale);
        let tag = MascotPart {
            id: part.id,
            rest_translation: transform.translation,
            rest_rotation: transform.rotation,
        };
        let name = Name::new(format!("{:?}", part.id));

        let entity = match (&part.primitive, &part.material) {
            (Some(primitive), Some(material)) => commands
                .spawn((
                    PbrBundle {
                        mesh: meshes.add(mesh_for(primitive)),
                        material: materials.add(material_for(material)),
                        transform,
                        ..default()
                    },
                    tag,
                    name,
                ))
                .id(),
            _ => commands
                .spawn((SpatialBundle::from_transform(transform), tag, name))
                .id(),
        };

        if let Some(emissive) = part.material.as_ref().and_then(|m| m.emissive) {
            commands.entity(entity).insert(GlowPart {
                color: glow_color(emissive.color),
            });
        }
        if let Some(parent) = part.parent {
            if let Some(&parent_entity) = index.map.get(&parent) {
                commands.entity(parent_entity).add_child(entity);
            } else {
                log::warn!("rig part {:?} listed before its parent {:?}", part.id, parent);
            }
        }
        index.map.insert(part.id, entity);
    }

    spawn_particles(&mut commands, &engine, &mut meshes, &mut materials, &index);
    spawn_camera(&mut commands, &engine);
    spawn_lights(&mut commands, &engine);
}

fn spawn_particles(
    commands: &mut Commands,
    engine: &MascotEngine,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    index: &PartIndex,
) {
    let Some(&group) = index.map.get(&PartId::ParticleGroup) else {
        return;
    };
    let visual = ParticleVisual::default();
    let mesh = meshes.add(Sphere::new(visual.radius));
    let material = materials.add(material_for(&MaterialSpec {
        base_color: visual.color,
        metallic: 0.0,
        roughness: 0.5,
        emissive: Some(mascot_avatar_core::rig::EmissiveSpec {
            color: visual.color,
            intensity: 1.0,
        }),
        opacity: visual.opacity,
    }));

    for position in engine.0.particles().positions() {
        let child = commands
            .spawn(PbrBundle {
                mesh: mesh.clone(),
                material: material.clone(),
                transform: Transform::from_translation(Vec3::from_array(*position)),
                ..default()
            })
            .id();
        commands.entity(group).add_child(child);
    }
}

fn spawn_camera(commands: &mut Commands, engine: &MascotEngine) {
    let profile = engine.0.camera();
    commands.spawn((
        Camera3dBundle {
            projection: PerspectiveProjection {
                fov: profile.fov_deg.to_radians(),
                ..default()
            }
            .into(),
            transform: Transform::from_xyz(0.0, 0.0, profile.distance)
                .looking_at(Vec3::ZERO, Vec3::Y),
            ..default()
        },
        MascotCamera,
    ));
}

fn spawn_lights(commands: &mut Commands, engine: &MascotEngine) {
    for light in engine.0.lighting() {
        let color = Color::srgb(light.color[0], light.color[1], light.color[2]);
        let position = Vec3::from_array(light.position);
        match light.kind {
            LightKind::Ambient => {
                commands.insert_resource(AmbientLight {
                    color,
                    brightness: light.intensity * AMBIENT_LUX,
                });
            }
            LightKind::Point => {
                commands.spawn(PointLightBundle {
                    point_light: PointLight {
                        color,
                        intensity: light.intensity * LIGHT_LUMENS,
                        range: 60.0,
                        ..default()
                    },
                    transform: Transform::from_translation(position),
                    ..default()
                });
            }
            LightKind::Spot { angle } => {
                commands.spawn(SpotLightBundle {
                    spot_light: SpotLight {
                        color,
                        intensity: light.intensity * LIGHT_LUMENS,
                        outer_angle: angle,
                        ..default()
                    },
                    transform: Transform::from_translation(position)
                        .looking_at(Vec3::ZERO, Vec3::Y),
                    ..default()
                });
            }
        }
    }
}
