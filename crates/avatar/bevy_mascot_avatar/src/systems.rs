//! Per-frame systems: gather host input, tick the core, apply its typed
//! updates to the scene, and keep the camera in sync with the layout mode.
//!
//! Every system takes its mascot resources optionally and no-ops when they
//! are gone, so a torn-down avatar ignores late events instead of panicking.

use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::{CursorMoved, WindowResized};

use mascot_avatar_core::inputs::{InputEvent, LayoutMode};
use mascot_avatar_core::outputs::PartOp;

use crate::components::{GlowPart, MascotCamera, MascotPart};
use crate::resources::{MascotEngine, PendingInputs, PendingUpdates};

/// Translate window events into core input events.
pub fn gather_input_system(
    mut pending: Option<ResMut<PendingInputs>>,
    mut cursor_moved: EventReader<CursorMoved>,
    mut touches: EventReader<TouchInput>,
    mut resized: EventReader<WindowResized>,
) {
    let Some(pending) = pending.as_deref_mut() else {
        return;
    };

    for event in cursor_moved.read() {
        pending.0.events.push(InputEvent::PointerMoved {
            x: event.position.x,
            y: event.position.y,
        });
    }
    for touch in touches.read() {
        if touch.phase == TouchPhase::Moved {
            pending.0.events.push(InputEvent::TouchMoved {
                x: touch.position.x,
                y: touch.position.y,
            });
        }
    }
    for event in resized.read() {
        pending.0.events.push(InputEvent::ViewportResized {
            width: event.width,
            height: event.height,
        });
    }
}

/// Advance the core by this frame's delta and stage its updates.
pub fn tick_engine_system(
    engine: Option<ResMut<MascotEngine>>,
    pending_inputs: Option<ResMut<PendingInputs>>,
    staged: Option<ResMut<PendingUpdates>>,
    time: Res<Time>,
) {
    let (Some(mut engine), Some(mut pending_inputs), Some(mut staged)) =
        (engine, pending_inputs, staged)
    else {
        return;
    };

    let inputs = std::mem::take(&mut pending_inputs.0);
    let outputs = engine.0.update(time.delta_seconds(), inputs);
    staged.updates.clear();
    staged.updates.extend(outputs.updates.iter().copied());
}

/// Apply staged updates to part transforms and glow materials.
pub fn apply_updates_system(
    staged: Option<ResMut<PendingUpdates>>,
    mut materials: Option<ResMut<Assets<StandardMaterial>>>,
    mut parts: Query<(
        &MascotPart,
        &mut Transform,
        Option<&GlowPart>,
        Option<&Handle<StandardMaterial>>,
    )>,
) {
    let Some(mut staged) = staged else {
        return;
    };
    let updates = std::mem::take(&mut staged.updates);
    if updates.is_empty() {
        return;
    }

    for (part, mut transform, glow, material_handle) in parts.iter_mut() {
        for update in updates.iter().filter(|u| u.part == part.id) {
            match update.op {
                PartOp::SetRotation { pitch, yaw } => {
                    transform.rotation =
                        part.rest_rotation * Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0);
                }
                PartOp::SetPositionOffset(offset) => {
                    transform.translation = part.rest_translation + Vec3::from_array(offset);
                }
                PartOp::SetEmissiveIntensity(intensity) => {
                    let (Some(glow), Some(handle), Some(materials)) =
                        (glow, material_handle, materials.as_deref_mut())
                    else {
                        continue;
                    };
                    if let Some(material) = materials.get_mut(handle) {
                        material.emissive = glow.color * intensity;
                    }
                }
            }
        }
    }
}

/// Retune the camera when the layout classification flips. Only fov and
/// distance change; the scene graph is untouched.
pub fn sync_camera_system(
    engine: Option<Res<MascotEngine>>,
    mut applied: Local<Option<LayoutMode>>,
    mut cameras: Query<(&mut Projection, &mut Transform), With<MascotCamera>>,
) {
    let Some(engine) = engine else {
        return;
    };
    let layout = engine.0.layout();
    if *applied == Some(layout) {
        return;
    }

    let profile = engine.0.camera();
    for (mut projection, mut transform) in cameras.iter_mut() {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.fov = profile.fov_deg.to_radians();
        }
        *transform =
            Transform::from_xyz(0.0, 0.0, profile.distance).looking_at(Vec3::ZERO, Vec3::Y);
        log::debug!("camera retuned for {layout:?} layout");
    }
    *applied = Some(layout);
}
