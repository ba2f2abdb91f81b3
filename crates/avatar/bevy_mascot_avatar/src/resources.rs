use bevy::prelude::*;
use std::collections::HashMap;

use mascot_avatar_core::engine::Avatar;
use mascot_avatar_core::inputs::Inputs;
use mascot_avatar_core::outputs::PartUpdate;
use mascot_avatar_core::rig::PartId;

/// The avatar core, resource-wrapped.
#[derive(Resource)]
pub struct MascotEngine(pub Avatar);

/// Raw input events gathered since the last tick.
#[derive(Resource, Default)]
pub struct PendingInputs(pub Inputs);

/// Updates staged from `Avatar::update` to be applied in a separate system
/// (keeps ordering explicit: Gather -> Tick -> Apply).
#[derive(Resource, Default)]
pub struct PendingUpdates {
    pub updates: Vec<PartUpdate>,
}

/// Index from rig part id to the entity spawned for it.
#[derive(Resource, Default)]
pub struct PartIndex {
    pub map: HashMap<PartId, Entity>,
}
