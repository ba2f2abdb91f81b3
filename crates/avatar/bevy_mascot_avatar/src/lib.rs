//! Bevy plugin wrapping the mascot avatar core.
//!
//! The plugin owns the frame loop side of the contract: it gathers window
//! events into core inputs, ticks the core once per frame, and applies the
//! resulting typed updates to the spawned rig. Removing the mascot resources
//! tears the avatar down; the systems then ignore any late-arriving events.

use bevy::input::touch::TouchInput;
use bevy::prelude::*;
use bevy::window::{CursorMoved, WindowResized};

use mascot_avatar_core::{Avatar, Config};

pub mod components;
pub mod resources;
pub mod scene;
pub mod systems;

pub use components::{GlowPart, MascotCamera, MascotPart};
pub use resources::{MascotEngine, PartIndex, PendingInputs, PendingUpdates};

/// Plugin driving one mascot avatar from the primary window's input.
#[derive(Default)]
pub struct MascotAvatarPlugin {
    pub config: Config,
}

impl MascotAvatarPlugin {
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }
}

impl Plugin for MascotAvatarPlugin {
    fn build(&self, app: &mut App) {
        let avatar = Avatar::new(self.config.clone()).unwrap_or_else(|err| {
            log::error!("invalid mascot config, falling back to defaults: {err}");
            Avatar::new(Config::default()).expect("default config is valid")
        });

        // Window event types are normally registered by the window plugin;
        // registering here too keeps headless apps working.
        app.add_event::<CursorMoved>()
            .add_event::<TouchInput>()
            .add_event::<WindowResized>()
            .insert_resource(MascotEngine(avatar))
            .init_resource::<PendingInputs>()
            .init_resource::<PendingUpdates>()
            .init_resource::<PartIndex>()
            .add_systems(Startup, scene::setup_scene_system)
            .add_systems(
                Update,
                (
                    systems::gather_input_system,
                    systems::tick_engine_system,
                    systems::apply_updates_system,
                    systems::sync_camera_system,
                )
                    .chain(),
            );
    }
}
