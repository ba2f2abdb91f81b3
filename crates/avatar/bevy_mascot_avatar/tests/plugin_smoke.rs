use bevy::prelude::*;
use bevy_mascot_avatar::{MascotAvatarPlugin, MascotEngine, PendingUpdates};

/// it should insert the engine and staging resources when the plugin is added
#[test]
fn plugin_inserts_resources() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(MascotAvatarPlugin::default());

    assert!(app.world().get_resource::<MascotEngine>().is_some());
    assert!(app.world().get_resource::<PendingUpdates>().is_some());
}

/// it should tick the core every frame without a render surface
#[test]
fn headless_updates_advance_the_clock() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(MascotAvatarPlugin::default());

    for _ in 0..5 {
        std::thread::sleep(std::time::Duration::from_millis(2));
        app.update();
    }

    let engine = app.world().get_resource::<MascotEngine>().unwrap();
    assert!(engine.0.elapsed() > 0.0);
}

/// it should fall back to defaults when handed an invalid config
#[test]
fn invalid_config_falls_back_to_defaults() {
    let mut bad = mascot_avatar_core::Config::default();
    bad.head.smoothing = 5.0;

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(MascotAvatarPlugin::with_config(bad));

    let engine = app.world().get_resource::<MascotEngine>().unwrap();
    assert_eq!(engine.0.config().head.smoothing, 0.08);
}

/// it should build from the shared config fixture
#[test]
fn fixture_config_plugin() {
    let raw = mascot_test_fixtures::config("tuned").expect("fixture present");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("fixture is JSON");
    assert_eq!(json["particles"]["count"], 80);
    let cfg = mascot_avatar_core::Config::from_json(&raw).expect("fixture parses");

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(MascotAvatarPlugin::with_config(cfg));

    let engine = app.world().get_resource::<MascotEngine>().unwrap();
    assert_eq!(engine.0.config().particles.count, 80);
}
