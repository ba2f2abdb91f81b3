use mascot_avatar_core::{
    config::Config,
    engine::Avatar,
    inputs::{InputEvent, Inputs, LayoutMode},
    outputs::PartOp,
    rig::PartId,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

const DT: f32 = 1.0 / 60.0;

fn pointer(x: f32, y: f32) -> Inputs {
    Inputs::single(InputEvent::PointerMoved { x, y })
}

/// it should keep the normalized sample inside [-1,1]² for any pointer coordinates
#[test]
fn sample_always_normalized() {
    let mut avatar = Avatar::new(Config::default()).unwrap();
    for (x, y) in [
        (0.0, 0.0),
        (640.0, 360.0),
        (1280.0, 720.0),
        (-500.0, 9000.0),
        (f32::MAX / 2.0, -1.0),
    ] {
        avatar.update(DT, pointer(x, y));
        let s = avatar.pointer();
        assert!((-1.0..=1.0).contains(&s.x), "x={} for input {x}", s.x);
        assert!((-1.0..=1.0).contains(&s.y), "y={} for input {y}", s.y);
    }
}

/// it should converge the head to within 1e-3 of its target in at most 100 frames
#[test]
fn head_converges_to_pointer_target() {
    let mut avatar = Avatar::new(Config::default()).unwrap();
    // Far-right, vertically centered pointer: target yaw = 0.5, pitch = 0.
    avatar.update(DT, pointer(1280.0, 360.0));
    for _ in 0..99 {
        avatar.update(DT, Inputs::default());
    }
    let head = avatar.pose().head;
    approx(head.yaw, 0.5, 1e-3);
    approx(head.pitch, 0.0, 1e-3);
}

/// it should leave the sample untouched when orientation data is missing
#[test]
fn null_orientation_angles_are_ignored() {
    let mut avatar = Avatar::new(Config::default()).unwrap();
    avatar.update(DT, pointer(960.0, 180.0));
    let before = avatar.pointer();

    for (beta, gamma) in [(None, Some(12.0)), (Some(12.0), None), (None, None)] {
        avatar.update(
            DT,
            Inputs::single(InputEvent::OrientationChanged { beta, gamma }),
        );
    }
    assert_eq!(avatar.pointer(), before);
}

/// it should keep eye and core glow inside their bands over very long runtimes
#[test]
fn glow_bands_hold_over_long_runtimes() {
    let mut avatar = Avatar::new(Config::default()).unwrap();
    let eye_band = avatar.config().eye_glow.band();
    let core_band = avatar.config().core_glow.band();

    // Jump the clock far ahead, then sample a window of frames.
    avatar.update(1.0e7, Inputs::default());
    for _ in 0..600 {
        let out = avatar.update(DT, Inputs::default());
        let eye = out.emissive_of(PartId::LeftEye).expect("eye update");
        let core = out.emissive_of(PartId::ChestCore).expect("core update");
        assert!(
            (eye_band.0..=eye_band.1).contains(&eye),
            "eye glow {eye} outside {eye_band:?}"
        );
        assert!(
            (core_band.0..=core_band.1).contains(&core),
            "core glow {core} outside {core_band:?}"
        );
    }
}

/// it should pick up samples posted to the mailbox from another thread
#[test]
fn mailbox_feeds_the_frame_loop() {
    use mascot_avatar_core::inputs::PointerSample;

    let mut avatar = Avatar::new(Config::default()).unwrap();
    let mailbox = avatar.mailbox();
    let feeder = std::thread::spawn(move || {
        mailbox.post(PointerSample::new(0.25, -0.5));
        mailbox.post(PointerSample::new(1.0, 1.0));
    });
    feeder.join().unwrap();

    avatar.update(DT, Inputs::default());
    // Only the last posted sample survives the single slot.
    assert_eq!(avatar.pointer(), PointerSample::new(1.0, 1.0));
}

/// it should emit identical updates for both eyes and both pupils
#[test]
fn eyes_and_pupils_stay_in_lockstep() {
    let mut avatar = Avatar::new(Config::default()).unwrap();
    let out = avatar.update(DT, pointer(200.0, 650.0));
    assert_eq!(
        out.emissive_of(PartId::LeftEye),
        out.emissive_of(PartId::RightEye)
    );
    let offsets: Vec<[f32; 3]> = out
        .updates
        .iter()
        .filter_map(|u| match u.op {
            PartOp::SetPositionOffset(o)
                if u.part == PartId::LeftPupil || u.part == PartId::RightPupil =>
            {
                Some(o)
            }
            _ => None,
        })
        .collect();
    assert_eq!(offsets.len(), 2);
    assert_eq!(offsets[0], offsets[1]);
}

/// it should switch only the camera profile across the layout threshold
#[test]
fn layout_flip_changes_camera_not_topology() {
    let mut avatar = Avatar::new(Config::default()).unwrap();
    assert_eq!(avatar.layout(), LayoutMode::Full);
    let scene_before = avatar.scene();
    let camera_before = avatar.camera();

    avatar.update(
        DT,
        Inputs::single(InputEvent::ViewportResized {
            width: 375.0,
            height: 667.0,
        }),
    );

    assert_eq!(avatar.layout(), LayoutMode::Compact);
    assert_ne!(avatar.camera(), camera_before);
    assert_eq!(avatar.camera(), avatar.config().camera.compact);

    let scene_after = avatar.scene();
    assert_eq!(scene_before.len(), scene_after.len());
    for (a, b) in scene_before.iter().zip(scene_after.iter()) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.parent, b.parent);
    }
    assert_eq!(avatar.particles().len(), avatar.config().particles.count);
}

/// it should produce identical Outputs for the same dt/event sequence (determinism)
#[test]
fn determinism_same_sequence_same_outputs() {
    let script: Vec<(f32, Inputs)> = vec![
        (DT, pointer(100.0, 100.0)),
        (DT, Inputs::default()),
        (
            0.032,
            Inputs::single(InputEvent::OrientationChanged {
                beta: Some(55.0),
                gamma: Some(-8.0),
            }),
        ),
        (0.0, Inputs::default()),
        (0.1, pointer(1200.0, 700.0)),
    ];

    let mut a = Avatar::new(Config::default()).unwrap();
    let mut b = Avatar::new(Config::default()).unwrap();
    for (dt, inputs) in &script {
        let ja = serde_json::to_string(a.update(*dt, inputs.clone())).unwrap();
        let jb = serde_json::to_string(b.update(*dt, inputs.clone())).unwrap();
        assert_eq!(ja, jb);
    }
}

/// it should drive every articulated part each tick
#[test]
fn update_touches_all_driven_parts() {
    let mut avatar = Avatar::new(Config::default()).unwrap();
    let out = avatar.update(DT, pointer(640.0, 360.0));
    for id in PartId::DRIVEN {
        assert!(
            out.updates.iter().any(|u| u.part == id),
            "no update for {id:?}"
        );
    }
}

/// it should reject invalid configs instead of constructing an avatar
#[test]
fn invalid_config_is_rejected() {
    let mut cfg = Config::default();
    cfg.torso.smoothing = 2.0;
    assert!(Avatar::new(cfg).is_err());
}

/// it should survive non-finite and negative dt without corrupting the clock
#[test]
fn hostile_dt_is_clamped() {
    let mut avatar = Avatar::new(Config::default()).unwrap();
    avatar.update(f32::NAN, Inputs::default());
    avatar.update(-5.0, Inputs::default());
    assert_eq!(avatar.elapsed(), 0.0);
    avatar.update(DT, Inputs::default());
    assert!(avatar.elapsed() > 0.0);
}

/// it should build an avatar from the shared config fixture
#[test]
fn fixture_config_builds() {
    let raw = mascot_test_fixtures::config("tuned").expect("fixture present");
    let cfg = Config::from_json(&raw).expect("fixture parses");
    assert_eq!(cfg.particles.count, 80);
    let mut avatar = Avatar::new(cfg).unwrap();
    let out = avatar.update(DT, Inputs::default());
    assert!(!out.is_empty());
}

/// it should replay the scripted event fixture deterministically
#[test]
fn fixture_script_replays() {
    let raw = mascot_test_fixtures::script("sweep").expect("fixture present");
    let events: Vec<InputEvent> = serde_json::from_str(&raw).expect("script parses");
    assert!(!events.is_empty());

    let mut avatar = Avatar::new(Config::default()).unwrap();
    for event in events {
        avatar.update(DT, Inputs::single(event));
        let s = avatar.pointer();
        assert!((-1.0..=1.0).contains(&s.x));
        assert!((-1.0..=1.0).contains(&s.y));
    }
}
