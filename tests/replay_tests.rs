use splat_viewer::config::ViewerConfig;
use splat_viewer::math::Vec3;
use splat_viewer::replay::{self, ReplayScript};

fn approx_eq(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

#[test]
fn test_replay_rotate_then_zoom() {
    let script = ReplayScript::from_json(
        r#"[
            {"type":"pointer_down","button":"primary","position":{"x":0.0,"y":0.0}},
            {"type":"pointer_move","position":{"x":100.0,"y":0.0}},
            {"type":"pointer_up"},
            {"type":"wheel","delta_y":50.0}
        ]"#,
    )
    .unwrap();

    let placements = replay::run(&ViewerConfig::default(), &script);
    assert_eq!(placements.len(), 4);

    // press alone does not move the camera
    assert!(approx_eq(placements[0].position, Vec3::new(0.0, 0.0, 5.0)));

    let yaw = (-30.0f32).to_radians();
    assert!(approx_eq(
        placements[1].position,
        Vec3::new(5.0 * yaw.sin(), 0.0, 5.0 * yaw.cos())
    ));
    assert_eq!(placements[2], placements[1]);
    assert!(approx_eq(
        placements[3].position,
        Vec3::new(10.0 * yaw.sin(), 0.0, 10.0 * yaw.cos())
    ));
}

#[test]
fn test_replay_shift_pan() {
    let script = ReplayScript::from_json(
        r#"[
            {"type":"pointer_down","button":"primary","modifiers":{"shift":true},"position":{"x":0.0,"y":0.0}},
            {"type":"pointer_move","position":{"x":20.0,"y":0.0}}
        ]"#,
    )
    .unwrap();

    let placements = replay::run(&ViewerConfig::default(), &script);
    assert!(approx_eq(placements[1].target, Vec3::new(1.0, 0.0, 0.0)));
    assert!(approx_eq(placements[1].position, Vec3::new(1.0, 0.0, 5.0)));
}

#[test]
fn test_replay_pinch_uses_config() {
    let config: ViewerConfig =
        serde_json::from_str(r#"{"target":{"x":0.0,"y":1.0,"z":0.0},"camera":{"distance":8.0}}"#)
            .unwrap();
    let script = ReplayScript::from_json(
        r#"[
            {"type":"touch_start","touches":[{"id":0,"position":{"x":0.0,"y":0.0}},{"id":1,"position":{"x":100.0,"y":0.0}}]},
            {"type":"touch_move","touches":[{"id":0,"position":{"x":0.0,"y":0.0}},{"id":1,"position":{"x":150.0,"y":0.0}}]},
            {"type":"touch_end","touches":[]}
        ]"#,
    )
    .unwrap();

    let placements = replay::run(&config, &script);
    assert!(approx_eq(placements[1].position, Vec3::new(0.0, 1.0, 7.5)));
    assert_eq!(placements[1].target, Vec3::new(0.0, 1.0, 0.0));
}

#[test]
fn test_replay_is_deterministic() {
    let script = ReplayScript::from_json(
        r#"[
            {"type":"pointer_down","button":"primary","position":{"x":5.0,"y":5.0}},
            {"type":"pointer_move","position":{"x":37.0,"y":-12.0}},
            {"type":"wheel","delta_y":-13.0}
        ]"#,
    )
    .unwrap();

    let config = ViewerConfig::default();
    assert_eq!(replay::run(&config, &script), replay::run(&config, &script));
}
