use criterion::{black_box, criterion_group, criterion_main, Criterion};
use splat_viewer::core::{CameraTransform, OrbitCameraController, OrbitConfig, Placement};
use splat_viewer::math::Vec3;
use splat_viewer::traits::{InputEvent, Modifiers, Point2, PointerButton};

/// Benchmark: placement from a fixed orbit state
fn bench_placement(c: &mut Criterion) {
    let controller = OrbitCameraController::new(
        CameraTransform::new(),
        Vec3::new(1.0, 2.0, 3.0),
        OrbitConfig {
            yaw: 33.0,
            pitch: -21.0,
            ..OrbitConfig::default()
        },
    );
    let state = *controller.state();

    c.bench_function("placement_from_state", |b| {
        b.iter(|| Placement::from_state(black_box(&state)))
    });
}

/// Benchmark: a rotate drag of 1000 pointer moves
fn bench_rotate_drag(c: &mut Criterion) {
    let moves: Vec<InputEvent> = (0..1000)
        .map(|i| InputEvent::PointerMove {
            position: Point2::new(i as f32, (i as f32 * 0.5).sin() * 40.0),
        })
        .collect();

    c.bench_function("rotate_drag_1000_moves", |b| {
        b.iter(|| {
            let mut controller = OrbitCameraController::new(
                CameraTransform::new(),
                Vec3::ZERO,
                OrbitConfig::default(),
            );
            controller.handle_event(&InputEvent::PointerDown {
                button: PointerButton::Primary,
                modifiers: Modifiers::NONE,
                position: Point2::new(0.0, 0.0),
            });
            for event in &moves {
                controller.handle_event(black_box(event));
            }
            controller.into_render_target()
        })
    });
}

criterion_group!(benches, bench_placement, bench_rotate_drag);
criterion_main!(benches);
