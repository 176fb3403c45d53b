use super::Vec3;

/// Camera position on a sphere of radius `distance` around `target`.
/// Yaw is measured from +Z towards +X, pitch is elevation. Angles in degrees.
pub fn orbit_position(target: Vec3, distance: f32, yaw: f32, pitch: f32) -> Vec3 {
    let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());

    Vec3::new(
        target.x + distance * yaw.sin() * pitch.cos(),
        target.y + distance * pitch.sin(),
        target.z + distance * yaw.cos() * pitch.cos(),
    )
}

/// Horizontal right vector that depends on yaw only.
pub fn yaw_right(yaw: f32) -> Vec3 {
    let yaw = yaw.to_radians();
    Vec3::new(yaw.cos(), 0.0, -yaw.sin())
}

/// Camera-relative (right, up) basis for panning, from the current angles in degrees.
pub fn pan_basis(yaw: f32, pitch: f32) -> (Vec3, Vec3) {
    let right = yaw_right(yaw);
    let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());
    let up = Vec3::new(
        -yaw.sin() * pitch.sin(),
        pitch.cos(),
        -yaw.cos() * pitch.sin(),
    );

    (right, up)
}

/// Up vector for a camera at `position` looking at `target`.
///
/// Derived from the yaw-only right vector and the view direction instead of
/// a fixed world-up, so it stays well defined as pitch approaches ±90°.
/// Falls back to the pan basis up when the eye sits on the target.
pub fn orbit_up(position: Vec3, target: Vec3, yaw: f32, pitch: f32) -> Vec3 {
    let forward = target - position;
    let up = yaw_right(yaw).cross(forward);

    if up.length() > f32::EPSILON {
        up.normalize()
    } else {
        pan_basis(yaw, pitch).1
    }
}
