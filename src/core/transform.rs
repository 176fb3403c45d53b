use glam::{Mat4, Vec3};

use crate::math;
use crate::traits::RenderTarget;

/// glam-backed camera transform, the render target handed to the engine side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl CameraTransform {
    pub fn new() -> Self {
        Self {
            eye: Vec3::Z,
            target: Vec3::ZERO,
            up: Vec3::Y,
        }
    }

    /// Right-handed look-at view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }
}

impl Default for CameraTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderTarget for CameraTransform {
    fn set_position(&mut self, position: math::Vec3) {
        self.eye = position.into();
    }

    fn look_at(&mut self, target: math::Vec3, up: math::Vec3) {
        self.target = target.into();
        self.up = up.into();
    }
}
