use crate::math::Vec3;

/// Render target abstraction - the thing a camera controller places.
///
/// This is the only capability the controller needs from a rendering
/// backend.
pub trait RenderTarget {
    /// Move the target to a world-space position
    fn set_position(&mut self, position: Vec3);

    /// Orient the target towards `target` using `up` as the up reference
    fn look_at(&mut self, target: Vec3, up: Vec3);
}

impl<T: RenderTarget + ?Sized> RenderTarget for Box<T> {
    fn set_position(&mut self, position: Vec3) {
        (**self).set_position(position);
    }

    fn look_at(&mut self, target: Vec3, up: Vec3) {
        (**self).look_at(target, up);
    }
}
