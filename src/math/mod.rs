mod spherical;
mod vec3;

pub use spherical::{orbit_position, orbit_up, pan_basis, yaw_right};
pub use vec3::Vec3;
