pub mod cli;
pub mod config;
pub mod core;
pub mod math;
pub mod replay;
pub mod traits;
pub mod viewer;

pub use crate::core::{attach, OrbitCameraController, OrbitConfig};
pub use math::Vec3;
