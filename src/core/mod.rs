pub mod input_adapter;
pub mod orbit;
pub mod subscription;
pub mod transform;

pub use input_adapter::WinitInputAdapter;
pub use orbit::{
    attach, DragMode, OrbitCameraController, OrbitConfig, OrbitState, Placement, RESET_DISTANCE,
};
pub use subscription::{InputHub, Subscription};
pub use transform::CameraTransform;
