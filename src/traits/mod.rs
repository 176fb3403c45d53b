pub mod input_source;
pub mod render_target;

pub use input_source::*;
pub use render_target::*;
