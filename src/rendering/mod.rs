pub mod gradient;
pub mod reduce;
pub mod sample;

pub use gradient::{remove_vertical_gradient, GradientResult};
pub use sample::Sample;
