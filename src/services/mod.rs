pub mod gradient_scaler;

pub use gradient_scaler::GradientScaler;
