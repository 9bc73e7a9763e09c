pub mod config;

pub use config::{DegeneratePolicy, ScaleOptions};
