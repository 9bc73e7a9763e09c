//! Bubbles - vertical gradient removal
//!
//! Flattens a top-to-bottom brightness falloff in single-channel images by
//! dividing each row by its mean, then stretches the result to the full
//! 8-bit range. Images are [`ndarray`] 2-D arrays (rows x columns) of any
//! primitive numeric type.
//!
//! ```
//! use bubbles::scale_wrt_vertical_gradient;
//! use ndarray::array;
//!
//! let image = array![[10u8, 20], [30, 40]];
//! let flattened = scale_wrt_vertical_gradient(&image).unwrap();
//!
//! assert_eq!(flattened, array![[0, 255], [72, 182]]);
//! ```

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;


pub use error::{DimensionError, ScaleError};
pub use models::{DegeneratePolicy, ScaleOptions};
pub use rendering::Sample;
pub use services::GradientScaler;

use ndarray::{Array2, AsArray, Ix2};

/// Remove the vertical gradient from `image` with the default (strict)
/// options.
///
/// Zero-mean rows and images that are flat after row normalization are
/// rejected; see [`GradientScaler`] for the unguarded alternative.
pub fn scale_wrt_vertical_gradient<'a, T, V>(image: V) -> Result<Array2<u8>, ScaleError>
where
    T: Sample + 'a,
    V: AsArray<'a, T, Ix2>,
{
    GradientScaler::default().scale(image)
}
