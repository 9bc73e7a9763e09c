use ndarray::{Array2, ArrayView2, AsArray, Ix2};

use crate::error::ScaleError;
use crate::models::{DegeneratePolicy, ScaleOptions};
use crate::rendering::{remove_vertical_gradient, Sample};

/// Service wrapper around [`remove_vertical_gradient`].
///
/// Holds the [`ScaleOptions`] and adds structured logging. The scaler keeps
/// no per-call state, so one instance can be shared between threads.
///
/// # Example
///
/// ```
/// use bubbles::{GradientScaler, ScaleOptions};
/// use ndarray::array;
///
/// let scaler = GradientScaler::new(ScaleOptions::new());
/// let image = array![[10u16, 20], [30, 40]];
///
/// let flattened = scaler.scale(&image).unwrap();
/// assert_eq!(flattened.dim(), (2, 2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GradientScaler {
    options: ScaleOptions,
}

impl GradientScaler {
    pub fn new(options: ScaleOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ScaleOptions {
        &self.options
    }

    /// Remove the vertical gradient from `image` and return an 8-bit image of
    /// the same shape.
    pub fn scale<'a, T, V>(&self, image: V) -> Result<Array2<u8>, ScaleError>
    where
        T: Sample + 'a,
        V: AsArray<'a, T, Ix2>,
    {
        let image: ArrayView2<'a, T> = image.into();
        let policy = self.options.policy;
        tracing::debug!(
            rows = image.nrows(),
            cols = image.ncols(),
            %policy,
            "Removing vertical gradient"
        );

        let result = match remove_vertical_gradient(image, policy) {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!(%e, "Gradient removal rejected image");
                return Err(e);
            }
        };

        if policy == DegeneratePolicy::Unguarded {
            for (row, &mean) in result.row_means.iter().enumerate() {
                if mean == 0.0 || !mean.is_finite() {
                    tracing::warn!(
                        row,
                        mean,
                        "Degenerate row mean, output contains saturated values"
                    );
                }
            }
            if !(result.range > 0.0 && result.range.is_finite()) {
                tracing::warn!(
                    range = result.range,
                    "Degenerate intensity range, output contains saturated values"
                );
            }
        }

        tracing::debug!(offset = result.offset, range = result.range, "Gradient removed");

        Ok(result.image)
    }
}
