//! Vertical gradient removal.
//!
//! Images captured under uneven illumination can get steadily darker (or
//! brighter) from top to bottom. When that falloff multiplies every pixel of
//! a row by the same factor, dividing each row by its own mean cancels it.
//! The flattened image is then stretched so its darkest sample is 0 and its
//! brightest is 255.
//!
//! # Steps
//!
//! 1. `m[r]`: mean of row `r`
//! 2. `scaled = input / m[r]` (per row)
//! 3. `shifted = scaled - min(scaled)`
//! 4. `normalized = shifted / max(shifted) * 255`
//! 5. truncate to `u8`
//!
//! The order is fixed: dividing by the maximum before multiplying by 255 is
//! what puts the brightest sample on exactly 255.

use ndarray::{Array1, Array2, ArrayView2, AsArray, Axis, Ix2};

use crate::error::{DimensionError, ScaleError};
use crate::models::DegeneratePolicy;
use crate::rendering::reduce::{nan_max, nan_min};
use crate::rendering::Sample;

/// Output of [`remove_vertical_gradient`].
///
/// Besides the 8-bit image this carries the intermediate statistics, which
/// callers use for diagnostics.
#[derive(Debug, Clone)]
pub struct GradientResult {
    /// Normalized image, same shape as the input.
    pub image: Array2<u8>,

    /// Mean of each input row (the divisors of step 2).
    pub row_means: Array1<f64>,

    /// Global minimum of the row-normalized image (subtracted in step 3).
    pub offset: f64,

    /// Global maximum after the shift (divided out in step 4).
    pub range: f64,
}

/// Remove a multiplicative vertical gradient and stretch to `[0, 255]`.
///
/// Accepts an owned array, a reference to one, or any 2-D view (transposed
/// and strided views included).
///
/// # Errors
///
/// - [`ScaleError::Dimension`] when either axis has length zero, under both
///   policies
///
/// With [`DegeneratePolicy::Strict`]:
/// - [`ScaleError::DegenerateRow`] for the first row whose mean is zero or
///   not finite (a NaN or infinite sample, or a sum that overflows)
/// - [`ScaleError::DegenerateRange`] when every sample is equal after row
///   normalization (or the range is not finite)
///
/// With [`DegeneratePolicy::Unguarded`] degenerate data never fails: the
/// divisions follow IEEE-754 and the final cast saturates (NaN becomes 0).
///
/// # Example
///
/// ```
/// use bubbles::models::DegeneratePolicy;
/// use bubbles::rendering::remove_vertical_gradient;
/// use ndarray::array;
///
/// let image = array![[10u8, 20], [30, 40]];
/// let result = remove_vertical_gradient(&image, DegeneratePolicy::Strict).unwrap();
///
/// assert_eq!(result.row_means, array![15.0, 35.0]);
/// assert_eq!(result.image, array![[0, 255], [72, 182]]);
/// ```
pub fn remove_vertical_gradient<'a, T, V>(
    image: V,
    policy: DegeneratePolicy,
) -> Result<GradientResult, ScaleError>
where
    T: Sample + 'a,
    V: AsArray<'a, T, Ix2>,
{
    let image: ArrayView2<'a, T> = image.into();
    let (rows, cols) = image.dim();
    DimensionError::check(rows, cols)?;

    let strict = policy == DegeneratePolicy::Strict;
    let samples = image.mapv(T::to_f64);

    // Step 1
    let row_means = samples
        .mean_axis(Axis(1))
        .ok_or(DimensionError::EmptyColumns)?;
    if strict {
        if let Some(row) = row_means
            .iter()
            .position(|&mean| mean == 0.0 || !mean.is_finite())
        {
            return Err(ScaleError::DegenerateRow { row });
        }
    }

    // Steps 2-3
    let divisors = row_means.view().insert_axis(Axis(1));
    let scaled = &samples / &divisors;
    let offset = nan_min(&scaled);
    let shifted = scaled.mapv_into(|v| v - offset);

    // Step 4
    let range = nan_max(&shifted);
    if strict && !(range > 0.0 && range.is_finite()) {
        return Err(ScaleError::DegenerateRange);
    }
    let normalized = shifted.mapv_into(|v| v / range * 255.0);

    // Step 5
    Ok(GradientResult {
        image: normalized.mapv(|v| v as u8),
        row_means,
        offset,
        range,
    })
}
