//! Global reductions over `f64` arrays.
//!
//! `f64::min`/`f64::max` skip NaN, which would hide a division by a zero row
//! mean. These folds return NaN as soon as one element is NaN.

use ndarray::{ArrayBase, Data, Dimension};

/// Smallest element, or NaN if any element is NaN.
pub fn nan_min<S, D>(values: &ArrayBase<S, D>) -> f64
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    values.fold(f64::INFINITY, |acc, &v| {
        if acc.is_nan() || v.is_nan() {
            f64::NAN
        } else {
            acc.min(v)
        }
    })
}

/// Largest element, or NaN if any element is NaN.
pub fn nan_max<S, D>(values: &ArrayBase<S, D>) -> f64
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    values.fold(f64::NEG_INFINITY, |acc, &v| {
        if acc.is_nan() || v.is_nan() {
            f64::NAN
        } else {
            acc.max(v)
        }
    })
}
