//! Assertion helpers for tests.

use ndarray::Array2;
use pretty_assertions::assert_eq;

/// Assert the output image spans the full 8-bit range.
pub fn assert_full_range(image: &Array2<u8>) {
    let min = image.iter().copied().min();
    let max = image.iter().copied().max();
    assert_eq!(min, Some(0), "Expected darkest pixel to be 0");
    assert_eq!(max, Some(255), "Expected brightest pixel to be 255");
}

/// Assert two images have the same shape.
pub fn assert_same_shape<A, B>(input: &Array2<A>, output: &Array2<B>) {
    assert_eq!(
        input.dim(),
        output.dim(),
        "Output shape must equal input shape"
    );
}

/// Assert every row of `image` matches the first row to within `tolerance`
/// levels. Floating-point division can land a sample one ulp either side of
/// an integer boundary, so exact equality is too strict for most inputs.
pub fn assert_rows_match(image: &Array2<u8>, tolerance: u8) {
    let first = image.row(0);
    for (r, row) in image.rows().into_iter().enumerate() {
        for (c, (&a, &b)) in first.iter().zip(row.iter()).enumerate() {
            assert!(
                a.abs_diff(b) <= tolerance,
                "Row {} col {} is {}, row 0 is {} (tolerance {})",
                r,
                c,
                b,
                a,
                tolerance
            );
        }
    }
}
