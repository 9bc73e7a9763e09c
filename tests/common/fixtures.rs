//! Test fixtures: synthetic images with known gradients.

use ndarray::Array2;

/// Small hand-checked images.
pub mod scenarios {
    use ndarray::{array, Array2};

    /// 2x2 image with a mild top-to-bottom brightening
    pub fn two_by_two() -> Array2<u8> {
        array![[10, 20], [30, 40]]
    }

    /// Single uniform row; flat after row normalization
    pub fn uniform_row() -> Array2<u8> {
        array![[5, 5, 5]]
    }

    /// First row entirely black
    pub fn black_first_row() -> Array2<u8> {
        array![[0, 0], [10, 10]]
    }
}

/// Column pattern shared by the gradient fixtures. Non-uniform and never zero.
pub const PATTERN: [f64; 8] = [40.0, 90.0, 55.0, 120.0, 75.0, 30.0, 100.0, 65.0];

/// Build a `rows x PATTERN.len()` image whose rows are `PATTERN` scaled by a
/// linear falloff from 1.0 (top) down to `bottom_gain` (bottom).
pub fn vertical_falloff(rows: usize, bottom_gain: f64) -> Array2<f64> {
    Array2::from_shape_fn((rows, PATTERN.len()), |(r, c)| {
        let t = if rows > 1 {
            r as f64 / (rows - 1) as f64
        } else {
            0.0
        };
        PATTERN[c] * (1.0 + (bottom_gain - 1.0) * t)
    })
}

/// Deterministic pseudo-random 8-bit image (xorshift), no zero rows.
pub fn noisy_u8(rows: usize, cols: usize, seed: u32) -> Array2<u8> {
    let mut state = seed.max(1);
    let mut data = Vec::with_capacity(rows * cols);
    for _ in 0..rows * cols {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        // 1..=255 keeps every row mean positive
        data.push((state % 255) as u8 + 1);
    }
    Array2::from_shape_vec((rows, cols), data).unwrap()
}
