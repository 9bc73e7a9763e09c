//! Numeric sample types accepted by the gradient pipeline.
//!
//! All arithmetic runs in `f64`. [`Sample`] is the single widening step from
//! whatever the caller stores (8-bit pixels, 16-bit sensor counts, floats)
//! into that working type.

/// A scalar intensity that can be widened to `f64`.
///
/// Implemented for all primitive integers and both float widths. 64-bit
/// integers above 2^53 lose precision in the widening.
///
/// # Example
///
/// ```
/// use bubbles::Sample;
///
/// assert_eq!(200u8.to_f64(), 200.0);
/// assert_eq!((-3i16).to_f64(), -3.0);
/// assert_eq!(0.5f32.to_f64(), 0.5);
/// ```
pub trait Sample: Copy {
    fn to_f64(self) -> f64;
}

macro_rules! impl_sample {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Sample for $ty {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_sample!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);
