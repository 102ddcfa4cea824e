//! Stateless reductions over finite sample slices
//!
//! Batch counterparts of the streaming engine: min, max, sum, and sum of
//! squared deviations over a slice, with the summations routed through a
//! chosen [`Summation`] policy. Empty slices are not an error; the extrema
//! return their sentinels and the sums return zero.
//!
//! # Example
//!
//! ```
//! use ewstats::reduce;
//! use ewstats::summation::Kahan;
//!
//! let data = [2.0f64, -1.0, 5.0];
//! assert_eq!(reduce::max(&data), 5.0);
//! assert_eq!(reduce::min(&data), -1.0);
//! assert_eq!(reduce::sum::<f64, f64, Kahan<f64>>(&data), 6.0);
//! ```

use num_traits::{AsPrimitive, Float};

use crate::traits::{Sample, Summation};

/// Maximum of a slice, or [`Sample::NEG_BOUND`] when empty.
///
/// NaN elements never become the maximum (they compare false against the
/// running extremum), matching the streaming engine's min/max behavior.
pub fn max<T: Sample>(samples: &[T]) -> T {
    let mut max = T::NEG_BOUND;
    for &v in samples {
        if v > max {
            max = v;
        }
    }
    max
}

/// Minimum of a slice, or [`Sample::POS_BOUND`] when empty.
pub fn min<T: Sample>(samples: &[T]) -> T {
    let mut min = T::POS_BOUND;
    for &v in samples {
        if v < min {
            min = v;
        }
    }
    min
}

/// Sum of a slice, accumulated in `D` through the summation policy `S`.
pub fn sum<T, D, S>(samples: &[T]) -> D
where
    T: Sample + AsPrimitive<D>,
    D: Float + 'static,
    S: Summation<D>,
{
    let mut sum = S::default();
    for &v in samples {
        sum.add(v.as_());
    }
    sum.total()
}

/// Sum of squared deviations from `x`: Σ (vᵢ − x)².
///
/// With `x` at the mean this is the unnormalized variance; with the default
/// zero it is the energy of the slice.
pub fn sum_sq_diff<T, D, S>(samples: &[T], x: D) -> D
where
    T: Sample + AsPrimitive<D>,
    D: Float + 'static,
    S: Summation<D>,
{
    let mut sum = S::default();
    for &v in samples {
        let diff = v.as_() - x;
        sum.add(diff * diff);
    }
    sum.total()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summation::{Kahan, Neumaier};

    #[test]
    fn test_min_max() {
        let data = [3.0f64, -7.0, 2.5, 11.0, 0.0];
        assert_eq!(max(&data), 11.0);
        assert_eq!(min(&data), -7.0);
    }

    #[test]
    fn test_empty_returns_sentinels() {
        let empty: [f64; 0] = [];
        assert_eq!(max(&empty), f64::NEG_INFINITY);
        assert_eq!(min(&empty), f64::INFINITY);

        let empty: [i32; 0] = [];
        assert_eq!(max(&empty), i32::MIN);
        assert_eq!(min(&empty), i32::MAX);
    }

    #[test]
    fn test_nan_never_becomes_extremum() {
        let data = [1.0f64, f64::NAN, 3.0];
        assert_eq!(max(&data), 3.0);
        assert_eq!(min(&data), 1.0);

        let only_nan = [f64::NAN];
        assert_eq!(max(&only_nan), f64::NEG_INFINITY);
        assert_eq!(min(&only_nan), f64::INFINITY);
    }

    #[test]
    fn test_sum_policies_agree_on_exact_input() {
        let data = [1.0f64, 2.0, 3.0, 4.0];
        assert_eq!(sum::<f64, f64, f64>(&data), 10.0);
        assert_eq!(sum::<f64, f64, Kahan<f64>>(&data), 10.0);
        assert_eq!(sum::<f64, f64, Neumaier<f64>>(&data), 10.0);
    }

    #[test]
    fn test_sum_integer_samples() {
        let data = [1i32, 2, 3, 4];
        assert_eq!(sum::<i32, f64, Kahan<f64>>(&data), 10.0);
    }

    #[test]
    fn test_sum_sq_diff() {
        let data = [2.0f64, 4.0, 6.0];
        // Deviations from 4: [-2, 0, 2] -> 8
        assert_eq!(sum_sq_diff::<f64, f64, Kahan<f64>>(&data, 4.0), 8.0);
        // Reference zero: 4 + 16 + 36 = 56
        assert_eq!(sum_sq_diff::<f64, f64, Kahan<f64>>(&data, 0.0), 56.0);

        let empty: [f64; 0] = [];
        assert_eq!(sum_sq_diff::<f64, f64, Kahan<f64>>(&empty, 1.0), 0.0);
    }

    #[test]
    fn test_f32_slice_wide_accumulation() {
        // f32 samples accumulated in f64: exact for these values.
        let data = [0.5f32; 1000];
        assert_eq!(sum::<f32, f64, Kahan<f64>>(&data), 500.0);
    }
}
