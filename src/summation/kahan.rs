//! Kahan compensated summation

use core::fmt::Debug;

use num_traits::Float;

use crate::traits::Summation;

/// Classic Kahan compensated sum.
///
/// Tracks the negative low-order bits lost by each addition in a correction
/// term and folds them back into the next add. The accumulated error stays
/// bounded by a few ULPs of the result, independent of how many terms were
/// summed.
///
/// The correction step assumes `|correction| <= |value|` for incoming
/// values. When terms may dwarf the running sum, use
/// [`Neumaier`](crate::summation::Neumaier) instead.
///
/// # Example
///
/// ```
/// use ewstats::summation::Kahan;
/// use ewstats::traits::Summation;
///
/// let mut sum = Kahan::<f64>::default();
/// for _ in 0..10 {
///     sum.add(0.1);
/// }
/// assert_eq!(sum.total(), 1.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Kahan<D> {
    sum: D,
    /// Negative low-order bits of `sum`.
    correction: D,
}

impl<D: Float> Kahan<D> {
    /// Create an empty sum.
    pub fn new() -> Self {
        Self {
            sum: D::zero(),
            correction: D::zero(),
        }
    }
}

impl<D: Float + Debug + Default> Summation<D> for Kahan<D> {
    #[inline]
    fn add(&mut self, value: D) {
        let y = value - self.correction;
        let t = self.sum + y;
        // Must not be reassociated by the compiler (no fast-math in rustc).
        self.correction = (t - self.sum) - y;
        self.sum = t;
    }

    #[inline]
    fn total(&self) -> D {
        self.sum
    }

    #[inline]
    fn reset(&mut self) {
        self.sum = D::zero();
        self.correction = D::zero();
    }
}
