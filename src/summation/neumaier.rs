//! Neumaier (improved Kahan) compensated summation

use core::fmt::Debug;

use num_traits::Float;

use crate::traits::Summation;

/// Neumaier's variant of compensated summation.
///
/// Branches on the magnitudes of the running sum and the incoming value to
/// decide which operand contributes the correction, so it stays accurate
/// even when a term exceeds the running sum, the case plain
/// [`Kahan`](crate::summation::Kahan) mishandles. Costs one extra comparison
/// per add.
///
/// Unlike `Kahan`, the correction is kept out of the running sum until
/// [`total`](Summation::total) is called, which returns `sum + correction`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Neumaier<D> {
    sum: D,
    /// Low-order bits of `sum`, applied on `total()`.
    correction: D,
}

impl<D: Float> Neumaier<D> {
    /// Create an empty sum.
    pub fn new() -> Self {
        Self {
            sum: D::zero(),
            correction: D::zero(),
        }
    }
}

impl<D: Float + Debug + Default> Summation<D> for Neumaier<D> {
    #[inline]
    fn add(&mut self, value: D) {
        let t = self.sum + value;
        if self.sum.abs() >= value.abs() {
            self.correction = self.correction + ((self.sum - t) + value);
        } else {
            self.correction = self.correction + ((value - t) + self.sum);
        }
        self.sum = t;
    }

    #[inline]
    fn total(&self) -> D {
        self.sum + self.correction
    }

    #[inline]
    fn reset(&mut self) {
        self.sum = D::zero();
        self.correction = D::zero();
    }
}
