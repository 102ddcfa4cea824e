//! Core traits for the statistics engine
//!
//! Two independent configuration axes, modeled as traits rather than a type
//! hierarchy: [`Summation`] selects the compensated-summation policy used for
//! accumulation, and [`Sample`] describes the scalar sample type being
//! observed (including its empty-stream min/max sentinels).

use core::fmt::Debug;

use num_traits::Float;

/// Accumulation policy for a running scalar sum.
///
/// Implementations must be O(1) per [`add`](Summation::add) with no
/// allocation and no failure mode; NaN and infinity inputs propagate per
/// IEEE-754 arithmetic. [`Default`] is the empty (zero) sum.
///
/// Compensated implementations ([`Kahan`](crate::summation::Kahan),
/// [`Neumaier`](crate::summation::Neumaier)) keep accumulated rounding error
/// bounded as the number of additions grows, unlike direct summation whose
/// error grows with count. The accumulation float type itself also implements
/// `Summation` as the uncompensated baseline, for callers that measure and
/// decide they do not need the correction term.
pub trait Summation<D>: Clone + Debug + Default {
    /// Add a value to the running sum.
    fn add(&mut self, value: D);

    /// Current best estimate of the mathematical sum.
    fn total(&self) -> D;

    /// Return to the empty (zero) sum.
    fn reset(&mut self);
}

/// Direct (uncompensated) summation: the float type is its own accumulator.
impl<D: Float + Debug + Default> Summation<D> for D {
    #[inline]
    fn add(&mut self, value: D) {
        *self = *self + value;
    }

    #[inline]
    fn total(&self) -> D {
        *self
    }

    #[inline]
    fn reset(&mut self) {
        *self = D::zero();
    }
}

/// A scalar sample type with ordering and empty-stream sentinels.
///
/// `POS_BOUND` / `NEG_BOUND` are the initial values of a running min / max:
/// positive and negative infinity for float types, or the type's `MAX` /
/// `MIN` for integer types that have no infinity. Any finite sample
/// compares strictly inside the sentinels, so the first add always
/// establishes real extrema.
///
/// Comparisons go through `PartialOrd` so that float NaN behaves as in
/// IEEE-754: a NaN sample compares false against the current extremum in
/// both directions and therefore never becomes min or max.
pub trait Sample: Copy + PartialOrd + Debug {
    /// Sentinel above every sample value; initial running minimum.
    const POS_BOUND: Self;

    /// Sentinel below every sample value; initial running maximum.
    const NEG_BOUND: Self;
}

macro_rules! impl_sample_float {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                const POS_BOUND: Self = <$t>::INFINITY;
                const NEG_BOUND: Self = <$t>::NEG_INFINITY;
            }
        )*
    };
}

macro_rules! impl_sample_int {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                const POS_BOUND: Self = <$t>::MAX;
                const NEG_BOUND: Self = <$t>::MIN;
            }
        )*
    };
}

impl_sample_float!(f32, f64);
impl_sample_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
