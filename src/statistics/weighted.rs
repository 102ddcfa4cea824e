//! Streaming weighted statistics engine

use core::fmt::{Debug, Display};

use num_traits::{AsPrimitive, Float};

#[cfg(feature = "std")]
use std::string::String;

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

use crate::summation::Kahan;
use crate::traits::{Sample, Summation};

/// Exponentially weighted running mean, variance, min, and max.
///
/// The weighting is IIR-style: the most recent sample has weight 1 and each
/// older sample's weight decays by `alpha` per subsequent step. With
/// `alpha == 1` (the [`new`](WeightedStats::new) default) this is
/// rectangular weighting and the update reduces exactly to Welford's online
/// algorithm:
///
/// ```text
/// weight  = Σ_{i=1..n} alpha^{n-i}
/// mean    = (1 / weight) Σ alpha^{n-i} x_i
/// var     = (1 / weight) Σ alpha^{n-i} (x_i - mean)²
/// ```
///
/// Three type parameters configure the engine independently:
///
/// - `T`: sample type (floats, or integers for min/max/count semantics)
/// - `D`: accumulation type, at least as wide as `T` (default `f64`)
/// - `S`: [`Summation`] policy for the mean (default [`Kahan`]); the mean
///   update feeds deltas already divided by the growing weight, so Kahan's
///   magnitude assumption holds
///
/// # Real-time safety
///
/// [`add`](WeightedStats::add), the accessors, and
/// [`reset`](WeightedStats::reset) are O(1), never allocate, and never
/// panic. [`describe`](WeightedStats::describe) builds a `String` and is the
/// one method to keep off latency-critical paths. Instances carry no
/// internal synchronization; one logical writer owns each instance.
///
/// # Long-running accumulation
///
/// At `alpha == 1` the weight loses precision after roughly
/// 2^mantissa-bits additions (2^52 for `f64`); reset periodically, or use
/// `alpha <= 1 - 32 * epsilon`, which keeps the weight bounded.
///
/// # Example
///
/// ```
/// use ewstats::statistics::WeightedStats;
///
/// let mut stats = WeightedStats::<f64>::new();
/// for v in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     stats.add(v);
/// }
///
/// assert!((stats.mean() - 5.0).abs() < 1e-12);
/// assert!((stats.pop_variance() - 4.0).abs() < 1e-12);
/// assert_eq!(stats.min(), 2.0);
/// assert_eq!(stats.max(), 9.0);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedStats<T, D = f64, S = Kahan<f64>> {
    /// Decay factor applied per step; 1 means rectangular weighting.
    alpha: D,
    /// Running minimum, `T::POS_BOUND` when empty.
    min: T,
    /// Running maximum, `T::NEG_BOUND` when empty.
    max: T,
    /// Samples added since the last reset.
    count: u64,
    /// Sum of alpha powers.
    weight: D,
    /// Sum of squared alpha powers.
    weight2: D,
    /// Compensated running weighted mean.
    mean: S,
    /// Running unnormalized weighted variance (M2 in Welford's algorithm).
    m2: D,
}

impl<T, D, S> WeightedStats<T, D, S>
where
    T: Sample + AsPrimitive<D>,
    D: Float + Debug + Default + 'static,
    S: Summation<D>,
{
    /// Create an empty engine with rectangular weighting (`alpha == 1`).
    pub fn new() -> Self {
        Self::with_alpha(D::one())
    }

    /// Create an empty engine with the given decay factor.
    ///
    /// `alpha` is normally in (0, 1]. Values above 1 are accepted and left
    /// unclamped: callers may temporarily boost `alpha` past 1 to emphasize
    /// samples known to be extra reliable. Long-term numerical stability at
    /// `alpha > 1` is the caller's responsibility.
    pub fn with_alpha(alpha: D) -> Self {
        Self {
            alpha,
            min: T::POS_BOUND,
            max: T::NEG_BOUND,
            count: 0,
            weight: D::zero(),
            weight2: D::zero(),
            mean: S::default(),
            m2: D::zero(),
        }
    }

    /// Create an engine pre-loaded with a slice of samples.
    pub fn from_samples(samples: &[T], alpha: D) -> Self {
        let mut stats = Self::with_alpha(alpha);
        for &value in samples {
            stats.add(value);
        }
        stats
    }

    /// Change the decay factor for subsequent additions.
    ///
    /// History already absorbed keeps the weights it was recorded with; only
    /// future [`add`](WeightedStats::add) calls see the new `alpha`. Not
    /// clamped (see [`with_alpha`](WeightedStats::with_alpha)).
    pub fn set_alpha(&mut self, alpha: D) {
        self.alpha = alpha;
    }

    /// Add one sample. O(1), no allocation, no panic.
    ///
    /// A NaN sample never becomes min or max (the comparisons below are
    /// false in both directions for NaN), but it does enter the mean and
    /// variance recurrences, which then stay NaN until
    /// [`reset`](WeightedStats::reset). The count increments either way.
    pub fn add(&mut self, value: T) {
        // Comparison order rejects NaN.
        if value > self.max {
            self.max = value;
        }
        if value < self.min {
            self.min = value;
        }
        self.count += 1;

        let value: D = value.as_();
        let delta = value - self.mean.total();
        self.weight = D::one() + self.alpha * self.weight;
        self.weight2 = D::one() + self.alpha * self.alpha * self.weight2;
        self.mean.add(delta / self.weight);
        // Second factor uses the post-update mean; that makes the increment
        // non-negative, mirroring Welford's m2 update.
        self.m2 = self.alpha * self.m2 + delta * (value - self.mean.total());
    }

    /// Number of samples added since the last reset.
    pub fn n(&self) -> u64 {
        self.count
    }

    /// Check if no samples have been added.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Current decay factor.
    pub fn alpha(&self) -> D {
        self.alpha
    }

    /// Accumulated sum of alpha powers; equals `n` when `alpha == 1`.
    pub fn weight(&self) -> D {
        self.weight
    }

    /// Weighted running mean; zero when empty.
    pub fn mean(&self) -> D {
        self.mean.total()
    }

    /// Running minimum. `T::POS_BOUND` when empty; NaN samples are ignored.
    pub fn min(&self) -> T {
        self.min
    }

    /// Running maximum. `T::NEG_BOUND` when empty; NaN samples are ignored.
    pub fn max(&self) -> T {
        self.max
    }

    /// Sample (bias-corrected) weighted variance.
    ///
    /// Zero until two samples have been added; sample variance is undefined
    /// below that. Rounding may leave a tiny negative result where the true
    /// variance is zero; that is an expected floating-point artifact.
    pub fn variance(&self) -> D {
        if self.count < 2 {
            D::zero()
        } else {
            self.m2 / self.sample_weight()
        }
    }

    /// Population weighted variance (`m2 / weight`); zero when empty.
    pub fn pop_variance(&self) -> D {
        if self.count < 1 {
            D::zero()
        } else {
            self.m2 / self.weight
        }
    }

    /// Sample standard deviation: square root of [`variance`](Self::variance).
    ///
    /// Uses the runtime square root; for const contexts see
    /// [`math::sqrt`](crate::math::sqrt).
    pub fn stddev(&self) -> D {
        self.variance().sqrt()
    }

    /// Population standard deviation.
    pub fn pop_stddev(&self) -> D {
        self.pop_variance().sqrt()
    }

    /// Return to the empty state. The decay factor is kept.
    pub fn reset(&mut self) {
        self.min = T::POS_BOUND;
        self.max = T::NEG_BOUND;
        self.count = 0;
        self.weight = D::zero();
        self.weight2 = D::zero();
        self.mean.reset();
        self.m2 = D::zero();
    }

    /// One-line diagnostic summary. Allocates; not for the real-time path.
    ///
    /// Format: `"unavail"` when empty, otherwise `"ave=<mean>"`, then
    /// `" std=<stddev>"` when more than one sample has been added, then
    /// `" min=<min> max=<max>"`.
    pub fn describe(&self) -> String
    where
        T: Display,
        D: Display,
    {
        if self.count == 0 {
            return String::from("unavail");
        }
        let mut out = format!("ave={}", self.mean());
        if self.count > 1 {
            // Sample standard deviation (the sample variance is unbiased,
            // its square root is not entirely).
            out.push_str(&format!(" std={}", self.stddev()));
        }
        out.push_str(&format!(" min={} max={}", self.min, self.max));
        out
    }

    /// Reliability-corrected effective degrees of freedom for unbiasing the
    /// variance, given that the mean was estimated from the same stream.
    /// Reduces to `weight - 1` when alpha is constant 1.
    fn sample_weight(&self) -> D {
        self.weight - self.weight2 / self.weight
    }
}

impl<T, D, S> Default for WeightedStats<T, D, S>
where
    T: Sample + AsPrimitive<D>,
    D: Float + Debug + Default + 'static,
    S: Summation<D>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, D, S> Extend<T> for WeightedStats<T, D, S>
where
    T: Sample + AsPrimitive<D>,
    D: Float + Debug + Default + 'static,
    S: Summation<D>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}
