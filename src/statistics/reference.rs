//! Naive history-based statistics oracle

use core::fmt::Display;

use num_traits::{AsPrimitive, Float};

#[cfg(feature = "std")]
use std::{collections::VecDeque, string::String};

#[cfg(not(feature = "std"))]
use alloc::{collections::VecDeque, format, string::String};

use crate::traits::Sample;

/// Naive weighted statistics over a fully retained sample history.
///
/// Computes the same mathematical targets as
/// [`WeightedStats`](crate::statistics::WeightedStats) by storing every
/// `(value, alpha)` pair and recomputing each aggregate from scratch on
/// query: O(N) time per query, O(N) space, an allocation on every
/// [`add`](ReferenceStats::add). It exists as a correctness oracle for
/// testing the streaming engine and deliberately shares no code with it; no
/// compensated summation, no incremental update. Never use it on a
/// latency-sensitive path.
///
/// Intentional divergence from the engine, kept so the two implementations
/// stay independent: min/max initialize unconditionally from the first
/// sample and then use plain comparisons, so a NaN first sample poisons
/// min/max here while the engine would ignore it. Tests on NaN-free streams
/// see identical behavior.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferenceStats<T, D = f64> {
    /// Decay factor for subsequent additions.
    alpha: D,
    min: T,
    max: T,
    /// `(value, alpha at insertion)`, most recent at the front.
    history: VecDeque<(T, D)>,
}

impl<T, D> ReferenceStats<T, D>
where
    T: Sample + AsPrimitive<D> + Default,
    D: Float + 'static,
{
    /// Create an empty oracle with rectangular weighting (`alpha == 1`).
    pub fn new() -> Self {
        Self::with_alpha(D::one())
    }

    /// Create an empty oracle with the given decay factor.
    pub fn with_alpha(alpha: D) -> Self {
        Self {
            alpha,
            min: T::default(),
            max: T::default(),
            history: VecDeque::new(),
        }
    }

    /// Change the decay factor for subsequent additions.
    pub fn set_alpha(&mut self, alpha: D) {
        self.alpha = alpha;
    }

    /// Record one sample together with the current alpha. Allocates.
    pub fn add(&mut self, value: T) {
        if self.history.is_empty() {
            self.min = value;
            self.max = value;
        } else if value > self.max {
            self.max = value;
        } else if value < self.min {
            self.min = value;
        }
        self.history.push_front((value, self.alpha));
    }

    /// Number of samples recorded.
    pub fn n(&self) -> u64 {
        self.history.len() as u64
    }

    /// Check if no samples have been recorded.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Sum of alpha powers, recomputed from history.
    pub fn weight(&self) -> D {
        let mut weight = D::zero();
        let mut alpha_i = D::one();
        for &(_, alpha) in &self.history {
            weight = weight + alpha_i;
            alpha_i = alpha_i * alpha;
        }
        weight
    }

    /// Sum of squared alpha powers, recomputed from history.
    pub fn weight2(&self) -> D {
        let mut weight2 = D::zero();
        let mut alpha2_i = D::one();
        for &(_, alpha) in &self.history {
            weight2 = weight2 + alpha2_i;
            alpha2_i = alpha2_i * alpha * alpha;
        }
        weight2
    }

    /// Weighted mean, recomputed from history; zero when empty.
    pub fn mean(&self) -> D {
        if self.history.is_empty() {
            return D::zero();
        }
        let mut wsum = D::zero();
        let mut alpha_i = D::one();
        for &(value, alpha) in &self.history {
            wsum = wsum + alpha_i * value.as_();
            alpha_i = alpha_i * alpha;
        }
        wsum / self.weight()
    }

    /// Sample (bias-corrected) weighted variance; zero below two samples.
    pub fn variance(&self) -> D {
        if self.n() < 2 {
            D::zero()
        } else {
            let weight = self.weight();
            self.unweighted_variance() / (weight - self.weight2() / weight)
        }
    }

    /// Population weighted variance; zero when empty.
    pub fn pop_variance(&self) -> D {
        if self.history.is_empty() {
            D::zero()
        } else {
            self.unweighted_variance() / self.weight()
        }
    }

    /// Sample standard deviation.
    pub fn stddev(&self) -> D {
        self.variance().sqrt()
    }

    /// Population standard deviation.
    pub fn pop_stddev(&self) -> D {
        self.pop_variance().sqrt()
    }

    /// Minimum recorded sample; `T::default()` when empty.
    pub fn min(&self) -> T {
        self.min
    }

    /// Maximum recorded sample; `T::default()` when empty.
    pub fn max(&self) -> T {
        self.max
    }

    /// Drop all history and return min/max to `T::default()`.
    /// The decay factor is kept.
    pub fn reset(&mut self) {
        self.min = T::default();
        self.max = T::default();
        self.history.clear();
    }

    /// One-line diagnostic summary in the same format as the engine's
    /// [`describe`](crate::statistics::WeightedStats::describe).
    pub fn describe(&self) -> String
    where
        T: Display,
        D: Display,
    {
        if self.history.is_empty() {
            return String::from("unavail");
        }
        let mut out = format!("ave={}", self.mean());
        if self.n() > 1 {
            out.push_str(&format!(" std={}", self.stddev()));
        }
        out.push_str(&format!(" min={} max={}", self.min, self.max));
        out
    }

    /// Σ alpha-power · (value − mean)², the unnormalized weighted variance.
    fn unweighted_variance(&self) -> D {
        let mean = self.mean();
        let mut wsum = D::zero();
        let mut alpha_i = D::one();
        for &(value, alpha) in &self.history {
            let diff = value.as_() - mean;
            wsum = wsum + alpha_i * diff * diff;
            alpha_i = alpha_i * alpha;
        }
        wsum
    }
}

impl<T, D> Default for ReferenceStats<T, D>
where
    T: Sample + AsPrimitive<D> + Default,
    D: Float + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, D> Extend<T> for ReferenceStats<T, D>
where
    T: Sample + AsPrimitive<D> + Default,
    D: Float + 'static,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}
