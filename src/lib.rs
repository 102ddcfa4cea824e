//! # Ewstats
//!
//! Numerically stable exponentially weighted running statistics for Rust.
//!
//! Ewstats maintains a weighted running mean, variance, minimum, and maximum
//! over a stream of samples in O(1) time and space per update, using
//! compensated summation to keep rounding error bounded. It is built for
//! real-time producers (audio callbacks, schedulers, network pollers) where
//! blocking and heap allocation are off the table.
//!
//! ## Features
//!
//! - **Exponential (IIR) weighting**: the most recent sample has weight 1,
//!   each older sample decays by a factor `alpha` per step. With `alpha == 1`
//!   this reduces exactly to Welford's online algorithm.
//! - **Compensated summation**: [`Kahan`](summation::Kahan) and
//!   [`Neumaier`](summation::Neumaier) accumulators keep the mean's rounding
//!   error bounded independent of sample count.
//! - **Real-time safe**: `add`, accessors, and `reset` never allocate, never
//!   block, and never panic.
//! - **Generic numeric axes**: sample type, accumulation precision, and
//!   summation policy are independent type parameters.
//! - **Test oracle**: [`ReferenceStats`](statistics::ReferenceStats)
//!   recomputes the same aggregates naively from full history, for
//!   validating the streaming engine.
//!
//! ## Quick Start
//!
//! ```rust
//! use ewstats::prelude::*;
//!
//! // Rectangular weighting (alpha = 1): plain Welford statistics.
//! let mut stats = WeightedStats::<f64>::new();
//! for v in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
//!     stats.add(v);
//! }
//! assert!((stats.mean() - 5.0).abs() < 1e-9);
//! assert!((stats.pop_variance() - 4.0).abs() < 1e-9);
//!
//! // Exponential decay: recent samples dominate.
//! let mut ewma = WeightedStats::<f64>::with_alpha(0.5);
//! for v in [0.0, 0.0, 12.0] {
//!     ewma.add(v);
//! }
//! // weight = 1 + 0.5 + 0.25, newest sample carries weight 1
//! assert!((ewma.mean() - 12.0 / 1.75).abs() < 1e-9);
//! ```
//!
//! ## Real-time contract
//!
//! Each engine instance is owned and mutated by exactly one logical writer;
//! there is no internal synchronization. [`WeightedStats::describe`] is the
//! single engine operation that allocates (it formats a summary string) and
//! must be kept off latency-critical paths. `ReferenceStats` allocates on
//! every add and is for test and verification code only.
//!
//! ## Feature Flags
//!
//! - `std` (default): standard library support
//! - `serde`: serialization for accumulators and statistics

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Core traits always available
pub mod traits;

pub mod math;
pub mod reduce;
pub mod statistics;
pub mod summation;

pub mod prelude {
    pub use crate::statistics::{ReferenceStats, WeightedStats};
    pub use crate::summation::{Kahan, Neumaier};
    pub use crate::traits::{Sample, Summation};
}

pub use statistics::{ReferenceStats, WeightedStats};
pub use summation::{Kahan, Neumaier};
