//! Compensated summation accumulators
//!
//! Direct floating-point summation loses low-order bits on every add, and the
//! accumulated error grows with the number of terms. The accumulators here
//! carry an explicit correction term so the error stays bounded instead.
//!
//! Two policies are provided:
//!
//! - [`Kahan`]: the classic compensated sum. Assumes the correction never
//!   exceeds the incoming term's magnitude, which holds when terms arrive
//!   with diminishing relative weight (as in a running-mean update, where
//!   each delta is already divided by a growing weight).
//! - [`Neumaier`]: additionally handles incoming terms larger in magnitude
//!   than the running sum, at the cost of one comparison per add. Strictly
//!   more robust.
//!
//! # Example
//!
//! ```
//! use ewstats::summation::Neumaier;
//! use ewstats::traits::Summation;
//!
//! let mut sum = Neumaier::<f64>::default();
//! for v in [1.0, 1e100, 1.0, -1e100] {
//!     sum.add(v);
//! }
//! // Direct summation returns 0.0 here; Neumaier recovers the true sum.
//! assert_eq!(sum.total(), 2.0);
//! ```

mod kahan;
mod neumaier;

pub use kahan::Kahan;
pub use neumaier::Neumaier;
