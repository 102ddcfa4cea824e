//! Exponentially weighted running statistics
//!
//! This module provides the streaming engine [`WeightedStats`] (O(1) time
//! and space per sample, real-time safe) and its naive test oracle
//! [`ReferenceStats`] (recomputes everything from retained history, O(N)
//! per query, allocates).
//!
//! # Example
//!
//! ```
//! use ewstats::statistics::WeightedStats;
//!
//! let mut stats = WeightedStats::<f64>::with_alpha(0.999);
//!
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     stats.add(value);
//! }
//!
//! println!("Mean: {}", stats.mean());
//! println!("Stddev: {}", stats.stddev());
//! println!("Min: {}", stats.min());
//! println!("Max: {}", stats.max());
//! ```

mod reference;
mod weighted;

pub use reference::ReferenceStats;
pub use weighted::WeightedStats;
