//! Percentile (median) neighborhood filter for `f32` images.
//!
//! Every output pixel receives a chosen percentile of the samples found in a
//! square, circle, or diamond shaped neighborhood. Per-channel histograms are
//! maintained incrementally along a serpentine scan so each step only touches
//! the pixels entering and leaving the neighborhood.
//!
//! ```rust,ignore
//! use median_blur::prelude::*;
//!
//! let blurred = MedianBlur::new(3)
//!     .shape(Neighborhood::Circle)
//!     .percentile(50.0)
//!     .apply(&image)?;
//! ```

mod common;
mod image;
mod ops;

#[cfg(feature = "bench")]
pub mod bench;

pub mod prelude;

pub use prelude::*;
