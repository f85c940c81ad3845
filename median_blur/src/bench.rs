//! Benchmark entry points, compiled only with the `bench` feature.

pub mod median_blur {
    pub use crate::ops::median_blur::bench::benchmarks;
}
