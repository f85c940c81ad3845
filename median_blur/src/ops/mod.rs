pub(crate) mod median_blur;

pub use median_blur::{
    AreaPadding, BorderMode, MedianBlur, Neighborhood, DEFAULT_BIN_COUNT,
    HIGH_PRECISION_BIN_COUNT, MAX_RADIUS,
};
