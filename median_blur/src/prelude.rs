// Layout and colors
pub use crate::common::{ChannelCount, Color, Rect, ALL_CHANNEL_COUNTS};

// Error handling
pub use crate::common::{Error, Result};

// Image types
pub use crate::image::{Image, ImageDesc};

// Operations
pub use crate::ops::{
    AreaPadding, BorderMode, MedianBlur, Neighborhood, DEFAULT_BIN_COUNT,
    HIGH_PRECISION_BIN_COUNT, MAX_RADIUS,
};
