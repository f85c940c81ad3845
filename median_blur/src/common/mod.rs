pub(crate) mod color;
pub(crate) mod color_format;
pub(crate) mod error;
pub(crate) mod rect;

// Public API
pub use color::Color;
pub use color_format::{ChannelCount, ALL_CHANNEL_COUNTS};
pub use error::{Error, Result};
pub use rect::Rect;

/// Allocates a zeroed vector, reporting allocation failure as an error.
pub(crate) fn try_zeroed<T: Clone + Default>(len: usize) -> Result<Vec<T>> {
    let mut values = Vec::new();
    values.try_reserve_exact(len)?;
    values.resize(len, T::default());
    Ok(values)
}
