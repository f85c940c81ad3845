use serde::{Deserialize, Serialize};

use crate::common::error::{Error, Result};

/// Interleaved channel layout of an `f32` image.
///
/// The last channel of `LA` and `Rgba` is alpha; the remaining channels are
/// color channels.
#[derive(Debug, Hash, PartialEq, Eq, Copy, Clone, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum ChannelCount {
    L = 1,
    LA = 2,
    Rgb = 3,
    #[default]
    Rgba = 4,
}

pub const ALL_CHANNEL_COUNTS: &[ChannelCount] = &[
    ChannelCount::L,
    ChannelCount::LA,
    ChannelCount::Rgb,
    ChannelCount::Rgba,
];

impl ChannelCount {
    pub fn channel_count(&self) -> u8 {
        *self as u8
    }

    pub fn has_alpha(&self) -> bool {
        matches!(self, ChannelCount::LA | ChannelCount::Rgba)
    }

    /// Number of non-alpha channels.
    pub fn color_channels(&self) -> usize {
        match self {
            ChannelCount::L | ChannelCount::LA => 1,
            ChannelCount::Rgb | ChannelCount::Rgba => 3,
        }
    }

    /// Index of the alpha channel within a pixel, if any.
    pub fn alpha_index(&self) -> Option<usize> {
        self.has_alpha().then(|| self.color_channels())
    }

    pub(crate) fn from_channel_number(count: usize) -> Result<ChannelCount> {
        match count {
            1 => Ok(ChannelCount::L),
            2 => Ok(ChannelCount::LA),
            3 => Ok(ChannelCount::Rgb),
            4 => Ok(ChannelCount::Rgba),
            _ => Err(Error::InvalidColorFormat(format!(
                "invalid channel count: {}",
                count
            ))),
        }
    }
}

impl std::fmt::Display for ChannelCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelCount::L => write!(f, "L"),
            ChannelCount::LA => write!(f, "LA"),
            ChannelCount::Rgb => write!(f, "RGB"),
            ChannelCount::Rgba => write!(f, "RGBA"),
        }
    }
}
