use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::common::{try_zeroed, ChannelCount, Color, Rect, Result};
use crate::image::Image;

/// How samples outside the input image are produced.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BorderMode {
    /// Repeat the nearest edge pixel.
    #[default]
    Clamp,
    /// Fully transparent black.
    None,
    /// Opaque black.
    Black,
    /// Opaque white.
    White,
    /// Wrap around to the opposite edge.
    Loop,
}

impl BorderMode {
    fn fill_color(&self) -> Option<Color> {
        match self {
            BorderMode::None => Some(Color::TRANSPARENT),
            BorderMode::Black => Some(Color::BLACK),
            BorderMode::White => Some(Color::WHITE),
            BorderMode::Clamp | BorderMode::Loop => None,
        }
    }
}

/// Input samples covering an output region plus its border, stored with the
/// region's expanded top-left corner at `(0, 0)`.
#[derive(Debug, Clone)]
pub(crate) struct SourceRegion {
    samples: Vec<f32>,
    width: usize,
    height: usize,
    layout: ChannelCount,
}

impl SourceRegion {
    /// Reads `rect` (in image coordinates) from `image`, filling whatever lies
    /// outside the image according to `border`.
    pub(crate) fn fetch(image: &Image, rect: Rect, border: BorderMode) -> Result<Self> {
        let desc = image.desc();
        let layout = desc.channel_count;
        let channels = layout.channel_count() as usize;
        let (width, height) = (rect.width as usize, rect.height as usize);
        let mut samples = try_zeroed(width * height * channels)?;

        let fill = border.fill_color().map(|color| {
            let mut pixel = [0.0f32; 4];
            color.write_pixel(layout, &mut pixel[..channels]);
            pixel
        });

        let (image_w, image_h) = (desc.width as i64, desc.height as i64);
        for (row, dst_row) in samples.chunks_exact_mut(width * channels).enumerate() {
            let iy = rect.y as i64 + row as i64;
            for (col, dst) in dst_row.chunks_exact_mut(channels).enumerate() {
                let ix = rect.x as i64 + col as i64;
                let inside = (0..image_w).contains(&ix) && (0..image_h).contains(&iy);

                if !inside {
                    if let Some(pixel) = &fill {
                        dst.copy_from_slice(&pixel[..channels]);
                        continue;
                    }
                }

                let (sx, sy) = match border {
                    BorderMode::Loop => (ix.rem_euclid(image_w), iy.rem_euclid(image_h)),
                    _ => (ix.clamp(0, image_w - 1), iy.clamp(0, image_h - 1)),
                };
                dst.copy_from_slice(image.pixel(sx as u32, sy as u32));
            }
        }

        Ok(Self {
            samples,
            width,
            height,
            layout,
        })
    }

    #[inline]
    pub(crate) fn layout(&self) -> ChannelCount {
        self.layout
    }

    #[inline]
    pub(crate) fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub(crate) fn height(&self) -> usize {
        self.height
    }

    /// Samples of the pixel at `(x, y)` in region coordinates.
    #[inline]
    pub(crate) fn pixel(&self, x: usize, y: usize) -> &[f32] {
        debug_assert!(x < self.width && y < self.height);
        let channels = self.layout.channel_count() as usize;
        let start = (y * self.width + x) * channels;
        &self.samples[start..start + channels]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageDesc;

    // 3x2 gray image with values 0..6
    fn small_gray() -> Image {
        let desc = ImageDesc::new(3, 2, ChannelCount::L);
        Image::new_with_data(desc, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap()
    }

    #[test]
    fn interior_fetch_copies_samples() {
        let region = SourceRegion::fetch(&small_gray(), Rect::new(1, 0, 2, 2), BorderMode::Clamp)
            .unwrap();
        assert_eq!(region.width(), 2);
        assert_eq!(region.height(), 2);
        assert_eq!(region.pixel(0, 0), &[1.0]);
        assert_eq!(region.pixel(1, 1), &[5.0]);
    }

    #[test]
    fn clamp_repeats_edges() {
        let region = SourceRegion::fetch(&small_gray(), Rect::new(-1, -1, 5, 4), BorderMode::Clamp)
            .unwrap();
        assert_eq!(region.pixel(0, 0), &[0.0]);
        assert_eq!(region.pixel(4, 0), &[2.0]);
        assert_eq!(region.pixel(0, 3), &[3.0]);
        assert_eq!(region.pixel(4, 3), &[5.0]);
        assert_eq!(region.pixel(2, 2), &[4.0]);
    }

    #[test]
    fn loop_wraps_edges() {
        let region = SourceRegion::fetch(&small_gray(), Rect::new(-1, -1, 5, 4), BorderMode::Loop)
            .unwrap();
        // (-1, -1) wraps to (2, 1)
        assert_eq!(region.pixel(0, 0), &[5.0]);
        // (3, 2) wraps to (0, 0)
        assert_eq!(region.pixel(4, 3), &[0.0]);
    }

    #[test]
    fn fill_modes_use_border_color() {
        let desc = ImageDesc::new(1, 1, ChannelCount::Rgba);
        let image = Image::new_filled(desc, Color::new(0.5, 0.5, 0.5, 0.5)).unwrap();
        let rect = Rect::new(-1, 0, 2, 1);

        let none = SourceRegion::fetch(&image, rect, BorderMode::None).unwrap();
        assert_eq!(none.pixel(0, 0), &[0.0, 0.0, 0.0, 0.0]);
        assert_eq!(none.pixel(1, 0), &[0.5, 0.5, 0.5, 0.5]);

        let black = SourceRegion::fetch(&image, rect, BorderMode::Black).unwrap();
        assert_eq!(black.pixel(0, 0), &[0.0, 0.0, 0.0, 1.0]);

        let white = SourceRegion::fetch(&image, rect, BorderMode::White).unwrap();
        assert_eq!(white.pixel(0, 0), &[1.0, 1.0, 1.0, 1.0]);
    }
}
