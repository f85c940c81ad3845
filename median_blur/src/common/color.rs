//! RGBA color used for fills and border samples.

use super::color_format::ChannelCount;

/// RGBA color with f32 components, nominally in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Opaque gray.
    pub const fn gray(v: f32) -> Self {
        Self::rgb(v, v, v)
    }

    /// Convert to luminance (grayscale) using Rec. 709 weights.
    pub fn luminance(&self) -> f32 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }

    /// Writes the color as one pixel of the given layout.
    ///
    /// Single-channel layouts receive the luminance.
    pub fn write_pixel(&self, channel_count: ChannelCount, pixel: &mut [f32]) {
        debug_assert_eq!(pixel.len(), channel_count.channel_count() as usize);
        match channel_count {
            ChannelCount::L => pixel[0] = self.luminance(),
            ChannelCount::LA => {
                pixel[0] = self.luminance();
                pixel[1] = self.a;
            }
            ChannelCount::Rgb => pixel.copy_from_slice(&[self.r, self.g, self.b]),
            ChannelCount::Rgba => pixel.copy_from_slice(&[self.r, self.g, self.b, self.a]),
        }
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_pixel_per_layout() {
        let color = Color::new(0.2, 0.4, 0.6, 0.5);

        let mut rgba = [0.0f32; 4];
        color.write_pixel(ChannelCount::Rgba, &mut rgba);
        assert_eq!(rgba, [0.2, 0.4, 0.6, 0.5]);

        let mut rgb = [0.0f32; 3];
        color.write_pixel(ChannelCount::Rgb, &mut rgb);
        assert_eq!(rgb, [0.2, 0.4, 0.6]);

        let mut la = [0.0f32; 2];
        color.write_pixel(ChannelCount::LA, &mut la);
        assert!((la[0] - color.luminance()).abs() < 1e-6);
        assert_eq!(la[1], 0.5);
    }

    #[test]
    fn gray_luminance_is_identity() {
        assert!((Color::gray(0.3).luminance() - 0.3).abs() < 1e-6);
        assert!((Color::WHITE.luminance() - 1.0).abs() < 1e-6);
    }
}
