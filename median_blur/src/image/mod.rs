
use crate::common::{try_zeroed, ChannelCount, Color, Error, Rect, Result};

#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub struct ImageDesc {
    pub width: u32,
    pub height: u32,
    pub channel_count: ChannelCount,
}

/// Tightly packed, interleaved `f32` image.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    desc: ImageDesc,
    samples: Vec<f32>,
}

impl Image {
    /// Returns the image descriptor.
    pub fn desc(&self) -> &ImageDesc {
        &self.desc
    }

    /// Returns the samples as a slice.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Returns the samples as a mutable slice.
    pub fn samples_mut(&mut self) -> &mut [f32] {
        &mut self.samples
    }

    pub fn new_empty(desc: ImageDesc) -> Result<Image> {
        let samples = try_zeroed(desc.sample_count())?;

        Ok(Image { desc, samples })
    }

    pub fn new_filled(desc: ImageDesc, color: Color) -> Result<Image> {
        let mut image = Image::new_empty(desc)?;
        let channels = desc.channel_count.channel_count() as usize;
        for pixel in image.samples.chunks_exact_mut(channels) {
            color.write_pixel(desc.channel_count, pixel);
        }

        Ok(image)
    }

    pub fn new_with_data(desc: ImageDesc, samples: Vec<f32>) -> Result<Image> {
        if samples.len() != desc.sample_count() {
            return Err(Error::DimensionMismatch(format!(
                "sample count {} does not match expected {} for {}",
                samples.len(),
                desc.sample_count(),
                desc
            )));
        }

        Ok(Image { desc, samples })
    }

    /// Builds an image from a raw channel number (1 to 4).
    pub fn from_raw(width: u32, height: u32, channels: usize, samples: Vec<f32>) -> Result<Image> {
        let channel_count = ChannelCount::from_channel_number(channels)?;
        Image::new_with_data(ImageDesc::new(width, height, channel_count), samples)
    }

    /// Samples of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> &[f32] {
        let start = self.desc.pixel_offset(x, y);
        &self.samples[start..start + self.desc.channel_count.channel_count() as usize]
    }

    pub fn pixel_mut(&mut self, x: u32, y: u32) -> &mut [f32] {
        let start = self.desc.pixel_offset(x, y);
        let channels = self.desc.channel_count.channel_count() as usize;
        &mut self.samples[start..start + channels]
    }

    /// Copies `region` of this image into a new image of the region's size.
    pub fn crop(&self, region: Rect) -> Result<Image> {
        if !self.desc.bounds().contains_rect(&region) {
            return Err(Error::InvalidRegion(format!(
                "{} lies outside image {}",
                region, self.desc
            )));
        }

        let desc = ImageDesc::new(region.width, region.height, self.desc.channel_count);
        let mut result = Image::new_empty(desc)?;
        if region.is_empty() {
            return Ok(result);
        }
        let row_len = desc.row_samples();
        for row in 0..region.height {
            let src = self.desc.pixel_offset(region.x as u32, region.y as u32 + row);
            let dst = desc.pixel_offset(0, row);
            result.samples[dst..dst + row_len].copy_from_slice(&self.samples[src..src + row_len]);
        }

        Ok(result)
    }

    /// Writes `patch` into this image with its top-left corner at `(x, y)`.
    pub fn paste(&mut self, patch: &Image, x: u32, y: u32) -> Result<()> {
        let region = Rect::new(x as i32, y as i32, patch.desc.width, patch.desc.height);
        if patch.desc.channel_count != self.desc.channel_count {
            return Err(Error::InvalidColorFormat(format!(
                "cannot paste {} into {}",
                patch.desc.channel_count, self.desc.channel_count
            )));
        }
        if !self.desc.bounds().contains_rect(&region) {
            return Err(Error::InvalidRegion(format!(
                "{} lies outside image {}",
                region, self.desc
            )));
        }

        let row_len = patch.desc.row_samples();
        for row in 0..patch.desc.height {
            let src = patch.desc.pixel_offset(0, row);
            let dst = self.desc.pixel_offset(x, y + row);
            self.samples[dst..dst + row_len].copy_from_slice(&patch.samples[src..src + row_len]);
        }

        Ok(())
    }
}

impl ImageDesc {
    pub fn new(width: u32, height: u32, channel_count: ChannelCount) -> Self {
        Self {
            width,
            height,
            channel_count,
        }
    }

    pub fn sample_count(&self) -> usize {
        self.height as usize * self.row_samples()
    }

    /// Returns the number of samples per row.
    pub fn row_samples(&self) -> usize {
        self.width as usize * self.channel_count.channel_count() as usize
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    pub(crate) fn pixel_offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.row_samples() + x as usize * self.channel_count.channel_count() as usize
    }
}

impl std::fmt::Display for ImageDesc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{} {}", self.width, self.height, self.channel_count)
    }
}
