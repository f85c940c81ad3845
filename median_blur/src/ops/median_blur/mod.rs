mod histogram;
mod outline;
mod quantize;
mod source;
mod traversal;
mod window;

#[cfg(feature = "bench")]
pub(crate) mod bench;


use serde::{Deserialize, Serialize};

use crate::common::{Error, Rect, Result};
use crate::image::{Image, ImageDesc};

use outline::Outline;
use quantize::Quantizer;
use source::SourceRegion;
use traversal::Traversal;
use window::Window;

pub use outline::Neighborhood;
pub use quantize::{DEFAULT_BIN_COUNT, HIGH_PRECISION_BIN_COUNT};
pub use source::BorderMode;

/// Largest accepted neighborhood radius.
pub const MAX_RADIUS: i32 = 400;

/// Border an area filter needs around its output region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AreaPadding {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

/// Parameters for the percentile neighborhood filter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedianBlur {
    /// Neighborhood radius in pixels. 0 keeps every pixel as is, up to
    /// bin quantization.
    pub radius: i32,
    pub shape: Neighborhood,
    /// Percentile in [0, 100] of the color channels. 50 is the median.
    pub percentile: f64,
    /// Percentile in [0, 100] of the alpha channel.
    pub alpha_percentile: f64,
    /// Source of samples outside the input image.
    pub border: BorderMode,
    /// Use [`HIGH_PRECISION_BIN_COUNT`] bins instead of [`DEFAULT_BIN_COUNT`].
    pub high_precision: bool,
}

impl Default for MedianBlur {
    fn default() -> Self {
        Self {
            radius: 3,
            shape: Neighborhood::Square,
            percentile: 50.0,
            alpha_percentile: 50.0,
            border: BorderMode::Clamp,
            high_precision: false,
        }
    }
}

impl MedianBlur {
    pub fn new(radius: i32) -> Self {
        Self {
            radius,
            ..Self::default()
        }
    }

    /// Builder method to set the neighborhood shape.
    pub fn shape(mut self, shape: Neighborhood) -> Self {
        self.shape = shape;
        self
    }

    /// Builder method to set the color percentile.
    pub fn percentile(mut self, percentile: f64) -> Self {
        self.percentile = percentile;
        self
    }

    /// Builder method to set the alpha percentile.
    pub fn alpha_percentile(mut self, alpha_percentile: f64) -> Self {
        self.alpha_percentile = alpha_percentile;
        self
    }

    /// Builder method to set the border mode.
    pub fn border(mut self, border: BorderMode) -> Self {
        self.border = border;
        self
    }

    /// Builder method to toggle high precision histograms.
    pub fn high_precision(mut self, high_precision: bool) -> Self {
        self.high_precision = high_precision;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(0..=MAX_RADIUS).contains(&self.radius) {
            return Err(Error::InvalidRadius(self.radius));
        }
        for (name, value) in [
            ("percentile", self.percentile),
            ("alpha percentile", self.alpha_percentile),
        ] {
            // NaN fails the range check
            if !(0.0..=100.0).contains(&value) {
                return Err(Error::InvalidPercentile { name, value });
            }
        }
        Ok(())
    }

    pub fn bin_count(&self) -> usize {
        if self.high_precision {
            HIGH_PRECISION_BIN_COUNT
        } else {
            DEFAULT_BIN_COUNT
        }
    }

    /// Border the filter reads around every output region.
    ///
    /// Negative radii are reported as no padding; [`MedianBlur::validate`]
    /// rejects them.
    pub fn padding(&self) -> AreaPadding {
        let r = self.radius.max(0) as u32;
        AreaPadding {
            left: r,
            right: r,
            top: r,
            bottom: r,
        }
    }

    /// Input rectangle needed to produce `roi`.
    pub fn required_for_output(&self, roi: Rect) -> Rect {
        let p = self.padding();
        roi.expand(p.left, p.right, p.top, p.bottom)
    }

    /// Filters the whole image.
    pub fn apply(&self, input: &Image) -> Result<Image> {
        let bounds = input.desc().bounds();
        if bounds.is_empty() {
            self.validate()?;
            return Image::new_empty(*input.desc());
        }
        self.apply_region(input, bounds)
    }

    /// Filters the whole image into `output`, which must match the input
    /// dimensions and layout.
    pub fn apply_cpu(&self, input: &Image, output: &mut Image) -> Result<()> {
        if input.desc() != output.desc() {
            return Err(Error::DimensionMismatch(format!(
                "input {} does not match output {}",
                input.desc(),
                output.desc()
            )));
        }

        let result = self.apply(input)?;
        output.samples_mut().copy_from_slice(result.samples());
        Ok(())
    }

    /// Filters `roi` of `input` and returns an image of the region's size.
    ///
    /// Samples around the region are read from `input` where available and
    /// produced by the border mode elsewhere.
    pub fn apply_region(&self, input: &Image, roi: Rect) -> Result<Image> {
        self.validate()?;

        if roi.is_empty() {
            return Err(Error::InvalidRegion(format!("empty region {}", roi)));
        }
        if !input.desc().bounds().contains_rect(&roi) {
            return Err(Error::InvalidRegion(format!(
                "{} lies outside image {}",
                roi,
                input.desc()
            )));
        }

        let layout = input.desc().channel_count;
        tracing::debug!(
            radius = self.radius,
            shape = %self.shape,
            percentile = self.percentile,
            alpha_percentile = self.alpha_percentile,
            region = %roi,
            layout = %layout,
            "median blur"
        );

        let outline = Outline::new(self.shape, self.radius as usize)?;
        let source = SourceRegion::fetch(input, self.required_for_output(roi), self.border)?;
        let window = Window::new(layout, Quantizer::new(self.bin_count()))?;

        let mut output = Image::new_empty(ImageDesc::new(roi.width, roi.height, layout))?;

        tracing::trace!(footprint = outline.area(), "seeding window");
        let traversal = Traversal::new(&source, &outline, window);
        traversal::run(
            traversal,
            self.percentile / 100.0,
            self.alpha_percentile / 100.0,
            output.samples_mut(),
        );

        Ok(output)
    }
}
