/// Histogram resolution used unless high precision is requested.
pub const DEFAULT_BIN_COUNT: usize = 1024;
/// Histogram resolution in high precision mode.
pub const HIGH_PRECISION_BIN_COUNT: usize = 65536;

/// Number of integer weight steps an opaque pixel contributes to the color
/// histograms of an image with alpha.
pub(crate) const ALPHA_WEIGHT_SCALE: i64 = 1024;

/// Maps normalized samples to fixed-width bins and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Quantizer {
    bin_count: usize,
}

impl Quantizer {
    pub(crate) fn new(bin_count: usize) -> Self {
        assert!(bin_count > 0, "bin count must be positive");
        Self { bin_count }
    }

    #[inline]
    pub(crate) fn bin_count(&self) -> usize {
        self.bin_count
    }

    /// Out of range samples are clamped; 1.0 lands in the top bin; NaN lands in bin 0.
    #[inline]
    pub(crate) fn bin(&self, sample: f32) -> usize {
        let scaled = sample.clamp(0.0, 1.0) * self.bin_count as f32;
        (scaled as usize).min(self.bin_count - 1)
    }

    /// Representative sample at the center of `bin`.
    #[inline]
    pub(crate) fn value(&self, bin: usize) -> f32 {
        (bin as f32 + 0.5) / self.bin_count as f32
    }
}

/// Integer color weight for a pixel with the given alpha.
///
/// Alpha is rounded to multiples of `1 / ALPHA_WEIGHT_SCALE`, so any alpha
/// below `0.5 / ALPHA_WEIGHT_SCALE` carries no color weight at all.
#[inline]
pub(crate) fn alpha_weight(alpha: f32) -> i64 {
    (alpha.clamp(0.0, 1.0) * ALPHA_WEIGHT_SCALE as f32).round() as i64
}
