use super::histogram::ChannelHistogram;
use super::outline::Outline;
use super::quantize::{alpha_weight, Quantizer};
use super::source::SourceRegion;
use crate::common::{ChannelCount, Result};

/// Whether a stripe of pixels enters or leaves the footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Change {
    Add,
    Remove,
}

impl Change {
    #[inline]
    fn sign(self) -> i64 {
        match self {
            Change::Add => 1,
            Change::Remove => -1,
        }
    }
}

/// Histograms of every channel for the pixels currently inside the footprint.
///
/// Color histograms are weighted by pixel alpha when the layout has alpha;
/// the alpha histogram always counts pixels.
#[derive(Debug, Clone)]
pub(crate) struct Window {
    histograms: Vec<ChannelHistogram>,
    color_channels: usize,
    alpha_index: Option<usize>,
    quantizer: Quantizer,
    /// Total color weight.
    count: i64,
    /// Pixel count.
    size: i64,
}

impl Window {
    pub(crate) fn new(layout: ChannelCount, quantizer: Quantizer) -> Result<Self> {
        let histograms = (0..layout.channel_count())
            .map(|_| ChannelHistogram::new(quantizer.bin_count()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            histograms,
            color_channels: layout.color_channels(),
            alpha_index: layout.alpha_index(),
            quantizer,
            count: 0,
            size: 0,
        })
    }

    /// Brute-force accumulation of the whole footprint centered at `(cx, cy)`.
    pub(crate) fn seed(&mut self, source: &SourceRegion, outline: &Outline, cx: usize, cy: usize) {
        let r = outline.radius();
        for dy in 0..=2 * r {
            let w = outline.half_width(dy.abs_diff(r));
            self.add_or_remove_rect(source, cx - w, cy + dy - r, 2 * w + 1, 1, Change::Add);
        }
    }

    /// Applies `change` to every pixel of the `width` x `height` stripe whose
    /// top-left corner is `(x, y)` in source coordinates.
    pub(crate) fn add_or_remove_rect(
        &mut self,
        source: &SourceRegion,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        change: Change,
    ) {
        let sign = change.sign();
        for py in y..y + height {
            for px in x..x + width {
                self.add_or_remove_pixel(source.pixel(px, py), sign);
            }
        }
    }

    #[inline]
    fn add_or_remove_pixel(&mut self, pixel: &[f32], sign: i64) {
        let weight = match self.alpha_index {
            Some(a) => {
                let alpha = pixel[a];
                self.histograms[a].update(self.quantizer.bin(alpha), sign);
                alpha_weight(alpha)
            }
            None => 1,
        };

        let delta = sign * weight;
        for c in 0..self.color_channels {
            let bin = self.quantizer.bin(pixel[c]);
            self.histograms[c].update(bin, delta);
        }

        self.count += delta;
        self.size += sign;
    }

    /// Writes the color percentile of every color channel and the alpha
    /// percentile of the alpha channel into `out`.
    ///
    /// Color channels of a window without any alpha weight come out as 0.0.
    pub(crate) fn write_percentiles(&mut self, color_fraction: f64, alpha_fraction: f64, out: &mut [f32]) {
        for c in 0..self.color_channels {
            out[c] = self.histograms[c]
                .query(self.count, color_fraction)
                .map_or(0.0, |bin| self.quantizer.value(bin));
        }

        if let Some(a) = self.alpha_index {
            out[a] = self.histograms[a]
                .query(self.size, alpha_fraction)
                .map_or(0.0, |bin| self.quantizer.value(bin));
        }
    }

    pub(crate) fn count(&self) -> i64 {
        self.count
    }

    pub(crate) fn size(&self) -> i64 {
        self.size
    }

    pub(crate) fn histograms(&self) -> &[ChannelHistogram] {
        &self.histograms
    }

    /// Conservation check: every histogram sums to its channel's total and
    /// every cursor sum is current.
    pub(crate) fn is_consistent(&self) -> bool {
        self.histograms.iter().enumerate().all(|(c, hist)| {
            let total = if Some(c) == self.alpha_index {
                self.size
            } else {
                self.count
            };
            hist.total() == total && hist.cursor_is_consistent()
        })
    }
}
