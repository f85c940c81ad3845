//! Serpentine walk over an output region.
//!
//! Rows alternate between left-to-right and right-to-left so every step moves
//! the footprint by exactly one pixel. Each move only updates the pixels on
//! the footprint boundary: one stripe per side for squares, and one pixel per
//! boundary row or column for circles and diamonds.

use super::outline::{Neighborhood, Outline};
use super::source::SourceRegion;
use super::window::{Change, Window};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    LeftToRight,
    RightToLeft,
    TopToBottom,
}

pub(crate) struct Traversal<'a> {
    source: &'a SourceRegion,
    outline: &'a Outline,
    window: Window,
    width: usize,
    height: usize,
    x: usize,
    y: usize,
    /// Horizontal direction of the current row.
    row_direction: Direction,
}

impl<'a> Traversal<'a> {
    /// Starts at the top-left output pixel with a freshly accumulated window.
    ///
    /// `source` must cover the `width` x `height` output region expanded by
    /// the outline radius on every side.
    pub(crate) fn new(source: &'a SourceRegion, outline: &'a Outline, mut window: Window) -> Self {
        let r = outline.radius();
        debug_assert!(source.width() > 2 * r && source.height() > 2 * r);
        window.seed(source, outline, r, r);

        Self {
            source,
            outline,
            window,
            width: source.width() - 2 * r,
            height: source.height() - 2 * r,
            x: 0,
            y: 0,
            row_direction: Direction::LeftToRight,
        }
    }

    /// Current output position.
    pub(crate) fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub(crate) fn window(&self) -> &Window {
        &self.window
    }

    pub(crate) fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }

    /// Moves to the next output pixel and updates the window.
    ///
    /// Returns the direction of the move, or `None` once the last pixel of
    /// the region has been reached.
    pub(crate) fn advance(&mut self) -> Option<Direction> {
        let direction = match self.row_direction {
            Direction::LeftToRight if self.x + 1 < self.width => Direction::LeftToRight,
            Direction::RightToLeft if self.x > 0 => Direction::RightToLeft,
            _ if self.y + 1 < self.height => Direction::TopToBottom,
            _ => return None,
        };

        match direction {
            Direction::LeftToRight => self.x += 1,
            Direction::RightToLeft => self.x -= 1,
            Direction::TopToBottom => {
                self.y += 1;
                self.row_direction = match self.row_direction {
                    Direction::LeftToRight => Direction::RightToLeft,
                    _ => Direction::LeftToRight,
                };
            }
        }

        self.shift(direction);
        Some(direction)
    }

    /// Replaces the pixels that left the footprint with those that entered it
    /// after a one pixel move in `direction`.
    fn shift(&mut self, direction: Direction) {
        let r = self.outline.radius();
        // Footprint center in source coordinates.
        let (cx, cy) = (self.x + r, self.y + r);
        let source = self.source;

        if self.outline.shape() == Neighborhood::Square {
            let span = 2 * r + 1;
            let window = &mut self.window;
            match direction {
                Direction::LeftToRight => {
                    window.add_or_remove_rect(source, cx - 1 - r, cy - r, 1, span, Change::Remove);
                    window.add_or_remove_rect(source, cx + r, cy - r, 1, span, Change::Add);
                }
                Direction::RightToLeft => {
                    window.add_or_remove_rect(source, cx + 1 + r, cy - r, 1, span, Change::Remove);
                    window.add_or_remove_rect(source, cx - r, cy - r, 1, span, Change::Add);
                }
                Direction::TopToBottom => {
                    window.add_or_remove_rect(source, cx - r, cy - 1 - r, span, 1, Change::Remove);
                    window.add_or_remove_rect(source, cx - r, cy + r, span, 1, Change::Add);
                }
            }
            return;
        }

        for i in 0..=r {
            let w = self.outline.half_width(i);
            // Rows (or columns) at offset -i and +i; the center line only once.
            let lines: &[usize] = if i == 0 { &[0] } else { &[0, 1] };
            for &side in lines {
                let window = &mut self.window;
                match direction {
                    Direction::LeftToRight => {
                        let row = if side == 0 { cy - i } else { cy + i };
                        window.add_or_remove_rect(source, cx - 1 - w, row, 1, 1, Change::Remove);
                        window.add_or_remove_rect(source, cx + w, row, 1, 1, Change::Add);
                    }
                    Direction::RightToLeft => {
                        let row = if side == 0 { cy - i } else { cy + i };
                        window.add_or_remove_rect(source, cx + 1 + w, row, 1, 1, Change::Remove);
                        window.add_or_remove_rect(source, cx - w, row, 1, 1, Change::Add);
                    }
                    Direction::TopToBottom => {
                        let col = if side == 0 { cx - i } else { cx + i };
                        window.add_or_remove_rect(source, col, cy - 1 - w, 1, 1, Change::Remove);
                        window.add_or_remove_rect(source, col, cy + w, 1, 1, Change::Add);
                    }
                }
            }
        }
    }
}

/// Fills `output` (interleaved, region sized) with the percentiles of every
/// footprint along the serpentine walk.
pub(crate) fn run(
    mut traversal: Traversal<'_>,
    color_fraction: f64,
    alpha_fraction: f64,
    output: &mut [f32],
) {
    let channels = traversal.source.layout().channel_count() as usize;
    let row_len = traversal.width * channels;

    loop {
        let (x, y) = traversal.position();
        let start = y * row_len + x * channels;
        traversal.window_mut().write_percentiles(
            color_fraction,
            alpha_fraction,
            &mut output[start..start + channels],
        );

        if traversal.advance().is_none() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::common::{ChannelCount, Rect};
    use crate::image::{Image, ImageDesc};
    use crate::ops::median_blur::quantize::{Quantizer, DEFAULT_BIN_COUNT};
    use crate::ops::median_blur::source::BorderMode;

    fn noise_source(width: u32, height: u32, radius: usize) -> SourceRegion {
        let desc = ImageDesc::new(width, height, ChannelCount::Rgba);
        let samples = (0..width * height * 4)
            .map(|i| ((i * 7919 + 13) % 101) as f32 / 100.0)
            .collect();
        let image = Image::new_with_data(desc, samples).unwrap();
        let r = radius as u32;
        let rect = Rect::from_size(width, height).expand(r, r, r, r);
        SourceRegion::fetch(&image, rect, BorderMode::Clamp).unwrap()
    }

    fn new_window() -> Window {
        Window::new(ChannelCount::Rgba, Quantizer::new(DEFAULT_BIN_COUNT)).unwrap()
    }

    #[test]
    fn visits_every_pixel_once_in_serpentine_order() {
        let source = noise_source(4, 3, 1);
        let outline = Outline::new(Neighborhood::Square, 1).unwrap();
        let mut traversal = Traversal::new(&source, &outline, new_window());

        let mut visited = vec![traversal.position()];
        let mut directions = Vec::new();
        while let Some(direction) = traversal.advance() {
            visited.push(traversal.position());
            directions.push(direction);
        }

        #[rustfmt::skip]
        let expected = vec![
            (0, 0), (1, 0), (2, 0), (3, 0),
            (3, 1), (2, 1), (1, 1), (0, 1),
            (0, 2), (1, 2), (2, 2), (3, 2),
        ];
        assert_eq!(visited, expected);
        assert_eq!(directions[3], Direction::TopToBottom);
        assert_eq!(directions[4], Direction::RightToLeft);
        assert_eq!(directions[7], Direction::TopToBottom);
        assert_eq!(directions[8], Direction::LeftToRight);
    }

    #[test]
    fn single_column_only_moves_down() {
        let source = noise_source(1, 4, 2);
        let outline = Outline::new(Neighborhood::Diamond, 2).unwrap();
        let mut traversal = Traversal::new(&source, &outline, new_window());

        let mut directions = Vec::new();
        while let Some(direction) = traversal.advance() {
            directions.push(direction);
        }
        assert_eq!(directions, vec![Direction::TopToBottom; 3]);
        assert_eq!(traversal.position(), (0, 3));
    }

    #[test]
    fn incremental_window_matches_fresh_seed_at_every_step() {
        for shape in Neighborhood::iter() {
            for radius in 0..5 {
                let source = noise_source(7, 5, radius);
                let outline = Outline::new(shape, radius).unwrap();
                let mut traversal = Traversal::new(&source, &outline, new_window());

                loop {
                    let (x, y) = traversal.position();
                    let mut fresh = new_window();
                    fresh.seed(&source, &outline, x + radius, y + radius);

                    let window = traversal.window();
                    assert!(window.is_consistent(), "{} r={} at {:?}", shape, radius, (x, y));
                    assert_eq!(window.size(), fresh.size());
                    assert_eq!(window.count(), fresh.count());
                    for (incremental, seeded) in window.histograms().iter().zip(fresh.histograms()) {
                        assert_eq!(
                            incremental.bins(),
                            seeded.bins(),
                            "{} r={} at {:?}",
                            shape,
                            radius,
                            (x, y)
                        );
                    }

                    // Queries move the cursors; the invariants must survive that too.
                    let mut out = [0.0f32; 4];
                    traversal.window_mut().write_percentiles(0.5, 0.25, &mut out);

                    if traversal.advance().is_none() {
                        break;
                    }
                }
            }
        }
    }
}
