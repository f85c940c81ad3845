use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::common::{try_zeroed, Result};

/// Shape of the neighborhood around each output pixel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Neighborhood {
    /// `(2r+1)²` pixels.
    #[default]
    Square,
    /// Pixels whose center lies within `r + 0.5` of the output pixel.
    Circle,
    /// Pixels within Manhattan distance `r`.
    Diamond,
}

/// Per-offset half-widths of a neighborhood.
///
/// `half_width(i)` is the number of columns included on each side of the
/// center column in the row at vertical offset `±i`. The shapes are symmetric
/// under transposition, so the same table also gives the rows included above
/// and below the center row in the column at horizontal offset `±i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Outline {
    shape: Neighborhood,
    half_width: Vec<usize>,
}

impl Outline {
    pub(crate) fn new(shape: Neighborhood, radius: usize) -> Result<Self> {
        let mut half_width = try_zeroed(radius + 1)?;
        for (i, width) in half_width.iter_mut().enumerate() {
            *width = match shape {
                Neighborhood::Square => radius,
                Neighborhood::Circle => {
                    let r = radius as f64 + 0.5;
                    let i = i as f64;
                    (r * r - i * i).sqrt().floor() as usize
                }
                Neighborhood::Diamond => radius - i,
            };
        }

        Ok(Self { shape, half_width })
    }

    #[inline]
    pub(crate) fn shape(&self) -> Neighborhood {
        self.shape
    }

    #[inline]
    pub(crate) fn radius(&self) -> usize {
        self.half_width.len() - 1
    }

    #[inline]
    pub(crate) fn half_width(&self, offset: usize) -> usize {
        self.half_width[offset]
    }

    /// Whether the offset `(dx, dy)` from the center belongs to the footprint.
    pub(crate) fn contains(&self, dx: i64, dy: i64) -> bool {
        let (dx, dy) = (dx.unsigned_abs() as usize, dy.unsigned_abs() as usize);
        dy <= self.radius() && dx <= self.half_width[dy]
    }

    /// Number of pixels in the footprint.
    pub(crate) fn area(&self) -> usize {
        self.half_width
            .iter()
            .enumerate()
            .map(|(i, &w)| if i == 0 { 2 * w + 1 } else { 2 * (2 * w + 1) })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn square_is_constant() {
        let outline = Outline::new(Neighborhood::Square, 3).unwrap();
        assert!((0..=3).all(|i| outline.half_width(i) == 3));
        assert_eq!(outline.area(), 49);
    }

    #[test]
    fn diamond_decreases_by_one() {
        let outline = Outline::new(Neighborhood::Diamond, 3).unwrap();
        let widths: Vec<usize> = (0..=3).map(|i| outline.half_width(i)).collect();
        assert_eq!(widths, vec![3, 2, 1, 0]);
        assert_eq!(outline.area(), 25);
    }

    #[test]
    fn circle_radius_two() {
        // sqrt(6.25 - i²) for i = 0, 1, 2
        let outline = Outline::new(Neighborhood::Circle, 2).unwrap();
        let widths: Vec<usize> = (0..=2).map(|i| outline.half_width(i)).collect();
        assert_eq!(widths, vec![2, 2, 1]);
        assert_eq!(outline.area(), 21);
    }

    #[test]
    fn radius_zero_is_single_pixel() {
        for shape in Neighborhood::iter() {
            let outline = Outline::new(shape, 0).unwrap();
            assert_eq!(outline.radius(), 0);
            assert_eq!(outline.area(), 1, "{}", shape);
            assert!(outline.contains(0, 0));
            assert!(!outline.contains(1, 0));
        }
    }

    #[test]
    fn non_increasing_and_transpose_symmetric() {
        for shape in Neighborhood::iter() {
            for radius in 0..12 {
                let outline = Outline::new(shape, radius).unwrap();
                for i in 1..=radius {
                    assert!(outline.half_width(i) <= outline.half_width(i - 1));
                }
                let r = radius as i64;
                for dy in -r..=r {
                    for dx in -r..=r {
                        assert_eq!(
                            outline.contains(dx, dy),
                            outline.contains(dy, dx),
                            "{} r={} ({}, {})",
                            shape,
                            radius,
                            dx,
                            dy
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn area_matches_membership_count() {
        for shape in Neighborhood::iter() {
            for radius in 0..8 {
                let outline = Outline::new(shape, radius).unwrap();
                let r = radius as i64;
                let counted = (-r..=r)
                    .flat_map(|dy| (-r..=r).map(move |dx| (dx, dy)))
                    .filter(|&(dx, dy)| outline.contains(dx, dy))
                    .count();
                assert_eq!(outline.area(), counted);
            }
        }
    }
}
