//! Frequency table with a cached rank cursor.
//!
//! The cursor remembers the last resolved bin together with the cumulative
//! weight up to and including it. Updates keep that sum current in O(1), and a
//! query only walks the bins between the old and the new answer. Consecutive
//! neighborhoods share most of their samples, so the answer rarely moves far.

use crate::common::{try_zeroed, Result};

#[derive(Debug, Clone)]
pub(crate) struct ChannelHistogram {
    bins: Vec<i64>,
    cursor: usize,
    /// Sum of `bins[0..=cursor]`.
    cursor_sum: i64,
}

impl ChannelHistogram {
    pub(crate) fn new(bin_count: usize) -> Result<Self> {
        Ok(Self {
            bins: try_zeroed(bin_count)?,
            cursor: 0,
            cursor_sum: 0,
        })
    }

    #[inline]
    pub(crate) fn update(&mut self, bin: usize, weight: i64) {
        self.bins[bin] += weight;
        if bin <= self.cursor {
            self.cursor_sum += weight;
        }
    }

    /// Bin holding the sample of rank `max(1, ceil(total * fraction))`.
    ///
    /// `total` must equal the sum of all bins. Returns `None` without moving
    /// the cursor when `total` is zero.
    pub(crate) fn query(&mut self, total: i64, fraction: f64) -> Option<usize> {
        if total <= 0 {
            return None;
        }

        let rank = ((total as f64 * fraction).ceil() as i64).clamp(1, total);

        if self.cursor_sum < rank {
            while self.cursor_sum < rank {
                self.cursor += 1;
                self.cursor_sum += self.bins[self.cursor];
            }
        } else {
            while self.cursor_sum - self.bins[self.cursor] >= rank {
                self.cursor_sum -= self.bins[self.cursor];
                self.cursor -= 1;
            }
        }

        Some(self.cursor)
    }

    pub(crate) fn bins(&self) -> &[i64] {
        &self.bins
    }

    pub(crate) fn total(&self) -> i64 {
        self.bins.iter().sum()
    }

    /// Checks that the cached sum matches the bins up to the cursor.
    pub(crate) fn cursor_is_consistent(&self) -> bool {
        self.cursor_sum == self.bins[..=self.cursor].iter().sum::<i64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(bin_count: usize, samples: &[(usize, i64)]) -> ChannelHistogram {
        let mut hist = ChannelHistogram::new(bin_count).unwrap();
        for &(bin, weight) in samples {
            hist.update(bin, weight);
        }
        hist
    }

    #[test]
    fn median_of_odd_count() {
        let mut hist = filled(16, &[(2, 1), (5, 1), (9, 1)]);
        assert_eq!(hist.query(3, 0.5), Some(5));
        assert!(hist.cursor_is_consistent());
    }

    #[test]
    fn extremes() {
        let mut hist = filled(16, &[(3, 2), (7, 1), (12, 4)]);
        assert_eq!(hist.query(7, 0.0), Some(3));
        assert_eq!(hist.query(7, 1.0), Some(12));
        assert_eq!(hist.query(7, 0.0), Some(3));
    }

    #[test]
    fn weighted_rank() {
        // ranks 1..=10 fall in bin 1, 11..=12 in bin 8
        let mut hist = filled(16, &[(1, 10), (8, 2)]);
        assert_eq!(hist.query(12, 0.8), Some(1));
        assert_eq!(hist.query(12, 0.9), Some(8));
    }

    #[test]
    fn zero_total_leaves_cursor() {
        let mut hist = filled(16, &[(4, 1)]);
        assert_eq!(hist.query(1, 1.0), Some(4));
        hist.update(4, -1);
        assert_eq!(hist.query(0, 0.5), None);
        assert!(hist.cursor_is_consistent());
        assert_eq!(hist.cursor, 4);
    }

    #[test]
    fn updates_below_cursor_keep_sum() {
        let mut hist = filled(32, &[(10, 3), (20, 3)]);
        assert_eq!(hist.query(6, 0.5), Some(10));

        hist.update(2, 5);
        hist.update(10, -1);
        hist.update(25, 1);
        assert!(hist.cursor_is_consistent());
        assert_eq!(hist.total(), 11);
        assert_eq!(hist.query(11, 0.4), Some(2));
        assert_eq!(hist.query(11, 0.5), Some(10));
        assert_eq!(hist.query(11, 0.75), Some(20));
        assert!(hist.cursor_is_consistent());
    }

    #[test]
    fn cursor_retreats_over_empty_bins() {
        let mut hist = filled(64, &[(0, 1), (63, 1)]);
        assert_eq!(hist.query(2, 1.0), Some(63));
        assert_eq!(hist.query(2, 0.5), Some(0));
        assert!(hist.cursor_is_consistent());
    }

    #[test]
    fn matches_sorted_reference() {
        let samples = [7usize, 3, 3, 12, 0, 9, 9, 9, 15, 4, 1];
        let mut sorted = samples.to_vec();
        sorted.sort_unstable();
        let pairs: Vec<(usize, i64)> = samples.iter().map(|&b| (b, 1)).collect();
        let mut hist = filled(16, &pairs);
        let total = samples.len() as i64;

        for step in 0..=20 {
            let fraction = step as f64 / 20.0;
            let rank = ((total as f64 * fraction).ceil() as usize).max(1);
            assert_eq!(hist.query(total, fraction), Some(sorted[rank - 1]));
        }
    }
}
