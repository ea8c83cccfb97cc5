//! Dense height grid with min/max normalization.

use serde::{Deserialize, Serialize};

/// A row-major grid of height samples, one per output pixel.
///
/// After [`normalize`](HeightField::normalize) all values lie in [0, 1] with
/// at least one 0 and one 1, unless the field is flat (see below).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeightField {
    /// Grid width in pixels.
    pub width: u32,
    /// Grid height in pixels.
    pub height: u32,
    /// Height values stored in row-major order (`y * width + x`).
    pub data: Vec<f32>,
}

impl HeightField {
    /// Creates a zero-filled field of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width as usize * height as usize],
        }
    }

    /// Returns the height at `(x, y)`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.data[(y * self.width + x) as usize]
    }

    /// Computes the min and max values across the field.
    pub fn range(&self) -> (f32, f32) {
        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for &h in &self.data {
            min = min.min(h);
            max = max.max(h);
        }
        (min, max)
    }

    /// Rescales all values into [0, 1].
    ///
    /// A degenerate (near-flat) field with `max - min <= 1e-6` is left
    /// untouched rather than divided by a vanishing range; callers treat that
    /// as a flat planet, not an error.
    pub fn normalize(&mut self) {
        let (min, max) = self.range();
        let range = max - min;
        if range > 1e-6 {
            for h in &mut self.data {
                *h = (*h - min) / range;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_spans_unit_interval() {
        let mut field = HeightField {
            width: 2,
            height: 2,
            data: vec![-3.0, 1.0, 5.0, 0.5],
        };
        field.normalize();

        let (min, max) = field.range();
        assert!(min.abs() < 1e-5);
        assert!((max - 1.0).abs() < 1e-5);
        assert!(field.data.iter().all(|&h| (0.0..=1.0).contains(&h)));
    }

    #[test]
    fn test_normalize_skips_flat_field() {
        let mut field = HeightField {
            width: 4,
            height: 1,
            data: vec![0.25; 4],
        };
        field.normalize();
        // Raw values pass through; no division by a near-zero range.
        assert!(field.data.iter().all(|&h| h == 0.25));
    }

    #[test]
    fn test_row_major_indexing() {
        let mut field = HeightField::new(3, 2);
        field.data[1 * 3 + 2] = 7.0;
        assert_eq!(field.get(2, 1), 7.0);
        assert_eq!(field.get(2, 0), 0.0);
    }
}
