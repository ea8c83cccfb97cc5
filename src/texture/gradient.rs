//! Central-difference gradient of the height field.

use crate::terrain::HeightField;

/// Partial derivatives of the height field, one pair per pixel.
#[derive(Debug, Clone)]
pub struct GradientField {
    /// d/dx, row-major.
    pub gx: Vec<f32>,
    /// d/dy, row-major.
    pub gy: Vec<f32>,
}

/// Computes the central-difference gradient with toroidal wrap on both axes.
///
/// The horizontal axis is truly cyclic (longitude), and wrapping vertically
/// as well keeps the gradient seamless at the top and bottom rows.
pub fn central_gradient(field: &HeightField) -> GradientField {
    let (width, height) = (field.width, field.height);
    let mut gx = vec![0.0; field.data.len()];
    let mut gy = vec![0.0; field.data.len()];

    for y in 0..height {
        let y_prev = if y == 0 { height - 1 } else { y - 1 };
        let y_next = if y == height - 1 { 0 } else { y + 1 };
        for x in 0..width {
            let x_prev = if x == 0 { width - 1 } else { x - 1 };
            let x_next = if x == width - 1 { 0 } else { x + 1 };

            let i = (y * width + x) as usize;
            gx[i] = field.get(x_next, y) - field.get(x_prev, y);
            gy[i] = field.get(x, y_next) - field.get(x, y_prev);
        }
    }

    GradientField { gx, gy }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_field_has_zero_gradient() {
        let field = HeightField {
            width: 8,
            height: 4,
            data: vec![0.5; 32],
        };
        let grad = central_gradient(&field);
        assert!(grad.gx.iter().all(|&g| g == 0.0));
        assert!(grad.gy.iter().all(|&g| g == 0.0));
    }

    #[test]
    fn test_horizontal_ramp() {
        // Heights 0,1,2,3 along x: interior gx = next - prev = 2.
        let field = HeightField {
            width: 4,
            height: 1,
            data: vec![0.0, 1.0, 2.0, 3.0],
        };
        let grad = central_gradient(&field);
        assert_eq!(grad.gx[1], 2.0);
        assert_eq!(grad.gx[2], 2.0);
        // At the seam the ramp folds back: gx[0] = h(1) - h(3) = -2.
        assert_eq!(grad.gx[0], -2.0);
        assert_eq!(grad.gx[3], 0.0 - 2.0);
        assert!(grad.gy.iter().all(|&g| g == 0.0));
    }

    #[test]
    fn test_vertical_wrap() {
        let field = HeightField {
            width: 1,
            height: 4,
            data: vec![0.0, 1.0, 2.0, 3.0],
        };
        let grad = central_gradient(&field);
        assert_eq!(grad.gy[0], 1.0 - 3.0);
        assert_eq!(grad.gy[3], 0.0 - 2.0);
    }
}
