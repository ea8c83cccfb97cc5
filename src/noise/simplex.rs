//! Seeded simplex noise in two and three dimensions.
//!
//! Standard speed-improved simplex noise (Perlin / Gustavson lineage): skew
//! the input onto a simplex grid, walk the simplex corners in coordinate
//! order, and sum a quartic falloff times a gradient dot product per corner.

use crate::rng::Alea;

/// Twelve edge-of-cube gradient directions shared by the 2D and 3D samplers.
const GRAD3: [[f64; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

/// Immutable noise sampler built once per generation request.
///
/// Construction consumes 255 draws from the supplied PRNG (one Fisher-Yates
/// shuffle of the 256-entry identity permutation). The table is doubled to 512
/// entries so corner hashing never needs an explicit wrap after the `& 255`
/// reduction of the cell coordinates.
pub struct SimplexNoise {
    perm: [u8; 512],
    perm_mod12: [u8; 512],
}

impl SimplexNoise {
    /// Builds the permutation tables from `rng`.
    pub fn new(rng: &mut Alea) -> Self {
        let mut p = [0u8; 256];
        for (i, entry) in p.iter_mut().enumerate() {
            *entry = i as u8;
        }
        for i in (1..256usize).rev() {
            let n = ((i as f64 + 1.0) * rng.next()).floor() as usize;
            p.swap(i, n);
        }

        let mut perm = [0u8; 512];
        let mut perm_mod12 = [0u8; 512];
        for i in 0..512 {
            perm[i] = p[i & 255];
            perm_mod12[i] = perm[i] % 12;
        }

        Self { perm, perm_mod12 }
    }

    /// Samples 2D noise, approximately in [-1, 1].
    pub fn noise2d(&self, x: f64, y: f64) -> f64 {
        let f2 = 0.5 * (3.0f64.sqrt() - 1.0);
        let g2 = (3.0 - 3.0f64.sqrt()) / 6.0;

        // Skew input space to the simplex grid and find the containing cell.
        let s = (x + y) * f2;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let t = (i + j) * g2;
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        // The middle corner depends on which side of the diagonal we are on.
        let (i1, j1) = if x0 > y0 { (1.0, 0.0) } else { (0.0, 1.0) };

        let x1 = x0 - i1 + g2;
        let y1 = y0 - j1 + g2;
        let x2 = x0 - 1.0 + 2.0 * g2;
        let y2 = y0 - 1.0 + 2.0 * g2;

        let ii = (i as i64 & 255) as usize;
        let jj = (j as i64 & 255) as usize;
        let gi0 = self.perm_mod12[ii + self.perm[jj] as usize] as usize;
        let gi1 = self.perm_mod12[ii + i1 as usize + self.perm[jj + j1 as usize] as usize] as usize;
        let gi2 = self.perm_mod12[ii + 1 + self.perm[jj + 1] as usize] as usize;

        let mut n = 0.0;
        for (gi, cx, cy) in [(gi0, x0, y0), (gi1, x1, y1), (gi2, x2, y2)] {
            let t = 0.5 - cx * cx - cy * cy;
            if t > 0.0 {
                let t2 = t * t;
                n += t2 * t2 * (GRAD3[gi][0] * cx + GRAD3[gi][1] * cy);
            }
        }
        70.0 * n
    }

    /// Samples 3D noise, approximately in [-1, 1].
    pub fn noise3d(&self, x: f64, y: f64, z: f64) -> f64 {
        let f3 = 1.0 / 3.0;
        let g3 = 1.0 / 6.0;

        let s = (x + y + z) * f3;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let k = (z + s).floor();
        let t = (i + j + k) * g3;
        let x0 = x - (i - t);
        let y0 = y - (j - t);
        let z0 = z - (k - t);

        // Rank the coordinate offsets to pick the two intermediate corners of
        // the simplex traversal.
        let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
            if y0 >= z0 {
                (1, 0, 0, 1, 1, 0)
            } else if x0 >= z0 {
                (1, 0, 0, 1, 0, 1)
            } else {
                (0, 0, 1, 1, 0, 1)
            }
        } else if y0 < z0 {
            (0, 0, 1, 0, 1, 1)
        } else if x0 < z0 {
            (0, 1, 0, 0, 1, 1)
        } else {
            (0, 1, 0, 1, 1, 0)
        };

        let x1 = x0 - i1 as f64 + g3;
        let y1 = y0 - j1 as f64 + g3;
        let z1 = z0 - k1 as f64 + g3;
        let x2 = x0 - i2 as f64 + 2.0 * g3;
        let y2 = y0 - j2 as f64 + 2.0 * g3;
        let z2 = z0 - k2 as f64 + 2.0 * g3;
        let x3 = x0 - 1.0 + 3.0 * g3;
        let y3 = y0 - 1.0 + 3.0 * g3;
        let z3 = z0 - 1.0 + 3.0 * g3;

        let ii = (i as i64 & 255) as usize;
        let jj = (j as i64 & 255) as usize;
        let kk = (k as i64 & 255) as usize;
        let gi0 = self.perm_mod12[ii + self.perm[jj + self.perm[kk] as usize] as usize] as usize;
        let gi1 = self.perm_mod12
            [ii + i1 + self.perm[jj + j1 + self.perm[kk + k1] as usize] as usize]
            as usize;
        let gi2 = self.perm_mod12
            [ii + i2 + self.perm[jj + j2 + self.perm[kk + k2] as usize] as usize]
            as usize;
        let gi3 =
            self.perm_mod12[ii + 1 + self.perm[jj + 1 + self.perm[kk + 1] as usize] as usize] as usize;

        let mut n = 0.0;
        for (gi, cx, cy, cz) in [
            (gi0, x0, y0, z0),
            (gi1, x1, y1, z1),
            (gi2, x2, y2, z2),
            (gi3, x3, y3, z3),
        ] {
            let t = 0.6 - cx * cx - cy * cy - cz * cz;
            if t > 0.0 {
                let t2 = t * t;
                n += t2 * t2 * (GRAD3[gi][0] * cx + GRAD3[gi][1] * cy + GRAD3[gi][2] * cz);
            }
        }
        32.0 * n
    }
}
