//! Impact crater placement and radial profile.

use glam::DVec3;

use crate::rng::Alea;

/// A single impact crater on the unit sphere.
#[derive(Debug, Clone)]
pub struct Crater {
    /// Crater center on the unit sphere.
    pub center: DVec3,
    /// Angular radius, in [0.02, 0.10].
    pub radius: f64,
    /// Depth factor; scales both the depression and the rim bulge.
    pub depth: f64,
}

impl Crater {
    /// Evaluates the radial profile at normalized distance `r` from the
    /// center (`r = 1` is the crater radius).
    ///
    /// The profile is a Gaussian depression plus a smaller Gaussian rim bulge
    /// centered at r = 0.9. Beyond r = 1 the contribution is zero.
    pub fn profile(&self, r: f64) -> f64 {
        if r > 1.0 {
            return 0.0;
        }
        let depression = -self.depth * (-(r * 3.0).powi(2)).exp();
        let rim = self.depth * 0.4 * (-((r - 0.9) * 5.0).powi(2)).exp();
        depression + rim
    }
}

/// Generates `count` craters with centers uniformly distributed on the unit
/// sphere, consuming three PRNG draws per crater.
pub fn generate_craters(count: usize, crater_strength: f64, rng: &mut Alea) -> Vec<Crater> {
    let mut craters = Vec::with_capacity(count);
    for _ in 0..count {
        // Uniform point on the sphere: u is the z coordinate, theta the
        // azimuth around it.
        let u = rng.next() * 2.0 - 1.0;
        let theta = rng.next() * std::f64::consts::TAU;
        let r = (1.0 - u * u).sqrt();
        let center = DVec3::new(r * theta.cos(), r * theta.sin(), u);

        craters.push(Crater {
            center,
            radius: 0.02 + rng.next() * 0.08,
            depth: crater_strength * (0.5 + rng.next()),
        });
    }
    craters
}
