//! Height field synthesis: fractal base terrain plus crater impositing.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::geometry::map_to_sphere;
use crate::noise::SimplexNoise;
use crate::pipeline::GenerationParameters;
use crate::rng::Alea;
use crate::terrain::{generate_craters, Crater, HeightField};

/// Number of craters generated per unit of `crater_scale`.
const CRATERS_PER_SCALE: f64 = 50.0;

/// Coordinate offset decorrelating the noise-policy crater channel from the
/// base terrain noise.
const CRATER_NOISE_SHIFT: f64 = 100.0;

/// Selects how craters are imposed on the base terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CraterPolicy {
    /// Inverted low-frequency noise, biased to [0, 1], raised to the 4th
    /// power and subtracted. Cheap, produces soft dimples.
    Noise,
    /// An explicit crater field: randomly placed craters with a Gaussian
    /// depression and rim bulge profile, summed into the terrain.
    Profile,
}

impl Default for CraterPolicy {
    fn default() -> Self {
        CraterPolicy::Profile
    }
}

/// Synthesizes the normalized height field for one generation request.
///
/// Crater placement (profile policy) draws from `rng` before the pixel loop,
/// so the PRNG stream position stays independent of the grid size. The pixel
/// loop itself is pure and parallelized over rows.
pub fn synthesize_height_field(
    params: &GenerationParameters,
    noise3d: &SimplexNoise,
    rng: &mut Alea,
) -> HeightField {
    let craters: Vec<Crater> = match params.crater_policy {
        CraterPolicy::Profile => {
            let count = (params.crater_scale * CRATERS_PER_SCALE).floor() as usize;
            generate_craters(count, params.crater_strength, rng)
        }
        CraterPolicy::Noise => Vec::new(),
    };

    let mut field = HeightField::new(params.width, params.height);
    let width = params.width;

    field
        .data
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, out) in row.iter_mut().enumerate() {
                let sp = map_to_sphere(x as u32, y as u32, width, params.height, params.lat_stretch);

                let mut base = 0.0;
                let mut freq = params.scale / 100.0;
                let mut amp = 1.0;
                for _ in 0..params.octaves {
                    base += noise3d.noise3d(sp.x * freq, sp.y * freq, sp.z * freq) * amp;
                    freq *= 2.0;
                    amp *= 0.5;
                }

                let h = match params.crater_policy {
                    CraterPolicy::Noise => {
                        let f = params.crater_scale / 100.0;
                        let raw = noise3d.noise3d(
                            sp.x * f + CRATER_NOISE_SHIFT,
                            sp.y * f + CRATER_NOISE_SHIFT,
                            sp.z * f + CRATER_NOISE_SHIFT,
                        );
                        let inverted = 1.0 - (raw + 1.0) / 2.0;
                        base - inverted.powi(4) * params.crater_strength
                    }
                    CraterPolicy::Profile => {
                        let mut effect = 0.0;
                        for crater in &craters {
                            let r = (sp - crater.center).length() / crater.radius;
                            // Broad-phase: skip craters well outside the rim.
                            if r <= 1.2 {
                                effect += crater.profile(r);
                            }
                        }
                        base + effect
                    }
                };

                *out = h as f32;
            }
        });

    field.normalize();
    field
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_params(policy: CraterPolicy) -> GenerationParameters {
        GenerationParameters {
            seed: "42".to_string(),
            width: 32,
            height: 16,
            crater_policy: policy,
            ..GenerationParameters::default()
        }
    }

    fn synthesize(params: &GenerationParameters) -> HeightField {
        let mut rng = Alea::new(&params.seed);
        let _noise2d = SimplexNoise::new(&mut rng);
        let noise3d = SimplexNoise::new(&mut rng);
        synthesize_height_field(params, &noise3d, &mut rng)
    }

    #[test]
    fn test_normalized_range() {
        for policy in [CraterPolicy::Noise, CraterPolicy::Profile] {
            let field = synthesize(&test_params(policy));
            let (min, max) = field.range();
            assert!(min.abs() < 1e-5, "{:?}: min {}", policy, min);
            assert!((max - 1.0).abs() < 1e-5, "{:?}: max {}", policy, max);
        }
    }

    #[test]
    fn test_deterministic_for_seed() {
        let params = test_params(CraterPolicy::Profile);
        let a = synthesize(&params);
        let b = synthesize(&params);
        assert_eq!(a.data, b.data);
    }

    #[test]
    fn test_seed_changes_field() {
        let params = test_params(CraterPolicy::Profile);
        let mut other = params.clone();
        other.seed = "43".to_string();
        assert_ne!(synthesize(&params).data, synthesize(&other).data);
    }

    #[test]
    fn test_policies_disagree() {
        let noise = synthesize(&test_params(CraterPolicy::Noise));
        let profile = synthesize(&test_params(CraterPolicy::Profile));
        assert_ne!(noise.data, profile.data);
    }

    #[test]
    fn test_zero_crater_scale_means_no_craters() {
        let mut params = test_params(CraterPolicy::Profile);
        params.crater_scale = 0.0;

        // With no craters the profile policy reduces to plain fBm terrain.
        let mut rng = Alea::new(&params.seed);
        let _noise2d = SimplexNoise::new(&mut rng);
        let noise3d = SimplexNoise::new(&mut rng);
        let craters_drawn_before = rng.clone().next();
        let _field = synthesize_height_field(&params, &noise3d, &mut rng);
        // No PRNG draws were consumed by crater placement.
        assert_eq!(rng.next(), craters_drawn_before);
    }
}
