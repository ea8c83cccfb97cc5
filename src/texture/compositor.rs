//! Color map compositing from the height field and source textures.

use glam::DVec3;
use rayon::prelude::*;

use crate::geometry::map_to_sphere;
use crate::noise::SimplexNoise;
use crate::pipeline::GenerationParameters;
use crate::terrain::HeightField;
use crate::texture::{central_gradient, sample_bilinear, PixelBuffer};

/// Frequency of the 2D perturbation noise in sphere units.
const PERTURB_FREQUENCY: f64 = 300.0;

/// Scale applied to the height gradient when building the shading normal.
const GRADIENT_NORMAL_SCALE: f64 = 100.0;

/// Ambient floor of the diffuse shading term.
const AMBIENT: f64 = 0.6;

/// Maximum diffuse contribution on top of the ambient floor.
const DIFFUSE: f64 = 0.4;

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Cubic Hermite ramp: 0 below `edge0`, 1 above `edge1`, smooth in between.
#[inline]
fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Triplanar blend weights for a unit-sphere point: the absolute components
/// normalized to sum 1, so the most axis-aligned projection dominates.
#[inline]
fn triplanar_weights(sp: DVec3) -> DVec3 {
    let w = sp.abs();
    w / (w.x + w.y + w.z)
}

/// Samples `tex` through all three axis-aligned projections and blends by the
/// triplanar weights. The same perturbation offset is applied to every
/// projection so the planes stay correlated.
fn triplanar_color(
    sp: DVec3,
    tex: &PixelBuffer,
    world_scale: f64,
    perturb: f64,
    weights: DVec3,
) -> [f64; 3] {
    let tw = tex.width as f64 * world_scale;
    let th = tex.height as f64 * world_scale;

    // Each projection keys (u, v) off the two non-dominant sphere coordinates.
    let cx = sample_bilinear(tex, sp.y * tw + perturb, sp.z * th + perturb);
    let cy = sample_bilinear(tex, sp.x * tw + perturb, sp.z * th + perturb);
    let cz = sample_bilinear(tex, sp.x * tw + perturb, sp.y * th + perturb);

    let mut out = [0.0; 3];
    for ch in 0..3 {
        out[ch] = cx[ch] * weights.x + cy[ch] * weights.y + cz[ch] * weights.z;
    }
    out
}

/// Composites the final RGBA color map for one generation request.
///
/// Per pixel: triplanar-sample the base texture (and the optional
/// high-altitude texture, blended by a smoothstep ramp on the height value),
/// then darken by a slope-based diffuse term derived from the height-field
/// gradient. Alpha is always 255.
pub fn composite_texture(
    params: &GenerationParameters,
    field: &HeightField,
    noise2d: &SimplexNoise,
) -> Vec<u8> {
    let (width, height) = (params.width, params.height);
    let light = DVec3::new(1.0, 0.5, 0.5).normalize();
    let grad = central_gradient(field);

    let mut colormap = vec![0u8; width as usize * height as usize * 4];

    colormap
        .par_chunks_mut(width as usize * 4)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..width as usize {
                let i = y * width as usize + x;
                let h = field.data[i] as f64;
                let sp = map_to_sphere(x as u32, y as u32, width, height, params.lat_stretch);

                let weights = triplanar_weights(sp);
                let perturb = noise2d.noise2d(sp.x * PERTURB_FREQUENCY, sp.y * PERTURB_FREQUENCY)
                    * params.perturb_strength;

                let base = triplanar_color(
                    sp,
                    &params.base_texture,
                    params.texture_world_scale,
                    perturb,
                    weights,
                );

                let color = match &params.high_texture {
                    Some(high_tex) => {
                        let high = triplanar_color(
                            sp,
                            high_tex,
                            params.texture_world_scale,
                            perturb,
                            weights,
                        );
                        let mix = smoothstep(
                            params.blend_altitude - params.blend_smoothness,
                            params.blend_altitude + params.blend_smoothness,
                            h,
                        );
                        [
                            lerp(base[0], high[0], mix),
                            lerp(base[1], high[1], mix),
                            lerp(base[2], high[2], mix),
                        ]
                    }
                    None => base,
                };

                let normal = DVec3::new(
                    -grad.gx[i] as f64 * params.shading_strength * GRADIENT_NORMAL_SCALE,
                    -grad.gy[i] as f64 * params.shading_strength * GRADIENT_NORMAL_SCALE,
                    1.0,
                )
                .normalize();
                let shading = AMBIENT + DIFFUSE * normal.dot(light).max(0.0);

                let px = &mut row[x * 4..x * 4 + 4];
                for ch in 0..3 {
                    px[ch] = (color[ch] * shading).round().clamp(0.0, 255.0) as u8;
                }
                px[3] = 255;
            }
        });

    colormap
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Alea;

    fn flat_params(high: Option<PixelBuffer>) -> GenerationParameters {
        GenerationParameters {
            seed: "tex".to_string(),
            width: 16,
            height: 8,
            base_texture: PixelBuffer::solid(4, 4, [100, 100, 100, 255]).unwrap(),
            high_texture: high,
            perturb_strength: 0.0,
            shading_strength: 0.0,
            ..GenerationParameters::default()
        }
    }

    fn flat_field(width: u32, height: u32, value: f32) -> HeightField {
        HeightField {
            width,
            height,
            data: vec![value; width as usize * height as usize],
        }
    }

    #[test]
    fn test_triplanar_weights_partition_of_unity() {
        let mut coords = Alea::new("weights");
        for _ in 0..1000 {
            let u = coords.next() * 2.0 - 1.0;
            let theta = coords.next() * std::f64::consts::TAU;
            let r = (1.0 - u * u).sqrt();
            let sp = DVec3::new(r * theta.cos(), r * theta.sin(), u);

            let w = triplanar_weights(sp);
            assert!(((w.x + w.y + w.z) - 1.0).abs() < 1e-6);
            assert!(w.x >= 0.0 && w.y >= 0.0 && w.z >= 0.0);
        }
    }

    #[test]
    fn test_smoothstep_edges() {
        assert_eq!(smoothstep(0.2, 0.8, 0.0), 0.0);
        assert_eq!(smoothstep(0.2, 0.8, 1.0), 1.0);
        assert!((smoothstep(0.2, 0.8, 0.5) - 0.5).abs() < 1e-9);
        // Monotone between the edges.
        assert!(smoothstep(0.2, 0.8, 0.4) < smoothstep(0.2, 0.8, 0.6));
    }

    #[test]
    fn test_solid_texture_no_shading_is_uniform() {
        // A solid texture with zero shading strength and a flat field must
        // produce a uniform color map: the ambient floor plus the full
        // diffuse term, since the normal is straight up.
        let params = flat_params(None);
        let field = flat_field(params.width, params.height, 0.5);
        let noise2d = SimplexNoise::new(&mut Alea::new("tex"));

        let out = composite_texture(&params, &field, &noise2d);
        let light_z = DVec3::new(1.0, 0.5, 0.5).normalize().z;
        let expected = (100.0 * (AMBIENT + DIFFUSE * light_z)).round() as u8;
        for px in out.chunks_exact(4) {
            assert_eq!(px[0], expected);
            assert_eq!(px[1], expected);
            assert_eq!(px[2], expected);
            assert_eq!(px[3], 255);
        }
    }

    #[test]
    fn test_altitude_blend_selects_high_texture() {
        let high = PixelBuffer::solid(4, 4, [200, 0, 0, 255]).unwrap();
        let mut params = flat_params(Some(high));
        params.blend_altitude = 0.5;
        params.blend_smoothness = 0.1;
        let noise2d = SimplexNoise::new(&mut Alea::new("tex"));

        // Well above the blend ramp: pure high texture.
        let high_field = flat_field(params.width, params.height, 0.9);
        let out = composite_texture(&params, &high_field, &noise2d);
        assert!(out[0] > out[1], "red high texture should dominate");

        // Well below: pure base (gray, equal channels).
        let low_field = flat_field(params.width, params.height, 0.1);
        let out = composite_texture(&params, &low_field, &noise2d);
        assert_eq!(out[0], out[1]);
    }

    #[test]
    fn test_missing_high_texture_is_no_blend() {
        let mut params = flat_params(None);
        params.blend_altitude = 0.5;
        params.blend_smoothness = 0.25;
        let field = flat_field(params.width, params.height, 0.9);
        let noise2d = SimplexNoise::new(&mut Alea::new("tex"));

        let out = composite_texture(&params, &field, &noise2d);
        assert_eq!(out.len(), 16 * 8 * 4);
        assert!(out.chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_deterministic() {
        let params = flat_params(None);
        let field = flat_field(params.width, params.height, 0.3);
        let noise2d = SimplexNoise::new(&mut Alea::new("tex"));
        let a = composite_texture(&params, &field, &noise2d);
        let b = composite_texture(&params, &field, &noise2d);
        assert_eq!(a, b);
    }
}
