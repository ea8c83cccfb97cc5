//! Generation request parameters.

use serde::{Deserialize, Serialize};

use crate::geometry::DEFAULT_LAT_STRETCH;
use crate::terrain::CraterPolicy;
use crate::texture::PixelBuffer;

/// All inputs of one generation request. Immutable for the duration of the
/// call; every output is a pure function of this struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParameters {
    /// Seed in string form. Numeric seeds are formatted to decimal by the
    /// caller; "42" and 42 are the same seed.
    pub seed: String,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Base noise scale; the first octave samples at `scale / 100`.
    pub scale: f64,
    /// Number of fractal octaves (lacunarity 2, persistence 0.5).
    pub octaves: u32,
    /// Crater density. The profile policy places `floor(crater_scale * 50)`
    /// craters; the noise policy uses it as the crater-channel frequency.
    pub crater_scale: f64,
    /// Crater depth factor.
    pub crater_strength: f64,
    /// Crater impositing algorithm.
    pub crater_policy: CraterPolicy,
    /// Latitude compression factor; 1.0 disables compression.
    pub lat_stretch: f64,
    /// Low-altitude (base) texture.
    pub base_texture: PixelBuffer,
    /// Optional high-altitude texture. Absent means no altitude blending.
    pub high_texture: Option<PixelBuffer>,
    /// Center of the altitude blend ramp, in normalized height [0, 1].
    pub blend_altitude: f64,
    /// Half-width of the altitude blend ramp, in [0, 1].
    pub blend_smoothness: f64,
    /// Texture repeat factor across the sphere.
    pub texture_world_scale: f64,
    /// Strength of the noise-driven texture coordinate perturbation.
    pub perturb_strength: f64,
    /// Strength of the slope-based diffuse shading.
    pub shading_strength: f64,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            seed: "0".to_string(),
            width: 512,
            height: 256,
            scale: 50.0,
            octaves: 4,
            crater_scale: 1.0,
            crater_strength: 0.3,
            crater_policy: CraterPolicy::default(),
            lat_stretch: DEFAULT_LAT_STRETCH,
            base_texture: PixelBuffer::neutral(),
            high_texture: None,
            blend_altitude: 0.6,
            blend_smoothness: 0.1,
            texture_world_scale: 1.0,
            perturb_strength: 2.0,
            shading_strength: 1.0,
        }
    }
}

impl GenerationParameters {
    /// Creates default parameters with the given seed.
    pub fn with_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            ..Default::default()
        }
    }

    /// Preset for an airless, heavily cratered body.
    pub fn airless_moon(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            octaves: 5,
            crater_scale: 2.0,
            crater_strength: 0.5,
            ..Default::default()
        }
    }
}
