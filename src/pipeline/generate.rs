//! The generation request handler.

use thiserror::Error;

use crate::noise::SimplexNoise;
use crate::pipeline::GenerationParameters;
use crate::rng::Alea;
use crate::terrain::{synthesize_height_field, HeightField};
use crate::texture::{composite_texture, TextureError};

/// Errors rejected before pipeline entry. Generation itself is pure and
/// total: once parameters pass validation the request runs to completion.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Invalid output dimensions: {0}x{1}")]
    InvalidDimensions(u32, u32),
    #[error("Noise scale must be positive and finite, got {0}")]
    InvalidScale(f64),
    #[error("Octave count must be at least 1")]
    NoOctaves,
    #[error("Parameter '{name}' must be non-negative and finite, got {value}")]
    NegativeParameter { name: &'static str, value: f64 },
    #[error("Parameter '{name}' must lie in [0, 1], got {value}")]
    OutOfUnitRange { name: &'static str, value: f64 },
    #[error("Base texture: {0}")]
    BaseTexture(#[source] TextureError),
    #[error("High texture: {0}")]
    HighTexture(#[source] TextureError),
}

/// The two output buffers of a completed request, handed to the caller by
/// value. The pipeline retains nothing between requests.
#[derive(Debug, Clone)]
pub struct PlanetMaps {
    /// RGBA color map, `width * height * 4` bytes.
    pub colormap: Vec<u8>,
    /// RGBA grayscale visualization of the height field, same size.
    pub heightmap: Vec<u8>,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
}

fn validate(params: &GenerationParameters) -> Result<(), GenerateError> {
    if params.width == 0 || params.height == 0 {
        return Err(GenerateError::InvalidDimensions(params.width, params.height));
    }
    if !(params.scale > 0.0 && params.scale.is_finite()) {
        return Err(GenerateError::InvalidScale(params.scale));
    }
    if params.octaves == 0 {
        return Err(GenerateError::NoOctaves);
    }

    let non_negative = [
        ("crater_scale", params.crater_scale),
        ("crater_strength", params.crater_strength),
        ("lat_stretch", params.lat_stretch),
        ("texture_world_scale", params.texture_world_scale),
        ("perturb_strength", params.perturb_strength),
        ("shading_strength", params.shading_strength),
    ];
    for (name, value) in non_negative {
        if !(value >= 0.0 && value.is_finite()) {
            return Err(GenerateError::NegativeParameter { name, value });
        }
    }

    let unit_range = [
        ("blend_altitude", params.blend_altitude),
        ("blend_smoothness", params.blend_smoothness),
    ];
    for (name, value) in unit_range {
        if !(0.0..=1.0).contains(&value) {
            return Err(GenerateError::OutOfUnitRange { name, value });
        }
    }

    params.base_texture.validate().map_err(GenerateError::BaseTexture)?;
    if let Some(high) = &params.high_texture {
        high.validate().map_err(GenerateError::HighTexture)?;
    }
    Ok(())
}

/// Encodes the height field as grayscale RGBA (`R = G = B = floor(h * 255)`,
/// alpha 255).
fn encode_height_visualization(field: &HeightField) -> Vec<u8> {
    let mut out = vec![0u8; field.data.len() * 4];
    for (px, &h) in out.chunks_exact_mut(4).zip(&field.data) {
        let val = (h * 255.0).floor().clamp(0.0, 255.0) as u8;
        px[0] = val;
        px[1] = val;
        px[2] = val;
        px[3] = 255;
    }
    out
}

/// Runs one complete generation request.
///
/// Seeds the PRNG from the request seed, builds the 2D and then the 3D noise
/// instance from the same stream (crater placement continues that stream),
/// synthesizes the height field, and composites the color map.
///
/// Identical parameters produce bit-identical buffers.
pub fn generate(params: &GenerationParameters) -> Result<PlanetMaps, GenerateError> {
    validate(params)?;

    let mut rng = Alea::new(&params.seed);
    let noise2d = SimplexNoise::new(&mut rng);
    let noise3d = SimplexNoise::new(&mut rng);

    let field = synthesize_height_field(params, &noise3d, &mut rng);
    let colormap = composite_texture(params, &field, &noise2d);
    let heightmap = encode_height_visualization(&field);

    Ok(PlanetMaps {
        colormap,
        heightmap,
        width: params.width,
        height: params.height,
    })
}
