//! Procedural planet surface generator.
//!
//! This crate turns a small set of numeric parameters (seed, noise scale,
//! octave count, crater parameters, texture-blend parameters) into a planet's
//! surface appearance: a normalized height field rendered as a grayscale map,
//! and a color map built by triplanar texture sampling with altitude blending
//! and slope-based shading. Generation is fully deterministic: the same
//! parameters produce bit-identical output buffers.

pub mod export;
pub mod geometry;
pub mod noise;
pub mod pipeline;
pub mod rng;
pub mod terrain;
pub mod texture;

pub use noise::SimplexNoise;
pub use pipeline::{generate, GenerateError, GenerationParameters, PlanetMaps};
pub use rng::Alea;
pub use terrain::{CraterPolicy, HeightField};
pub use texture::{PixelBuffer, TextureError};
