//! Request orchestration: parameters in, two pixel buffers out.

mod generate;
mod params;

pub use generate::{generate, GenerateError, PlanetMaps};
pub use params::GenerationParameters;
