//! Height field synthesis: fractal base terrain plus crater impositing.

mod craters;
mod height_field;
mod synthesize;

pub use craters::{generate_craters, Crater};
pub use height_field::HeightField;
pub use synthesize::{synthesize_height_field, CraterPolicy};
