//! Equirectangular grid to unit-sphere mapping.

mod sphere;

pub use sphere::{map_to_sphere, DEFAULT_LAT_STRETCH};
