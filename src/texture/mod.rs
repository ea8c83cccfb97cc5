//! Texture compositing: triplanar sampling, altitude blending, slope shading.

mod compositor;
mod gradient;
mod pixel_buffer;
mod sampling;

pub use compositor::composite_texture;
pub use gradient::{central_gradient, GradientField};
pub use pixel_buffer::{PixelBuffer, TextureError};
pub use sampling::sample_bilinear;
