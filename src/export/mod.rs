//! Export of generated maps to image files.

mod png;

pub use png::{export_maps_png, export_rgba_png, PngExportError, PngExportOptions};
