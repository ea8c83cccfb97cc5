//! PNG export for the generated color and height maps.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::ImageEncoder;
use thiserror::Error;

use crate::pipeline::PlanetMaps;

/// Errors that can occur during PNG export.
#[derive(Error, Debug)]
pub enum PngExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Buffer length {actual} does not match {width}x{height} RGBA")]
    BadBufferLength { width: u32, height: u32, actual: usize },
}

/// Options for PNG export.
#[derive(Debug, Clone)]
pub struct PngExportOptions {
    /// PNG compression type.
    pub compression: CompressionType,
    /// PNG filter type.
    pub filter: FilterType,
}

impl Default for PngExportOptions {
    fn default() -> Self {
        Self {
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }
}

/// Writes a raw RGBA buffer as an 8-bit PNG.
pub fn export_rgba_png(
    path: &Path,
    width: u32,
    height: u32,
    rgba: &[u8],
    options: &PngExportOptions,
) -> Result<(), PngExportError> {
    let expected = width as usize * height as usize * 4;
    if rgba.len() != expected {
        return Err(PngExportError::BadBufferLength {
            width,
            height,
            actual: rgba.len(),
        });
    }

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);
    encoder.write_image(rgba, width, height, image::ExtendedColorType::Rgba8)?;
    Ok(())
}

/// Writes both generated maps to `{output_dir}/{base_name}_colormap.png` and
/// `{output_dir}/{base_name}_heightmap.png`.
pub fn export_maps_png(
    maps: &PlanetMaps,
    output_dir: &Path,
    base_name: &str,
    options: &PngExportOptions,
) -> Result<(), PngExportError> {
    std::fs::create_dir_all(output_dir)?;

    let colormap_path = output_dir.join(format!("{}_colormap.png", base_name));
    export_rgba_png(&colormap_path, maps.width, maps.height, &maps.colormap, options)?;

    let heightmap_path = output_dir.join(format!("{}_heightmap.png", base_name));
    export_rgba_png(&heightmap_path, maps.width, maps.height, &maps.heightmap, options)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_buffer_length() {
        let err = export_rgba_png(
            Path::new("/nonexistent/out.png"),
            4,
            4,
            &[0u8; 10],
            &PngExportOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PngExportError::BadBufferLength { actual: 10, .. }));
    }

    #[test]
    fn test_roundtrip_through_tempfile() {
        let dir = std::env::temp_dir().join("planetgen_png_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("solid.png");

        let rgba: Vec<u8> = (0..4 * 4).flat_map(|_| [10u8, 20, 30, 255]).collect();
        export_rgba_png(&path, 4, 4, &rgba, &PngExportOptions::default()).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (4, 4));
        assert_eq!(img.get_pixel(2, 1).0, [10, 20, 30, 255]);
        std::fs::remove_file(&path).ok();
    }
}
