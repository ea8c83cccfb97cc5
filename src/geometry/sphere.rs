//! Pixel coordinate to unit-sphere mapping for an equirectangular grid.

use glam::DVec3;

/// Default latitude compression factor.
///
/// Values below 1.0 compress the latitude range sampled by the grid, which
/// reduces the polar distortion of the equirectangular projection. 1.0 gives
/// the full uncompressed mapping.
pub const DEFAULT_LAT_STRETCH: f64 = 0.65;

/// Maps a pixel coordinate on a `width` x `height` equirectangular grid to a
/// point on the unit sphere.
///
/// Longitude covers the full [0, 2π) range across the row, so column 0 and
/// column `width` would coincide (the seam wraps, it is not duplicated).
/// Latitude is derived through `acos(1 - 2t) - π/2` from the compressed
/// row fraction `t = (y/height - 0.5)·lat_stretch + 0.5`.
///
/// # Returns
/// A unit vector (length 1 up to floating error).
pub fn map_to_sphere(x: u32, y: u32, width: u32, height: u32, lat_stretch: f64) -> DVec3 {
    let lon = (x as f64 / width as f64) * std::f64::consts::TAU;
    let t = (y as f64 / height as f64 - 0.5) * lat_stretch + 0.5;
    let lat = (1.0 - 2.0 * t).acos() - std::f64::consts::FRAC_PI_2;

    let (slat, clat) = lat.sin_cos();
    let (slon, clon) = lon.sin_cos();
    DVec3::new(clat * clon, clat * slon, slat)
}
