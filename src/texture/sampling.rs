//! Bilinear texture sampling with toroidal wrap.

use crate::texture::PixelBuffer;

/// Reduces `value` into [0, n) with a true mathematical modulo.
///
/// A truncating remainder would return negative results for negative inputs
/// and introduce sign bugs at the wrap seam.
#[inline]
fn wrap(value: f64, n: f64) -> f64 {
    value.rem_euclid(n)
}

/// Samples the texture at a fractional `(u, v)` in pixel units, wrapping
/// toroidally on both axes.
///
/// The four surrounding texels are blended by the fractional offsets; at
/// exact integer coordinates this returns the source pixel unchanged. Only
/// R, G and B are sampled.
pub fn sample_bilinear(tex: &PixelBuffer, u: f64, v: f64) -> [f64; 3] {
    let u = wrap(u, tex.width as f64);
    let v = wrap(v, tex.height as f64);

    // rem_euclid can round up to exactly `n` for tiny negative inputs, so
    // the integer coordinates get a final wrap of their own.
    let x0 = (u.floor() as u32) % tex.width;
    let y0 = (v.floor() as u32) % tex.height;
    let x1 = (x0 + 1) % tex.width;
    let y1 = (y0 + 1) % tex.height;

    let u_ratio = u - u.floor();
    let v_ratio = v - v.floor();
    let u_opposite = 1.0 - u_ratio;
    let v_opposite = 1.0 - v_ratio;

    let c00 = tex.rgb(x0, y0);
    let c10 = tex.rgb(x1, y0);
    let c01 = tex.rgb(x0, y1);
    let c11 = tex.rgb(x1, y1);

    let mut out = [0.0; 3];
    for ch in 0..3 {
        out[ch] = (c00[ch] * u_opposite + c10[ch] * u_ratio) * v_opposite
            + (c01[ch] * u_opposite + c11[ch] * u_ratio) * v_ratio;
    }
    out
}
