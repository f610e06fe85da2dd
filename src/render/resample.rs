use crate::{
    foundation::core::{Affine, Bounds},
    foundation::math::{f64_to_u8, mul_div255_u16},
    render::surface::RgbaSurface,
    transform::affine::coefficients,
};

/// How a resampled source pixel is combined with the destination pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompositeOp {
    /// Overwrite the destination pixel.
    Replace,
    /// Premultiplied source-over.
    Blend,
}

/// Bilinear resample of `src` into `dst` through the destination-to-source map `d2s`.
///
/// Each destination pixel center `(x + 0.5, y + 0.5)` inside `dst_region` is mapped into source
/// space. Pixels whose mapped point lies outside `src_region` are left untouched; neighbors at
/// the source edge are clamped. Both regions are clipped to their surfaces first, so nothing
/// outside either surface is ever read or written.
pub fn transform(
    dst: &mut RgbaSurface,
    dst_region: Bounds,
    d2s: Affine,
    src: &RgbaSurface,
    src_region: Bounds,
    op: CompositeOp,
) {
    let dr = dst_region.intersect(dst.bounds());
    let sr = src_region.intersect(src.bounds());
    if dr.is_empty() || sr.is_empty() {
        return;
    }

    let [a, b, c, d, e, f] = coefficients(d2s);
    let (sx_min, sx_max) = (f64::from(sr.min_x), f64::from(sr.max_x()));
    let (sy_min, sy_max) = (f64::from(sr.min_y), f64::from(sr.max_y()));

    for y in dr.min_y..dr.max_y() {
        let dyf = f64::from(y) + 0.5;
        for x in dr.min_x..dr.max_x() {
            let dxf = f64::from(x) + 0.5;
            let sx = a * dxf + b * dyf + c;
            let sy = d * dxf + e * dyf + f;
            // Negated form also rejects NaN.
            if !(sx >= sx_min && sx < sx_max && sy >= sy_min && sy < sy_max) {
                continue;
            }

            let px = sample_bilinear(src, sr, sx - 0.5, sy - 0.5);
            let Some(i) = dst.offset(x, y) else {
                continue;
            };
            let out = &mut dst.data_mut()[i..i + 4];
            match op {
                CompositeOp::Replace => out.copy_from_slice(&px),
                CompositeOp::Blend => {
                    let blended = over([out[0], out[1], out[2], out[3]], px);
                    out.copy_from_slice(&blended);
                }
            }
        }
    }
}

/// Sample at continuous texel coordinates (texel centers on integers).
fn sample_bilinear(src: &RgbaSurface, sr: Bounds, fx: f64, fy: f64) -> [u8; 4] {
    let (x0, x1, tx) = clamp_axis(fx, sr.min_x, sr.max_x());
    let (y0, y1, ty) = clamp_axis(fy, sr.min_y, sr.max_y());

    let p00 = texel(src, x0, y0);
    let p10 = texel(src, x1, y0);
    let p01 = texel(src, x0, y1);
    let p11 = texel(src, x1, y1);

    let mut out = [0u8; 4];
    for ch in 0..4 {
        let top = f64::from(p00[ch]) * (1.0 - tx) + f64::from(p10[ch]) * tx;
        let bottom = f64::from(p01[ch]) * (1.0 - tx) + f64::from(p11[ch]) * tx;
        out[ch] = f64_to_u8(top * (1.0 - ty) + bottom * ty);
    }
    out
}

/// Neighbor pair and weight of the second neighbor along one axis of `[min, max)`.
#[inline]
fn clamp_axis(v: f64, min: i32, max: i32) -> (i32, i32, f64) {
    let lo = v.floor();
    let i0 = lo as i32;
    if i0 < min {
        (min, min, 0.0)
    } else if i0 >= max - 1 {
        let last = max - 1;
        (last, last, 0.0)
    } else {
        (i0, i0 + 1, v - lo)
    }
}

#[inline]
fn texel(src: &RgbaSurface, x: i32, y: i32) -> [u8; 4] {
    match src.offset(x, y) {
        Some(i) => {
            let d = src.data();
            [d[i], d[i + 1], d[i + 2], d[i + 3]]
        }
        None => [0u8; 4],
    }
}

/// Premultiplied source-over.
fn over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        let v = u16::from(src[i]) + mul_div255_u16(u16::from(dst[i]), inv);
        out[i] = v.min(255) as u8;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/resample.rs"]
mod tests;
