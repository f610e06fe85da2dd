use std::sync::Arc;

use crate::render::{
    palette::Palette,
    surface::{PalettedSurface, RgbaSurface},
};

/// Floyd–Steinberg weights in sixteenths: right, below-left, below, below-right.
const W_RIGHT: i32 = 7;
const W_BELOW_LEFT: i32 = 3;
const W_BELOW: i32 = 5;
const W_BELOW_RIGHT: i32 = 1;

/// Quantize `src` to `palette` with Floyd–Steinberg error diffusion.
///
/// Pixels are visited in row-major order. Premultiplied RGB channels are matched against the
/// (opaque) palette entries; alpha never influences the choice and is not diffused. Each value
/// is clamped to `0..=255` after the incoming error is added and before the nearest-color
/// lookup. The scan is inherently sequential within one surface.
pub fn floyd_steinberg(src: &RgbaSurface, palette: &Arc<Palette>) -> PalettedSurface {
    let bounds = src.bounds();
    let mut out = PalettedSurface::new(bounds, Arc::clone(palette));
    if bounds.is_empty() {
        return out;
    }

    let w = bounds.width as usize;
    // One column of padding on each side; errors landing there are discarded.
    let mut err_curr = vec![[0i32; 3]; w + 2];
    let mut err_next = vec![[0i32; 3]; w + 2];

    let data = src.data();
    let indices = out.indices_mut();
    for (row, line) in data.chunks_exact(w * 4).enumerate() {
        for (col, px) in line.chunks_exact(4).enumerate() {
            let incoming = err_curr[col + 1];
            let mut v = [0i32; 3];
            for ch in 0..3 {
                v[ch] = (i32::from(px[ch]) + incoming[ch] / 16).clamp(0, 255);
            }

            let idx = palette.nearest(v);
            indices[row * w + col] = idx;

            let chosen = palette.color(usize::from(idx)).unwrap_or_default();
            for ch in 0..3 {
                let q = v[ch] - i32::from(chosen[ch]);
                err_curr[col + 2][ch] += q * W_RIGHT;
                err_next[col][ch] += q * W_BELOW_LEFT;
                err_next[col + 1][ch] += q * W_BELOW;
                err_next[col + 2][ch] += q * W_BELOW_RIGHT;
            }
        }
        std::mem::swap(&mut err_curr, &mut err_next);
        err_next.fill([0; 3]);
    }

    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/dither.rs"]
mod tests;
