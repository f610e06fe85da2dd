use std::sync::Arc;

use crate::{
    foundation::core::{Bounds, Rgba8Premul},
    render::{
        dither::floyd_steinberg,
        palette::Palette,
        resample::{CompositeOp, transform},
        surface::{PalettedSurface, RgbaSurface},
    },
    transform::affine::rotation_about_centers,
};

/// Render one rotation step of `src` into a palette-indexed frame covering `bounds`.
///
/// 1. allocate a working surface sized to `bounds`, filled with `backfill`
/// 2. paint `src` rotated by `angle` about the centers with [`CompositeOp::Replace`]
/// 3. quantize with Floyd–Steinberg against `palette`
///
/// Corners uncovered by the rotation keep the backfill color.
#[tracing::instrument(level = "debug", skip(src, palette), fields(src = ?src.bounds()))]
pub fn render_frame(
    src: &RgbaSurface,
    bounds: Bounds,
    backfill: Rgba8Premul,
    palette: &Arc<Palette>,
    angle: f64,
) -> PalettedSurface {
    let mut working = RgbaSurface::filled(bounds, backfill);
    let d2s = rotation_about_centers(bounds, src.bounds(), angle);
    transform(
        &mut working,
        bounds,
        d2s,
        src,
        src.bounds(),
        CompositeOp::Replace,
    );
    floyd_steinberg(&working, palette)
}

/// The color revealed where rotated content no longer covers the frame: the source's
/// top-left pixel, or transparent for an empty source.
pub fn backfill_color(src: &RgbaSurface) -> Rgba8Premul {
    let b = src.bounds();
    src.get(b.min_x, b.min_y)
        .unwrap_or_else(Rgba8Premul::transparent)
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
