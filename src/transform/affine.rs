//! Affine transform helpers.
//!
//! All transforms built here map **destination** pixel space to **source** pixel space, so the
//! resampler can apply them directly to each destination sample position.

use crate::foundation::core::{Affine, Bounds, Point};

#[inline]
pub fn compose(a: Affine, b: Affine) -> Affine {
    a * b
}

#[inline]
pub fn identity() -> Affine {
    Affine::IDENTITY
}

#[inline]
pub fn apply(t: Affine, p: Point) -> Point {
    t * p
}

/// Row-major `[a, b, c, d, e, f]` view where `x' = a·x + b·y + c` and `y' = d·x + e·y + f`.
pub fn coefficients(t: Affine) -> [f64; 6] {
    let [a, d, b, e, c, f] = t.as_coeffs();
    [a, b, c, d, e, f]
}

/// Destination-to-source rotation about each rectangle's own center.
///
/// A destination offset `(dx, dy)` from `dst.center()` lands on the source offset
/// `(cos·dx − sin·dy, sin·dx + cos·dy)` from `src.center()`. On a y-down raster the rendered
/// content turns counter-clockwise as `angle` grows. Any finite angle is accepted; no
/// normalization is applied.
pub fn rotation_about_centers(dst: Bounds, src: Bounds, angle: f64) -> Affine {
    let to_origin = Affine::translate(-dst.center().to_vec2());
    let rotate = Affine::rotate(angle);
    let to_source = Affine::translate(src.center().to_vec2());

    // Rightmost factor applies first.
    compose(to_source, compose(rotate, to_origin))
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
