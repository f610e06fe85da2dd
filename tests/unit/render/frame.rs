use std::f64::consts::{FRAC_PI_4, TAU};

use super::*;

fn gradient(w: u32, h: u32) -> RgbaSurface {
    let b = Bounds::from_size(w, h);
    let mut s = RgbaSurface::new(b);
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            s.put(
                x,
                y,
                Rgba8Premul::opaque((x * 13) as u8, (y * 17) as u8, ((x + y) * 5) as u8),
            );
        }
    }
    s
}

#[test]
fn zero_angle_matches_direct_quantization() {
    let src = gradient(12, 9);
    let palette = Arc::new(Palette::web_safe());
    let backfill = backfill_color(&src);
    let frame = render_frame(&src, src.bounds(), backfill, &palette, 0.0);
    assert_eq!(frame, floyd_steinberg(&src, &palette));
}

#[test]
fn full_turn_matches_zero_angle() {
    let src = gradient(16, 10);
    let palette = Arc::new(Palette::web_safe());
    let backfill = backfill_color(&src);
    let a = render_frame(&src, src.bounds(), backfill, &palette, 0.0);
    let b = render_frame(&src, src.bounds(), backfill, &palette, TAU);
    assert_eq!(a, b);
}

#[test]
fn exposed_corners_show_backfill() {
    let b = Bounds::from_size(16, 16);
    let mut src = RgbaSurface::filled(b, Rgba8Premul::opaque(255, 255, 255));
    let backfill = Rgba8Premul::opaque(0x33, 0x66, 0x99);
    src.put(0, 0, backfill);
    assert_eq!(backfill_color(&src), backfill);

    let palette = Arc::new(Palette::web_safe());
    let frame = render_frame(&src, b, backfill_color(&src), &palette, FRAC_PI_4);

    let backfill_idx = palette.nearest([0x33, 0x66, 0x99]);
    for (x, y) in [(0, 0), (15, 0), (0, 15), (15, 15)] {
        assert_eq!(frame.index_at(x, y), Some(backfill_idx), "corner ({x},{y})");
    }
    assert_eq!(frame.index_at(8, 8), Some(215));
}

#[test]
fn frame_covers_requested_bounds() {
    let src = gradient(6, 4);
    let bounds = Bounds::new(-3, 2, 10, 7);
    let palette = Arc::new(Palette::web_safe());
    let frame = render_frame(&src, bounds, backfill_color(&src), &palette, 1.0);
    assert_eq!(frame.bounds(), bounds);
    assert_eq!(frame.indices().len(), bounds.area());
    assert!(Arc::ptr_eq(frame.palette(), &palette));
}

#[test]
fn single_pixel_source_renders_at_any_angle() {
    let b = Bounds::from_size(1, 1);
    let src = RgbaSurface::filled(b, Rgba8Premul::opaque(0, 0xcc, 0));
    let palette = Arc::new(Palette::web_safe());
    for angle in [0.0, 0.5, -3.0, 100.0] {
        let frame = render_frame(&src, b, backfill_color(&src), &palette, angle);
        assert_eq!(frame.indices(), &[4 * 6]);
    }
}

#[test]
fn backfill_uses_top_left_of_offset_bounds() {
    let b = Bounds::new(5, 7, 2, 2);
    let mut src = RgbaSurface::new(b);
    src.put(5, 7, Rgba8Premul::opaque(1, 2, 3));
    assert_eq!(backfill_color(&src), Rgba8Premul::opaque(1, 2, 3));
    assert_eq!(
        backfill_color(&RgbaSurface::new(Bounds::from_size(0, 0))),
        Rgba8Premul::transparent()
    );
}
