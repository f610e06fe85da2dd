use super::*;

#[test]
fn filled_surface_reports_color_everywhere() {
    let b = Bounds::new(-2, 3, 3, 2);
    let c = Rgba8Premul::opaque(10, 20, 30);
    let s = RgbaSurface::filled(b, c);
    for y in b.min_y..b.max_y() {
        for x in b.min_x..b.max_x() {
            assert_eq!(s.get(x, y), Some(c));
        }
    }
    assert_eq!(s.data().len(), 3 * 2 * 4);
}

#[test]
fn accessors_respect_bounds() {
    let b = Bounds::new(5, 5, 2, 2);
    let mut s = RgbaSurface::new(b);
    assert_eq!(s.get(4, 5), None);
    assert_eq!(s.get(7, 5), None);
    assert!(!s.put(5, 7, Rgba8Premul::opaque(1, 1, 1)));

    assert!(s.put(6, 5, Rgba8Premul::opaque(1, 2, 3)));
    assert_eq!(s.get(6, 5), Some(Rgba8Premul::opaque(1, 2, 3)));
    assert_eq!(&s.data()[4..8], &[1, 2, 3, 255]);
    assert_eq!(s.get(5, 5), Some(Rgba8Premul::transparent()));
}

#[test]
fn fill_overwrites_existing_pixels() {
    let mut s = RgbaSurface::new(Bounds::from_size(2, 2));
    s.put(0, 0, Rgba8Premul::opaque(9, 9, 9));
    s.fill(Rgba8Premul::opaque(1, 2, 3));
    assert!(
        s.data()
            .chunks_exact(4)
            .all(|px| px == [1, 2, 3, 255])
    );
}

#[test]
fn from_premul_rgba8_checks_length() {
    let b = Bounds::from_size(2, 1);
    assert!(RgbaSurface::from_premul_rgba8(b, vec![0; 8]).is_ok());
    assert!(RgbaSurface::from_premul_rgba8(b, vec![0; 7]).is_err());
}

#[test]
fn paletted_lookup_resolves_colors() {
    let palette = Arc::new(Palette::web_safe());
    let b = Bounds::new(1, 1, 2, 1);
    let mut s = PalettedSurface::new(b, palette);
    s.indices_mut()[1] = 215;
    assert_eq!(s.index_at(1, 1), Some(0));
    assert_eq!(s.index_at(2, 1), Some(215));
    assert_eq!(s.index_at(3, 1), None);
    assert_eq!(s.color_at(2, 1), Some([255, 255, 255]));
}
