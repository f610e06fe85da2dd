use super::*;

#[test]
fn web_safe_layout() {
    let p = Palette::web_safe();
    assert_eq!(p.len(), WEB_SAFE_LEN);
    assert_eq!(p.color(0), Some([0, 0, 0]));
    assert_eq!(p.color(1), Some([0, 0, 0x33]));
    assert_eq!(p.color(6), Some([0, 0x33, 0]));
    assert_eq!(p.color(36), Some([0x33, 0, 0]));
    assert_eq!(p.color(5 * 36), Some([0xff, 0, 0]));
    assert_eq!(p.color(215), Some([0xff, 0xff, 0xff]));
    assert_eq!(p.color(216), None);
}

#[test]
fn nearest_exact_and_approximate() {
    let p = Palette::web_safe();
    assert_eq!(p.nearest([255, 0, 0]), 180);
    assert_eq!(p.nearest([250, 10, 5]), 180);
    assert_eq!(p.nearest([0x66, 0x99, 0xcc]), 2 * 36 + 3 * 6 + 4);
}

#[test]
fn nearest_accepts_out_of_range_inputs() {
    let p = Palette::web_safe();
    assert_eq!(p.nearest([-40, -1, 300]), 5);
    assert_eq!(p.nearest([400, 400, 400]), 215);
}

#[test]
fn nearest_ties_resolve_to_lowest_index() {
    let p = Palette::new(vec![[0, 0, 0], [10, 10, 10], [20, 20, 20]]).unwrap();
    assert_eq!(p.nearest([5, 5, 5]), 0);
    assert_eq!(p.nearest([15, 15, 15]), 1);
}

#[test]
fn new_rejects_empty_and_oversized() {
    assert!(matches!(Palette::new(Vec::new()), Err(SpinError::Config(_))));
    assert!(matches!(
        Palette::new(vec![[0, 0, 0]; 257]),
        Err(SpinError::Config(_))
    ));
    assert_eq!(Palette::new(vec![[1, 2, 3]; 256]).unwrap().len(), 256);
}

#[test]
fn rgb_table_is_flat() {
    let p = Palette::new(vec![[1, 2, 3], [4, 5, 6]]).unwrap();
    assert_eq!(p.to_rgb_table(), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(Palette::web_safe().to_rgb_table().len(), WEB_SAFE_LEN * 3);
}
