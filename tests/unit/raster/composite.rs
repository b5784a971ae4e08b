use super::*;

#[test]
fn over_opaque_source_replaces_destination() {
    assert_eq!(
        over([10, 20, 30, 255], [200, 100, 50, 255], 1.0),
        [200, 100, 50, 255]
    );
}

#[test]
fn over_transparent_source_is_identity() {
    assert_eq!(over([10, 20, 30, 255], [0, 0, 0, 0], 1.0), [10, 20, 30, 255]);
    assert_eq!(
        over([10, 20, 30, 255], [200, 100, 50, 255], 0.0),
        [10, 20, 30, 255]
    );
}

#[test]
fn over_half_alpha_blends() {
    // 50% premultiplied black over opaque white.
    let out = over([255, 255, 255, 255], [0, 0, 0, 128], 1.0);
    assert_eq!(out[3], 255);
    assert_eq!(out[0], 127);
}

#[test]
fn frame_rejects_wrong_length() {
    assert!(PremulFrame::new(Canvas::new(2, 2), vec![0; 15]).is_err());
    let f = PremulFrame::new(Canvas::new(2, 2), vec![0; 16]).unwrap();
    assert_eq!(f.canvas(), Canvas::new(2, 2));
    assert_eq!(f.data().len(), 16);
}

#[test]
fn flatten_onto_white_matte() {
    let data = vec![
        0, 0, 0, 0, // clear
        255, 0, 0, 255, // opaque red
    ];
    let f = PremulFrame::new(Canvas::new(2, 1), data).unwrap();
    let rgb = flatten_onto(&f, Rgba8::WHITE).unwrap();
    assert_eq!(rgb.get_pixel(0, 0).0, [255, 255, 255]);
    assert_eq!(rgb.get_pixel(1, 0).0, [255, 0, 0]);
}

#[test]
fn thumbnail_is_exact_square_regardless_of_source() {
    for (w, h) in [(454, 454), (300, 120), (7, 900)] {
        let src = RgbImage::from_pixel(w, h, image::Rgb([9, 9, 9]));
        let t = thumbnail(&src, 120).unwrap();
        assert_eq!(t.dimensions(), (120, 120));
    }
    assert!(thumbnail(&RgbImage::new(4, 4), 0).is_err());
}

#[test]
fn into_straight_unpremultiplies() {
    let f = PremulFrame::new(Canvas::new(1, 1), vec![128, 64, 0, 128]).unwrap();
    let img = f.into_straight().unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [255, 128, 0, 128]);
}
