use super::*;

fn temp_dir(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "dialkit_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn png_roundtrip_keeps_alpha() {
    let tmp = temp_dir("encode_png");
    std::fs::create_dir_all(&tmp).unwrap();
    let p = tmp.join("layer.png");

    let img = RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 40]));
    save_png(&p, &img).unwrap();
    let back = load_optional_rgba(&p).unwrap().unwrap();
    assert_eq!(back, img);

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn missing_layer_loads_as_none() {
    let tmp = temp_dir("encode_missing");
    assert!(load_optional_rgba(&tmp.join("nope.png")).unwrap().is_none());
}

#[test]
fn jpeg_is_written_with_requested_dimensions() {
    let tmp = temp_dir("encode_jpeg");
    std::fs::create_dir_all(&tmp).unwrap();
    let p = tmp.join("cover.jpg");

    let img = RgbImage::from_pixel(20, 10, image::Rgb([200, 10, 10]));
    save_jpeg(&p, &img, 95).unwrap();
    let back = image::open(&p).unwrap();
    assert_eq!((back.width(), back.height()), (20, 10));
    assert!(!back.color().has_alpha());

    assert!(save_jpeg(&p, &img, 0).is_err());
    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn save_png_into_missing_dir_fails_with_path() {
    let tmp = temp_dir("encode_no_dir");
    let p = tmp.join("a").join("b.png");
    let err = save_png(&p, &RgbaImage::new(1, 1)).unwrap_err();
    assert!(err.to_string().contains("b.png"));
}
