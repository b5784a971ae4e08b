use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Rgba8 = serde_json::from_value(json!("#2d4b91")).unwrap();
    assert_eq!(c, Rgba8::rgb(45, 75, 145));

    let c: Rgba8 = serde_json::from_value(json!("C8CDD750")).unwrap();
    assert_eq!(c, Rgba8::new(200, 205, 215, 80));

    assert!(serde_json::from_value::<Rgba8>(json!("#12345")).is_err());
    assert!(serde_json::from_value::<Rgba8>(json!("#gg0000")).is_err());
}

#[test]
fn parses_byte_arrays() {
    let c: Rgba8 = serde_json::from_value(json!([200, 50, 60])).unwrap();
    assert_eq!(c, Rgba8::rgb(200, 50, 60));

    let c: Rgba8 = serde_json::from_value(json!([180, 170, 150, 160])).unwrap();
    assert_eq!(c.a, 160);

    assert!(serde_json::from_value::<Rgba8>(json!([1, 2])).is_err());
}

#[test]
fn serializes_as_short_hex_when_opaque() {
    assert_eq!(
        serde_json::to_value(Rgba8::rgb(255, 0, 16)).unwrap(),
        json!("#ff0010")
    );
    assert_eq!(
        serde_json::to_value(Rgba8::new(0, 0, 0, 128)).unwrap(),
        json!("#00000080")
    );
}

#[test]
fn premultiply_rounds_half_up() {
    let p = Rgba8::new(255, 128, 0, 128).premultiply();
    assert_eq!(p.to_array(), [128, 64, 0, 128]);
    assert_eq!(Rgba8::TRANSPARENT.premultiply().to_array(), [0, 0, 0, 0]);
}

#[test]
fn lerp_hits_endpoints() {
    let a = Rgba8::rgb(255, 255, 255);
    let b = Rgba8::rgb(220, 220, 223);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 7.0), b);
}
