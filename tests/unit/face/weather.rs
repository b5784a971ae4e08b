use super::*;

#[test]
fn codes_are_contiguous() {
    for (i, code) in WeatherCode::ALL.iter().enumerate() {
        assert_eq!(usize::from(code.code()), i);
        assert_eq!(WeatherCode::try_from(code.code()).unwrap(), *code);
    }
    assert!(WeatherCode::try_from(8).is_err());
}

#[test]
fn every_glyph_draws_something() {
    let p = WeatherPalette::default();
    let mut seen = Vec::new();
    for code in WeatherCode::ALL {
        let img = render_weather(code, &p).unwrap();
        assert_eq!(img.dimensions(), (32, 32));
        assert!(img.pixels().any(|px| px.0[3] > 0), "{} is blank", code.name());
        seen.push(img.into_raw());
    }
    seen.dedup();
    assert_eq!(seen.len(), 8);
}

#[test]
fn sunny_has_a_yellow_core() {
    let p = WeatherPalette::default();
    let img = render_weather(WeatherCode::Sunny, &p).unwrap();
    assert_eq!(img.get_pixel(16, 16).0, p.sun.to_array());
    assert_eq!(img.get_pixel(0, 31).0[3], 0);
}

#[test]
fn haze_stays_translucent() {
    let p = WeatherPalette::default();
    let img = render_weather(WeatherCode::Haze, &p).unwrap();
    let max_alpha = img.pixels().map(|px| px.0[3]).max().unwrap();
    assert!(max_alpha <= p.haze.a);
    assert!(max_alpha > 100);
}
