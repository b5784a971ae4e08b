use super::*;
use crate::face::theme::NumeralStyle;
use crate::text::resolve::FontConfig;

#[test]
fn background_is_a_gradient_disc() {
    let theme = Theme::business();
    let img = background(&theme, Canvas::FACE);
    assert_eq!(img.dimensions(), (454, 454));

    // Corners are outside the disc.
    assert_eq!(img.get_pixel(0, 0).0[3], 0);
    assert_eq!(img.get_pixel(453, 453).0[3], 0);

    // Center is near-white, the rim is darker.
    let center = img.get_pixel(227, 227).0;
    assert_eq!(center[3], 255);
    assert!(center[0] >= 254);
    let rim = img.get_pixel(227, 3).0;
    assert_eq!(rim[3], 255);
    assert!(rim[0] < center[0]);
    assert!(rim[0] >= 220);
}

#[test]
fn tick_ring_marks_twelve_oclock() {
    let theme = Theme::business();
    let img = tick_ring(&theme, Canvas::FACE).unwrap();
    assert_eq!(img.dimensions(), (454, 454));
    // Major dot centered at (227, 22) with radius 3.
    assert_eq!(img.get_pixel(226, 22).0[3], 255);
    // Hour tick between radii R-30 and R-40 straight down from the dot.
    assert!(img.get_pixel(226, 35).0[3] > 0);
    assert_eq!(img.get_pixel(227, 227).0[3], 0);
}

#[test]
fn numerals_render_with_bitmap_fallback() {
    let theme = Theme::business();
    let mut text = TextEngine::new(FontConfig::bitmap_only());
    let img = numerals(&theme, Canvas::FACE, &mut text).unwrap();
    assert_eq!(img.dimensions(), (454, 454));
    assert!(img.pixels().any(|p| p.0[3] == 255));
    assert_eq!(img.get_pixel(227, 227).0[3], 0);
}

#[test]
fn roman_and_arabic_layers_differ() {
    let mut text = TextEngine::new(FontConfig::bitmap_only());
    let arabic = numerals(&Theme::business(), Canvas::FACE, &mut text).unwrap();
    let mut roman_theme = Theme::business();
    roman_theme.numerals = NumeralStyle::Roman;
    let roman = numerals(&roman_theme, Canvas::FACE, &mut text).unwrap();
    assert_ne!(arabic.as_raw(), roman.as_raw());
}

#[test]
fn inner_ring_is_a_faint_outline() {
    let theme = Theme::business();
    let img = inner_ring(&theme, Canvas::FACE).unwrap();
    assert_eq!(img.get_pixel(227, 227).0[3], 0);
    let max_alpha = img.pixels().map(|p| p.0[3]).max().unwrap();
    assert!(max_alpha > 0 && max_alpha <= 80);
}

#[test]
fn center_cap_has_three_bands() {
    let theme = Theme::business();
    let img = center_cap(&theme).unwrap();
    assert_eq!(img.dimensions(), (20, 20));
    let p = theme.palette;
    assert_eq!(img.get_pixel(10, 1).0, p.hand.to_array());
    assert_eq!(img.get_pixel(10, 4).0, p.hand_light.to_array());
    assert_eq!(img.get_pixel(10, 10).0, p.hand.to_array());
    assert_eq!(img.get_pixel(0, 0).0[3], 0);
}
