use super::*;
use crate::face::dial;
use crate::raster::encode::save_png;
use crate::text::resolve::FontConfig;

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

fn settings() -> PreviewSettings {
    PreviewSettings {
        matte: Rgba8::WHITE,
        thumb_size: 120,
    }
}

#[test]
fn readout_defaults_to_the_sample_data() {
    let r = SampleReadout::default();
    assert_eq!(r.locale, Locale::Zh);
    assert_eq!(r.time.hh_mm(), "10:27");
    assert_eq!(r.time.second(), 45);
    assert_eq!(r.steps_text(), "7651 步数");
    assert_eq!(r.distance_text(), "距离 3.66 km");
    assert_eq!(r.temperature, "24°C");

    let en = SampleReadout::new(Locale::En);
    assert_eq!(en.steps_text(), "7651 STEPS");
    assert_eq!(Locale::En.weekdays()[6], "SUN");
    assert_eq!(Locale::Zh.weekdays()[0], "周一");
}

#[test]
fn missing_layers_are_skipped() {
    let tmp = temp_dir("preview_empty");
    let layout = OutputLayout::under(&tmp);
    let mut text = TextEngine::new(FontConfig::bitmap_only());
    let out = compose_preview(
        &layout,
        &Theme::business(),
        &SampleReadout::new(Locale::En),
        &mut text,
        &settings(),
    )
    .unwrap();

    assert_eq!(out.full.dimensions(), (454, 454));
    assert_eq!(out.cover.dimensions(), (454, 454));
    assert_eq!(out.thumb.dimensions(), (120, 120));
    // Without a background the corners show the matte.
    assert_eq!(out.cover.get_pixel(0, 0).0, [255, 255, 255]);
    assert_eq!(out.full.get_pixel(0, 0).0[3], 0);
    // The hands still cover the pivot.
    assert_eq!(out.full.get_pixel(227, 227).0[3], 255);
}

#[test]
fn background_layer_is_composited_first() {
    let tmp = temp_dir("preview_bg");
    let layout = OutputLayout::under(&tmp);
    layout.ensure_dirs().unwrap();
    let theme = Theme::midnight();
    save_png(
        &layout.background("bg_main.png"),
        &dial::background(&theme, Canvas::FACE),
    )
    .unwrap();

    let mut text = TextEngine::new(FontConfig::bitmap_only());
    let out = compose_preview(
        &layout,
        &theme,
        &SampleReadout::new(Locale::En),
        &mut text,
        &settings(),
    )
    .unwrap();

    // A point on the dial away from text and hands carries the dark gradient.
    let px = out.full.get_pixel(120, 400).0;
    assert_eq!(px[3], 255);
    assert!(px[0] < 60);
    assert_eq!(out.cover.get_pixel(0, 0).0, [255, 255, 255]);

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn sample_time_moves_the_hands() {
    let tmp = temp_dir("preview_time");
    let layout = OutputLayout::under(&tmp);
    let theme = Theme::business();
    let mut text = TextEngine::new(FontConfig::bitmap_only());

    let a = compose_preview(
        &layout,
        &theme,
        &SampleReadout::new(Locale::En),
        &mut text,
        &settings(),
    )
    .unwrap();
    let b = compose_preview(
        &layout,
        &theme,
        &SampleReadout::new(Locale::En).with_time(ClockTime::new(3, 0, 0).unwrap()),
        &mut text,
        &settings(),
    )
    .unwrap();
    assert_ne!(a.full.as_raw(), b.full.as_raw());

    // At 3:00 the minute hand points straight up.
    assert_eq!(b.full.get_pixel(227, 150).0[3], 255);
}
