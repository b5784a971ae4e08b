//! Composited preview: stacked dial layers, sample readout text, hands at the sample time.

use image::{RgbImage, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::face::hands::{draw_hand, preview_spec};
use crate::face::paths::OutputLayout;
use crate::face::theme::Theme;
use crate::foundation::color::Rgba8;
use crate::foundation::core::{Canvas, ClockTime, Point, Rect};
use crate::foundation::error::DialResult;
use crate::raster::canvas::LayerCanvas;
use crate::raster::composite::{flatten_onto, thumbnail};
use crate::raster::encode::load_optional_rgba;
use crate::text::layout::{TextEngine, TextStyle};
use crate::text::resolve::FontRole;

/// Language of the sample readout and weekday labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    Zh,
    En,
}

impl Locale {
    /// Role used for captions that carry localized words.
    pub fn caption_role(self) -> FontRole {
        match self {
            Self::Zh => FontRole::Cjk,
            Self::En => FontRole::Sans,
        }
    }

    /// Weekday labels, Monday first.
    pub fn weekdays(self) -> [&'static str; 7] {
        match self {
            Self::Zh => ["周一", "周二", "周三", "周四", "周五", "周六", "周日"],
            Self::En => ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"],
        }
    }
}

/// Literal data shown on the preview.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleReadout {
    pub locale: Locale,
    pub time: ClockTime,
    pub weather_caption: String,
    pub temperature: String,
    pub temp_range: String,
    pub lunar_date: String,
    pub double_hour: String,
    pub weekday: String,
    pub date: String,
    pub steps: u32,
    pub distance_km: f64,
    pub heart_rate: u32,
}

impl SampleReadout {
    pub fn new(locale: Locale) -> Self {
        let time = ClockTime::SAMPLE;
        let common = |weather: &str, lunar: &str, double_hour: &str, weekday: &str| Self {
            locale,
            time,
            weather_caption: weather.to_string(),
            temperature: "24°C".to_string(),
            temp_range: "-10/36".to_string(),
            lunar_date: lunar.to_string(),
            double_hour: double_hour.to_string(),
            weekday: weekday.to_string(),
            date: "10-18".to_string(),
            steps: 7651,
            distance_km: 3.66,
            heart_rate: 103,
        };
        match locale {
            Locale::Zh => common("晴雾", "十月十八", "巳时", "星期五"),
            Locale::En => common("SUN/FOG", "10TH MO 18", "SI HOUR", "FRIDAY"),
        }
    }

    pub fn with_time(mut self, time: ClockTime) -> Self {
        self.time = time;
        self
    }

    pub fn steps_text(&self) -> String {
        match self.locale {
            Locale::Zh => format!("{} 步数", self.steps),
            Locale::En => format!("{} STEPS", self.steps),
        }
    }

    pub fn distance_text(&self) -> String {
        match self.locale {
            Locale::Zh => format!("距离 {:.2} km", self.distance_km),
            Locale::En => format!("DIST {:.2} KM", self.distance_km),
        }
    }
}

impl Default for SampleReadout {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

/// The three preview renditions.
pub struct PreviewImages {
    /// Unflattened RGBA composite.
    pub full: RgbaImage,
    /// Composite flattened onto the matte.
    pub cover: RgbImage,
    pub thumb: RgbImage,
}

/// Preview composition inputs that are not layers on disk.
pub struct PreviewSettings {
    pub matte: Rgba8,
    pub thumb_size: u32,
}

const WEATHER_Y: f64 = 128.0;
const PANEL_Y: f64 = 210.0;
const PANEL_W: f64 = 108.0;
const PANEL_H: f64 = 44.0;
const LEFT_PANEL_X: f64 = 82.0;
const RIGHT_PANEL_X: f64 = 264.0;
const TIME_Y: f64 = 278.0;
const DATA_Y: f64 = 320.0;
const HEART_Y: f64 = 345.0;

/// Compose the preview from the layers under `layout`, skipping any that are missing.
#[tracing::instrument(skip_all, fields(theme = %theme.name))]
pub fn compose_preview(
    layout: &OutputLayout,
    theme: &Theme,
    readout: &SampleReadout,
    text: &mut TextEngine,
    settings: &PreviewSettings,
) -> DialResult<PreviewImages> {
    let canvas = Canvas::FACE;
    let c = canvas.center();
    let mut face = LayerCanvas::new(canvas)?;

    for file in [
        "bg_main.png",
        "tick_ring.png",
        theme.numerals.file_name(),
        "inner_ring.png",
    ] {
        paste_optional(&mut face, &layout.background(file), Point::ZERO)?;
    }

    draw_readout(&mut face, theme, readout, text)?;

    let heart = Point::new(c.x - 20.0, HEART_Y);
    paste_optional(&mut face, &layout.icon("ic_heart.png"), heart)?;
    let hr = text.shape(
        &readout.heart_rate.to_string(),
        TextStyle::new(FontRole::SansBold, 15.0, theme.palette.heart),
    )?;
    hr.draw(&mut face, Point::new(c.x - 2.0, HEART_Y));

    let t = readout.time;
    for (spec, angle) in [
        (&theme.hour_hand, t.hour_angle()),
        (&theme.minute_hand, t.minute_angle()),
        (&theme.second_hand, t.second_angle()),
    ] {
        draw_hand(&mut face, &preview_spec(spec), c, angle);
    }

    let half_cap = f64::from(theme.dial.cap_size / 2);
    paste_optional(
        &mut face,
        &layout.background("center_cap.png"),
        Point::new(c.x - half_cap, c.y - half_cap),
    )?;

    let frame = face.finish_premul()?;
    let cover = flatten_onto(&frame, settings.matte)?;
    let thumb = thumbnail(&cover, settings.thumb_size)?;
    let full = frame.into_straight()?;
    Ok(PreviewImages { full, cover, thumb })
}

fn paste_optional(face: &mut LayerCanvas, path: &std::path::Path, at: Point) -> DialResult<()> {
    match load_optional_rgba(path)? {
        Some(layer) => face.draw_image(&layer, at),
        None => {
            tracing::debug!(path = %path.display(), "optional layer missing, skipped");
            Ok(())
        }
    }
}

fn draw_readout(
    face: &mut LayerCanvas,
    theme: &Theme,
    r: &SampleReadout,
    text: &mut TextEngine,
) -> DialResult<()> {
    let p = &theme.palette;
    let cx = face.canvas().center().x;
    let caption = r.locale.caption_role();

    // Weather block: caption | temperature over range.
    text.shape(&r.weather_caption, TextStyle::new(caption, 13.0, p.text_gray))?
        .draw_centered(face, cx - 30.0, WEATHER_Y);
    face.stroke_line(
        Point::new(cx - 7.5, WEATHER_Y + 2.0),
        Point::new(cx - 7.5, WEATHER_Y + 31.0),
        1.0,
        p.separator,
    );
    text.shape(&r.temperature, TextStyle::new(FontRole::SansBold, 15.0, p.text_dark))?
        .draw(face, Point::new(cx + 2.0, WEATHER_Y));
    text.shape(&r.temp_range, TextStyle::new(FontRole::Sans, 14.0, p.text_gray))?
        .draw(face, Point::new(cx + 2.0, WEATHER_Y + 17.0));

    // Side panels: a localized caption over a rule over a detail line.
    let panels = [
        (
            LEFT_PANEL_X,
            &r.lunar_date,
            &r.double_hour,
            TextStyle::new(caption, 13.0, p.text_gray),
        ),
        (
            RIGHT_PANEL_X,
            &r.weekday,
            &r.date,
            TextStyle::new(FontRole::Sans, 16.0, p.text_gray),
        ),
    ];
    for (x, top, bottom, bottom_style) in panels {
        let frame = Rect::new(x + 0.5, PANEL_Y + 0.5, x + PANEL_W + 0.5, PANEL_Y + PANEL_H + 0.5);
        face.stroke_rounded_rect(frame, 4.0, 1.0, p.panel_border);
        let mid_x = x + PANEL_W / 2.0;
        text.shape(top, TextStyle::new(caption, 15.0, p.panel_text))?
            .draw_centered(face, mid_x, PANEL_Y + 4.0);
        let rule_y = PANEL_Y + PANEL_H / 2.0 + 0.5;
        face.stroke_line(
            Point::new(x + 10.0, rule_y),
            Point::new(x + PANEL_W - 10.0, rule_y),
            1.0,
            p.panel_rule,
        );
        text.shape(bottom, bottom_style)?
            .draw_centered(face, mid_x, PANEL_Y + 24.0);
    }

    // Digital time.
    text.shape(&r.time.hh_mm(), TextStyle::new(FontRole::SansBold, 32.0, p.text_dark))?
        .draw_centered(face, cx, TIME_Y);

    // Data row, centered as a group.
    let steps = text.shape(&r.steps_text(), TextStyle::new(caption, 13.0, p.text_dark))?;
    let sep = text.shape(" | ", TextStyle::new(FontRole::Sans, 13.0, p.separator))?;
    let dist = text.shape(&r.distance_text(), TextStyle::new(caption, 13.0, p.text_dark))?;
    let mut x = cx - (steps.width() + sep.width() + dist.width()) / 2.0;
    for part in [&steps, &sep, &dist] {
        part.draw(face, Point::new(x, DATA_Y));
        x += part.width();
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/face/preview.rs"]
mod tests;
