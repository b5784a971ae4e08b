//! Weather glyphs: one hand-authored recipe per condition code, each on a 32×32 layer.

use image::RgbaImage;

use crate::face::icons::{pixel_box, px};
use crate::face::theme::WeatherPalette;
use crate::foundation::core::{Canvas, Point, polar_point};
use crate::foundation::error::{DialError, DialResult};
use crate::raster::canvas::LayerCanvas;

pub const GLYPH: Canvas = Canvas::square(32);

/// Drawing routine for one weather code.
pub type Recipe = fn(&mut LayerCanvas, &WeatherPalette);

/// Condition codes as used by the watch firmware's weather field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WeatherCode {
    Sunny = 0,
    Cloudy = 1,
    Overcast = 2,
    Rain = 3,
    Snow = 4,
    Fog = 5,
    Wind = 6,
    Haze = 7,
}

impl WeatherCode {
    pub const ALL: [Self; 8] = [
        Self::Sunny,
        Self::Cloudy,
        Self::Overcast,
        Self::Rain,
        Self::Snow,
        Self::Fog,
        Self::Wind,
        Self::Haze,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Cloudy => "cloudy",
            Self::Overcast => "overcast",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Fog => "fog",
            Self::Wind => "wind",
            Self::Haze => "haze",
        }
    }

    pub fn recipe(self) -> Recipe {
        match self {
            Self::Sunny => sunny,
            Self::Cloudy => cloudy,
            Self::Overcast => overcast,
            Self::Rain => rain,
            Self::Snow => snow,
            Self::Fog => fog,
            Self::Wind => wind,
            Self::Haze => haze,
        }
    }
}

impl TryFrom<u8> for WeatherCode {
    type Error = DialError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(v))
            .copied()
            .ok_or_else(|| DialError::validation(format!("weather code {v} is out of range 0..=7")))
    }
}

/// Render the glyph for `code`.
pub fn render_weather(code: WeatherCode, palette: &WeatherPalette) -> DialResult<RgbaImage> {
    let mut c = LayerCanvas::new(GLYPH)?;
    (code.recipe())(&mut c, palette);
    c.finish()
}

fn sunny(c: &mut LayerCanvas, p: &WeatherPalette) {
    c.fill_ellipse(pixel_box(8.0, 8.0, 24.0, 24.0), p.sun);
    let center = Point::new(16.5, 16.5);
    for ray in 0..8u32 {
        let a = f64::from(ray) * 45.0;
        c.stroke_line(
            polar_point(center, 10.0, a),
            polar_point(center, 14.0, a),
            2.0,
            p.sun,
        );
    }
}

fn cloudy(c: &mut LayerCanvas, p: &WeatherPalette) {
    c.fill_ellipse(pixel_box(4.0, 4.0, 16.0, 16.0), p.sun);
    c.fill_ellipse(pixel_box(10.0, 12.0, 22.0, 22.0), p.cloud);
    c.fill_ellipse(pixel_box(15.0, 9.0, 28.0, 22.0), p.cloud);
    c.fill_rect(pixel_box(12.0, 17.0, 27.0, 24.0), p.cloud);
}

fn overcast(c: &mut LayerCanvas, p: &WeatherPalette) {
    c.fill_ellipse(pixel_box(3.0, 8.0, 17.0, 20.0), p.cloud);
    c.fill_ellipse(pixel_box(12.0, 5.0, 28.0, 19.0), p.cloud);
    c.fill_rect(pixel_box(8.0, 14.0, 26.0, 22.0), p.cloud);
}

/// Small cloud shared by rain and snow.
fn low_cloud(c: &mut LayerCanvas, p: &WeatherPalette) {
    c.fill_ellipse(pixel_box(5.0, 3.0, 16.0, 13.0), p.cloud);
    c.fill_ellipse(pixel_box(12.0, 1.0, 26.0, 13.0), p.cloud);
    c.fill_rect(pixel_box(8.0, 8.0, 24.0, 15.0), p.cloud);
}

fn rain(c: &mut LayerCanvas, p: &WeatherPalette) {
    low_cloud(c, p);
    for x in [10.0, 16.0, 22.0] {
        c.stroke_line(px(x, 18.0), px(x - 2.0, 27.0), 2.0, p.rain);
    }
}

fn snow(c: &mut LayerCanvas, p: &WeatherPalette) {
    low_cloud(c, p);
    for x in [10.0, 17.0, 24.0] {
        c.fill_ellipse(pixel_box(x - 2.0, 20.0, x + 2.0, 24.0), p.snow);
    }
}

fn fog(c: &mut LayerCanvas, p: &WeatherPalette) {
    for y in [8.0, 15.0, 22.0] {
        c.stroke_line(px(5.0, y), px(27.0, y), 2.0, p.fog);
    }
}

fn wind(c: &mut LayerCanvas, p: &WeatherPalette) {
    for (y, len) in [(10.0, 22.0), (17.0, 18.0), (24.0, 20.0)] {
        c.stroke_line(px(5.0, y), px(5.0 + len, y), 2.0, p.fog);
    }
}

fn haze(c: &mut LayerCanvas, p: &WeatherPalette) {
    for y in [7.0, 14.0, 21.0] {
        c.stroke_line(px(4.0, y), px(28.0, y), 3.0, p.haze);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/face/weather.rs"]
mod tests;
