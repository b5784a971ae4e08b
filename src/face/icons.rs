use image::RgbaImage;

use crate::face::theme::Theme;
use crate::foundation::core::{Canvas, Point, Rect};
use crate::foundation::error::DialResult;
use crate::raster::canvas::LayerCanvas;
use crate::text::layout::{TextEngine, TextStyle};
use crate::text::resolve::FontRole;

pub const HEART_SIZE: u32 = 16;
pub const WEEK_LABEL: Canvas = Canvas::new(50, 20);

/// Rect covering the inclusive pixel box `x0..=x1, y0..=y1`.
pub(crate) fn pixel_box(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
    Rect::new(x0, y0, x1 + 1.0, y1 + 1.0)
}

/// Center of pixel `(x, y)`.
pub(crate) fn px(x: f64, y: f64) -> Point {
    Point::new(x + 0.5, y + 0.5)
}

/// Two lobes over a downward triangle.
pub fn heart(theme: &Theme) -> DialResult<RgbaImage> {
    let color = theme.palette.heart;
    let mut c = LayerCanvas::new(Canvas::square(HEART_SIZE))?;
    c.fill_ellipse(pixel_box(1.0, 2.0, 7.0, 8.0), color);
    c.fill_ellipse(pixel_box(7.0, 2.0, 13.0, 8.0), color);
    c.fill_polygon(&[px(2.0, 7.0), px(7.0, 13.0), px(12.0, 7.0)], color);
    c.finish()
}

/// One-pixel vertical rule on a 2×20 layer.
pub fn separator(theme: &Theme) -> DialResult<RgbaImage> {
    let mut c = LayerCanvas::new(Canvas::new(2, 20))?;
    c.fill_rect(pixel_box(1.0, 2.0, 1.0, 18.0), theme.palette.separator);
    c.finish()
}

/// A weekday caption centered on a 50×20 layer.
pub fn week_label(
    theme: &Theme,
    text: &mut TextEngine,
    label: &str,
    role: FontRole,
) -> DialResult<RgbaImage> {
    let mut c = LayerCanvas::new(WEEK_LABEL)?;
    let shaped = text.shape(label, TextStyle::new(role, 14.0, theme.palette.panel_text))?;
    let origin = Point::new(
        (f64::from(WEEK_LABEL.width) - shaped.width()) / 2.0,
        (f64::from(WEEK_LABEL.height) - shaped.height()) / 2.0,
    );
    shaped.draw(&mut c, origin);
    c.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/face/icons.rs"]
mod tests;
