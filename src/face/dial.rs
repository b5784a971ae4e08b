//! Static dial layers: background gradient, tick ring, numerals, inner ring and center cap.

use image::{Rgba, RgbaImage};

use crate::face::theme::Theme;
use crate::foundation::core::{Canvas, Point, Rect, polar_point};
use crate::foundation::error::DialResult;
use crate::raster::canvas::LayerCanvas;
use crate::text::layout::{TextEngine, TextStyle};
use crate::text::resolve::FontRole;

/// Radial gradient disc: `bg_center` at the middle easing to `bg_edge` at the rim as `t²`.
///
/// Pixels outside the disc are transparent; the rim is antialiased over one pixel.
pub fn background(theme: &Theme, canvas: Canvas) -> RgbaImage {
    let c = canvas.center();
    let r = canvas.radius();
    let (inner, outer) = (theme.palette.bg_center, theme.palette.bg_edge);
    RgbaImage::from_fn(canvas.width, canvas.height, |x, y| {
        let d = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5).distance(c);
        let coverage = (r - d + 0.5).clamp(0.0, 1.0);
        if coverage <= 0.0 || r <= 0.0 {
            return Rgba([0, 0, 0, 0]);
        }
        let t = (d / r).min(1.0);
        let color = inner.lerp(outer, t * t);
        let a = (f64::from(color.a) * coverage).round() as u8;
        Rgba([color.r, color.g, color.b, a])
    })
}

/// Sixty dots on a ring; every fifth is larger and carries a short inward tick.
pub fn tick_ring(theme: &Theme, canvas: Canvas) -> DialResult<RgbaImage> {
    let g = &theme.dial;
    let p = &theme.palette;
    let c = canvas.center();
    let ring = canvas.radius() - g.dot_inset;

    let mut layer = LayerCanvas::new(canvas)?;
    for i in 0..60u32 {
        let angle = f64::from(i) * 6.0;
        let dot = polar_point(c, ring, angle);
        if i % 5 == 0 {
            layer.fill_circle(dot, g.major_dot_radius, p.dot);
            let from = polar_point(c, ring - g.tick_gap, angle);
            let to = polar_point(c, ring - g.tick_gap - g.tick_length, angle);
            layer.stroke_line(from, to, g.tick_width, p.tick);
        } else {
            layer.fill_circle(dot, g.minor_dot_radius, p.dot);
        }
    }
    layer.finish()
}

/// Hour labels 1..=12 centered on the numeral ring, in the theme's numeral style.
pub fn numerals(theme: &Theme, canvas: Canvas, text: &mut TextEngine) -> DialResult<RgbaImage> {
    let g = &theme.dial;
    let c = canvas.center();
    let ring = canvas.radius() - g.numeral_inset;
    let style = TextStyle::new(FontRole::SansBold, g.numeral_size, theme.palette.numeral);

    let mut layer = LayerCanvas::new(canvas)?;
    for hour in 1..=12u8 {
        let at = polar_point(c, ring, f64::from(hour) * 30.0);
        let label = text.shape(&theme.numerals.label(hour), style)?;
        let origin = Point::new(
            at.x - label.width() / 2.0,
            at.y - label.height() / 2.0 + g.numeral_nudge,
        );
        label.draw(&mut layer, origin);
    }
    layer.finish()
}

/// Thin decorative circle inside the numeral ring.
pub fn inner_ring(theme: &Theme, canvas: Canvas) -> DialResult<RgbaImage> {
    let c = canvas.center();
    let r = canvas.radius() - theme.dial.inner_ring_inset;
    let mut layer = LayerCanvas::new(canvas)?;
    layer.stroke_ellipse(
        Rect::new(c.x - r, c.y - r, c.x + r, c.y + r),
        theme.dial.inner_ring_width,
        theme.palette.inner_ring,
    );
    layer.finish()
}

/// Three concentric discs covering the hand pivot: dark, highlight, dark.
pub fn center_cap(theme: &Theme) -> DialResult<RgbaImage> {
    let canvas = Canvas::square(theme.dial.cap_size);
    let c = canvas.center();
    let r = canvas.radius();
    let p = &theme.palette;
    let mut layer = LayerCanvas::new(canvas)?;
    layer.fill_circle(c, r, p.hand);
    layer.fill_circle(c, (r - 3.0).max(0.0), p.hand_light);
    layer.fill_circle(c, (r - 6.0).max(0.0), p.hand);
    layer.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/face/dial.rs"]
mod tests;
