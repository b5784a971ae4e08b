use std::sync::Arc;

use image::RgbaImage;
use kurbo::Shape;

use crate::foundation::color::Rgba8;
use crate::foundation::core::{BezPath, Canvas, Point, Rect};
use crate::foundation::error::{DialError, DialResult};
use crate::foundation::math::premultiply_rgba8_in_place;
use crate::raster::composite::PremulFrame;

/// Flattening tolerance for curves, in pixels.
const TOLERANCE: f64 = 0.1;

/// Transparent drawing surface for one layer, rasterized with `vello_cpu`.
///
/// Geometry uses continuous pixel coordinates: the layer spans `[0, width] × [0, height]` and
/// pixel `(x, y)` covers the unit square whose top-left corner is `(x, y)`.
pub struct LayerCanvas {
    ctx: vello_cpu::RenderContext,
    canvas: Canvas,
}

impl LayerCanvas {
    /// Create an empty, fully transparent layer.
    pub fn new(canvas: Canvas) -> DialResult<Self> {
        let (w, h) = dims_u16(canvas)?;
        Ok(Self {
            ctx: vello_cpu::RenderContext::new(w, h),
            canvas,
        })
    }

    /// Layer dimensions.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Fill an arbitrary path with the non-zero rule.
    pub fn fill_path(&mut self, path: &BezPath, color: Rgba8) {
        if color.a == 0 || path.elements().is_empty() {
            return;
        }
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    /// Fill a closed polygon. Fewer than three points draws nothing.
    pub fn fill_polygon(&mut self, points: &[Point], color: Rgba8) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        if rest.len() < 2 {
            return;
        }
        let mut path = BezPath::new();
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
        path.close_path();
        self.fill_path(&path, color);
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        self.fill_path(&rect.to_path(TOLERANCE), color);
    }

    /// Fill the ellipse inscribed in `bounds`.
    pub fn fill_ellipse(&mut self, bounds: Rect, color: Rgba8) {
        self.fill_path(&kurbo::Ellipse::from_rect(bounds).to_path(TOLERANCE), color);
    }

    pub fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8) {
        if radius <= 0.0 {
            return;
        }
        self.fill_path(&kurbo::Circle::new(center, radius).to_path(TOLERANCE), color);
    }

    /// Stroke a path centered on its outline with butt caps.
    pub fn stroke_path(&mut self, path: &BezPath, width: f64, color: Rgba8) {
        if width <= 0.0 {
            return;
        }
        let style = kurbo::Stroke::new(width).with_caps(kurbo::Cap::Butt);
        let outline = kurbo::stroke(
            path.iter(),
            &style,
            &kurbo::StrokeOpts::default(),
            TOLERANCE,
        );
        self.fill_path(&outline, color);
    }

    pub fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Rgba8) {
        if from == to {
            return;
        }
        self.stroke_path(&kurbo::Line::new(from, to).to_path(TOLERANCE), width, color);
    }

    pub fn stroke_ellipse(&mut self, bounds: Rect, width: f64, color: Rgba8) {
        self.stroke_path(
            &kurbo::Ellipse::from_rect(bounds).to_path(TOLERANCE),
            width,
            color,
        );
    }

    pub fn stroke_rounded_rect(&mut self, rect: Rect, radius: f64, width: f64, color: Rgba8) {
        self.stroke_path(
            &kurbo::RoundedRect::from_rect(rect, radius).to_path(TOLERANCE),
            width,
            color,
        );
    }

    /// Alpha-composite a straight-alpha image with its top-left corner at `origin`.
    pub fn draw_image(&mut self, image: &RgbaImage, origin: Point) -> DialResult<()> {
        let (w, h) = image.dimensions();
        if w == 0 || h == 0 {
            return Ok(());
        }
        let mut bytes = image.as_raw().clone();
        premultiply_rgba8_in_place(&mut bytes);
        let pixmap = pixmap_from_premul_bytes(&bytes, w, h)?;
        let paint = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };

        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));
        self.ctx.set_paint(paint);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(w),
            f64::from(h),
        ));
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(())
    }

    pub(crate) fn render_context(&mut self) -> &mut vello_cpu::RenderContext {
        &mut self.ctx
    }

    /// Rasterize everything drawn so far into premultiplied RGBA8.
    pub fn finish_premul(mut self) -> DialResult<PremulFrame> {
        let (w, h) = dims_u16(self.canvas)?;
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        PremulFrame::new(self.canvas, pixmap.data_as_u8_slice().to_vec())
    }

    /// Rasterize into a straight-alpha RGBA image ready for PNG export.
    pub fn finish(self) -> DialResult<RgbaImage> {
        self.finish_premul()?.into_straight()
    }
}

fn dims_u16(canvas: Canvas) -> DialResult<(u16, u16)> {
    if canvas.width == 0 || canvas.height == 0 {
        return Err(DialError::validation("layer dimensions must be non-zero"));
    }
    let w: u16 = canvas
        .width
        .try_into()
        .map_err(|_| DialError::render("layer width exceeds u16"))?;
    let h: u16 = canvas
        .height
        .try_into()
        .map_err(|_| DialError::render("layer height exceeds u16"))?;
    Ok((w, h))
}

pub(crate) fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn pixmap_from_premul_bytes(bytes: &[u8], width: u32, height: u32) -> DialResult<vello_cpu::Pixmap> {
    let (w, h) = dims_u16(Canvas::new(width, height))?;
    if bytes.len() != Canvas::new(width, height).rgba_len() {
        return Err(DialError::render("pixmap byte len mismatch"));
    }
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]]))
        .collect::<Vec<_>>();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/canvas.rs"]
mod tests;
