//! Tapered clock hands, drawn either onto the preview at an arbitrary angle or as upright
//! standalone sprites.

use image::RgbaImage;

use crate::face::theme::{Counterweight, HandSpec};
use crate::foundation::core::{Canvas, Point, Vec2, dial_direction};
use crate::foundation::error::DialResult;
use crate::raster::canvas::LayerCanvas;

/// Resolved geometry of one hand at one angle.
#[derive(Clone, Debug, PartialEq)]
pub struct HandOutline {
    /// Closed outline: 6 vertices, or 8 with a flare counterweight.
    pub polygon: Vec<Point>,
    /// Part of `polygon` behind the pivot, present when the hand has a back color.
    pub back: Option<Vec<Point>>,
    pub highlight: Option<(Point, Point)>,
    /// Center and radius of a disc counterweight.
    pub disc: Option<(Point, f64)>,
}

/// Compute the outline of `spec` rotated to `angle_deg` around `pivot`.
pub fn hand_outline(spec: &HandSpec, pivot: Point, angle_deg: f64) -> HandOutline {
    let dir = dial_direction(angle_deg);
    // Points to the hand's right when it is viewed tip-up.
    let perp = Vec2::new(-dir.y, dir.x);

    let tip = pivot + dir * spec.length;
    let base = pivot + dir * spec.base_offset;
    let tail = pivot - dir * spec.tail;

    let tip_l = tip - perp * spec.tip_half_width;
    let tip_r = tip + perp * spec.tip_half_width;
    let base_l = base - perp * spec.base_half_width;
    let base_r = base + perp * spec.base_half_width;

    let mut polygon = vec![tip_l, base_l];
    let mut disc = None;
    match spec.counterweight {
        Some(Counterweight::Flare { neck, half_width }) => {
            let neck_c = pivot - dir * neck;
            polygon.extend([
                neck_c - perp * spec.tail_half_width,
                tail - perp * half_width,
                tail + perp * half_width,
                neck_c + perp * spec.tail_half_width,
            ]);
        }
        Some(Counterweight::Disc { radius }) => {
            disc = Some((tail, radius));
            polygon.extend([
                tail - perp * spec.tail_half_width,
                tail + perp * spec.tail_half_width,
            ]);
        }
        None => {
            polygon.extend([
                tail - perp * spec.tail_half_width,
                tail + perp * spec.tail_half_width,
            ]);
        }
    }
    polygon.extend([base_r, tip_r]);

    let back = spec
        .back_color
        .map(|_| clip_behind(&polygon, pivot, dir))
        .filter(|p| p.len() >= 3);

    let highlight = spec.highlight.map(|_| {
        (
            pivot + dir * (spec.length * 0.15),
            pivot + dir * (spec.length * 0.85),
        )
    });

    HandOutline {
        polygon,
        back,
        highlight,
        disc,
    }
}

/// Sutherland-Hodgman clip of `poly` to the half-plane `(p - pivot) · dir <= 0`.
fn clip_behind(poly: &[Point], pivot: Point, dir: Vec2) -> Vec<Point> {
    let side = |p: Point| (p - pivot).dot(dir);
    let mut out = Vec::with_capacity(poly.len() + 2);
    for (i, &cur) in poly.iter().enumerate() {
        let prev = poly[(i + poly.len() - 1) % poly.len()];
        let (sc, sp) = (side(cur), side(prev));
        if (sc <= 0.0) != (sp <= 0.0) {
            let t = sp / (sp - sc);
            out.push(prev.lerp(cur, t));
        }
        if sc <= 0.0 {
            out.push(cur);
        }
    }
    out
}

/// Draw `spec` onto `canvas` at `angle_deg` around `pivot`.
pub fn draw_hand(canvas: &mut LayerCanvas, spec: &HandSpec, pivot: Point, angle_deg: f64) {
    let outline = hand_outline(spec, pivot, angle_deg);
    let back_color = spec.back_color.unwrap_or(spec.color);

    canvas.fill_polygon(&outline.polygon, spec.color);
    if let Some(back) = &outline.back {
        canvas.fill_polygon(back, back_color);
    }
    if let Some((center, radius)) = outline.disc {
        canvas.fill_circle(center, radius, back_color);
    }
    if let (Some((from, to)), Some(color)) = (outline.highlight, spec.highlight) {
        canvas.stroke_line(from, to, 1.0, color);
    }
}

/// The hand geometry used for the upright sprite: length reaches the top edge and the tail stays
/// inside the bottom edge.
pub fn sprite_spec(spec: &HandSpec) -> HandSpec {
    let s = spec.sprite;
    let disc = match spec.counterweight {
        Some(Counterweight::Disc { radius }) => radius,
        _ => 0.0,
    };
    let room = f64::from(s.height.saturating_sub(s.pivot_y + 1)) - disc;
    HandSpec {
        length: f64::from(s.pivot_y),
        tail: spec.tail.min(room.max(0.0)),
        ..spec.clone()
    }
}

/// The hand geometry drawn on the composited preview. Disc counterweights are sprite-only.
pub fn preview_spec(spec: &HandSpec) -> HandSpec {
    let counterweight = match spec.counterweight {
        Some(Counterweight::Disc { .. }) => None,
        other => other,
    };
    HandSpec {
        counterweight,
        ..spec.clone()
    }
}

/// Render the standalone upright sprite for `spec`.
pub fn render_hand_sprite(spec: &HandSpec) -> DialResult<RgbaImage> {
    let s = spec.sprite;
    let mut canvas = LayerCanvas::new(Canvas::new(s.width, s.height))?;
    let pivot = Point::new(f64::from(s.width) / 2.0, f64::from(s.pivot_y));
    draw_hand(&mut canvas, &sprite_spec(spec), pivot, 0.0);
    canvas.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/face/hands.rs"]
mod tests;
