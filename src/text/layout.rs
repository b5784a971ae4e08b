use std::collections::HashMap;

use crate::foundation::color::Rgba8;
use crate::foundation::core::Point;
use crate::foundation::error::{DialError, DialResult};
use crate::raster::canvas::LayerCanvas;
use crate::text::bitmap::BitmapText;
use crate::text::resolve::{FontConfig, FontResolver, FontRole, ResolvedFont};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// Font role, size and color for one text run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub role: FontRole,
    pub size_px: f32,
    pub color: Rgba8,
}

impl TextStyle {
    pub fn new(role: FontRole, size_px: f32, color: Rgba8) -> Self {
        Self {
            role,
            size_px,
            color,
        }
    }
}

/// A single line of text ready to be measured and drawn.
pub enum ShapedText {
    Outline {
        layout: parley::Layout<TextBrushRgba8>,
        font: vello_cpu::peniko::FontData,
    },
    Bitmap(BitmapText),
}

impl ShapedText {
    /// Advance width of the line in pixels.
    pub fn width(&self) -> f64 {
        match self {
            Self::Outline { layout, .. } => f64::from(layout.width()),
            Self::Bitmap(t) => t.width(),
        }
    }

    /// Line box height in pixels.
    pub fn height(&self) -> f64 {
        match self {
            Self::Outline { layout, .. } => f64::from(layout.height()),
            Self::Bitmap(t) => t.height(),
        }
    }

    /// Draw with the top-left of the line box at `origin`.
    pub fn draw(&self, canvas: &mut LayerCanvas, origin: Point) {
        match self {
            Self::Outline { layout, font } => {
                let ctx = canvas.render_context();
                ctx.set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));
                for line in layout.lines() {
                    for item in line.items() {
                        let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                            continue;
                        };
                        let brush = run.style().brush;
                        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                            brush.r, brush.g, brush.b, brush.a,
                        ));
                        let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                            id: g.id,
                            x: g.x,
                            y: g.y,
                        });
                        ctx.glyph_run(font)
                            .font_size(run.run().font_size())
                            .fill_glyphs(glyphs);
                    }
                }
                ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            }
            Self::Bitmap(t) => t.draw(canvas, origin),
        }
    }

    /// Draw horizontally centered on `cx` with the line top at `y`.
    pub fn draw_centered(&self, canvas: &mut LayerCanvas, cx: f64, y: f64) {
        self.draw(canvas, Point::new(cx - self.width() / 2.0, y));
    }
}

struct RoleFace {
    font_ctx: parley::FontContext,
    family: String,
    font: vello_cpu::peniko::FontData,
}

/// Shapes text per [`FontRole`], registering each resolved font with Parley once.
pub struct TextEngine {
    resolver: FontResolver,
    faces: HashMap<FontRole, Option<RoleFace>>,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl TextEngine {
    pub fn new(cfg: FontConfig) -> Self {
        Self {
            resolver: FontResolver::new(cfg),
            faces: HashMap::new(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    pub fn resolver_mut(&mut self) -> &mut FontResolver {
        &mut self.resolver
    }

    /// Shape `text` as a single unwrapped line.
    pub fn shape(&mut self, text: &str, style: TextStyle) -> DialResult<ShapedText> {
        if !style.size_px.is_finite() || style.size_px <= 0.0 {
            return Err(DialError::validation(
                "text size_px must be finite and > 0",
            ));
        }
        self.ensure_face(style.role)?;

        let Self {
            faces, layout_ctx, ..
        } = self;
        let Some(Some(face)) = faces.get_mut(&style.role) else {
            return Ok(ShapedText::Bitmap(BitmapText::new(
                text,
                style.size_px,
                style.color,
            )));
        };

        let mut builder = layout_ctx.ranged_builder(&mut face.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(face.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(style.size_px));
        builder.push_default(parley::style::StyleProperty::Brush(TextBrushRgba8::from(
            style.color,
        )));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);

        Ok(ShapedText::Outline {
            layout,
            font: face.font.clone(),
        })
    }

    fn ensure_face(&mut self, role: FontRole) -> DialResult<()> {
        if self.faces.contains_key(&role) {
            return Ok(());
        }
        let face = match self.resolver.resolve(role)? {
            ResolvedFont::Bitmap => None,
            ResolvedFont::Outline(f) => {
                let mut font_ctx = parley::FontContext::default();
                let families = font_ctx
                    .collection
                    .register_fonts(parley::fontique::Blob::from(f.bytes.to_vec()), None);
                let family_id = face_family(&families, f.index).ok_or_else(|| {
                    DialError::font(format!(
                        "no font family registered for face {} of role '{}' from {:?}",
                        f.index,
                        role.name(),
                        f.origin
                    ))
                })?;
                let family = font_ctx
                    .collection
                    .family_name(family_id)
                    .ok_or_else(|| DialError::font("registered font family has no name"))?
                    .to_string();
                let font = vello_cpu::peniko::FontData::new(
                    vello_cpu::peniko::Blob::from(f.bytes.to_vec()),
                    f.index,
                );
                Some(RoleFace {
                    font_ctx,
                    family,
                    font,
                })
            }
        };
        self.faces.insert(role, face);
        Ok(())
    }
}

/// Family holding the face at `index` within a registered collection.
fn face_family(
    families: &[(parley::fontique::FamilyId, Vec<parley::fontique::FontInfo>)],
    index: u32,
) -> Option<parley::fontique::FamilyId> {
    families
        .iter()
        .find(|(_, fonts)| fonts.iter().any(|info| info.index() == index))
        .map(|(id, _)| *id)
}

#[cfg(test)]
#[path = "../../tests/unit/text/layout.rs"]
mod tests;
