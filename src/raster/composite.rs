use image::{RgbImage, RgbaImage};

use crate::foundation::color::Rgba8;
use crate::foundation::core::Canvas;
use crate::foundation::error::{DialError, DialResult};
use crate::foundation::math::{mul_div255_u8, unpremultiply_rgba8_in_place};

pub type PremulRgba8 = [u8; 4];

/// Rasterized layer in premultiplied RGBA8, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PremulFrame {
    canvas: Canvas,
    data: Vec<u8>,
}

impl PremulFrame {
    pub fn new(canvas: Canvas, data: Vec<u8>) -> DialResult<Self> {
        if data.len() != canvas.rgba_len() {
            return Err(DialError::render(format!(
                "frame expects {} bytes for {}x{}, got {}",
                canvas.rgba_len(),
                canvas.width,
                canvas.height,
                data.len()
            )));
        }
        Ok(Self { canvas, data })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Convert to a straight-alpha image for PNG export.
    pub fn into_straight(self) -> DialResult<RgbaImage> {
        let Self { canvas, mut data } = self;
        unpremultiply_rgba8_in_place(&mut data);
        RgbaImage::from_raw(canvas.width, canvas.height, data)
            .ok_or_else(|| DialError::render("straight image buffer size mismatch"))
    }
}

pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255_u8(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(sc, dc);
    }
    out
}

/// Composite a frame over an opaque matte and drop the alpha channel.
pub fn flatten_onto(frame: &PremulFrame, matte: Rgba8) -> DialResult<RgbImage> {
    let matte = matte.with_alpha(255).premultiply().to_array();
    let canvas = frame.canvas();
    let mut out = Vec::with_capacity((canvas.width as usize) * (canvas.height as usize) * 3);
    for px in frame.data().chunks_exact(4) {
        let c = over(matte, [px[0], px[1], px[2], px[3]], 1.0);
        out.extend_from_slice(&c[..3]);
    }
    RgbImage::from_raw(canvas.width, canvas.height, out)
        .ok_or_else(|| DialError::render("flattened image buffer size mismatch"))
}

/// Resample to an exact `side × side` square with a Lanczos filter.
pub fn thumbnail(img: &RgbImage, side: u32) -> DialResult<RgbImage> {
    if side == 0 {
        return Err(DialError::validation("thumbnail size must be > 0"));
    }
    Ok(image::imageops::resize(
        img,
        side,
        side,
        image::imageops::FilterType::Lanczos3,
    ))
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/composite.rs"]
mod tests;
