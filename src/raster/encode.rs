use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Context as _;
use image::{RgbImage, RgbaImage};

use crate::foundation::error::{DialError, DialResult};

/// Write a straight-alpha RGBA PNG, replacing any existing file.
pub fn save_png(path: &Path, img: &RgbaImage) -> DialResult<()> {
    image::save_buffer_with_format(
        path,
        img.as_raw(),
        img.width(),
        img.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// Write an opaque baseline JPEG at `quality` (1..=100).
pub fn save_jpeg(path: &Path, img: &RgbImage, quality: u8) -> DialResult<()> {
    if !(1..=100).contains(&quality) {
        return Err(DialError::validation(format!(
            "jpeg quality {quality} must be within 1..=100"
        )));
    }
    let f = File::create(path).with_context(|| format!("create jpeg '{}'", path.display()))?;
    let mut w = BufWriter::new(f);
    let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut w, quality);
    encoder
        .encode_image(img)
        .with_context(|| format!("encode jpeg '{}'", path.display()))?;
    Ok(())
}

/// Load a previously written layer, or `None` when the file does not exist.
pub fn load_optional_rgba(path: &Path) -> DialResult<Option<RgbaImage>> {
    if !path.is_file() {
        return Ok(None);
    }
    let img = image::open(path).with_context(|| format!("decode layer '{}'", path.display()))?;
    Ok(Some(img.to_rgba8()))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/encode.rs"]
mod tests;
