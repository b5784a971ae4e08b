//! Built-in 5×7 bitmap font used when no outline font can be found.
//!
//! Each glyph is seven rows of five bits, most significant bit leftmost. Latin letters are
//! case-folded to upper case; anything else without a glyph renders as a hollow box.

use crate::foundation::color::Rgba8;
use crate::foundation::core::{Point, Rect};
use crate::raster::canvas::LayerCanvas;

pub(crate) const GLYPH_COLS: u32 = 5;
pub(crate) const GLYPH_ROWS: u32 = 7;
/// Horizontal advance in cells (glyph plus one column of spacing).
pub(crate) const ADVANCE_COLS: u32 = GLYPH_COLS + 1;
/// Nominal line height in cells; font size maps to this many cells.
pub(crate) const LINE_ROWS: f64 = 8.0;

const MISSING: [u8; 7] = [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F];

pub(crate) fn glyph(ch: char) -> [u8; 7] {
    match ch.to_ascii_uppercase() {
        ' ' => [0; 7],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        ',' => [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '+' => [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00],
        '/' => [0x01, 0x01, 0x02, 0x04, 0x08, 0x10, 0x10],
        '|' => [0x04; 7],
        '%' => [0x18, 0x19, 0x02, 0x04, 0x08, 0x13, 0x03],
        '°' => [0x0C, 0x12, 0x12, 0x0C, 0x00, 0x00, 0x00],
        _ => MISSING,
    }
}

/// Text laid out with the bitmap font.
#[derive(Clone, Debug, PartialEq)]
pub struct BitmapText {
    chars: Vec<char>,
    cell: f64,
    color: Rgba8,
}

impl BitmapText {
    pub(crate) fn new(text: &str, size_px: f32, color: Rgba8) -> Self {
        Self {
            chars: text.chars().collect(),
            cell: f64::from(size_px) / LINE_ROWS,
            color,
        }
    }

    pub fn width(&self) -> f64 {
        let n = self.chars.len() as f64;
        if n == 0.0 {
            return 0.0;
        }
        (n * f64::from(ADVANCE_COLS) - 1.0) * self.cell
    }

    pub fn height(&self) -> f64 {
        if self.chars.is_empty() {
            return 0.0;
        }
        f64::from(GLYPH_ROWS) * self.cell
    }

    pub(crate) fn draw(&self, canvas: &mut LayerCanvas, origin: Point) {
        let s = self.cell;
        for (i, ch) in self.chars.iter().enumerate() {
            let x0 = origin.x + (i as f64) * f64::from(ADVANCE_COLS) * s;
            for (row, bits) in glyph(*ch).iter().enumerate() {
                let y = origin.y + (row as f64) * s;
                for col in 0..GLYPH_COLS {
                    if bits & (0x10 >> col) == 0 {
                        continue;
                    }
                    let x = x0 + f64::from(col) * s;
                    canvas.fill_rect(Rect::new(x, y, x + s, y + s), self.color);
                }
            }
        }
    }
}
