use std::path::Path;

use image::{Rgb, RgbImage};
use rusttype::{point, Font, PositionedGlyph, Scale};

use crate::consts::INK_THRESHOLD;
use crate::error::{LabelError, Result};

/// Ink box of a string relative to its drawing origin.
///
/// The origin is the top-left corner of the line: `x = 0` is the pen start,
/// `y = 0` is the ascender line (the baseline sits at `y = ascent`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// A sized face the layout engine can measure with and draw in.
///
/// Implementations are shared read-only between concurrent renders.
pub trait Typeface: Send + Sync {
    /// Advance width of `text` in pixels.
    fn text_width(&self, text: &str) -> f32;

    /// Ink bounding box of `text`, see [`TextBounds`].
    fn bbox(&self, text: &str) -> TextBounds;

    /// Nominal pixel size, used for gaps and bands.
    fn size(&self) -> f32;

    /// Draw a single line of `text` with its origin at `(x, y)`. Pixels
    /// falling outside the canvas are dropped.
    fn draw_text(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, colour: Rgb<u8>);
}

/// TrueType face at a fixed pixel size, rendered bilevel.
pub struct TrueTypeFont {
    font: Font<'static>,
    size: f32,
}

impl TrueTypeFont {
    /// Parse a TTF/OTF font from raw bytes.
    pub fn from_bytes(bytes: Vec<u8>, size: f32) -> Result<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(LabelError::FontSize(size));
        }
        let font = Font::try_from_vec(bytes).ok_or(LabelError::Font)?;
        Ok(TrueTypeFont { font, size })
    }

    pub fn from_file(path: impl AsRef<Path>, size: f32) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(bytes, size)
    }

    fn scale(&self) -> Scale {
        Scale::uniform(self.size)
    }

    fn ascent(&self) -> f32 {
        self.font.v_metrics(self.scale()).ascent.ceil()
    }

    fn layout(&self, text: &str, x: f32, y: f32) -> Vec<PositionedGlyph<'_>> {
        let baseline = y + self.ascent();
        self.font
            .layout(text, self.scale(), point(x, baseline))
            .collect()
    }
}

impl Typeface for TrueTypeFont {
    fn text_width(&self, text: &str) -> f32 {
        self.layout(text, 0.0, 0.0)
            .last()
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0)
    }

    fn bbox(&self, text: &str) -> TextBounds {
        let mut bounds: Option<TextBounds> = None;
        for g in self.layout(text, 0.0, 0.0) {
            if let Some(bb) = g.pixel_bounding_box() {
                let b = bounds.get_or_insert(TextBounds {
                    left: bb.min.x,
                    top: bb.min.y,
                    right: bb.max.x,
                    bottom: bb.max.y,
                });
                b.left = b.left.min(bb.min.x);
                b.top = b.top.min(bb.min.y);
                b.right = b.right.max(bb.max.x);
                b.bottom = b.bottom.max(bb.max.y);
            }
        }
        bounds.unwrap_or_default()
    }

    fn size(&self) -> f32 {
        self.size
    }

    fn draw_text(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, colour: Rgb<u8>) {
        let (w, h) = (canvas.width() as i32, canvas.height() as i32);
        for g in self.layout(text, x as f32, y as f32) {
            if let Some(bb) = g.pixel_bounding_box() {
                // hard threshold, no grey fringe
                g.draw(|gx, gy, v| {
                    if v > INK_THRESHOLD {
                        let px = bb.min.x + gx as i32;
                        let py = bb.min.y + gy as i32;
                        if px >= 0 && py >= 0 && px < w && py < h {
                            canvas.put_pixel(px as u32, py as u32, colour);
                        }
                    }
                });
            }
        }
    }
}
