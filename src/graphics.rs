use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, Rgb, RgbImage};

use crate::consts::{LINE_SPACING, REFERENCE_GLYPH};
use crate::font::Typeface;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Horizontal alignment of lines inside a multi-line block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// Blank white canvas.
pub fn blank(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, WHITE)
}

/// Promote a bilevel barcode bitmap to RGB.
pub fn to_rgb(img: GrayImage) -> RgbImage {
    DynamicImage::ImageLuma8(img).to_rgb8()
}

/// Nearest-neighbor resize to an exact size, so module edges stay sharp.
/// Returns a new raster; `img` is left untouched.
pub fn resize_nearest(img: &RgbImage, width: u32, height: u32) -> RgbImage {
    imageops::resize(img, width.max(1), height.max(1), FilterType::Nearest)
}

/// Scale both dimensions by an integer factor (1 just copies).
pub fn scale_by(img: &RgbImage, factor: u32) -> RgbImage {
    if factor <= 1 {
        return img.clone();
    }
    resize_nearest(img, img.width() * factor, img.height() * factor)
}

/// Scale uniformly so the height becomes exactly `height`.
pub fn scale_to_height(img: &RgbImage, height: u32) -> RgbImage {
    let factor = height as f32 / img.height() as f32;
    let width = (img.width() as f32 * factor) as u32;
    resize_nearest(img, width, height)
}

/// Copy `img` onto `canvas` with its top-left corner at `(x, y)`, clipping.
pub fn paste(canvas: &mut RgbImage, img: &RgbImage, x: i32, y: i32) {
    imageops::replace(canvas, img, x as i64, y as i64);
}

/// Rotate 90 degrees clockwise; width and height swap.
pub fn rotate90(img: &RgbImage) -> RgbImage {
    imageops::rotate90(img)
}

/// Draw newline-separated `text` as a block at `(x, y)`.
///
/// Lines advance by the reference glyph's ink height plus [`LINE_SPACING`].
/// With [`Align::Center`] each line is centered within `block_width`.
pub fn draw_multiline<F>(
    canvas: &mut RgbImage,
    font: &F,
    x: i32,
    y: i32,
    text: &str,
    align: Align,
    block_width: f32,
) where
    F: Typeface + ?Sized,
{
    let line_height = font.bbox(REFERENCE_GLYPH).bottom + LINE_SPACING;
    for (i, line) in text.split('\n').enumerate() {
        let offset = match align {
            Align::Left => 0,
            Align::Center => ((block_width - font.text_width(line)) / 2.0) as i32,
        };
        font.draw_text(canvas, x + offset, y + i as i32 * line_height, line, BLACK);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Bounding box of all non-white pixels as `(min_x, min_y, max_x, max_y)`, inclusive.
    pub fn ink_bounds(img: &RgbImage) -> Option<(u32, u32, u32, u32)> {
        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for (x, y, px) in img.enumerate_pixels() {
            if *px != WHITE {
                let b = bounds.get_or_insert((x, y, x, y));
                b.0 = b.0.min(x);
                b.1 = b.1.min(y);
                b.2 = b.2.max(x);
                b.3 = b.3.max(y);
            }
        }
        bounds
    }
}
