//! Label composition: barcode on the left, product name beside it, and the
//! amount/date metadata pinned to the corners.
//!
//! Fixed labels keep their stock size. Endless labels grow to fit the
//! content and come out rotated to the roll's feed direction.

use image::RgbImage;
use log::debug;

use crate::consts::{ENDLESS_MIN_TEXT_RATIO, FIXED_SCALE_LADDER};
use crate::error::Result;
use crate::font::Typeface;
use crate::geometry::LabelGeometry;
use crate::graphics::{blank, draw_multiline, paste, rotate90, scale_by, scale_to_height, Align, BLACK};
use crate::text::wrap_text;

/// What goes on the label besides the barcode.
#[derive(Clone, Copy, Debug, Default)]
pub struct LabelContent<'a> {
    pub text: &'a str,
    pub best_before_date: Option<&'a str>,
    pub purchased_date: Option<&'a str>,
    pub amount: Option<&'a str>,
    pub unit_name: Option<&'a str>,
}

impl LabelContent<'_> {
    /// `"{purchased} - {best_before}"`, or whichever one is set.
    pub fn date_display(&self) -> String {
        match (present(self.purchased_date), present(self.best_before_date)) {
            (Some(purchased), Some(best_before)) => format!("{purchased} - {best_before}"),
            (Some(date), None) | (None, Some(date)) => date.to_string(),
            (None, None) => String::new(),
        }
    }

    /// `"{amount} {unit}"`, or the bare amount. A unit alone shows nothing.
    pub fn amount_display(&self) -> String {
        match (present(self.amount), present(self.unit_name)) {
            (Some(amount), Some(unit)) => format!("{amount} {unit}"),
            (Some(amount), None) => amount.to_string(),
            (None, _) => String::new(),
        }
    }
}

fn present(field: Option<&str>) -> Option<&str> {
    field.filter(|s| !s.is_empty())
}

/// Faces and line budget for one render.
pub struct LabelFonts<'a, F: ?Sized> {
    /// Product name.
    pub text: &'a F,
    /// Amount and dates.
    pub meta: &'a F,
    pub max_lines: usize,
}

impl<F: ?Sized> Clone for LabelFonts<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: ?Sized> Copy for LabelFonts<'_, F> {}

/// Compose the label raster.
///
/// `barcode` is never modified; scaled copies are made as needed. Endless
/// labels are returned rotated 90° clockwise, fixed ones as laid out.
pub fn render_label<F>(
    geometry: LabelGeometry,
    content: &LabelContent<'_>,
    fonts: LabelFonts<'_, F>,
    barcode: &RgbImage,
) -> Result<RgbImage>
where
    F: Typeface + ?Sized,
{
    geometry.validate()?;
    let label = match geometry {
        LabelGeometry::Fixed { width, height } => render_fixed(width, height, content, fonts, barcode),
        LabelGeometry::Endless { fixed } => rotate90(&render_endless(fixed, content, fonts, barcode)),
    };
    Ok(label)
}

/// Largest ladder factor keeping the barcode shorter than the label and no
/// wider than half of it; 1 when none does.
pub fn fixed_scale_factor(barcode: (u32, u32), label: (u32, u32)) -> u32 {
    let (bw, bh) = barcode;
    let (width, height) = label;
    FIXED_SCALE_LADDER
        .into_iter()
        .find(|&s| bh * s < height && bw * s <= width / 2)
        .unwrap_or(1)
}

fn render_fixed<F>(
    width: u32,
    height: u32,
    content: &LabelContent<'_>,
    fonts: LabelFonts<'_, F>,
    barcode: &RgbImage,
) -> RgbImage
where
    F: Typeface + ?Sized,
{
    let factor = fixed_scale_factor(barcode.dimensions(), (width, height));
    debug!("fixed {width}x{height}: barcode scaled x{factor}");
    let barcode = scale_by(barcode, factor);

    let mut label = blank(width, height);
    let barcode_y = (height as i32 - barcode.height() as i32).div_euclid(2);
    paste(&mut label, &barcode, 0, barcode_y);

    let band = width.saturating_sub(barcode.width()) as f32;
    let (name, name_width) = wrap_text(content.text, fonts.text, band, fonts.max_lines);
    // centre on the first line; ellipsis lines may overflow the band but never reach the barcode
    let first_width = fonts.text.text_width(name.split('\n').next().unwrap_or(""));
    let name_x = (barcode.width() as f32 + (band - first_width) / 2.0).max(barcode.width() as f32);
    draw_multiline(&mut label, fonts.text, name_x as i32, 0, &name, Align::Center, name_width);

    let amount = content.amount_display();
    if !amount.is_empty() {
        draw_amount(&mut label, fonts.meta, &amount);
    }

    let date = content.date_display();
    if !date.is_empty() {
        let date_x = width as f32 - fonts.meta.text_width(&date);
        let date_y = height as i32 - fonts.meta.bbox(&date).bottom;
        fonts.meta.draw_text(&mut label, date_x as i32, date_y, &date, BLACK);
    }

    label
}

/// Canvas length of an endless label for an already scaled barcode:
/// barcode, a half-size gap, then the widest of name, date and amount.
/// Never less than the barcode plus 40% of the tape width.
pub fn endless_width<F>(barcode_width: u32, fixed: u32, content: &LabelContent<'_>, fonts: LabelFonts<'_, F>) -> u32
where
    F: Typeface + ?Sized,
{
    let name_width = drawn_width(fonts.text, content.text);
    let date = content.date_display();
    let amount = content.amount_display();

    let mut needed = name_width;
    if !date.is_empty() {
        needed = needed.max(fonts.meta.text_width(&date));
    }
    if !amount.is_empty() {
        needed = needed.max(fonts.meta.text_width(&amount));
    }

    let calculated = (barcode_width as f32 + gap(fonts.text) as f32 + needed) as u32;
    let minimum = barcode_width + (fixed as f32 * ENDLESS_MIN_TEXT_RATIO) as u32;
    debug!(
        "endless width: barcode {barcode_width}, name {name_width}, date {date:?}, amount {amount:?} -> {}",
        calculated.max(minimum)
    );
    calculated.max(minimum)
}

/// Width of `text` as drawn unwrapped, one line per `\n`.
fn drawn_width<F: Typeface + ?Sized>(font: &F, text: &str) -> f32 {
    text.split('\n').map(|line| font.text_width(line)).fold(0.0, f32::max)
}

fn gap<F: Typeface + ?Sized>(font: &F) -> i32 {
    (font.size() as i32) / 2
}

/// Unrotated endless layout, `length x fixed`.
fn render_endless<F>(fixed: u32, content: &LabelContent<'_>, fonts: LabelFonts<'_, F>, barcode: &RgbImage) -> RgbImage
where
    F: Typeface + ?Sized,
{
    let barcode = scale_to_height(barcode, fixed);
    let width = endless_width(barcode.width(), fixed, content, fonts);

    let mut label = blank(width, fixed);
    paste(&mut label, &barcode, 0, 0);

    let amount = content.amount_display();
    let date = content.date_display();

    let name_x = barcode.width() as i32 + gap(fonts.text);
    let name_y = endless_name_y(fixed, content.text, fonts, !amount.is_empty(), !date.is_empty());
    draw_multiline(&mut label, fonts.text, name_x, name_y, content.text, Align::Left, 0.0);

    if !amount.is_empty() {
        draw_amount(&mut label, fonts.meta, &amount);
    }

    if !date.is_empty() {
        let name_width = drawn_width(fonts.text, content.text);
        let date_width = fonts.meta.text_width(&date);
        // bracket the name: share its left edge, or its right edge when the name is wider
        let date_x = if date_width > name_width {
            name_x as f32
        } else {
            name_x as f32 + name_width - date_width
        };
        let date_y = fixed as i32 - fonts.meta.bbox(&date).bottom;
        fonts.meta.draw_text(&mut label, date_x as i32, date_y, &date, BLACK);
    }

    label
}

fn endless_name_y<F>(fixed: u32, text: &str, fonts: LabelFonts<'_, F>, has_amount: bool, has_date: bool) -> i32
where
    F: Typeface + ?Sized,
{
    let meta_size = fonts.meta.size() as i32;
    let bounds = fonts.text.bbox(text);
    match (has_amount, has_date) {
        (true, false) => {
            let available = fixed as i32 - meta_size;
            meta_size + (available - bounds.height()).div_euclid(2) - bounds.top
        }
        (false, false) => (fixed as i32 - bounds.height()).div_euclid(2) - bounds.top,
        (true, true) => meta_size,
        (false, true) => 0,
    }
}

/// Top-right corner.
fn draw_amount<F>(label: &mut RgbImage, font: &F, amount: &str)
where
    F: Typeface + ?Sized,
{
    let x = label.width() as f32 - font.text_width(amount);
    font.draw_text(label, x as i32, 0, amount, BLACK);
}
