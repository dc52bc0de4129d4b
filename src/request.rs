use std::io::Cursor;

use image::{ImageFormat, RgbImage};
use log::info;

use crate::barcode::{encode_barcode, BarcodeKind};
use crate::builder::{render_label, LabelContent, LabelFonts};
use crate::config::Settings;
use crate::error::Result;
use crate::font::{TrueTypeFont, Typeface};
use crate::geometry::LabelGeometry;
use crate::media::LabelMedia;

/// One label to print. Empty optional fields count as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelRequest {
    pub text: String,
    /// Barcode payload.
    pub barcode: String,
    pub barcode_kind: BarcodeKind,
    pub best_before_date: Option<String>,
    pub purchased_date: Option<String>,
    pub amount: Option<String>,
    pub unit_name: Option<String>,
}

impl LabelRequest {
    pub fn new(text: impl Into<String>, barcode: impl Into<String>) -> Self {
        LabelRequest {
            text: text.into(),
            barcode: barcode.into(),
            ..Default::default()
        }
    }

    pub fn barcode_kind(mut self, kind: BarcodeKind) -> Self {
        self.barcode_kind = kind;
        self
    }

    pub fn best_before(mut self, date: impl Into<String>) -> Self {
        self.best_before_date = Some(date.into());
        self
    }

    pub fn purchased(mut self, date: impl Into<String>) -> Self {
        self.purchased_date = Some(date.into());
        self
    }

    pub fn amount(mut self, amount: impl Into<String>, unit: Option<String>) -> Self {
        self.amount = Some(amount.into());
        self.unit_name = unit;
        self
    }

    pub fn content(&self) -> LabelContent<'_> {
        LabelContent {
            text: &self.text,
            best_before_date: non_empty(&self.best_before_date),
            purchased_date: non_empty(&self.purchased_date),
            amount: non_empty(&self.amount),
            unit_name: non_empty(&self.unit_name),
        }
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Renders requests for one label stock with a fixed pair of fonts.
///
/// Holds no per-request state, so one instance can serve concurrent
/// renders from several threads.
pub struct Labeler<F = TrueTypeFont> {
    label_id: Option<&'static str>,
    geometry: LabelGeometry,
    text_font: F,
    meta_font: F,
    max_lines: usize,
}

impl<F: Typeface> Labeler<F> {
    pub fn new(geometry: LabelGeometry, text_font: F, meta_font: F, max_lines: usize) -> Result<Self> {
        geometry.validate()?;
        Ok(Labeler {
            label_id: None,
            geometry,
            text_font,
            meta_font,
            max_lines: max_lines.max(1),
        })
    }

    pub fn geometry(&self) -> LabelGeometry {
        self.geometry
    }

    /// `Label 62x29, Size 696x271`
    pub fn describe(&self) -> String {
        format!("Label {}, Size {}", self.label_id.unwrap_or("custom"), self.geometry)
    }

    /// Encode the barcode and lay out the label.
    pub fn render(&self, request: &LabelRequest) -> Result<RgbImage> {
        let barcode = encode_barcode(&request.barcode, request.barcode_kind)?;
        let fonts = LabelFonts {
            text: &self.text_font,
            meta: &self.meta_font,
            max_lines: self.max_lines,
        };
        let label = render_label(self.geometry, &request.content(), fonts, &barcode)?;
        info!(
            "rendered {:?} on {}: {}x{}",
            request.text,
            self.geometry,
            label.width(),
            label.height()
        );
        Ok(label)
    }

    /// Render and serialize as PNG.
    pub fn render_png(&self, request: &LabelRequest) -> Result<Vec<u8>> {
        let label = self.render(request)?;
        let mut buf = Cursor::new(Vec::new());
        label.write_to(&mut buf, ImageFormat::Png)?;
        Ok(buf.into_inner())
    }
}

impl Labeler<TrueTypeFont> {
    /// Resolve the label stock and load both fonts.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let media = LabelMedia::lookup(&settings.label_size)?;
        let (text_font, meta_font) = settings.load_fonts()?;
        let mut labeler = Labeler::new(media.geometry()?, text_font, meta_font, settings.name_max_lines)?;
        labeler.label_id = Some(media.identifier);
        Ok(labeler)
    }
}
