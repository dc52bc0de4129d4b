//! Barcode bitmaps: Data Matrix with a QR fallback.
//!
//! Every encoder returns one pixel per module, black on white, with no quiet
//! zone. The layout engine does the scaling.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use image::{GrayImage, Luma, RgbImage};
use log::warn;
use qrcode::{Color, EcLevel, QrCode};
use rxing::common::BitMatrix;
use rxing::datamatrix::DataMatrixWriter;
use rxing::{BarcodeFormat, Writer};

use crate::error::{LabelError, Result};
use crate::graphics::to_rgb;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Symbology requested for the label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BarcodeKind {
    QrCode,
    #[default]
    DataMatrix,
}

impl FromStr for BarcodeKind {
    type Err = Infallible;

    /// Anything that is not `QRCode` means Data Matrix.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("qrcode") {
            Ok(BarcodeKind::QrCode)
        } else {
            Ok(BarcodeKind::DataMatrix)
        }
    }
}

impl fmt::Display for BarcodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BarcodeKind::QrCode => f.write_str("QRCode"),
            BarcodeKind::DataMatrix => f.write_str("DataMatrix"),
        }
    }
}

/// Turns a payload into a module bitmap.
pub trait BarcodeEncoder {
    fn encode(&self, payload: &str) -> Result<GrayImage>;
}

/// ECC200 Data Matrix, square or rectangular, whichever is smallest.
pub struct DataMatrixEncoder;

impl BarcodeEncoder for DataMatrixEncoder {
    fn encode(&self, payload: &str) -> Result<GrayImage> {
        let matrix = DataMatrixWriter
            .encode(payload, &BarcodeFormat::DATA_MATRIX, 0, 0)
            .map_err(|e| LabelError::Barcode(e.to_string()))?;
        Ok(bitmap_from_matrix(&matrix))
    }
}

/// Smallest QR version at error correction level L.
pub struct QrEncoder;

impl BarcodeEncoder for QrEncoder {
    fn encode(&self, payload: &str) -> Result<GrayImage> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::L)
            .map_err(|e| LabelError::Barcode(e.to_string()))?;
        let modules = code.width() as u32;
        let colors = code.to_colors();
        Ok(GrayImage::from_fn(modules, modules, |x, y| {
            match colors[(y * modules + x) as usize] {
                Color::Dark => DARK,
                Color::Light => LIGHT,
            }
        }))
    }
}

fn bitmap_from_matrix(matrix: &BitMatrix) -> GrayImage {
    GrayImage::from_fn(matrix.width(), matrix.height(), |x, y| {
        if matrix.get(x, y) {
            DARK
        } else {
            LIGHT
        }
    })
}

/// Encode with `primary`, falling back to QR of the same payload on any
/// failure. Only errors when the QR encoder rejects the payload too.
pub fn encode_with_fallback<E>(primary: &E, payload: &str) -> Result<RgbImage>
where
    E: BarcodeEncoder + ?Sized,
{
    match primary.encode(payload) {
        Ok(bitmap) => Ok(to_rgb(bitmap)),
        Err(err) => {
            warn!("barcode encoding failed ({err}), falling back to QR");
            create_qr_code(payload)
        }
    }
}

pub fn create_datamatrix(payload: &str) -> Result<RgbImage> {
    encode_with_fallback(&DataMatrixEncoder, payload)
}

pub fn create_qr_code(payload: &str) -> Result<RgbImage> {
    QrEncoder.encode(payload).map(to_rgb)
}

/// Barcode bitmap for `payload` in the requested symbology.
pub fn encode_barcode(payload: &str, kind: BarcodeKind) -> Result<RgbImage> {
    match kind {
        BarcodeKind::QrCode => create_qr_code(payload),
        BarcodeKind::DataMatrix => create_datamatrix(payload),
    }
}
