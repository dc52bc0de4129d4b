use thiserror::Error;

/// All errors the label pipeline can surface to its caller
#[derive(Error, Debug)]
pub enum LabelError {
    #[error("font data could not be parsed")]
    /// [rusttype] rejected the font bytes
    Font,

    #[error("invalid font size {0}")]
    /// Font size must be a positive, finite number of pixels
    FontSize(f32),

    #[error("label geometry {primary}x{secondary} has no printable area")]
    /// The `(primary, secondary)` pair resolves to non-positive dimensions
    InvalidGeometry { primary: u32, secondary: u32 },

    #[error("unknown label size `{0}`")]
    /// No label stock is registered under this identifier
    UnknownMedia(String),

    #[error("invalid value `{value}` for setting {key}")]
    /// An environment setting could not be parsed
    InvalidSetting { key: &'static str, value: String },

    #[error("barcode could not be encoded: {0}")]
    /// Even the QR fallback rejected the payload (e.g. too long for any QR version)
    Barcode(String),

    #[error(transparent)]
    /// [image] failed to encode the raster
    Image(#[from] image::ImageError),

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LabelError>;
