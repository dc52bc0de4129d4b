//! Printable grocery label renderer for Brother QL label printers.
//! - Data Matrix barcodes, falling back to QR when encoding fails
//! - Greedy word wrap with long-word splitting and ellipsis truncation
//! - Fixed (die-cut) labels keep their stock size
//! - Endless labels grow to fit the content and come out rotated for the roll feed
//!
//! ```no_run
//! use grocy_label_printer::{LabelRequest, Labeler, Settings};
//!
//! let settings = Settings::from_env()?;
//! let labeler = Labeler::from_settings(&settings)?;
//! let png = labeler.render_png(&LabelRequest::new("Milk", "grcy:p:42").best_before("2025-03-01"))?;
//! std::fs::write("label.png", png)?;
//! # Ok::<(), grocy_label_printer::LabelError>(())
//! ```

pub mod barcode;
pub mod builder;
pub mod config;
pub mod consts;
mod error;
pub mod font;
pub mod geometry;
pub mod graphics;
pub mod media;
pub mod request;
pub mod text;

pub use barcode::{encode_barcode, BarcodeKind};
pub use builder::{render_label, LabelContent, LabelFonts};
pub use config::Settings;
pub use error::{LabelError, Result};
pub use font::{TextBounds, TrueTypeFont, Typeface};
pub use geometry::LabelGeometry;
pub use media::LabelMedia;
pub use request::{LabelRequest, Labeler};
pub use text::wrap_text;
