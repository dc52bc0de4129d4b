use std::path::PathBuf;
use std::str::FromStr;

use crate::barcode::BarcodeKind;
use crate::consts::{
    DEFAULT_DUE_DATE_FONT_SIZE, DEFAULT_FONT_DIR, DEFAULT_LABEL_SIZE, DEFAULT_NAME_FONT, DEFAULT_NAME_FONT_SIZE,
    DEFAULT_NAME_MAX_LINES,
};
use crate::error::{LabelError, Result};
use crate::font::TrueTypeFont;

/// Service settings, read from the environment.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Label stock identifier, see [`crate::media`].
    pub label_size: String,
    pub barcode_format: BarcodeKind,
    pub font_dir: PathBuf,
    pub name_font: String,
    pub name_font_size: f32,
    pub name_max_lines: usize,
    pub due_date_font: String,
    pub due_date_font_size: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            label_size: DEFAULT_LABEL_SIZE.to_string(),
            barcode_format: BarcodeKind::default(),
            font_dir: PathBuf::from(DEFAULT_FONT_DIR),
            name_font: DEFAULT_NAME_FONT.to_string(),
            name_font_size: DEFAULT_NAME_FONT_SIZE,
            name_max_lines: DEFAULT_NAME_MAX_LINES,
            due_date_font: DEFAULT_NAME_FONT.to_string(),
            due_date_font_size: DEFAULT_DUE_DATE_FONT_SIZE,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<L>(lookup: L) -> Result<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();
        let name_font = lookup("NAME_FONT").unwrap_or(defaults.name_font);
        let settings = Settings {
            label_size: lookup("LABEL_SIZE").unwrap_or(defaults.label_size),
            barcode_format: lookup("BARCODE_FORMAT")
                .map(|v| v.parse().unwrap_or_default())
                .unwrap_or(defaults.barcode_format),
            font_dir: lookup("FONT_DIR").map(PathBuf::from).unwrap_or(defaults.font_dir),
            due_date_font: lookup("DUE_DATE_FONT").unwrap_or_else(|| name_font.clone()),
            name_font,
            name_font_size: parse_or(&lookup, "NAME_FONT_SIZE", defaults.name_font_size)?,
            name_max_lines: parse_or(&lookup, "NAME_MAX_LINES", defaults.name_max_lines)?,
            due_date_font_size: parse_or(&lookup, "DUE_DATE_FONT_SIZE", defaults.due_date_font_size)?,
        };

        if settings.name_max_lines == 0 {
            return Err(LabelError::InvalidSetting {
                key: "NAME_MAX_LINES",
                value: "0".into(),
            });
        }
        Ok(settings)
    }

    /// Load `(name font, due date font)`.
    pub fn load_fonts(&self) -> Result<(TrueTypeFont, TrueTypeFont)> {
        let name = TrueTypeFont::from_file(self.font_dir.join(&self.name_font), self.name_font_size)?;
        let due_date = TrueTypeFont::from_file(self.font_dir.join(&self.due_date_font), self.due_date_font_size)?;
        Ok((name, due_date))
    }
}

fn parse_or<L, T>(lookup: &L, key: &'static str, default: T) -> Result<T>
where
    L: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| LabelError::InvalidSetting { key, value }),
    }
}
