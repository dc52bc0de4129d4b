// Label layout tuning constants

/// Integer barcode scale factors tried on fixed labels, largest first.
pub const FIXED_SCALE_LADDER: [u32; 4] = [8, 6, 4, 2];

/// Extra pixels between wrapped lines (on top of the font's line height).
pub const LINE_SPACING: i32 = 4;

/// Appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Glyph used as the narrow-box width reference.
pub const REFERENCE_GLYPH: &str = "A";

/// Below this many reference glyphs the wrapper just truncates.
pub const MIN_WRAP_GLYPHS: f32 = 3.0;

/// Below this many reference glyphs a long word collapses to its first char.
pub const MIN_SPLIT_GLYPHS: f32 = 1.5;

/// Endless labels never get less text room than this share of the tape width.
pub const ENDLESS_MIN_TEXT_RATIO: f32 = 0.4;

/// Glyph coverage above this is inked; anything else stays paper white.
pub const INK_THRESHOLD: f32 = 0.5;

pub const DEFAULT_LABEL_SIZE: &str = "62x29";
pub const DEFAULT_NAME_FONT: &str = "DejaVuSans.ttf";
pub const DEFAULT_NAME_FONT_SIZE: f32 = 48.0;
pub const DEFAULT_NAME_MAX_LINES: usize = 4;
pub const DEFAULT_DUE_DATE_FONT_SIZE: f32 = 30.0;
pub const DEFAULT_FONT_DIR: &str = "assets";
