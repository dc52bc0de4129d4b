use std::fmt;

use crate::error::{LabelError, Result};

/// Printable area of a label stock, in printer dots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelGeometry {
    /// Pre-cut label with both dimensions known.
    Fixed { width: u32, height: u32 },
    /// Continuous roll: only the tape width is fixed, the length follows the content.
    Endless { fixed: u32 },
}

impl LabelGeometry {
    /// Resolve a `(primary, secondary)` dots pair; `secondary == 0` means endless.
    pub fn from_dots(primary: u32, secondary: u32) -> Result<Self> {
        let geometry = if secondary == 0 {
            LabelGeometry::Endless { fixed: primary }
        } else {
            LabelGeometry::Fixed {
                width: primary,
                height: secondary,
            }
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Fails when any known dimension is zero.
    pub fn validate(&self) -> Result<()> {
        let ok = match *self {
            LabelGeometry::Fixed { width, height } => width > 0 && height > 0,
            LabelGeometry::Endless { fixed } => fixed > 0,
        };
        if ok {
            Ok(())
        } else {
            let (primary, secondary) = self.dots();
            Err(LabelError::InvalidGeometry { primary, secondary })
        }
    }

    /// Back to the `(primary, secondary)` pair.
    pub fn dots(&self) -> (u32, u32) {
        match *self {
            LabelGeometry::Fixed { width, height } => (width, height),
            LabelGeometry::Endless { fixed } => (fixed, 0),
        }
    }

    pub fn is_endless(&self) -> bool {
        matches!(self, LabelGeometry::Endless { .. })
    }
}

impl fmt::Display for LabelGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (primary, secondary) = self.dots();
        write!(f, "{primary}x{secondary}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_secondary_is_endless() {
        let geometry = LabelGeometry::from_dots(106, 0).unwrap();
        assert_eq!(geometry, LabelGeometry::Endless { fixed: 106 });
        assert!(geometry.is_endless());
        assert_eq!(geometry.dots(), (106, 0));
    }

    #[test]
    fn nonzero_secondary_is_fixed() {
        let geometry = LabelGeometry::from_dots(696, 271).unwrap();
        assert_eq!(geometry, LabelGeometry::Fixed { width: 696, height: 271 });
        assert!(!geometry.is_endless());
        assert_eq!(geometry.to_string(), "696x271");
    }

    #[test]
    fn zero_primary_is_rejected() {
        assert!(matches!(
            LabelGeometry::from_dots(0, 0),
            Err(LabelError::InvalidGeometry { primary: 0, secondary: 0 })
        ));
        assert!(LabelGeometry::from_dots(0, 50).is_err());
        assert!(LabelGeometry::Fixed { width: 10, height: 0 }.validate().is_err());
    }
}
