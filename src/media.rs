//! Brother QL label stock catalogue.
//!
//! Maps stock identifiers (as printed on the roll, e.g. `62x29` or `62`) to
//! their printable area in dots at 300 dpi. Continuous rolls report a zero
//! length.

use crate::error::{LabelError, Result};
use crate::geometry::LabelGeometry;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Endless,
    DieCut,
    RoundDieCut,
}

/// One roll type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelMedia {
    pub identifier: &'static str,
    /// Printable `(primary, secondary)` dots; `secondary == 0` on continuous rolls.
    pub dots_printable: (u32, u32),
    pub kind: MediaKind,
    /// Black/red stock, needs two-colour raster encoding downstream.
    pub two_color: bool,
}

const fn media(identifier: &'static str, dots: (u32, u32), kind: MediaKind) -> LabelMedia {
    LabelMedia {
        identifier,
        dots_printable: dots,
        kind,
        two_color: false,
    }
}

static ALL_MEDIA: &[LabelMedia] = &[
    media("12", (106, 0), MediaKind::Endless),
    media("29", (306, 0), MediaKind::Endless),
    media("38", (413, 0), MediaKind::Endless),
    media("50", (554, 0), MediaKind::Endless),
    media("54", (590, 0), MediaKind::Endless),
    media("62", (696, 0), MediaKind::Endless),
    LabelMedia {
        identifier: "62red",
        dots_printable: (696, 0),
        kind: MediaKind::Endless,
        two_color: true,
    },
    media("102", (1164, 0), MediaKind::Endless),
    media("17x54", (165, 566), MediaKind::DieCut),
    media("17x87", (165, 956), MediaKind::DieCut),
    media("23x23", (202, 202), MediaKind::DieCut),
    media("29x42", (306, 425), MediaKind::DieCut),
    media("29x90", (306, 991), MediaKind::DieCut),
    media("39x90", (413, 991), MediaKind::DieCut),
    media("39x48", (425, 495), MediaKind::DieCut),
    media("52x29", (578, 271), MediaKind::DieCut),
    media("62x29", (696, 271), MediaKind::DieCut),
    media("62x100", (696, 1109), MediaKind::DieCut),
    media("102x51", (1164, 526), MediaKind::DieCut),
    media("102x152", (1164, 1660), MediaKind::DieCut),
    media("d12", (94, 94), MediaKind::RoundDieCut),
    media("d24", (236, 236), MediaKind::RoundDieCut),
    media("d58", (618, 618), MediaKind::RoundDieCut),
];

impl LabelMedia {
    pub fn all() -> &'static [LabelMedia] {
        ALL_MEDIA
    }

    pub fn lookup(identifier: &str) -> Result<&'static LabelMedia> {
        ALL_MEDIA
            .iter()
            .find(|m| m.identifier == identifier)
            .ok_or_else(|| LabelError::UnknownMedia(identifier.to_string()))
    }

    pub fn geometry(&self) -> Result<LabelGeometry> {
        let (primary, secondary) = self.dots_printable;
        LabelGeometry::from_dots(primary, secondary)
    }

    pub fn is_two_color(&self) -> bool {
        self.two_color
    }
}
