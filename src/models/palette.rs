// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Fixed color palette shared by ink strokes and notes.

use crate::error::SessionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the selectable palette colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteColor {
    #[default]
    Black,
    Red,
    Blue,
    Green,
    Yellow,
}

/// RGBA values indexed by discriminant. Matches the CSS named colors.
const RGBA_TABLE: [[u8; 4]; 5] = [
    [0, 0, 0, 255],
    [255, 0, 0, 255],
    [0, 0, 255, 255],
    [0, 128, 0, 255],
    [255, 255, 0, 255],
];

const NAME_TABLE: [&str; 5] = ["black", "red", "blue", "green", "yellow"];

impl PaletteColor {
    /// Every palette entry in display order.
    pub const ALL: [PaletteColor; 5] = [
        PaletteColor::Black,
        PaletteColor::Red,
        PaletteColor::Blue,
        PaletteColor::Green,
        PaletteColor::Yellow,
    ];

    /// Lowercase name, also used as the serialized form.
    pub fn name(self) -> &'static str {
        NAME_TABLE[self as usize]
    }

    /// Opaque RGBA value for rendering.
    pub fn rgba(self) -> [u8; 4] {
        RGBA_TABLE[self as usize]
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteColor {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PaletteColor::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SessionError::InvalidColor(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_palette_names() {
        assert_eq!("red".parse::<PaletteColor>().unwrap(), PaletteColor::Red);
        assert_eq!(" Yellow ".parse::<PaletteColor>().unwrap(), PaletteColor::Yellow);
        for color in PaletteColor::ALL {
            assert_eq!(color.name().parse::<PaletteColor>().unwrap(), color);
        }
    }

    #[test]
    fn test_reject_unknown_color() {
        let err = "purple".parse::<PaletteColor>().unwrap_err();
        assert!(matches!(err, SessionError::InvalidColor(ref name) if name == "purple"));
        assert!("#ff0000".parse::<PaletteColor>().is_err());
        assert!("".parse::<PaletteColor>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&PaletteColor::Green).unwrap();
        assert_eq!(json, "\"green\"");
        let parsed: PaletteColor = serde_json::from_str("\"blue\"").unwrap();
        assert_eq!(parsed, PaletteColor::Blue);
    }

    #[test]
    fn test_lookup_is_opaque() {
        for color in PaletteColor::ALL {
            assert_eq!(color.rgba()[3], 255);
        }
        assert_eq!(PaletteColor::Red.rgba(), [255, 0, 0, 255]);
    }
}
