// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Text notes attached to an annotation session.

use super::palette::PaletteColor;
use crate::error::SessionError;
use serde::{Deserialize, Serialize};

/// A committed note. Immutable once created.
///
/// Deserialization goes through [`Note::new`], so blank text is rejected
/// on every read path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNote")]
pub struct Note {
    text: String,
    color: PaletteColor,
}

/// Wire shape of a note before validation.
#[derive(Deserialize)]
struct RawNote {
    text: String,
    color: PaletteColor,
}

impl TryFrom<RawNote> for Note {
    type Error = SessionError;

    fn try_from(raw: RawNote) -> Result<Self, Self::Error> {
        Note::new(raw.text, raw.color).ok_or(SessionError::EmptyNote)
    }
}

impl Note {
    /// Create a note, or `None` if the text is blank.
    pub fn new(text: impl Into<String>, color: PaletteColor) -> Option<Self> {
        let text = text.into();
        if is_blank(&text) {
            return None;
        }
        Some(Self { text, color })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> PaletteColor {
        self.color
    }

    /// Display label for the note at `index` in its list ("Note 1: ...").
    pub fn label(&self, index: usize) -> String {
        format!("Note {}: {}", index + 1, self.text)
    }
}

/// Whether `text` is empty or whitespace only.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
