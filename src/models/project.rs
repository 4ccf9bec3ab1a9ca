// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Exported project description.
//!
//! Written next to an exported composite so the notes travel with the
//! flattened image on disk.

use super::note::Note;
use serde::{Deserialize, Serialize};

/// Sidecar data for an exported composite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectData {
    pub image_file: String,
    pub image_width: u32,
    pub image_height: u32,
    pub notes: Vec<Note>,
}

impl ProjectData {
    /// Create a project description for the given image file and dimensions.
    pub fn new(image_file: String, image_width: u32, image_height: u32, notes: Vec<Note>) -> Self {
        Self {
            image_file,
            image_width,
            image_height,
            notes,
        }
    }
}
