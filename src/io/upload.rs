// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Destination for saved composites.
//!
//! Stands in for a remote backend (upload the image, record its metadata).
//! The default sink only logs.

use crate::compositor::CompositedImage;
use crate::models::Note;
use anyhow::Result;

/// Receives every composite the user saves.
pub trait SaveSink {
    fn save(&mut self, composite: &CompositedImage, notes: &[Note]) -> Result<()>;
}

/// Sink that logs what would be uploaded.
#[derive(Debug, Default)]
pub struct LogSink {
    saved: usize,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of composites received so far.
    pub fn saved(&self) -> usize {
        self.saved
    }
}

impl SaveSink for LogSink {
    fn save(&mut self, composite: &CompositedImage, notes: &[Note]) -> Result<()> {
        self.saved += 1;
        log::info!(
            "Annotated image saved: {}x{}, {} bytes, {} notes",
            composite.width(),
            composite.height(),
            composite.png_bytes().len(),
            notes.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn test_log_sink_counts_saves() {
        let mut sink = LogSink::new();
        let composite = CompositedImage::encode(&RgbaImage::new(2, 2)).unwrap();
        sink.save(&composite, &[]).unwrap();
        sink.save(&composite, &[]).unwrap();
        assert_eq!(sink.saved(), 2);
    }
}
