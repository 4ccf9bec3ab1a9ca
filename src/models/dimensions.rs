// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Canvas dimensions derived from the viewport.

/// Size of the drawing canvas and of every composite produced from it.
///
/// Both sides are always at least one pixel. The pair is `Copy` and is
/// only ever replaced whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasDimensions {
    width: u32,
    height: u32,
}

impl CanvasDimensions {
    /// Create dimensions, clamping each side to at least 1.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Derive canvas dimensions as a fraction of the viewport size.
    pub fn from_viewport(viewport_width: f32, viewport_height: f32, fraction: [f32; 2]) -> Self {
        Self::new(
            scaled_side(viewport_width, fraction[0]),
            scaled_side(viewport_height, fraction[1]),
        )
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

fn scaled_side(side: f32, fraction: f32) -> u32 {
    let scaled = (side * fraction).round();
    if scaled.is_finite() && scaled >= 1.0 {
        scaled.min(u32::MAX as f32) as u32
    } else {
        1
    }
}
