// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! Strokes are stored in normalized coordinates so they survive canvas
//! resizes. These helpers convert between pixel and normalized space.

use crate::models::CanvasDimensions;
use serde::{Deserialize, Serialize};

/// A 2D point with normalized coordinates (0.0 to 1.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Convert pixel coordinates to normalized coordinates, clamped to the canvas.
pub fn normalize_coordinates(pixel_x: f64, pixel_y: f64, dims: CanvasDimensions) -> Point {
    Point {
        x: (pixel_x / dims.width() as f64).clamp(0.0, 1.0),
        y: (pixel_y / dims.height() as f64).clamp(0.0, 1.0),
    }
}

/// Convert normalized coordinates to pixel coordinates.
pub fn denormalize_coordinates(point: &Point, dims: CanvasDimensions) -> (f64, f64) {
    (point.x * dims.width() as f64, point.y * dims.height() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_denormalize_roundtrip() {
        let dims = CanvasDimensions::new(1920, 1080);
        let pixel_x = 960.0;
        let pixel_y = 540.0;

        let normalized = normalize_coordinates(pixel_x, pixel_y, dims);
        let (denorm_x, denorm_y) = denormalize_coordinates(&normalized, dims);

        assert!((denorm_x - pixel_x).abs() < 0.0001);
        assert!((denorm_y - pixel_y).abs() < 0.0001);
    }

    #[test]
    fn test_normalize_corners() {
        let dims = CanvasDimensions::new(1920, 1080);

        // Top-left corner
        let tl = normalize_coordinates(0.0, 0.0, dims);
        assert_eq!(tl.x, 0.0);
        assert_eq!(tl.y, 0.0);

        // Bottom-right corner
        let br = normalize_coordinates(1920.0, 1080.0, dims);
        assert_eq!(br.x, 1.0);
        assert_eq!(br.y, 1.0);
    }

    #[test]
    fn test_normalize_clamps_outside_points() {
        let dims = CanvasDimensions::new(200, 100);
        let p = normalize_coordinates(-15.0, 250.0, dims);
        assert_eq!(p, Point::new(0.0, 1.0));
    }
}
