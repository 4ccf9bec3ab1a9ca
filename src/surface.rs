// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Ink drawing surface.
//!
//! [`DrawSurface`] is the boundary between the session and whatever widget
//! captures pointer strokes. [`InkLayer`] is the in-crate implementation:
//! it keeps strokes in normalized coordinates and rasterizes them on demand
//! at whatever canvas size is current.

use crate::compositor::blend_over;
use crate::models::{CanvasDimensions, PaletteColor};
use crate::util::geometry::{denormalize_coordinates, Point};
use image::{Rgba, RgbaImage};

/// A surface that accumulates ink strokes and renders them as a raster.
pub trait DrawSurface {
    /// Enable or disable acceptance of pointer input.
    fn set_enabled(&mut self, enabled: bool);

    fn is_enabled(&self) -> bool;

    /// Color used by strokes started after this call.
    fn set_color(&mut self, color: PaletteColor);

    /// Render the ink on a transparent raster of the given size.
    fn render(&self, dims: CanvasDimensions) -> RgbaImage;
}

/// A single free-hand stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct InkStroke {
    pub color: PaletteColor,
    pub points: Vec<Point>,
}

/// Stroke-accumulating ink raster.
#[derive(Debug, Clone)]
pub struct InkLayer {
    enabled: bool,
    color: PaletteColor,
    brush_radius: f32,
    strokes: Vec<InkStroke>,
    active: Option<InkStroke>,
    revision: u64,
}

impl InkLayer {
    /// Create a disabled, empty layer drawing with a brush of `brush_radius` pixels.
    pub fn new(brush_radius: f32) -> Self {
        Self {
            enabled: false,
            color: PaletteColor::default(),
            brush_radius: brush_radius.max(0.5),
            strokes: Vec::new(),
            active: None,
            revision: 0,
        }
    }

    /// Start a stroke at `point`. Ignored (returns false) while disabled.
    pub fn begin_stroke(&mut self, point: Point) -> bool {
        if !self.enabled {
            return false;
        }
        self.finish_active();
        self.active = Some(InkStroke {
            color: self.color,
            points: vec![point],
        });
        self.revision += 1;
        true
    }

    /// Extend the stroke in progress, if any.
    pub fn extend_stroke(&mut self, point: Point) {
        if !self.enabled {
            return;
        }
        if let Some(stroke) = &mut self.active {
            if stroke.points.last() != Some(&point) {
                stroke.points.push(point);
                self.revision += 1;
            }
        }
    }

    /// Finish the stroke in progress, if any.
    pub fn end_stroke(&mut self) {
        self.finish_active();
    }

    /// Completed strokes in drawing order.
    pub fn strokes(&self) -> &[InkStroke] {
        &self.strokes
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty() && self.active.is_none()
    }

    /// Counter bumped whenever the rendered output would change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn finish_active(&mut self) {
        if let Some(stroke) = self.active.take() {
            log::debug!("Finished {} stroke with {} points", stroke.color, stroke.points.len());
            self.strokes.push(stroke);
        }
    }
}

impl Default for InkLayer {
    fn default() -> Self {
        Self::new(2.0)
    }
}

impl DrawSurface for InkLayer {
    fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.finish_active();
        }
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_color(&mut self, color: PaletteColor) {
        self.color = color;
    }

    fn render(&self, dims: CanvasDimensions) -> RgbaImage {
        let mut raster = RgbaImage::new(dims.width(), dims.height());
        for stroke in self.strokes.iter().chain(self.active.iter()) {
            draw_stroke(&mut raster, stroke, dims, self.brush_radius);
        }
        raster
    }
}

fn draw_stroke(img: &mut RgbaImage, stroke: &InkStroke, dims: CanvasDimensions, radius: f32) {
    let color = Rgba(stroke.color.rgba());
    let pixels: Vec<(f32, f32)> = stroke
        .points
        .iter()
        .map(|p| {
            let (x, y) = denormalize_coordinates(p, dims);
            (x as f32, y as f32)
        })
        .collect();

    match pixels.as_slice() {
        [] => {}
        [single] => draw_circle(img, *single, radius, color),
        _ => {
            for segment in pixels.windows(2) {
                draw_line(img, segment[0], segment[1], radius, color);
            }
        }
    }
}

fn blend_pixel(img: &mut RgbaImage, x: u32, y: u32, color: Rgba<u8>) {
    let dst = img.get_pixel_mut(x, y);
    dst.0 = blend_over(dst.0, color.0);
}

fn draw_circle(img: &mut RgbaImage, center: (f32, f32), radius: f32, color: Rgba<u8>) {
    let radius_sq = radius * radius;
    let width = img.width() as i64;
    let height = img.height() as i64;
    let min_x = ((center.0 - radius).floor() as i64).max(0);
    let max_x = ((center.0 + radius).ceil() as i64).min(width - 1);
    let min_y = ((center.1 - radius).floor() as i64).max(0);
    let max_y = ((center.1 + radius).ceil() as i64).min(height - 1);
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let dx = x as f32 + 0.5 - center.0;
            let dy = y as f32 + 0.5 - center.1;
            if dx * dx + dy * dy <= radius_sq {
                blend_pixel(img, x as u32, y as u32, color);
            }
        }
    }
}

fn draw_line(img: &mut RgbaImage, start: (f32, f32), end: (f32, f32), radius: f32, color: Rgba<u8>) {
    let dx = end.0 - start.0;
    let dy = end.1 - start.1;
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as i32;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        draw_circle(img, (start.0 + dx * t, start.1 + dy * t), radius, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opaque_pixels(img: &RgbaImage) -> usize {
        img.pixels().filter(|p| p.0[3] > 0).count()
    }

    #[test]
    fn test_strokes_ignored_while_disabled() {
        let mut layer = InkLayer::default();
        assert!(!layer.begin_stroke(Point::new(0.5, 0.5)));
        layer.extend_stroke(Point::new(0.6, 0.6));
        layer.end_stroke();
        assert!(layer.is_empty());
        assert_eq!(opaque_pixels(&layer.render(CanvasDimensions::new(50, 50))), 0);
    }

    #[test]
    fn test_stroke_uses_color_at_start() {
        let mut layer = InkLayer::default();
        layer.set_enabled(true);
        layer.set_color(PaletteColor::Red);
        layer.begin_stroke(Point::new(0.1, 0.5));
        layer.extend_stroke(Point::new(0.9, 0.5));
        layer.end_stroke();
        layer.set_color(PaletteColor::Blue);

        assert_eq!(layer.strokes().len(), 1);
        assert_eq!(layer.strokes()[0].color, PaletteColor::Red);

        let raster = layer.render(CanvasDimensions::new(100, 20));
        assert_eq!(raster.get_pixel(50, 10).0, [255, 0, 0, 255]);
        assert_eq!(raster.get_pixel(50, 0).0[3], 0);
    }

    #[test]
    fn test_disabling_finishes_active_stroke() {
        let mut layer = InkLayer::default();
        layer.set_enabled(true);
        layer.begin_stroke(Point::new(0.2, 0.2));
        layer.set_enabled(false);
        assert_eq!(layer.strokes().len(), 1);
        layer.extend_stroke(Point::new(0.8, 0.8));
        assert_eq!(layer.strokes()[0].points.len(), 1);
    }

    #[test]
    fn test_single_point_draws_dot() {
        let mut layer = InkLayer::new(3.0);
        layer.set_enabled(true);
        layer.begin_stroke(Point::new(0.5, 0.5));
        layer.end_stroke();
        let raster = layer.render(CanvasDimensions::new(40, 40));
        assert!(raster.get_pixel(20, 20).0[3] > 0);
        assert!(opaque_pixels(&raster) < 60);
    }

    #[test]
    fn test_render_follows_canvas_size() {
        let mut layer = InkLayer::default();
        layer.set_enabled(true);
        layer.begin_stroke(Point::new(0.0, 0.5));
        layer.extend_stroke(Point::new(1.0, 0.5));
        layer.end_stroke();

        let small = layer.render(CanvasDimensions::new(100, 50));
        let large = layer.render(CanvasDimensions::new(400, 200));
        assert_eq!(small.dimensions(), (100, 50));
        assert_eq!(large.dimensions(), (400, 200));
        assert!(small.get_pixel(50, 25).0[3] > 0);
        assert!(large.get_pixel(200, 100).0[3] > 0);
    }

    #[test]
    fn test_revision_tracks_changes() {
        let mut layer = InkLayer::default();
        let start = layer.revision();
        layer.set_enabled(true);
        layer.begin_stroke(Point::new(0.1, 0.1));
        layer.extend_stroke(Point::new(0.1, 0.1));
        let after_begin = layer.revision();
        assert!(after_begin > start);
        layer.extend_stroke(Point::new(0.2, 0.2));
        assert!(layer.revision() > after_begin);
    }
}
