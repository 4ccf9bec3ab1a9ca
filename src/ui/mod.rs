// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the INKNOTE application.

pub mod canvas;
pub mod notes;
pub mod results;
pub mod toolbar;

use inknote::models::{Note, PaletteColor};

/// egui color for a palette entry.
pub fn color32(color: PaletteColor) -> egui::Color32 {
    let [r, g, b, a] = color.rgba();
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Convert an RGBA raster into an egui image.
pub fn color_image(pixels: &image::RgbaImage) -> egui::ColorImage {
    let size = [pixels.width() as usize, pixels.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, pixels.as_raw())
}

/// Row of color swatches. Returns the swatch clicked this frame, if any.
pub fn palette_row(ui: &mut egui::Ui, selected: PaletteColor) -> Option<PaletteColor> {
    let mut picked = None;
    ui.horizontal(|ui| {
        for color in PaletteColor::ALL {
            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(22.0, 22.0), egui::Sense::click());
            let painter = ui.painter();
            painter.circle_filled(rect.center(), 9.0, color32(color));
            let ring = if color == selected {
                egui::Stroke::new(2.5, egui::Color32::WHITE)
            } else {
                egui::Stroke::new(1.0, egui::Color32::GRAY)
            };
            painter.circle_stroke(rect.center(), 10.0, ring);

            if response.on_hover_text(color.name()).clicked() {
                picked = Some(color);
            }
        }
    });
    picked
}

/// Ordered list of notes, each framed in its own color.
pub fn note_list(ui: &mut egui::Ui, notes: &[Note]) {
    if notes.is_empty() {
        ui.label(egui::RichText::new("No notes yet").italics().weak());
        return;
    }

    for (index, note) in notes.iter().enumerate() {
        let color = color32(note.color());
        egui::Frame::none()
            .stroke(egui::Stroke::new(2.0, color))
            .rounding(6.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new(note.label(index)).color(color));
            });
        ui.add_space(4.0);
    }
}
