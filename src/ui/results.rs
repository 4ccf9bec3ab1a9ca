// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Results view: the saved composite and notes read from the handoff.

use inknote::models::SessionSnapshot;

/// State of the results view, built once when the view is entered.
pub struct ResultsView {
    snapshot: SessionSnapshot,
    texture: Option<egui::TextureHandle>,
}

impl ResultsView {
    pub fn new(snapshot: SessionSnapshot) -> Self {
        Self {
            snapshot,
            texture: None,
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(egui::RichText::new("Final Result").size(28.0));
        });
        ui.add_space(10.0);

        if self.snapshot.is_empty() {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("Nothing to display yet. Save a combined image first.")
                        .color(egui::Color32::from_gray(180)),
                );
            });
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            if let Some(ref composite) = self.snapshot.composite {
                if self.texture.is_none() {
                    match composite.decode() {
                        Ok(pixels) => {
                            self.texture = Some(ui.ctx().load_texture(
                                "result_composite",
                                super::color_image(&pixels),
                                egui::TextureOptions::LINEAR,
                            ));
                        }
                        Err(e) => log::error!("Failed to decode composite: {}", e),
                    }
                }

                if let Some(ref texture) = self.texture {
                    let width = ui.available_width() * 0.8;
                    let aspect = composite.height() as f32 / composite.width() as f32;
                    ui.vertical_centered(|ui| {
                        ui.image((texture.id(), egui::vec2(width, width * aspect)));
                    });
                }
            }

            ui.add_space(10.0);
            ui.label(egui::RichText::new("Saved Notes:").strong().size(18.0));
            super::note_list(ui, &self.snapshot.notes);
        });
    }
}
