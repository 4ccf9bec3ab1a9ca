// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing canvas: the base image with the ink layer on top.
//!
//! Pointer drags are forwarded to the session's ink layer, which ignores
//! them unless drawing is enabled.

use inknote::models::CanvasDimensions;
use inknote::surface::{DrawSurface, InkLayer};
use inknote::util::geometry::normalize_coordinates;
use inknote::AnnotationSession;

/// GPU textures backing the canvas, rebuilt only when their source changes.
#[derive(Default)]
pub struct CanvasTextures {
    base: Option<egui::TextureHandle>,
    ink: Option<egui::TextureHandle>,
    ink_key: Option<(u64, CanvasDimensions)>,
    /// Last saved composite and the save count it was built from
    preview: Option<(u64, egui::TextureHandle)>,
}

/// Display the canvas and route pointer input to the ink layer.
pub fn show(
    ui: &mut egui::Ui,
    textures: &mut CanvasTextures,
    session: &mut AnnotationSession<InkLayer>,
) {
    let Some(base) = session.base_image() else {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.spinner();
            ui.add_space(10.0);
            ui.label(
                egui::RichText::new("Loading image...")
                    .size(16.0)
                    .color(egui::Color32::from_gray(200)),
            );
        });
        return;
    };

    if textures.base.is_none() {
        textures.base = Some(ui.ctx().load_texture(
            "base_image",
            super::color_image(base.pixels()),
            egui::TextureOptions::LINEAR,
        ));
    }

    let dims = session.dimensions();
    let key = (session.surface().revision(), dims);
    if textures.ink_key != Some(key) {
        let raster = session.surface().render(dims);
        let image = super::color_image(&raster);
        if let Some(handle) = textures.ink.as_mut() {
            handle.set(image, egui::TextureOptions::NEAREST);
        } else {
            textures.ink = Some(ui.ctx().load_texture(
                "ink_layer",
                image,
                egui::TextureOptions::NEAREST,
            ));
        }
        textures.ink_key = Some(key);
    }

    let size = egui::vec2(dims.width() as f32, dims.height() as f32);
    let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
    let rect = response.rect;
    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));

    // Base stretched to the canvas, ink in the same rectangle on top
    for texture in [&textures.base, &textures.ink].into_iter().flatten() {
        painter.image(texture.id(), rect, uv, egui::Color32::WHITE);
    }
    painter.rect_stroke(rect, 4.0, egui::Stroke::new(2.0, egui::Color32::from_gray(160)));

    let to_point = |pos: egui::Pos2| {
        normalize_coordinates(
            (pos.x - rect.min.x) as f64,
            (pos.y - rect.min.y) as f64,
            dims,
        )
    };

    let ink = session.surface_mut();
    if response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            ink.begin_stroke(to_point(pos));
        }
    } else if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            ink.extend_stroke(to_point(pos));
        }
    }
    if response.drag_stopped() {
        ink.end_stroke();
    }
    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            if ink.begin_stroke(to_point(pos)) {
                ink.end_stroke();
            }
        }
    }
}

/// Collapsible view of the last saved composite, shown under the canvas.
pub fn show_preview(
    ui: &mut egui::Ui,
    textures: &mut CanvasTextures,
    session: &AnnotationSession<InkLayer>,
) {
    let Some(composite) = session.composite() else {
        return;
    };

    let saves = session.save_count();
    if textures.preview.as_ref().map(|(built, _)| *built) != Some(saves) {
        match composite.decode() {
            Ok(pixels) => {
                let texture = ui.ctx().load_texture(
                    "composite_preview",
                    super::color_image(&pixels),
                    egui::TextureOptions::LINEAR,
                );
                textures.preview = Some((saves, texture));
            }
            Err(e) => {
                log::error!("Failed to decode composite preview: {}", e);
                textures.preview = None;
                return;
            }
        }
    }

    let Some((_, ref texture)) = textures.preview else {
        return;
    };
    ui.add_space(8.0);
    egui::CollapsingHeader::new("Combined image")
        .default_open(true)
        .show(ui, |ui| {
            let size = egui::vec2(composite.width() as f32, composite.height() as f32);
            ui.image((texture.id(), size));
        });
}
